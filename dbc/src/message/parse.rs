//! Parses a `BO_` header line: `BO_ id name: len sender`.

use super::{Message, EXTENDED_ID_FLAG};
use crate::error::{messages, Error, Result};
use crate::parser::Parser;

impl Message {
    pub(crate) fn parse_header(parser: &mut Parser) -> Result<Message> {
        parser.expect(crate::parser::keyword::BO_)?;
        parser.skip_spaces();

        let raw_id = parser
            .parse_u64()
            .map_err(|_| Error::parse(parser.line(), parser.column(), messages::MESSAGE_INVALID_ID))?
            as u32;
        let extended = raw_id & EXTENDED_ID_FLAG != 0;
        let frame_id = raw_id & !EXTENDED_ID_FLAG;

        parser.skip_spaces();
        let name = parser.parse_identifier().map_err(|_| {
            Error::parse(parser.line(), parser.column(), messages::MESSAGE_NAME_EMPTY)
        })?;

        parser.skip_spaces();
        parser.expect(":")?;
        parser.skip_spaces();

        let length = parser
            .parse_u64()
            .map_err(|_| Error::parse(parser.line(), parser.column(), messages::MESSAGE_INVALID_DLC))?
            as u8;

        parser.skip_spaces();
        let sender = parser.parse_identifier().map_err(|_| {
            Error::parse(
                parser.line(),
                parser.column(),
                messages::MESSAGE_SENDER_EMPTY,
            )
        })?;

        let mut message = Message::new(frame_id, extended, name, length);
        message.add_sender(sender);
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_header() {
        let mut p = Parser::new("BO_ 256 EngineData: 8 ECM");
        let message = Message::parse_header(&mut p).unwrap();
        assert_eq!(message.frame_id(), 256);
        assert!(!message.is_extended());
        assert_eq!(message.name(), "EngineData");
        assert_eq!(message.length(), 8);
        assert_eq!(message.senders(), &["ECM".to_string()]);
    }

    #[test]
    fn extended_id_flag_is_stripped_and_recorded() {
        let raw_id: u32 = 0x8000_0000 | 0x12331;
        let text = format!("BO_ {raw_id} Foo: 8 Vector__XXX");
        let mut p = Parser::new(&text);
        let message = Message::parse_header(&mut p).unwrap();
        assert!(message.is_extended());
        assert_eq!(message.frame_id(), 0x12331);
    }
}
