//! Parses a `SG_` line:
//! `SG_ name [M/m<id>] : start|len@order(+/-) (scale,offset) [min|max] "unit" receivers`.

use super::Signal;
use crate::byte_order::ByteOrder;
use crate::error::{messages, Error, Result};
use crate::parser::Parser;

impl Signal {
    pub(crate) fn parse(parser: &mut Parser) -> Result<Signal> {
        parser.expect(crate::parser::keyword::SG_)?;
        parser.skip_spaces();

        let name = parser.parse_identifier().map_err(|_| {
            Error::parse(parser.line(), parser.column(), messages::SIGNAL_NAME_EMPTY)
        })?;
        parser.skip_spaces();

        let mut is_multiplexer = false;
        let mut multiplexer_id = None;
        if parser.accept("M") {
            is_multiplexer = true;
            parser.skip_spaces();
        } else if !parser.starts_with(":") {
            // m<digits>
            parser.expect("m")?;
            let id = parser
                .parse_u64()
                .map_err(|_| Error::expected("multiplexer id", parser.line(), parser.column()))?;
            multiplexer_id = Some(id as u32);
            parser.skip_spaces();
        }

        parser.expect(":")?;
        parser.skip_spaces();

        let start_bit = parser
            .parse_u64()
            .map_err(|_| {
                Error::parse(
                    parser.line(),
                    parser.column(),
                    messages::SIGNAL_PARSE_INVALID_START_BIT,
                )
            })? as u8;
        parser.expect("|")?;
        let length = parser
            .parse_u64()
            .map_err(|_| {
                Error::parse(
                    parser.line(),
                    parser.column(),
                    messages::SIGNAL_PARSE_INVALID_LENGTH,
                )
            })? as u8;
        parser.expect("@")?;
        let order_marker = parser
            .parse_u64()
            .map_err(|_| Error::expected("byte order", parser.line(), parser.column()))?;
        let byte_order = ByteOrder::from_marker(if order_marker == 0 { b'0' } else { b'1' })
            .ok_or_else(|| Error::expected("0 or 1", parser.line(), parser.column()))?;

        let is_signed = if parser.accept("-") {
            true
        } else if parser.accept("+") {
            false
        } else {
            return Err(Error::expected("+ or -", parser.line(), parser.column()));
        };

        parser.skip_spaces();
        parser.expect("(")?;
        let scale = parser.parse_f64().map_err(|_| {
            Error::parse(
                parser.line(),
                parser.column(),
                messages::SIGNAL_PARSE_INVALID_FACTOR,
            )
        })?;
        parser.expect(",")?;
        let offset = parser.parse_f64().map_err(|_| {
            Error::parse(
                parser.line(),
                parser.column(),
                messages::SIGNAL_PARSE_INVALID_OFFSET,
            )
        })?;
        parser.expect(")")?;

        parser.skip_spaces();
        parser.expect("[")?;
        let minimum = parser.parse_f64().map_err(|_| {
            Error::parse(
                parser.line(),
                parser.column(),
                messages::SIGNAL_PARSE_INVALID_MIN,
            )
        })?;
        parser.expect("|")?;
        let maximum = parser.parse_f64().map_err(|_| {
            Error::parse(
                parser.line(),
                parser.column(),
                messages::SIGNAL_PARSE_INVALID_MAX,
            )
        })?;
        parser.expect("]")?;

        parser.skip_spaces();
        let unit = parser.parse_quoted_string()?;

        parser.skip_spaces();
        let mut receivers = Vec::new();
        loop {
            parser.skip_spaces();
            match parser.parse_identifier() {
                Ok(id) => receivers.push(id),
                Err(_) => break,
            }
            parser.skip_spaces();
            if !parser.accept(",") {
                break;
            }
        }

        let mut signal = Signal::new(name, start_bit, length, byte_order, is_signed, scale, offset);
        signal.set_range(minimum, maximum);
        signal.set_unit(unit);
        signal.set_multiplexer(is_multiplexer);
        if let Some(id) = multiplexer_id {
            signal.set_multiplexer_id(id);
        }
        signal.set_receivers(receivers);
        Ok(signal)
    }
}
