//! [MODULE D] DBC Parser — the top-level grammar loop. Dispatches on record
//! keyword; `BO_` lines open a message that subsequent `SG_` lines attach
//! to; `CM_`/`VAL_` are resolved against nodes/messages/signals already
//! seen (spec §4.3: "comments and value tables may appear after their
//! referenced entities"); everything else in the attribute grammar is kept
//! verbatim.

use super::{Database, VerbatimRecords};
use crate::error::{Error, Result};
use crate::parser::keyword;
use crate::parser::Parser;

impl Database {
    /// [MODULE F] `load`: parse `text` into a fresh `Database`.
    pub fn load(text: &str) -> Result<Database> {
        let mut db = Database::new();
        db.add_dbc(text)?;
        Ok(db)
    }

    /// [MODULE F] `add_dbc_file`: convenience wrapper reading `path` then
    /// delegating to [`Self::add_dbc`].
    pub fn add_dbc_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|_| Error::NotFound(path.as_ref().display().to_string()))?;
        self.add_dbc(&text)
    }

    /// [MODULE F] `add_dbc`: merge the records parsed from `text` into
    /// `self`. Duplicate node/message names are an error; the source as a
    /// whole either merges entirely or (on the first parse error) leaves
    /// `self` untouched (spec §7: "partial databases are not returned").
    pub fn add_dbc(&mut self, text: &str) -> Result<()> {
        let mut parsed = parse_source(text)?;

        for node in &parsed.nodes {
            if self.node(node.name()).is_some() {
                return Err(Error::Duplicate(node.name().to_string()));
            }
        }
        for message in &parsed.messages {
            if self.lookup_message_by_name(message.name()).is_some() {
                return Err(Error::Duplicate(message.name().to_string()));
            }
        }

        if self.version.is_empty() {
            self.version = std::mem::take(&mut parsed.version);
        }
        if self.comment.is_none() {
            self.comment = parsed.comment.take();
        }
        self.nodes.append(&mut parsed.nodes);
        self.messages.append(&mut parsed.messages);
        self.verbatim.ns = self.verbatim.ns.take().or(parsed.verbatim.ns.take());
        self.verbatim.bs = self.verbatim.bs.take().or(parsed.verbatim.bs.take());
        self.verbatim.ba_def.append(&mut parsed.verbatim.ba_def);
        self.verbatim
            .ba_def_def
            .append(&mut parsed.verbatim.ba_def_def);
        self.verbatim.ba.append(&mut parsed.verbatim.ba);
        self.verbatim.ev.append(&mut parsed.verbatim.ev);
        self.verbatim.tail.append(&mut parsed.verbatim.tail);
        Ok(())
    }

    fn lookup_message_by_name(&self, name: &str) -> Option<&crate::message::Message> {
        self.messages.iter().find(|m| m.name() == name)
    }
}

/// Parses a whole DBC source into a standalone `Database`, without
/// consulting or mutating any existing one.
fn parse_source(text: &str) -> Result<Database> {
    let mut db = Database::new();
    let mut parser = Parser::new(text);
    parser.skip_newlines_and_spaces();

    while !parser.is_empty() {
        if parser.starts_with(keyword::VERSION) {
            parser.expect(keyword::VERSION)?;
            parser.skip_spaces();
            db.version = parser.parse_quoted_string()?;
        } else if parser.starts_with(keyword::BU_) {
            parser.expect(keyword::BU_)?;
            parser.skip_spaces();
            parser.expect(":")?;
            loop {
                parser.skip_spaces();
                match parser.parse_identifier() {
                    Ok(name) => db.nodes.push(crate::node::Node::new(name)),
                    Err(_) => break,
                }
            }
        } else if parser.starts_with(keyword::BO_) && !parser.starts_with(keyword::BO_TX_BU_) {
            let mut message = crate::message::Message::parse_header(&mut parser)?;
            parser.skip_newlines_and_spaces();
            while parser.starts_with(keyword::SG_) {
                let signal = crate::signal::Signal::parse(&mut parser)?;
                message.add_signal(signal);
                parser.skip_newlines_and_spaces();
            }
            db.messages.push(message);
            continue;
        } else if parser.starts_with(keyword::CM_) {
            parser.expect(keyword::CM_)?;
            parser.skip_spaces();
            apply_comment(&mut db, &mut parser)?;
        } else if parser.starts_with(keyword::VAL_) && !parser.starts_with(keyword::VAL_TABLE_) {
            parser.expect(keyword::VAL_)?;
            parser.skip_spaces();
            apply_val(&mut db, &mut parser)?;
        } else if parser.starts_with(keyword::NS_) {
            parser.expect(keyword::NS_)?;
            parser.skip_spaces();
            parser.expect(":")?;
            let rest = parser.capture_rest_of_line();
            let mut lines = Vec::new();
            if !rest.is_empty() {
                lines.push(rest);
            }
            parser.skip_newlines_and_spaces();
            // NS_ is followed by an indented list of symbol lines until a
            // blank/unindented record starts; capture them verbatim too.
            while !parser.is_empty() && !starts_top_level_keyword(&parser) {
                let line = parser.capture_rest_of_line();
                if !line.is_empty() {
                    lines.push(line);
                }
                parser.skip_newlines_and_spaces();
            }
            db.verbatim.ns = Some(lines.join("\n"));
            continue;
        } else if parser.starts_with(keyword::BS_) {
            parser.expect(keyword::BS_)?;
            parser.skip_spaces();
            parser.expect(":")?;
            db.verbatim.bs = Some(parser.capture_rest_of_line());
        } else if parser.starts_with(keyword::BA_DEF_DEF_) {
            parser.expect(keyword::BA_DEF_DEF_)?;
            let rest = parser.capture_until_semicolon()?;
            db.verbatim.ba_def_def.push(rest);
        } else if parser.starts_with(keyword::BA_DEF_) {
            parser.expect(keyword::BA_DEF_)?;
            let rest = parser.capture_until_semicolon()?;
            db.verbatim.ba_def.push(rest);
        } else if parser.starts_with(keyword::BA_) {
            parser.expect(keyword::BA_)?;
            let rest = parser.capture_until_semicolon()?;
            db.verbatim.ba.push(rest);
        } else if parser.starts_with(keyword::EV_) {
            parser.expect(keyword::EV_)?;
            let rest = parser.capture_until_semicolon()?;
            db.verbatim.ev.push(rest);
        } else {
            // Opaque line: VAL_TABLE_, BO_TX_BU_, SIG_GROUP_, or anything
            // else the grammar doesn't interpret (spec §4.3).
            let line = parser.capture_rest_of_line();
            if !line.is_empty() {
                db.verbatim.tail.push(line);
            }
        }
        parser.skip_newlines_and_spaces();
    }

    Ok(db)
}

fn starts_top_level_keyword(parser: &Parser) -> bool {
    const TOP_LEVEL: &[&str] = &[
        keyword::VERSION,
        keyword::BU_,
        keyword::BO_,
        keyword::CM_,
        keyword::VAL_,
        keyword::BA_DEF_DEF_,
        keyword::BA_DEF_,
        keyword::BA_,
        keyword::EV_,
        keyword::BS_,
        keyword::VAL_TABLE_,
        keyword::BO_TX_BU_,
        keyword::SIG_GROUP_,
    ];
    TOP_LEVEL.iter().any(|kw| parser.starts_with(kw))
}

/// `CM_` target forms: `CM_ "db text";`, `CM_ BU_ name "text";`,
/// `CM_ BO_ id "text";`, `CM_ SG_ id signame "text";`.
fn apply_comment(db: &mut Database, parser: &mut Parser) -> Result<()> {
    if parser.starts_with("\"") {
        let text = parser.parse_quoted_string()?;
        parser.skip_spaces();
        parser.expect(";")?;
        db.comment = Some(text);
    } else if parser.accept(keyword::BU_) {
        parser.skip_spaces();
        let name = parser.parse_identifier()?;
        parser.skip_spaces();
        let text = parser.parse_quoted_string()?;
        parser.skip_spaces();
        parser.expect(";")?;
        let node = db
            .nodes
            .iter_mut()
            .find(|n| n.name() == name)
            .ok_or_else(|| Error::NotFound(name.clone()))?;
        node.set_comment(text);
    } else if parser.accept(keyword::BO_) {
        parser.skip_spaces();
        let raw_id = parser.parse_u64()? as u32;
        parser.skip_spaces();
        let text = parser.parse_quoted_string()?;
        parser.skip_spaces();
        parser.expect(";")?;
        let message = find_message_by_raw_id_mut(db, raw_id)
            .ok_or_else(|| Error::NotFound(raw_id.to_string()))?;
        message.comment = Some(text);
    } else if parser.accept(keyword::SG_) {
        parser.skip_spaces();
        let raw_id = parser.parse_u64()? as u32;
        parser.skip_spaces();
        let signame = parser.parse_identifier()?;
        parser.skip_spaces();
        let text = parser.parse_quoted_string()?;
        parser.skip_spaces();
        parser.expect(";")?;
        let message = find_message_by_raw_id_mut(db, raw_id)
            .ok_or_else(|| Error::NotFound(raw_id.to_string()))?;
        let signal = message
            .signals
            .iter_mut()
            .find(|s| s.name() == signame)
            .ok_or_else(|| Error::NotFound(signame.clone()))?;
        signal.set_comment(text);
    } else {
        return Err(Error::expected(
            crate::error::messages::CM_UNKNOWN_TARGET.to_string(),
            parser.line(),
            parser.column(),
        ));
    }
    Ok(())
}

/// `VAL_ id signame k "label" k "label" … ;`
fn apply_val(db: &mut Database, parser: &mut Parser) -> Result<()> {
    let raw_id = parser.parse_u64()? as u32;
    parser.skip_spaces();
    let signame = parser.parse_identifier()?;
    parser.skip_spaces();

    let message = find_message_by_raw_id_mut(db, raw_id)
        .ok_or_else(|| Error::NotFound(raw_id.to_string()))?;
    let signal = message
        .signals
        .iter_mut()
        .find(|s| s.name() == signame)
        .ok_or_else(|| {
            Error::expected(
                crate::error::messages::VAL_UNKNOWN_SIGNAL.to_string(),
                parser.line(),
                parser.column(),
            )
        })?;

    let mut choices = crate::choices::Choices::new();
    loop {
        parser.skip_spaces();
        if parser.accept(";") {
            break;
        }
        let raw = parser.parse_i64()?;
        parser.skip_spaces();
        let label = parser.parse_quoted_string()?;
        choices.insert(raw, label);
    }
    signal.set_choices(choices);
    Ok(())
}

fn find_message_by_raw_id_mut(db: &mut Database, raw_id: u32) -> Option<&mut crate::message::Message> {
    db.messages.iter_mut().find(|m| m.raw_id() == raw_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOOBAR: &str = r#"VERSION "2.0"

NS_ :
    NS_DESC_

BS_:

BU_: FOO BAR

BO_ 2147558193 Foo: 8 FOO
 SG_ Foo m1 : 7|12@0- (0.01,250) [229.53|270.47] "degK" BAR

CM_ BU_ BAR "fam";
CM_ BO_ 2147558193 "Foo.";
VAL_ 2147558193 Foo -1 "Foo" -2 "Fie" ;
"#;

    #[test]
    fn parses_foobar_style_source() {
        let db = Database::load(FOOBAR).unwrap();
        assert_eq!(db.version(), "2.0");
        assert_eq!(db.nodes().len(), 2);
        assert_eq!(db.node("BAR").unwrap().comment(), Some("fam"));
        assert_eq!(db.node("FOO").unwrap().comment(), None);

        let message = db.messages().iter().find(|m| m.name() == "Foo").unwrap();
        assert!(message.is_extended());
        assert_eq!(message.frame_id(), 0x12331);
        assert_eq!(message.comment(), Some("Foo."));

        let signal = message.signal("Foo").unwrap();
        assert_eq!(signal.multiplexer_id(), Some(1));
        let choices = signal.choices().unwrap();
        assert_eq!(choices.label_for(-1), Some("Foo"));
        assert_eq!(choices.label_for(-2), Some("Fie"));
    }

    #[test]
    fn duplicate_node_names_on_merge_are_rejected() {
        let mut db = Database::load("BU_: FOO\n").unwrap();
        let err = db.add_dbc("BU_: FOO\n").unwrap_err();
        assert!(matches!(err, Error::Duplicate(_)));
    }

    #[test]
    fn unresolved_comment_target_errors() {
        let err = Database::load("CM_ BU_ GHOST \"x\";\n").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
