//! [MODULE E] DBC Emitter — renders a `Database` back to canonical text in
//! the section order of spec §4.4: VERSION, NS_, BS_, BU_, messages (each
//! with its signals), CM_ (database/node/message/signal order), BA_DEF_,
//! BA_DEF_DEF_, BA_, VAL_, then the verbatim tail.

use super::Database;
use crate::signal::escape_string;

impl Database {
    /// [MODULE F] `as_dbc`: emit `self` back to DBC text.
    pub fn as_dbc(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("VERSION \"{}\"\n\n", escape_string(&self.version)));

        if let Some(ns) = &self.verbatim.ns {
            out.push_str("NS_ :\n");
            for line in ns.lines() {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }

        if let Some(bs) = &self.verbatim.bs {
            out.push_str(&format!("BS_:{bs}\n\n"));
        }

        out.push_str("BU_:");
        for node in &self.nodes {
            out.push(' ');
            out.push_str(node.name());
        }
        out.push_str("\n\n");

        for message in &self.messages {
            message.write_dbc(&mut out);
            out.push('\n');
        }

        if let Some(comment) = &self.comment {
            out.push_str(&format!("CM_ \"{}\";\n", escape_string(comment)));
        }
        for node in &self.nodes {
            if let Some(comment) = node.comment() {
                out.push_str(&format!(
                    "CM_ BU_ {} \"{}\";\n",
                    node.name(),
                    escape_string(comment)
                ));
            }
        }
        for message in &self.messages {
            if let Some(comment) = message.comment() {
                out.push_str(&format!(
                    "CM_ BO_ {} \"{}\";\n",
                    message.raw_id(),
                    escape_string(comment)
                ));
            }
            for signal in message.signals() {
                if let Some(comment) = signal.comment() {
                    out.push_str(&format!(
                        "CM_ SG_ {} {} \"{}\";\n",
                        message.raw_id(),
                        signal.name(),
                        escape_string(comment)
                    ));
                }
            }
        }
        out.push('\n');

        for entry in &self.verbatim.ba_def {
            out.push_str(&format!("BA_DEF_ {entry};\n"));
        }
        for entry in &self.verbatim.ba_def_def {
            out.push_str(&format!("BA_DEF_DEF_ {entry};\n"));
        }
        for entry in &self.verbatim.ba {
            out.push_str(&format!("BA_ {entry};\n"));
        }

        for message in &self.messages {
            for signal in message.signals() {
                if let Some(choices) = signal.choices() {
                    out.push_str(&format!("VAL_ {} {}", message.raw_id(), signal.name()));
                    for (raw, label) in choices.iter() {
                        out.push_str(&format!(" {raw} \"{}\"", escape_string(label)));
                    }
                    out.push_str(" ;\n");
                }
            }
        }

        for entry in &self.verbatim.ev {
            out.push_str(&format!("EV_ {entry};\n"));
        }
        for line in &self.verbatim.tail {
            out.push_str(line);
            out.push('\n');
        }

        out
    }
}
