//! [MODULE E] DBC Emitter — renders a `BO_` header plus its `SG_` lines.

use super::Message;

impl Message {
    pub(crate) fn write_dbc(&self, out: &mut String) {
        let raw_id = self.raw_id();
        let sender = self
            .senders
            .first()
            .map(String::as_str)
            .unwrap_or(crate::parser::keyword::UNASSIGNED_NODE);
        out.push_str(&format!(
            "BO_ {} {}: {} {}\n",
            raw_id, self.name, self.length, sender
        ));
        for signal in &self.signals {
            signal.write_dbc(out);
        }
    }
}
