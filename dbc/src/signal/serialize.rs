//! [MODULE E] DBC Emitter — renders a `SG_` line back to canonical text.

use super::Signal;
use crate::byte_order::ByteOrder;

impl Signal {
    pub(crate) fn write_dbc(&self, out: &mut String) {
        out.push_str(" SG_ ");
        out.push_str(&self.name);
        if self.is_multiplexer {
            out.push_str(" M");
        } else if let Some(id) = self.multiplexer_id {
            out.push_str(&format!(" m{id}"));
        }
        out.push_str(" : ");
        out.push_str(&format!(
            "{}|{}@{}{}",
            self.start_bit,
            self.length,
            self.byte_order.marker() as char,
            if self.is_signed { '-' } else { '+' },
        ));
        out.push_str(&format!(" ({},{})", format_number(self.scale), format_number(self.offset)));
        out.push_str(&format!(
            " [{}|{}]",
            format_number(self.minimum),
            format_number(self.maximum)
        ));
        out.push_str(&format!(" \"{}\"", escape_string(&self.unit)));
        out.push(' ');
        if self.receivers.is_empty() {
            out.push_str(crate::parser::keyword::UNASSIGNED_NODE);
        } else {
            out.push_str(&self.receivers.join(","));
        }
        out.push('\n');
    }
}

/// Shared between `Signal`/`Message` serialization so `250.0` round-trips
/// as `250` the way canonical DBC text writes integral floats.
pub(crate) fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

pub(crate) fn escape_string(value: &str) -> String {
    value.replace('"', "\\\"")
}
