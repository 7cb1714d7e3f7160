//! [MODULE G] Message Encode/Decode. Resolves the active multiplex group
//! for a message and drives [MODULE B] per active signal to assemble or
//! tear down the 8-byte payload, per spec §4.6.

use std::collections::HashMap;

use super::Message;
use crate::bitlayout::{self, PAYLOAD_BYTES};
use crate::error::{Error, Result};
use crate::value::Value;

/// Signals that must be present for a given multiplexer selector value:
/// every non-multiplex signal, the selector itself, plus signals gated on
/// that id (spec §4.6 step 2).
fn active_signals<'a>(message: &'a Message, mux_id: Option<u32>) -> Vec<&'a crate::signal::Signal> {
    message
        .signals
        .iter()
        .filter(|s| match s.multiplexer_id() {
            None => true,
            Some(id) => Some(id) == mux_id,
        })
        .collect()
}

fn resolve_multiplexer_id(message: &Message, data: &HashMap<String, Value>) -> Result<Option<u32>> {
    let Some(selector) = message.multiplexer_signal() else {
        return Ok(None);
    };
    let value = data
        .get(selector.name())
        .ok_or_else(|| Error::MissingSignal(selector.name().to_string()))?;
    let raw = selector.encode(value)?;
    Ok(Some(raw as u32))
}

pub fn encode(message: &Message, data: &HashMap<String, Value>) -> Result<Vec<u8>> {
    let mux_id = resolve_multiplexer_id(message, data)?;
    let active = active_signals(message, mux_id);

    let mut payload = [0u8; PAYLOAD_BYTES];
    for signal in active {
        let value = data
            .get(signal.name())
            .ok_or_else(|| Error::MissingSignal(signal.name().to_string()))?;
        let raw = signal.encode(value)?;
        let positions = signal.bit_positions();
        bitlayout::pack_into(&mut payload, &positions, raw, signal.byte_order());
    }

    let length = message.length.clamp(0, PAYLOAD_BYTES as u8) as usize;
    Ok(payload[..length].to_vec())
}

pub fn decode(message: &Message, bytes: &[u8]) -> Result<Vec<(String, Value)>> {
    if bytes.len() < message.length as usize {
        return Err(Error::Truncated {
            expected: message.length as usize,
            got: bytes.len(),
        });
    }

    let mut payload = [0u8; PAYLOAD_BYTES];
    let n = bytes.len().min(PAYLOAD_BYTES);
    payload[..n].copy_from_slice(&bytes[..n]);

    let mux_id = match message.multiplexer_signal() {
        Some(selector) => {
            let positions = selector.bit_positions();
            let raw = bitlayout::unpack_from(&payload, &positions, selector.byte_order());
            Some(raw as u32)
        }
        None => None,
    };

    let mut out = Vec::new();
    for signal in active_signals(message, mux_id) {
        let positions = signal.bit_positions();
        let raw = bitlayout::unpack_from(&payload, &positions, signal.byte_order());
        out.push((signal.name().to_string(), signal.decode(raw)));
    }
    Ok(out)
}
