//! A `BO_` entry: a frame definition and its signals.

mod codec;
mod parse;
mod serialize;

use std::fmt;

use crate::signal::Signal;
use crate::value::Value;

/// Top bit of the raw frame id field marks an extended (29-bit) identifier,
/// per spec §4.4 / GLOSSARY.
pub(crate) const EXTENDED_ID_FLAG: u32 = 0x8000_0000;

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub(crate) frame_id: u32,
    pub(crate) extended: bool,
    pub(crate) name: String,
    pub(crate) length: u8,
    pub(crate) senders: Vec<String>,
    pub(crate) comment: Option<String>,
    pub(crate) signals: Vec<Signal>,
}

impl Message {
    pub fn new(frame_id: u32, extended: bool, name: impl Into<String>, length: u8) -> Self {
        Message {
            frame_id,
            extended,
            name: name.into(),
            length,
            senders: Vec::new(),
            comment: None,
            signals: Vec::new(),
        }
    }

    pub fn frame_id(&self) -> u32 {
        self.frame_id
    }

    /// The id as it appears in `BO_`/`CM_`/`VAL_` records: the bare frame id
    /// with the extended-id marker bit (spec GLOSSARY) folded back in.
    pub(crate) fn raw_id(&self) -> u32 {
        if self.extended {
            self.frame_id | EXTENDED_ID_FLAG
        } else {
            self.frame_id
        }
    }

    pub fn is_extended(&self) -> bool {
        self.extended
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn senders(&self) -> &[String] {
        &self.senders
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn signal(&self, name: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.name() == name)
    }

    pub fn add_sender(&mut self, sender: impl Into<String>) {
        self.senders.push(sender.into());
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = Some(comment.into());
    }

    pub fn add_signal(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    /// `true` iff exactly one signal is the multiplex selector (spec §3:
    /// "at most one such signal per message").
    pub fn is_multiplexed(&self) -> bool {
        self.multiplexer_signal().is_some()
    }

    /// The selector signal, if this message is multiplexed.
    pub fn multiplexer_signal(&self) -> Option<&Signal> {
        self.signals.iter().find(|s| s.is_multiplexer())
    }

    /// Supplemented accessor (`original_source/tests/test_cantools.py`'s
    /// `get_multiplexer_signal_name`): the selector's name, if any.
    pub fn multiplexer_signal_name(&self) -> Option<&str> {
        self.multiplexer_signal().map(Signal::name)
    }

    /// Supplemented accessor: every signal gated on multiplexer id `mux_id`
    /// (not including the selector itself or the always-present signals).
    pub fn signals_for_multiplexer_id(&self, mux_id: u32) -> Vec<&Signal> {
        self.signals
            .iter()
            .filter(|s| s.multiplexer_id() == Some(mux_id))
            .collect()
    }

    /// [MODULE G] Message Encode.
    pub fn encode(&self, data: &std::collections::HashMap<String, Value>) -> crate::error::Result<Vec<u8>> {
        codec::encode(self, data)
    }

    /// [MODULE G] Message Decode.
    pub fn decode(&self, bytes: &[u8]) -> crate::error::Result<Vec<(String, Value)>> {
        codec::decode(self, bytes)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "message({:?}, {:#x}, {}, {}, {:?})",
            self.name, self.frame_id, self.extended, self.length, self.comment
        )
    }
}
