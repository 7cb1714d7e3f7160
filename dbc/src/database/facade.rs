//! [MODULE F] Database Facade — programmatic construction, lookup, and the
//! encode/decode entry points that dispatch into [MODULE G].

use std::collections::HashMap;

use super::Database;
use crate::error::{Error, Result};
use crate::message::Message;
use crate::node::Node;
use crate::value::Value;

/// Either a frame id or a message name; accepted by [`Database::lookup_message`].
pub enum MessageKey<'a> {
    FrameId(u32),
    Name(&'a str),
}

impl<'a> From<u32> for MessageKey<'a> {
    fn from(id: u32) -> Self {
        MessageKey::FrameId(id)
    }
}

impl<'a> From<&'a str> for MessageKey<'a> {
    fn from(name: &'a str) -> Self {
        MessageKey::Name(name)
    }
}

impl Database {
    /// [MODULE F] `add_node`: programmatic append; rejects a name already present.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.node(node.name()).is_some() {
            return Err(Error::Duplicate(node.name().to_string()));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// [MODULE F] `add_message`: programmatic append; rejects a name already present.
    pub fn add_message(&mut self, message: Message) -> Result<()> {
        if self.messages.iter().any(|m| m.name() == message.name()) {
            return Err(Error::Duplicate(message.name().to_string()));
        }
        self.messages.push(message);
        Ok(())
    }

    /// [MODULE F] `lookup_message`: by frame id or by name.
    pub fn lookup_message<'a>(&self, key: impl Into<MessageKey<'a>>) -> Result<&Message> {
        match key.into() {
            MessageKey::FrameId(id) => self
                .messages
                .iter()
                .find(|m| m.frame_id() == id)
                .ok_or_else(|| Error::NotFound(id.to_string())),
            MessageKey::Name(name) => self
                .messages
                .iter()
                .find(|m| m.name() == name)
                .ok_or_else(|| Error::NotFound(name.to_string())),
        }
    }

    /// [MODULE F] `lookup_node`: by name.
    pub fn lookup_node(&self, name: &str) -> Result<&Node> {
        self.node(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// [MODULE F]+[MODULE G] `encode_message`.
    pub fn encode_message<'a>(
        &self,
        key: impl Into<MessageKey<'a>>,
        data: &HashMap<String, Value>,
    ) -> Result<Vec<u8>> {
        self.lookup_message(key)?.encode(data)
    }

    /// [MODULE F]+[MODULE G] `decode_message`.
    pub fn decode_message<'a>(
        &self,
        key: impl Into<MessageKey<'a>>,
        bytes: &[u8],
    ) -> Result<Vec<(String, Value)>> {
        self.lookup_message(key)?.decode(bytes)
    }
}
