//! [MODULE F] Database Facade: owns nodes and messages, dispatches
//! encode/decode, and merges additional parsed sources.

mod facade;
mod parse;
mod serialize;

pub use facade::MessageKey;

use std::fmt;

use crate::message::Message;
use crate::node::Node;

/// Verbatim record buckets for the attribute/environment-variable grammar
/// this crate preserves but does not interpret (spec §4.3: "BA_…, BA_DEF_…,
/// BA_DEF_DEF_…, EV_…, NS_:, BS_: ... preserved verbatim for round-trip").
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct VerbatimRecords {
    pub(crate) ns: Option<String>,
    pub(crate) bs: Option<String>,
    pub(crate) ba_def: Vec<String>,
    pub(crate) ba_def_def: Vec<String>,
    pub(crate) ba: Vec<String>,
    pub(crate) ev: Vec<String>,
    /// Anything else unrecognised (`VAL_TABLE_`, `BO_TX_BU_`, `SIG_GROUP_`, …).
    pub(crate) tail: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Database {
    pub(crate) version: String,
    pub(crate) nodes: Vec<Node>,
    pub(crate) messages: Vec<Message>,
    pub(crate) comment: Option<String>,
    pub(crate) verbatim: VerbatimRecords,
}

impl Database {
    pub fn new() -> Self {
        Database::default()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name() == name)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "version({:?})", self.version)?;
        writeln!(f)?;
        for node in &self.nodes {
            writeln!(f, "{node}")?;
        }
        writeln!(f)?;
        for message in &self.messages {
            writeln!(f, "{message}")?;
            for signal in message.signals() {
                writeln!(f, "  {signal}")?;
            }
        }
        Ok(())
    }
}
