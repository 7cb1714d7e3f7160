//! A `BU_` entry: a named electronic control unit.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    comment: Option<String>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            comment: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = Some(comment.into());
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.comment {
            Some(comment) => write!(f, "node({:?}, {:?})", self.name, comment),
            None => write!(f, "node({:?}, None)", self.name),
        }
    }
}
