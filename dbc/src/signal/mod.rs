//! A `SG_` entry: a bit-packed scalar field within a message's payload.

mod codec;
mod parse;
mod serialize;

pub(crate) use codec::round_half_to_even;
pub(crate) use serialize::escape_string;

use std::fmt;

use crate::byte_order::ByteOrder;
use crate::choices::Choices;
use crate::parser::keyword::UNASSIGNED_NODE;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub(crate) name: String,
    pub(crate) start_bit: u8,
    pub(crate) length: u8,
    pub(crate) byte_order: ByteOrder,
    pub(crate) is_signed: bool,
    pub(crate) scale: f64,
    pub(crate) offset: f64,
    pub(crate) minimum: f64,
    pub(crate) maximum: f64,
    pub(crate) unit: String,
    pub(crate) is_multiplexer: bool,
    pub(crate) multiplexer_id: Option<u32>,
    pub(crate) choices: Option<Choices>,
    pub(crate) receivers: Vec<String>,
    pub(crate) comment: Option<String>,
}

impl Signal {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        start_bit: u8,
        length: u8,
        byte_order: ByteOrder,
        is_signed: bool,
        scale: f64,
        offset: f64,
    ) -> Self {
        Signal {
            name: name.into(),
            start_bit,
            length,
            byte_order,
            is_signed,
            scale,
            offset,
            minimum: 0.0,
            maximum: 0.0,
            unit: String::new(),
            is_multiplexer: false,
            multiplexer_id: None,
            choices: None,
            receivers: Vec::new(),
            comment: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_bit(&self) -> u8 {
        self.start_bit
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn is_signed(&self) -> bool {
        self.is_signed
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn is_multiplexer(&self) -> bool {
        self.is_multiplexer
    }

    pub fn multiplexer_id(&self) -> Option<u32> {
        self.multiplexer_id
    }

    pub fn choices(&self) -> Option<&Choices> {
        self.choices.as_ref()
    }

    pub fn receivers(&self) -> &[String] {
        &self.receivers
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_range(&mut self, minimum: f64, maximum: f64) {
        self.minimum = minimum;
        self.maximum = maximum;
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
    }

    pub fn set_multiplexer(&mut self, is_multiplexer: bool) {
        self.is_multiplexer = is_multiplexer;
    }

    pub fn set_multiplexer_id(&mut self, id: u32) {
        self.multiplexer_id = Some(id);
    }

    pub fn set_choices(&mut self, choices: Choices) {
        self.choices = Some(choices);
    }

    pub fn set_receivers(&mut self, receivers: Vec<String>) {
        self.receivers = receivers;
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = Some(comment.into());
    }

    /// [MODULE B] Scalar Codec — encode, per spec §4.2.
    pub fn encode(&self, value: &Value) -> crate::error::Result<u64> {
        codec::encode(self, value)
    }

    /// [MODULE B] Scalar Codec — decode, per spec §4.2.
    pub fn decode(&self, raw: u64) -> Value {
        codec::decode(self, raw)
    }

    pub(crate) fn bit_positions(&self) -> Vec<u8> {
        crate::bitlayout::bit_positions(self.start_bit, self.length, self.byte_order)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = match self.byte_order {
            ByteOrder::LittleEndian => "little_endian",
            ByteOrder::BigEndian => "big_endian",
        };
        write!(
            f,
            "signal({:?}, {}, {}, {:?}, {}, {}, {}, {}, {}, {:?}, {}, {:?}, {:?})",
            self.name,
            self.start_bit,
            self.length,
            order,
            self.is_signed,
            self.scale,
            self.offset,
            self.minimum,
            self.maximum,
            self.unit,
            self.is_multiplexer,
            self.multiplexer_id,
            self.comment,
        )
    }
}

/// `true` if `name` is the sentinel for "no node assigned" (spec §3 invariant 3).
pub fn is_unassigned_node(name: &str) -> bool {
    name == UNASSIGNED_NODE
}
