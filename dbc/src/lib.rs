//! `can-dbc`: parsing, editing, and signal encode/decode for Vector DBC
//! (Database CAN) files.
//!
//! ```no_run
//! use can_dbc::Database;
//!
//! let db = Database::load(std::fs::read_to_string("vehicle.dbc")?.as_str())?;
//! let message = db.lookup_message("EngineData")?;
//! # Ok::<(), can_dbc::Error>(())
//! ```

pub mod bitlayout;
pub mod byte_order;
pub mod choices;
pub mod database;
pub mod error;
pub mod message;
pub mod node;
pub mod parser;
pub mod signal;
pub mod value;

pub use byte_order::ByteOrder;
pub use choices::Choices;
pub use database::{Database, MessageKey};
pub use error::{Error, Result};
pub use message::Message;
pub use node::Node;
pub use signal::Signal;
pub use value::Value;
