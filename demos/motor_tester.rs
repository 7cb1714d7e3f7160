//! Demonstrates the boundary this crate stops at: `can-dbc` only knows how
//! to turn signal values into bytes and back. Getting those bytes onto an
//! actual bus is a transport library's job, modelled here as a trait so the
//! demo runs without one.
//!
//! Run with `cargo run -p can-dbc --example motor_tester`. Declared as a
//! `[[example]]` in `dbc/Cargo.toml` pointing at this path rather than
//! living under `dbc/examples/`, which would collide with the read-only
//! retrieval pack this workspace was seeded from.

use std::collections::HashMap;

use can_dbc::{Database, Value};

/// Stands in for a real CAN socket (e.g. `socketcan::CanSocket`).
trait CanTransport {
    fn send(&mut self, frame_id: u32, payload: &[u8]);
    fn recv(&mut self) -> (u32, Vec<u8>);
}

/// A transport that just loops the last frame it was given back at the caller.
struct LoopbackTransport {
    last: Option<(u32, Vec<u8>)>,
}

impl CanTransport for LoopbackTransport {
    fn send(&mut self, frame_id: u32, payload: &[u8]) {
        self.last = Some((frame_id, payload.to_vec()));
    }

    fn recv(&mut self) -> (u32, Vec<u8>) {
        self.last.clone().expect("send before recv")
    }
}

const MOTOR_DBC: &str = r#"VERSION ""

BU_: ECU MOTOR

BO_ 100 MotorCommand: 8 ECU
 SG_ Throttle : 0|8@1+ (1,0) [0|100] "%" MOTOR
 SG_ Enable : 8|1@1+ (1,0) [0|1] "" MOTOR
"#;

fn main() {
    let db = Database::load(MOTOR_DBC).expect("valid fixture");
    let mut bus = LoopbackTransport { last: None };

    let mut command = HashMap::new();
    command.insert("Throttle".to_string(), Value::Int(42));
    command.insert("Enable".to_string(), Value::Int(1));

    let payload = db
        .encode_message("MotorCommand", &command)
        .expect("all active signals supplied");
    bus.send(db.lookup_message("MotorCommand").unwrap().frame_id(), &payload);

    let (frame_id, payload) = bus.recv();
    let decoded = db.decode_message(frame_id, &payload).expect("matches MotorCommand layout");
    for (name, value) in decoded {
        println!("{name} = {value}");
    }
}
