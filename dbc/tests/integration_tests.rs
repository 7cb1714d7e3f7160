//! End-to-end parse → model → emit → reparse flows, and facade-level
//! encode/decode through a multi-source merge.

use std::collections::HashMap;

use can_dbc::{ByteOrder, Database, Message, Signal, Value};

const SOCIALLEDGE: &str = r#"VERSION "1.0"

BU_: DRIVER IO

BO_ 200 SENSOR_SONARS: 8 IO
 SG_ SENSOR_SONARS_mux M : 0|4@1+ (1,0) [0|0] "" DRIVER
 SG_ SENSOR_SONARS_err_count : 4|12@1+ (1,0) [0|0] "" DRIVER
 SG_ SENSOR_SONARS_left m0 : 16|12@1+ (0.1,0) [0|0] "m" DRIVER
 SG_ SENSOR_SONARS_middle m0 : 28|12@1+ (0.1,0) [0|0] "m" DRIVER
 SG_ SENSOR_SONARS_right m0 : 40|12@1+ (0.1,0) [0|0] "m" DRIVER
 SG_ SENSOR_SONARS_rear m0 : 52|12@1+ (0.1,0) [0|0] "m" DRIVER
 SG_ SENSOR_SONARS_no_filt_left m1 : 16|12@1+ (0.1,0) [0|0] "m" DRIVER
 SG_ SENSOR_SONARS_no_filt_middle m1 : 28|12@1+ (0.1,0) [0|0] "m" DRIVER
 SG_ SENSOR_SONARS_no_filt_right m1 : 40|12@1+ (0.1,0) [0|0] "m" DRIVER
 SG_ SENSOR_SONARS_no_filt_rear m1 : 52|12@1+ (0.1,0) [0|0] "m" DRIVER

BO_ 100 DRIVER_HEARTBEAT: 8 DRIVER
 SG_ DRIVER_HEARTBEAT_cmd : 0|8@1+ (1,0) [0|0] "" IO
"#;

fn load() -> Database {
    Database::load(SOCIALLEDGE).unwrap()
}

#[test]
fn parse_emit_reparse_is_structurally_stable() {
    let db = load();
    let emitted = db.as_dbc();
    let reparsed = Database::load(&emitted).unwrap();
    assert_eq!(reparsed, db);
}

#[test]
fn multiplexed_message_round_trips_each_branch() {
    let db = load();

    let mut mux0 = HashMap::new();
    mux0.insert("SENSOR_SONARS_mux".to_string(), Value::Int(0));
    mux0.insert("SENSOR_SONARS_err_count".to_string(), Value::Int(1));
    mux0.insert("SENSOR_SONARS_left".to_string(), Value::Float(0.2));
    mux0.insert("SENSOR_SONARS_middle".to_string(), Value::Float(0.3));
    mux0.insert("SENSOR_SONARS_right".to_string(), Value::Float(0.4));
    mux0.insert("SENSOR_SONARS_rear".to_string(), Value::Float(0.5));

    let encoded = db.encode_message("SENSOR_SONARS", &mux0).unwrap();
    let decoded = db.decode_message(200u32, &encoded).unwrap();
    let names: Vec<_> = decoded.iter().map(|(n, _)| n.as_str()).collect();

    assert!(names.contains(&"SENSOR_SONARS_left"));
    assert!(!names.contains(&"SENSOR_SONARS_no_filt_left"));
}

#[test]
fn multiplexed_branches_encode_to_the_documented_byte_layout() {
    let db = load();

    let mut mux0 = HashMap::new();
    mux0.insert("SENSOR_SONARS_mux".to_string(), Value::Int(0));
    mux0.insert("SENSOR_SONARS_err_count".to_string(), Value::Int(1));
    mux0.insert("SENSOR_SONARS_left".to_string(), Value::Float(2.0));
    mux0.insert("SENSOR_SONARS_middle".to_string(), Value::Float(3.0));
    mux0.insert("SENSOR_SONARS_right".to_string(), Value::Float(4.0));
    mux0.insert("SENSOR_SONARS_rear".to_string(), Value::Float(5.0));
    let encoded = db.encode_message("SENSOR_SONARS", &mux0).unwrap();
    assert_eq!(
        encoded,
        vec![0x10, 0x00, 0x14, 0xE0, 0x01, 0x28, 0x20, 0x03]
    );

    let mut mux1 = HashMap::new();
    mux1.insert("SENSOR_SONARS_mux".to_string(), Value::Int(1));
    mux1.insert("SENSOR_SONARS_err_count".to_string(), Value::Int(2));
    mux1.insert("SENSOR_SONARS_no_filt_left".to_string(), Value::Float(3.0));
    mux1.insert(
        "SENSOR_SONARS_no_filt_middle".to_string(),
        Value::Float(4.0),
    );
    mux1.insert(
        "SENSOR_SONARS_no_filt_right".to_string(),
        Value::Float(5.0),
    );
    mux1.insert("SENSOR_SONARS_no_filt_rear".to_string(), Value::Float(6.0));
    let encoded = db.encode_message("SENSOR_SONARS", &mux1).unwrap();
    assert_eq!(
        encoded,
        vec![0x21, 0x00, 0x1E, 0x80, 0x02, 0x32, 0xC0, 0x03]
    );
}

#[test]
fn add_dbc_merges_additional_source_and_rejects_name_clash() {
    let mut db = Database::new();
    db.add_dbc(SOCIALLEDGE).unwrap();
    assert_eq!(db.messages().len(), 2);

    let err = db.add_dbc(SOCIALLEDGE).unwrap_err();
    assert!(matches!(err, can_dbc::Error::Duplicate(_)));
}

#[test]
fn programmatic_builder_matches_parser_output() {
    let mut db = Database::new();
    let mut message = Message::new(0x100, false, "DRIVER_HEARTBEAT", 8);
    message.add_signal(Signal::new(
        "DRIVER_HEARTBEAT_cmd",
        0,
        8,
        ByteOrder::LittleEndian,
        false,
        1.0,
        0.0,
    ));
    db.add_message(message).unwrap();

    let mut data = HashMap::new();
    data.insert("DRIVER_HEARTBEAT_cmd".to_string(), Value::Int(240));
    let encoded = db.encode_message("DRIVER_HEARTBEAT", &data).unwrap();
    assert_eq!(encoded[0], 240);
}
