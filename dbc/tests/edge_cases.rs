//! Edge cases called out by spec invariants: unassigned-node sentinel,
//! disjoint multiplex partitioning, truncated payloads, verbatim
//! preservation of records this crate doesn't interpret.

use std::collections::HashMap;

use can_dbc::{Database, Error, Value};

#[test]
fn unassigned_sender_uses_vector_xxx_sentinel() {
    let db = Database::load("BO_ 1 Foo: 8 Vector__XXX\n SG_ Bar : 0|8@1+ (1,0) [0|0] \"\" Vector__XXX\n").unwrap();
    let message = db.lookup_message("Foo").unwrap();
    assert_eq!(message.senders(), &["Vector__XXX".to_string()]);
    assert_eq!(message.signal("Bar").unwrap().receivers(), &["Vector__XXX".to_string()]);
}

#[test]
fn decode_rejects_payload_shorter_than_declared_length() {
    let db = Database::load("BO_ 1 Foo: 8 Vector__XXX\n SG_ Bar : 0|8@1+ (1,0) [0|0] \"\" Vector__XXX\n").unwrap();
    let err = db.decode_message("Foo", &[0u8; 2]).unwrap_err();
    assert!(matches!(err, Error::Truncated { expected: 8, got: 2 }));
}

#[test]
fn encode_requires_every_active_signal() {
    let db = Database::load(
        "BO_ 1 Foo: 8 Vector__XXX\n SG_ Mux M : 0|4@1+ (1,0) [0|0] \"\" Vector__XXX\n SG_ A m0 : 4|4@1+ (1,0) [0|0] \"\" Vector__XXX\n",
    )
    .unwrap();

    let mut data = HashMap::new();
    data.insert("Mux".to_string(), Value::Int(0));
    // "A" deliberately omitted even though mux selects branch 0.
    let err = db.encode_message("Foo", &data).unwrap_err();
    assert!(matches!(err, Error::MissingSignal(name) if name == "A"));
}

#[test]
fn encode_ignores_unknown_signal_names_in_data() {
    let db = Database::load("BO_ 1 Foo: 8 Vector__XXX\n SG_ Bar : 0|8@1+ (1,0) [0|0] \"\" Vector__XXX\n").unwrap();
    let mut data = HashMap::new();
    data.insert("Bar".to_string(), Value::Int(5));
    data.insert("Ghost".to_string(), Value::Int(99));
    assert!(db.encode_message("Foo", &data).is_ok());
}

#[test]
fn unknown_records_are_preserved_verbatim_on_round_trip() {
    let source = "VERSION \"\"\n\nBU_: ECU\n\nVAL_TABLE_ Gear 1 \"D\" 0 \"P\" ;\nBO_TX_BU_ 1 : ECU;\n";
    let db = Database::load(source).unwrap();
    let emitted = db.as_dbc();
    assert!(emitted.contains("VAL_TABLE_ Gear 1 \"D\" 0 \"P\" ;"));
    assert!(emitted.contains("BO_TX_BU_ 1 : ECU;"));
}

#[test]
fn attribute_records_round_trip_without_a_doubled_semicolon() {
    let source = concat!(
        "VERSION \"\"\n\n",
        "BU_: ECU\n\n",
        "BO_ 1 Foo: 8 ECU\n",
        " SG_ Bar : 0|8@1+ (1,0) [0|0] \"\" Vector__XXX\n\n",
        "BA_DEF_ SGTYPE_ \"GenSigStartValue\" INT 0 65535;\n",
        "BA_DEF_DEF_ \"GenSigStartValue\" 0;\n",
        "BA_ \"GenSigStartValue\" SG_ 1 Bar 0;\n",
        "EV_ Speed: 0 [0|100] \"\" 0 0 0 Vector__XXX;\n",
    );
    let db = Database::load(source).unwrap();
    let emitted = db.as_dbc();

    assert!(!emitted.contains(";;"), "emitted DBC has a doubled semicolon:\n{emitted}");
    assert!(emitted.contains("BA_DEF_ SGTYPE_ \"GenSigStartValue\" INT 0 65535;\n"));
    assert!(emitted.contains("BA_DEF_DEF_ \"GenSigStartValue\" 0;\n"));
    assert!(emitted.contains("BA_ \"GenSigStartValue\" SG_ 1 Bar 0;\n"));
    assert!(emitted.contains("EV_ Speed: 0 [0|100] \"\" 0 0 0 Vector__XXX;\n"));

    let reparsed = Database::load(&emitted).unwrap();
    assert_eq!(reparsed, db);
}

#[test]
fn lookup_by_name_and_frame_id_agree() {
    let db = Database::load("BO_ 42 Foo: 0 Vector__XXX\n").unwrap();
    let by_name = db.lookup_message("Foo").unwrap();
    let by_id = db.lookup_message(42u32).unwrap();
    assert_eq!(by_name, by_id);
}

#[test]
fn missing_message_lookup_errors() {
    let db = Database::new();
    assert!(matches!(db.lookup_message("Ghost").unwrap_err(), Error::NotFound(_)));
    assert!(matches!(db.lookup_message(7u32).unwrap_err(), Error::NotFound(_)));
}
