mod common;

use std::fs;

use common::{bare, test_dir, transfer};
use movement_core::{
    storage::{JsonMovementStorage, MovementStorage},
    FailurePolicy, MovementError,
};

#[test]
fn export_then_import_preserves_content_and_order() {
    let dir = test_dir();
    let path = dir.join("movements.json");
    let movements = vec![transfer("b", 100), bare("a"), transfer("c", 99_999)];

    let storage = JsonMovementStorage::default();
    storage.export_json(&path, &movements).expect("export");
    let imported = storage.import_json(&path).expect("import");

    assert_eq!(imported, movements);
}

#[test]
fn exporting_twice_is_byte_identical() {
    let dir = test_dir();
    let first = dir.join("first.json");
    let movements = vec![transfer("x", 4_200), bare("y")];
    let storage = JsonMovementStorage::default();

    storage.export_json(&first, &movements).expect("export");
    let before = fs::read(&first).expect("read");
    storage.export_json(&first, &movements).expect("export again");
    let after = fs::read(&first).expect("read again");

    assert_eq!(before, after);
}

#[test]
fn exported_document_is_a_camel_case_array() {
    let dir = test_dir();
    let path = dir.join("movements.json");
    JsonMovementStorage::default()
        .export_json(&path, &[bare("only")])
        .expect("export");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("valid json");
    let array = value.as_array().expect("top-level array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["typeMovement"], "DEPOSIT");
    assert_eq!(array[0]["isReversible"], false);
    assert!(array[0]["senderClient"].is_null());
}

#[test]
fn empty_sequence_roundtrips() {
    let dir = test_dir();
    let path = dir.join("empty.json");
    let storage = JsonMovementStorage::default();
    storage.export_json(&path, &[]).expect("export");
    assert!(storage.import_json(&path).expect("import").is_empty());
}

#[test]
fn lenient_import_of_missing_file_is_empty() {
    let dir = test_dir();
    let result = JsonMovementStorage::default()
        .import_json(&dir.join("does-not-exist.json"))
        .expect("lenient import never fails");
    assert!(result.is_empty());
}

#[test]
fn lenient_import_of_malformed_file_is_empty() {
    let dir = test_dir();
    let path = dir.join("broken.json");
    fs::write(&path, "{\"not\": \"an array\"}").expect("write");
    let result = JsonMovementStorage::new(FailurePolicy::Lenient)
        .import_json(&path)
        .expect("lenient import never fails");
    assert!(result.is_empty());
}

#[test]
fn strict_import_surfaces_the_cause() {
    let dir = test_dir();
    let missing = JsonMovementStorage::strict().import_json(&dir.join("nope.json"));
    assert!(matches!(missing, Err(MovementError::Io(_))));
}

#[test]
fn export_creates_missing_parent_directories() {
    let dir = test_dir();
    let path = dir.join("deep").join("nested").join("movements.json");
    JsonMovementStorage::default()
        .export_json(&path, &[bare("z")])
        .expect("export");
    assert!(path.parent().expect("parent").is_dir());
    assert!(path.is_file());
}

#[test]
fn strict_export_to_directory_fails() {
    let dir = test_dir();
    let result = JsonMovementStorage::strict().export_json(&dir, &[bare("z")]);
    assert!(result.is_err());
}
