#![allow(dead_code)]

use serde_json::Value;
use std::fs;
use std::path::PathBuf;

// Loads a JSON fixture from tests/data/<version>/
pub fn load_fixture(version: &str, filename: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push(format!("tests/data/{}/{}", version, filename));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Could not read fixture {:?}: {:?}", path, e))
}

// Structural comparison: key order is ignored, number literals are compared
// as written.
pub fn assert_json_eq(expected: &str, actual: &str) {
    let expected: Value = serde_json::from_str(expected).expect("expected JSON");
    let actual: Value = serde_json::from_str(actual).expect("actual JSON");
    assert_eq!(expected, actual);
}
