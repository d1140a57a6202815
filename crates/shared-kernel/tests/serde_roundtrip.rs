// crates/shared-kernel/tests/serde_roundtrip.rs
use serde::{Deserialize, Serialize};
use string_analyzer_shared_kernel::CharCount;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    numeric: CharCount,
    other: CharCount,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper { numeric: CharCount::from(42), other: CharCount::ZERO };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"numeric":42,"other":0}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
