use fieldpath::{compile, output::{to_json, to_json_string}};
use serde_json::json;

#[test]
fn test_json_shape() {
    assert_eq!(
        to_json(&compile("items[3].name")),
        json!({
            "path": "items[3].name",
            "segments": ["items", "[3]", "name"],
            "precise": false,
            "normalized": "items[3].name",
        })
    );
}

#[test]
fn test_json_keeps_raw_path() {
    let json = to_json(&compile("a..b"));
    assert_eq!(json["path"], "a..b");
    assert_eq!(json["normalized"], "a.b");
    assert_eq!(json["precise"], true);
}

#[test]
fn test_json_string_compact_and_pretty() {
    let path = compile("single");
    let compact = to_json_string(&path, false).unwrap();
    let pretty = to_json_string(&path, true).unwrap();
    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
        serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
    );
}
