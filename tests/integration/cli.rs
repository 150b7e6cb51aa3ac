//! End-to-end tests of the `suffixkart` binary.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use super::common::{json_lines, json_response, run};

#[test]
fn test_bloom_insert_one_shot() {
    let output = run(&["bloom", r#"{"operation": "insert", "item_name": "apple"}"#], "");
    assert!(output.status.success());
    assert_eq!(
        json_response(&output),
        json!({"success": true, "message": "apple inserted"})
    );
}

#[test]
fn test_bloom_check_with_existing_items() {
    let payload = r#"{"operation": "check", "item_name": "apple", "existing_items": ["apple"]}"#;
    let output = run(&["bloom", payload], "");
    assert_eq!(json_response(&output), json!({"is_unique": false}));

    let payload = r#"{"operation": "check", "item_name": "apple"}"#;
    let output = run(&["bloom", payload], "");
    assert_eq!(json_response(&output), json!({"is_unique": true}));
}

#[test]
fn test_bktree_one_shot() {
    let payload = r#"{"query": "book", "items": ["book", "books", "boo", "boot", "cake"], "tolerance": 1}"#;
    let output = run(&["bktree", payload], "");
    assert!(output.status.success());
    assert_eq!(
        json_response(&output),
        json!({"matches": ["book", "boo", "books", "boot"], "query": "book", "total_matches": 4})
    );
}

#[test]
fn test_default_tolerance_flag() {
    let payload = r#"{"query": "book", "items": ["book", "bo"]}"#;
    let output = run(&["--default-tolerance", "1", "bktree", payload], "");
    assert_eq!(json_response(&output)["matches"], json!(["book"]));

    let output = run(&["bktree", payload], "");
    assert_eq!(json_response(&output)["matches"], json!(["book", "bo"]));
}

#[test]
fn test_suffixtree_search_with_orders() {
    let payload = json!({
        "operation": "search",
        "item": "Apple",
        "orders": [{"buyer": "John", "item": "Apple"}, {"buyer": "Alice", "item": "Apple"}],
    });
    let output = run(&["suffixtree", &payload.to_string()], "");
    assert!(output.status.success());
    let resp = json_response(&output);
    assert_eq!(resp["buyers"], json!(["John", "Alice"]));
    assert_eq!(resp["total_buyers"], json!(2));
}

#[test]
fn test_payload_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("payload.json");
    fs::write(&path, r#"{"operation": "add", "order": {"buyer": "Raj", "item": "Kiwi"}}"#).unwrap();

    let output = run(&["suffixtree", "--payload-file", path.to_str().unwrap()], "");
    assert!(output.status.success());
    assert_eq!(
        json_response(&output),
        json!({"success": true, "message": "Order added to suffix tree", "document_id": 0})
    );
}

#[test]
fn test_missing_payload_file_exits_one() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("absent.json");
    let output = run(&["bloom", "--payload-file", path.to_str().unwrap()], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(json_response(&output).get("error").is_some());
}

#[test]
fn test_invalid_json_exits_one() {
    let output = run(&["bloom", "{not json"], "");
    assert_eq!(output.status.code(), Some(1));
    let resp = json_response(&output);
    assert!(resp["error"].as_str().unwrap().starts_with("invalid payload"));
}

#[test]
fn test_unknown_operation_is_a_response_not_a_crash() {
    let output = run(&["bloom", r#"{"operation": "delete", "item_name": "x"}"#], "");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(json_response(&output), json!({"error": "Unknown operation: delete"}));
}

#[test]
fn test_zero_bloom_bits_rejected() {
    let output = run(&["--bloom-bits", "0", "bloom", r#"{"operation": "check", "item_name": "x"}"#], "");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("bits = 0"));
}

#[test]
fn test_session_keeps_state_between_lines() {
    let input = [
        r#"{"algorithm": "bloom", "payload": {"operation": "insert", "item_name": "fig"}}"#,
        r#"{"algorithm": "bloom", "payload": {"operation": "check", "item_name": "fig"}}"#,
        "",
        r#"{"algorithm": "suffixtree", "payload": {"operation": "add", "order": {"buyer": "Ann", "item": "Fig"}}}"#,
        r#"{"algorithm": "suffixtree", "payload": {"operation": "search", "item": "Fig"}}"#,
        r#"garbage"#,
        r#"{"algorithm": "trie", "payload": {}}"#,
    ]
    .join("\n");

    let output = run(&["session"], &input);
    assert!(output.status.success());
    let responses = json_lines(&output);
    assert_eq!(responses.len(), 6);
    assert_eq!(responses[0]["success"], json!(true));
    assert_eq!(responses[1], json!({"is_unique": false}));
    assert_eq!(responses[2]["document_id"], json!(0));
    assert_eq!(responses[3]["buyers"], json!(["Ann"]));
    assert!(responses[4].get("error").is_some());
    assert_eq!(responses[5], json!({"error": "Unknown algorithm: trie"}));
}

#[test]
fn test_verbose_writes_to_stderr_only() {
    let output = run(&["--verbose", "bloom", r#"{"operation": "check", "item_name": "x"}"#], "");
    assert_eq!(json_response(&output), json!({"is_unique": true}));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bloom filter: 65536 bits, 3 hashes"), "{}", stderr);
    assert!(!stderr.contains('\x1b'), "NO_COLOR must disable escapes");
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_normalize_flag() {
    let payload = r#"{"query": "CAFE", "items": ["Café", "tea"], "tolerance": 0}"#;
    let output = run(&["--normalize", "bktree", payload], "");
    assert_eq!(json_response(&output)["matches"], json!(["Café"]));

    let output = run(&["bktree", payload], "");
    assert_eq!(json_response(&output)["matches"], json!([]));
}
