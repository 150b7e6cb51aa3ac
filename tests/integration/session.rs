//! Marketplace flows through a long-lived `Session`.

use serde_json::json;
use suffixkart::driver::{Algorithm, DriverConfig, Session};
use suffixkart::BloomConfig;

use super::common::{default_session, make_order, BOOK_ITEMS};

#[test]
fn test_listing_flow_uniqueness_then_fuzzy_suggestions() {
    let mut s = default_session();

    // Seller lists items; the filter remembers them.
    for name in BOOK_ITEMS {
        let resp = s.respond("bloom", &json!({"operation": "insert", "item_name": name}).to_string());
        assert_eq!(resp["success"], json!(true));
    }

    // A new listing that collides is flagged, a fresh one is not.
    let check = |s: &mut Session, name: &str| {
        s.respond("bloom", &json!({"operation": "check", "item_name": name}).to_string())["is_unique"].clone()
    };
    assert_eq!(check(&mut s, "boot"), json!(false));
    assert_eq!(check(&mut s, "lamp"), json!(true));

    // Suggestions for a typo come from the candidate list sent with the request.
    let resp = s.respond(
        "bktree",
        &json!({"query": "bok", "items": BOOK_ITEMS, "tolerance": 1}).to_string(),
    );
    assert_eq!(resp["matches"], json!(["boo", "book"]));
    assert_eq!(resp["total_matches"], json!(2));
    assert_eq!(resp["query"], json!("bok"));
}

#[test]
fn test_orders_accumulate_across_requests() {
    let mut s = default_session();
    let ids: Vec<_> = [("John", "Apple"), ("Alice", "Apple"), ("John", "Pineapple")]
        .iter()
        .map(|(buyer, item)| {
            s.respond(
                "suffixtree",
                &json!({"operation": "add", "order": make_order(buyer, item)}).to_string(),
            )["document_id"]
                .clone()
        })
        .collect();
    assert_eq!(ids, vec![json!(0), json!(1), json!(2)]);

    let resp = s.respond("suffixtree", r#"{"operation": "search", "item": "Apple"}"#);
    assert_eq!(resp["buyers"], json!(["John", "Alice"]));
    assert_eq!(resp["total_buyers"], json!(2));
    assert_eq!(resp["item"], json!("Apple"));

    // "apple" (lowercase) is inside "Pineapple" only.
    let resp = s.respond("suffixtree", r#"{"operation": "search", "item": "apple"}"#);
    assert_eq!(resp["buyers"], json!(["John"]));
    assert_eq!(resp["occurrences"], json!([{"document_id": 2, "offset": 8}]));
    assert_eq!(s.orders().document_count(), 3);
}

#[test]
fn test_buyer_item_boundary_is_not_a_document_boundary() {
    // Order text is buyer + item, so "nA" spans buyer and item of one order...
    let mut s = default_session();
    s.add_order(&make_order("John", "Apple"));
    s.add_order(&make_order("Ann", "Kiwi"));
    assert_eq!(s.search_orders("nA").unwrap().buyers, vec!["John"]);
    // ...but nothing spans two orders.
    assert!(s.search_orders("eAnn").unwrap().buyers.is_empty());
}

#[test]
fn test_errors_do_not_poison_the_session() {
    let mut s = default_session();
    assert!(s.respond("bloom", "{not json").get("error").is_some());
    assert!(s.respond("suffixtree", r#"{"operation": "drop"}"#).get("error").is_some());
    assert!(s.respond("heap", "{}").get("error").is_some());

    let resp = s.respond("bloom", r#"{"operation": "insert", "item_name": "ok"}"#);
    assert_eq!(resp["success"], json!(true));
}

#[test]
fn test_session_lines() {
    let mut s = default_session();
    let lines = [
        r#"{"algorithm": "suffixtree", "payload": {"operation": "add", "order": {"buyer": "Mia", "item": "Mango"}}}"#,
        r#"{"algorithm": "suffixtree", "payload": {"operation": "search", "item": "ango"}}"#,
        r#"{"algorithm": "bktree", "payload": {"query": "mango", "items": ["mango", "tango", "manga", "melon"]}}"#,
    ];
    let responses: Vec<_> = lines.iter().map(|line| s.respond_line(line)).collect();
    assert_eq!(responses[0]["document_id"], json!(0));
    assert_eq!(responses[1]["buyers"], json!(["Mia"]));
    assert_eq!(responses[2]["matches"], json!(["mango", "manga", "tango"]));
}

#[test]
fn test_custom_bloom_config_is_used() {
    let config = DriverConfig {
        bloom: BloomConfig::with_size(128, 2),
        ..DriverConfig::default()
    };
    let mut s = Session::new(config).unwrap();
    s.handle(Algorithm::Bloom, r#"{"operation": "insert", "item_name": "fig"}"#)
        .unwrap();
    assert_eq!(s.filter().bits(), 128);
    assert_eq!(s.filter().hashes(), 2);
    assert!(s.filter().bits_set() <= 2);
}

#[test]
fn test_default_tolerance_from_config() {
    let s = Session::new(DriverConfig {
        default_tolerance: 0,
        ..DriverConfig::default()
    })
    .unwrap();
    let resp = s
        .bktree(serde_json::from_str(r#"{"query": "boo", "items": ["boo", "book"]}"#).unwrap())
        .unwrap();
    assert_eq!(resp.matches, vec!["boo"]);
}
