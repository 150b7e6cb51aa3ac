//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use suffixkart::driver::{DriverConfig, Session};
use suffixkart::{ExactIndex, FuzzyIndex};

// Re-export canonical test utilities from suffixkart::testing
pub use suffixkart::testing::{make_order, make_orders, naive_find, BOOK_ITEMS};

// ============================================================================
// ENGINE FIXTURES
// ============================================================================

/// The five-item BK-tree from the fuzzy walkthrough.
pub fn book_index() -> FuzzyIndex {
    FuzzyIndex::from_items(BOOK_ITEMS)
}

/// Orders indexed as `buyer + item` documents.
pub fn order_index(pairs: &[(&str, &str)]) -> ExactIndex {
    ExactIndex::from_documents(pairs.iter().map(|(buyer, item)| format!("{}{}", buyer, item)))
}

pub fn default_session() -> Session {
    Session::new(DriverConfig::default()).expect("default config is valid")
}

// ============================================================================
// BINARY HARNESS
// ============================================================================

/// Path to the built `suffixkart` binary.
pub fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_suffixkart"))
}

/// Run the binary with `args`, feeding `stdin`.
pub fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = binary()
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn suffixkart");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait on suffixkart")
}

/// Every stdout line of `output`, parsed as JSON.
pub fn json_lines(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
        .collect()
}

/// The single JSON response of a one-shot invocation.
pub fn json_response(output: &Output) -> Value {
    let mut lines = json_lines(output);
    assert_eq!(lines.len(), 1, "expected one response line, got {:?}", lines);
    lines.remove(0)
}
