// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the request driver.
//!
//! The web app is one client, but anything that can reach the binary can send
//! whatever bytes it likes. Every line must turn into a JSON object, either a
//! response or `{"error": ...}`, and never into a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use suffixkart::driver::{DriverConfig, Session};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut session = match Session::new(DriverConfig::default()) {
        Ok(session) => session,
        Err(_) => return,
    };

    for line in text.lines().take(32) {
        let response = session.respond_line(line);
        // INVARIANT 1: every response is an object
        assert!(response.is_object(), "non-object response {}", response);

        for algorithm in ["bloom", "bktree", "suffixtree"] {
            let response = session.respond(algorithm, line);
            assert!(response.is_object());
        }
    }

    // INVARIANT 2: every indexed order can be read back
    let orders = session.orders();
    for id in 0..orders.document_count() {
        assert!(orders.document(id).is_some());
    }
});
