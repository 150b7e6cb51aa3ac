// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, BufRead, Write};
use std::process;
use std::time::Instant;

use clap::Parser;
use serde_json::{json, Value};
use suffixkart::driver::{Algorithm, DriverError, Session};

mod cli;
use cli::{display, Cli, PayloadArgs};

fn main() {
    let cli = Cli::parse();
    display::set_verbose(cli.options.verbose);

    let config = cli.options.driver_config();
    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            display::error(&e.to_string());
            process::exit(2);
        }
    };
    display::info(&format!(
        "bloom filter: {} bits, {} hashes; default tolerance {}; normalize {}",
        config.bloom.bits, config.bloom.hashes, config.default_tolerance, config.normalize
    ));

    let code = match cli.command.one_shot() {
        Some((algorithm, args)) => run_once(&mut session, algorithm, args),
        None => run_session(&mut session),
    };
    process::exit(code);
}

/// Handle a single request. Returns the exit code.
///
/// A payload that can't be read or decoded exits 1; every other failure is an
/// ordinary `{"error": ...}` response with exit 0.
fn run_once(session: &mut Session, algorithm: Algorithm, args: &PayloadArgs) -> i32 {
    let payload = match read_payload(args) {
        Ok(payload) => payload,
        Err(message) => {
            display::error(&message);
            emit(&json!({ "error": message }));
            return 1;
        }
    };

    let started = Instant::now();
    let result = session.handle(algorithm, &payload);
    display::info(&format!("{} handled in {}", algorithm, display::timing(started.elapsed())));

    match result {
        Ok(response) => {
            emit(&response);
            0
        }
        Err(e) => {
            let undecodable = matches!(e, DriverError::Json(_));
            if undecodable {
                display::error(&e.to_string());
            } else {
                display::warn(&e.to_string());
            }
            emit(&json!({ "error": e.to_string() }));
            if undecodable {
                1
            } else {
                0
            }
        }
    }
}

fn read_payload(args: &PayloadArgs) -> Result<String, String> {
    match (&args.payload, &args.payload_file) {
        (Some(payload), _) => Ok(payload.clone()),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e)),
        (None, None) => Err("no payload given".to_string()),
    }
}

/// Answer stdin line by line until EOF. Blank lines are skipped.
fn run_session(session: &mut Session) -> i32 {
    let stdin = io::stdin();
    let mut handled = 0usize;
    let started = Instant::now();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                display::error(&format!("failed to read stdin: {}", e));
                return 1;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = session.respond_line(&line);
        if let Some(message) = response.get("error").and_then(Value::as_str) {
            display::warn(message);
        }
        if !emit(&response) {
            // Reader went away; nothing more to answer.
            break;
        }
        handled += 1;
    }

    display::info(&format!(
        "session closed after {} requests in {}",
        handled,
        display::timing(started.elapsed())
    ));
    display::detail(
        "bloom",
        format!(
            "{}/{} bits set, estimated fpp {:.2e}",
            session.filter().bits_set(),
            session.filter().bits(),
            session.filter().estimated_fpp()
        ),
    );
    display::detail(
        "orders",
        format!(
            "{} documents, {} suffix tree nodes",
            session.orders().document_count(),
            session.orders().node_count()
        ),
    );
    0
}

/// Write one JSON line to stdout. Returns false once stdout is closed.
fn emit(value: &Value) -> bool {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", value).and_then(|_| out.flush()).is_ok()
}
