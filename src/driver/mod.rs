// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The command interface in front of the engines.
//!
//! A request names an algorithm (`bloom`, `bktree`, `suffixtree`) and carries a
//! JSON payload; the response is a JSON object, or `{"error": ...}`. This is the
//! contract the marketplace web app speaks to the `suffixkart` binary.
//!
//! All engine state lives in an explicit [`Session`]. A one-shot process builds
//! a session, handles one request and exits; `suffixkart session` keeps one
//! alive across many requests, which is the only way state persists.

mod config;
mod error;
mod request;
mod session;

pub use config::{DriverConfig, DEFAULT_TOLERANCE};
pub use error::DriverError;
pub use request::*;
pub use session::Session;
