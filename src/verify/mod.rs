// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts for the engines' invariants.
//!
//! Caller mistakes come back as `EngineError`. Broken invariants are our
//! mistakes, and the contracts here panic on them in debug builds so tests
//! catch them where they happen instead of three queries later.

pub mod contracts;
