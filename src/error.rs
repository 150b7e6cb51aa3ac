// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by the engines.
//!
//! Only two things can go wrong from the caller's side: a bad construction
//! parameter, or a bad per-call argument. Both are reported locally at the call
//! that caused them and leave the engine untouched. Broken internal invariants
//! are bugs, not errors, and panic instead (see `verify::contracts`).

use std::fmt;

/// Error type for rejected configuration and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A construction parameter is out of range. Fatal to that instance.
    InvalidConfig {
        parameter: &'static str,
        value: String,
    },
    /// A per-call argument was rejected. Engine state is unchanged.
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },
}

impl EngineError {
    pub(crate) fn config(parameter: &'static str, value: impl fmt::Display) -> Self {
        EngineError::InvalidConfig {
            parameter,
            value: value.to_string(),
        }
    }

    pub(crate) fn argument(operation: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidConfig { parameter, value } => {
                write!(f, "invalid configuration: {} = {}", parameter, value)
            }
            EngineError::InvalidArgument { operation, reason } => {
                write!(f, "invalid argument to {}: {}", operation, reason)
            }
        }
    }
}

impl std::error::Error for EngineError {}
