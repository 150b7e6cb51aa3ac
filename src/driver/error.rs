// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::error::EngineError;

/// Everything that can turn a request into an `{"error": ...}` response.
#[derive(Debug)]
pub enum DriverError {
    /// Payload isn't valid JSON or doesn't have the expected shape.
    Json(serde_json::Error),
    UnknownAlgorithm(String),
    UnknownOperation(String),
    /// A field required by this particular operation is absent.
    MissingField {
        operation: &'static str,
        field: &'static str,
    },
    Engine(EngineError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Json(e) => write!(f, "invalid payload: {}", e),
            DriverError::UnknownAlgorithm(name) => write!(f, "Unknown algorithm: {}", name),
            DriverError::UnknownOperation(name) => write!(f, "Unknown operation: {}", name),
            DriverError::MissingField { operation, field } => {
                write!(f, "operation '{}' requires field '{}'", operation, field)
            }
            DriverError::Engine(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Json(e) => Some(e),
            DriverError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(e: serde_json::Error) -> Self {
        DriverError::Json(e)
    }
}

impl From<EngineError> for DriverError {
    fn from(e: EngineError) -> Self {
        DriverError::Engine(e)
    }
}
