use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::Value;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// The program itself is malformed.
    Program,
    /// A stack value cannot be used where it was needed.
    Value,
}

/// Numeric error code (E100–E299).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Program errors (E100–E199) ──
    pub const UNKNOWN_OPERATION: Self = Self(100);

    // ── Value errors (E200–E299) ──
    pub const INVALID_VALUE: Self = Self(200);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            200..=299 => ErrorCategory::Value,
            _ => ErrorCategory::Program,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Program => write!(f, "program"),
            Self::Value => write!(f, "value"),
        }
    }
}

/// A fatal interpreter error. Both variants abort the run immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FungeError {
    /// The character under the pointer (outside string mode) has no operation.
    #[error("unknown operation {ch:?} at ({x}, {y})")]
    UnknownOperation { ch: char, x: i64, y: i64 },

    /// A stack value could not be turned into what the operation needed.
    #[error("invalid value {value}: {context}")]
    InvalidValue { value: Value, context: String },
}

impl FungeError {
    /// Create an [`FungeError::InvalidValue`].
    pub fn invalid_value(value: Value, context: impl Into<String>) -> Self {
        Self::InvalidValue {
            value,
            context: context.into(),
        }
    }

    /// The stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownOperation { .. } => ErrorCode::UNKNOWN_OPERATION,
            Self::InvalidValue { .. } => ErrorCode::INVALID_VALUE,
        }
    }

    /// The category for this error, derived from its code.
    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }
}
