//! Shared types for the Befunge interpreter.
//!
//! This crate defines the instruction-pointer vocabulary (directions,
//! positions, run status), the stack value type, and the error types
//! used across the grid, evaluator, and driver crates.

mod error;
mod pointer;

pub use error::{ErrorCategory, ErrorCode, FungeError};
pub use pointer::{Direction, Position, Status};

/// A single stack cell. The language has no fractional values.
pub type Value = i64;

/// Result type used throughout the Befunge interpreter.
pub type Result<T> = std::result::Result<T, FungeError>;
