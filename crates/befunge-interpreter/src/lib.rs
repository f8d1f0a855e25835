//! Befunge interpreter: runs a program and returns what it printed.
//!
//! ```text
//! Source → Grid → Interpreter (fetch / decode / execute) → output
//! ```
//!
//! [`interpret`] is the entry point. [`interpret_with`] takes
//! [`RunOptions`]; [`interpret_to_result`] never fails and reports errors
//! and final engine state in a serializable [`InterpretResult`].

mod options;
mod result;

pub use befunge_eval::{EngineState, Interpreter};
pub use befunge_types::{ErrorCode, FungeError, Result};
pub use options::RunOptions;
pub use result::{interpret_to_result, InterpretResult};

/// Run `source` to its halt cell with an entropy-seeded random source.
///
/// Runs forever if the program never reaches `@`.
pub fn interpret(source: &str) -> Result<String> {
    interpret_with(source, &RunOptions::default())
}

/// Run `source` with explicit options.
pub fn interpret_with(source: &str, options: &RunOptions) -> Result<String> {
    options.engine().interpret(source)
}
