//! Befunge execution engine.
//!
//! Drives the fetch/decode/execute loop over a [`befunge_grid::Grid`]:
//! - [`stack`]: the integer stack with underflow-safe pop
//! - [`ops`]: the operation table, decoded by exhaustive match
//! - [`interpreter`]: pointer, direction, string mode, and output buffer
//! - [`snapshot`]: serializable engine state for inspection after a run

pub mod interpreter;
pub mod ops;
pub mod snapshot;
pub mod stack;

pub use interpreter::Interpreter;
pub use ops::Operation;
pub use snapshot::EngineState;
pub use stack::Stack;
