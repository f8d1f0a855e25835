//! Structured run results.

use befunge_eval::EngineState;
use befunge_types::FungeError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::RunOptions;

/// The outcome of a run, successful or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretResult {
    pub success: bool,
    /// Output written before the program halted or failed.
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FungeError>,
    /// Engine state at the end of the run.
    pub state: EngineState,
}

impl InterpretResult {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Run `source` and capture the outcome instead of propagating errors.
///
/// Like [`interpret`](crate::interpret), this does not return if the
/// program never halts.
pub fn interpret_to_result(source: &str, options: &RunOptions) -> InterpretResult {
    let mut engine = options.engine();
    engine.load(source);
    let error = engine.run().err();
    if let Some(err) = &error {
        debug!(code = %err.code(), "run failed");
    }

    let state = engine.snapshot();
    InterpretResult {
        success: error.is_none(),
        output: state.output.clone(),
        error,
        state,
    }
}
