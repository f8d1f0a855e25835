//! Serializable engine state.

use befunge_types::{Direction, Position, Status, Value};
use serde::{Deserialize, Serialize};

/// A point-in-time copy of everything an [`Interpreter`](crate::Interpreter)
/// owns except its random source.
///
/// Useful after a failed run: the error discards the output, but the
/// snapshot still carries what had been written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    /// Grid rows, top to bottom, including any self-modification.
    pub grid: Vec<String>,
    /// Stack values from bottom to top.
    pub stack: Vec<Value>,
    pub position: Position,
    pub direction: Direction,
    pub string_mode: bool,
    pub output: String,
    pub status: Status,
    pub steps: u64,
}

#[cfg(test)]
mod tests {
    use crate::Interpreter;
    use befunge_types::{Direction, Status};

    #[test]
    fn test_snapshot_after_run() {
        let mut e = Interpreter::with_seed(0);
        e.interpret("12v\n  @").unwrap();
        let state = e.snapshot();
        assert_eq!(state.grid, vec!["12v".to_string(), "  @".to_string()]);
        assert_eq!(state.stack, vec![1, 2]);
        assert_eq!(state.direction, Direction::Down);
        assert_eq!(state.status, Status::Halted);
        assert_eq!(state.steps, 3);
    }

    #[test]
    fn test_snapshot_json_field_names() {
        let mut e = Interpreter::with_seed(0);
        e.load("@");
        let json = serde_json::to_string(&e.snapshot()).unwrap();
        assert!(json.contains("\"string_mode\":false"));
        assert!(json.contains("\"direction\":\"right\""));
        assert!(json.contains("\"status\":\"running\""));
        assert!(json.contains("\"position\":{\"x\":0,\"y\":0}"));
    }
}
