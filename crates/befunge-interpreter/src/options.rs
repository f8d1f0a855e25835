//! Run configuration.

use befunge_eval::Interpreter;
use serde::{Deserialize, Serialize};

/// Options for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Seed for `?`. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl RunOptions {
    /// Options with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Build a fresh engine configured by these options.
    pub fn engine(&self) -> Interpreter {
        match self.seed {
            Some(seed) => Interpreter::with_seed(seed),
            None => Interpreter::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_seed() {
        assert_eq!(RunOptions::default().seed, None);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(
            RunOptions::from_json("{\"seed\":7}").unwrap(),
            RunOptions::seeded(7)
        );
        assert_eq!(RunOptions::from_json("{}").unwrap(), RunOptions::default());
        assert!(RunOptions::from_json("{\"seed\":\"x\"}").is_err());
    }
}
