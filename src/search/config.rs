//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::search::error::ConfigError;

/// Search configuration.
///
/// Depth is measured in full agent-cycles ("plies"): one ply is one move
/// by every agent in turn order. Depth is fixed at construction; the
/// engine keeps no other state between decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search depth in plies. Must be at least 1.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 2 }
    }
}

impl SearchConfig {
    /// Create a validated configuration.
    pub fn new(depth: u32) -> Result<Self, ConfigError> {
        let config = Self { depth };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants.
    ///
    /// Called by every strategy constructor, so a config deserialized from
    /// external input is still rejected before any search starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth < 1 {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        Ok(())
    }
}
