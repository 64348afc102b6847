use std::time::Duration;

use crate::engine::Ring;
use crate::error::ConfigError;

/// Shape and rules of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Number of poles on the board.
    pub pole_count: usize,
    /// Capacity of each pole.
    pub max_rings: usize,
    /// Number of distinct colors in play. A solved board has one full pole per color.
    pub color_count: usize,
    /// Move budget. Checked by the driver, never enforced by the engine.
    pub max_moves: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            pole_count: 6,
            max_rings: 4,
            color_count: 4,
            max_moves: 50,
        }
    }
}

impl PuzzleConfig {
    /// Total number of rings a board with this configuration holds.
    pub fn total_rings(&self) -> usize {
        self.color_count * self.max_rings
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rings == 0 {
            return Err(ConfigError::Validation("max_rings must be > 0".into()));
        }
        if self.color_count == 0 {
            return Err(ConfigError::Validation("color_count must be > 0".into()));
        }
        if self.color_count > Ring::ALL.len() {
            return Err(ConfigError::Validation(format!(
                "color_count must be <= {}",
                Ring::ALL.len()
            )));
        }
        if self.pole_count < self.color_count {
            return Err(ConfigError::Validation(
                "pole_count must be >= color_count".into(),
            ));
        }
        Ok(())
    }
}

/// Limits for a single solver invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of states expanded before giving up.
    pub node_budget: usize,
    /// Optional wall-clock limit.
    pub time_budget: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            node_budget: 500_000,
            time_budget: None,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_budget == 0 {
            return Err(ConfigError::Validation("node_budget must be > 0".into()));
        }
        if self.time_budget.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::Validation("time_budget must be > 0".into()));
        }
        Ok(())
    }
}
