//! Error types for the ring sort engine.
//!
//! Every failure here is recoverable: callers get a value back and the
//! puzzle they were working on stays valid and playable.
use crate::engine::Ring;

/// Why a move request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid pole index: move {from} -> {to} with {pole_count} poles")]
    InvalidPoleIndex {
        from: usize,
        to: usize,
        pole_count: usize,
    },

    #[error("source pole {0} is empty")]
    EmptySource(usize),

    #[error("destination pole {pole} cannot hold more rings (max {capacity})")]
    DestinationFull { pole: usize, capacity: usize },

    #[error("top ring colors do not match: {from_color} (source) vs {to_color} (destination)")]
    ColorMismatch { from_color: Ring, to_color: Ring },
}

/// Outcome of a solver or hint request that produced no move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no solution found after expanding {explored} states")]
    Unsolvable { explored: usize },

    #[error("search budget exhausted after expanding {explored} states")]
    BudgetExhausted { explored: usize },

    #[error("no legal move available")]
    NoLegalMove,
}

/// Errors raised while building a puzzle from a layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("unrecognized ring code '{code}' on pole {pole}")]
    UnknownRing { code: char, pole: usize },

    #[error("pole {pole} holds {len} rings (max {capacity})")]
    PoleOverCapacity {
        pole: usize,
        len: usize,
        capacity: usize,
    },

    #[error("expected {expected} poles, found {found}")]
    PoleCount { expected: usize, found: usize },

    #[error("layout uses {found} colors but the puzzle is configured for {expected}")]
    ColorCount { expected: usize, found: usize },

    #[error("layout has {found} {color} rings, expected {expected}")]
    RingCount {
        color: Ring,
        expected: usize,
        found: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::DestinationFull {
            pole: 2,
            capacity: 4,
        };
        assert_eq!(
            err.to_string(),
            "destination pole 2 cannot hold more rings (max 4)"
        );

        let err = MoveError::ColorMismatch {
            from_color: Ring::Purple,
            to_color: Ring::Green,
        };
        assert_eq!(
            err.to_string(),
            "top ring colors do not match: purple (source) vs green (destination)"
        );
    }

    #[test]
    fn test_search_error_display() {
        let err = SearchError::Unsolvable { explored: 3 };
        assert_eq!(err.to_string(), "no solution found after expanding 3 states");
        assert_eq!(SearchError::NoLegalMove.to_string(), "no legal move available");
    }

    #[test]
    fn test_layout_error_from_config() {
        let err: LayoutError = ConfigError::Validation("max_rings must be > 0".into()).into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: config validation error: max_rings must be > 0"
        );
    }
}
