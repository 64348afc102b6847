//! # Ring Sort Solver Library
//!
//! This library provides the core game logic for the ring sort puzzle, where
//! colored rings are moved one at a time between capacity-bounded poles until
//! every color fills its own pole, plus a best-first solver and a one-move
//! hint advisor.
//!
//! It is used by three binaries:
//! - `human_player`: Interactive gameplay on the command line, with hints.
//! - `ai_solver`: Solves a reference, random or file-supplied puzzle and prints the moves.
//! - `hint_evaluator`: Plays seeded random puzzles with hints alone and compares
//!   the outcome with the solver.
//!
//! ## Modules
//! - `engine`: Rings (`Ring`), poles (`Pole`) and the game state (`PuzzleState`)
//!   with move validation, move application and the goal test.
//! - `moves`: The `Move` type and legal move enumeration.
//! - `heuristics`: The disorder score and the hint advisor.
//! - `solver`: Provides `solve_best_first` for finding a solving move sequence.
//! - `config`: Puzzle and solver limits.
//! - `error`: Error types returned by the modules above.
//! - `utils`: Parsing puzzle layouts from text.

pub mod config;
pub mod engine;
pub mod error;
pub mod heuristics;
pub mod moves;
pub mod solver;
pub mod utils;

pub use config::{PuzzleConfig, SolverConfig};
pub use engine::{Pole, PuzzleState, Ring};
pub use error::{ConfigError, LayoutError, MoveError, SearchError};
pub use heuristics::{score, suggest_move, Hint};
pub use moves::{legal_moves, Move};
pub use solver::{solve_best_first, SearchStats, Solution};
