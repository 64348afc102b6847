//! Move representation and legal move enumeration.
use crate::engine::PuzzleState;
use std::fmt;

/// A single-ring transfer from one pole to another, by zero-based index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub fn new(from: usize, to: usize) -> Self {
        Move { from, to }
    }
}

impl From<(usize, usize)> for Move {
    fn from((from, to): (usize, usize)) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Lists every legal move from `state`.
///
/// Pairs with `from == to` are skipped. The order is ascending by source, then
/// by destination, so searches built on this are reproducible.
///
/// # Examples
/// ```
/// use ringsort_solver::engine::PuzzleState;
/// use ringsort_solver::moves::{legal_moves, Move};
///
/// let game = PuzzleState::reference();
/// let moves = legal_moves(&game);
/// assert_eq!(moves.len(), 8); // four tops onto two empty poles
/// assert_eq!(moves[0], Move::new(0, 4));
/// ```
pub fn legal_moves(state: &PuzzleState) -> Vec<Move> {
    let pole_count = state.pole_count();
    (0..pole_count)
        .flat_map(|from| (0..pole_count).map(move |to| Move::new(from, to)))
        .filter(|mv| mv.from != mv.to && state.is_valid_move(mv.from, mv.to).is_ok())
        .collect()
}
