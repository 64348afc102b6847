use crate::engine::{Pole, PuzzleState};
use crate::error::SearchError;
use crate::moves::{legal_moves, Move};
use log::trace;

/// Score subtracted for every full, single-color pole.
pub const SOLVED_POLE_BONUS: i32 = 10;

/// True if the pole is full and holds a single color.
fn is_solved_pole(pole: &Pole, capacity: usize) -> bool {
    !pole.is_empty() && pole.is_full(capacity) && pole.is_monochrome()
}

/// Counts the full, single-color poles on the board.
pub fn count_solved_poles(state: &PuzzleState) -> usize {
    state
        .poles()
        .iter()
        .filter(|pole| is_solved_pole(pole, state.max_rings()))
        .count()
}

/// Estimates how far `state` is from solved. Lower is better.
///
/// Each full single-color pole earns `-SOLVED_POLE_BONUS`; every other non-empty
/// pole adds one point per color beyond the first. Empty poles score zero.
///
/// The estimate can exceed the true number of remaining moves, so a search
/// ordered by it is greedy best-first rather than optimal A*.
///
/// # Examples
/// ```
/// use ringsort_solver::engine::PuzzleState;
/// use ringsort_solver::heuristics::score;
///
/// // Four poles with four colors each: 4 * (4 - 1).
/// assert_eq!(score(&PuzzleState::reference()), 12);
/// ```
pub fn score(state: &PuzzleState) -> i32 {
    state
        .poles()
        .iter()
        .filter(|pole| !pole.is_empty())
        .map(|pole| {
            if is_solved_pole(pole, state.max_rings()) {
                -SOLVED_POLE_BONUS
            } else {
                pole.distinct_colors() as i32 - 1
            }
        })
        .sum()
}

/// A suggested next move and the score of the position it leads to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hint {
    pub mv: Move,
    pub score: i32,
}

/// Suggests a move by one-ply lookahead.
///
/// Every legal move is tried on a copy of `state` and the successor with the
/// lowest [`score`] wins; on ties the first move in enumeration order is kept.
/// This does not look further ahead, so the hint need not lie on a solving path.
///
/// # Returns
/// * `Ok(Hint)` with the chosen move.
/// * `Err(SearchError::NoLegalMove)` if no move is possible.
pub fn suggest_move(state: &PuzzleState) -> Result<Hint, SearchError> {
    let mut best: Option<Hint> = None;

    for mv in legal_moves(state) {
        let mut next = state.clone();
        if next.apply_move(mv.from, mv.to).is_err() {
            continue;
        }
        let candidate_score = score(&next);
        trace!("hint candidate {}: score {}", mv, candidate_score);

        if best.map_or(true, |b| candidate_score < b.score) {
            best = Some(Hint {
                mv,
                score: candidate_score,
            });
        }
    }

    best.ok_or(SearchError::NoLegalMove)
}
