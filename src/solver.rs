use crate::config::SolverConfig;
use crate::engine::{Pole, PuzzleState};
use crate::error::SearchError;
use crate::heuristics::score;
use crate::moves::{legal_moves, Move};
use log::{debug, info};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::{Duration, Instant};

/// Represents a solution found by the solver.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Moves that solve the puzzle, starting from the state handed to the solver.
    /// Moves the input state already had in its history are not included.
    pub moves: Vec<Move>,
    /// The solved position, with its full move history.
    pub final_state: PuzzleState,
    pub stats: SearchStats,
}

/// Counters describing one solver run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States taken off the frontier and expanded.
    pub expanded: usize,
    /// States pushed onto the frontier, including the start.
    pub generated: usize,
    /// Popped states dropped because their layout was already expanded.
    pub duplicates: usize,
    pub elapsed: Duration,
}

struct Node {
    state: PuzzleState,
    priority: i64,
    g: usize,
    seq: u64,
}

impl Eq for Node {}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.g == other.g && self.seq == other.seq
    }
}
// BinaryHeap is a max-heap: lowest priority, then fewest moves, then oldest node ranks highest.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The frontier seed: `initial` at zero moves, keyed like every other node.
fn start_node(initial: &PuzzleState) -> Node {
    Node {
        state: initial.clone(),
        priority: i64::from(score(initial)),
        g: 0,
        seq: 0,
    }
}

/// Solves the puzzle with a best-first search ordered by `(moves + score, moves)`.
///
/// Every expanded successor is an independent clone of its parent, so the
/// caller's `initial` is never touched. Layouts already expanded are skipped.
/// Because [`score`] can overestimate, the result is a solution but not
/// necessarily the shortest one.
///
/// # Returns
/// * `Ok(Solution)` once a solved state is popped. Already-solved input yields no moves.
/// * `Err(SearchError::Unsolvable)` if every reachable layout was expanded.
/// * `Err(SearchError::BudgetExhausted)` if the node or time budget ran out first.
///
/// # Examples
/// ```
/// use ringsort_solver::config::SolverConfig;
/// use ringsort_solver::engine::PuzzleState;
/// use ringsort_solver::solver::solve_best_first;
///
/// let start = PuzzleState::reference();
/// let solution = solve_best_first(&start, &SolverConfig::default()).unwrap();
///
/// let mut replay = start.clone();
/// for mv in &solution.moves {
///     replay.apply_move(mv.from, mv.to).unwrap();
/// }
/// assert!(replay.is_solved());
/// ```
pub fn solve_best_first(
    initial: &PuzzleState,
    config: &SolverConfig,
) -> Result<Solution, SearchError> {
    let started_at = Instant::now();
    let history_offset = initial.move_count();
    let mut stats = SearchStats::default();

    let mut visited: HashSet<Vec<Pole>> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut next_seq = 0u64;

    frontier.push(start_node(initial));
    next_seq += 1;
    stats.generated += 1;

    info!(
        "best-first search started (node budget {}, time budget {:?})",
        config.node_budget, config.time_budget
    );

    while let Some(node) = frontier.pop() {
        if node.state.is_solved() {
            stats.elapsed = started_at.elapsed();
            info!(
                "solved in {} moves after expanding {} states ({:?})",
                node.g, stats.expanded, stats.elapsed
            );
            return Ok(Solution {
                moves: node.state.moves()[history_offset..].to_vec(),
                final_state: node.state,
                stats,
            });
        }

        if visited.contains(node.state.layout()) {
            stats.duplicates += 1;
            continue;
        }

        if stats.expanded >= config.node_budget
            || config
                .time_budget
                .is_some_and(|limit| started_at.elapsed() >= limit)
        {
            info!(
                "search budget exhausted after expanding {} states",
                stats.expanded
            );
            return Err(SearchError::BudgetExhausted {
                explored: stats.expanded,
            });
        }

        visited.insert(node.state.layout().to_vec());
        stats.expanded += 1;
        if stats.expanded % 10_000 == 0 {
            debug!(
                "expanded {} states, frontier {}, visited {}",
                stats.expanded,
                frontier.len(),
                visited.len()
            );
        }

        for mv in legal_moves(&node.state) {
            let mut next_state = node.state.clone();
            if next_state.apply_move(mv.from, mv.to).is_err() {
                continue;
            }
            // Already expanded layouts would be discarded on pop.
            if visited.contains(next_state.layout()) {
                continue;
            }
            let g = node.g + 1;
            frontier.push(Node {
                priority: g as i64 + i64::from(score(&next_state)),
                state: next_state,
                g,
                seq: next_seq,
            });
            next_seq += 1;
            stats.generated += 1;
        }
    }

    info!(
        "no solution: frontier empty after expanding {} states",
        stats.expanded
    );
    Err(SearchError::Unsolvable {
        explored: stats.expanded,
    })
}
