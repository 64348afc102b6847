//! Core game engine for the ring sort puzzle.
//!
//! This module defines the game's fundamental components:
//! - `Ring`: The colored tokens that get sorted.
//! - `Pole`: A capacity-bounded stack of rings; the last ring is the top.
//! - `PuzzleState`: The poles, the append-only move history and the puzzle limits,
//!   with move validation, move application and the goal test.
use crate::config::PuzzleConfig;
use crate::error::{LayoutError, MoveError};
use crate::moves::Move;
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// The color of a ring.
///
/// The palette is fixed; a puzzle uses the first `color_count` entries of [`Ring::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ring {
    Purple,
    Orange,
    Pink,
    Green,
    Red,
    Blue,
    Yellow,
    Cyan,
}

impl Ring {
    /// Every color in palette order.
    pub const ALL: [Ring; 8] = [
        Ring::Purple,
        Ring::Orange,
        Ring::Pink,
        Ring::Green,
        Ring::Red,
        Ring::Blue,
        Ring::Yellow,
        Ring::Cyan,
    ];

    /// Converts the ring to its single-character layout code.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringsort_solver::engine::Ring;
    /// assert_eq!(Ring::Purple.to_char(), 'P');
    /// assert_eq!(Ring::Pink.to_char(), 'K');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Ring::Purple => 'P',
            Ring::Orange => 'O',
            Ring::Pink => 'K',
            Ring::Green => 'G',
            Ring::Red => 'R',
            Ring::Blue => 'B',
            Ring::Yellow => 'Y',
            Ring::Cyan => 'C',
        }
    }

    /// Parses a layout code produced by [`Ring::to_char`]. Case-insensitive.
    pub fn from_char(code: char) -> Option<Ring> {
        Ring::ALL
            .into_iter()
            .find(|ring| ring.to_char() == code.to_ascii_uppercase())
    }

    /// Lowercase color name.
    pub fn name(&self) -> &'static str {
        match self {
            Ring::Purple => "purple",
            Ring::Orange => "orange",
            Ring::Pink => "pink",
            Ring::Green => "green",
            Ring::Red => "red",
            Ring::Blue => "blue",
            Ring::Yellow => "yellow",
            Ring::Cyan => "cyan",
        }
    }

    /// Returns the ANSI background color code string for terminal output.
    fn to_ansi_color_code(&self) -> &'static str {
        match self {
            Ring::Purple => "48;5;90",
            Ring::Orange => "48;5;208",
            Ring::Pink => "48;5;218",
            Ring::Green => "42",
            Ring::Red => "41",
            Ring::Blue => "44",
            Ring::Yellow => "103",
            Ring::Cyan => "46",
        }
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stack of rings. Index 0 is the bottom, the last ring is the top.
///
/// Capacity is not stored on the pole; it belongs to the puzzle that owns it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pole {
    rings: Vec<Ring>,
}

impl Pole {
    /// Creates an empty pole.
    pub fn new() -> Self {
        Pole { rings: Vec::new() }
    }

    /// Rings from bottom to top.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// The ring that would be moved next, if any.
    pub fn top(&self) -> Option<Ring> {
        self.rings.last().copied()
    }

    pub fn is_full(&self, capacity: usize) -> bool {
        self.rings.len() == capacity
    }

    /// True if every ring on the pole has the same color. Vacuously true when empty.
    pub fn is_monochrome(&self) -> bool {
        self.rings.windows(2).all(|pair| pair[0] == pair[1])
    }

    /// Number of different colors on the pole.
    pub fn distinct_colors(&self) -> usize {
        self.rings.iter().collect::<HashSet<_>>().len()
    }

    fn push(&mut self, ring: Ring) {
        self.rings.push(ring);
    }

    fn pop(&mut self) -> Option<Ring> {
        self.rings.pop()
    }
}

impl From<Vec<Ring>> for Pole {
    fn from(rings: Vec<Ring>) -> Self {
        Pole { rings }
    }
}

/// The reference starting layout: four mixed poles of four rings plus two empty poles.
pub fn reference_layout() -> Vec<Pole> {
    use Ring::{Green, Orange, Pink, Purple};
    vec![
        Pole::from(vec![Purple, Orange, Pink, Green]),
        Pole::from(vec![Orange, Green, Purple, Pink]),
        Pole::from(vec![Green, Pink, Orange, Purple]),
        Pole::from(vec![Pink, Purple, Green, Orange]),
        Pole::new(),
        Pole::new(),
    ]
}

/// Number of distinct colors across a layout.
pub fn count_layout_colors(poles: &[Pole]) -> usize {
    poles
        .iter()
        .flat_map(|p| p.rings().iter())
        .collect::<HashSet<_>>()
        .len()
}

/// A game in progress: the poles, the moves made so far and the puzzle limits.
///
/// Cloning yields a fully independent copy; the solver and hint advisor rely on
/// this to explore successors without touching the caller's state.
///
/// # Examples
/// ```
/// use ringsort_solver::engine::PuzzleState;
///
/// let mut game = PuzzleState::reference();
/// assert!(game.is_valid_move(0, 4).is_ok());
/// game.apply_move(0, 4).unwrap();
/// assert_eq!(game.move_count(), 1);
/// assert!(game.apply_move(4, 0).is_err()); // green onto pink
/// assert!(!game.is_solved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleState {
    poles: Vec<Pole>,
    initial_poles: Arc<[Pole]>,
    moves: Vec<Move>,
    max_rings: usize,
    max_moves: usize,
    color_count: usize,
}

impl PuzzleState {
    /// The reference puzzle: 6 poles, capacity 4, 4 colors, 50 moves.
    pub fn reference() -> Self {
        Self::new_unchecked(reference_layout(), &PuzzleConfig::default())
    }

    /// Creates a puzzle from a supplied layout.
    ///
    /// The layout must have exactly `config.pole_count` poles, none over
    /// `config.max_rings`, using at most `config.color_count` colors. The ring
    /// total is not checked, so partial boards can be built for analysis.
    pub fn from_poles(poles: Vec<Pole>, config: &PuzzleConfig) -> Result<Self, LayoutError> {
        config.validate()?;

        if poles.len() != config.pole_count {
            return Err(LayoutError::PoleCount {
                expected: config.pole_count,
                found: poles.len(),
            });
        }
        if let Some((pole, over)) = poles
            .iter()
            .enumerate()
            .find(|(_, p)| p.len() > config.max_rings)
        {
            return Err(LayoutError::PoleOverCapacity {
                pole,
                len: over.len(),
                capacity: config.max_rings,
            });
        }
        let colors = count_layout_colors(&poles);
        if colors > config.color_count {
            return Err(LayoutError::ColorCount {
                expected: config.color_count,
                found: colors,
            });
        }

        Ok(Self::new_unchecked(poles, config))
    }

    /// Creates a puzzle that can actually be won from a supplied layout.
    ///
    /// On top of the [`PuzzleState::from_poles`] checks, the layout must use
    /// exactly `config.color_count` colors with exactly `config.max_rings`
    /// rings of each, otherwise [`PuzzleState::is_solved`] could never hold.
    pub fn from_poles_for_play(poles: Vec<Pole>, config: &PuzzleConfig) -> Result<Self, LayoutError> {
        config.validate()?;

        let colors = count_layout_colors(&poles);
        if colors != config.color_count {
            return Err(LayoutError::ColorCount {
                expected: config.color_count,
                found: colors,
            });
        }

        let mut per_color: HashMap<Ring, usize> = HashMap::new();
        for ring in poles.iter().flat_map(|p| p.rings().iter().copied()) {
            *per_color.entry(ring).or_default() += 1;
        }
        let mut counts: Vec<(Ring, usize)> = per_color.into_iter().collect();
        counts.sort_unstable();
        if let Some(&(color, found)) = counts.iter().find(|(_, n)| *n != config.max_rings) {
            return Err(LayoutError::RingCount {
                color,
                expected: config.max_rings,
                found,
            });
        }

        Self::from_poles(poles, config)
    }

    /// Creates a shuffled puzzle from a seed.
    ///
    /// All `color_count * max_rings` rings are shuffled and dealt onto the first
    /// `color_count` poles; the remaining poles start empty. The same seed and
    /// configuration always produce the same puzzle.
    pub fn new_random_with_seed(seed: u64, config: &PuzzleConfig) -> Result<Self, LayoutError> {
        config.validate()?;

        let mut rings: Vec<Ring> = Ring::ALL[..config.color_count]
            .iter()
            .flat_map(|&ring| std::iter::repeat(ring).take(config.max_rings))
            .collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        rings.shuffle(&mut rng);

        let mut poles: Vec<Pole> = rings
            .chunks(config.max_rings)
            .map(|chunk| Pole::from(chunk.to_vec()))
            .collect();
        poles.resize(config.pole_count, Pole::new());

        Ok(Self::new_unchecked(poles, config))
    }

    fn new_unchecked(poles: Vec<Pole>, config: &PuzzleConfig) -> Self {
        PuzzleState {
            initial_poles: poles.clone().into(),
            poles,
            moves: Vec::new(),
            max_rings: config.max_rings,
            max_moves: config.max_moves,
            color_count: config.color_count,
        }
    }

    pub fn poles(&self) -> &[Pole] {
        &self.poles
    }

    /// Returns the pole at `index`, or `None` if out of range.
    pub fn pole(&self, index: usize) -> Option<&Pole> {
        self.poles.get(index)
    }

    pub fn pole_count(&self) -> usize {
        self.poles.len()
    }

    /// Moves applied since construction or the last reset, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn max_moves(&self) -> usize {
        self.max_moves
    }

    pub fn max_rings(&self) -> usize {
        self.max_rings
    }

    pub fn color_count(&self) -> usize {
        self.color_count
    }

    /// Total rings across all poles.
    pub fn ring_count(&self) -> usize {
        self.poles.iter().map(Pole::len).sum()
    }

    pub fn moves_remaining(&self) -> usize {
        self.max_moves.saturating_sub(self.moves.len())
    }

    /// True once the move budget is used up. The engine never refuses moves
    /// because of this; deciding a loss is up to the driver.
    pub fn is_out_of_moves(&self) -> bool {
        self.moves.len() >= self.max_moves
    }

    /// The pole contents alone. Two states with equal layouts are the same
    /// position regardless of how they were reached.
    pub fn layout(&self) -> &[Pole] {
        &self.poles
    }

    /// The run of same-colored rings at the top of a pole, bottom to top.
    ///
    /// Informational only: a move always relocates exactly one ring.
    /// Returns an empty vector for an empty pole or an out-of-range index.
    pub fn movable_run(&self, pole_index: usize) -> Vec<Ring> {
        let Some(pole) = self.poles.get(pole_index) else {
            return Vec::new();
        };
        let Some(top) = pole.top() else {
            return Vec::new();
        };
        let run_len = pole.rings().iter().rev().take_while(|&&r| r == top).count();
        let run = pole.rings()[pole.len() - run_len..].to_vec();
        trace!("movable run on pole {}: {:?}", pole_index, run);
        run
    }

    /// Checks whether the top ring of `from` may be placed on `to`.
    ///
    /// Checks run in order: both indices in range, source non-empty,
    /// destination below capacity, then destination empty or topped with the
    /// same color. `from == to` is not rejected on its own.
    pub fn is_valid_move(&self, from: usize, to: usize) -> Result<(), MoveError> {
        let pole_count = self.poles.len();
        if from >= pole_count || to >= pole_count {
            return Err(MoveError::InvalidPoleIndex {
                from,
                to,
                pole_count,
            });
        }

        let Some(from_color) = self.poles[from].top() else {
            return Err(MoveError::EmptySource(from));
        };

        let destination = &self.poles[to];
        if destination.len() + 1 > self.max_rings {
            return Err(MoveError::DestinationFull {
                pole: to,
                capacity: self.max_rings,
            });
        }

        match destination.top() {
            Some(to_color) if to_color != from_color => Err(MoveError::ColorMismatch {
                from_color,
                to_color,
            }),
            _ => Ok(()),
        }
    }

    /// Moves the top ring of `from` onto `to` and records the move.
    ///
    /// All-or-nothing: on error the state is left exactly as it was.
    pub fn apply_move(&mut self, from: usize, to: usize) -> Result<(), MoveError> {
        self.is_valid_move(from, to)
            .inspect_err(|e| trace!("rejected move {} -> {}: {}", from, to, e))?;

        let Some(ring) = self.poles[from].pop() else {
            return Err(MoveError::EmptySource(from));
        };
        self.poles[to].push(ring);
        self.moves.push(Move::new(from, to));
        debug!("moved {} from pole {} to pole {}", ring, from, to);
        Ok(())
    }

    /// True iff every non-empty pole is full and monochrome, no two such poles
    /// share a color, and together they hold all `color_count * max_rings` rings.
    pub fn is_solved(&self) -> bool {
        let mut colors_seen = HashSet::new();
        let mut full_poles = 0;
        let mut total_rings = 0;

        for pole in &self.poles {
            let Some(color) = pole.top() else {
                continue;
            };
            if !pole.is_full(self.max_rings) || !pole.is_monochrome() {
                return false;
            }
            if !colors_seen.insert(color) {
                return false;
            }
            full_poles += 1;
            total_rings += pole.len();
        }

        full_poles == self.color_count && total_rings == self.color_count * self.max_rings
    }

    /// Restores the layout the puzzle started with and clears the history.
    pub fn reset(&mut self) {
        self.poles = self.initial_poles.to_vec();
        self.moves.clear();
    }

    /// Renders the board with an optional highlighted pole.
    ///
    /// Rings are drawn bottom-up with ANSI colors and their layout code; the
    /// highlighted pole's index is wrapped in brackets.
    pub fn to_string_with_highlight(&self, selected: Option<usize>) -> String {
        let mut output = String::new();

        for level in (0..self.max_rings).rev() {
            for pole in &self.poles {
                match pole.rings().get(level) {
                    Some(ring) => output.push_str(&format!(
                        " \x1b[1;{}m {} \x1b[m",
                        ring.to_ansi_color_code(),
                        ring.to_char()
                    )),
                    None => output.push_str("  |  "),
                }
            }
            output.push('\n');
        }

        output.push_str(&"=====".repeat(self.poles.len()));
        output.push('\n');

        for index in 0..self.poles.len() {
            if selected == Some(index) {
                output.push_str(&format!(" [{}] ", index));
            } else {
                output.push_str(&format!("  {}  ", index));
            }
        }

        output
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::reference()
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_highlight(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::legal_moves;
    use crate::config::SolverConfig;
    use crate::solver::solve_best_first;
    use crate::utils::{layout_from_str_array, puzzle_from_str_array};
    use rand::Rng;

    fn solved_board() -> PuzzleState {
        puzzle_from_str_array(&["PPPP", "OOOO", "", "KKKK", "GGGG", ""], &PuzzleConfig::default())
            .unwrap()
    }

    #[test]
    fn test_reference_puzzle() {
        let game = PuzzleState::reference();
        assert_eq!(game.pole_count(), 6);
        assert_eq!(game.ring_count(), 16);
        assert_eq!(game.max_rings(), 4);
        assert_eq!(game.max_moves(), 50);
        assert_eq!(game.color_count(), 4);
        assert_eq!(game.pole(0).unwrap().top(), Some(Ring::Green));
        assert!(game.pole(4).unwrap().is_empty());
        assert!(game.moves().is_empty());
        assert!(!game.is_solved());
        assert_eq!(game, PuzzleState::default());
    }

    #[test]
    fn test_ring_codes() {
        for ring in Ring::ALL {
            assert_eq!(Ring::from_char(ring.to_char()), Some(ring));
        }
        assert_eq!(Ring::from_char('k'), Some(Ring::Pink));
        assert_eq!(Ring::from_char('X'), None);
    }

    #[test]
    fn test_pole_helpers() {
        let pole = Pole::from(vec![Ring::Green, Ring::Pink, Ring::Pink]);
        assert_eq!(pole.top(), Some(Ring::Pink));
        assert_eq!(pole.distinct_colors(), 2);
        assert!(!pole.is_monochrome());
        assert!(!pole.is_full(4));
        assert!(pole.is_full(3));
        assert!(Pole::new().is_monochrome());
        assert_eq!(Pole::new().distinct_colors(), 0);
    }

    #[test]
    fn test_move_onto_empty_pole_is_valid() {
        let game = PuzzleState::reference();
        for from in 0..4 {
            assert_eq!(game.is_valid_move(from, 4), Ok(()));
            assert_eq!(game.is_valid_move(from, 5), Ok(()));
        }
    }

    #[test]
    fn test_invalid_pole_index() {
        let game = PuzzleState::reference();
        assert_eq!(
            game.is_valid_move(6, 0),
            Err(MoveError::InvalidPoleIndex {
                from: 6,
                to: 0,
                pole_count: 6
            })
        );
        assert!(matches!(
            game.is_valid_move(0, 99),
            Err(MoveError::InvalidPoleIndex { .. })
        ));
    }

    #[test]
    fn test_empty_source() {
        let game = PuzzleState::reference();
        assert_eq!(game.is_valid_move(4, 5), Err(MoveError::EmptySource(4)));
    }

    #[test]
    fn test_destination_full() {
        let game = PuzzleState::reference();
        assert_eq!(
            game.is_valid_move(0, 1),
            Err(MoveError::DestinationFull {
                pole: 1,
                capacity: 4
            })
        );
    }

    #[test]
    fn test_color_mismatch() {
        let game = puzzle_from_str_array(&["PG", "OK", "", "", "", ""], &PuzzleConfig::default())
            .unwrap();
        assert_eq!(
            game.is_valid_move(0, 1),
            Err(MoveError::ColorMismatch {
                from_color: Ring::Green,
                to_color: Ring::Pink
            })
        );
    }

    #[test]
    fn test_matching_top_color_is_valid() {
        let game = puzzle_from_str_array(&["PG", "OG", "", "", "", ""], &PuzzleConfig::default())
            .unwrap();
        assert_eq!(game.is_valid_move(0, 1), Ok(()));
        assert_eq!(game.is_valid_move(1, 0), Ok(()));
    }

    #[test]
    fn test_same_index_still_enforces_rules() {
        let game = puzzle_from_str_array(&["PPPP", "OG", "", "", "", ""], &PuzzleConfig::default())
            .unwrap();
        // A full pole onto itself hits the capacity rule.
        assert_eq!(
            game.is_valid_move(0, 0),
            Err(MoveError::DestinationFull {
                pole: 0,
                capacity: 4
            })
        );
        // An empty pole onto itself has nothing to move.
        assert_eq!(game.is_valid_move(2, 2), Err(MoveError::EmptySource(2)));
        // A partial pole's top always matches itself.
        assert_eq!(game.is_valid_move(1, 1), Ok(()));
    }

    #[test]
    fn test_apply_move_success() {
        let mut game = PuzzleState::reference();
        assert_eq!(game.apply_move(0, 4), Ok(()));
        assert_eq!(game.pole(0).unwrap().rings(), &[Ring::Purple, Ring::Orange, Ring::Pink]);
        assert_eq!(game.pole(4).unwrap().rings(), &[Ring::Green]);
        assert_eq!(game.moves(), &[Move::new(0, 4)]);

        // Pink onto pink after freeing room on pole 0.
        assert_eq!(game.apply_move(1, 0), Ok(()));
        assert_eq!(game.pole(0).unwrap().top(), Some(Ring::Pink));
        assert_eq!(game.move_count(), 2);
        assert_eq!(game.ring_count(), 16);
    }

    #[test]
    fn test_failed_apply_leaves_state_untouched() {
        let mut game = PuzzleState::reference();
        game.apply_move(0, 4).unwrap();
        let before = game.clone();

        assert!(game.apply_move(0, 1).is_err()); // full
        assert!(game.apply_move(5, 1).is_err()); // empty source
        assert!(game.apply_move(4, 0).is_err()); // color mismatch
        assert!(game.apply_move(0, 17).is_err()); // out of range

        assert_eq!(game, before);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_is_solved_true() {
        let game = solved_board();
        assert!(game.is_solved());
    }

    #[test]
    fn test_is_solved_false_cases() {
        let config = PuzzleConfig::default();

        let empty = puzzle_from_str_array(&["", "", "", "", "", ""], &config).unwrap();
        assert!(!empty.is_solved(), "empty board");

        let partial = puzzle_from_str_array(&["PPPP", "OOOO", "KKK", "GGGG", "K", ""], &config)
            .unwrap();
        assert!(!partial.is_solved(), "partially filled pole");

        let mixed = puzzle_from_str_array(&["PPPO", "OOOP", "KKKK", "GGGG", "", ""], &config)
            .unwrap();
        assert!(!mixed.is_solved(), "mixed full poles");

        let duplicate = puzzle_from_str_array(&["PPPP", "PPPP", "", "", "", ""], &config).unwrap();
        assert!(!duplicate.is_solved(), "two poles completing the same color");

        let too_few = puzzle_from_str_array(&["PPPP", "OOOO", "KKKK", "", "", ""], &config).unwrap();
        assert!(!too_few.is_solved(), "only three colors complete");

        assert!(!PuzzleState::reference().is_solved());
    }

    #[test]
    fn test_movable_run() {
        let game = puzzle_from_str_array(&["PGGG", "OK", "", "", "", ""], &PuzzleConfig::default())
            .unwrap();
        assert_eq!(game.movable_run(0), vec![Ring::Green; 3]);
        assert_eq!(game.movable_run(1), vec![Ring::Pink]);
        assert!(game.movable_run(2).is_empty());
        assert!(game.movable_run(42).is_empty());
    }

    #[test]
    fn test_move_relocates_only_top_ring() {
        let mut game = puzzle_from_str_array(&["PGGG", "", "", "", "", ""], &PuzzleConfig::default())
            .unwrap();
        game.apply_move(0, 1).unwrap();
        assert_eq!(game.pole(0).unwrap().len(), 3);
        assert_eq!(game.pole(1).unwrap().rings(), &[Ring::Green]);
    }

    #[test]
    fn test_conservation_over_random_play() {
        let mut game = PuzzleState::reference();
        let mut rng = SmallRng::seed_from_u64(7);
        let initial_total = game.ring_count();

        for step in 0..300 {
            let moves = legal_moves(&game);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            game.apply_move(mv.from, mv.to).unwrap();

            assert_eq!(game.ring_count(), initial_total);
            assert!(game.poles().iter().all(|p| p.len() <= game.max_rings()));
            assert_eq!(game.move_count(), step + 1);
        }
    }

    #[test]
    fn test_moves_remaining_and_out_of_moves() {
        let config = PuzzleConfig {
            max_moves: 2,
            ..PuzzleConfig::default()
        };
        let mut game = PuzzleState::from_poles(reference_layout(), &config).unwrap();
        assert_eq!(game.moves_remaining(), 2);
        game.apply_move(0, 4).unwrap();
        assert!(!game.is_out_of_moves());
        game.apply_move(1, 5).unwrap();
        assert_eq!(game.moves_remaining(), 0);
        assert!(game.is_out_of_moves());
        // The engine keeps accepting legal moves past the budget.
        assert!(game.apply_move(0, 5).is_ok());
        assert_eq!(game.moves_remaining(), 0);
    }

    #[test]
    fn test_reset() {
        let mut game = PuzzleState::reference();
        game.apply_move(0, 4).unwrap();
        game.apply_move(0, 5).unwrap();
        game.reset();
        assert_eq!(game, PuzzleState::reference());
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_from_poles_validation() {
        let config = PuzzleConfig::default();

        let short = reference_layout()[..5].to_vec();
        assert_eq!(
            PuzzleState::from_poles(short, &config),
            Err(LayoutError::PoleCount {
                expected: 6,
                found: 5
            })
        );

        let mut over = reference_layout();
        over[4] = Pole::from(vec![Ring::Green; 5]);
        assert_eq!(
            PuzzleState::from_poles(over, &config),
            Err(LayoutError::PoleOverCapacity {
                pole: 4,
                len: 5,
                capacity: 4
            })
        );

        let mut colorful = reference_layout();
        colorful[4] = Pole::from(vec![Ring::Red]);
        assert_eq!(
            PuzzleState::from_poles(colorful, &config),
            Err(LayoutError::ColorCount {
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn test_from_poles_for_play_requires_full_color_sets() {
        let config = PuzzleConfig::default();

        // Two colors on a board configured for four can never be solved.
        let two_colors = layout_from_str_array(&["PPPO", "OOOP", "", "", "", ""]).unwrap();
        assert!(PuzzleState::from_poles(two_colors.clone(), &config).is_ok());
        assert_eq!(
            PuzzleState::from_poles_for_play(two_colors.clone(), &config),
            Err(LayoutError::ColorCount {
                expected: 4,
                found: 2
            })
        );

        let two_color_config = PuzzleConfig {
            color_count: 2,
            ..config
        };
        let game = PuzzleState::from_poles_for_play(two_colors, &two_color_config).unwrap();
        let solution = solve_best_first(&game, &SolverConfig::default()).unwrap();
        let mut replay = game.clone();
        for mv in &solution.moves {
            replay.apply_move(mv.from, mv.to).unwrap();
        }
        assert!(replay.is_solved());

        let uneven = layout_from_str_array(&["PPPO", "OOOP", "KKKK", "GGG", "G", "P"]).unwrap();
        assert_eq!(
            PuzzleState::from_poles_for_play(uneven, &config),
            Err(LayoutError::RingCount {
                color: Ring::Purple,
                expected: 4,
                found: 5
            })
        );

        assert!(PuzzleState::from_poles_for_play(reference_layout(), &config).is_ok());
    }

    #[test]
    fn test_new_random_with_seed() {
        let config = PuzzleConfig::default();
        let a = PuzzleState::new_random_with_seed(123, &config).unwrap();
        let b = PuzzleState::new_random_with_seed(123, &config).unwrap();
        assert_eq!(a, b, "same seed must produce the same puzzle");

        assert_eq!(a.ring_count(), config.total_rings());
        assert_eq!(a.pole_count(), config.pole_count);
        assert!(a.poles()[..4].iter().all(|p| p.is_full(4)));
        assert!(a.poles()[4..].iter().all(Pole::is_empty));

        let seeds_differ = (124..134).any(|seed| {
            PuzzleState::new_random_with_seed(seed, &config).unwrap().layout() != a.layout()
        });
        assert!(seeds_differ);
    }

    #[test]
    fn test_new_random_rejects_bad_config() {
        let config = PuzzleConfig {
            pole_count: 2,
            ..PuzzleConfig::default()
        };
        assert!(matches!(
            PuzzleState::new_random_with_seed(1, &config),
            Err(LayoutError::Config(_))
        ));
    }

    #[test]
    fn test_display_board_formatting() {
        let game = PuzzleState::reference();
        let display = format!("{}", game);
        // max_rings ring rows, a base line and an index line.
        assert_eq!(display.lines().count(), 4 + 2);
        assert!(display.contains("  5  "));
        assert!(display.contains(" G "));

        let highlighted = game.to_string_with_highlight(Some(2));
        assert!(highlighted.contains(" [2] "));
    }
}
