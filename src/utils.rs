use crate::config::PuzzleConfig;
use crate::engine::{count_layout_colors, Pole, PuzzleState, Ring};
use crate::error::LayoutError;

/// Parses an array of string slices into a list of poles.
///
/// Each string slice is one pole, listing its rings from bottom to top using the
/// codes of [`Ring::to_char`]:
/// - 'P': `Ring::Purple`
/// - 'O': `Ring::Orange`
/// - 'K': `Ring::Pink`
/// - 'G': `Ring::Green`
/// - 'R', 'B', 'Y', 'C': red, blue, yellow, cyan
///
/// An empty string or a single '.' is an empty pole. Codes are case-insensitive.
/// Any other character results in an error.
///
/// # Examples
/// ```
/// use ringsort_solver::utils::layout_from_str_array;
/// use ringsort_solver::engine::Ring;
///
/// let poles = layout_from_str_array(&["POKG", "", "."]).unwrap();
/// assert_eq!(poles.len(), 3);
/// assert_eq!(poles[0].top(), Some(Ring::Green));
/// assert!(poles[1].is_empty() && poles[2].is_empty());
///
/// assert!(layout_from_str_array(&["PXG"]).is_err());
/// ```
pub fn layout_from_str_array(s: &[&str]) -> Result<Vec<Pole>, LayoutError> {
    s.iter()
        .enumerate()
        .map(|(pole, row)| parse_pole(pole, row))
        .collect()
}

fn parse_pole(pole: usize, row: &str) -> Result<Pole, LayoutError> {
    let row = row.trim();
    if row == "." {
        return Ok(Pole::new());
    }
    row.chars()
        .map(|code| Ring::from_char(code).ok_or(LayoutError::UnknownRing { code, pole }))
        .collect::<Result<Vec<_>, _>>()
        .map(Pole::from)
}

/// Parses a layout file: one pole per line, bottom to top.
///
/// Blank lines and lines starting with '#' are ignored, so an empty pole must
/// be written as '.'.
pub fn layout_from_text(text: &str) -> Result<Vec<Pole>, LayoutError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    layout_from_str_array(&rows)
}

/// Builds a playable puzzle from the contents of a layout file.
///
/// The pole and color counts come from the layout itself; capacity and the
/// move budget come from `config`. The layout must hold exactly `max_rings`
/// rings of every color it uses.
pub fn puzzle_from_layout_text(text: &str, config: &PuzzleConfig) -> Result<PuzzleState, LayoutError> {
    let poles = layout_from_text(text)?;
    let config = PuzzleConfig {
        pole_count: poles.len(),
        color_count: count_layout_colors(&poles),
        ..*config
    };
    PuzzleState::from_poles_for_play(poles, &config)
}

/// Builds a puzzle from string rows, validated against `config`.
///
/// Convenience wrapper over [`layout_from_str_array`] and [`PuzzleState::from_poles`].
pub fn puzzle_from_str_array(s: &[&str], config: &PuzzleConfig) -> Result<PuzzleState, LayoutError> {
    PuzzleState::from_poles(layout_from_str_array(s)?, config)
}
