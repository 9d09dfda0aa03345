//! Solves the 3x3 sliding-tile puzzle with A*.

pub mod error;
pub mod heuristic;
pub mod puzzle;
pub mod render;
pub mod search;

pub use error::{PuzzleError, SearchError};
pub use heuristic::{estimate, Heuristic};
pub use puzzle::{Board, Move};
pub use search::{a_star, a_star_with, SearchOptions, SearchStats, Solution};

/// Validates both boards, then searches with `options`.
///
/// An invalid start or goal is rejected before any search work happens.
pub fn solve(start: &[u8], goal: &[u8], options: &SearchOptions) -> Result<Solution, SearchError> {
    let start = Board::from_cells(start)?;
    let goal = Board::from_cells(goal)?;
    a_star_with(&start, &goal, options)
}
