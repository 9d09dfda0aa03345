use thiserror::Error;

/// A board that is not a permutation of `0..=8`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("expected 9 cells, got {0}")]
    WrongCellCount(usize),
    #[error("tile {0} is outside the range 0..=8")]
    TileOutOfRange(u8),
    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),
    #[error("expected exactly one blank, found {0}")]
    BlankCount(usize),
    #[error("could not parse {0:?} as a tile")]
    Parse(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid state: {0}")]
    InvalidState(#[from] PuzzleError),
    #[error("goal is not reachable from start")]
    NotFound,
    #[error("gave up after expanding {0} states")]
    ExpansionLimit(usize),
}
