use rand::{seq::SliceRandom, Rng};
use std::{fmt, str::FromStr};

use crate::error::PuzzleError;

/// Width and height of the board.
pub const SIZE: usize = 3;
/// Number of cells, blank included.
pub const CELLS: usize = SIZE * SIZE;

/// Direction the blank travels in a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every move, in the order successors are generated.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column offset applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// One arrangement of the tiles `1..=8` and the blank (`0`), stored row-major.
///
/// Boards can only be built through the validating constructors or by sliding
/// the blank of an existing board, so every value is a permutation of `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// The usual goal: tiles in order, blank in the bottom-right corner.
    pub fn solved() -> Self {
        Self {
            cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
        }
    }

    pub fn from_cells(cells: &[u8]) -> Result<Self, PuzzleError> {
        if cells.len() != CELLS {
            return Err(PuzzleError::WrongCellCount(cells.len()));
        }

        let blanks = cells.iter().filter(|&&value| value == 0).count();
        if blanks != 1 {
            return Err(PuzzleError::BlankCount(blanks));
        }

        let mut seen = [false; CELLS];
        for &value in cells {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(PuzzleError::TileOutOfRange(value))?;
            if *slot {
                return Err(PuzzleError::DuplicateTile(value));
            }
            *slot = true;
        }

        let mut board = [0; CELLS];
        board.copy_from_slice(cells);
        Ok(Self { cells: board })
    }

    pub fn from_rows(rows: [[u8; SIZE]; SIZE]) -> Result<Self, PuzzleError> {
        let flattened: Vec<u8> = rows.iter().flat_map(|row| row.iter()).cloned().collect();
        Self::from_cells(&flattened)
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * SIZE + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(SIZE)
    }

    /// Packs the cells into a single base-9 number. Distinct boards always
    /// produce distinct keys.
    pub fn canonical_key(&self) -> u32 {
        self.cells
            .iter()
            .fold(0, |key, &value| key * CELLS as u32 + u32::from(value))
    }

    /// Row and column of the blank.
    ///
    /// # Panics
    ///
    /// Panics if the board holds no blank or more than one. Neither can happen
    /// for a board obtained through this module.
    pub fn find_blank(&self) -> (usize, usize) {
        let mut found = None;
        for (index, &value) in self.cells.iter().enumerate() {
            if value == 0 {
                assert!(
                    found.is_none(),
                    "board {:?} holds more than one blank",
                    self.cells
                );
                found = Some(index);
            }
        }

        match found {
            Some(index) => (index / SIZE, index % SIZE),
            None => panic!("board {:?} has no blank", self.cells),
        }
    }

    /// Slides the blank one cell in `movement`'s direction, if that stays on
    /// the board.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let (row, col) = self.find_blank();
        let (dr, dc) = movement.as_offset();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        if new_row < 0 || new_row >= SIZE as isize || new_col < 0 || new_col >= SIZE as isize {
            return None;
        }

        let mut next = *self;
        next.cells
            .swap(row * SIZE + col, new_row as usize * SIZE + new_col as usize);
        Some(next)
    }

    /// Every board one slide away, in `Move::ALL` order.
    pub fn expand(&self) -> Vec<Self> {
        Move::ALL
            .iter()
            .filter_map(|&movement| self.apply(movement))
            .collect()
    }

    /// The slide that turns `self` into `next`, if they are adjacent.
    pub fn move_between(&self, next: &Board) -> Option<Move> {
        Move::ALL
            .iter()
            .copied()
            .find(|&movement| self.apply(movement).as_ref() == Some(next))
    }

    /// Pairs of tiles that appear in the wrong order, reading row-major and
    /// skipping the blank.
    pub fn inversions(&self) -> usize {
        let tiles = &self.cells;
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    /// On an odd-width board a slide never changes the inversion parity, and
    /// boards of equal parity are always connected.
    pub fn is_reachable_from(&self, other: &Board) -> bool {
        self.inversions() % 2 == other.inversions() % 2
    }

    /// A uniformly random board that can reach `goal`.
    pub fn shuffled<R: Rng + ?Sized>(goal: &Board, rng: &mut R) -> Self {
        let mut board = *goal;
        loop {
            board.cells.shuffle(rng);
            if board.is_reachable_from(goal) {
                return board;
            }
        }
    }

    /// Walks the blank `moves` random slides away, never undoing the slide
    /// just made.
    pub fn scrambled<R: Rng + ?Sized>(&self, moves: usize, rng: &mut R) -> Self {
        let mut board = *self;
        let mut last: Option<Move> = None;

        for _ in 0..moves {
            let options: Vec<(Move, Board)> = Move::ALL
                .iter()
                .filter(|&&movement| last != Some(movement.opposite()))
                .filter_map(|&movement| board.apply(movement).map(|next| (movement, next)))
                .collect();

            if let Some(&(movement, next)) = options.choose(rng) {
                board = next;
                last = Some(movement);
            }
        }

        board
    }
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Accepts `"283160754"`, `"2 8 3 1 6 0 7 5 4"`, `"2,8,3,1,6,0,7,5,4"`
    /// or `"[[2,8,3],[1,6,0],[7,5,4]]"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let is_separator =
            |c: char| c == ',' || c == '_' || c == '[' || c == ']' || c.is_whitespace();

        // tiles are single digits, so separators are optional
        let cells = s
            .chars()
            .filter(|&c| !is_separator(c))
            .map(|c| {
                c.to_digit(10)
                    .map(|digit| digit as u8)
                    .ok_or_else(|| PuzzleError::Parse(c.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
