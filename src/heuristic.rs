use clap::ValueEnum;

use crate::puzzle::{Board, CELLS, SIZE};

/// Estimate of the number of slides left between a board and the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Heuristic {
    /// Cells that differ from the goal, the blank's cell included. Can
    /// overestimate by one, so paths found with it are not always shortest.
    MisplacedWithBlank,
    /// Tiles that sit somewhere other than in the goal, blank ignored.
    #[default]
    Misplaced,
    /// Sum over tiles of the row and column distance to the goal cell.
    Manhattan,
}

impl Heuristic {
    pub fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        match self {
            Heuristic::MisplacedWithBlank => misplaced(board, goal, true),
            Heuristic::Misplaced => misplaced(board, goal, false),
            Heuristic::Manhattan => manhattan(board, goal),
        }
    }
}

/// Number of cells where `board` and `goal` disagree, blank included.
pub fn estimate(board: &Board, goal: &Board) -> u32 {
    Heuristic::MisplacedWithBlank.estimate(board, goal)
}

fn misplaced(board: &Board, goal: &Board, count_blank: bool) -> u32 {
    board
        .cells()
        .iter()
        .zip(goal.cells())
        .filter(|&(&have, &want)| have != want && (count_blank || have != 0))
        .count() as u32
}

fn manhattan(board: &Board, goal: &Board) -> u32 {
    let mut target = [0usize; CELLS];
    for (index, &value) in goal.cells().iter().enumerate() {
        target[value as usize] = index;
    }

    let mut distance = 0;
    for (index, &value) in board.cells().iter().enumerate() {
        if value == 0 {
            continue;
        }
        let goal_index = target[value as usize];
        distance += (index / SIZE).abs_diff(goal_index / SIZE);
        distance += (index % SIZE).abs_diff(goal_index % SIZE);
    }
    distance as u32
}
