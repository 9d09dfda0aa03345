//! A* over board states.
//!
//! Each call owns its frontier, closed set, best-known costs and parent links;
//! nothing survives the call.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::puzzle::{Board, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub heuristic: Heuristic,
    /// Give up with [`SearchError::ExpansionLimit`] after expanding this many
    /// states.
    pub max_expansions: Option<usize>,
    /// Answer [`SearchError::NotFound`] straight away when start and goal have
    /// different inversion parity.
    pub check_parity: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::default(),
            max_expansions: None,
            check_parity: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States moved to the closed set.
    pub expanded: usize,
    /// Frontier pushes, the seed excluded.
    pub generated: usize,
    pub max_frontier: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded: {}, generated: {}, max frontier: {}",
            self.expanded, self.generated, self.max_frontier
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Start first, goal last.
    pub path: Vec<Board>,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of slides, one less than the number of states.
    pub fn slides(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn moves(&self) -> Vec<Move> {
        self.path
            .windows(2)
            .filter_map(|pair| pair[0].move_between(&pair[1]))
            .collect()
    }
}

/// Path from `start` to `goal` inclusive, found with the default options.
pub fn a_star(start: &Board, goal: &Board) -> Result<Vec<Board>, SearchError> {
    a_star_with(start, goal, &SearchOptions::default()).map(|solution| solution.path)
}

pub fn a_star_with(
    start: &Board,
    goal: &Board,
    options: &SearchOptions,
) -> Result<Solution, SearchError> {
    if options.check_parity && !start.is_reachable_from(goal) {
        debug!("start and goal have different parity, skipping search");
        return Err(SearchError::NotFound);
    }

    debug!(
        "searching with {:?} heuristic from {:?} to {:?}",
        options.heuristic,
        start.cells(),
        goal.cells()
    );
    let mut search = Search::new(*goal, options);
    let result = search.run(*start);
    match &result {
        Ok(solution) => debug!(
            "found {} slide path ({})",
            solution.slides(),
            solution.stats
        ),
        Err(err) => debug!("search failed: {} ({})", err, search.stats),
    }
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    f: u32,
    h: u32,
    sequence: u64,
}

/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop the
/// lowest f first, then the lowest h, then the oldest entry.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    board: Board,
    g: u32,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    sequence: u64,
    high_water: usize,
}

impl Frontier {
    fn push(&mut self, board: Board, g: u32, h: u32) {
        let key = FrontierKey {
            f: g + h,
            h,
            sequence: self.sequence,
        };
        self.sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            board,
            g,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}

struct Search<'a> {
    goal: Board,
    options: &'a SearchOptions,
    frontier: Frontier,
    closed: FxHashSet<u32>,
    best_g: FxHashMap<u32, u32>,
    came_from: FxHashMap<u32, Board>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(goal: Board, options: &'a SearchOptions) -> Self {
        Self {
            goal,
            options,
            frontier: Frontier::default(),
            closed: FxHashSet::default(),
            best_g: FxHashMap::default(),
            came_from: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    fn run(&mut self, start: Board) -> Result<Solution, SearchError> {
        // the seed's priority does not matter, it is popped first regardless
        self.best_g.insert(start.canonical_key(), 0);
        self.frontier.push(start, 0, 0);

        while let Some(entry) = self.frontier.pop() {
            let board = entry.board;
            let key = board.canonical_key();

            // superseded by a cheaper entry that was already expanded
            if self.closed.contains(&key) {
                continue;
            }

            if board == self.goal {
                self.stats.max_frontier = self.frontier.high_water;
                return Ok(Solution {
                    path: self.reconstruct(),
                    stats: self.stats,
                });
            }

            if let Some(limit) = self.options.max_expansions {
                if self.stats.expanded >= limit {
                    self.stats.max_frontier = self.frontier.high_water;
                    return Err(SearchError::ExpansionLimit(limit));
                }
            }

            self.closed.insert(key);
            self.stats.expanded += 1;
            trace!("expanding {:?} at g = {}", board.cells(), entry.g);

            let g = entry.g + 1;
            for next in board.expand() {
                let next_key = next.canonical_key();
                if self.closed.contains(&next_key) {
                    continue;
                }
                if self
                    .best_g
                    .get(&next_key)
                    .is_some_and(|&known| known <= g)
                {
                    continue;
                }

                // cost and parent are only ever replaced together
                self.best_g.insert(next_key, g);
                self.came_from.insert(next_key, board);

                let h = self.options.heuristic.estimate(&next, &self.goal);
                self.frontier.push(next, g, h);
                self.stats.generated += 1;
            }
        }

        self.stats.max_frontier = self.frontier.high_water;
        Err(SearchError::NotFound)
    }

    /// Follows parent links back from the goal. The start is the only state
    /// without one.
    fn reconstruct(&self) -> Vec<Board> {
        let mut path = vec![self.goal];
        let mut current = self.goal.canonical_key();
        while let Some(parent) = self.came_from.get(&current) {
            path.push(*parent);
            current = parent.canonical_key();
        }
        path.reverse();
        path
    }
}
