use std::collections::{HashMap, VecDeque};

use eight_puzzle::{
    a_star, a_star_with, solve, Board, Heuristic, PuzzleError, SearchError, SearchOptions,
};
use rand::{rngs::StdRng, SeedableRng};

fn rows(rows: [[u8; 3]; 3]) -> Board {
    Board::from_rows(rows).unwrap()
}

fn options(heuristic: Heuristic) -> SearchOptions {
    SearchOptions {
        heuristic,
        ..SearchOptions::default()
    }
}

/// Breadth-first slide count, used as ground truth.
fn shortest(start: Board, goal: Board) -> Option<usize> {
    let mut seen = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(board) = queue.pop_front() {
        let depth = seen[&board];
        if board == goal {
            return Some(depth);
        }
        for next in board.expand() {
            seen.entry(next).or_insert_with(|| {
                queue.push_back(next);
                depth + 1
            });
        }
    }
    None
}

fn assert_valid_path(path: &[Board], start: &Board, goal: &Board) {
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(goal));
    for pair in path.windows(2) {
        assert!(
            pair[0].move_between(&pair[1]).is_some(),
            "{} and {} are not one slide apart",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn start_equal_to_goal() {
    let start = rows([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    let goal = rows([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    assert_eq!(a_star(&start, &goal), Ok(vec![start]));
}

#[test]
fn single_slide() {
    let start = rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
    let goal = rows([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    let path = a_star(&start, &goal).unwrap();
    assert_eq!(path, vec![start, goal]);
}

#[test]
fn reference_run() {
    let start = rows([[2, 8, 3], [1, 6, 0], [7, 5, 4]]);
    let goal = rows([[1, 2, 3], [8, 0, 4], [7, 6, 5]]);

    for heuristic in [Heuristic::Misplaced, Heuristic::Manhattan] {
        let solution = a_star_with(&start, &goal, &options(heuristic)).unwrap();
        assert_valid_path(&solution.path, &start, &goal);
        assert_eq!(solution.path.len(), 8);
    }

    // counting the blank still reaches the goal, not necessarily by a shortest path
    let solution = a_star_with(&start, &goal, &options(Heuristic::MisplacedWithBlank)).unwrap();
    assert_valid_path(&solution.path, &start, &goal);
    assert!(solution.path.len() >= 8);
}

#[test]
fn opposite_parity_is_not_found() {
    let start = rows([[1, 2, 3], [4, 5, 6], [8, 7, 0]]);
    let goal = Board::solved();
    assert_eq!(a_star(&start, &goal), Err(SearchError::NotFound));

    let exhaustive = SearchOptions {
        check_parity: false,
        ..SearchOptions::default()
    };
    assert_eq!(
        a_star_with(&start, &goal, &exhaustive),
        Err(SearchError::NotFound)
    );
}

#[test]
fn random_pairs_give_shortest_valid_paths() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        let goal = Board::shuffled(&Board::solved(), &mut rng);
        let start = goal.scrambled(18, &mut rng);
        let expected = shortest(start, goal).unwrap();

        for heuristic in [Heuristic::Misplaced, Heuristic::Manhattan] {
            let solution = a_star_with(&start, &goal, &options(heuristic)).unwrap();
            assert_valid_path(&solution.path, &start, &goal);
            assert_eq!(solution.slides(), expected);
        }
    }
}

#[test]
fn random_pairs_of_either_parity() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let start = Board::shuffled(&Board::solved(), &mut rng);
        let goal = Board::shuffled(&Board::solved(), &mut rng);
        let odd = "123456870".parse::<Board>().unwrap();
        let other = Board::shuffled(&odd, &mut rng);

        let options = options(Heuristic::Manhattan);
        let solution = a_star_with(&start, &goal, &options).unwrap();
        assert_valid_path(&solution.path, &start, &goal);
        assert_eq!(
            a_star_with(&start, &other, &options),
            Err(SearchError::NotFound)
        );
    }
}

#[test]
fn repeated_searches_agree() {
    let start = rows([[8, 6, 7], [2, 5, 4], [3, 0, 1]]);
    let goal = Board::solved();
    let options = options(Heuristic::Manhattan);

    let first = a_star_with(&start, &goal, &options).unwrap();
    let second = a_star_with(&start, &goal, &options).unwrap();
    assert_eq!(first.slides(), 31);
    assert_eq!(first.path, second.path);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn solve_rejects_invalid_boards() {
    let goal = [1, 2, 3, 4, 5, 6, 7, 8, 0];
    let opts = SearchOptions::default();

    assert_eq!(
        solve(&[1, 2, 3, 4, 5, 6, 7, 8], &goal, &opts),
        Err(SearchError::InvalidState(PuzzleError::WrongCellCount(8)))
    );
    assert_eq!(
        solve(&[0, 2, 3, 4, 5, 6, 7, 8, 0], &goal, &opts),
        Err(SearchError::InvalidState(PuzzleError::BlankCount(2)))
    );
    assert_eq!(
        solve(&goal, &[1, 1, 3, 4, 5, 6, 7, 8, 0], &opts),
        Err(SearchError::InvalidState(PuzzleError::DuplicateTile(1)))
    );

    let solution = solve(&[1, 2, 3, 4, 5, 6, 7, 0, 8], &goal, &opts).unwrap();
    assert_eq!(solution.slides(), 1);
}
