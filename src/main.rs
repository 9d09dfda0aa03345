use std::{io::stdout, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle::{
    a_star_with,
    render::{animate, print_path, RenderOptions},
    Board, Heuristic, SearchOptions,
};
use log::info;
use rand::{rngs::StdRng, thread_rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Start state, e.g. 283160754 or "2,8,3,1,6,0,7,5,4" (0 is the blank)
    #[arg(short, long, default_value = "283160754", value_name = "STATE")]
    start: String,
    /// Goal state
    #[arg(short, long, default_value = "123804765", value_name = "STATE")]
    goal: String,
    /// Ignore --start and draw a random start that can reach the goal
    #[arg(long)]
    shuffle: bool,
    /// Seed for --shuffle
    #[arg(long, value_name = "SEED", requires = "shuffle")]
    seed: Option<u64>,
    /// Estimate used to order the frontier
    #[arg(long, value_enum, default_value_t = Heuristic::default())]
    heuristic: Heuristic,
    /// Give up after expanding this many states
    #[arg(short, long, value_name = "NUM")]
    max_expansions: Option<usize>,
    /// Search even when start and goal have different parity
    #[arg(long)]
    no_parity_check: bool,
    /// Replay the path in place instead of printing every state
    #[arg(short, long)]
    animate: bool,
    /// Delay between frames when animating
    #[arg(long, default_value_t = 1000, value_name = "MS")]
    interval_ms: u64,
    /// Width of a cell when animating
    #[arg(long, default_value_t = 5, value_name = "NUM")]
    cell_width: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let Cli {
        start,
        goal,
        shuffle,
        seed,
        heuristic,
        max_expansions,
        no_parity_check,
        animate: replay,
        interval_ms,
        cell_width,
    } = Cli::parse();

    let goal: Board = goal.parse().context("Invalid goal state")?;
    let start: Board = if shuffle {
        match seed {
            Some(seed) => Board::shuffled(&goal, &mut StdRng::seed_from_u64(seed)),
            None => Board::shuffled(&goal, &mut thread_rng()),
        }
    } else {
        start.parse().context("Invalid start state")?
    };
    info!("start:\n{}goal:\n{}", start, goal);

    let options = SearchOptions {
        heuristic,
        max_expansions,
        check_parity: !no_parity_check,
    };
    let solution = a_star_with(&start, &goal, &options).context("No solution")?;

    let mut out = stdout();
    if replay {
        let render = RenderOptions {
            cell_width,
            interval: Duration::from_millis(interval_ms),
        };
        animate(&mut out, &solution.path, &render)?;
    } else {
        print_path(&mut out, &solution.path)?;
    }

    let moves: Vec<String> = solution.moves().iter().map(|m| m.to_string()).collect();
    println!("Solved in {} moves: {}", solution.slides(), moves.join(" "));
    println!("{}", solution.stats);

    Ok(())
}
