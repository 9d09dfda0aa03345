//! Console output for a solved path.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, MoveToNextLine, Show},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::puzzle::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Characters between the vertical borders of a cell.
    pub cell_width: usize,
    /// Pause after each frame.
    pub interval: Duration,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_width: 5,
            interval: Duration::from_secs(1),
        }
    }
}

/// Writes each state followed by its step number.
pub fn print_path<W: Write>(out: &mut W, path: &[Board]) -> io::Result<()> {
    for (step, board) in path.iter().enumerate() {
        write!(out, "{}", board)?;
        writeln!(out, "======={}=======", step)?;
    }
    Ok(())
}

/// Redraws the screen once per state, waiting `options.interval` between
/// frames.
pub fn animate<W: Write>(out: &mut W, path: &[Board], options: &RenderOptions) -> io::Result<()> {
    queue!(out, Hide)?;
    for (step, board) in path.iter().enumerate() {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(
            out,
            Print(format!("step {}/{}", step, path.len().saturating_sub(1))),
            MoveToNextLine(1)
        )?;
        draw_board(out, board, options.cell_width)?;
        out.flush()?;
        thread::sleep(options.interval);
    }
    queue!(out, Show)?;
    out.flush()
}

/// Queues one board as a bordered grid, blank in red and tiles in blue.
pub fn draw_board<W: Write>(out: &mut W, board: &Board, cell_width: usize) -> io::Result<()> {
    let border = format!("+{}", format!("{}+", "-".repeat(cell_width)).repeat(3));

    for row in board.rows() {
        queue!(out, Print(&border), MoveToNextLine(1), Print("|"))?;
        for &value in row {
            let color = if value == 0 { Color::Red } else { Color::Blue };
            queue!(
                out,
                SetForegroundColor(color),
                Print(format!("{:^width$}", value, width = cell_width)),
                ResetColor,
                Print("|")
            )?;
        }
        queue!(out, MoveToNextLine(1))?;
    }
    queue!(out, Print(&border), MoveToNextLine(1))
}
