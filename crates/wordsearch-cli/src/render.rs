//! Terminal rendering for generated puzzles.

use std::io::{self, Write};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use wordsearch_core::{Position, Puzzle};

/// Print the grid with placed-word cells colored, then list the placed words.
pub fn print_solution(puzzle: &Puzzle) -> io::Result<()> {
    let mut stdout = io::stdout();

    for row in 0..puzzle.grid.height() {
        for col in 0..puzzle.grid.width() {
            let pos = Position::new(row, col);
            let ch = puzzle.grid.get(pos).unwrap_or(' ');
            if puzzle.highlight.is_set(pos) {
                stdout
                    .queue(SetForegroundColor(Color::Green))?
                    .queue(Print(ch))?
                    .queue(ResetColor)?;
            } else {
                stdout.queue(Print(ch))?;
            }
        }
        stdout.queue(Print('\n'))?;
    }
    stdout.flush()?;

    println!();
    println!("Placed words ({} total):", puzzle.placed_words.len());
    for placed in &puzzle.placed_words {
        println!(
            "- {} at ({}, {}) going {}",
            placed.word, placed.row, placed.col, placed.direction
        );
    }
    Ok(())
}
