//! Console drawing: clear, grid with 1-indexed axis labels, end banner.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tris_core::{GRID_SIZE, Game, GameOutcome};

/// Clears the terminal and redraws the board plus the mark banner.
pub fn draw(game: &Game) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    write!(stdout, "    ")?;
    for x in 1..=GRID_SIZE {
        write!(stdout, "{x}   ")?;
    }
    writeln!(stdout)?;

    for row in 0..GRID_SIZE {
        write!(stdout, "{} | ", row + 1)?;
        for col in 0..GRID_SIZE {
            match game.board().get((row, col))? {
                Some(mark) => write!(stdout, "{mark} | ")?,
                None => write!(stdout, "_ | ")?,
            }
        }
        writeln!(stdout)?;
    }

    let marks = game.config().marks;
    writeln!(stdout)?;
    writeln!(stdout, "Human: {}", marks.human())?;
    writeln!(stdout, "Computer: {}", marks.ai())?;
    stdout.flush()?;
    Ok(())
}

/// Prints the end-of-game banner.
pub fn announce(outcome: GameOutcome) {
    match outcome {
        GameOutcome::HumanWon => println!("Human won!"),
        GameOutcome::AiWon => println!("Computer won!"),
        GameOutcome::Draw => println!("Draw!"),
        GameOutcome::InProgress => {}
    }
}
