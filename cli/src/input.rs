//! Stdin prompts. Everything leaving this module is validated: the core
//! only ever sees in-range coordinates pointing at empty cells.

use std::io::{self, Write};

use tris_core::{Board, Coord, Coord2, Difficulty, GRID_SIZE};

/// Asks for the difficulty until one of the known tokens is given.
pub fn prompt_difficulty() -> anyhow::Result<Difficulty> {
    loop {
        print!("Choose the difficulty level (easy, normal, hard): ");
        io::stdout().flush()?;
        let token = read_trimmed_line()?;
        match token.parse() {
            Ok(difficulty) => return Ok(difficulty),
            Err(_) => println!("Unrecognized level: {token}"),
        }
    }
}

/// Asks for a 1-indexed X/Y pair until it names an empty in-range cell.
pub fn prompt_move(board: &Board) -> anyhow::Result<Coord2> {
    loop {
        let Some(x) = prompt_axis("Enter X: ")? else {
            continue;
        };
        let Some(y) = prompt_axis("Enter Y: ")? else {
            continue;
        };

        let coords = (y - 1, x - 1);
        if board.get(coords)?.is_none() {
            return Ok(coords);
        }
        println!("That cell is already taken");
    }
}

fn prompt_axis(prompt: &str) -> anyhow::Result<Option<Coord>> {
    print!("{prompt}");
    io::stdout().flush()?;
    match read_trimmed_line()?.parse::<Coord>() {
        Ok(value) if (1..=GRID_SIZE).contains(&value) => Ok(Some(value)),
        _ => {
            println!("Expected a number from 1 to {GRID_SIZE}");
            Ok(None)
        }
    }
}

fn read_trimmed_line() -> anyhow::Result<String> {
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        anyhow::bail!("stdin closed before the game ended");
    }
    Ok(line.trim().to_owned())
}
