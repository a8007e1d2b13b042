use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

pub use heuristic::*;

mod heuristic;

/// Strategy for choosing the computer's next move.
pub trait MoveSelector {
    /// Picks an empty coordinate to play.
    ///
    /// The board must hold at least one empty cell; a full board is a
    /// contract violation by the caller and comes back as
    /// [`GameError::ExhaustedSelection`].
    fn select(&mut self, board: &Board, marks: MarkAssignment) -> Result<Coord2>;
}

/// How hard the computer tries.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            // "eazy" is a long-accepted misspelling, kept as an alias
            "easy" | "eazy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            _ => Err(GameError::UnknownDifficulty),
        }
    }
}
