#![no_std]

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use mark::*;
pub use outcome::*;
pub use selector::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod mark;
mod outcome;
mod selector;
mod types;

/// Physical participant in a game, independent of the mark they play.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub const fn other(self) -> Player {
        match self {
            Self::Human => Self::Ai,
            Self::Ai => Self::Human,
        }
    }
}

/// Which mark each participant plays for the whole game.
///
/// Only the human's mark is stored, so the two sides can never end up
/// holding the same mark.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkAssignment {
    human: Mark,
}

impl MarkAssignment {
    pub const fn with_human(human: Mark) -> Self {
        Self { human }
    }

    /// Uniform 50/50 draw of which side plays `X`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::with_human(Mark::Cross)
        } else {
            Self::with_human(Mark::Zero)
        }
    }

    pub const fn human(&self) -> Mark {
        self.human
    }

    pub const fn ai(&self) -> Mark {
        self.human.opponent()
    }

    pub const fn mark_of(&self, player: Player) -> Mark {
        match player {
            Player::Human => self.human(),
            Player::Ai => self.ai(),
        }
    }

    pub fn owner_of(&self, mark: Mark) -> Player {
        if mark == self.human {
            Player::Human
        } else {
            Player::Ai
        }
    }
}

/// Fixed per-game configuration, chosen before the first move.
///
/// The mark assignment and the first mover are independent fields; nothing
/// infers one from the other.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub marks: MarkAssignment,
    pub first_mover: Player,
    pub difficulty: Difficulty,
}

impl GameConfig {
    pub const fn new(marks: MarkAssignment, first_mover: Player, difficulty: Difficulty) -> Self {
        Self {
            marks,
            first_mover,
            difficulty,
        }
    }

    /// Stock setup: random sides, and the `X` holder moves first.
    pub fn random<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let marks = MarkAssignment::random(rng);
        let first_mover = marks.owner_of(Mark::Cross);
        Self::new(marks, first_mover, difficulty)
    }
}
