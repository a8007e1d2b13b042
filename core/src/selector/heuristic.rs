use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Odds that the normal difficulty runs the lookahead tier on a given move.
pub const DEFAULT_LOOKAHEAD_CHANCE: f64 = 0.8;

const CENTER: Coord2 = (1, 1);

/// Corner cells in fixed probe order.
const CORNERS: [Coord2; 4] = [(0, 0), (2, 2), (2, 0), (0, 2)];

/// Edge-midpoint cells in fixed probe order.
const EDGES: [Coord2; 4] = [(0, 1), (2, 1), (1, 0), (1, 2)];

/// Three-tier move heuristic: take or block an immediate win, else the
/// center, else a random free corner, else a random free edge.
///
/// Owns its generator; a fixed seed makes every game replayable.
#[derive(Clone, Debug)]
pub struct HeuristicSelector {
    rng: SmallRng,
    difficulty: Difficulty,
    lookahead_chance: f64,
}

impl HeuristicSelector {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(difficulty: Difficulty, rng: SmallRng) -> Self {
        Self {
            rng,
            difficulty,
            lookahead_chance: DEFAULT_LOOKAHEAD_CHANCE,
        }
    }

    /// Overrides the normal-difficulty odds of entering the lookahead tier.
    pub fn lookahead_chance(mut self, chance: f64) -> Self {
        self.lookahead_chance = chance;
        self
    }

    fn runs_lookahead(&mut self) -> bool {
        match self.difficulty {
            Difficulty::Hard => true,
            Difficulty::Normal => self.rng.random_bool(self.lookahead_chance),
            Difficulty::Easy => false,
        }
    }

    /// First empty cell, row-major, where placing `mark` ends the game in
    /// favor of its owner. Probes a copy of the board.
    fn completing_move(board: &Board, marks: MarkAssignment, mark: Mark) -> Option<Coord2> {
        let target = GameOutcome::won_by(marks.owner_of(mark));
        board.iter_empty().find(|&coords| {
            let mut probe = *board;
            probe[coords] = Some(mark);
            evaluate(&probe, marks) == target
        })
    }

    fn pick_free(&mut self, board: &Board, probe_order: &[Coord2; 4]) -> Option<Coord2> {
        let mut free = [CENTER; 4];
        let mut count = 0;
        for &coords in probe_order {
            if board[coords].is_none() {
                free[count] = coords;
                count += 1;
            }
        }
        (count > 0).then(|| free[self.rng.random_range(0..count)])
    }
}

impl MoveSelector for HeuristicSelector {
    fn select(&mut self, board: &Board, marks: MarkAssignment) -> Result<Coord2> {
        if self.runs_lookahead() {
            if let Some(coords) = Self::completing_move(board, marks, marks.ai()) {
                log::debug!("taking the win at {:?}", coords);
                return Ok(coords);
            }
            if let Some(coords) = Self::completing_move(board, marks, marks.human()) {
                log::debug!("blocking the human at {:?}", coords);
                return Ok(coords);
            }
        }

        if board[CENTER].is_none() {
            return Ok(CENTER);
        }

        if let Some(coords) = self.pick_free(board, &CORNERS) {
            return Ok(coords);
        }
        if let Some(coords) = self.pick_free(board, &EDGES) {
            return Ok(coords);
        }

        log::warn!("selector invoked with no empty cell left");
        Err(GameError::ExhaustedSelection)
    }
}
