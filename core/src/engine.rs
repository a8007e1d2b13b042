use serde::{Deserialize, Serialize};

use crate::*;

/// Turn engine driving one game from the empty board to a terminal outcome.
///
/// The engine applies moves and evaluates them; where a coordinate comes
/// from (the console, a [`MoveSelector`], a test script) is the driver's
/// business. Drivers alternate by asking [`Game::current_player`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    turn: u32,
    outcome: GameOutcome,
}

impl Game {
    pub const fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(),
            turn: 0,
            outcome: GameOutcome::InProgress,
        }
    }

    pub const fn config(&self) -> GameConfig {
        self.config
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Count of successfully applied moves.
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    pub const fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub const fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Whose move it is, from turn parity relative to the first mover.
    pub const fn current_player(&self) -> Player {
        if self.turn % 2 == 0 {
            self.config.first_mover
        } else {
            self.config.first_mover.other()
        }
    }

    pub const fn current_mark(&self) -> Mark {
        self.config.marks.mark_of(self.current_player())
    }

    /// Applies the current player's mark at `coords` and re-evaluates.
    ///
    /// Coordinates must reference an empty cell; validating that is the
    /// caller's contract, the same one [`Board::set`] states.
    pub fn play(&mut self, coords: Coord2) -> Result<GameOutcome> {
        self.check_not_finished()?;

        let mark = self.current_mark();
        self.board.set(coords, Some(mark))?;
        self.outcome = evaluate(&self.board, self.config.marks);
        self.turn += 1;

        if self.outcome.is_terminal() {
            log::debug!("game over after {} moves: {:?}", self.turn, self.outcome);
        }

        Ok(self.outcome)
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.outcome.is_terminal() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(first_mover: Player, human: Mark, difficulty: Difficulty) -> GameConfig {
        GameConfig::new(MarkAssignment::with_human(human), first_mover, difficulty)
    }

    #[test]
    fn first_mover_plays_their_own_mark() {
        let mut game = Game::new(config(Player::Human, Mark::Cross, Difficulty::Hard));

        assert_eq!(game.current_player(), Player::Human);
        game.play((0, 0)).unwrap();

        assert_eq!(game.board().get((0, 0)).unwrap(), Some(Mark::Cross));
        assert_eq!(game.current_player(), Player::Ai);
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn parity_keeps_alternating_from_the_first_mover() {
        let mut game = Game::new(config(Player::Ai, Mark::Zero, Difficulty::Easy));

        assert_eq!(game.current_player(), Player::Ai);
        assert_eq!(game.current_mark(), Mark::Cross);
        game.play((1, 1)).unwrap();
        assert_eq!(game.current_player(), Player::Human);
        assert_eq!(game.current_mark(), Mark::Zero);
    }

    #[test]
    fn completed_row_ends_the_game() {
        let mut game = Game::new(config(Player::Human, Mark::Cross, Difficulty::Hard));

        game.play((0, 0)).unwrap();
        game.play((1, 0)).unwrap();
        game.play((0, 1)).unwrap();
        game.play((1, 1)).unwrap();
        let outcome = game.play((0, 2)).unwrap();

        assert_eq!(outcome, GameOutcome::HumanWon);
        assert!(game.is_finished());
        assert_eq!(game.turn(), 5);
    }

    #[test]
    fn no_moves_are_accepted_after_the_end() {
        let mut game = Game::new(config(Player::Human, Mark::Cross, Difficulty::Hard));
        for coords in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(coords).unwrap();
        }

        assert_eq!(game.play((2, 2)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn scripted_game_without_a_winner_is_a_draw() {
        let mut game = Game::new(config(Player::Human, Mark::Cross, Difficulty::Hard));
        // Ends at X 0 X / X 0 0 / 0 X X.
        let script = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ];

        let mut last = GameOutcome::InProgress;
        for coords in script {
            last = game.play(coords).unwrap();
        }

        assert_eq!(last, GameOutcome::Draw);
        assert_eq!(game.turn(), 9);
    }

    #[test]
    fn random_config_hands_the_first_move_to_the_cross_holder() {
        use rand::SeedableRng;

        for seed in 0..16 {
            let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
            let config = GameConfig::random(Difficulty::Normal, &mut rng);

            assert_eq!(config.first_mover, config.marks.owner_of(Mark::Cross));
        }
    }

    #[test]
    fn selected_moves_always_stay_on_the_grid() {
        // Two seeded selectors drive both sides to the end; every pick must
        // land on an empty in-range cell, so no call below may fail.
        let mut game = Game::new(config(Player::Human, Mark::Cross, Difficulty::Hard));
        let marks = game.config().marks;
        let swapped = MarkAssignment::with_human(marks.ai());
        let mut ai = HeuristicSelector::new(Difficulty::Hard, 7);
        let mut stand_in = HeuristicSelector::new(Difficulty::Hard, 11);

        while !game.is_finished() {
            let coords = match game.current_player() {
                Player::Human => stand_in.select(game.board(), swapped).unwrap(),
                Player::Ai => ai.select(game.board(), marks).unwrap(),
            };
            game.play(coords).unwrap();
        }

        assert!(game.turn() <= 9);
        assert!(game.outcome().is_terminal());
    }
}
