use serde::{Deserialize, Serialize};

use crate::*;

/// Result of evaluating a board position.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    HumanWon,
    AiWon,
    Draw,
}

impl GameOutcome {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::HumanWon => Some(Player::Human),
            Self::AiWon => Some(Player::Ai),
            Self::InProgress | Self::Draw => None,
        }
    }

    pub const fn won_by(player: Player) -> Self {
        match player {
            Player::Human => Self::HumanWon,
            Player::Ai => Self::AiWon,
        }
    }
}

impl Default for GameOutcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// The eight winning lines: rows, then columns, then both diagonals.
const LINES: [[Coord2; 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn line_owner(board: &Board, [a, b, c]: [Coord2; 3]) -> Option<Mark> {
    let first = board[a]?;
    (board[b] == Some(first) && board[c] == Some(first)).then_some(first)
}

/// Evaluates the position: the first fully-owned line in scan order wins,
/// a full board without one is a draw. The board is only read.
pub fn evaluate(board: &Board, marks: MarkAssignment) -> GameOutcome {
    for line in LINES {
        if let Some(mark) = line_owner(board, line) {
            return GameOutcome::won_by(marks.owner_of(mark));
        }
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKS: MarkAssignment = MarkAssignment::with_human(Mark::Cross);

    fn board_with(cells: &[(Coord2, Mark)]) -> Board {
        let mut board = Board::new();
        for &(coords, mark) in cells {
            board.set(coords, Some(mark)).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new(), MARKS), GameOutcome::InProgress);
    }

    #[test]
    fn row_win_goes_to_the_mark_owner() {
        let board = board_with(&[
            ((1, 0), Mark::Cross),
            ((1, 1), Mark::Cross),
            ((1, 2), Mark::Cross),
            ((0, 0), Mark::Zero),
            ((2, 2), Mark::Zero),
        ]);

        assert_eq!(evaluate(&board, MARKS), GameOutcome::HumanWon);
        // The same line owned by the computer's mark flips the verdict.
        let swapped = MarkAssignment::with_human(Mark::Zero);
        assert_eq!(evaluate(&board, swapped), GameOutcome::AiWon);
    }

    #[test]
    fn column_win_is_detected() {
        let board = board_with(&[
            ((0, 1), Mark::Zero),
            ((1, 1), Mark::Zero),
            ((2, 1), Mark::Zero),
            ((0, 0), Mark::Cross),
            ((2, 2), Mark::Cross),
        ]);

        assert_eq!(evaluate(&board, MARKS), GameOutcome::AiWon);
    }

    #[test]
    fn both_diagonals_are_checked() {
        let main = board_with(&[
            ((0, 0), Mark::Cross),
            ((1, 1), Mark::Cross),
            ((2, 2), Mark::Cross),
        ]);
        let anti = board_with(&[
            ((0, 2), Mark::Cross),
            ((1, 1), Mark::Cross),
            ((2, 0), Mark::Cross),
        ]);

        assert_eq!(evaluate(&main, MARKS), GameOutcome::HumanWon);
        assert_eq!(evaluate(&anti, MARKS), GameOutcome::HumanWon);
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        // X 0 X / X 0 0 / 0 X X
        let board = board_with(&[
            ((0, 0), Mark::Cross),
            ((0, 1), Mark::Zero),
            ((0, 2), Mark::Cross),
            ((1, 0), Mark::Cross),
            ((1, 1), Mark::Zero),
            ((1, 2), Mark::Zero),
            ((2, 0), Mark::Zero),
            ((2, 1), Mark::Cross),
            ((2, 2), Mark::Cross),
        ]);

        assert_eq!(evaluate(&board, MARKS), GameOutcome::Draw);
    }

    #[test]
    fn evaluate_reads_the_board_only() {
        let board = board_with(&[((0, 0), Mark::Cross), ((1, 1), Mark::Zero)]);
        let snapshot = board;

        evaluate(&board, MARKS);

        assert_eq!(board, snapshot);
    }
}
