use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the grid")]
    OutOfRange,
    #[error("No empty cell left to select")]
    ExhaustedSelection,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Unrecognized difficulty level")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
