use core::fmt;

use serde::{Deserialize, Serialize};

/// Player-owned value drawn in a cell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Mark {
    Cross,
    Zero,
}

impl Mark {
    pub const fn opponent(self) -> Mark {
        match self {
            Self::Cross => Self::Zero,
            Self::Zero => Self::Cross,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Cross => 'X',
            Self::Zero => '0',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single grid cell, `None` while nobody has played it.
pub type Cell = Option<Mark>;
