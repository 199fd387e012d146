use std::{fmt::Display, str::FromStr};

use crate::ParseMoveError;

/// Dropping a disc into a column (zero-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(usize);

impl Move {
    pub const fn new(column: usize) -> Self {
        Move(column)
    }

    pub const fn column(self) -> usize {
        self.0
    }
}

/// Moves are shown with one-based column labels.
impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// Parses a one-based column label such as `"4"`.
/// Range checking against the board happens when the move is played.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMoveError::Empty);
        }
        let label: usize = s.parse().map_err(|_| ParseMoveError::NotANumber(s.to_string()))?;
        label.checked_sub(1).map(Move).ok_or(ParseMoveError::Zero)
    }
}
