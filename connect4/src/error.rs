use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    /// The column index is not on the board.
    InvalidColumn(usize),
    /// Every cell in the column is already occupied.
    ColumnFull(usize),
}

impl Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::InvalidColumn(column) => {
                write!(f, "column {} is not on the board", column + 1)
            }
            PlayError::ColumnFull(column) => write!(f, "column {} is already full", column + 1),
        }
    }
}

impl Error for PlayError {}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseMoveError {
    Empty,
    NotANumber(String),
    /// Columns are labelled from 1.
    Zero,
}

impl Display for ParseMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseMoveError::Empty => write!(f, "expected a column number"),
            ParseMoveError::NotANumber(s) => write!(f, "{s:?} is not a column number"),
            ParseMoveError::Zero => write!(f, "columns are numbered from 1"),
        }
    }
}

impl Error for ParseMoveError {}
