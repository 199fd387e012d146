use std::{error::Error, fmt::Display};

use connect4::PlayError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchError {
    /// The position is already decided, so there is nothing to search.
    NoLegalMoves,
    /// A node already has a child for every column.
    NodeFull,
    Play(PlayError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::NoLegalMoves => write!(f, "the position is already decided"),
            SearchError::NodeFull => write!(f, "cannot add another child to a full node"),
            SearchError::Play(play_error) => play_error.fmt(f),
        }
    }
}

impl Error for SearchError {}

impl From<PlayError> for SearchError {
    fn from(e: PlayError) -> Self {
        SearchError::Play(e)
    }
}
