use crate::{Colour, COMPUTER, HUMAN};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    Winner(Colour),
    Draw,
    Ongoing,
}

impl Default for GameResult {
    fn default() -> Self {
        GameResult::Ongoing
    }
}

impl GameResult {
    pub fn is_ongoing(self) -> bool {
        self == GameResult::Ongoing
    }

    pub fn computer_wins(self) -> bool {
        self == GameResult::Winner(COMPUTER)
    }

    pub fn human_wins(self) -> bool {
        self == GameResult::Winner(HUMAN)
    }
}
