use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Player 0.
    Yellow,
    /// Player 1.
    Red,
}

/// The human always plays yellow.
pub const HUMAN: Colour = Colour::Yellow;
/// The computer always plays red.
pub const COMPUTER: Colour = Colour::Red;

impl Colour {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Colour::Yellow => Colour::Red,
            Colour::Red => Colour::Yellow,
        }
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Colour::Yellow => "yellow",
            Colour::Red => "red",
        })
    }
}
