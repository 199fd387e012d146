mod board;
mod colour;
mod display;
mod error;
mod game;
mod game_result;
mod move_gen;
mod moves;
mod wins;

pub use board::Board;
pub use colour::{Colour, COMPUTER, HUMAN};
pub use error::*;
pub use game::Game;
pub use game_result::GameResult;
pub use move_gen::perf_count;
pub use moves::Move;

/// Number of columns on a standard board.
pub const COLUMNS: usize = 7;
/// Number of rows on a standard board.
pub const ROWS: usize = 6;
/// Length of a line that wins the game.
pub const CONNECT: usize = 4;

/// The standard 7 by 6 game.
pub type Connect4 = Game<COLUMNS, ROWS>;
