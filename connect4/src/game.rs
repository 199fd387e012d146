use crate::{board::Board, Colour, Move, PlayError, HUMAN};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game<const COLUMNS: usize, const ROWS: usize> {
    pub board: Board<COLUMNS, ROWS>,
    pub to_move: Colour,
    pub ply: usize,
    /// Number of discs in each column.
    heights: [usize; COLUMNS],
}

impl<const COLUMNS: usize, const ROWS: usize> Default for Game<COLUMNS, ROWS> {
    fn default() -> Self {
        Self {
            board: Board::default(),
            to_move: HUMAN,
            ply: 0,
            heights: [0; COLUMNS],
        }
    }
}

impl<const COLUMNS: usize, const ROWS: usize> Game<COLUMNS, ROWS> {
    /// Empty board with the given player to move first.
    pub fn with_first(to_move: Colour) -> Self {
        Game {
            to_move,
            ..Default::default()
        }
    }

    /// Play the given columns (zero-based) from an empty board, yellow first.
    pub fn from_moves(columns: &[usize]) -> Result<Self, PlayError> {
        let mut game = Self::default();
        for &column in columns {
            game.play(Move::new(column))?;
        }
        Ok(game)
    }

    /// Number of discs in the column.
    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.height(column) >= ROWS
    }

    /// Drop a disc of the player to move into the column.
    /// On error the game is left untouched.
    pub fn play(&mut self, my_move: Move) -> Result<(), PlayError> {
        let column = my_move.column();
        if column >= COLUMNS {
            return Err(PlayError::InvalidColumn(column));
        }
        if self.is_column_full(column) {
            return Err(PlayError::ColumnFull(column));
        }
        let row = self.height(column);
        self.board[(column, row)] = Some(self.to_move);
        self.heights[column] += 1;
        self.ply += 1;
        self.to_move = self.to_move.next();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Colour, Connect4, Game, Move, PlayError};

    #[test]
    fn gravity() -> Result<(), PlayError> {
        let game = Connect4::from_moves(&[3, 3, 3])?;
        assert_eq!(game.board.get(3, 0), Some(Colour::Yellow));
        assert_eq!(game.board.get(3, 1), Some(Colour::Red));
        assert_eq!(game.board.get(3, 2), Some(Colour::Yellow));
        assert_eq!(game.board.get(3, 3), None);
        assert_eq!(game.height(3), 3);
        assert_eq!(game.to_move, Colour::Red);
        assert_eq!(game.ply, 3);
        Ok(())
    }

    #[test]
    fn with_first_sets_player() {
        let mut game = Connect4::with_first(Colour::Red);
        assert_eq!(game.to_move, Colour::Red);
        game.play(Move::new(0)).unwrap();
        assert_eq!(game.board.get(0, 0), Some(Colour::Red));
    }

    #[test]
    fn full_column_rejected() -> Result<(), PlayError> {
        let mut game = Connect4::from_moves(&[0; 6])?;
        let before = game;
        assert_eq!(game.play(Move::new(0)), Err(PlayError::ColumnFull(0)));
        assert_eq!(game, before);
        Ok(())
    }

    #[test]
    fn very_tall_column() -> Result<(), PlayError> {
        let mut game = Game::<1, 300>::from_moves(&[0; 300])?;
        assert_eq!(game.height(0), 300);
        assert_eq!(game.ply, 300);
        assert!(game.is_column_full(0));
        assert_eq!(game.play(Move::new(0)), Err(PlayError::ColumnFull(0)));
        Ok(())
    }

    #[test]
    fn invalid_column_rejected() {
        let mut game = Connect4::default();
        let before = game;
        assert_eq!(game.play(Move::new(7)), Err(PlayError::InvalidColumn(7)));
        assert_eq!(game, before);
    }
}
