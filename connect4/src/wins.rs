use crate::{Game, GameResult, CONNECT};

/// Column and row steps of the four line directions: up, right and both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

impl<const COLUMNS: usize, const ROWS: usize> Game<COLUMNS, ROWS> {
    #[must_use]
    pub fn result(&self) -> GameResult {
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                if let Some(colour) = self.board.get(column, row) {
                    if DIRECTIONS
                        .iter()
                        .any(|&direction| self.run_length(column, row, direction) >= CONNECT)
                    {
                        return GameResult::Winner(colour);
                    }
                }
            }
        }
        if self.board.full() {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }

    /// Length of the run of equal discs starting at the given cell, capped at `CONNECT`.
    fn run_length(&self, column: usize, row: usize, (dc, dr): (isize, isize)) -> usize {
        let start = self.board.get(column, row);
        (0..CONNECT)
            .take_while(|&k| {
                let k = k as isize;
                let (Some(c), Some(r)) = (
                    column.checked_add_signed(dc * k),
                    row.checked_add_signed(dr * k),
                ) else {
                    return false;
                };
                self.board.get(c, r) == start
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Colour, Connect4, Game, GameResult, PlayError};

    #[test]
    fn empty_is_ongoing() {
        assert_eq!(Connect4::default().result(), GameResult::Ongoing);
    }

    #[test]
    fn three_is_not_enough() -> Result<(), PlayError> {
        let game = Connect4::from_moves(&[0, 0, 1, 1, 2, 2])?;
        assert_eq!(game.result(), GameResult::Ongoing);
        Ok(())
    }

    #[test]
    fn tiny_board_draw() -> Result<(), PlayError> {
        // A 3x3 board can never hold four in a row.
        let game = Game::<3, 3>::from_moves(&[0, 1, 2, 0, 1, 2, 0, 1, 2])?;
        assert_eq!(game.result(), GameResult::Draw);
        Ok(())
    }

    #[test]
    fn run_through_edge_is_not_a_win() -> Result<(), PlayError> {
        // Yellow holds columns 4, 5 and 6 on the bottom row; the run cannot wrap.
        let game = Connect4::from_moves(&[4, 0, 5, 0, 6])?;
        assert_eq!(game.result(), GameResult::Ongoing);
        assert_eq!(game.board.get(6, 0), Some(Colour::Yellow));
        Ok(())
    }
}
