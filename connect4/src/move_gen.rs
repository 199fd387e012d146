use arrayvec::ArrayVec;

use crate::{Game, Move};

impl<const COLUMNS: usize, const ROWS: usize> Game<COLUMNS, ROWS> {
    /// One move per column that still has room, in ascending column order.
    pub fn possible_moves(&self) -> ArrayVec<Move, COLUMNS> {
        (0..COLUMNS)
            .filter(|&column| !self.is_column_full(column))
            .map(Move::new)
            .collect()
    }
}

/// Count the positions reachable in exactly `depth` plies,
/// stopping early at finished games.
pub fn perf_count<const COLUMNS: usize, const ROWS: usize>(game: &Game<COLUMNS, ROWS>, depth: usize) -> usize {
    if depth == 0 || !game.result().is_ongoing() {
        1
    } else if depth == 1 {
        game.possible_moves().len()
    } else {
        game.possible_moves()
            .into_iter()
            .map(|m| {
                let mut clone = *game;
                // Generated moves are always playable.
                if clone.play(m).is_err() {
                    return 0;
                }
                perf_count(&clone, depth - 1)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Connect4, Move, PlayError};

    #[test]
    fn empty_board_has_every_column() {
        let moves = Connect4::default().possible_moves();
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().enumerate().all(|(i, m)| m.column() == i));
    }

    #[test]
    fn full_columns_are_skipped() -> Result<(), PlayError> {
        let game = Connect4::from_moves(&[2, 2, 2, 2, 2, 2])?;
        let moves = game.possible_moves();
        assert_eq!(moves.len(), 6);
        assert!(!moves.contains(&Move::new(2)));
        Ok(())
    }
}
