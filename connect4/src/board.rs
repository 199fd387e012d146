use std::ops::{Index, IndexMut};

use crate::Colour;

/// Grid of discs. Row 0 is the bottom row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board<const COLUMNS: usize, const ROWS: usize> {
    data: [[Option<Colour>; COLUMNS]; ROWS],
}

impl<const COLUMNS: usize, const ROWS: usize> Default for Board<COLUMNS, ROWS> {
    fn default() -> Self {
        Board {
            data: [[None; COLUMNS]; ROWS],
        }
    }
}

/// Indexed by `(column, row)`.
impl<const COLUMNS: usize, const ROWS: usize> Index<(usize, usize)> for Board<COLUMNS, ROWS> {
    type Output = Option<Colour>;

    fn index(&self, (column, row): (usize, usize)) -> &Self::Output {
        self.data.index(row).index(column)
    }
}

impl<const COLUMNS: usize, const ROWS: usize> IndexMut<(usize, usize)> for Board<COLUMNS, ROWS> {
    fn index_mut(&mut self, (column, row): (usize, usize)) -> &mut Self::Output {
        self.data.index_mut(row).index_mut(column)
    }
}

impl<const COLUMNS: usize, const ROWS: usize> Board<COLUMNS, ROWS> {
    fn has(column: usize, row: usize) -> bool {
        column < COLUMNS && row < ROWS
    }

    /// Get the disc at the given cell, `None` for empty or off-board cells.
    pub fn get(&self, column: usize, row: usize) -> Option<Colour> {
        if Board::<COLUMNS, ROWS>::has(column, row) {
            self[(column, row)]
        } else {
            None
        }
    }

    pub fn full(&self) -> bool {
        !self.data.iter().any(|row| row.iter().any(Option::is_none))
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.data
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Number of occupied cells in a column.
    pub fn column_count(&self, column: usize) -> usize {
        self.data.iter().filter(|row| row[column].is_some()).count()
    }

    /// Rows from the top of the board down.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Option<Colour>; COLUMNS]> {
        self.data.iter().rev()
    }
}
