use std::fmt::{Display, Write};

use crate::{Colour, Game};

impl Colour {
    /// Single letter used in plain board diagrams.
    pub fn symbol(self) -> char {
        match self {
            Colour::Yellow => 'Y',
            Colour::Red => 'R',
        }
    }
}

/// Board diagram with one-based column labels on top and the bottom row last.
impl<const COLUMNS: usize, const ROWS: usize> Display for Game<COLUMNS, ROWS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "----".repeat(COLUMNS);
        f.write_char('|')?;
        for column in 0..COLUMNS {
            write!(f, "{: ^3}|", column + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        for row in self.board.rows_top_down() {
            f.write_char('|')?;
            for cell in row {
                write!(f, " {} |", cell.map_or(' ', Colour::symbol))?;
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
