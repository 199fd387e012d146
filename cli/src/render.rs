use std::fmt::{Display, Write};

use connect4::{Colour, Game};

const RESET: &str = "\x1b[0m";

fn paint(colour: Colour) -> &'static str {
    match colour {
        Colour::Yellow => "\x1b[33m",
        Colour::Red => "\x1b[31m",
    }
}

/// Board diagram with each disc drawn as a coloured `O`.
pub struct Coloured<'a, const COLUMNS: usize, const ROWS: usize>(pub &'a Game<COLUMNS, ROWS>);

impl<const COLUMNS: usize, const ROWS: usize> Display for Coloured<'_, COLUMNS, ROWS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "----".repeat(COLUMNS);
        f.write_char('|')?;
        for column in 0..COLUMNS {
            write!(f, "{: ^3}|", column + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        for row in self.0.board.rows_top_down() {
            f.write_char('|')?;
            for cell in row {
                match cell {
                    Some(colour) => write!(f, " {}O{RESET} |", paint(*colour))?,
                    None => f.write_str("   |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
