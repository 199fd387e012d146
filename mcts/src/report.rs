use std::{fmt::Display, time::Duration};

use connect4::Move;

use crate::{b_value, Tree};

/// Statistics of one root move at the end of a search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveInfo {
    pub my_move: Move,
    pub visits: u32,
    pub wins: u32,
    pub b_value: f64,
}

/// What a finished search found.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport {
    pub best_move: Move,
    /// Simulations counted at the root.
    pub simulations: u32,
    /// Share of simulations the computer won.
    pub win_probability: f64,
    /// Nodes in the tree when the search stopped.
    pub tree_size: usize,
    pub elapsed: Duration,
    /// One entry per root child, in column order.
    pub moves: Vec<MoveInfo>,
}

impl SearchReport {
    pub(crate) fn new<const COLUMNS: usize, const ROWS: usize>(
        tree: &Tree<COLUMNS, ROWS>,
        best_move: Move,
        elapsed: Duration,
    ) -> Self {
        let root = tree.get(tree.root());
        let mut moves: Vec<MoveInfo> = root
            .children
            .iter()
            .filter_map(|&id| {
                let child = tree.get(id);
                child.last_move.map(|my_move| MoveInfo {
                    my_move,
                    visits: child.visits,
                    wins: child.wins,
                    b_value: b_value(tree, id),
                })
            })
            .collect();
        moves.sort_by_key(|info| info.my_move);
        SearchReport {
            best_move,
            simulations: root.visits,
            win_probability: root.win_rate(),
            tree_size: tree.len(),
            elapsed,
            moves,
        }
    }

    /// Simulations per second.
    pub fn speed(&self) -> f64 {
        f64::from(self.simulations) / self.elapsed.as_secs_f64().max(f64::EPSILON)
    }
}

impl Display for SearchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "column   visits     wins  win rate  b-value")?;
        for info in &self.moves {
            let win_rate = if info.visits == 0 {
                0.0
            } else {
                f64::from(info.wins) / f64::from(info.visits)
            };
            writeln!(
                f,
                "{: <6} {: >8} {: >8} {: >9.4} {: >8.4}{}",
                info.my_move.to_string(),
                info.visits,
                info.wins,
                win_rate,
                info.b_value,
                if info.my_move == self.best_move { "  *" } else { "" },
            )?;
        }
        write!(
            f,
            "simulations: {}, win probability: {:.4}, nodes: {}, time: {:.2}s",
            self.simulations,
            self.win_probability,
            self.tree_size,
            self.elapsed.as_secs_f64(),
        )
    }
}
