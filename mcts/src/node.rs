use arrayvec::ArrayVec;
use connect4::{Colour, Game, Move};

/// Index of a node in its tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
pub struct Node<const COLUMNS: usize, const ROWS: usize> {
    /// The player who moved to reach this position.
    pub mover: Colour,
    /// `None` only for the root.
    pub last_move: Option<Move>,
    pub game: Game<COLUMNS, ROWS>,
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    pub children: ArrayVec<NodeId, COLUMNS>,
    pub visits: u32,
    /// Simulations through this node that the computer won.
    pub wins: u32,
}

impl<const COLUMNS: usize, const ROWS: usize> Node<COLUMNS, ROWS> {
    pub fn root(game: Game<COLUMNS, ROWS>) -> Self {
        Node {
            mover: game.to_move.next(),
            last_move: None,
            game,
            parent: None,
            children: ArrayVec::new(),
            visits: 0,
            wins: 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Fraction of simulations the computer won, 0 when unvisited.
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.visits)
        }
    }
}
