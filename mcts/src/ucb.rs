use arrayvec::ArrayVec;
use connect4::HUMAN;
use rand::{seq::SliceRandom, Rng};

use crate::{config::EXPLORATION, NodeId, Tree};

/// B-value of a node as seen from its parent.
///
/// ```latex
/// B(n) = \pm \left( \frac{W(n)}{N(n)} + C \sqrt{\frac{\ln N(p)}{N(n)}} \right)
/// ```
///
/// Wins are counted for the computer, so the sign is negative
/// when the human chooses at the parent.
pub fn b_value<const COLUMNS: usize, const ROWS: usize>(tree: &Tree<COLUMNS, ROWS>, id: NodeId) -> f64 {
    let node = tree.get(id);
    // The root has no parent to be compared from.
    let Some(parent) = node.parent.map(|parent| tree.get(parent)) else {
        return 0.0;
    };
    if node.visits == 0 {
        return 0.0;
    }
    let sign = if parent.mover == HUMAN { 1.0 } else { -1.0 };
    let exploration = EXPLORATION * (f64::from(parent.visits).ln() / f64::from(node.visits)).sqrt();
    sign * (node.win_rate() + exploration)
}

/// The child with the highest B-value, ties broken uniformly at random.
/// Randomness is only used when there is an actual tie.
pub fn best_child<const COLUMNS: usize, const ROWS: usize, R: Rng + ?Sized>(
    tree: &Tree<COLUMNS, ROWS>,
    id: NodeId,
    rng: &mut R,
) -> Option<NodeId> {
    let children = &tree.get(id).children;
    if children.len() <= 1 {
        return children.first().copied();
    }

    let scores: ArrayVec<f64, COLUMNS> = children.iter().map(|&child| b_value(tree, child)).collect();
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let ties: ArrayVec<NodeId, COLUMNS> = children
        .iter()
        .zip(&scores)
        .filter(|(_, &score)| score == max)
        .map(|(&child, _)| child)
        .collect();

    match ties.as_slice() {
        [only] => Some(*only),
        ties => ties.choose(rng).copied(),
    }
}
