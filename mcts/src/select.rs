use arrayvec::ArrayVec;
use rand::{seq::SliceRandom, Rng};

use crate::{best_child, NodeId, Tree};

/// Walk down from the root to the node that should be simulated next.
///
/// Stops at the first node without children, or at a random unvisited child
/// as soon as one exists. Otherwise descends into the best child.
pub fn select<const COLUMNS: usize, const ROWS: usize, R: Rng + ?Sized>(
    tree: &Tree<COLUMNS, ROWS>,
    rng: &mut R,
) -> NodeId {
    let mut current = tree.root();
    loop {
        let node = tree.get(current);
        if node.is_leaf() {
            return current;
        }

        let unvisited: ArrayVec<NodeId, COLUMNS> = node
            .children
            .iter()
            .copied()
            .filter(|&child| tree.get(child).visits == 0)
            .collect();
        if let Some(&child) = unvisited.choose(rng) {
            return child;
        }

        match best_child(tree, current, rng) {
            Some(child) => current = child,
            None => return current,
        }
    }
}
