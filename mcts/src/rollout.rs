use connect4::GameResult;
use rand::{seq::SliceRandom, Rng};

use crate::{NodeId, SearchError, Tree};

/// Play uniformly random moves from `from` until the game ends.
///
/// Every position on the way is kept in the tree: each node passed through is
/// fully expanded (reusing children that already exist) before one of its
/// children is picked. Returns the terminal node and its result.
pub fn rollout<const COLUMNS: usize, const ROWS: usize, R: Rng + ?Sized>(
    tree: &mut Tree<COLUMNS, ROWS>,
    from: NodeId,
    rng: &mut R,
) -> Result<(NodeId, GameResult), SearchError> {
    let mut current = from;
    loop {
        let result = tree.get(current).game.result();
        if !result.is_ongoing() {
            return Ok((current, result));
        }
        tree.expand(current)?;
        current = *tree
            .get(current)
            .children
            .choose(rng)
            .ok_or(SearchError::NoLegalMoves)?;
    }
}
