//! Search tree with arena storage.
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. Children are
//! owned through the arena; the parent link is only used to walk back up
//! during backpropagation.

use arrayvec::ArrayVec;
use connect4::{Game, GameResult, Move};
use log::trace;

use crate::{
    node::{Node, NodeId},
    SearchError,
};

#[derive(Clone, Debug)]
pub struct Tree<const COLUMNS: usize, const ROWS: usize> {
    nodes: Vec<Node<COLUMNS, ROWS>>,
}

impl<const COLUMNS: usize, const ROWS: usize> Tree<COLUMNS, ROWS> {
    /// Create a tree holding only a root for a copy of the given game.
    pub fn new(game: Game<COLUMNS, ROWS>) -> Self {
        Tree {
            nodes: vec![Node::root(game)],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node<COLUMNS, ROWS> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<COLUMNS, ROWS> {
        &mut self.nodes[id.index()]
    }

    /// Number of nodes in the tree, including the root.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false, the root exists from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add the position after `my_move` as a new child of `parent`.
    /// The parent is left untouched when this fails.
    pub fn add_child(&mut self, parent: NodeId, my_move: Move) -> Result<NodeId, SearchError> {
        let parent_node = self.get(parent);
        if parent_node.children.is_full() {
            return Err(SearchError::NodeFull);
        }
        let mut game = parent_node.game;
        game.play(my_move)?;

        let child = Node {
            mover: parent_node.mover.next(),
            last_move: Some(my_move),
            game,
            parent: Some(parent),
            children: ArrayVec::new(),
            visits: 0,
            wins: 0,
        };
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(child);
        self.get_mut(parent).children.push(id);
        Ok(id)
    }

    /// Add a child for every legal move that does not have one yet.
    /// Returns how many children were created.
    pub fn expand(&mut self, id: NodeId) -> Result<usize, SearchError> {
        let node = self.get(id);
        let missing: ArrayVec<Move, COLUMNS> = node
            .game
            .possible_moves()
            .into_iter()
            .filter(|&m| !node.children.iter().any(|&child| self.get(child).last_move == Some(m)))
            .collect();
        let created = missing.len();
        for my_move in missing {
            self.add_child(id, my_move)?;
        }
        Ok(created)
    }

    /// Count one simulation with the given outcome on every node from `leaf` up to the root.
    pub fn backpropagate(&mut self, leaf: NodeId, result: GameResult) {
        let won = result.computer_wins();
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visits += 1;
            if won {
                node.wins += 1;
            }
            current = node.parent;
        }
        trace!("backpropagated {result:?} from node {}", leaf.index());
    }

    /// Tear the tree down children first, without recursion.
    /// Returns the number of nodes released.
    pub fn destroy(mut self) -> usize {
        let mut released = 0;
        let mut stack = vec![(self.root(), false)];
        while let Some((id, children_done)) = stack.pop() {
            if children_done {
                let node = self.get_mut(id);
                node.children.clear();
                node.parent = None;
                released += 1;
            } else {
                stack.push((id, true));
                stack.extend(self.get(id).children.iter().map(|&child| (child, false)));
            }
        }
        released
    }
}
