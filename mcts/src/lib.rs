//! Monte Carlo Tree Search with upper confidence bounds (UCT) and uniformly
//! random rollouts, used to pick the computer's moves.
//!
//! Every simulation selects a node by walking down the tree, plays the game
//! out at random from there (keeping the visited positions in the tree), and
//! counts the result on every node back up to the root. Win counters are
//! always kept from the computer's point of view.

pub mod config;

mod budget;
mod engine;
mod error;
mod node;
mod report;
mod rollout;
mod select;
mod tree;
mod ucb;

pub use budget::Budget;
pub use engine::{compute_move, compute_move_secs, Engine, Phase};
pub use error::SearchError;
pub use node::{Node, NodeId};
pub use report::{MoveInfo, SearchReport};
pub use rollout::rollout;
pub use select::select;
pub use tree::Tree;
pub use ucb::{b_value, best_child};
