use std::time::{Duration, Instant};

use connect4::{Game, Move};
use log::{debug, info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{best_child, rollout, select, Budget, SearchError, SearchReport, Tree};

/// Where the engine is in computing a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Searching,
    Extracting,
    Done,
}

/// Computer player. Owns the random number generator used by every search.
pub struct Engine<R = StdRng> {
    rng: R,
    phase: Phase,
}

impl Engine<StdRng> {
    pub fn new() -> Self {
        Engine::from_rng(StdRng::from_entropy())
    }

    /// Engine with a reproducible random sequence.
    pub fn with_seed(seed: u64) -> Self {
        Engine::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Engine<R> {
    pub fn from_rng(rng: R) -> Self {
        Engine {
            rng,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn enter(&mut self, phase: Phase) {
        debug!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Search the position and pick a move without playing it.
    ///
    /// The tree is built from a copy of `game` and torn down before returning.
    pub fn search<const COLUMNS: usize, const ROWS: usize>(
        &mut self,
        game: &Game<COLUMNS, ROWS>,
        budget: impl Into<Budget>,
    ) -> Result<SearchReport, SearchError> {
        let budget = budget.into();
        self.enter(Phase::Idle);
        if !game.result().is_ongoing() {
            return Err(SearchError::NoLegalMoves);
        }

        let mut tree = Tree::new(*game);
        let root = tree.root();
        if tree.expand(root)? == 0 {
            return Err(SearchError::NoLegalMoves);
        }

        self.enter(Phase::Searching);
        let start = Instant::now();
        let mut simulations = 0;
        loop {
            let selected = select(&tree, &mut self.rng);
            let (terminal, result) = rollout(&mut tree, selected, &mut self.rng)?;
            tree.backpropagate(terminal, result);
            simulations += 1;
            if budget.exhausted(start, simulations) {
                break;
            }
        }
        trace!("{simulations} simulations, {} nodes", tree.len());

        self.enter(Phase::Extracting);
        let best = best_child(&tree, root, &mut self.rng).ok_or(SearchError::NoLegalMoves)?;
        let best_move = tree.get(best).last_move.ok_or(SearchError::NoLegalMoves)?;
        let report = SearchReport::new(&tree, best_move, start.elapsed());

        self.enter(Phase::Done);
        let released = tree.destroy();
        debug!("released {released} nodes");
        info!(
            "picked column {} after {} simulations ({:.0}/s), win probability {:.4}",
            report.best_move,
            report.simulations,
            report.speed(),
            report.win_probability,
        );
        Ok(report)
    }

    /// Search the position, then play the chosen move on `game`.
    /// `game` is only modified once a move has been chosen.
    pub fn compute_move<const COLUMNS: usize, const ROWS: usize>(
        &mut self,
        game: &mut Game<COLUMNS, ROWS>,
        budget: impl Into<Budget>,
    ) -> Result<Move, SearchError> {
        let report = self.search(game, budget)?;
        game.play(report.best_move)?;
        Ok(report.best_move)
    }
}

/// Compute and play a move with a freshly seeded engine.
pub fn compute_move<const COLUMNS: usize, const ROWS: usize>(
    game: &mut Game<COLUMNS, ROWS>,
    budget: Duration,
) -> Result<Move, SearchError> {
    Engine::new().compute_move(game, budget)
}

/// Like [`compute_move`] with the budget in seconds.
/// Negative budgets still run a single simulation.
pub fn compute_move_secs<const COLUMNS: usize, const ROWS: usize>(
    game: &mut Game<COLUMNS, ROWS>,
    seconds: f64,
) -> Result<Move, SearchError> {
    Engine::new().compute_move(game, Budget::from_secs_f64(seconds))
}
