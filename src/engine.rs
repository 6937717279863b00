//! Generic checkpointed scan engine.
//!
//! This module implements the two-phase algorithm:
//! 1. A forward pass that stores one frontier checkpoint per block of layers.
//! 2. A backward pass that replays each block from its checkpoint and walks
//!    the optimal path back through it with [`LayeredProblem::predecessor`].
//!
//! With blocks of ≈ √T layers, at most O(√T) frontiers are alive at any time
//! while the recovered path is still exact. When only the optimum is needed,
//! [`ScanEngine::cost`] skips both phases and keeps a single rolling frontier.
//!
//! The engine is completely generic over implementations of [`LayeredProblem`].

use crate::blocks::BlockCheckpoint;
use crate::traits::LayeredProblem;
use crate::utils::{block_count, default_block_size};

/// Checkpointed scan engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use circular_robbery::{problems::linear::LinearRobbery, ScanEngine};
///
/// let houses = [2, 7, 9, 3, 1];
/// let engine = ScanEngine::new(LinearRobbery::new(&houses));
/// let (total, states) = engine.run();
/// assert_eq!(total, 12);
/// assert_eq!(states.len(), houses.len() + 1);
/// ```
pub struct ScanEngine<P: LayeredProblem> {
    problem: P,
    block_size: usize,
}

impl<P: LayeredProblem> ScanEngine<P> {
    /// Create a new engine with a heuristic block size (≈ √T).
    pub fn new(problem: P) -> Self {
        let b = default_block_size(problem.num_layers());
        Self::with_block_size(problem, b)
    }

    /// Create a new engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    /// Return the configured block size.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Optimal cost only, using a single rolling frontier.
    pub fn cost(&self) -> P::Cost {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("scan_cost", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let frontier_t = self.advance(0, self.problem.num_layers(), self.problem.init_frontier());
        self.problem.extract_cost(&frontier_t)
    }

    /// Run the full scan and recover an optimal path.
    ///
    /// Returns `(optimal_cost, states)` where `states[i]` is the state of the
    /// optimal path at layer `i`, for every layer in `0..=T`.
    pub fn run(&self) -> (P::Cost, Vec<P::State>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("scan_run", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (checkpoints, frontier_t) = self.build_checkpoints();
        let cost = self.problem.extract_cost(&frontier_t);

        let mut state = self.problem.terminal_state(&frontier_t);
        let mut path = Vec::with_capacity(self.problem.num_layers() + 1);
        path.push(state);
        for block in checkpoints.iter().rev() {
            state = self.backtrack_block(block, state, &mut path);
        }
        path.reverse();

        (cost, path)
    }

    /// Phase I: checkpoint the frontier at the start of every block.
    ///
    /// Returns the checkpoints covering [0, T) and the frontier at layer T.
    fn build_checkpoints(&self) -> (Vec<BlockCheckpoint<P::Frontier>>, P::Frontier) {
        let t = self.problem.num_layers();
        let b = self.block_size;
        let num_blocks = block_count(t, b);

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("build_checkpoints", layers = t, blocks = num_blocks);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut checkpoints = Vec::with_capacity(num_blocks);
        let mut frontier = self.problem.init_frontier();
        for k in 0..num_blocks {
            let start = k * b;
            let end = ((k + 1) * b).min(t);
            let next = self.advance(start, end, frontier.clone());
            checkpoints.push(BlockCheckpoint {
                start,
                end,
                frontier,
            });
            frontier = next;
        }
        (checkpoints, frontier)
    }

    /// Phase II for one block: replay its frontiers, then walk `state` (at
    /// layer `block.end`) back to layer `block.start`, pushing each state.
    fn backtrack_block(
        &self,
        block: &BlockCheckpoint<P::Frontier>,
        mut state: P::State,
        path: &mut Vec<P::State>,
    ) -> P::State {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("backtrack_block", start = block.start, end = block.end);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut frontiers = Vec::with_capacity(block.len());
        let mut frontier = block.frontier.clone();
        for layer in block.start..block.end {
            let next = self.problem.forward_step(layer, &frontier);
            frontiers.push(frontier);
            frontier = next;
        }
        for layer in (block.start..block.end).rev() {
            state = self
                .problem
                .predecessor(layer, &frontiers[layer - block.start], state);
            path.push(state);
        }
        state
    }

    fn advance(&self, from: usize, to: usize, mut frontier: P::Frontier) -> P::Frontier {
        for layer in from..to {
            frontier = self.problem.forward_step(layer, &frontier);
        }
        frontier
    }
}
