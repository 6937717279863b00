//! Core trait definitions for layered dynamic programs.
//!
//! To run a recurrence on the [`ScanEngine`](crate::engine::ScanEngine),
//! implement [`LayeredProblem`] for a struct that captures the instance
//! (for example a borrowed slice of values).
//!
//! The trait encodes a small interface:
//! - Layered structure: layers 0..=T, with transitions between consecutive layers.
//! - Frontiers: compact representation of all DP values on a layer.
//! - Terminal choice: which state the optimum ends in at layer T.
//! - Local backtracking: given the frontier at layer `i` and a state at
//!   layer `i+1`, which state at layer `i` it came from.
//!
//! The engine only ever keeps a handful of frontiers alive, so implementations
//! should make `forward_step` cheap and self-contained.

/// Trait for a layered dynamic program instance.
///
/// Semantics:
/// - There are `T = num_layers()` steps.
/// - `forward_step(i, frontier)` maps layer `i` -> layer `i+1`.
/// - After T steps, the final frontier at layer T holds the optimum.
/// - `predecessor` walks one layer backwards along an optimal path.
pub trait LayeredProblem {
    /// A single state along the reconstructed optimal path.
    type State: Copy + PartialEq;

    /// Representation of the DP frontier at a layer.
    type Frontier: Clone;

    /// Objective / cost type.
    type Cost: Copy + Ord;

    /// Number of DP layers/steps `T`.
    fn num_layers(&self) -> usize;

    /// Initialize the frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Perform one DP step: from layer `i` to `i+1`.
    ///
    /// Must only depend on `frontier_i` and fixed problem data.
    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier) -> Self::Frontier;

    /// Pick the state an optimal path ends in at layer T.
    fn terminal_state(&self, frontier_t: &Self::Frontier) -> Self::State;

    /// Given `state` at layer `layer + 1` on an optimal path, return the state
    /// at `layer` it was derived from. `frontier_layer` is the frontier at `layer`.
    fn predecessor(
        &self,
        layer: usize,
        frontier_layer: &Self::Frontier,
        state: Self::State,
    ) -> Self::State;

    /// Extract the objective value from the final frontier.
    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost;
}
