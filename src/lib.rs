//! Circular house robbery.
//!
//! Houses stand in a circle, each holding some value; two neighbouring houses
//! can never both be robbed, and the first and last house are neighbours.
//! This crate computes the best achievable total and, on request, one set of
//! houses that achieves it.
//!
//! ## Core idea
//! 1. The linear recurrence (`skip` / `take` rolling accumulators) is modelled
//!    as a layered DP by implementing [`LayeredProblem`].
//! 2. [`ScanEngine`] drives any layered DP, either for its cost alone or with
//!    checkpointed backtracking to recover the optimal path.
//! 3. [`CircularRobberySolver`] breaks the cycle by scanning twice: once
//!    without the last house and once without the first.
//!
//! ## Quick start
//! ```
//! use circular_robbery::{solve, solve_with_selection, RobberyError};
//!
//! assert_eq!(solve(&[2, 3, 2]), Ok(3));
//! assert_eq!(solve(&[]), Err(RobberyError::EmptyInput));
//!
//! let sel = solve_with_selection(&[1, 2, 3, 1]).unwrap();
//! assert_eq!(sel.total, 4);
//! assert_eq!(sel.houses, vec![0, 2]);
//! ```

pub mod blocks;
pub mod builder;
pub mod engine;
pub mod error;
pub mod problems;
pub mod traits;
pub mod utils;

pub use crate::builder::ScanEngineBuilder;
pub use crate::engine::ScanEngine;
pub use crate::error::{Result, RobberyError};
pub use crate::problems::circular::{CircularRobberySolver, Selection};
pub use crate::traits::LayeredProblem;

/// Maximum total over houses on a cycle with no two neighbours robbed.
///
/// Fails with [`RobberyError::EmptyInput`] when `values` is empty.
pub fn solve(values: &[i32]) -> Result<i64> {
    CircularRobberySolver::new().solve(values)
}

/// [`solve`] plus the indices of one optimal set of houses.
pub fn solve_with_selection(values: &[i32]) -> Result<Selection> {
    CircularRobberySolver::new().solve_with_selection(values)
}
