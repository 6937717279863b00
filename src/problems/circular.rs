//! Houses on a cycle: the first and last house are neighbours.
//!
//! Any valid circular selection leaves out the first house or the last one
//! (or both), so the optimum is the better of two linear scans: one over
//! `values[..n-1]` and one over `values[1..]`. Both feed the same
//! [`LinearRobbery`] recurrence and differ only in the slice and its offset.

use crate::builder::ScanEngineBuilder;
use crate::engine::ScanEngine;
use crate::error::{Result, RobberyError};
use crate::problems::linear::LinearRobbery;

/// An optimal circular selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub total: i64,
    /// Strictly increasing indices into the input.
    pub houses: Vec<usize>,
}

/// Solver for the circular maximum non-adjacent subset sum.
#[derive(Clone, Copy, Debug, Default)]
pub struct CircularRobberySolver {
    block_size: Option<usize>,
}

/// One linear pass: the slice it scans and where that slice starts globally.
#[derive(Clone, Copy)]
struct Pass<'a> {
    offset: usize,
    values: &'a [i32],
}

impl<'a> Pass<'a> {
    /// Pass A keeps the first house eligible, pass B the last one.
    fn split(values: &'a [i32]) -> [Pass<'a>; 2] {
        let n = values.len();
        [
            Pass {
                offset: 0,
                values: &values[..n - 1],
            },
            Pass {
                offset: 1,
                values: &values[1..],
            },
        ]
    }
}

impl CircularRobberySolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the checkpoint spacing used when recovering selections.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            block_size: Some(block_size),
        }
    }

    fn engine<'a>(&self, pass: Pass<'a>) -> ScanEngine<LinearRobbery<'a>> {
        let builder = ScanEngineBuilder::new(LinearRobbery::new(pass.values));
        let builder = match self.block_size {
            Some(b) => builder.with_block_size(b),
            None => builder,
        };
        builder.build()
    }

    /// Maximum total over houses with no two cyclically adjacent.
    ///
    /// ```
    /// use circular_robbery::CircularRobberySolver;
    ///
    /// let solver = CircularRobberySolver::new();
    /// assert_eq!(solver.solve(&[1, 2, 3, 1]), Ok(4));
    /// assert!(solver.solve(&[]).is_err());
    /// ```
    pub fn solve(&self, values: &[i32]) -> Result<i64> {
        match values {
            [] => Err(RobberyError::EmptyInput),
            [only] => Ok(i64::from(*only)),
            [first, second] => Ok(i64::from((*first).max(*second))),
            _ => {
                let [a, b] = Pass::split(values).map(|pass| self.engine(pass).cost());
                #[cfg(feature = "tracing")]
                tracing::debug!(houses = values.len(), pass_a = a, pass_b = b, "circular scan");
                Ok(a.max(b))
            }
        }
    }

    /// Like [`solve`](Self::solve), also returning one optimal set of houses.
    ///
    /// On equal totals the pass that keeps the first house eligible wins.
    pub fn solve_with_selection(&self, values: &[i32]) -> Result<Selection> {
        match values {
            [] => Err(RobberyError::EmptyInput),
            [only] => Ok(Selection {
                total: i64::from(*only),
                houses: vec![0],
            }),
            [first, second] => {
                let pick = usize::from(second > first);
                Ok(Selection {
                    total: i64::from(values[pick]),
                    houses: vec![pick],
                })
            }
            _ => {
                let [a, b] = Pass::split(values).map(|pass| {
                    let (total, states) = self.engine(pass).run();
                    let houses = LinearRobbery::selected_houses(&states)
                        .into_iter()
                        .map(|k| k + pass.offset)
                        .collect();
                    Selection { total, houses }
                });
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    houses = values.len(),
                    pass_a = a.total,
                    pass_b = b.total,
                    "circular scan with selection"
                );
                Ok(if b.total > a.total { b } else { a })
            }
        }
    }
}
