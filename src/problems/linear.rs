//! Linear (non-circular) maximum non-adjacent subset sum as a layered DP.
//!
//! Layer `k` summarises the first `k` houses of the slice. The frontier holds
//! two rolling accumulators: the best total with house `k-1` left alone
//! (`skip`) and with house `k-1` taken (`take`).

use crate::traits::LayeredProblem;

/// `take` at layer 0: there is no previous house to have taken.
pub const UNREACHABLE: i64 = i64::MIN / 4;

#[derive(Clone, Copy)]
pub struct LinearRobbery<'a> {
    values: &'a [i32],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RobberFrontier {
    pub skip: i64,
    pub take: i64,
}

/// Whether the last house of a layer is part of the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RobberState {
    Skipped,
    Taken,
}

impl RobberFrontier {
    #[inline]
    pub fn best(&self) -> i64 {
        self.skip.max(self.take)
    }

    /// Ties resolve to `Skipped`, which keeps selections as small as possible.
    #[inline]
    fn best_state(&self) -> RobberState {
        if self.take > self.skip {
            RobberState::Taken
        } else {
            RobberState::Skipped
        }
    }
}

impl<'a> LinearRobbery<'a> {
    pub fn new(values: &'a [i32]) -> Self {
        Self { values }
    }

    /// Local indices of the houses taken along a path returned by the engine.
    ///
    /// `states[k + 1] == Taken` means house `k` was taken.
    pub fn selected_houses(states: &[RobberState]) -> Vec<usize> {
        states
            .iter()
            .skip(1)
            .enumerate()
            .filter(|(_, s)| **s == RobberState::Taken)
            .map(|(k, _)| k)
            .collect()
    }
}

impl LayeredProblem for LinearRobbery<'_> {
    type State = RobberState;
    type Frontier = RobberFrontier;
    type Cost = i64;

    fn num_layers(&self) -> usize {
        self.values.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        RobberFrontier {
            skip: 0,
            take: UNREACHABLE,
        }
    }

    fn forward_step(&self, layer: usize, f: &Self::Frontier) -> Self::Frontier {
        RobberFrontier {
            skip: f.best(),
            take: f.skip + i64::from(self.values[layer]),
        }
    }

    fn terminal_state(&self, frontier_t: &Self::Frontier) -> Self::State {
        frontier_t.best_state()
    }

    fn predecessor(
        &self,
        _layer: usize,
        frontier_layer: &Self::Frontier,
        state: Self::State,
    ) -> Self::State {
        match state {
            // take[k+1] = skip[k] + a[k]
            RobberState::Taken => RobberState::Skipped,
            // skip[k+1] = max(skip[k], take[k])
            RobberState::Skipped => frontier_layer.best_state(),
        }
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
        frontier_t.best()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScanEngine;

    fn rolling(values: &[i32]) -> i64 {
        let (mut skip, mut take) = (0i64, i64::MIN / 4);
        for &v in values {
            (skip, take) = (skip.max(take), skip + i64::from(v));
        }
        skip.max(take)
    }

    #[test]
    fn first_step_matches_base_case() {
        let p = LinearRobbery::new(&[5, 1]);
        let f1 = p.forward_step(0, &p.init_frontier());
        assert_eq!(f1, RobberFrontier { skip: 0, take: 5 });
        let f2 = p.forward_step(1, &f1);
        assert_eq!(f2, RobberFrontier { skip: 5, take: 1 });
    }

    #[test]
    fn classic_linear_cases() {
        let cases: &[(&[i32], i64)] = &[
            (&[], 0),
            (&[7], 7),
            (&[1, 2, 3, 1], 4),
            (&[2, 7, 9, 3, 1], 12),
            (&[2, 1, 1, 2], 4),
            (&[5, -3, -3, 5], 10),
        ];
        for (values, expected) in cases {
            let engine = ScanEngine::new(LinearRobbery::new(values));
            assert_eq!(engine.cost(), *expected, "{values:?}");
            assert_eq!(rolling(values), *expected, "{values:?}");
        }
    }

    #[test]
    fn path_selects_expected_houses() {
        let houses = [2, 7, 9, 3, 1];
        let (total, states) = ScanEngine::with_block_size(LinearRobbery::new(&houses), 2).run();
        assert_eq!(total, 12);
        assert_eq!(states[0], RobberState::Skipped);
        assert_eq!(LinearRobbery::selected_houses(&states), vec![0, 2, 4]);
    }

    #[test]
    fn ties_prefer_skipping() {
        let houses = [3, 3];
        let (_, states) = ScanEngine::new(LinearRobbery::new(&houses)).run();
        assert_eq!(LinearRobbery::selected_houses(&states), vec![0]);
    }

    #[test]
    fn negative_houses_are_never_taken() {
        let houses = [-4, -1, -7];
        let (total, states) = ScanEngine::new(LinearRobbery::new(&houses)).run();
        assert_eq!(total, 0);
        assert!(LinearRobbery::selected_houses(&states).is_empty());
    }
}
