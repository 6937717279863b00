//! Block-level data structures used by the engine.
//!
//! Each `BlockCheckpoint` covers an interval [start, end) of layers and keeps
//! the frontier at `start`, which is all the engine needs to replay the block.

/// Checkpoint for a contiguous interval of layers [start, end).
#[derive(Debug, Clone)]
pub struct BlockCheckpoint<F> {
    /// Inclusive start layer index.
    pub start: usize,
    /// Exclusive end layer index.
    pub end: usize,
    /// Frontier at layer `start`.
    pub frontier: F,
}

impl<F> BlockCheckpoint<F> {
    /// Length of the block in layers.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
