use crate::utils::default_block_size;
use crate::{LayeredProblem, ScanEngine};

pub struct ScanEngineBuilder<P: LayeredProblem> {
    problem: P,
    block_size: Option<usize>,
}

impl<P: LayeredProblem> ScanEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            block_size: None,
        }
    }
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }
    pub fn build(self) -> ScanEngine<P> {
        let b = self
            .block_size
            .unwrap_or_else(|| default_block_size(self.problem.num_layers()));
        ScanEngine::with_block_size(self.problem, b)
    }
}
