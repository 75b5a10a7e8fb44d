//! Benchmark run configuration.

use super::results::QueryKind;

/// Configuration for [`Benchmark::run`](super::Benchmark::run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Query kind to run. `None` picks earliest-arrival if the algorithm
    /// supports it, else bi-criteria.
    pub kind: Option<QueryKind>,

    /// How many times each query is run. Every run is recorded.
    pub repetitions: usize,

    /// Check returned journeys against the network while running and log
    /// the failures.
    pub validate: bool,
}

impl BenchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(kind: Option<QueryKind>, repetitions: usize, validate: bool) -> Self {
        Self {
            kind,
            repetitions,
            validate,
        }
    }

    pub fn with_kind(mut self, kind: QueryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            kind: None,
            repetitions: 1,
            validate: false,
        }
    }
}
