//! The algorithm plugin boundary.
//!
//! Routing algorithms live outside this crate. They are handed the frozen
//! network once, then answered queries in the network's index space.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::error::{AlgorithmError, BenchError};
use super::results::QueryKind;
use crate::domain::Query;
use crate::journey::Journey;
use crate::network::NetworkModel;

/// A routing algorithm under benchmark.
///
/// This abstraction allows the runner to be tested with scripted answers.
pub trait Algorithm: Send {
    /// Preprocess the network. Called once before any query.
    fn init(&mut self, network: Arc<NetworkModel>) -> Result<(), AlgorithmError>;

    /// Returns true if the algorithm answers queries of `kind`.
    fn supports(&self, kind: QueryKind) -> bool;

    /// Answer one query.
    ///
    /// Earliest-arrival queries return at most one journey; bi-criteria
    /// queries may return several.
    fn query(&mut self, kind: QueryKind, query: &Query) -> Result<Vec<Journey>, AlgorithmError>;
}

type Factory = Box<dyn Fn() -> Box<dyn Algorithm> + Send + Sync>;

/// Named algorithm constructors.
///
/// Names are case-insensitive.
#[derive(Default)]
pub struct AlgorithmRegistry {
    factories: HashMap<String, Factory>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Algorithm> + Send + Sync + 'static,
    {
        self.factories.insert(name.to_lowercase(), Box::new(factory));
    }

    /// Construct a fresh instance of the algorithm called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::UnknownAlgorithm`] if nothing is registered
    /// under that name.
    pub fn create(&self, name: &str) -> Result<Box<dyn Algorithm>, BenchError> {
        let name = name.to_lowercase();
        self.factories
            .get(&name)
            .map(|factory| factory())
            .ok_or(BenchError::UnknownAlgorithm(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_lowercase())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("names", &self.names())
            .finish()
    }
}
