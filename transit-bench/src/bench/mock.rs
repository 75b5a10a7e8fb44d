//! Scripted algorithm for testing without a real router.
//!
//! Serves canned journeys keyed by query, as if it had computed them.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::error::AlgorithmError;
use super::plugin::Algorithm;
use super::results::QueryKind;
use crate::domain::Query;
use crate::journey::Journey;
use crate::network::NetworkModel;

/// Algorithm that answers from a fixed script.
///
/// Queries without a scripted answer get no journeys.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAlgorithm {
    kinds: HashSet<QueryKind>,
    answers: HashMap<Query, Vec<Journey>>,
    fail_init: Option<String>,
    network: Option<Arc<NetworkModel>>,
    calls: usize,
}

impl ScriptedAlgorithm {
    /// Create a script supporting the given query kinds.
    pub fn new(kinds: impl IntoIterator<Item = QueryKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Answer `query` with `journeys`.
    pub fn with_answer(mut self, query: Query, journeys: Vec<Journey>) -> Self {
        self.answers.insert(query, journeys);
        self
    }

    /// Make `init` fail with `message`.
    pub fn failing_init(mut self, message: impl Into<String>) -> Self {
        self.fail_init = Some(message.into());
        self
    }

    /// The network passed to `init`, if any.
    pub fn network(&self) -> Option<&Arc<NetworkModel>> {
        self.network.as_ref()
    }

    /// Number of queries answered so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Algorithm for ScriptedAlgorithm {
    fn init(&mut self, network: Arc<NetworkModel>) -> Result<(), AlgorithmError> {
        if let Some(message) = &self.fail_init {
            return Err(AlgorithmError::Init(message.clone()));
        }
        self.network = Some(network);
        Ok(())
    }

    fn supports(&self, kind: QueryKind) -> bool {
        self.kinds.contains(&kind)
    }

    fn query(&mut self, kind: QueryKind, query: &Query) -> Result<Vec<Journey>, AlgorithmError> {
        if self.network.is_none() {
            return Err(AlgorithmError::NotInitialized);
        }
        if !self.supports(kind) {
            return Err(AlgorithmError::Unsupported(kind));
        }
        self.calls += 1;
        Ok(self.answers.get(query).cloned().unwrap_or_default())
    }
}
