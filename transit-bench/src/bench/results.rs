//! Benchmark results.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::query::QueryId;
use crate::codec::{self, CodecError};
use crate::journey::Journey;

/// Which question a query asks of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// One journey arriving as early as possible
    EarliestArrival,
    /// Every journey on the arrival time / transfer count Pareto front
    BiCriteria,
}

impl QueryKind {
    pub const ALL: [QueryKind; 2] = [QueryKind::EarliestArrival, QueryKind::BiCriteria];
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::EarliestArrival => write!(f, "earliest-arrival"),
            QueryKind::BiCriteria => write!(f, "bi-criteria"),
        }
    }
}

/// One timed run of one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub runtime_ns: u64,
    pub kind: QueryKind,
    pub journeys: Vec<Journey>,
}

impl QueryResult {
    pub fn new(runtime_ns: u64, kind: QueryKind, journeys: Vec<Journey>) -> Self {
        Self {
            runtime_ns,
            kind,
            journeys,
        }
    }
}

/// One timed run of an algorithm's preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessingResult {
    pub runtime_ns: u64,
}

/// Everything measured during a benchmark.
///
/// Query results are grouped by query id, ids in the order they were first
/// seen. Adding a result for an id that already has some appends to its
/// list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Results {
    preprocessing: Vec<PreprocessingResult>,
    queries: IndexMap<QueryId, Vec<QueryResult>>,
}

/// Flat on-disk layout: one entry per query result, tagged with its id.
#[derive(Serialize, Deserialize)]
struct ResultsRecord {
    preprocessing: Vec<PreprocessingResult>,
    queries: Vec<QueryResultRecord>,
}

#[derive(Serialize, Deserialize)]
struct QueryResultRecord {
    query_id: QueryId,
    #[serde(flatten)]
    result: QueryResult,
}

impl Results {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_preprocessing_result(&mut self, result: PreprocessingResult) {
        self.preprocessing.push(result);
    }

    pub fn add_query_result(&mut self, id: QueryId, result: QueryResult) {
        self.queries.entry(id).or_default().push(result);
    }

    pub fn preprocessing_results(&self) -> &[PreprocessingResult] {
        &self.preprocessing
    }

    /// Results recorded for `id`, oldest first.
    pub fn query_results(&self, id: QueryId) -> &[QueryResult] {
        self.queries.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate over every query result, grouped by id in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (QueryId, &QueryResult)> + '_ {
        self.queries
            .iter()
            .flat_map(|(&id, results)| results.iter().map(move |r| (id, r)))
    }

    /// Number of distinct queries with at least one result.
    pub fn query_count(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preprocessing.is_empty() && self.queries.is_empty()
    }

    /// Total query runtime across all recorded results.
    pub fn total_query_runtime_ns(&self) -> u64 {
        self.iter().map(|(_, r)| r.runtime_ns).sum()
    }

    /// Load results from JSON, gzip-compressed if the path ends in `.gz`.
    ///
    /// Loading appends in file order, so repeated ids keep their order.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let record: ResultsRecord = codec::read_json(path.as_ref())?;

        let mut results = Self::new();
        for result in record.preprocessing {
            results.add_preprocessing_result(result);
        }
        for entry in record.queries {
            results.add_query_result(entry.query_id, entry.result);
        }
        Ok(results)
    }

    /// Store results as JSON, gzip-compressed if the path ends in `.gz`.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        let record = ResultsRecord {
            preprocessing: self.preprocessing.clone(),
            queries: self
                .iter()
                .map(|(query_id, result)| QueryResultRecord {
                    query_id,
                    result: result.clone(),
                })
                .collect(),
        };
        codec::write_json(path.as_ref(), &record)
    }
}
