//! Benchmark error types.

use super::query::QueryId;
use super::results::QueryKind;

/// Errors reported by an algorithm plugin.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmError {
    /// The algorithm was queried before `init`
    #[error("algorithm has not been initialized")]
    NotInitialized,

    /// The algorithm does not answer this kind of query
    #[error("{0} queries are not supported")]
    Unsupported(QueryKind),

    /// Preprocessing failed
    #[error("initialization failed: {0}")]
    Init(String),

    /// A single query failed
    #[error("query failed: {0}")]
    Query(String),
}

/// Errors from setting up or running a benchmark.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BenchError {
    #[error("no algorithm named {0:?} is registered")]
    UnknownAlgorithm(String),

    #[error("algorithm supports neither earliest-arrival nor bi-criteria queries")]
    NoSupportedQueryKind,

    #[error("preprocessing failed: {0}")]
    Preprocessing(#[source] AlgorithmError),

    #[error("preprocessing has not been run")]
    NotPreprocessed,

    #[error("algorithm does not support {0} queries")]
    UnsupportedKind(QueryKind),

    #[error("query {0} does not exist")]
    UnknownQuery(QueryId),

    #[error("query {id} failed: {source}")]
    Query {
        id: QueryId,
        #[source]
        source: AlgorithmError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            BenchError::UnknownAlgorithm("csa".into()).to_string(),
            "no algorithm named \"csa\" is registered"
        );
        assert_eq!(
            BenchError::UnsupportedKind(QueryKind::BiCriteria).to_string(),
            "algorithm does not support bi-criteria queries"
        );
        assert_eq!(
            BenchError::Query {
                id: QueryId(4),
                source: AlgorithmError::Query("no route".into()),
            }
            .to_string(),
            "query #4 failed: query failed: no route"
        );
        assert_eq!(
            AlgorithmError::Unsupported(QueryKind::EarliestArrival).to_string(),
            "earliest-arrival queries are not supported"
        );
    }
}
