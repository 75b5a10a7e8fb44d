//! Benchmark harness.
//!
//! Runs a routing algorithm over a query set, records how long each step
//! took and what journeys came back, then checks those journeys against the
//! network.

mod config;
mod error;
mod mock;
mod plugin;
mod query;
mod report;
mod results;
mod runner;

pub use config::BenchConfig;
pub use error::{AlgorithmError, BenchError};
pub use mock::ScriptedAlgorithm;
pub use plugin::{Algorithm, AlgorithmRegistry};
pub use query::{Queries, QueryId};
pub use report::ValidationReport;
pub use results::{PreprocessingResult, QueryKind, QueryResult, Results};
pub use runner::Benchmark;
