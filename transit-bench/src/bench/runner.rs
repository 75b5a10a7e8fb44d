//! The benchmark runner.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::config::BenchConfig;
use super::error::BenchError;
use super::plugin::Algorithm;
use super::query::{Queries, QueryId};
use super::results::{PreprocessingResult, QueryKind, QueryResult, Results};
use crate::journey::validate;
use crate::network::NetworkModel;

/// Times one algorithm against one network and query set.
pub struct Benchmark {
    network: Arc<NetworkModel>,
    queries: Queries,
    algorithm: Box<dyn Algorithm>,
    preprocessed: bool,
}

impl Benchmark {
    pub fn new(
        network: Arc<NetworkModel>,
        queries: Queries,
        algorithm: Box<dyn Algorithm>,
    ) -> Self {
        Self {
            network,
            queries,
            algorithm,
            preprocessed: false,
        }
    }

    pub fn network(&self) -> &Arc<NetworkModel> {
        &self.network
    }

    pub fn queries(&self) -> &Queries {
        &self.queries
    }

    /// Swap in another algorithm. It must be preprocessed again.
    pub fn set_algorithm(&mut self, algorithm: Box<dyn Algorithm>) {
        self.algorithm = algorithm;
        self.preprocessed = false;
    }

    /// Query kinds the current algorithm answers.
    pub fn supported_kinds(&self) -> Vec<QueryKind> {
        QueryKind::ALL
            .into_iter()
            .filter(|&kind| self.algorithm.supports(kind))
            .collect()
    }

    /// Hand the network to the algorithm and time its preprocessing.
    ///
    /// # Errors
    ///
    /// - [`BenchError::NoSupportedQueryKind`] if the algorithm answers nothing
    /// - [`BenchError::Preprocessing`] if the algorithm's `init` fails
    pub fn run_preprocessing(&mut self) -> Result<PreprocessingResult, BenchError> {
        if self.supported_kinds().is_empty() {
            return Err(BenchError::NoSupportedQueryKind);
        }

        let start = Instant::now();
        let status = self.algorithm.init(Arc::clone(&self.network));
        let runtime_ns = elapsed_ns(start);
        status.map_err(BenchError::Preprocessing)?;

        self.preprocessed = true;
        info!(runtime_ns, "preprocessing finished");
        Ok(PreprocessingResult { runtime_ns })
    }

    /// Run and time a single query.
    ///
    /// # Errors
    ///
    /// Fails if preprocessing has not run, `id` is not in the query set, the
    /// algorithm does not support `kind` or the algorithm reports an error.
    pub fn run_query(&mut self, kind: QueryKind, id: QueryId) -> Result<QueryResult, BenchError> {
        if !self.preprocessed {
            return Err(BenchError::NotPreprocessed);
        }
        let query = *self.queries.get(id).ok_or(BenchError::UnknownQuery(id))?;
        if !self.algorithm.supports(kind) {
            return Err(BenchError::UnsupportedKind(kind));
        }

        let start = Instant::now();
        let answer = self.algorithm.query(kind, &query);
        let runtime_ns = elapsed_ns(start);
        let journeys = answer.map_err(|source| BenchError::Query { id, source })?;

        debug!(query = %id, %kind, runtime_ns, journeys = journeys.len(), "query finished");
        Ok(QueryResult::new(runtime_ns, kind, journeys))
    }

    /// Preprocess, then run every query in order.
    pub fn run(&mut self, config: &BenchConfig) -> Result<Results, BenchError> {
        let mut results = Results::new();
        results.add_preprocessing_result(self.run_preprocessing()?);

        let kind = self.pick_kind(config)?;
        info!(
            %kind,
            queries = self.queries.len(),
            repetitions = config.repetitions,
            "running queries"
        );

        let ids: Vec<QueryId> = self.queries.ids().collect();
        for id in ids {
            for _ in 0..config.repetitions {
                let result = self.run_query(kind, id)?;
                if config.validate {
                    self.check_result(id, &result);
                }
                results.add_query_result(id, result);
            }
        }

        info!(
            total_runtime_ns = results.total_query_runtime_ns(),
            "benchmark finished"
        );
        Ok(results)
    }

    fn pick_kind(&self, config: &BenchConfig) -> Result<QueryKind, BenchError> {
        match config.kind {
            Some(kind) if self.algorithm.supports(kind) => Ok(kind),
            Some(kind) => Err(BenchError::UnsupportedKind(kind)),
            None => self
                .supported_kinds()
                .first()
                .copied()
                .ok_or(BenchError::NoSupportedQueryKind),
        }
    }

    fn check_result(&self, id: QueryId, result: &QueryResult) {
        let Some(query) = self.queries.get(id) else {
            return;
        };
        for (n, journey) in result.journeys.iter().enumerate() {
            match validate(&self.network, journey, query) {
                Ok(verdict) if verdict.connected() => {}
                Ok(verdict) => warn!(query = %id, journey = n, ?verdict, "invalid journey"),
                Err(e) => warn!(query = %id, journey = n, error = %e, "malformed journey"),
            }
        }
    }
}

fn elapsed_ns(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::ScriptedAlgorithm;
    use crate::domain::Query;
    use crate::journey::test_network::*;
    use crate::journey::{Journey, Leg};

    fn queries() -> Queries {
        let mut queries = Queries::new();
        queries.add_query(A, C, 100);
        queries.add_query(C, B, 50);
        queries
    }

    fn scripted() -> ScriptedAlgorithm {
        ScriptedAlgorithm::new([QueryKind::EarliestArrival])
            .with_answer(
                Query::new(A, C, 100),
                vec![Journey::new(vec![Leg::Conn(AB), Leg::Conn(BC)])],
            )
            .with_answer(Query::new(C, B, 50), vec![Journey::new(vec![Leg::Path(WALK_BC)])])
    }

    fn bench(algorithm: ScriptedAlgorithm) -> Benchmark {
        Benchmark::new(Arc::new(abc_network()), queries(), Box::new(algorithm))
    }

    #[test]
    fn run_records_every_query() {
        let mut bench = bench(scripted());
        let results = bench.run(&BenchConfig::default()).unwrap();

        assert_eq!(results.preprocessing_results().len(), 1);
        assert_eq!(results.query_count(), 2);

        let first = &results.query_results(QueryId(0))[0];
        assert_eq!(first.kind, QueryKind::EarliestArrival);
        assert_eq!(first.journeys[0].legs(), &[Leg::Conn(AB), Leg::Conn(BC)]);
    }

    #[test]
    fn repetitions_append() {
        let mut bench = bench(scripted());
        let config = BenchConfig::default().with_repetitions(3).with_validation(true);
        let results = bench.run(&config).unwrap();

        assert_eq!(results.query_results(QueryId(1)).len(), 3);
        assert_eq!(results.iter().count(), 6);
    }

    #[test]
    fn query_before_preprocessing_fails() {
        let mut bench = bench(scripted());
        assert_eq!(
            bench.run_query(QueryKind::EarliestArrival, QueryId(0)).unwrap_err(),
            BenchError::NotPreprocessed
        );

        bench.run_preprocessing().unwrap();
        assert!(bench.run_query(QueryKind::EarliestArrival, QueryId(0)).is_ok());
        assert_eq!(
            bench.run_query(QueryKind::EarliestArrival, QueryId(9)).unwrap_err(),
            BenchError::UnknownQuery(QueryId(9))
        );
        assert_eq!(
            bench.run_query(QueryKind::BiCriteria, QueryId(0)).unwrap_err(),
            BenchError::UnsupportedKind(QueryKind::BiCriteria)
        );
    }

    #[test]
    fn preprocessing_failures() {
        let mut bench = bench(ScriptedAlgorithm::new([]));
        assert_eq!(
            bench.run_preprocessing().unwrap_err(),
            BenchError::NoSupportedQueryKind
        );

        bench.set_algorithm(Box::new(scripted().failing_init("boom")));
        assert!(matches!(
            bench.run(&BenchConfig::default()),
            Err(BenchError::Preprocessing(_))
        ));
    }

    #[test]
    fn kind_selection() {
        let both = ScriptedAlgorithm::new([QueryKind::BiCriteria, QueryKind::EarliestArrival]);
        let mut runner = bench(both);
        assert_eq!(
            runner.supported_kinds(),
            vec![QueryKind::EarliestArrival, QueryKind::BiCriteria]
        );

        let results = runner.run(&BenchConfig::default()).unwrap();
        assert_eq!(
            results.query_results(QueryId(0))[0].kind,
            QueryKind::EarliestArrival
        );

        let mut runner = bench(ScriptedAlgorithm::new([QueryKind::BiCriteria]));
        let results = runner.run(&BenchConfig::default()).unwrap();
        assert_eq!(results.query_results(QueryId(0))[0].kind, QueryKind::BiCriteria);
        // unscripted queries still get a (journey-less) result
        assert!(results.query_results(QueryId(0))[0].journeys.is_empty());

        let config = BenchConfig::default().with_kind(QueryKind::EarliestArrival);
        assert_eq!(
            runner.run(&config).unwrap_err(),
            BenchError::UnsupportedKind(QueryKind::EarliestArrival)
        );
    }
}
