//! Batch validation of benchmark results.

use std::fmt;

use super::query::Queries;
use super::results::Results;
use crate::journey::{Verdict, validate};
use crate::network::NetworkModel;

/// Tally of verdicts over every journey in a [`Results`] set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Journeys examined
    pub journeys: usize,
    /// Realizable journeys
    pub succeeded: usize,
    /// Realizable journeys that revisit a stop (included in `succeeded`)
    pub non_simple: usize,
    pub disconnected: usize,
    pub non_causal: usize,
    pub unreached: usize,
    /// Journeys whose clock runs past the last representable time
    pub overflowed: usize,
    /// Journeys indexing outside the network
    pub malformed: usize,
    /// Queries for which no journey was returned at all
    pub unanswered: usize,
    /// Results filed under an id missing from the query set
    pub orphaned: usize,
}

impl ValidationReport {
    /// Validate every journey in `results` against `model`.
    ///
    /// A malformed journey is counted and skipped; it does not affect the
    /// other journeys of its query.
    pub fn from_results(model: &NetworkModel, queries: &Queries, results: &Results) -> Self {
        let mut report = Self::default();

        for (id, result) in results.iter() {
            let Some(query) = queries.get(id) else {
                report.orphaned += 1;
                continue;
            };
            for journey in &result.journeys {
                report.journeys += 1;
                match validate(model, journey, query) {
                    Ok(verdict) => report.tally(verdict),
                    Err(_) => report.malformed += 1,
                }
            }
        }

        report.unanswered = queries
            .ids()
            .filter(|&id| results.query_results(id).iter().all(|r| r.journeys.is_empty()))
            .count();

        report
    }

    fn tally(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Succeeded { simple, .. } => {
                self.succeeded += 1;
                if !simple {
                    self.non_simple += 1;
                }
            }
            Verdict::Disconnected { .. } => self.disconnected += 1,
            Verdict::NonCausal { .. } => self.non_causal += 1,
            Verdict::Unreached { .. } => self.unreached += 1,
            Verdict::Overflow { .. } => self.overflowed += 1,
        }
    }

    /// Journeys that are not realizable or cannot be resolved.
    pub fn failed(&self) -> usize {
        self.disconnected + self.non_causal + self.unreached + self.overflowed + self.malformed
    }

    /// Returns true if every journey is realizable and every result belongs
    /// to a known query.
    pub fn is_clean(&self) -> bool {
        self.failed() == 0 && self.orphaned == 0
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} journeys: {} ok ({} non-simple), {} disconnected, {} non-causal, \
             {} unreached, {} malformed; {} queries unanswered",
            self.journeys,
            self.succeeded,
            self.non_simple,
            self.disconnected,
            self.non_causal,
            self.unreached,
            self.malformed,
            self.unanswered,
        )?;
        if self.overflowed > 0 {
            write!(f, "; {} overflowed", self.overflowed)?;
        }
        if self.orphaned > 0 {
            write!(f, "; {} orphaned results", self.orphaned)?;
        }
        Ok(())
    }
}
