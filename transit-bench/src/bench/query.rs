//! Query sets.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::{self, CodecError};
use crate::domain::{Query, StopId, Time};

/// Position of a query within its [`Queries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(pub usize);

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An ordered set of queries to benchmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queries {
    queries: Vec<Query>,
}

impl Queries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a query and return its id.
    pub fn add_query(&mut self, from: StopId, to: StopId, departure: Time) -> QueryId {
        self.push(Query::new(from, to, departure))
    }

    /// Append an existing query and return its id.
    pub fn push(&mut self, query: Query) -> QueryId {
        let id = QueryId(self.queries.len());
        self.queries.push(query);
        id
    }

    pub fn get(&self, id: QueryId) -> Option<&Query> {
        self.queries.get(id.0)
    }

    /// Iterate over queries with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (QueryId, &Query)> + '_ {
        self.queries.iter().enumerate().map(|(i, q)| (QueryId(i), q))
    }

    pub fn ids(&self) -> impl Iterator<Item = QueryId> {
        (0..self.queries.len()).map(QueryId)
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Load a query set from JSON, gzip-compressed if the path ends in `.gz`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        codec::read_json(path.as_ref())
    }

    /// Store the query set as JSON, gzip-compressed if the path ends in `.gz`.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        codec::write_json(path.as_ref(), self)
    }
}

impl FromIterator<Query> for Queries {
    fn from_iter<T: IntoIterator<Item = Query>>(iter: T) -> Self {
        Self {
            queries: iter.into_iter().collect(),
        }
    }
}
