//! External identifier registry.
//!
//! Feeds name their stops, stations and trips with arbitrary keys. A registry
//! maps one namespace of such keys to dense handles, handing out the next
//! integer the first time a key is seen.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::domain::{DenseId, Namespace, UnknownReference};

/// Map from external keys of one namespace to dense handles.
///
/// Handles are assigned in first-seen order starting at zero and are never
/// reused. Anonymous handles from [`IdentifierRegistry::allocate`] draw from
/// the same sequence, so keyed and anonymous entities never collide.
///
/// # Examples
///
/// ```
/// use transit_bench::domain::{Namespace, StopId};
/// use transit_bench::network::IdentifierRegistry;
///
/// let mut stops: IdentifierRegistry<&str, StopId> = IdentifierRegistry::new(Namespace::Stop);
/// assert_eq!(stops.get_or_create("north"), StopId(0));
/// assert_eq!(stops.get_or_create("south"), StopId(1));
/// assert_eq!(stops.get_or_create("north"), StopId(0));
///
/// assert!(stops.require(&"east").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct IdentifierRegistry<K, I> {
    namespace: Namespace,
    ids: HashMap<K, I>,
    next: usize,
}

impl<K, I> IdentifierRegistry<K, I>
where
    K: Eq + Hash + Debug,
    I: DenseId,
{
    /// Create an empty registry for `namespace`.
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            ids: HashMap::new(),
            next: 0,
        }
    }

    /// Returns the handle for `key`, assigning the next one if it is new.
    pub fn get_or_create(&mut self, key: K) -> I {
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }
        let id = self.allocate();
        self.ids.insert(key, id);
        id
    }

    /// Assigns the next handle without binding it to a key.
    pub fn allocate(&mut self) -> I {
        let id = I::from_index(self.next);
        self.next += 1;
        id
    }

    /// Returns the handle for `key`, failing if it was never registered.
    pub fn require<Q>(&self, key: &Q) -> Result<I, UnknownReference>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + Debug + ?Sized,
    {
        self.get(key).ok_or_else(|| UnknownReference {
            namespace: self.namespace,
            id: format!("{key:?}"),
        })
    }

    /// Returns the handle for `key`, if registered.
    pub fn get<Q>(&self, key: &Q) -> Option<I>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids.get(key).copied()
    }

    /// Returns true if `key` has a handle.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.ids.contains_key(key)
    }

    /// Returns the namespace this registry serves.
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Returns the number of registered keys.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns the number of handles handed out, keyed or anonymous.
    pub fn assigned(&self) -> usize {
        self.next
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
