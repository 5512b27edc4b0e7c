//! The closed set: states whose expansion is finished.

use std::collections::{BTreeMap, HashMap, TryReserveError};
use std::hash::Hash;

use crate::node::NodeId;

/// Membership index from state to the node that expanded it.
pub trait ClosedSet<S>: Default {
    fn insert(&mut self, state: S, id: NodeId);

    fn get(&self, state: &S) -> Option<NodeId>;

    fn contains(&self, state: &S) -> bool {
        self.get(state).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    fn try_reserve(&mut self, _additional: usize) -> Result<(), TryReserveError> {
        Ok(())
    }
}

/// Hash-map backed closed set. The default.
#[derive(Debug)]
pub struct HashClosed<S> {
    map: HashMap<S, NodeId>,
}

impl<S> Default for HashClosed<S> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<S: Eq + Hash> ClosedSet<S> for HashClosed<S> {
    fn insert(&mut self, state: S, id: NodeId) {
        self.map.insert(state, id);
    }

    fn get(&self, state: &S) -> Option<NodeId> {
        self.map.get(state).copied()
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.map.try_reserve(additional)
    }
}

/// Ordered-map backed closed set, for states that are cheaper to compare
/// than to hash.
#[derive(Debug)]
pub struct OrderedClosed<S> {
    map: BTreeMap<S, NodeId>,
}

impl<S> Default for OrderedClosed<S> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<S: Ord> ClosedSet<S> for OrderedClosed<S> {
    fn insert(&mut self, state: S, id: NodeId) {
        self.map.insert(state, id);
    }

    fn get(&self, state: &S) -> Option<NodeId> {
        self.map.get(state).copied()
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}
