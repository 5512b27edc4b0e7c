//! The open set: nodes discovered but not yet expanded.

use std::collections::{HashMap, TryReserveError};
use std::hash::Hash;

use crate::frontier::Frontier;
use crate::node::{Node, NodeId};
use crate::traits::Cost;

/// Frontier plus a state index.
///
/// The frontier decides retrieval order; the index answers "is this state
/// already open, and as which node" in O(1). Both always hold the same nodes.
#[derive(Debug)]
pub struct OpenSet<S, F> {
    frontier: F,
    index: HashMap<S, NodeId>,
}

impl<S: Eq + Hash, F: Frontier> Default for OpenSet<S, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash, F: Frontier> OpenSet<S, F> {
    pub fn new() -> Self {
        Self {
            frontier: F::default(),
            index: HashMap::new(),
        }
    }

    /// Queue node `id`, wrapping `state`, with ordering key `key`.
    pub fn insert(&mut self, state: S, id: NodeId, key: Cost) {
        self.frontier.push(id, key);
        let previous = self.index.insert(state, id);
        debug_assert!(previous.is_none(), "state queued twice");
        self.debug_check();
    }

    /// Remove the next node to expand. `nodes` is the arena the ids refer
    /// to, used to drop the node's state from the index.
    pub fn pop(&mut self, nodes: &[Node<S>]) -> Option<NodeId> {
        let id = self.frontier.pop()?;
        self.index.remove(&nodes[id.0].state);
        self.debug_check();
        Some(id)
    }

    /// The open node wrapping `state`.
    pub fn get(&self, state: &S) -> Option<NodeId> {
        self.index.get(state).copied()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// Restore ordering after node `id`'s key was lowered to `key`.
    pub fn reprioritize(&mut self, id: NodeId, key: Cost) {
        self.frontier.reprioritize(id, key);
    }

    /// The node the next `pop` returns.
    pub fn peek(&self) -> Option<NodeId> {
        self.frontier.peek()
    }

    pub fn len(&self) -> usize {
        self.frontier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn clear(&mut self) {
        self.debug_check();
        self.frontier.clear();
        self.index.clear();
    }

    /// Reserve room for `additional` more nodes in both structures.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.frontier.try_reserve(additional)?;
        self.index.try_reserve(additional)
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert_eq!(
            self.frontier.len(),
            self.index.len(),
            "open frontier and state index out of sync"
        );
    }
}
