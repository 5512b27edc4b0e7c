//! Retrieval orderings for the open set.
//!
//! A frontier only stores node handles and their ordering keys; membership
//! by state is tracked next to it in [`OpenSet`](crate::open::OpenSet).

use std::collections::{BinaryHeap, TryReserveError, VecDeque};

use crate::node::NodeId;
use crate::traits::Cost;

/// Ordering policy of the open set.
pub trait Frontier: Default {
    /// Insert a node with ordering key `key`. Queue and stack orderings
    /// ignore the key.
    fn push(&mut self, id: NodeId, key: Cost);

    /// Remove the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    /// The node `pop` would return next.
    fn peek(&self) -> Option<NodeId>;

    /// Restore ordering after the key of an already queued node changed.
    fn reprioritize(&mut self, _id: NodeId, _key: Cost) {}

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError>;
}

/// First in, first out. Breadth-first order.
#[derive(Debug, Default)]
pub struct Fifo {
    queue: VecDeque<NodeId>,
}

impl Frontier for Fifo {
    fn push(&mut self, id: NodeId, _key: Cost) {
        self.queue.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn peek(&self) -> Option<NodeId> {
        self.queue.front().copied()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.queue.try_reserve(additional)
    }
}

/// Last in, first out. Depth-first order.
#[derive(Debug, Default)]
pub struct Lifo {
    stack: Vec<NodeId>,
}

impl Frontier for Lifo {
    fn push(&mut self, id: NodeId, _key: Cost) {
        self.stack.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn peek(&self) -> Option<NodeId> {
        self.stack.last().copied()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.stack.try_reserve(additional)
    }
}

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// key first, and among equal keys the oldest node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    key: Cost,
    id: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary min-heap on the node key.
///
/// Lowering a queued node's key pushes a fresh entry; the superseded one is
/// skipped when it reaches the top. `keys[id]` is the live key of each
/// queued node, so an entry is stale iff its key differs from it.
#[derive(Debug, Default)]
pub struct MinHeap {
    heap: BinaryHeap<Entry>,
    keys: Vec<Option<Cost>>,
    live: usize,
}

impl MinHeap {
    fn is_live(&self, entry: &Entry) -> bool {
        self.keys.get(entry.id.0).copied().flatten() == Some(entry.key)
    }

    /// Pop stale entries until the top one is live.
    fn prune(&mut self) {
        while let Some(top) = self.heap.peek() {
            if self.is_live(top) {
                break;
            }
            self.heap.pop();
        }
    }
}

impl Frontier for MinHeap {
    fn push(&mut self, id: NodeId, key: Cost) {
        if self.keys.len() <= id.0 {
            self.keys.resize(id.0 + 1, None);
        }
        if self.keys[id.0].replace(key).is_none() {
            self.live += 1;
        }
        self.heap.push(Entry { key, id });
        self.prune();
    }

    fn pop(&mut self) -> Option<NodeId> {
        let entry = self.heap.pop()?;
        self.keys[entry.id.0] = None;
        self.live -= 1;
        self.prune();
        Some(entry.id)
    }

    fn peek(&self) -> Option<NodeId> {
        self.heap.peek().map(|e| e.id)
    }

    /// Pushes `id` again under `key`. Ids that are not queued are ignored.
    fn reprioritize(&mut self, id: NodeId, key: Cost) {
        let Some(slot) = self.keys.get_mut(id.0).filter(|k| k.is_some()) else {
            return;
        };
        *slot = Some(key);
        self.heap.push(Entry { key, id });
        self.prune();
    }

    fn len(&self) -> usize {
        self.live
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.keys.clear();
        self.live = 0;
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.heap.try_reserve(additional)?;
        self.keys.try_reserve(additional)
    }
}
