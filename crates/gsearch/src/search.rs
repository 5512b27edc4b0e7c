//! The search driver shared by every algorithm.

use std::marker::PhantomData;

use crate::closed::{ClosedSet, HashClosed};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::node::{Node, NodeId, Score};
use crate::open::OpenSet;
use crate::stats::SearchStats;
use crate::strategy::{AStar, BestFirst, BreadthFirst, DepthFirst, Dijkstra, Strategy};
use crate::successors::Successors;
use crate::traits::Space;

pub type BreadthFirstSearch<P> = Search<P, BreadthFirst>;
pub type DepthFirstSearch<P> = Search<P, DepthFirst>;
pub type BestFirstSearch<P> = Search<P, BestFirst>;
pub type DijkstraSearch<P> = Search<P, Dijkstra>;
pub type AStarSearch<P> = Search<P, AStar>;

/// A reusable search over the space `P` with algorithm `K`.
///
/// The driver owns every node it allocates plus the open and closed sets;
/// it owns no states beyond the copies wrapped in its nodes. One driver runs
/// any number of searches sequentially: each `find` or `iterative_init`
/// starts by cleaning up the previous one.
///
/// `C` selects the closed-set backend ([`HashClosed`] by default).
pub struct Search<P, K, C = HashClosed<<P as Space>::State>>
where
    P: Space,
    K: Strategy<P>,
{
    space: P,
    config: SearchConfig,
    nodes: Vec<Node<P::State>>,
    open: OpenSet<P::State, K::Frontier>,
    closed: C,
    successors: Successors<P::State>,
    goal: Option<P::State>,
    path: Option<NodeId>,
    found: bool,
    failure: Option<SearchError>,
    stats: SearchStats,
    _strategy: PhantomData<K>,
}

impl<P, K> Search<P, K>
where
    P: Space,
    K: Strategy<P>,
{
    /// Create a driver with the default configuration.
    pub fn new(space: P) -> Self {
        Self::build(space, SearchConfig::default())
    }
}

impl<P, K, C> Search<P, K, C>
where
    P: Space,
    K: Strategy<P>,
    C: ClosedSet<P::State>,
{
    /// Create a driver with an explicit configuration.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidConfig`] if `config` fails validation.
    pub fn with_config(space: P, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self::build(space, config))
    }

    fn build(space: P, config: SearchConfig) -> Self {
        Self {
            space,
            successors: Successors::with_capacity(config.successor_capacity),
            config,
            nodes: Vec::new(),
            open: OpenSet::new(),
            closed: C::default(),
            goal: None,
            path: None,
            found: false,
            failure: None,
            stats: SearchStats::default(),
            _strategy: PhantomData,
        }
    }

    pub fn space(&self) -> &P {
        &self.space
    }

    /// Mutable access to the space, e.g. to swap one of its callbacks.
    pub fn space_mut(&mut self) -> &mut P {
        &mut self.space
    }

    /// Replace the space, returning the previous one.
    pub fn set_space(&mut self, space: P) -> P {
        std::mem::replace(&mut self.space, space)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for a path from `start` to `goal`.
    ///
    /// Returns `Ok(true)` if the goal was reached; the path is then available
    /// through [`first_node`](Self::first_node) or [`path`](Self::path).
    /// `Ok(false)` means the open set was exhausted without reaching it.
    ///
    /// # Errors
    ///
    /// [`SearchError::NodeLimit`] or [`SearchError::OutOfMemory`] if the
    /// search could not allocate a node.
    pub fn find(&mut self, start: P::State, goal: P::State) -> Result<bool, SearchError> {
        self.iterative_init(start, goal)?;
        while !self.iterative_is_done() {
            self.iterative_find()?;
        }
        Ok(self.found)
    }

    /// Prepare a search that is then driven one expansion at a time with
    /// [`iterative_find`](Self::iterative_find).
    ///
    /// # Errors
    ///
    /// [`SearchError::OutOfMemory`] if preallocation fails.
    pub fn iterative_init(&mut self, start: P::State, goal: P::State) -> Result<(), SearchError> {
        self.cleanup();

        let reserve = self.config.node_capacity;
        self.nodes.try_reserve(reserve)?;
        self.open.try_reserve(reserve)?;
        self.closed.try_reserve(reserve)?;

        let score = K::seed(&self.space, &start, &goal);
        let id = self.alloc(start.clone(), None, score)?;
        self.open.insert(start, id, K::key(score));
        self.stats.peak_open = 1;
        self.goal = Some(goal);

        log::debug!("{}: search started", K::NAME);
        Ok(())
    }

    /// Perform one pop-and-expand cycle. Returns whether the goal has been
    /// found. Once the search is done this is a no-op.
    ///
    /// # Errors
    ///
    /// [`SearchError::NotInitialized`] if no search was initialised since
    /// the last cleanup; otherwise as for [`find`](Self::find). A failed
    /// search stays failed: every later step returns the same error until
    /// the next `iterative_init` or `cleanup`.
    pub fn iterative_find(&mut self) -> Result<bool, SearchError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let Some(goal) = self.goal.take() else {
            return Err(SearchError::NotInitialized);
        };
        if self.iterative_is_done() {
            self.goal = Some(goal);
            return Ok(self.found);
        }

        let result = self.step(&goal);
        self.goal = Some(goal);
        if let Err(err) = result {
            // The expansion was cut short, so the open set no longer
            // describes the reachable frontier.
            self.open.clear();
            self.failure = Some(err.clone());
            return Err(err);
        }

        if self.iterative_is_done() {
            let outcome = if self.found {
                "goal reached"
            } else {
                "open set exhausted"
            };
            log::debug!(
                "{}: {} after {} expansions ({} nodes, {} relaxations)",
                K::NAME,
                outcome,
                self.stats.expansions,
                self.stats.nodes_allocated,
                self.stats.relaxations,
            );
        }
        Ok(self.found)
    }

    /// Whether the current search has finished: the goal was reached, the
    /// open set was exhausted, or a step failed.
    pub fn iterative_is_done(&self) -> bool {
        self.found || self.open.is_empty()
    }

    /// Free every node and empty the open and closed sets.
    ///
    /// Invalidates all [`NodeId`]s from the previous search. Safe to call any
    /// number of times.
    pub fn cleanup(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.closed.clear();
        self.successors.clear();
        self.goal = None;
        self.path = None;
        self.found = false;
        self.failure = None;
        self.stats = SearchStats::default();
    }

    fn step(&mut self, goal: &P::State) -> Result<(), SearchError> {
        let Some(current) = self.open.pop(&self.nodes) else {
            return Ok(());
        };
        self.stats.expansions += 1;

        // Closed before its successors are visited, so a state that lists
        // itself as a successor is skipped.
        let state = self.nodes[current.0].state.clone();
        self.closed.insert(state, current);

        if self.nodes[current.0].state == *goal {
            log::trace!("{}: goal popped as node {}", K::NAME, current.0);
            self.path = Some(current);
            self.found = true;
            return Ok(());
        }

        let key = K::key(self.nodes[current.0].score);
        log::trace!("{}: expanding node {} (key {key})", K::NAME, current.0);

        let mut buf = std::mem::replace(&mut self.successors, Successors::with_capacity(0));
        self.space.successors(&self.nodes[current.0].state, &mut buf);
        let result = buf.drain().try_for_each(|s| self.visit(current, s, goal));
        self.successors = buf;
        result
    }

    /// Handle one successor of `current`: skip it if closed, relax it if
    /// open, queue a new node otherwise.
    fn visit(
        &mut self,
        current: NodeId,
        state: P::State,
        goal: &P::State,
    ) -> Result<(), SearchError> {
        if self.closed.contains(&state) {
            self.stats.skipped_closed += 1;
            return Ok(());
        }

        let score = K::successor(&self.space, &self.nodes[current.0], &state, goal);

        if let Some(existing) = self.open.get(&state) {
            let node = &mut self.nodes[existing.0];
            if K::improves(score, node.score) {
                log::trace!(
                    "{}: relaxing node {} (key {} -> {})",
                    K::NAME,
                    existing.0,
                    K::key(node.score),
                    K::key(score)
                );
                node.score = score;
                node.parent = Some(current);
                self.open.reprioritize(existing, K::key(score));
                self.stats.relaxations += 1;
            }
            return Ok(());
        }

        let id = self.alloc(state.clone(), Some(current), score)?;
        self.open.insert(state, id, K::key(score));
        self.stats.peak_open = self.stats.peak_open.max(self.open.len());
        Ok(())
    }

    fn alloc(
        &mut self,
        state: P::State,
        parent: Option<NodeId>,
        score: Score,
    ) -> Result<NodeId, SearchError> {
        if let Some(limit) = self.config.max_nodes {
            if self.nodes.len() >= limit {
                log::warn!("{}: node limit of {limit} reached, aborting", K::NAME);
                return Err(SearchError::NodeLimit { limit });
            }
        }
        self.nodes.try_reserve(1)?;
        self.open.try_reserve(1)?;
        self.closed.try_reserve(1)?;

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(state, parent, score));
        self.stats.nodes_allocated += 1;
        Ok(id)
    }

    /// Whether the last search reached its goal.
    pub fn found(&self) -> bool {
        self.found
    }

    /// The goal node of the last successful search, or `None`.
    pub fn first_node(&self) -> Option<NodeId> {
        self.path
    }

    /// The parent of `id`: one step closer to the start. `None` at the start
    /// node.
    ///
    /// # Panics
    ///
    /// If `id` does not belong to the current search.
    pub fn next_node(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The state wrapped by `id`.
    ///
    /// # Panics
    ///
    /// If `id` does not belong to the current search.
    pub fn state(&self, id: NodeId) -> &P::State {
        &self.nodes[id.0].state
    }

    /// The node behind `id`, including its scores.
    ///
    /// # Panics
    ///
    /// If `id` does not belong to the current search.
    pub fn node(&self, id: NodeId) -> &Node<P::State> {
        &self.nodes[id.0]
    }

    /// Walk the found path from the goal back to the start. Empty if the last
    /// search did not succeed.
    pub fn path(&self) -> Path<'_, P::State> {
        Path {
            nodes: &self.nodes,
            next: self.path,
        }
    }

    /// Nodes allocated by the current search.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    pub fn is_open(&self, state: &P::State) -> bool {
        self.open.contains(state)
    }

    pub fn is_closed(&self, state: &P::State) -> bool {
        self.closed.contains(state)
    }

    /// The node the next step will expand.
    pub fn peek_open(&self) -> Option<NodeId> {
        self.open.peek()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Iterator over a found path's states, goal first.
#[derive(Debug, Clone)]
pub struct Path<'a, S> {
    nodes: &'a [Node<S>],
    next: Option<NodeId>,
}

impl<'a, S> Iterator for Path<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<&'a S> {
        let nodes = self.nodes;
        let node = &nodes[self.next?.0];
        self.next = node.parent;
        Some(&node.state)
    }
}

impl<S> std::iter::FusedIterator for Path<'_, S> {}
