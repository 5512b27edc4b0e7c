/// Counters for the most recent search. Reset by `cleanup`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped from the open set.
    pub expansions: usize,
    /// Nodes allocated, including the start node.
    pub nodes_allocated: usize,
    /// Open nodes whose score and parent were replaced by a better path.
    pub relaxations: usize,
    /// Successors dropped because their state was already closed.
    pub skipped_closed: usize,
    /// Largest size the open set reached.
    pub peak_open: usize,
}
