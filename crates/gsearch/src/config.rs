//! Search configuration.

use crate::error::SearchError;
use crate::successors::DEFAULT_CAPACITY;

/// Sizing and resource limits for a search driver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Nodes to preallocate room for in the arena and indices.
    pub node_capacity: usize,
    /// Initial capacity of the successor buffer.
    pub successor_capacity: usize,
    /// Hard cap on nodes allocated by one search. `None` is unbounded.
    pub max_nodes: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_capacity: 128,
            successor_capacity: DEFAULT_CAPACITY,
            max_nodes: None,
        }
    }
}

impl SearchConfig {
    /// Check the configuration for values no search could run with.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidConfig`] if `max_nodes` is zero (the start node
    /// alone would exceed it) or `successor_capacity` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_nodes == Some(0) {
            return Err(SearchError::InvalidConfig {
                detail: "max_nodes must allow at least the start node".into(),
            });
        }
        if self.successor_capacity == 0 {
            return Err(SearchError::InvalidConfig {
                detail: "successor_capacity must be non-zero".into(),
            });
        }
        Ok(())
    }
}
