use std::fmt;

/// Errors surfaced by the search drivers.
///
/// Failing to reach the goal is not an error: `find` returns `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The configuration was rejected by [`SearchConfig::validate`].
    ///
    /// [`SearchConfig::validate`]: crate::SearchConfig::validate
    InvalidConfig { detail: String },
    /// `iterative_find` was called without a preceding `iterative_init`.
    NotInitialized,
    /// The search needed more nodes than `max_nodes` allows.
    NodeLimit { limit: usize },
    /// Growing the node arena or one of the indices failed.
    OutOfMemory,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { detail } => write!(f, "invalid search config: {detail}"),
            Self::NotInitialized => {
                write!(f, "iterative search stepped before iterative_init")
            }
            Self::NodeLimit { limit } => write!(f, "search exceeded node limit of {limit}"),
            Self::OutOfMemory => write!(f, "out of memory allocating search nodes"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<std::collections::TryReserveError> for SearchError {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::OutOfMemory
    }
}
