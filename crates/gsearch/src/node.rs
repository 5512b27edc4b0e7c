//! Search nodes and their arena handles.

use crate::traits::Cost;

/// Handle to a node in a search's arena.
///
/// Only meaningful for the search that produced it, and only until that
/// search is cleaned up or restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in allocation order (the start node is 0).
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Bookkeeping scores carried by a node.
///
/// Breadth- and depth-first leave both at zero, best-first uses `h`,
/// Dijkstra uses `g` as the accumulated cost and A* uses both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    /// Accumulated path cost from the start state.
    pub g: Cost,
    /// Heuristic estimate of the remaining cost to the goal.
    pub h: Cost,
}

impl Score {
    pub const ZERO: Score = Score { g: 0, h: 0 };

    #[inline]
    pub const fn new(g: Cost, h: Cost) -> Self {
        Self { g, h }
    }

    /// `g + h`, saturating at the bounds of [`Cost`].
    #[inline]
    pub fn f(&self) -> Cost {
        self.g.saturating_add(self.h)
    }
}

/// An engine-owned node wrapping one state.
///
/// Parent links always point at nodes allocated earlier in the same search,
/// so they form a tree rooted at the start node.
#[derive(Debug, Clone)]
pub struct Node<S> {
    pub(crate) state: S,
    pub(crate) parent: Option<NodeId>,
    pub(crate) score: Score,
}

impl<S> Node<S> {
    pub(crate) fn new(state: S, parent: Option<NodeId>, score: Score) -> Self {
        Self {
            state,
            parent,
            score,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node this one was reached from; `None` for the start node.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    #[inline]
    pub fn g(&self) -> Cost {
        self.score.g
    }

    #[inline]
    pub fn h(&self) -> Cost {
        self.score.h
    }

    #[inline]
    pub fn f(&self) -> Cost {
        self.score.f()
    }
}
