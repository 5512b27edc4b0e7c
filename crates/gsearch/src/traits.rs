use std::hash::Hash;

use crate::successors::Successors;

/// Edge costs, heuristic estimates and accumulated path scores.
pub type Cost = i32;

/// Minimal search interface: successor enumeration.
///
/// State identity is `Eq`/`Hash`: two states denote the same vertex iff they
/// compare equal, and equal states must hash equally. States are moved into
/// the engine's nodes, so large states should be passed as cheap handles
/// (`&T`, `Rc<T>`, an index).
pub trait Space {
    type State: Clone + Eq + Hash;

    /// Push every state reachable in one step from `state` into `out`.
    /// The engine clears `out` after each expansion.
    fn successors(&self, state: &Self::State, out: &mut Successors<Self::State>);
}

/// Space with weighted edges.
pub trait WeightedSpace: Space {
    /// Cost of moving from `from` to the adjacent `to`. Must be >= 0.
    fn cost(&self, from: &Self::State, to: &Self::State) -> Cost;
}

/// Space with a heuristic estimate towards a goal.
pub trait InformedSpace: Space {
    /// Estimated cost from `from` to `goal`. For A* to return optimal paths
    /// it must never overestimate the true cost (admissible).
    fn estimate(&self, from: &Self::State, goal: &Self::State) -> Cost;
}
