//! Generic graph search over caller-defined state spaces.
//!
//! The engine never knows what a state is. A [`Space`] enumerates the
//! successors of a state; [`WeightedSpace`] adds edge costs and
//! [`InformedSpace`] a heuristic estimate towards the goal. State identity
//! is the state type's `Eq` and `Hash`.
//!
//! Five algorithms share one driver, [`Search`]:
//!
//! | Alias | Requires | Open set |
//! |---|---|---|
//! | [`BreadthFirstSearch`] | [`Space`] | FIFO queue |
//! | [`DepthFirstSearch`] | [`Space`] | LIFO stack |
//! | [`BestFirstSearch`] | [`InformedSpace`] | heap on `h` |
//! | [`DijkstraSearch`] | [`WeightedSpace`] | heap on `g` |
//! | [`AStarSearch`] | [`WeightedSpace`] + [`InformedSpace`] | heap on `g + h` |
//!
//! A search runs to completion with [`Search::find`], or one expansion at a
//! time with [`Search::iterative_init`] and [`Search::iterative_find`] so a
//! caller can spread it over frames or time slices. The found path is walked
//! backwards from the goal with [`Search::path`] or
//! [`Search::first_node`] / [`Search::next_node`].
//!
//! ```
//! use gsearch::{AStarSearch, FnSpace, Successors, heuristics::manhattan};
//!
//! let space = FnSpace::new(|&(x, y): &(i32, i32), out: &mut Successors<(i32, i32)>| {
//!     for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
//!         let (nx, ny) = (x + dx, y + dy);
//!         if (0..3).contains(&nx) && (0..3).contains(&ny) {
//!             out.push((nx, ny));
//!         }
//!     }
//! })
//! .with_heuristic(|&a, &b| manhattan(a, b));
//!
//! let mut search = AStarSearch::new(space);
//! assert!(search.find((0, 0), (2, 2)).unwrap());
//! let goal = search.first_node().unwrap();
//! assert_eq!(search.node(goal).g(), 4);
//! assert_eq!(search.path().count(), 5);
//! ```

mod closed;
mod config;
mod error;
mod fn_space;
mod frontier;
mod node;
mod open;
mod search;
mod stats;
mod strategy;
mod successors;
mod traits;

pub mod heuristics;

pub use closed::{ClosedSet, HashClosed, OrderedClosed};
pub use config::SearchConfig;
pub use error::SearchError;
pub use fn_space::FnSpace;
pub use frontier::{Fifo, Frontier, Lifo, MinHeap};
pub use node::{Node, NodeId, Score};
pub use open::OpenSet;
pub use search::{
    AStarSearch, BestFirstSearch, BreadthFirstSearch, DepthFirstSearch, DijkstraSearch, Path,
    Search,
};
pub use stats::SearchStats;
pub use strategy::{AStar, BestFirst, BreadthFirst, DepthFirst, Dijkstra, Strategy};
pub use successors::{DEFAULT_CAPACITY, Successors};
pub use traits::{Cost, InformedSpace, Space, WeightedSpace};
