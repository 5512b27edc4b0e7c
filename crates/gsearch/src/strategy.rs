//! The five search algorithms, expressed as policies over one driver.
//!
//! Each policy picks an open-set ordering and says how a successor is
//! scored and when a rediscovered state's node should be relaxed.
//!
//! | Policy | Open set | Key | Relaxes |
//! |---|---|---|---|
//! | [`BreadthFirst`] | FIFO queue | none | never |
//! | [`DepthFirst`] | LIFO stack | none | never |
//! | [`BestFirst`] | min-heap | `h` | lower `h` |
//! | [`Dijkstra`] | min-heap | `g` | lower `g` |
//! | [`AStar`] | min-heap | `f = g + h` | lower `f` |

use crate::frontier::{Fifo, Frontier, Lifo, MinHeap};
use crate::node::{Node, Score};
use crate::traits::{Cost, InformedSpace, Space, WeightedSpace};

/// Search policy for spaces of type `P`.
pub trait Strategy<P: Space> {
    type Frontier: Frontier;

    /// Algorithm name, used in log output.
    const NAME: &'static str;

    /// Score of the start node.
    fn seed(space: &P, start: &P::State, goal: &P::State) -> Score;

    /// Score of `state` reached from `parent`.
    fn successor(
        space: &P,
        parent: &Node<P::State>,
        state: &P::State,
        goal: &P::State,
    ) -> Score;

    /// Ordering key of a score in the open set. Lower is expanded first.
    fn key(score: Score) -> Cost;

    /// Whether `candidate` should replace `existing` on an open node.
    fn improves(candidate: Score, existing: Score) -> bool {
        Self::key(candidate) < Self::key(existing)
    }
}

/// Breadth-first search. Unweighted; first discovery wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl<P: Space> Strategy<P> for BreadthFirst {
    type Frontier = Fifo;
    const NAME: &'static str = "breadth-first";

    fn seed(_: &P, _: &P::State, _: &P::State) -> Score {
        Score::ZERO
    }

    fn successor(_: &P, _: &Node<P::State>, _: &P::State, _: &P::State) -> Score {
        Score::ZERO
    }

    fn key(_: Score) -> Cost {
        0
    }

    fn improves(_: Score, _: Score) -> bool {
        false
    }
}

/// Depth-first search. Complete on finite spaces, not shortest.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl<P: Space> Strategy<P> for DepthFirst {
    type Frontier = Lifo;
    const NAME: &'static str = "depth-first";

    fn seed(_: &P, _: &P::State, _: &P::State) -> Score {
        Score::ZERO
    }

    fn successor(_: &P, _: &Node<P::State>, _: &P::State, _: &P::State) -> Score {
        Score::ZERO
    }

    fn key(_: Score) -> Cost {
        0
    }

    fn improves(_: Score, _: Score) -> bool {
        false
    }
}

/// Greedy best-first search on the heuristic alone. No optimality
/// guarantee; the heuristic may be inadmissible.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFirst;

impl<P: InformedSpace> Strategy<P> for BestFirst {
    type Frontier = MinHeap;
    const NAME: &'static str = "best-first";

    fn seed(space: &P, start: &P::State, goal: &P::State) -> Score {
        Score::new(0, space.estimate(start, goal))
    }

    fn successor(space: &P, _: &Node<P::State>, state: &P::State, goal: &P::State) -> Score {
        Score::new(0, space.estimate(state, goal))
    }

    fn key(score: Score) -> Cost {
        score.h
    }
}

/// Dijkstra's algorithm. Edge costs must be non-negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl<P: WeightedSpace> Strategy<P> for Dijkstra {
    type Frontier = MinHeap;
    const NAME: &'static str = "dijkstra";

    fn seed(_: &P, _: &P::State, _: &P::State) -> Score {
        Score::ZERO
    }

    fn successor(space: &P, parent: &Node<P::State>, state: &P::State, _: &P::State) -> Score {
        let cost = space.cost(&parent.state, state);
        debug_assert!(cost >= 0, "negative edge cost {cost}");
        Score::new(parent.g().saturating_add(cost), 0)
    }

    fn key(score: Score) -> Cost {
        score.g
    }
}

/// A* search.
///
/// With an estimate of zero everywhere it expands like [`Dijkstra`]; with
/// zero edge costs it expands like [`BestFirst`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl<P: WeightedSpace + InformedSpace> Strategy<P> for AStar {
    type Frontier = MinHeap;
    const NAME: &'static str = "a*";

    fn seed(space: &P, start: &P::State, goal: &P::State) -> Score {
        Score::new(0, space.estimate(start, goal))
    }

    fn successor(space: &P, parent: &Node<P::State>, state: &P::State, goal: &P::State) -> Score {
        let g = parent.g().saturating_add(space.cost(&parent.state, state));
        Score::new(g, space.estimate(state, goal))
    }

    fn key(score: Score) -> Cost {
        score.f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::successors::Successors;

    /// Integers on a line; stepping costs 2, estimate is the distance.
    struct Line;

    impl Space for Line {
        type State = i32;

        fn successors(&self, s: &i32, out: &mut Successors<i32>) {
            out.push(s - 1);
            out.push(s + 1);
        }
    }

    impl WeightedSpace for Line {
        fn cost(&self, _: &i32, _: &i32) -> Cost {
            2
        }
    }

    impl InformedSpace for Line {
        fn estimate(&self, from: &i32, goal: &i32) -> Cost {
            (goal - from).abs()
        }
    }

    fn parent(state: i32, g: Cost, h: Cost) -> Node<i32> {
        Node::new(state, None, Score::new(g, h))
    }

    #[test]
    fn uninformed_policies_never_relax() {
        let better = Score::new(0, 0);
        let worse = Score::new(9, 9);
        assert!(!<BreadthFirst as Strategy<Line>>::improves(better, worse));
        assert!(!<DepthFirst as Strategy<Line>>::improves(better, worse));
        assert_eq!(
            <BreadthFirst as Strategy<Line>>::seed(&Line, &0, &5),
            Score::ZERO
        );
    }

    #[test]
    fn best_first_scores_by_heuristic_only() {
        let s = <BestFirst as Strategy<Line>>::successor(&Line, &parent(3, 40, 2), &4, &5);
        assert_eq!(s, Score::new(0, 1));
        assert_eq!(<BestFirst as Strategy<Line>>::key(Score::new(100, 3)), 3);
    }

    #[test]
    fn dijkstra_accumulates_cost() {
        let s = <Dijkstra as Strategy<Line>>::successor(&Line, &parent(3, 6, 0), &4, &5);
        assert_eq!(s, Score::new(8, 0));
        assert!(<Dijkstra as Strategy<Line>>::improves(
            Score::new(7, 0),
            Score::new(8, 0)
        ));
        assert!(!<Dijkstra as Strategy<Line>>::improves(
            Score::new(8, 0),
            Score::new(8, 0)
        ));
    }

    #[test]
    fn astar_orders_by_f() {
        let seed = <AStar as Strategy<Line>>::seed(&Line, &0, &5);
        assert_eq!(seed, Score::new(0, 5));
        let s = <AStar as Strategy<Line>>::successor(&Line, &parent(1, 2, 4), &2, &5);
        assert_eq!(s, Score::new(4, 3));
        assert_eq!(<AStar as Strategy<Line>>::key(s), 7);
        assert!(<AStar as Strategy<Line>>::improves(
            Score::new(1, 5),
            Score::new(3, 4)
        ));
    }
}
