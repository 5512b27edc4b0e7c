//! A space assembled from closures.

use std::fmt;
use std::hash::Hash;

use crate::successors::Successors;
use crate::traits::{Cost, InformedSpace, Space, WeightedSpace};

type SuccessorsFn<'a, S> = Box<dyn Fn(&S, &mut Successors<S>) + 'a>;
type ScoreFn<'a, S> = Box<dyn Fn(&S, &S) -> Cost + 'a>;

/// Callback table implementing every space trait.
///
/// Each callback can be replaced at any time between steps. Without an
/// explicit cost function every edge costs 1; without a heuristic every
/// estimate is 0.
pub struct FnSpace<'a, S> {
    successors: SuccessorsFn<'a, S>,
    cost: ScoreFn<'a, S>,
    heuristic: ScoreFn<'a, S>,
}

impl<'a, S: 'a> FnSpace<'a, S> {
    pub fn new(successors: impl Fn(&S, &mut Successors<S>) + 'a) -> Self {
        Self {
            successors: Box::new(successors),
            cost: Box::new(|_: &S, _: &S| 1),
            heuristic: Box::new(|_: &S, _: &S| 0),
        }
    }

    /// Builder form of [`set_cost_fn`](Self::set_cost_fn).
    pub fn with_cost(mut self, cost: impl Fn(&S, &S) -> Cost + 'a) -> Self {
        self.set_cost_fn(cost);
        self
    }

    /// Builder form of [`set_heuristic_fn`](Self::set_heuristic_fn).
    pub fn with_heuristic(mut self, heuristic: impl Fn(&S, &S) -> Cost + 'a) -> Self {
        self.set_heuristic_fn(heuristic);
        self
    }

    pub fn set_successors_fn(&mut self, successors: impl Fn(&S, &mut Successors<S>) + 'a) {
        self.successors = Box::new(successors);
    }

    pub fn set_cost_fn(&mut self, cost: impl Fn(&S, &S) -> Cost + 'a) {
        self.cost = Box::new(cost);
    }

    pub fn set_heuristic_fn(&mut self, heuristic: impl Fn(&S, &S) -> Cost + 'a) {
        self.heuristic = Box::new(heuristic);
    }
}

impl<S> fmt::Debug for FnSpace<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSpace").finish_non_exhaustive()
    }
}

impl<S: Clone + Eq + Hash> Space for FnSpace<'_, S> {
    type State = S;

    fn successors(&self, state: &S, out: &mut Successors<S>) {
        (self.successors)(state, out);
    }
}

impl<S: Clone + Eq + Hash> WeightedSpace for FnSpace<'_, S> {
    fn cost(&self, from: &S, to: &S) -> Cost {
        (self.cost)(from, to)
    }
}

impl<S: Clone + Eq + Hash> InformedSpace for FnSpace<'_, S> {
    fn estimate(&self, from: &S, goal: &S) -> Cost {
        (self.heuristic)(from, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(s: &u8, out: &mut Successors<u8>) {
        if *s < 10 {
            out.push(s + 1);
        }
    }

    #[test]
    fn defaults_are_unit_cost_and_zero_estimate() {
        let space = FnSpace::new(chain);
        assert_eq!(space.cost(&1, &2), 1);
        assert_eq!(space.estimate(&1, &9), 0);

        let mut out = Successors::new();
        space.successors(&3, &mut out);
        assert_eq!(out.as_slice(), &[4]);
    }

    #[test]
    fn callbacks_can_be_swapped() {
        let mut space = FnSpace::new(chain)
            .with_cost(|_, _| 5)
            .with_heuristic(|a: &u8, b: &u8| b.abs_diff(*a) as Cost);
        assert_eq!(space.cost(&1, &2), 5);
        assert_eq!(space.estimate(&2, &9), 7);

        space.set_cost_fn(|_, _| 2);
        space.set_heuristic_fn(|_, _| 0);
        space.set_successors_fn(|_, out| out.push(0));
        assert_eq!(space.cost(&1, &2), 2);
        assert_eq!(space.estimate(&2, &9), 0);

        let mut out = Successors::new();
        space.successors(&7, &mut out);
        assert_eq!(out.as_slice(), &[0]);
    }

    #[test]
    fn closures_may_borrow_caller_data() {
        let weights = vec![3, 1, 4, 1, 5];
        let space = FnSpace::new(|s: &usize, out: &mut Successors<usize>| out.push(s + 1))
            .with_cost(|_, to: &usize| weights[*to]);
        assert_eq!(space.cost(&0, &2), 4);
    }
}
