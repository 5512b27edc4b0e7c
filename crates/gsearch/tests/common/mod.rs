#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use gsearch::heuristics::manhattan;
use gsearch::{Cost, InformedSpace, Space, Successors, WeightedSpace};

pub type Cell = (i32, i32);

/// Rectangular 4-connected grid. Entering a cell costs its weight.
#[derive(Clone)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    walls: HashSet<Cell>,
    weights: Vec<Cost>,
}

impl Grid {
    pub fn open(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            walls: HashSet::new(),
            weights: vec![1; (width * height) as usize],
        }
    }

    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Cell>) -> Self {
        self.walls.extend(walls);
        self
    }

    pub fn set_weight(&mut self, c: Cell, w: Cost) {
        let i = self.idx(c);
        self.weights[i] = w;
    }

    pub fn weight(&self, c: Cell) -> Cost {
        self.weights[self.idx(c)]
    }

    pub fn passable(&self, c: Cell) -> bool {
        (0..self.width).contains(&c.0)
            && (0..self.height).contains(&c.1)
            && !self.walls.contains(&c)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(|&c| self.passable(c))
    }

    fn idx(&self, c: Cell) -> usize {
        (c.1 * self.width + c.0) as usize
    }

    pub fn neighbors(&self, c: Cell) -> Vec<Cell> {
        [(0, -1), (1, 0), (0, 1), (-1, 0)]
            .into_iter()
            .map(|(dx, dy)| (c.0 + dx, c.1 + dy))
            .filter(|&n| self.passable(n))
            .collect()
    }

    /// Exact cheapest cost from `from` to every cell, by relaxing every
    /// edge until nothing changes.
    pub fn brute_force_costs(&self, from: Cell) -> Vec<Option<Cost>> {
        let mut dist: Vec<Option<Cost>> = vec![None; (self.width * self.height) as usize];
        dist[self.idx(from)] = Some(0);
        loop {
            let mut changed = false;
            for c in self.cells() {
                let Some(dc) = dist[self.idx(c)] else {
                    continue;
                };
                for n in self.neighbors(c) {
                    let cand = dc + self.weight(n);
                    let slot = &mut dist[self.idx(n)];
                    if slot.is_none_or(|d| cand < d) {
                        *slot = Some(cand);
                        changed = true;
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    /// Minimum number of steps from `from` to `to`, by plain queue search.
    pub fn brute_force_steps(&self, from: Cell, to: Cell) -> Option<usize> {
        let mut seen = HashSet::from([from]);
        let mut queue = VecDeque::from([(from, 0)]);
        while let Some((c, d)) = queue.pop_front() {
            if c == to {
                return Some(d);
            }
            for n in self.neighbors(c) {
                if seen.insert(n) {
                    queue.push_back((n, d + 1));
                }
            }
        }
        None
    }

    pub fn cost_of(&self, path: &[Cell]) -> Cost {
        path.iter().skip(1).map(|&c| self.weight(c)).sum()
    }
}

impl Space for Grid {
    type State = Cell;

    fn successors(&self, c: &Cell, out: &mut Successors<Cell>) {
        for n in self.neighbors(*c) {
            out.push(n);
        }
    }
}

impl WeightedSpace for Grid {
    fn cost(&self, _from: &Cell, to: &Cell) -> Cost {
        self.weight(*to)
    }
}

impl InformedSpace for Grid {
    fn estimate(&self, from: &Cell, goal: &Cell) -> Cost {
        manhattan(*from, *goal)
    }
}

/// Path from start to goal, in walking order.
pub fn forward_path<'a>(path: impl Iterator<Item = &'a Cell>) -> Vec<Cell> {
    let mut p: Vec<Cell> = path.copied().collect();
    p.reverse();
    p
}

/// Every consecutive pair in `path` must be grid neighbours.
pub fn assert_connected(grid: &Grid, path: &[Cell]) {
    for w in path.windows(2) {
        assert!(
            grid.neighbors(w[0]).contains(&w[1]),
            "{:?} -> {:?} is not a move",
            w[0],
            w[1]
        );
    }
}
