use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::driver::{search, SearchPlan};
use crate::algorithm::heuristic::Heuristic;
use crate::algorithm::traits::{reconstruct_path, SearchStats};
use crate::data_structures::QueueStrategy;
use crate::graph::Graph;
use crate::Result;

/// Outcome of a goal-directed search
#[derive(Debug, Clone)]
pub struct PathResult<W> {
    /// Vertices from source to goal inclusive; empty when the goal is unreachable
    pub path: Vec<usize>,
    /// Total edge weight of `path`, if one was found
    pub cost: Option<W>,
    pub stats: SearchStats,
}

impl<W> PathResult<W> {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// A* search toward a fixed goal, ordered by `g(v) + h(v, goal)`
///
/// The search ends as soon as the goal is finalized. With an admissible
/// heuristic the returned path is a shortest path.
#[derive(Debug, Clone)]
pub struct AStar<H> {
    goal: usize,
    heuristic: H,
    strategy: QueueStrategy,
}

impl<H> AStar<H> {
    pub fn new(goal: usize, heuristic: H) -> Self {
        AStar {
            goal,
            heuristic,
            strategy: QueueStrategy::default(),
        }
    }

    /// Set the priority queue strategy
    pub fn with_strategy(mut self, strategy: QueueStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn goal(&self) -> usize {
        self.goal
    }

    pub fn name(&self) -> &'static str {
        "A*"
    }

    /// Finds a path from `source` to the goal
    pub fn find_path<W, G>(&self, graph: &G, source: usize) -> Result<PathResult<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
        H: Heuristic<W>,
    {
        let plan = SearchPlan::astar(graph, source, self.goal, &self.heuristic)?;
        let outcome = search(graph, plan, self.strategy, |_| {})?;

        if !outcome.goal_reached {
            return Ok(PathResult {
                path: Vec::new(),
                cost: None,
                stats: outcome.stats,
            });
        }

        let path = reconstruct_path(&outcome.predecessors, source, self.goal);
        let cost = (!path.is_empty()).then(|| outcome.distances[self.goal]);
        Ok(PathResult {
            path,
            cost,
            stats: outcome.stats,
        })
    }
}

/// Path from `source` to `goal`, empty when the goal is unreachable
///
/// `source == goal` yields `[source]` whatever its edges; grid callers that
/// treat blocked endpoints as unreachable should go through [`Grid::find_path`].
///
/// [`Grid::find_path`]: crate::graph::Grid::find_path
pub fn run_astar<W, G, H>(
    graph: &G,
    source: usize,
    goal: usize,
    heuristic: &H,
    strategy: QueueStrategy,
) -> Result<Vec<usize>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
    H: Heuristic<W> + ?Sized,
{
    let plan = SearchPlan::astar(graph, source, goal, heuristic)?;
    let outcome = search(graph, plan, strategy, |_| {})?;
    if outcome.goal_reached {
        Ok(reconstruct_path(&outcome.predecessors, source, goal))
    } else {
        Ok(Vec::new())
    }
}
