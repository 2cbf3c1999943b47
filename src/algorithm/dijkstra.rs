use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::driver::{search, Relaxation, SearchPlan};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::QueueStrategy;
use crate::graph::Graph;
use crate::Result;

/// Dijkstra's algorithm over a selectable priority queue
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    /// Queue backing the frontier
    strategy: QueueStrategy,
    /// Stop once this vertex is finalized
    target: Option<usize>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance backed by a Fibonacci heap
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Set the priority queue strategy
    pub fn with_strategy(mut self, strategy: QueueStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Stop as soon as `target` is finalized; other distances may then be
    /// upper bounds or infinite
    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }

    pub fn strategy(&self) -> QueueStrategy {
        self.strategy
    }

    /// Runs the search and reports every successful relaxation to `observer`
    pub fn compute_observed<W, G, F>(&self, graph: &G, source: usize, observer: F) -> Result<ShortestPathResult<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
        F: FnMut(Relaxation<W>),
    {
        let mut plan = SearchPlan::dijkstra(graph, source)?;
        if let Some(target) = self.target {
            plan = plan.with_target(target)?;
        }
        let outcome = search(graph, plan, self.strategy, observer)?;
        Ok(outcome.into())
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.compute_observed(graph, source, |_| {})
    }
}

/// Distances from `source` to every vertex, `W::infinity()` where unreachable
pub fn run_dijkstra<W, G>(graph: &G, source: usize, strategy: QueueStrategy) -> Result<Vec<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let result = Dijkstra::new().with_strategy(strategy).compute_shortest_paths(graph, source)?;
    Ok(result.distances)
}
