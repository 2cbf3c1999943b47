//! Runs every queue strategy against one shared graph in parallel
//!
//! Each run owns a private queue and private distance tables; only the
//! read-only graph is shared between rayon workers.

use std::fmt::Debug;
use std::time::{Duration, Instant};
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::algorithm::astar::{AStar, PathResult};
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::heuristic::Heuristic;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::QueueStrategy;
use crate::graph::Graph;
use crate::Result;

/// One strategy's result from a comparison
#[derive(Debug, Clone)]
pub struct StrategyRun<R> {
    pub strategy: QueueStrategy,
    pub result: R,
    pub elapsed: Duration,
}

/// Dijkstra from `source` with every strategy, in `QueueStrategy::ALL` order
pub fn compare_strategies<W, G>(graph: &G, source: usize) -> Result<Vec<StrategyRun<ShortestPathResult<W>>>>
where
    W: Float + Zero + Debug + Copy + Ord + Send + Sync,
    G: Graph<W> + Sync,
{
    QueueStrategy::ALL[..]
        .par_iter()
        .map(|&strategy| {
            let start = Instant::now();
            let result = Dijkstra::new()
                .with_strategy(strategy)
                .compute_shortest_paths(graph, source)?;
            Ok(StrategyRun {
                strategy,
                result,
                elapsed: start.elapsed(),
            })
        })
        .collect()
}

/// A* from `source` to `goal` with every strategy, in `QueueStrategy::ALL` order
pub fn compare_astar_strategies<W, G, H>(
    graph: &G,
    source: usize,
    goal: usize,
    heuristic: &H,
) -> Result<Vec<StrategyRun<PathResult<W>>>>
where
    W: Float + Zero + Debug + Copy + Ord + Send + Sync,
    G: Graph<W> + Sync,
    H: Heuristic<W> + Clone + Send + Sync,
{
    QueueStrategy::ALL[..]
        .par_iter()
        .map(|&strategy| {
            let start = Instant::now();
            let result = AStar::new(goal, heuristic.clone())
                .with_strategy(strategy)
                .find_path(graph, source)?;
            Ok(StrategyRun {
                strategy,
                result,
                elapsed: start.elapsed(),
            })
        })
        .collect()
}

/// True when every run produced the same distance table
pub fn distances_agree<W>(runs: &[StrategyRun<ShortestPathResult<W>>]) -> bool
where
    W: Float + Zero + Debug + Copy,
{
    runs.windows(2)
        .all(|pair| pair[0].result.distances == pair[1].result.distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generators::generate_random_sparse;

    #[test]
    fn all_strategies_agree_on_random_graph() {
        let graph = generate_random_sparse(200, 600, 99).unwrap();
        let runs = compare_strategies(&graph, 0).unwrap();

        assert_eq!(runs.len(), 3);
        let strategies: Vec<_> = runs.iter().map(|r| r.strategy).collect();
        assert_eq!(strategies, QueueStrategy::ALL.to_vec());
        assert!(distances_agree(&runs));
    }
}
