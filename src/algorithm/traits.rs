use std::fmt::Debug;
use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::Result;

/// Work counters for one search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Entries taken off the queue
    pub extractions: usize,
    /// Extracted entries skipped because their vertex was already finalized
    pub stale_skips: usize,
    /// Successful edge relaxations
    pub relaxations: usize,
    pub inserts: usize,
    pub decrease_keys: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex; `W::infinity()` when unreachable
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,

    /// Queue and relaxation counters for the run
    pub stats: SearchStats,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Finite distance to a vertex, or `None` if it is unreachable or unknown
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if !result.is_reachable(target) {
            return None;
        }
        let path = reconstruct_path(&result.predecessors, result.source, target);
        if path.is_empty() {
            None
        } else {
            Some(path)
        }
    }
}

/// Walks the predecessor table back from `target`
///
/// Returns an empty path when the chain does not lead back to `source`.
pub fn reconstruct_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    if target >= predecessors.len() || source >= predecessors.len() {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match predecessors[current] {
            Some(pred) => {
                current = pred;
                path.push(current);
            }
            None => return Vec::new(),
        }

        // A simple path never visits more vertices than the graph has
        if path.len() > predecessors.len() {
            log::warn!("Predecessor chain from {} does not terminate, likely a cycle", target);
            return Vec::new();
        }
    }

    path.reverse();
    path
}
