//! Fib SSSP - Single-Source Shortest Paths over interchangeable priority queues
//!
//! This library runs Dijkstra's algorithm and A* search through one shared
//! relaxation loop, parameterized by the priority queue that orders the frontier.
//! Three queue strategies are provided:
//!
//! - a linear scan over a dense key table (O(V) per extraction),
//! - an indexed binary min-heap (O(log n) decrease-key via sift-up),
//! - a Fibonacci heap (O(1) amortized insert and decrease-key, lazy consolidation).
//!
//! Edge weights must be non-negative. The numeric weight type is generic; the
//! graph providers in this crate use `OrderedFloat<f64>`.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    astar::{run_astar, AStar, PathResult},
    dijkstra::{run_dijkstra, Dijkstra},
    heuristic::{Heuristic, ZeroHeuristic},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{PriorityQueue, QueueError, QueueHandle, QueueStrategy};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative or NaN edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Too many edges: {edges} exceeds the maximum of {max} for this vertex count")]
    TooManyEdges { edges: usize, max: usize },

    #[error("Invalid heuristic estimate {value} for vertex {vertex}")]
    InvalidHeuristic { vertex: usize, value: f64 },

    #[error("Unknown queue strategy: {0}")]
    UnknownStrategy(String),

    #[error("Search plan covers {plan} vertices but the graph has {graph}")]
    PlanMismatch { plan: usize, graph: usize },

    #[error("Invalid graph description: {0}")]
    InvalidGraphSpec(String),

    #[error("Queue protocol violation: {0}")]
    QueueProtocol(#[from] QueueError),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
