pub mod traits;
pub mod heuristic;
pub mod driver;
pub mod dijkstra;
pub mod astar;
pub mod compare;

pub use traits::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
pub use driver::{Relaxation, SearchOutcome, SearchPlan, ShortestPathDriver, VertexState};
