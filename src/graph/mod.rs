pub mod traits;
pub mod directed;
pub mod generators;
pub mod grid;
pub mod spec;

pub use traits::Graph;
pub use directed::DirectedGraph;
pub use grid::{EuclideanHeuristic, Grid, ManhattanHeuristic};
pub use spec::GraphSpec;
