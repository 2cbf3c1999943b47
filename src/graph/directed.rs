use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
///
/// Edges form a multiset: parallel edges between the same pair of vertices are
/// kept as given. Every edge is validated on insertion, so a constructed graph
/// never holds an out-of-range endpoint or a negative weight.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Total number of edges
    edge_count: usize,
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with the specified number of vertices and no edges
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from a vertex count and an edge list of `(from, to, weight)`
    ///
    /// Fails before adding anything if the edge list is longer than a simple
    /// directed graph on `vertices` vertices could be, or if any edge is invalid.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let max = Self::max_edges(vertices);
        if edges.len() > max {
            return Err(Error::TooManyEdges {
                edges: edges.len(),
                max,
            });
        }

        for &(from, to, weight) in edges {
            Self::validate_edge(vertices, from, to, weight)?;
        }

        let mut graph = DirectedGraph::with_capacity(vertices);
        for &(from, to, weight) in edges {
            graph.outgoing_edges[from].push((to, weight));
        }
        graph.edge_count = edges.len();

        Ok(graph)
    }

    /// Maximum number of edges of a directed graph without self-loops or parallel edges
    pub fn max_edges(vertices: usize) -> usize {
        vertices.saturating_mul(vertices.saturating_sub(1))
    }

    /// Adds a vertex to the graph and returns its ID
    pub fn add_vertex(&mut self) -> usize {
        self.outgoing_edges.push(Vec::new());
        self.outgoing_edges.len() - 1
    }

    /// Adds a directed edge between vertices with the given weight
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        Self::validate_edge(self.vertex_count(), from, to, weight)?;

        let max = Self::max_edges(self.vertex_count());
        if self.edge_count + 1 > max {
            return Err(Error::TooManyEdges {
                edges: self.edge_count + 1,
                max,
            });
        }

        self.outgoing_edges[from].push((to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .iter()
            .flatten()
            .all(|(_, weight)| !weight.is_nan() && *weight >= W::zero())
    }

    fn validate_edge(vertices: usize, from: usize, to: usize, weight: W) -> Result<()> {
        if from >= vertices || to >= vertices {
            return Err(Error::InvalidEdge(from, to));
        }
        if weight.is_nan() || weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}
