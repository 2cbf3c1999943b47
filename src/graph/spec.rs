use crate::graph::{DirectedGraph, Graph};
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Serializable description of a graph: a vertex count and `[from, to, weight]` edges
///
/// ```json
/// { "vertex_count": 3, "edges": [[0, 1, 2.5], [1, 2, 1.0]] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub vertex_count: usize,
    #[serde(default)]
    pub edges: Vec<(usize, usize, f64)>,
}

impl GraphSpec {
    /// Parses a graph description from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidGraphSpec(e.to_string()))
    }

    /// Renders the description as JSON text
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidGraphSpec(e.to_string()))
    }

    /// Validates the description and builds the graph
    pub fn to_graph(&self) -> Result<DirectedGraph<OrderedFloat<f64>>> {
        let edges: Vec<_> = self
            .edges
            .iter()
            .map(|&(from, to, weight)| (from, to, OrderedFloat(weight)))
            .collect();
        DirectedGraph::from_edges(self.vertex_count, &edges)
    }

    /// Captures an existing graph as a description
    pub fn from_graph<G: Graph<OrderedFloat<f64>>>(graph: &G) -> Self {
        let edges = (0..graph.vertex_count())
            .flat_map(|u| graph.outgoing_edges(u).map(move |(v, w)| (u, v, w.into_inner())))
            .collect();
        GraphSpec {
            vertex_count: graph.vertex_count(),
            edges,
        }
    }
}
