use crate::graph::DirectedGraph;
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Generates a random sparse directed graph with exactly `edge_count` edges
///
/// No self-loops, and at most one edge per unordered vertex pair, so the
/// largest feasible `edge_count` is `V*(V-1)/2`. Weights are integers in `1..=10`.
pub fn generate_random_sparse(
    vertices: usize,
    edge_count: usize,
    seed: u64,
) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let max = DirectedGraph::<OrderedFloat<f64>>::max_edges(vertices) / 2;
    if edge_count > max {
        return Err(Error::TooManyEdges {
            edges: edge_count,
            max,
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut used = HashSet::with_capacity(edge_count);
    let mut edges = Vec::with_capacity(edge_count);

    while edges.len() < edge_count {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        if u == v {
            continue;
        }

        // u -> v and v -> u count as the same pair
        let key = if u < v { (u, v) } else { (v, u) };
        if used.insert(key) {
            let weight = rng.gen_range(1..=10) as f64;
            edges.push((u, v, OrderedFloat(weight)));
        }
    }

    DirectedGraph::from_edges(vertices, &edges)
}

/// Generates a complete directed graph with rounded random weights in `[min_weight, max_weight]`
pub fn generate_complete(
    vertices: usize,
    min_weight: f64,
    max_weight: f64,
    seed: u64,
) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(DirectedGraph::<OrderedFloat<f64>>::max_edges(vertices));

    for i in 0..vertices {
        for j in 0..vertices {
            if i != j {
                edges.push((i, j, OrderedFloat(random_weight(&mut rng, min_weight, max_weight))));
            }
        }
    }

    DirectedGraph::from_edges(vertices, &edges)
}

/// Generates a 4-connected grid graph of `width * height` vertices
///
/// Each horizontal or vertical neighbour pair is joined in both directions with
/// the same rounded random weight. Vertex `(row, col)` has index `row * width + col`.
pub fn generate_grid(
    width: usize,
    height: usize,
    min_weight: f64,
    max_weight: f64,
    seed: u64,
) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();

    for row in 0..height {
        for col in 0..width {
            let node = row * width + col;

            if col + 1 < width {
                let right = node + 1;
                let weight = OrderedFloat(random_weight(&mut rng, min_weight, max_weight));
                edges.push((node, right, weight));
                edges.push((right, node, weight));
            }

            if row + 1 < height {
                let below = node + width;
                let weight = OrderedFloat(random_weight(&mut rng, min_weight, max_weight));
                edges.push((node, below, weight));
                edges.push((below, node, weight));
            }
        }
    }

    DirectedGraph::from_edges(width * height, &edges)
}

fn random_weight(rng: &mut StdRng, min_weight: f64, max_weight: f64) -> f64 {
    (min_weight + rng.gen::<f64>() * (max_weight - min_weight)).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn sparse_graph_has_requested_edges() {
        let graph = generate_random_sparse(40, 50, 7).unwrap();
        assert_eq!(graph.vertex_count(), 40);
        assert_eq!(graph.edge_count(), 50);
        for u in 0..40 {
            for (v, w) in graph.outgoing_edges(u) {
                assert_ne!(u, v);
                assert!(w.into_inner() >= 1.0 && w.into_inner() <= 10.0);
            }
        }
    }

    #[test]
    fn sparse_graph_is_reproducible() {
        let a = generate_random_sparse(30, 60, 42).unwrap();
        let b = generate_random_sparse(30, 60, 42).unwrap();
        for u in 0..30 {
            let ea: Vec<_> = a.outgoing_edges(u).collect();
            let eb: Vec<_> = b.outgoing_edges(u).collect();
            assert_eq!(ea, eb);
        }
    }

    #[test]
    fn sparse_graph_rejects_infeasible_edge_count() {
        assert!(matches!(
            generate_random_sparse(4, 7, 1),
            Err(Error::TooManyEdges { edges: 7, max: 6 })
        ));
    }

    #[test]
    fn grid_graph_is_bidirectional() {
        let graph = generate_grid(3, 2, 1.0, 5.0, 3).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        // 2 rows * 2 horizontal pairs + 3 vertical pairs, both directions
        assert_eq!(graph.edge_count(), 14);
        assert_eq!(graph.get_edge_weight(0, 1), graph.get_edge_weight(1, 0));
        assert_eq!(graph.get_edge_weight(1, 4), graph.get_edge_weight(4, 1));
    }

    #[test]
    fn complete_graph_has_every_ordered_pair() {
        let graph = generate_complete(5, 1.0, 3.0, 11).unwrap();
        assert_eq!(graph.edge_count(), 20);
        assert!(graph.has_edge(4, 0));
        assert!(!graph.has_edge(2, 2));
    }
}
