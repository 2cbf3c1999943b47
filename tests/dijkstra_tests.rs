use fib_sssp::algorithm::compare::{compare_strategies, distances_agree};
use fib_sssp::algorithm::traits::reconstruct_path;
use fib_sssp::graph::generators::{generate_complete, generate_grid, generate_random_sparse};
use fib_sssp::graph::{DirectedGraph, GraphSpec};
use fib_sssp::{run_dijkstra, Dijkstra, Error, QueueStrategy, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;

type Weight = OrderedFloat<f64>;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn textbook_graph() -> DirectedGraph<Weight> {
    DirectedGraph::from_edges(
        5,
        &[
            (0, 1, OrderedFloat(10.0)),
            (0, 4, OrderedFloat(3.0)),
            (1, 2, OrderedFloat(2.0)),
            (2, 3, OrderedFloat(9.0)),
            (4, 1, OrderedFloat(1.0)),
            (4, 2, OrderedFloat(8.0)),
        ],
    )
    .unwrap()
}

#[test]
fn test_textbook_distances_for_every_strategy() {
    init_logging();
    let graph = textbook_graph();
    let expected: Vec<Weight> = [0.0, 4.0, 6.0, 15.0, 3.0].into_iter().map(OrderedFloat).collect();

    for strategy in QueueStrategy::ALL {
        let distances = run_dijkstra(&graph, 0, strategy).unwrap();
        assert_eq!(distances, expected, "strategy {}", strategy);
    }
}

#[test]
fn test_textbook_predecessors() {
    let graph = textbook_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.predecessors, vec![None, Some(4), Some(1), Some(2), Some(0)]);
    assert_eq!(reconstruct_path(&result.predecessors, 0, 3), vec![0, 4, 1, 2, 3]);
    assert_eq!(result.reachable_count(), 5);
}

#[test]
fn test_isolated_vertex_stays_unreachable() {
    let mut graph = textbook_graph();
    let isolated = graph.add_vertex();

    for strategy in QueueStrategy::ALL {
        let result = Dijkstra::new()
            .with_strategy(strategy)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        assert!(result.distances[isolated].is_infinite());
        assert_eq!(result.distance(isolated), None);
        assert_eq!(result.predecessors[isolated], None);
        assert_eq!(result.reachable_count(), 5);
    }
}

#[test]
fn test_single_vertex_graph() {
    let graph = DirectedGraph::<Weight>::with_capacity(1);
    let distances = run_dijkstra(&graph, 0, QueueStrategy::Fibonacci).unwrap();
    assert_eq!(distances, vec![OrderedFloat(0.0)]);
}

#[test]
fn test_zero_weight_edges() {
    let graph = DirectedGraph::from_edges(
        3,
        &[(0, 1, OrderedFloat(0.0)), (1, 2, OrderedFloat(0.0)), (0, 2, OrderedFloat(1.0))],
    )
    .unwrap();
    let distances = run_dijkstra(&graph, 0, QueueStrategy::BinaryHeap).unwrap();
    assert_eq!(distances, vec![OrderedFloat(0.0); 3]);
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph = textbook_graph();
    for strategy in QueueStrategy::ALL {
        assert!(matches!(run_dijkstra(&graph, 5, strategy), Err(Error::InvalidVertex(5))));
    }
}

#[test]
fn test_strategies_agree_on_random_sparse_graphs() {
    init_logging();
    for seed in 0..5 {
        let graph = generate_random_sparse(400, 1_600, seed).unwrap();
        let runs = compare_strategies(&graph, 0).unwrap();
        assert!(distances_agree(&runs), "seed {}", seed);
    }
}

#[test]
fn test_strategies_agree_on_dense_and_grid_graphs() {
    let complete = generate_complete(60, 1.0, 100.0, 7).unwrap();
    assert!(distances_agree(&compare_strategies(&complete, 3).unwrap()));

    let grid = generate_grid(20, 15, 1.0, 9.0, 11).unwrap();
    let runs = compare_strategies(&grid, 0).unwrap();
    assert!(distances_agree(&runs));
    // 4-connected bidirectional grids are strongly connected
    assert_eq!(runs[0].result.reachable_count(), 300);
}

#[test]
fn test_distances_satisfy_triangle_inequality() {
    let graph = generate_random_sparse(300, 1_000, 42).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    for edge_source in 0..300 {
        let du = result.distances[edge_source];
        if du.is_infinite() {
            continue;
        }
        for (v, w) in fib_sssp::graph::Graph::outgoing_edges(&graph, edge_source) {
            assert!(result.distances[v] <= du + w);
        }
    }
    assert_eq!(result.distances[0], OrderedFloat(0.0));
}

#[test]
fn test_relaxations_strictly_decrease_and_finalize_in_order() {
    let graph = generate_random_sparse(200, 700, 5).unwrap();

    for strategy in QueueStrategy::ALL {
        let mut last_seen = vec![OrderedFloat(f64::INFINITY); 200];
        let result = Dijkstra::new()
            .with_strategy(strategy)
            .compute_observed(&graph, 0, |relaxation| {
                assert!(relaxation.distance < relaxation.previous);
                assert_eq!(relaxation.previous, last_seen[relaxation.vertex]);
                last_seen[relaxation.vertex] = relaxation.distance;
            })
            .unwrap();

        for v in 0..200 {
            if v != 0 {
                assert_eq!(result.distances[v], last_seen[v]);
            }
        }
        assert_eq!(result.stats.relaxations, result.stats.inserts - 1 + result.stats.decrease_keys);
    }
}

#[test]
fn test_target_stops_early() {
    let graph = generate_grid(30, 30, 1.0, 5.0, 3).unwrap();
    let full = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let early = Dijkstra::new().with_target(31).compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(early.distances[31], full.distances[31]);
    assert!(early.stats.extractions < full.stats.extractions);
}

#[test]
fn test_graph_loaded_from_json() {
    let json = r#"{
        "vertex_count": 5,
        "edges": [[0, 1, 10.0], [0, 4, 3.0], [1, 2, 2.0], [2, 3, 9.0], [4, 1, 1.0], [4, 2, 8.0]]
    }"#;
    let graph = GraphSpec::from_json(json).unwrap().to_graph().unwrap();
    let distances = run_dijkstra(&graph, 0, QueueStrategy::LinearScan).unwrap();
    assert_eq!(distances[3], OrderedFloat(15.0));
}
