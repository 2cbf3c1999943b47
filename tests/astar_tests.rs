use fib_sssp::algorithm::compare::compare_astar_strategies;
use fib_sssp::graph::generators::generate_random_sparse;
use fib_sssp::graph::{DirectedGraph, Graph, Grid};
use fib_sssp::{run_astar, AStar, Dijkstra, Error, QueueStrategy, ShortestPathAlgorithm, ZeroHeuristic};
use ordered_float::OrderedFloat;

type Weight = OrderedFloat<f64>;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Distances by exhaustive relaxation, independent of any priority queue
fn bellman_ford<G: Graph<Weight>>(graph: &G, source: usize) -> Vec<f64> {
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    dist[source] = 0.0;
    for _ in 0..n {
        let mut changed = false;
        for u in 0..n {
            if dist[u].is_infinite() {
                continue;
            }
            for (v, w) in graph.outgoing_edges(u) {
                if dist[u] + w.0 < dist[v] {
                    dist[v] = dist[u] + w.0;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn path_cost<G: Graph<Weight>>(graph: &G, path: &[usize]) -> f64 {
    path.windows(2)
        .map(|step| {
            graph
                .get_edge_weight(step[0], step[1])
                .map(|w| w.0)
                .unwrap_or_else(|| panic!("path uses missing edge {} -> {}", step[0], step[1]))
        })
        .sum()
}

fn obstacle_grid() -> Grid {
    let mut grid = Grid::open(5, 5);
    for (row, col) in [(0, 3), (1, 1), (1, 3), (2, 1), (3, 3)] {
        grid.block(row, col).unwrap();
    }
    grid
}

#[test]
fn test_grid_path_is_optimal_for_every_strategy() {
    init_logging();
    let grid = obstacle_grid();
    let graph = grid.to_graph().unwrap();
    let source = grid.index(0, 0).unwrap();
    let goal = grid.index(4, 4).unwrap();
    let optimum = bellman_ford(&graph, source)[goal];

    for strategy in QueueStrategy::ALL {
        let result = AStar::new(goal, grid.euclidean())
            .with_strategy(strategy)
            .find_path(&graph, source)
            .unwrap();

        assert!(result.is_found(), "strategy {}", strategy);
        assert_eq!(result.path.first(), Some(&source));
        assert_eq!(result.path.last(), Some(&goal));
        for &v in &result.path {
            let (row, col) = grid.cell(v).unwrap();
            assert!(!grid.is_blocked(row, col));
        }

        let cost = result.cost.unwrap().0;
        assert!((cost - optimum).abs() < 1e-9, "{}: {} vs {}", strategy, cost, optimum);
        assert!((path_cost(&graph, &result.path) - optimum).abs() < 1e-9);
    }
}

#[test]
fn test_run_astar_returns_the_same_path_length() {
    let grid = obstacle_grid();
    let graph = grid.to_graph().unwrap();
    let goal = grid.index(4, 4).unwrap();
    let optimum = bellman_ford(&graph, 0)[goal];

    let path = run_astar(&graph, 0, goal, &grid.euclidean(), QueueStrategy::BinaryHeap).unwrap();
    assert!((path_cost(&graph, &path) - optimum).abs() < 1e-9);
}

#[test]
fn test_strategies_agree_on_grid_cost() {
    let grid = Grid::parse(
        "
        ..........
        .######...
        ......#...
        ####..#.##
        ......#...
        .####.###.
        ..........
        ",
    )
    .unwrap();
    let graph = grid.to_graph().unwrap();
    let goal = grid.index(6, 9).unwrap();

    let runs = compare_astar_strategies(&graph, 0, goal, &grid.euclidean()).unwrap();
    let optimum = bellman_ford(&graph, 0)[goal];
    for run in &runs {
        let cost = run.result.cost.unwrap().0;
        assert!((cost - optimum).abs() < 1e-9, "strategy {}", run.strategy);
    }
}

#[test]
fn test_zero_heuristic_matches_dijkstra() {
    let graph = generate_random_sparse(150, 500, 21).unwrap();
    let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    for goal in (0..150).step_by(7) {
        let result = AStar::new(goal, ZeroHeuristic).find_path(&graph, 0).unwrap();
        match dijkstra.distance(goal) {
            Some(distance) => assert_eq!(result.cost, Some(distance), "goal {}", goal),
            None => assert!(!result.is_found(), "goal {}", goal),
        }
    }
}

#[test]
fn test_source_equals_goal() {
    let grid = obstacle_grid();
    let graph = grid.to_graph().unwrap();
    let result = AStar::new(12, grid.euclidean()).find_path(&graph, 12).unwrap();

    assert_eq!(result.path, vec![12]);
    assert_eq!(result.cost, Some(OrderedFloat(0.0)));
}

#[test]
fn test_walled_off_goal_is_unreachable() {
    let grid = Grid::parse("..#..\n..#..\n..#..").unwrap();
    let graph = grid.to_graph().unwrap();
    let goal = grid.index(1, 4).unwrap();

    for strategy in QueueStrategy::ALL {
        let path = run_astar(&graph, 0, goal, &grid.euclidean(), strategy).unwrap();
        assert!(path.is_empty());

        let result = AStar::new(goal, grid.manhattan())
            .with_strategy(strategy)
            .find_path(&graph, 0)
            .unwrap();
        assert!(!result.is_found());
        assert_eq!(result.cost, None);
    }
}

#[test]
fn test_isolated_goal_gives_empty_path() {
    let mut graph = generate_random_sparse(50, 120, 8).unwrap();
    let isolated = graph.add_vertex();

    for strategy in QueueStrategy::ALL {
        let path = run_astar(&graph, 0, isolated, &ZeroHeuristic, strategy).unwrap();
        assert!(path.is_empty());
    }
}

#[test]
fn test_invalid_vertices_are_rejected() {
    let graph: DirectedGraph<Weight> = obstacle_grid().to_graph().unwrap();
    let zero = |_: usize, _: usize| OrderedFloat(0.0);

    assert!(matches!(
        run_astar(&graph, 25, 0, &zero, QueueStrategy::Fibonacci),
        Err(Error::InvalidVertex(25))
    ));
    assert!(matches!(
        run_astar(&graph, 0, 30, &zero, QueueStrategy::Fibonacci),
        Err(Error::InvalidVertex(30))
    ));
}

#[test]
fn test_invalid_heuristic_is_rejected() {
    let graph: DirectedGraph<Weight> = obstacle_grid().to_graph().unwrap();

    let negative = |v: usize, _: usize| OrderedFloat(if v == 7 { -0.5 } else { 0.0 });
    assert!(matches!(
        run_astar(&graph, 0, 24, &negative, QueueStrategy::LinearScan),
        Err(Error::InvalidHeuristic { vertex: 7, .. })
    ));

    let nan = |v: usize, _: usize| OrderedFloat(if v == 3 { f64::NAN } else { 1.0 });
    assert!(matches!(
        AStar::new(24, nan).find_path(&graph, 0),
        Err(Error::InvalidHeuristic { vertex: 3, .. })
    ));
}
