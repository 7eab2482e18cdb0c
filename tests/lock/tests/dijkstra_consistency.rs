//! Dijkstra table vs. single-target A* lock tests.

use lock_tests::fixtures::{grid, seven_vertex_graph};
use lock_tests::logging::init_tracing;
use winding_kernel::graph::{Graph, VertexId};
use winding_search::{
    astar, dijkstra, dijkstra_within_budget, HeapOrder, SearchPolicy, Termination, VertexState,
};

fn assert_table_matches_astar(graph: &Graph, start: VertexId) {
    let policy = SearchPolicy::default();
    let root = VertexState::new(graph, start).unwrap();
    let table = dijkstra(root, &policy).unwrap();
    assert_eq!(table.termination(), Termination::FrontierExhausted);

    for vertex in graph.vertices() {
        let target = VertexState::new(graph, vertex.id()).unwrap();
        let goal = |s: &VertexState<'_>| s.id() == vertex.id();
        let single = astar(root, &goal, |_| 0.0, &policy).unwrap();
        match table.cost(&target) {
            Some(cost) => assert!(
                (cost - single.cost).abs() < 1e-9,
                "{}: dijkstra {cost} vs astar {}",
                vertex.id(),
                single.cost
            ),
            None => assert!(
                single.cost.is_infinite(),
                "{} unreachable in the table but A* found {}",
                vertex.id(),
                single.cost
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: DIJKSTRA-EQUALS-REPEATED-ASTAR
// ---------------------------------------------------------------------------

#[test]
fn dijkstra_agrees_with_astar_on_seven_vertex_graph() {
    init_tracing();
    let graph = seven_vertex_graph();
    for start in 0..graph.len() {
        assert_table_matches_astar(&graph, VertexId(start));
    }
}

#[test]
fn dijkstra_agrees_with_astar_on_grid() {
    init_tracing();
    let graph = grid(5, 0);
    assert_table_matches_astar(&graph, VertexId(0));
    assert_table_matches_astar(&graph, VertexId(12));
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: DIJKSTRA-TABLE-SHAPE
// ---------------------------------------------------------------------------

#[test]
fn table_paths_end_at_their_key() {
    let graph = seven_vertex_graph();
    let root = VertexState::new(&graph, VertexId(0)).unwrap();
    let table = dijkstra(root, &SearchPolicy::default()).unwrap();

    assert_eq!(table.len(), 7);
    for node in table.iter() {
        let path = table.path_to(&node.state).unwrap().unwrap();
        assert_eq!(path.last_state(), Some(&node.state));
        assert_eq!(path.nodes().next(), Some(&root));
    }
    let costs: Vec<f64> = table.iter().map(|n| n.g_cost).collect();
    assert!(costs.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn grid_manhattan_distances() {
    let graph = grid(4, 0);
    let root = VertexState::new(&graph, VertexId(0)).unwrap();
    let table = dijkstra(root, &SearchPolicy::default()).unwrap();
    let far = VertexState::new(&graph, VertexId(15)).unwrap();
    assert!((table.cost(&far).unwrap() - 6.0).abs() < 1e-12);
    assert_eq!(table.len(), 16);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: DIJKSTRA-NEEDS-MIN-ORDER
// ---------------------------------------------------------------------------

#[test]
fn max_ordered_policy_is_refused_by_both_tables() {
    init_tracing();
    let graph = seven_vertex_graph();
    let root = VertexState::new(&graph, VertexId(0)).unwrap();
    let max = SearchPolicy::default().with_heap_order(HeapOrder::Max);

    let err = dijkstra(root, &max).unwrap_err();
    assert!(err.is_configuration_fault(), "full table accepted a max frontier: {err}");
    let err = dijkstra_within_budget(root, 6.0, &max).unwrap_err();
    assert!(err.is_configuration_fault(), "budgeted table accepted a max frontier: {err}");

    let min = dijkstra_within_budget(root, 6.0, &SearchPolicy::default()).unwrap();
    assert_eq!(min.len(), 3);
    let v6 = VertexState::new(&graph, VertexId(6)).unwrap();
    let full = dijkstra(root, &SearchPolicy::default()).unwrap();
    assert!((full.cost(&v6).unwrap() - 16.3).abs() < 1e-9);
}
