//! Budgeted breadth-first enumeration lock tests.

use lock_tests::fixtures::{grid, seven_vertex_graph};
use lock_tests::logging::init_tracing;
use winding_kernel::graph::VertexId;
use winding_search::{enumerate_within_budget, AcceptAll, SearchPolicy, State, VertexState};

fn ids(path: &winding_search::Path<VertexState<'_>>) -> Vec<usize> {
    path.nodes().map(|s| s.id().index()).collect()
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: BFS-WITHIN-BUDGET
// ---------------------------------------------------------------------------

#[test]
fn budget_five_collects_both_in_budget_leaves() {
    init_tracing();
    let graph = seven_vertex_graph();
    let start = VertexState::new(&graph, VertexId(0)).unwrap();

    let found = enumerate_within_budget(start, 5.0, &AcceptAll, &SearchPolicy::default()).unwrap();

    let summary: Vec<(Vec<usize>, f64)> = found.iter().map(|(p, c)| (ids(p), *c)).collect();
    assert_eq!(summary, vec![(vec![0, 1], 5.0), (vec![0, 2], 2.7)]);
}

#[test]
fn every_result_is_within_budget() {
    let graph = grid(5, 0);
    for budget in [0.0, 1.0, 2.5, 4.0, 7.0] {
        let start = VertexState::new(&graph, VertexId(12)).unwrap();
        let found =
            enumerate_within_budget(start, budget, &AcceptAll, &SearchPolicy::default()).unwrap();
        assert!(!found.is_empty(), "budget {budget} returned nothing");
        for (path, cost) in &found {
            assert!(*cost <= budget, "cost {cost} exceeds budget {budget}");
            let summed: f64 = path.len() as f64 - 1.0;
            assert!((summed - cost).abs() < 1e-12, "unit-cost grid: cost equals hops");
        }
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: BFS-NO-LEAF-OMITTED
// ---------------------------------------------------------------------------

#[test]
fn no_qualifying_leaf_is_omitted() {
    let graph = seven_vertex_graph();
    let start = VertexState::new(&graph, VertexId(0)).unwrap();
    let budget = 20.0;
    let found = enumerate_within_budget(start, budget, &AcceptAll, &SearchPolicy::default()).unwrap();
    let collected: Vec<usize> = found.iter().map(|(p, _)| *ids(p).last().unwrap()).collect();

    // Within 20: 0->3 (8.4), 0->1->5 (6.2), 0->2->4->6 (16.3) end in leaves;
    // 1, 2 and 4 still had in-budget children.
    let mut sorted = collected.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![3, 5, 6]);
    for vertex in &collected {
        let state = VertexState::new(&graph, VertexId(*vertex)).unwrap();
        let in_budget_children = state.successors().len();
        assert!(in_budget_children == 0 || *vertex == 6);
    }
}

#[test]
fn zero_budget_collects_only_the_start() {
    let graph = seven_vertex_graph();
    let start = VertexState::new(&graph, VertexId(0)).unwrap();
    let found = enumerate_within_budget(start, 0.0, &AcceptAll, &SearchPolicy::default()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(ids(&found[0].0), vec![0]);
    assert_eq!(found[0].1, 0.0);
}

#[test]
fn predicate_filters_collection() {
    let graph = seven_vertex_graph();
    let start = VertexState::new(&graph, VertexId(0)).unwrap();
    let far = |s: &VertexState<'_>| s.id().index() >= 4;
    let found = enumerate_within_budget(start, 20.0, &far, &SearchPolicy::default()).unwrap();
    let ends: Vec<usize> = found.iter().map(|(p, _)| *ids(p).last().unwrap()).collect();
    assert_eq!(ends, vec![5, 6]);
}
