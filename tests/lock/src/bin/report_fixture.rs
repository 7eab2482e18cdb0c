//! Binary that runs the fixture searches and prints deterministic output
//! lines for cross-process verification.
//!
//! Usage: `report_fixture`
//!
//! Output: `key=value` lines, one per report digest plus the plan cost.

use lock_tests::fixtures::{ring, seven_vertex_graph};
use winding_homotopy::{plan, AugmentedNode, Heuristic, HomotopyGoal, MaskedGoal};
use winding_kernel::graph::VertexId;
use winding_kernel::invariant::Invariant;
use winding_search::{dijkstra, SearchPolicy, SearchReportV1, VertexState};

fn main() {
    let policy = SearchPolicy::default();

    let ring = ring();
    let start = AugmentedNode::root(&ring, VertexId(0), Invariant::crossings(1))
        .expect("ring start is valid");
    let goal = MaskedGoal::new(1)
        .with_constraint(0, 1)
        .expect("constraint in range");
    let result = plan(
        start,
        &HomotopyGoal::masked(VertexId(2), goal),
        Heuristic::Zero,
        &policy,
    )
    .expect("plan succeeds");
    let plan_report = SearchReportV1::from_result(&result);

    let line = seven_vertex_graph();
    let table = dijkstra(
        VertexState::new(&line, VertexId(0)).expect("start exists"),
        &policy,
    )
    .expect("dijkstra succeeds");
    let table_report = SearchReportV1::from_table(&table);

    println!("plan_cost={}", result.cost);
    println!(
        "plan_report_digest={}",
        plan_report.digest().expect("plan report serializes")
    );
    println!(
        "dijkstra_report_digest={}",
        table_report.digest().expect("table report serializes")
    );
}
