//! Search report determinism: in-process repetition and cross-process
//! agreement with the `report_fixture` binary.

use std::process::Command;

use lock_tests::fixtures::{ring, seven_vertex_graph};
use sha2::{Digest, Sha256};
use winding_homotopy::{plan, AugmentedNode, Heuristic, HomotopyGoal, MaskedGoal};
use winding_kernel::graph::VertexId;
use winding_kernel::invariant::Invariant;
use winding_search::report::DOMAIN_SEARCH_REPORT;
use winding_search::{dijkstra, SearchPolicy, SearchReportV1, VertexState};

fn plan_report() -> SearchReportV1 {
    let graph = ring();
    let start = AugmentedNode::root(&graph, VertexId(0), Invariant::crossings(1)).unwrap();
    let goal = HomotopyGoal::masked(VertexId(2), MaskedGoal::new(1).with_constraint(0, 1).unwrap());
    let result = plan(start, &goal, Heuristic::Zero, &SearchPolicy::default()).unwrap();
    SearchReportV1::from_result(&result)
}

fn table_report() -> SearchReportV1 {
    let graph = seven_vertex_graph();
    let start = VertexState::new(&graph, VertexId(0)).unwrap();
    SearchReportV1::from_table(&dijkstra(start, &SearchPolicy::default()).unwrap())
}

fn run_fixture(env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_report_fixture");
    let mut command = Command::new(bin);
    command.env_remove("LC_ALL").env_remove("LANG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }
    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin} ({env_overrides:?}): {e}"));
    assert!(
        output.status.success(),
        "report_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn field<'a>(output: &'a str, key: &str) -> &'a str {
    output
        .lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
        .unwrap_or_else(|| panic!("missing {key} in {output}"))
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: REPORT-DETERMINISM-INPROC
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_produce_identical_bytes() {
    let first = plan_report().to_canonical_json_bytes().unwrap();
    for _ in 0..10 {
        assert_eq!(plan_report().to_canonical_json_bytes().unwrap(), first);
    }
    assert_eq!(table_report().digest().unwrap(), table_report().digest().unwrap());
}

#[test]
fn digest_is_domain_separated_sha256_of_canonical_bytes() {
    let report = table_report();
    let bytes = report.to_canonical_json_bytes().unwrap();
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_SEARCH_REPORT);
    hasher.update(&bytes);
    let expected = format!("sha256:{}", hex::encode(hasher.finalize()));
    assert_eq!(report.digest().unwrap(), expected);

    let mut undomained = Sha256::new();
    undomained.update(&bytes);
    assert_ne!(
        report.digest().unwrap(),
        format!("sha256:{}", hex::encode(undomained.finalize()))
    );
}

#[test]
fn report_summarizes_every_arena_node() {
    let report = plan_report();
    let json: serde_json::Value =
        serde_json::from_slice(&report.to_canonical_json_bytes().unwrap()).unwrap();
    let summaries = json["node_summaries"].as_array().unwrap();
    assert_eq!(summaries.len(), report.node_summaries.len());
    for (i, summary) in summaries.iter().enumerate() {
        assert_eq!(summary["node_id"].as_u64(), Some(i as u64));
    }
    let goal = summaries.iter().find(|s| s["is_goal"] == true).unwrap();
    assert_eq!(goal["label"], "v2 [1]");
    assert_eq!(json["metadata"]["cost"], 10.0);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: REPORT-DETERMINISM-CROSSPROC
// ---------------------------------------------------------------------------

#[test]
fn fixture_binary_matches_in_process_digests() {
    let baseline = run_fixture(&[]);
    for overrides in [
        &[("LC_ALL", "C")][..],
        &[("LANG", "en_US.UTF-8")][..],
        &[("RUST_LOG", "trace")][..],
    ] {
        assert_eq!(run_fixture(overrides), baseline, "output changed under {overrides:?}");
    }

    assert_eq!(field(&baseline, "plan_cost"), "10");
    assert_eq!(
        field(&baseline, "plan_report_digest"),
        plan_report().digest().unwrap()
    );
    assert_eq!(
        field(&baseline, "dijkstra_report_digest"),
        table_report().digest().unwrap()
    );
}
