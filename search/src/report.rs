//! Auditable search report: a canonical, content-addressed summary of one
//! driver call.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::contract::State;
use crate::search::{DijkstraTable, SearchResult, SearchStats, Termination};
use crate::tree::SearchTree;

/// Domain prefix for report digests.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"WINDING::SEARCH_REPORT::V1\0";

/// Report schema tag.
pub const SEARCH_REPORT_SCHEMA: &str = "search_report.v1";

/// Which driver produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverV1 {
    Astar,
    Dijkstra,
}

/// Call-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadataV1 {
    pub schema: &'static str,
    pub driver: DriverV1,
    pub termination: Termination,
    /// Goal cost; `None` when no goal was reached.
    pub cost: Option<f64>,
    pub stats: SearchStats,
}

/// Summary of one arena node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSummaryV1 {
    pub node_id: usize,
    pub parent_id: Option<usize>,
    pub label: String,
    pub depth: u32,
    pub g_cost: f64,
    pub h_cost: f64,
    pub expansion_order: Option<u64>,
    pub is_goal: bool,
}

/// Canonical report of a search call.
///
/// Node summaries are sorted by `node_id`. Two calls over equal inputs give
/// byte-identical canonical JSON and therefore equal digests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReportV1 {
    pub metadata: ReportMetadataV1,
    pub node_summaries: Vec<NodeSummaryV1>,
}

impl SearchReportV1 {
    #[must_use]
    pub fn from_result<S: State>(result: &SearchResult<S>) -> Self {
        let goal_id = match result.termination {
            Termination::GoalReached { node_id } => Some(node_id),
            Termination::FrontierExhausted | Termination::ExpansionBudgetExceeded => None,
        };
        Self {
            metadata: ReportMetadataV1 {
                schema: SEARCH_REPORT_SCHEMA,
                driver: DriverV1::Astar,
                termination: result.termination,
                cost: goal_id.map(|_| result.cost),
                stats: result.stats,
            },
            node_summaries: summarize(&result.tree, goal_id),
        }
    }

    #[must_use]
    pub fn from_table<S: State>(table: &DijkstraTable<S>) -> Self {
        Self {
            metadata: ReportMetadataV1 {
                schema: SEARCH_REPORT_SCHEMA,
                driver: DriverV1::Dijkstra,
                termination: table.termination(),
                cost: None,
                stats: table.stats(),
            },
            node_summaries: summarize(table.tree(), None),
        }
    }

    /// Serialize to canonical JSON: sorted keys, compact separators.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        // `Value` objects are key-sorted maps, so re-serializing sorts keys.
        let value = serde_json::to_value(self)?;
        serde_json::to_vec(&value)
    }

    /// `sha256:<hex>` over the domain prefix and the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SEARCH_REPORT);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}

fn summarize<S: State>(tree: &SearchTree<S>, goal_id: Option<usize>) -> Vec<NodeSummaryV1> {
    tree.nodes()
        .iter()
        .map(|node| NodeSummaryV1 {
            node_id: node.node_id,
            parent_id: node.parent_id,
            label: node.state.label(),
            depth: node.depth,
            g_cost: node.g_cost,
            h_cost: node.h_cost,
            expansion_order: node.expansion_order,
            is_goal: goal_id == Some(node.node_id),
        })
        .collect()
}
