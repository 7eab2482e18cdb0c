//! Planning entry points over the augmented state space.

use serde::{Deserialize, Serialize};
use winding_kernel::geometry::Point2;
use winding_kernel::graph::{Graph, VertexId};
use winding_kernel::invariant::{Invariant, InvariantKind};
use winding_search::node::SearchNode;
use winding_search::path::Path;
use winding_search::policy::SearchPolicy;
use winding_search::search::{astar, dijkstra, dijkstra_within_budget, DijkstraTable, SearchResult};
use winding_search::SearchError;

use crate::augmented::AugmentedNode;
use crate::goal::HomotopyGoal;

/// Heuristic used by [`plan`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Uniform-cost search. Always exact.
    #[default]
    Zero,
    /// Straight-line distance to the goal vertex. Exact only when every edge
    /// costs at least the distance between its endpoints.
    Euclidean,
}

/// Straight-line distance from a state's vertex to `target`, or 0 when
/// either position is unknown.
pub fn euclidean_heuristic<'g>(
    graph: &'g Graph,
    target: VertexId,
) -> impl Fn(&AugmentedNode<'g>) -> f64 + 'g {
    let goal = graph.vertex(target).map(|v| v.position());
    move |state: &AugmentedNode<'g>| match (state.position(), goal) {
        (Some(here), Some(there)) => here.distance(there),
        _ => 0.0,
    }
}

/// A planned route: the vertex sequence, its positions, the invariant of
/// the whole route and its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct HomotopyPath {
    pub vertices: Vec<VertexId>,
    pub waypoints: Vec<Point2>,
    pub invariant: Invariant,
    pub cost: f64,
}

impl HomotopyPath {
    /// Extract the route from a reconstructed path of any shape. `None` for
    /// an empty path.
    #[must_use]
    pub fn from_path(path: &Path<AugmentedNode<'_>>, cost: f64) -> Option<Self> {
        let mut states: Vec<&AugmentedNode<'_>> = path.nodes().collect();
        if states.is_empty() {
            let mut edges = path.edges();
            let first = edges.next()?;
            states.push(&first.from);
            states.push(&first.to);
            states.extend(edges.map(|edge| &edge.to));
        }
        let last = states.last()?;
        Some(Self {
            vertices: states.iter().map(|state| state.vertex()).collect(),
            waypoints: states.iter().filter_map(|state| state.position()).collect(),
            invariant: last.invariant().clone(),
            cost,
        })
    }

    /// Final vertex of the route.
    #[must_use]
    pub fn end(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }
}

/// A* from `start` to the first state satisfying `goal`.
///
/// # Errors
///
/// [`SearchError::Bounds`] if the goal vertex is not in the graph, and any
/// driver or goal fault (for example a masked goal against a reduced-word
/// start).
pub fn plan<'g>(
    start: AugmentedNode<'g>,
    goal: &HomotopyGoal,
    heuristic: Heuristic,
    policy: &SearchPolicy,
) -> Result<SearchResult<AugmentedNode<'g>>, SearchError> {
    let graph = start.graph();
    graph.try_vertex(goal.vertex)?;
    match heuristic {
        Heuristic::Zero => astar(start, goal, |_| 0.0, policy),
        Heuristic::Euclidean => astar(start, goal, euclidean_heuristic(graph, goal.vertex), policy),
    }
}

/// The cheapest route into `target` for every invariant class reachable
/// within `budget`, cheapest first.
///
/// # Errors
///
/// [`SearchError::Bounds`] for an unknown target vertex, and
/// [`SearchError::Configuration`] for an invalid policy or budget.
pub fn enumerate_classes(
    start: AugmentedNode<'_>,
    target: VertexId,
    budget: f64,
    policy: &SearchPolicy,
) -> Result<Vec<HomotopyPath>, SearchError> {
    start.graph().try_vertex(target)?;
    let table = dijkstra_within_budget(start, budget, policy)?;
    let mut classes = Vec::new();
    for node in classes_at(&table, target) {
        if let Some(path) = table.path_to(&node.state)? {
            classes.extend(HomotopyPath::from_path(&path, node.g_cost));
        }
    }
    tracing::debug!(vertex = %target, budget, classes = classes.len(), "enumerated classes");
    Ok(classes)
}

/// Optimal cost of every (vertex, invariant) state reachable from `start`.
///
/// # Errors
///
/// [`SearchError::Configuration`] for an invalid policy, or for a
/// reduced-word start without `max_expansions`: the word space is not
/// finite in general.
pub fn class_table<'g>(
    start: AugmentedNode<'g>,
    policy: &SearchPolicy,
) -> Result<DijkstraTable<AugmentedNode<'g>>, SearchError> {
    if start.invariant().kind() == InvariantKind::Word && policy.max_expansions.is_none() {
        return Err(SearchError::Configuration {
            detail: "a reduced-word class table needs max_expansions".into(),
        });
    }
    dijkstra(start, policy)
}

/// Settled states of `table` located at `vertex`, cheapest first.
pub fn classes_at<'a, 'g>(
    table: &'a DijkstraTable<AugmentedNode<'g>>,
    vertex: VertexId,
) -> impl Iterator<Item = &'a SearchNode<AugmentedNode<'g>>> + 'a {
    table.iter().filter(move |node| node.state.vertex() == vertex)
}
