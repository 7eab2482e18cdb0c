//! Search drivers: A*, Dijkstra and budgeted enumeration.
//!
//! All three share one shape: a per-call [`SearchTree`] arena, an explored
//! set keyed by state equality, and lazy deletion of stale frontier entries.
//! An explored state is never reopened, which is exact for nonnegative step
//! costs and a consistent heuristic.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::contract::{GoalPredicate, State};
use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::node::SearchNode;
use crate::path::Path;
use crate::policy::SearchPolicy;
use crate::tree::SearchTree;

/// Why a driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Termination {
    /// The goal predicate held for this arena node.
    GoalReached { node_id: usize },
    /// Nothing left to expand.
    FrontierExhausted,
    /// `SearchPolicy::max_expansions` stopped the search early.
    ExpansionBudgetExceeded,
}

/// Counters collected by every driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expansions: u64,
    /// Search states appended to the arena (root excluded).
    pub generated: u64,
    /// Successors dropped because their state was already explored.
    pub duplicates_suppressed: u64,
    /// Frontier entries discarded on pop because their state was explored.
    pub stale_pops: u64,
    /// Successors dropped for exceeding an enumeration budget.
    pub over_budget: u64,
    /// Peak frontier size.
    pub frontier_high_water: u64,
}

/// Outcome of an [`astar`] call.
///
/// A failed search is not an error: it has an empty path, infinite cost and
/// a termination other than [`Termination::GoalReached`].
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    pub path: Path<S>,
    /// Real cost of the path, `f64::INFINITY` when no goal was reached.
    pub cost: f64,
    pub termination: Termination,
    /// Every search state created during the call.
    pub tree: SearchTree<S>,
    pub stats: SearchStats,
}

impl<S: Clone> SearchResult<S> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, Termination::GoalReached { .. })
    }

    /// The search state the goal test accepted.
    #[must_use]
    pub fn goal_node(&self) -> Option<&SearchNode<S>> {
        match self.termination {
            Termination::GoalReached { node_id } => self.tree.nodes().get(node_id),
            Termination::FrontierExhausted | Termination::ExpansionBudgetExceeded => None,
        }
    }
}

/// Best-first search from `start` to the first state `goal` accepts.
///
/// Frontier priority is `g + heuristic(state)`. The goal is tested when a
/// state is popped, so the returned path is optimal under an admissible,
/// consistent heuristic and nonnegative costs. A
/// [`HeapOrder::Max`](crate::policy::HeapOrder::Max) policy pops the highest
/// priority first instead, and the result is then only the first goal
/// reached in that order.
///
/// # Errors
///
/// [`SearchError::Configuration`] for an invalid policy, and any error the
/// goal predicate returns. Exhaustion is reported through the result.
pub fn astar<S, G, H>(
    start: S,
    goal: &G,
    heuristic: H,
    policy: &SearchPolicy,
) -> Result<SearchResult<S>, SearchError>
where
    S: State,
    G: GoalPredicate<S> + ?Sized,
    H: Fn(&S) -> f64,
{
    let span = tracing::debug_span!("astar");
    let _enter = span.enter();
    policy.validate()?;

    let mut tree = SearchTree::new();
    let mut frontier = BestFirstFrontier::new(policy.heap_order);
    let mut explored: HashSet<S> = HashSet::new();
    let mut stats = SearchStats::default();

    let h_start = heuristic(&start);
    tracing::debug!(start = %start.label(), h = h_start, "search started");
    let root = tree.push_root(start, h_start);
    frontier.push(h_start, 0, root);

    let termination = loop {
        let Some(node_id) = frontier.pop() else {
            break Termination::FrontierExhausted;
        };
        let node = tree.get(node_id)?;
        if explored.contains(&node.state) {
            stats.stale_pops += 1;
            continue;
        }
        if goal.is_goal(&node.state)? {
            break Termination::GoalReached { node_id };
        }
        if policy.budget_exhausted(stats.expansions) {
            tracing::warn!(
                expansions = stats.expansions,
                "expansion budget exhausted before reaching the goal"
            );
            break Termination::ExpansionBudgetExceeded;
        }

        // Expand the arena copy so the returned tree keeps its successors.
        let successors = node.state.successors();
        let state = node.state.clone();
        explored.insert(state.clone());
        tree.mark_expanded(node_id, stats.expansions)?;
        stats.expansions += 1;

        tracing::trace!(node = node_id, state = %state.label(), successors = successors.len(), "expand");
        for (index, transition) in successors.into_iter().enumerate() {
            if explored.contains(&transition.state) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let h = heuristic(&transition.state);
            let child = tree.push_child(node_id, index, transition.state, transition.cost, h)?;
            let child_node = tree.get(child)?;
            frontier.push(child_node.f_cost(), child_node.depth, child);
            stats.generated += 1;
        }
    };
    stats.frontier_high_water = frontier.high_water();

    let (path, cost) = match termination {
        Termination::GoalReached { node_id } => (tree.path(node_id, policy)?, tree.get(node_id)?.g_cost),
        Termination::FrontierExhausted | Termination::ExpansionBudgetExceeded => {
            (Path::empty(), f64::INFINITY)
        }
    };
    tracing::debug!(
        ?termination,
        cost,
        expansions = stats.expansions,
        generated = stats.generated,
        duplicates_suppressed = stats.duplicates_suppressed,
        frontier_high_water = stats.frontier_high_water,
        "search finished"
    );

    Ok(SearchResult {
        path,
        cost,
        termination,
        tree,
        stats,
    })
}

/// Optimal search state for every state reachable from one start.
#[derive(Debug, Clone)]
pub struct DijkstraTable<S> {
    tree: SearchTree<S>,
    index: HashMap<S, usize>,
    settled: Vec<usize>,
    policy: SearchPolicy,
    termination: Termination,
    stats: SearchStats,
}

impl<S: State> DijkstraTable<S> {
    /// The settled search state for `state`.
    #[must_use]
    pub fn get(&self, state: &S) -> Option<&SearchNode<S>> {
        self.index
            .get(state)
            .and_then(|&node_id| self.tree.nodes().get(node_id))
    }

    /// Optimal cost to `state`, `None` if it was never reached.
    #[must_use]
    pub fn cost(&self, state: &S) -> Option<f64> {
        self.get(state).map(|node| node.g_cost)
    }

    /// Optimal path to `state`, in the shape of the policy the table was
    /// built with.
    ///
    /// # Errors
    ///
    /// Propagates arena faults from path reconstruction.
    pub fn path_to(&self, state: &S) -> Result<Option<Path<S>>, SearchError> {
        self.index
            .get(state)
            .map(|&node_id| self.tree.path(node_id, &self.policy))
            .transpose()
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// Settled search states in settle order (nondecreasing cost).
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S>> {
        self.settled
            .iter()
            .filter_map(|&node_id| self.tree.nodes().get(node_id))
    }

    #[must_use]
    pub fn tree(&self) -> &SearchTree<S> {
        &self.tree
    }

    #[must_use]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.settled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settled.is_empty()
    }
}

/// Uniform-cost search from `start` until the frontier is empty.
///
/// # Errors
///
/// [`SearchError::Configuration`] for an invalid policy, including a
/// [`HeapOrder::Max`](crate::policy::HeapOrder::Max) frontier.
pub fn dijkstra<S: State>(start: S, policy: &SearchPolicy) -> Result<DijkstraTable<S>, SearchError> {
    let span = tracing::debug_span!("dijkstra");
    let _enter = span.enter();
    settle(start, f64::INFINITY, policy)
}

/// Uniform-cost search that settles only states with cost at most
/// `budget`. The first popped state over the ceiling ends the search.
///
/// # Errors
///
/// [`SearchError::Configuration`] for an invalid policy (including a
/// [`HeapOrder::Max`](crate::policy::HeapOrder::Max) frontier) or a negative
/// or NaN budget.
pub fn dijkstra_within_budget<S: State>(
    start: S,
    budget: f64,
    policy: &SearchPolicy,
) -> Result<DijkstraTable<S>, SearchError> {
    let span = tracing::debug_span!("dijkstra_within_budget", budget);
    let _enter = span.enter();
    check_budget(budget)?;
    settle(start, budget, policy)
}

fn check_budget(budget: f64) -> Result<(), SearchError> {
    if budget.is_nan() || budget < 0.0 {
        return Err(SearchError::Configuration {
            detail: format!("cost budget must be a nonnegative number, got {budget}"),
        });
    }
    Ok(())
}

fn settle<S: State>(start: S, budget: f64, policy: &SearchPolicy) -> Result<DijkstraTable<S>, SearchError> {
    policy.validate()?;
    policy.require_min_order("dijkstra")?;

    let mut tree = SearchTree::new();
    let mut frontier = BestFirstFrontier::new(policy.heap_order);
    let mut index: HashMap<S, usize> = HashMap::new();
    let mut settled = Vec::new();
    let mut stats = SearchStats::default();

    tracing::debug!(start = %start.label(), "search started");
    let root = tree.push_root(start, 0.0);
    frontier.push(0.0, 0, root);

    let termination = loop {
        let Some(node_id) = frontier.pop() else {
            break Termination::FrontierExhausted;
        };
        let node = tree.get(node_id)?;
        if index.contains_key(&node.state) {
            stats.stale_pops += 1;
            continue;
        }
        if node.g_cost > budget {
            // Everything left on the frontier costs at least this much.
            break Termination::FrontierExhausted;
        }
        if policy.budget_exhausted(stats.expansions) {
            tracing::warn!(
                expansions = stats.expansions,
                settled = settled.len(),
                "expansion budget exhausted, table is partial"
            );
            break Termination::ExpansionBudgetExceeded;
        }

        let successors = node.state.successors();
        let state = node.state.clone();
        index.insert(state.clone(), node_id);
        settled.push(node_id);
        tree.mark_expanded(node_id, stats.expansions)?;
        stats.expansions += 1;

        tracing::trace!(node = node_id, state = %state.label(), successors = successors.len(), "expand");
        for (position, transition) in successors.into_iter().enumerate() {
            if index.contains_key(&transition.state) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let child = tree.push_child(node_id, position, transition.state, transition.cost, 0.0)?;
            let child_node = tree.get(child)?;
            frontier.push(child_node.g_cost, child_node.depth, child);
            stats.generated += 1;
        }
    };
    stats.frontier_high_water = frontier.high_water();
    tracing::debug!(
        ?termination,
        settled = settled.len(),
        expansions = stats.expansions,
        generated = stats.generated,
        duplicates_suppressed = stats.duplicates_suppressed,
        frontier_high_water = stats.frontier_high_water,
        "search finished"
    );

    Ok(DijkstraTable {
        tree,
        index,
        settled,
        policy: policy.clone(),
        termination,
        stats,
    })
}

/// Breadth-first enumeration of every qualifying state within `budget`.
///
/// No transition that would push the accumulated cost past `budget` is
/// followed. A state is collected when `predicate` holds and either its cost
/// has reached `budget` or none of its successors was enqueued (it is a leaf
/// of the explored region). Results come in FIFO discovery order.
///
/// # Errors
///
/// [`SearchError::Configuration`] for an invalid policy or a negative or NaN
/// budget, and any error the predicate returns.
pub fn enumerate_within_budget<S, P>(
    start: S,
    budget: f64,
    predicate: &P,
    policy: &SearchPolicy,
) -> Result<Vec<(Path<S>, f64)>, SearchError>
where
    S: State,
    P: GoalPredicate<S> + ?Sized,
{
    let span = tracing::debug_span!("enumerate_within_budget", budget);
    let _enter = span.enter();
    policy.validate()?;
    check_budget(budget)?;

    let mut tree = SearchTree::new();
    let mut queue = VecDeque::new();
    let mut explored: HashSet<S> = HashSet::new();
    let mut stats = SearchStats::default();
    let mut results = Vec::new();

    tracing::debug!(start = %start.label(), "enumeration started");
    queue.push_back(tree.push_root(start, 0.0));

    while let Some(node_id) = queue.pop_front() {
        let node = tree.get(node_id)?;
        if explored.contains(&node.state) {
            stats.stale_pops += 1;
            continue;
        }
        if policy.budget_exhausted(stats.expansions) {
            tracing::warn!(
                expansions = stats.expansions,
                collected = results.len(),
                "expansion budget exhausted, enumeration is partial"
            );
            break;
        }

        let successors = node.state.successors();
        let state = node.state.clone();
        let g_cost = node.g_cost;
        explored.insert(state.clone());
        tree.mark_expanded(node_id, stats.expansions)?;
        stats.expansions += 1;

        let mut enqueued = 0_usize;
        for (position, transition) in successors.into_iter().enumerate() {
            if explored.contains(&transition.state) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            if g_cost + transition.cost > budget {
                stats.over_budget += 1;
                continue;
            }
            let child = tree.push_child(node_id, position, transition.state, transition.cost, 0.0)?;
            queue.push_back(child);
            stats.generated += 1;
            enqueued += 1;
        }
        stats.frontier_high_water = stats.frontier_high_water.max(queue.len() as u64);
        tracing::trace!(node = node_id, state = %state.label(), enqueued, "expand");

        if (g_cost >= budget || enqueued == 0) && predicate.is_goal(&state)? {
            results.push((tree.path(node_id, policy)?, g_cost));
        }
    }

    tracing::debug!(
        collected = results.len(),
        expansions = stats.expansions,
        generated = stats.generated,
        over_budget = stats.over_budget,
        "enumeration finished"
    );
    Ok(results)
}
