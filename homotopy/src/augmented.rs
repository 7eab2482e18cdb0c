//! Augmented search states: a graph vertex paired with the topological
//! invariant of the route that reached it.
//!
//! Equality folds the invariant into the key, so the generic drivers keep
//! one explored entry per (vertex, class) instead of one per vertex.

use std::cell::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use winding_kernel::geometry::Point2;
use winding_kernel::graph::{Edge, Graph, VertexId};
use winding_kernel::invariant::Invariant;
use winding_search::contract::{State, Transition};
use winding_search::error::SearchError;

/// How augmented states expand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionMode {
    /// Follow every edge whose invariant transition is valid.
    #[default]
    AllowRevisit,
    /// Additionally refuse edges back to a vertex already on this state's
    /// own route from the root.
    NoBacktrack,
}

/// The edge that produced a state: the `index`-th outgoing edge of `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    pub source: VertexId,
    pub index: usize,
}

impl EdgeRef {
    #[must_use]
    pub fn resolve<'g>(&self, graph: &'g Graph) -> Option<&'g Edge> {
        graph.edge(self.source, self.index)
    }
}

/// Upward-only list of the vertices on a route.
#[derive(Debug)]
struct Trail {
    vertex: VertexId,
    parent: Option<Rc<Trail>>,
}

impl Trail {
    fn contains(&self, vertex: VertexId) -> bool {
        let mut cursor = Some(self);
        while let Some(link) = cursor {
            if link.vertex == vertex {
                return true;
            }
            cursor = link.parent.as_deref();
        }
        false
    }
}

/// A vertex of a borrowed [`Graph`] plus the invariant accumulated on the
/// route to it.
///
/// Two states are equal when vertex and invariant match and their roots
/// match or either root is unset. Hashing covers vertex and invariant only,
/// which keeps it consistent with that equality.
pub struct AugmentedNode<'g> {
    graph: &'g Graph,
    vertex: VertexId,
    invariant: Invariant,
    parent_edge: Option<EdgeRef>,
    root: Option<VertexId>,
    mode: ExpansionMode,
    trail: Option<Rc<Trail>>,
    expansion: OnceCell<Vec<Transition<AugmentedNode<'g>>>>,
}

impl<'g> AugmentedNode<'g> {
    /// A search root at `vertex` carrying `invariant`.
    ///
    /// # Errors
    ///
    /// [`SearchError::Bounds`] if `vertex` is not in `graph` or a crossing
    /// vector's dimension differs from the graph's feature count.
    pub fn root(graph: &'g Graph, vertex: VertexId, invariant: Invariant) -> Result<Self, SearchError> {
        let mut node = Self::new(graph, vertex, invariant)?;
        node.root = Some(vertex);
        Ok(node)
    }

    /// A rootless state, equal to any state with the same vertex and
    /// invariant. Used to name a target state exactly.
    ///
    /// # Errors
    ///
    /// Same as [`AugmentedNode::root`].
    pub fn new(graph: &'g Graph, vertex: VertexId, invariant: Invariant) -> Result<Self, SearchError> {
        graph.try_vertex(vertex)?;
        invariant.check_dimension(graph.dimension())?;
        Ok(Self {
            graph,
            vertex,
            invariant,
            parent_edge: None,
            root: None,
            mode: ExpansionMode::default(),
            trail: None,
            expansion: OnceCell::new(),
        })
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ExpansionMode) -> Self {
        self.mode = mode;
        self.trail = match mode {
            ExpansionMode::AllowRevisit => None,
            ExpansionMode::NoBacktrack => Some(Rc::new(Trail {
                vertex: self.vertex,
                parent: None,
            })),
        };
        self.expansion = OnceCell::new();
        self
    }

    #[must_use]
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    #[must_use]
    pub fn invariant(&self) -> &Invariant {
        &self.invariant
    }

    #[must_use]
    pub fn root_vertex(&self) -> Option<VertexId> {
        self.root
    }

    #[must_use]
    pub fn parent_edge(&self) -> Option<EdgeRef> {
        self.parent_edge
    }

    #[must_use]
    pub fn mode(&self) -> ExpansionMode {
        self.mode
    }

    #[must_use]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Position of the underlying vertex.
    #[must_use]
    pub fn position(&self) -> Option<Point2> {
        self.graph.vertex(self.vertex).map(|v| v.position())
    }

    /// Whether this value has already computed its successors.
    ///
    /// The cache belongs to the value: a clone starts empty. The drivers
    /// expand the copy stored in their arena, so every expanded node of a
    /// returned search tree answers `true`.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expansion.get().is_some()
    }

    fn expand(&self) -> Vec<Transition<Self>> {
        let edges = self.graph.edges(self.vertex);
        let mut transitions = Vec::with_capacity(edges.len());
        let mut rejected = 0_usize;
        for (index, edge) in edges.iter().enumerate() {
            let target = edge.target();
            if self.trail.as_ref().is_some_and(|trail| trail.contains(target)) {
                rejected += 1;
                continue;
            }
            let mut invariant = self.invariant.clone();
            if !invariant.edge_cross(edge.fragment()) {
                rejected += 1;
                continue;
            }
            let trail = self.trail.as_ref().map(|trail| {
                Rc::new(Trail {
                    vertex: target,
                    parent: Some(Rc::clone(trail)),
                })
            });
            let child = Self {
                graph: self.graph,
                vertex: target,
                invariant,
                parent_edge: Some(EdgeRef {
                    source: self.vertex,
                    index,
                }),
                root: self.root,
                mode: self.mode,
                trail,
                expansion: OnceCell::new(),
            };
            transitions.push(Transition::new(child, edge.cost()));
        }
        tracing::trace!(
            vertex = %self.vertex,
            invariant = %self.invariant,
            valid = transitions.len(),
            rejected,
            "augmented expansion"
        );
        transitions
    }
}

impl Clone for AugmentedNode<'_> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            vertex: self.vertex,
            invariant: self.invariant.clone(),
            parent_edge: self.parent_edge,
            root: self.root,
            mode: self.mode,
            trail: self.trail.clone(),
            // Successors are recomputed on demand.
            expansion: OnceCell::new(),
        }
    }
}

impl PartialEq for AugmentedNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        let roots_agree = match (self.root, other.root) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        };
        self.vertex == other.vertex && self.invariant == other.invariant && roots_agree
    }
}

impl Eq for AugmentedNode<'_> {}

impl Hash for AugmentedNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertex.hash(state);
        self.invariant.hash(state);
    }
}

impl fmt::Debug for AugmentedNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AugmentedNode")
            .field("vertex", &self.vertex)
            .field("invariant", &self.invariant)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for AugmentedNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vertex, self.invariant)
    }
}

impl State for AugmentedNode<'_> {
    fn successors(&self) -> Vec<Transition<Self>> {
        self.expansion.get_or_init(|| self.expand()).clone()
    }

    fn label(&self) -> String {
        self.to_string()
    }
}
