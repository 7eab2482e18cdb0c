//! Plain graph vertices as search states.

use std::fmt;
use std::hash::{Hash, Hasher};

use winding_kernel::graph::{Graph, GraphError, Vertex, VertexId};

use crate::contract::{State, Transition};

/// A vertex of a borrowed [`Graph`], searched without any invariant.
///
/// Equality and hashing use the vertex id only.
#[derive(Clone, Copy)]
pub struct VertexState<'g> {
    graph: &'g Graph,
    id: VertexId,
}

impl<'g> VertexState<'g> {
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if `id` is not in `graph`.
    pub fn new(graph: &'g Graph, id: VertexId) -> Result<Self, GraphError> {
        graph.try_vertex(id)?;
        Ok(Self { graph, id })
    }

    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[must_use]
    pub fn vertex(&self) -> Option<&'g Vertex> {
        self.graph.vertex(self.id)
    }

    #[must_use]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }
}

impl PartialEq for VertexState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for VertexState<'_> {}

impl Hash for VertexState<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for VertexState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VertexState").field(&self.id).finish()
    }
}

impl State for VertexState<'_> {
    fn successors(&self) -> Vec<Transition<Self>> {
        self.graph
            .edges(self.id)
            .iter()
            .map(|edge| {
                Transition::new(
                    Self {
                        graph: self.graph,
                        id: edge.target(),
                    },
                    edge.cost(),
                )
            })
            .collect()
    }

    fn label(&self) -> String {
        self.id.to_string()
    }
}
