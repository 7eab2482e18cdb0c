//! Directed, weighted roadmap graph.
//!
//! Vertices live in one arena and are addressed by [`VertexId`]; edges hold
//! ids rather than references, so the graph has no interior ownership and
//! can be shared read-only by any number of concurrent searches.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geometry::{FeatureSet, Point2};
use crate::invariant::EdgeFragment;

/// Arena index of a vertex. Also its unique identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Roadmap construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {id} is not in the graph")]
    UnknownVertex { id: VertexId },
}

/// A directed, weighted edge.
///
/// The reverse connection is a separate edge and is the caller's to add.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    cost: f64,
    fragment: EdgeFragment,
}

impl Edge {
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    #[must_use]
    pub fn target(&self) -> VertexId {
        self.target
    }

    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Invariant contribution of traversing this edge. Empty until the
    /// graph has a feature set.
    #[must_use]
    pub fn fragment(&self) -> &EdgeFragment {
        &self.fragment
    }
}

/// A roadmap vertex: identity, position, and outgoing edges in insertion
/// order.
///
/// Equality and hashing use the id only.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    position: Point2,
    edges: Vec<Edge>,
}

impl Vertex {
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Point2 {
        self.position
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// The roadmap.
///
/// Built once by the caller, then only read. Once a [`FeatureSet`] is
/// attached with [`Graph::annotate`], every edge (including edges added
/// later) carries its precomputed [`EdgeFragment`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    features: Option<FeatureSet>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex at `position`; ids are assigned densely from zero.
    pub fn add_vertex(&mut self, position: Point2) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            id,
            position,
            edges: Vec::new(),
        });
        id
    }

    /// Append a directed edge to `source`'s edge list.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if either endpoint is missing.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        cost: f64,
    ) -> Result<(), GraphError> {
        let target_pos = self.try_vertex(target)?.position;
        let source_pos = self.try_vertex(source)?.position;
        let fragment = self
            .features
            .as_ref()
            .map(|features| EdgeFragment::compute(source_pos, target_pos, features))
            .unwrap_or_default();
        self.vertices[source.index()].edges.push(Edge {
            source,
            target,
            cost,
            fragment,
        });
        Ok(())
    }

    /// Add `a -> b` and `b -> a` with the same cost.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if either endpoint is missing.
    pub fn connect(&mut self, a: VertexId, b: VertexId, cost: f64) -> Result<(), GraphError> {
        self.try_vertex(b)?;
        self.add_edge(a, b, cost)?;
        self.add_edge(b, a, cost)
    }

    /// Attach the feature set and recompute every edge fragment.
    pub fn annotate(&mut self, features: FeatureSet) {
        let positions: Vec<Point2> = self.vertices.iter().map(|v| v.position).collect();
        let mut crossing_edges = 0usize;
        for vertex in &mut self.vertices {
            for edge in &mut vertex.edges {
                edge.fragment = EdgeFragment::compute(
                    positions[edge.source.index()],
                    positions[edge.target.index()],
                    &features,
                );
                if !edge.fragment.is_empty() {
                    crossing_edges += 1;
                }
            }
        }
        tracing::debug!(
            features = features.len(),
            vertices = self.vertices.len(),
            crossing_edges,
            "annotated roadmap edges with invariant fragments"
        );
        self.features = Some(features);
    }

    #[must_use]
    pub fn features(&self) -> Option<&FeatureSet> {
        self.features.as_ref()
    }

    /// Invariant dimension: the number of attached features.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.features.as_ref().map_or(0, FeatureSet::len)
    }

    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if `id` is missing.
    pub fn try_vertex(&self, id: VertexId) -> Result<&Vertex, GraphError> {
        self.vertex(id).ok_or(GraphError::UnknownVertex { id })
    }

    /// Outgoing edges of `id` in insertion order; empty for unknown ids.
    #[must_use]
    pub fn edges(&self, id: VertexId) -> &[Edge] {
        self.vertex(id).map_or(&[][..], Vertex::edges)
    }

    /// The `index`-th outgoing edge of `source`.
    #[must_use]
    pub fn edge(&self, source: VertexId, index: usize) -> Option<&Edge> {
        self.edges(source).get(index)
    }

    /// First edge from `from` to `to`, if connected.
    #[must_use]
    pub fn find_edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.edges(from).iter().find(|e| e.target == to)
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
