//! Reconstructed paths.

/// The step between two consecutive states of a path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEdge<S> {
    pub from: S,
    pub to: S,
    /// Incremental cost of the step.
    pub cost: f64,
    /// Position of the step in `from`'s successor list.
    pub transition_index: usize,
}

/// One element of a reconstructed path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathElement<S> {
    Node(S),
    Edge(PathEdge<S>),
}

/// A root-to-leaf sequence of states, steps, or both interleaved, in the
/// shape the [`crate::policy::SearchPolicy`] requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<S> {
    elements: Vec<PathElement<S>>,
}

impl<S> Path<S> {
    /// The empty path returned on exhaustion.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_elements(elements: Vec<PathElement<S>>) -> Self {
        Self { elements }
    }

    #[must_use]
    pub fn elements(&self) -> &[PathElement<S>] {
        &self.elements
    }

    /// The node elements, in order.
    pub fn nodes(&self) -> impl Iterator<Item = &S> {
        self.elements.iter().filter_map(|element| match element {
            PathElement::Node(state) => Some(state),
            PathElement::Edge(_) => None,
        })
    }

    /// The edge elements, in order.
    pub fn edges(&self) -> impl Iterator<Item = &PathEdge<S>> {
        self.elements.iter().filter_map(|element| match element {
            PathElement::Edge(edge) => Some(edge),
            PathElement::Node(_) => None,
        })
    }

    /// The state the path ends in, whichever shape it has.
    #[must_use]
    pub fn last_state(&self) -> Option<&S> {
        self.elements.last().map(|element| match element {
            PathElement::Node(state) => state,
            PathElement::Edge(edge) => &edge.to,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<S> Default for Path<S> {
    fn default() -> Self {
        Self::empty()
    }
}
