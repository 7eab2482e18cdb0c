//! Roadmaps shared by the lock tests and the report fixture binary.

use winding_kernel::geometry::{FeatureSet, Point2};
use winding_kernel::graph::{Graph, VertexId};

/// Directed edges of the seven-vertex optimality graph.
pub const SEVEN_VERTEX_EDGES: [(usize, usize, f64); 7] = [
    (0, 1, 5.0),
    (0, 2, 2.7),
    (0, 3, 8.4),
    (0, 6, 34.4),
    (2, 4, 11.4),
    (1, 5, 1.2),
    (4, 6, 2.2),
];

/// Seven vertices on a line, no features. Cheapest 0 -> 6 route is
/// `[0, 2, 4, 6]` at 16.3.
///
/// # Panics
///
/// Never: every edge names an existing vertex.
#[must_use]
pub fn seven_vertex_graph() -> Graph {
    let mut graph = Graph::new();
    for i in 0..7_u32 {
        graph.add_vertex(Point2::new(f64::from(i), 0.0));
    }
    for (a, b, cost) in SEVEN_VERTEX_EDGES {
        graph
            .add_edge(VertexId(a), VertexId(b), cost)
            .unwrap_or_else(|e| panic!("fixture edge {a}->{b}: {e}"));
    }
    graph
}

/// Unit square around one feature at the origin, both directions on every
/// side. The reference ray points up, so only the top side crosses it:
/// `v3 -> v2` adds +1, `v2 -> v3` adds -1.
///
/// ```text
/// v3 ---5--- v2
///  |    *    |
///  5         1
///  |         |
/// v0 ---1--- v1
/// ```
///
/// # Panics
///
/// Never: every edge names an existing vertex.
#[must_use]
pub fn ring() -> Graph {
    let mut graph = Graph::new();
    let v0 = graph.add_vertex(Point2::new(-1.0, -1.0));
    let v1 = graph.add_vertex(Point2::new(1.0, -1.0));
    let v2 = graph.add_vertex(Point2::new(1.0, 1.0));
    let v3 = graph.add_vertex(Point2::new(-1.0, 1.0));
    graph.annotate(FeatureSet::new(vec![Point2::new(0.0, 0.0)]));
    for (a, b, cost) in [(v0, v1, 1.0), (v1, v2, 1.0), (v2, v3, 5.0), (v3, v0, 5.0)] {
        graph
            .connect(a, b, cost)
            .unwrap_or_else(|e| panic!("fixture edge {a}-{b}: {e}"));
    }
    graph
}

/// `n x n` grid with unit spacing and both-direction edges costing the
/// Euclidean length, with `features` point obstacles placed at cell
/// centres along the diagonal.
///
/// # Panics
///
/// Never: every edge names an existing vertex.
#[must_use]
pub fn grid(n: usize, features: usize) -> Graph {
    let mut graph = Graph::new();
    let coord = |i: usize| f64::from(u32::try_from(i).unwrap_or(u32::MAX));
    let obstacles = (0..features)
        .map(|k| {
            let cell = (k + 1) * n / (features + 1);
            Point2::new(coord(cell) + 0.5, coord(cell) + 0.5)
        })
        .collect();
    graph.annotate(FeatureSet::new(obstacles));
    for row in 0..n {
        for col in 0..n {
            graph.add_vertex(Point2::new(coord(col), coord(row)));
        }
    }
    for row in 0..n {
        for col in 0..n {
            let here = VertexId(row * n + col);
            if col + 1 < n {
                graph
                    .connect(here, VertexId(row * n + col + 1), 1.0)
                    .unwrap_or_else(|e| panic!("grid edge: {e}"));
            }
            if row + 1 < n {
                graph
                    .connect(here, VertexId((row + 1) * n + col), 1.0)
                    .unwrap_or_else(|e| panic!("grid edge: {e}"));
            }
        }
    }
    graph
}
