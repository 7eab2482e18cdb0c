//! Shared roadmaps for the winding benchmark suites.

use winding_kernel::geometry::{FeatureSet, Point2};
use winding_kernel::graph::{Graph, VertexId};

fn coord(i: usize) -> f64 {
    f64::from(u32::try_from(i).unwrap_or(u32::MAX))
}

/// `n x n` unit grid, four-connected in both directions, with `features`
/// point features spread along the diagonal at cell centres.
///
/// # Panics
///
/// Never: every edge names an existing vertex.
#[must_use]
pub fn grid_roadmap(n: usize, features: usize) -> Graph {
    let mut graph = Graph::new();
    let points = (0..features)
        .map(|k| {
            let cell = (k + 1) * n / (features + 1);
            Point2::new(coord(cell) + 0.5, coord(cell) + 0.5)
        })
        .collect();
    graph.annotate(FeatureSet::new(points));
    for row in 0..n {
        for col in 0..n {
            graph.add_vertex(Point2::new(coord(col), coord(row)));
        }
    }
    for row in 0..n {
        for col in 0..n {
            let here = VertexId(row * n + col);
            let mut link = |there: usize| {
                graph
                    .connect(here, VertexId(there), 1.0)
                    .unwrap_or_else(|e| panic!("grid edge: {e}"));
            };
            if col + 1 < n {
                link(row * n + col + 1);
            }
            if row + 1 < n {
                link((row + 1) * n + col);
            }
        }
    }
    graph
}

/// Corner-to-corner vertex pair of an `n x n` grid.
#[must_use]
pub fn corners(n: usize) -> (VertexId, VertexId) {
    (VertexId(0), VertexId(n * n - 1))
}

/// `count` features on a horizontal line through the plane.
#[must_use]
pub fn feature_row(count: usize) -> FeatureSet {
    FeatureSet::new((0..count).map(|i| Point2::new(coord(i), 0.0)).collect())
}
