//! Per-edge invariant fragments computed from ray-segment intersections.

use crate::geometry::{ray_crossing, FeatureSet, Point2};

use super::word::{feature_symbol, Symbol};

/// What traversing one edge contributes to an invariant, in both
/// representations.
///
/// `crossings[i]` is the signed crossing of feature `i`'s ray. `word` lists
/// the same crossings as symbols, ordered by where along the edge they occur.
/// A default fragment crosses nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeFragment {
    crossings: Vec<i8>,
    word: Vec<Symbol>,
}

impl EdgeFragment {
    /// Intersect segment `a -> b` with every feature's reference ray.
    #[must_use]
    pub fn compute(a: Point2, b: Point2, features: &FeatureSet) -> Self {
        let direction = b - a;
        let mut crossings = vec![0; features.len()];
        let mut hits: Vec<(f64, Symbol)> = Vec::new();

        for (index, &feature) in features.points().iter().enumerate() {
            let sign = ray_crossing(a, b, feature, features.ray_angle());
            crossings[index] = sign;
            if let Some(symbol) = feature_symbol(index, sign) {
                hits.push((feature.dot(direction), symbol));
            }
        }

        // Projection onto the edge direction recovers crossing order.
        hits.sort_by(|x, y| x.0.total_cmp(&y.0).then(x.1.cmp(&y.1)));

        Self {
            crossings,
            word: hits.into_iter().map(|(_, symbol)| symbol).collect(),
        }
    }

    /// Assemble a fragment directly, for roadmaps that compute crossings
    /// themselves.
    #[must_use]
    pub fn from_parts(crossings: Vec<i8>, word: Vec<Symbol>) -> Self {
        Self { crossings, word }
    }

    #[must_use]
    pub fn crossings(&self) -> &[i8] {
        &self.crossings
    }

    #[must_use]
    pub fn word(&self) -> &[Symbol] {
        &self.word
    }

    /// True if the edge crosses no reference ray.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty() && self.crossings.iter().all(|&c| c == 0)
    }
}
