//! Planar points, feature reference rays, and ray-segment crossing tests.

use std::f64::consts::FRAC_PI_2;
use std::ops::{Add, Neg, Sub};

/// Default reference-ray direction: straight up (+y).
pub const DEFAULT_RAY_ANGLE: f64 = FRAC_PI_2;

/// A point (or displacement) in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of two planar vectors.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise perpendicular.
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).norm()
    }

    #[must_use]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Signed crossing of segment `a -> b` with the ray leaving `origin` at
/// `angle` radians.
///
/// Returns `0` when the segment misses the ray (or runs parallel to it),
/// `+1` when it crosses from the left of the ray to the right, `-1` for the
/// opposite direction. Reversing the segment always flips the sign.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn ray_crossing(a: Point2, b: Point2, origin: Point2, angle: f64) -> i8 {
    let direction = Point2::new(angle.cos(), angle.sin());
    let normal = direction.perp();
    let to_origin = origin - a;
    let segment = b - a;

    let denom = segment.dot(normal);
    if denom == 0.0 {
        return 0;
    }

    let along_ray = segment.cross(to_origin) / denom;
    let along_segment = to_origin.dot(normal) / denom;
    if along_ray < 0.0 || !(0.0..=1.0).contains(&along_segment) {
        return 0;
    }

    // Side of `a` in the frame rotated onto the ray.
    if to_origin.dot(normal) < 0.0 {
        1
    } else {
        -1
    }
}

/// The fixed, globally ordered set of point features.
///
/// Feature `i` owns invariant dimension `i` of a crossing vector and symbol
/// `i + 1` of a reduced word. Every feature shares one ray angle.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    points: Vec<Point2>,
    ray_angle: f64,
}

impl FeatureSet {
    /// Feature set with upward reference rays.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            ray_angle: DEFAULT_RAY_ANGLE,
        }
    }

    #[must_use]
    pub fn with_ray_angle(mut self, ray_angle: f64) -> Self {
        self.ray_angle = ray_angle;
        self
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn ray_angle(&self) -> f64 {
        self.ray_angle
    }

    /// Number of features (the invariant dimension).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
