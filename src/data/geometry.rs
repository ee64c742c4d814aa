//! Planar geometry primitives used by the scoring engine.
//!
//! Everything works in raw canvas units. Distances are kept squared wherever a
//! comparison is all that is needed; the square root is taken only when an
//! actual length enters the weighting.

use serde::{Deserialize, Serialize};

/// A point (or direction vector) on the flat 2D canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `self` to `other`.
    #[inline]
    pub fn to(self, other: Point2D) -> Point2D {
        Point2D::new(other.x - self.x, other.y - self.y)
    }

    #[inline]
    pub fn dot(self, other: Point2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Squared Euclidean distance between `a` and `b`.
#[inline]
pub fn squared_distance(a: Point2D, b: Point2D) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Point2D, b: Point2D) -> f64 {
    squared_distance(a, b).sqrt()
}

/// Closest point to `p` on the segment `v -> w`.
///
/// The projection parameter is clamped to `[0, 1]`, so the result never leaves
/// the segment. A zero-length segment (`v == w`) returns `v`.
pub fn closest_point_on_segment(p: Point2D, v: Point2D, w: Point2D) -> Point2D {
    let vw = v.to(w);
    let l2 = vw.length_squared();
    if l2 == 0.0 {
        return v;
    }
    let t = (v.to(p).dot(vw) / l2).clamp(0.0, 1.0);
    Point2D::new(v.x + t * vw.x, v.y + t * vw.y)
}

/// Squared distance from `p` to the segment `v -> w`.
#[inline]
pub fn segment_distance_squared(p: Point2D, v: Point2D, w: Point2D) -> f64 {
    squared_distance(p, closest_point_on_segment(p, v, w))
}

/// Distance from `p` to the segment `v -> w`.
#[inline]
pub fn segment_distance(p: Point2D, v: Point2D, w: Point2D) -> f64 {
    segment_distance_squared(p, v, w).sqrt()
}

/// Angle between two direction vectors in degrees, folded into `[0, 90]`.
///
/// Direction sign is ignored: a vector and its reverse are at 0°. Returns `None`
/// when either vector has zero length.
pub fn acute_angle_deg(u: Point2D, v: Point2D) -> Option<f64> {
    let lu = u.length_squared();
    let lv = v.length_squared();
    if lu == 0.0 || lv == 0.0 {
        return None;
    }
    let cos = (u.dot(v).abs() / (lu.sqrt() * lv.sqrt())).clamp(0.0, 1.0);
    Some(cos.acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_interior() {
        let t = closest_point_on_segment(
            Point2D::new(50.0, 5.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(100.0, 0.0),
        );
        assert_eq!(t, Point2D::new(50.0, 0.0));
    }

    #[test]
    fn projection_clamps_to_endpoints() {
        let v = Point2D::new(0.0, 0.0);
        let w = Point2D::new(10.0, 0.0);
        assert_eq!(closest_point_on_segment(Point2D::new(-5.0, 3.0), v, w), v);
        assert_eq!(closest_point_on_segment(Point2D::new(25.0, -1.0), v, w), w);
    }

    #[test]
    fn segment_distance_cases() {
        let v = Point2D::new(0.0, 0.0);
        let w = Point2D::new(100.0, 0.0);
        assert_eq!(segment_distance(Point2D::new(50.0, 5.0), v, w), 5.0);
        // Beyond the end: distance to the endpoint, not to the infinite line.
        assert_eq!(segment_distance(Point2D::new(103.0, 4.0), v, w), 5.0);
        assert_eq!(segment_distance(Point2D::new(-6.0, -8.0), v, w), 10.0);
        assert_eq!(segment_distance(Point2D::new(3.0, 4.0), v, v), 5.0);
    }

    #[test]
    fn acute_angle_folds_obtuse() {
        let a = acute_angle_deg(Point2D::new(1.0, 0.0), Point2D::new(-1.0, 0.0)).unwrap();
        assert!(a.abs() < 1e-9);
        let b = acute_angle_deg(Point2D::new(1.0, 0.0), Point2D::new(-1.0, 1.0)).unwrap();
        assert!((b - 45.0).abs() < 1e-9);
        assert!(acute_angle_deg(Point2D::default(), Point2D::new(1.0, 0.0)).is_none());
    }
}
