//! Orientation and segment-intersection predicates.
//!
//! All rotational reasoning goes through `orientation`; the intersection test
//! compares `Orientation` values, never raw cross-product signs.

use super::types::{Orientation, Point, Vector};

/// Vector from `a` to `b`.
#[inline]
pub fn to_vector(a: Point, b: Point) -> Vector {
    b - a
}

/// 2D cross product `u.x * v.y - u.y * v.x`.
/// Positive when `v` is counterclockwise from `u`.
#[inline]
pub fn cross_product(u: Vector, v: Vector) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Orientation of the triple `(p, q, r)`: the turn from `p→q` to `p→r`.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    orientation_eps(p, q, r, 0.0)
}

/// `orientation` with a collinearity band `|cross| <= eps`.
#[inline]
pub fn orientation_eps(p: Point, q: Point, r: Point, eps: f64) -> Orientation {
    let cross = cross_product(to_vector(p, q), to_vector(p, r));
    Orientation::from_signed(cross, eps)
}

/// True iff `q` lies in the closed bounding box spanned by `p` and `r`.
///
/// Only meaningful when the three points are already known to be collinear.
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Closed segments `p1q1` and `p2q2` share at least one point.
///
/// Inclusive: touching endpoints and collinear overlaps count.
#[inline]
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    segments_intersect_eps(p1, q1, p2, q2, 0.0)
}

/// `segments_intersect` with orientations evaluated through `orientation_eps`.
pub fn segments_intersect_eps(p1: Point, q1: Point, p2: Point, q2: Point, eps: f64) -> bool {
    let o1 = orientation_eps(p1, q1, p2, eps);
    let o2 = orientation_eps(p1, q1, q2, eps);
    let o3 = orientation_eps(p2, q2, p1, eps);
    let o4 = orientation_eps(p2, q2, q1, eps);

    if o1 != o2 && o3 != o4 {
        return true;
    }
    // Collinear cases: an endpoint of one segment lies on the other.
    (o1.is_collinear() && on_segment(p1, p2, q1))
        || (o2.is_collinear() && on_segment(p1, q2, q1))
        || (o3.is_collinear() && on_segment(p2, p1, q2))
        || (o4.is_collinear() && on_segment(p2, q1, q2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{point, vector};

    #[test]
    fn cross_product_sign_encodes_turn() {
        let x = vector![1.0, 0.0];
        let y = vector![0.0, 2.5];
        assert!((cross_product(x, y) - 2.5).abs() < 1e-12);
        assert!((cross_product(y, x) + 2.5).abs() < 1e-12);
        assert_eq!(cross_product(x, x * 3.0), 0.0);
    }

    #[test]
    fn to_vector_is_head_minus_tail() {
        let v = to_vector(point![1.0, 2.0], point![4.0, -2.0]);
        assert_eq!(v, vector![3.0, -4.0]);
    }

    #[test]
    fn orientation_classifies_turns() {
        let p = point![0.0, 0.0];
        let q = point![1.0, 0.0];
        assert_eq!(
            orientation(p, q, point![0.0, 1.0]),
            Orientation::CounterClockwise
        );
        assert_eq!(orientation(p, q, point![0.0, -1.0]), Orientation::Clockwise);
        assert_eq!(orientation(p, q, point![5.0, 0.0]), Orientation::Collinear);
    }

    #[test]
    fn orientation_eps_widens_collinear_band() {
        let p = point![0.0, 0.0];
        let q = point![1.0, 0.0];
        let r = point![2.0, 1e-12];
        assert_eq!(orientation(p, q, r), Orientation::CounterClockwise);
        assert_eq!(orientation_eps(p, q, r, 1e-9), Orientation::Collinear);
    }

    #[test]
    fn on_segment_is_closed_bounding_box() {
        let p = point![0.0, 0.0];
        let r = point![4.0, 4.0];
        assert!(on_segment(p, point![2.0, 2.0], r));
        assert!(on_segment(p, p, r));
        assert!(on_segment(p, r, r));
        assert!(!on_segment(p, point![5.0, 5.0], r));
        // Reversed endpoints give the same box.
        assert!(on_segment(r, point![1.0, 1.0], p));
    }

    #[test]
    fn proper_crossing() {
        assert!(segments_intersect(
            point![0.0, 0.0],
            point![4.0, 4.0],
            point![0.0, 4.0],
            point![4.0, 0.0]
        ));
    }

    #[test]
    fn disjoint_and_parallel_segments() {
        assert!(!segments_intersect(
            point![0.0, 0.0],
            point![1.0, 0.0],
            point![0.0, 1.0],
            point![1.0, 1.0]
        ));
        // Same line, no overlap.
        assert!(!segments_intersect(
            point![0.0, 0.0],
            point![1.0, 0.0],
            point![2.0, 0.0],
            point![3.0, 0.0]
        ));
    }

    #[test]
    fn touching_endpoints_and_overlaps_count() {
        // Shared endpoint.
        assert!(segments_intersect(
            point![0.0, 0.0],
            point![1.0, 0.0],
            point![1.0, 0.0],
            point![1.0, 5.0]
        ));
        // T-junction: endpoint in the interior of the other segment.
        assert!(segments_intersect(
            point![0.0, 0.0],
            point![4.0, 0.0],
            point![2.0, 0.0],
            point![2.0, 3.0]
        ));
        // Collinear overlap.
        assert!(segments_intersect(
            point![0.0, 0.0],
            point![3.0, 0.0],
            point![1.0, 0.0],
            point![5.0, 0.0]
        ));
        // One segment contains the other.
        assert!(segments_intersect(
            point![0.0, 0.0],
            point![10.0, 10.0],
            point![2.0, 2.0],
            point![3.0, 3.0]
        ));
    }

    #[test]
    fn degenerate_point_segment() {
        let dot = point![1.0, 0.0];
        assert!(segments_intersect(
            dot,
            dot,
            point![0.0, 0.0],
            point![2.0, 0.0]
        ));
        assert!(!segments_intersect(
            dot,
            dot,
            point![0.0, 1.0],
            point![2.0, 1.0]
        ));
    }
}
