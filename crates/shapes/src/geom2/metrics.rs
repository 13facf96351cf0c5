//! Area and perimeter of the closed vertex loop.

use super::types::{Orientation, Point};
use super::validate::edges;

/// Euclidean distance via `hypot` (no intermediate overflow/underflow).
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (q.x - p.x).hypot(q.y - p.y)
}

/// Shoelace signed area: positive for counterclockwise loops.
///
/// The two cross sums are accumulated separately and subtracted once.
pub fn signed_area(vertices: &[Point]) -> f64 {
    let (sum1, sum2) = edges(vertices).fold((0.0, 0.0), |(s1, s2), (a, b)| {
        (s1 + a.x * b.y, s2 + a.y * b.x)
    });
    (sum1 - sum2) / 2.0
}

/// Enclosed area `|Σ x_i y_{i+1} − Σ y_i x_{i+1}| / 2`. Independent of winding.
pub fn area(vertices: &[Point]) -> f64 {
    signed_area(vertices).abs()
}

/// Sum of edge lengths around the closed loop.
pub fn perimeter(vertices: &[Point]) -> f64 {
    edges(vertices).map(|(a, b)| distance(a, b)).sum()
}

/// Winding direction of the loop; `Collinear` when the signed area is zero.
pub fn winding(vertices: &[Point]) -> Orientation {
    Orientation::from_signed(signed_area(vertices), 0.0)
}
