//! Self-intersection check over the closed edge loop.
//!
//! Edge `i` joins `v[i]` and `v[(i + 1) % n]`. Every pair `(i, j)` with
//! `j >= i + 2` is tested, except `(0, n - 1)`: those two edges meet at `v[0]`
//! through the closing edge and are adjacent. O(n²) pairs.

use super::predicates::segments_intersect_eps;
use super::types::{GeomCfg, Point};

/// Edges of the closed loop, closing edge last. Does not copy the vertices.
pub fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// Non-adjacent edge index pairs `(i, j)`, `i < j`, in scan order.
fn candidate_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| {
        (i + 2..n)
            .filter(move |&j| !(i == 0 && j == n - 1))
            .map(move |j| (i, j))
    })
}

fn colliding_pairs<'a>(
    vertices: &'a [Point],
    cfg: GeomCfg,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let n = vertices.len();
    let edge = move |k: usize| (vertices[k], vertices[(k + 1) % n]);
    candidate_pairs(n).filter(move |&(i, j)| {
        let (p1, q1) = edge(i);
        let (p2, q2) = edge(j);
        segments_intersect_eps(p1, q1, p2, q2, cfg.eps_collinear)
    })
}

/// True if any two non-adjacent edges of the closed loop touch or cross.
///
/// Stops at the first hit. Loops with fewer than 4 vertices have no candidate
/// pairs and report `false`; callers decide what fewer than 3 vertices means.
pub fn has_self_intersection(vertices: &[Point]) -> bool {
    has_self_intersection_cfg(vertices, GeomCfg::default())
}

/// `has_self_intersection` with an explicit tolerance config.
pub fn has_self_intersection_cfg(vertices: &[Point], cfg: GeomCfg) -> bool {
    colliding_pairs(vertices, cfg).next().is_some()
}

/// All colliding edge pairs `(i, j)` with `i < j`, in scan order.
pub fn find_self_intersections(vertices: &[Point], cfg: GeomCfg) -> Vec<(usize, usize)> {
    colliding_pairs(vertices, cfg).collect()
}
