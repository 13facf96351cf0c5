//! 2D polygon geometry (vertex representation, f64 arithmetic).
//!
//! Purpose
//! - Decide whether an ordered vertex loop is simple and measure it.
//! - Keep every rotational decision inside `orientation`; validators and
//!   metrics only ever see the tri-state `Orientation`.
//!
//! Conventions
//! - A polygon is a plain `&[Point]`; the closing edge `(v[n-1], v[0])` is
//!   implied and never materialized by mutating the caller's slice.
//! - Predicates are exact (`cross == 0` means collinear) unless a caller opts in
//!   to a tolerance through `GeomCfg` and the `_eps`/`_cfg` variants.
//!
//! Code cross-refs: `types::{Point, Vector, Orientation, GeomCfg}`,
//! `predicates::segments_intersect`, `validate::has_self_intersection`,
//! `metrics::{area, perimeter}`.

mod metrics;
mod predicates;
pub mod rand;
mod types;
mod validate;

pub use metrics::{area, distance, perimeter, signed_area, winding};
pub use predicates::{
    cross_product, on_segment, orientation, orientation_eps, segments_intersect,
    segments_intersect_eps, to_vector,
};
pub use types::{GeomCfg, Orientation, Point, Vector};
pub use validate::{
    edges, find_self_intersections, has_self_intersection, has_self_intersection_cfg,
};
