//! Curated flat surface for callers that want every operation in one place.
//!
//! Mirrors the module tree; prefer the modules themselves inside this crate.

// Primitives and predicates
pub use crate::geom2::{
    cross_product, on_segment, orientation, orientation_eps, segments_intersect,
    segments_intersect_eps, to_vector, GeomCfg, Orientation, Point, Vector,
};
// Validation and metrics
pub use crate::geom2::{
    area, distance, edges, find_self_intersections, has_self_intersection,
    has_self_intersection_cfg, perimeter, signed_area, winding,
};
// Random simple polygons
pub use crate::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
// Parsing and the full pipeline
pub use crate::analysis::{analyze, analyze_points, analyze_points_cfg, analyze_with};
pub use crate::analysis::{AnalysisResult, Status, MIN_VERTICES};
pub use crate::parse::{format_vertices, parse_vertices, parse_vertices_with};
pub use crate::parse::{ParseError, ParseMode};
