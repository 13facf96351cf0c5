//! Polygon analysis core: simplicity check plus area and perimeter.
//!
//! Pipeline
//! - `parse` turns a flattened coordinate string into an ordered vertex list.
//! - `geom2` holds the primitives, orientation/intersection predicates, the
//!   self-intersection validator, and the metric calculators.
//! - `analysis` runs parse → validate → measure and assembles `AnalysisResult`.
//!
//! Everything here is pure and synchronous. Logging and transport belong to the
//! caller (see the `cli` crate).

pub mod analysis;
pub mod api;
pub mod geom2;
pub mod parse;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use analysis::{analyze, analyze_points, AnalysisResult, Status};
pub use geom2::{GeomCfg, Orientation, Point, Vector};
pub use parse::{parse_vertices, ParseError, ParseMode};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{
        analyze, analyze_points, analyze_points_cfg, analyze_with, AnalysisResult, Status,
        MIN_VERTICES,
    };
    pub use crate::geom2::{
        area, has_self_intersection, orientation, perimeter, segments_intersect, GeomCfg,
        Orientation, Point, Vector,
    };
    pub use crate::parse::{parse_vertices, parse_vertices_with, ParseError, ParseMode};
}
