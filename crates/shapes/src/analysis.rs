//! Parse → validate → measure, per request.
//!
//! State machine
//! - `Received → Parsed → {TooFewVertices | SelfIntersecting | Measured}`.
//! - Validation only runs for 4+ vertices; a triangle is always measured.
//! - A self-intersecting shape never carries area or perimeter.

use crate::geom2::{area, has_self_intersection_cfg, perimeter, GeomCfg, Point};
use crate::parse::{parse_vertices_with, ParseError, ParseMode};

/// Fewest vertices that make a measurable shape.
pub const MIN_VERTICES: usize = 3;

/// Terminal outcome of one analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Measured,
    TooFewVertices,
    SelfIntersecting,
}

/// Result of one analysis. `perimeter` and `area` are `Some` iff `Measured`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalysisResult {
    pub vertex_count: usize,
    pub has_collision: bool,
    pub perimeter: Option<f64>,
    pub area: Option<f64>,
}

impl AnalysisResult {
    pub fn status(&self) -> Status {
        if self.vertex_count < MIN_VERTICES {
            Status::TooFewVertices
        } else if self.has_collision {
            Status::SelfIntersecting
        } else {
            Status::Measured
        }
    }

    #[inline]
    pub fn is_measured(&self) -> bool {
        self.status() == Status::Measured
    }
}

/// Analyze already-parsed vertices with exact predicates.
pub fn analyze_points(points: &[Point]) -> AnalysisResult {
    analyze_points_cfg(points, GeomCfg::default())
}

/// Analyze already-parsed vertices.
pub fn analyze_points_cfg(points: &[Point], cfg: GeomCfg) -> AnalysisResult {
    let vertex_count = points.len();
    let unmeasured = |has_collision| AnalysisResult {
        vertex_count,
        has_collision,
        perimeter: None,
        area: None,
    };
    if vertex_count < MIN_VERTICES {
        return unmeasured(false);
    }
    if vertex_count > MIN_VERTICES && has_self_intersection_cfg(points, cfg) {
        return unmeasured(true);
    }
    AnalysisResult {
        vertex_count,
        has_collision: false,
        perimeter: Some(perimeter(points)),
        area: Some(area(points)),
    }
}

/// Strict parse plus exact analysis.
pub fn analyze(raw: &str) -> Result<AnalysisResult, ParseError> {
    analyze_with(raw, ParseMode::Strict, GeomCfg::default())
}

/// Full pipeline with explicit parse policy and tolerances.
pub fn analyze_with(
    raw: &str,
    mode: ParseMode,
    cfg: GeomCfg,
) -> Result<AnalysisResult, ParseError> {
    let points = parse_vertices_with(raw, mode)?;
    Ok(analyze_points_cfg(&points, cfg))
}
