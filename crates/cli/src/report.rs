//! Per-request reports: JSON shape and the classic text response.

use serde::Serialize;
use shapes::geom2::find_self_intersections;
use shapes::parse::format_vertices;
use shapes::prelude::*;
use std::fmt::Write as _;

/// Parse policy and tolerances shared by every request of one invocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalyzerOpts {
    pub mode: ParseMode,
    pub cfg: GeomCfg,
}

/// One analyzed input, ready for JSON or text output.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub input: String,
    pub status: &'static str,
    pub vertex_count: usize,
    pub has_collision: bool,
    pub vertices: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perimeter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colliding_edges: Vec<(usize, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Measured => "measured",
        Status::TooFewVertices => "too_few_vertices",
        Status::SelfIntersecting => "self_intersecting",
    }
}

impl Report {
    /// Run the full pipeline on `raw`. Parse failures become an error report.
    pub fn analyze(raw: &str, opts: AnalyzerOpts) -> Self {
        let points = match parse_vertices_with(raw, opts.mode) {
            Ok(points) => points,
            Err(e) => {
                tracing::warn!(input = raw, error = %e, "malformed input");
                return Self {
                    input: raw.to_string(),
                    status: "malformed_input",
                    vertex_count: 0,
                    has_collision: false,
                    vertices: Vec::new(),
                    perimeter: None,
                    area: None,
                    colliding_edges: Vec::new(),
                    error: Some(e.to_string()),
                };
            }
        };
        tracing::info!(count = points.len(), vertices = %format_vertices(&points), "received vertices");

        let result = analyze_points_cfg(&points, opts.cfg);
        let colliding_edges = if result.has_collision {
            find_self_intersections(&points, opts.cfg)
        } else {
            Vec::new()
        };
        tracing::debug!(status = ?result.status(), collisions = colliding_edges.len(), "analyzed");
        Self {
            input: raw.to_string(),
            status: status_label(result.status()),
            vertex_count: result.vertex_count,
            has_collision: result.has_collision,
            vertices: points.iter().map(|p| [p.x, p.y]).collect(),
            perimeter: result.perimeter,
            area: result.area,
            colliding_edges,
            error: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Text response in the original analyzer's layout.
    pub fn render_text(&self) -> String {
        if let Some(e) = &self.error {
            return format!("error: {e}\n");
        }
        let mut out = String::from("Welcome to the Remote Shapes Analyzer\n");
        let _ = writeln!(out, " - Your figure has : [{}] vertices", self.vertex_count);
        if let (Some(perimeter), Some(area)) = (self.perimeter, self.area) {
            let _ = writeln!(out, " - Vertices        : {}", self.vertices_text());
            let _ = writeln!(out, " - Perimeter       : {perimeter}");
            let _ = writeln!(out, " - Area            : {area}");
        }
        if self.has_collision {
            let edges: Vec<String> = self
                .colliding_edges
                .iter()
                .map(|(i, j)| format!("{i}-{j}"))
                .collect();
            let _ = writeln!(out, " - Colliding edges : [{}]", edges.join(" "));
            out.push_str("ERROR - Your shape has a collision between some lines.\n");
        } else if self.vertex_count < MIN_VERTICES {
            out.push_str("ERROR - Your shape is not complying with the minimum number of vertices.\n");
        }
        out
    }

    fn vertices_text(&self) -> String {
        let points: Vec<Point> = self.vertices.iter().map(|&[x, y]| Point::new(x, y)).collect();
        format_vertices(&points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_text_report() {
        let r = Report::analyze("(0,0),(4,0),(4,4),(0,4)", AnalyzerOpts::default());
        assert_eq!(
            r.render_text(),
            "Welcome to the Remote Shapes Analyzer\n\
             \x20- Your figure has : [4] vertices\n\
             \x20- Vertices        : (0,0),(4,0),(4,4),(0,4)\n\
             \x20- Perimeter       : 16\n\
             \x20- Area            : 16\n"
        );
    }

    #[test]
    fn bowtie_text_report_names_edges() {
        let r = Report::analyze("(0,0),(4,4),(4,0),(0,4)", AnalyzerOpts::default());
        assert_eq!(r.status, "self_intersecting");
        assert_eq!(r.colliding_edges, vec![(0, 2)]);
        let text = r.render_text();
        assert!(text.contains(" - Colliding edges : [0-2]\n"));
        assert!(text.ends_with("ERROR - Your shape has a collision between some lines.\n"));
        assert!(!text.contains("Area"));
    }

    #[test]
    fn too_few_vertices_text_report() {
        let r = Report::analyze("(1,1)", AnalyzerOpts::default());
        assert_eq!(r.status, "too_few_vertices");
        assert!(r
            .render_text()
            .ends_with("ERROR - Your shape is not complying with the minimum number of vertices.\n"));
    }

    #[test]
    fn malformed_input_report() {
        let r = Report::analyze("(0,0),(x,1)", AnalyzerOpts::default());
        assert!(r.is_error());
        assert_eq!(r.status, "malformed_input");
        assert!(r.render_text().starts_with("error: token 2"));

        let lenient = AnalyzerOpts {
            mode: ParseMode::ZeroFill,
            ..AnalyzerOpts::default()
        };
        let r = Report::analyze("(0,0),(x,1)", lenient);
        assert_eq!(r.status, "too_few_vertices");
    }

    #[test]
    fn json_omits_absent_fields() {
        let r = Report::analyze("(0,0),(4,4),(4,0),(0,4)", AnalyzerOpts::default());
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["status"], "self_intersecting");
        assert!(v.get("area").is_none());
        assert!(v.get("error").is_none());
        assert_eq!(v["colliding_edges"][0][1], 2);
        assert_eq!(v["vertices"][1][0], 4.0);
    }
}
