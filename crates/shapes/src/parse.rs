//! Flattened coordinate strings → ordered vertex lists.
//!
//! Format: comma-separated numbers, parentheses ignored, consumed in `(x, y)`
//! pairs, e.g. `"(0,0),(4,0),(4,4),(0,4)"`. Tokens are trimmed, so
//! `"(0, 0), (4, 0)"` parses too. A trailing unpaired coordinate is dropped.

use crate::geom2::Point;
use std::fmt;

/// How to treat a token that is not a finite number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Reject with `ParseError::InvalidNumber`.
    #[default]
    Strict,
    /// Substitute `0.0`, the behavior of the legacy analyzer.
    ZeroFill,
}

/// Malformed-input errors. Both variants mean the request cannot be analyzed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than two tokens after stripping parentheses and splitting on commas.
    TooFewTokens { input: String },
    /// Token `index` (0-based over all tokens) is not a finite number.
    InvalidNumber { index: usize, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewTokens { input } => write!(f, "point [{input}] was not well defined"),
            Self::InvalidNumber { index, token } => {
                write!(f, "token {index} ({token:?}) is not a finite number")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse in `ParseMode::Strict`.
pub fn parse_vertices(raw: &str) -> Result<Vec<Point>, ParseError> {
    parse_vertices_with(raw, ParseMode::Strict)
}

/// Parse with an explicit policy for unparseable tokens.
pub fn parse_vertices_with(raw: &str, mode: ParseMode) -> Result<Vec<Point>, ParseError> {
    let stripped: String = raw.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    let tokens: Vec<&str> = stripped.split(',').collect();
    if tokens.len() < 2 {
        return Err(ParseError::TooFewTokens { input: stripped });
    }
    let coords = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| parse_coord(index, token, mode))
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

fn parse_coord(index: usize, token: &str, mode: ParseMode) -> Result<f64, ParseError> {
    let value = token.trim().parse::<f64>().ok().filter(|v| v.is_finite());
    match (value, mode) {
        (Some(v), _) => Ok(v),
        (None, ParseMode::ZeroFill) => Ok(0.0),
        (None, ParseMode::Strict) => Err(ParseError::InvalidNumber {
            index,
            token: token.to_string(),
        }),
    }
}

/// Render vertices back into the accepted input format.
pub fn format_vertices(vertices: &[Point]) -> String {
    vertices
        .iter()
        .map(|p| format!("({},{})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    #[test]
    fn parses_parenthesized_pairs_in_order() {
        let v = parse_vertices("(0,0),(4,0),(4,4),(0,4)").unwrap();
        assert_eq!(
            v,
            vec![
                point![0.0, 0.0],
                point![4.0, 0.0],
                point![4.0, 4.0],
                point![0.0, 4.0]
            ]
        );
    }

    #[test]
    fn accepts_whitespace_signs_and_exponents() {
        let v = parse_vertices(" (-1.5, 2e1), (3 , -0.25) ").unwrap();
        assert_eq!(v, vec![point![-1.5, 20.0], point![3.0, -0.25]]);
    }

    #[test]
    fn parentheses_are_optional() {
        assert_eq!(
            parse_vertices("1,2,3,4").unwrap(),
            parse_vertices("(1,2),(3,4)").unwrap()
        );
    }

    #[test]
    fn single_point_is_not_an_error() {
        assert_eq!(parse_vertices("(1,1)").unwrap(), vec![point![1.0, 1.0]]);
    }

    #[test]
    fn trailing_unpaired_coordinate_is_dropped() {
        let v = parse_vertices("(1,2),(3,4),(5").unwrap();
        assert_eq!(v, vec![point![1.0, 2.0], point![3.0, 4.0]]);
    }

    #[test]
    fn too_few_tokens() {
        for raw in ["", "()", "(7)", "abc"] {
            assert!(
                matches!(parse_vertices(raw), Err(ParseError::TooFewTokens { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn strict_rejects_garbage_tokens() {
        let err = parse_vertices("(0,0),(x,1)").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                index: 2,
                token: "x".to_string()
            }
        );
        assert!(parse_vertices("(0,0),(1,)").is_err());
        assert!(parse_vertices("(0,0),(inf,1)").is_err());
        assert!(parse_vertices("(0,0),(NaN,1)").is_err());
    }

    #[test]
    fn zero_fill_reproduces_legacy_fallback() {
        let v = parse_vertices_with("(0,0),(x,1),(2,)", ParseMode::ZeroFill).unwrap();
        assert_eq!(
            v,
            vec![point![0.0, 0.0], point![0.0, 1.0], point![2.0, 0.0]]
        );
        // Too few tokens is still an error.
        assert!(parse_vertices_with("x", ParseMode::ZeroFill).is_err());
    }

    #[test]
    fn format_round_trips() {
        let v = vec![point![0.5, -2.0], point![3.0, 1e-3]];
        assert_eq!(format_vertices(&v), "(0.5,-2),(3,0.001)");
        assert_eq!(parse_vertices(&format_vertices(&v)).unwrap(), v);
    }

    #[test]
    fn error_messages() {
        let e = parse_vertices("(5)").unwrap_err();
        assert_eq!(e.to_string(), "point [5] was not well defined");
        let e = parse_vertices("1,zz").unwrap_err();
        assert_eq!(e.to_string(), "token 1 (\"zz\") is not a finite number");
    }
}
