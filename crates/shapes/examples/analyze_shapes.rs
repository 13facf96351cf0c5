//! Run the analyzer over a few classic shapes and print the outcome.
//!
//! Usage:
//!   cargo run -p shapes --example analyze_shapes
//!   cargo run -p shapes --example analyze_shapes -- "(0,0),(3,0),(0,4)"

use shapes::api::{analyze, Status};

fn main() {
    let inputs: Vec<String> = match std::env::args().nth(1) {
        Some(raw) => vec![raw],
        None => [
            "(0,0),(4,0),(4,4),(0,4)",
            "(0,0),(4,4),(4,0),(0,4)",
            "(0,0),(3,0),(0,4)",
            "(1,1)",
            "(0,0),(oops,1)",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    };
    for raw in inputs {
        match analyze(&raw) {
            Ok(r) => match r.status() {
                Status::Measured => println!(
                    "{raw}: n={} perimeter={:.4} area={:.4}",
                    r.vertex_count,
                    r.perimeter.unwrap_or_default(),
                    r.area.unwrap_or_default()
                ),
                Status::SelfIntersecting => println!("{raw}: n={} self-intersecting", r.vertex_count),
                Status::TooFewVertices => println!("{raw}: n={} too few vertices", r.vertex_count),
            },
            Err(e) => println!("{raw}: error: {e}"),
        }
    }
}
