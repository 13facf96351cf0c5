mod batch;
mod provenance;
mod report;

use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use report::{AnalyzerOpts, Report};
use shapes::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use shapes::parse::format_vertices;
use shapes::{GeomCfg, ParseMode};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "shapes-analyzer")]
#[command(about = "Remote Shapes Analyzer: simplicity, perimeter and area of 2D polygons")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Read unparseable coordinates as 0 instead of rejecting the input
    #[arg(long, global = true)]
    lenient: bool,

    /// Collinearity tolerance for orientation tests (0 keeps them exact)
    #[arg(long, global = true, default_value_t = 0.0)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze one vertex list, e.g. "(0,0),(4,0),(4,4),(0,4)"
    Analyze {
        #[arg(long)]
        vertices: String,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Analyze one vertex list per CSV row and write a JSON array
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        #[arg(long, default_value = "vertices")]
        column: String,
    },
    /// Print a random simple polygon in the input format
    Sample {
        #[arg(long, default_value_t = 8)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    ensure!(
        cmd.eps.is_finite() && cmd.eps >= 0.0,
        "--eps must be a finite, non-negative number"
    );
    let opts = AnalyzerOpts {
        mode: if cmd.lenient {
            ParseMode::ZeroFill
        } else {
            ParseMode::Strict
        },
        cfg: GeomCfg::with_eps(cmd.eps),
    };
    match cmd.action {
        Action::Analyze { vertices, json } => analyze(&vertices, json, opts),
        Action::Batch { input, out, column } => {
            let reports = batch::run(Path::new(&input), Path::new(&out), &column, opts)?;
            println!("{} reports written to {out}", reports.len());
            Ok(())
        }
        Action::Sample {
            vertices,
            seed,
            index,
        } => sample(vertices, seed, index),
    }
}

fn analyze(vertices: &str, json: bool, opts: AnalyzerOpts) -> Result<()> {
    let report = Report::analyze(vertices, opts);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

fn sample(vertices: usize, seed: u64, index: u64) -> Result<()> {
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..StarCfg::default()
    };
    let poly = draw_star_polygon(cfg, ReplayToken::new(seed, index));
    tracing::debug!(seed, index, n = poly.len(), "sample");
    println!("{}", format_vertices(&poly));
    Ok(())
}
