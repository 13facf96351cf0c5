//! CSV in, JSON reports out.
//!
//! The input CSV needs a header row and a string column holding one vertex list
//! per row (quoted, since the lists contain commas). Every row yields one
//! `Report`; a bad row never aborts the batch.

use crate::provenance::{write_sidecar, Payload};
use crate::report::{AnalyzerOpts, Report};
use anyhow::{Context, Result};
use polars::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Read one string column from a CSV. Null cells come back as `None`.
pub fn read_column(input: &Path, column: &str) -> Result<Vec<Option<String>>> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .select([col(column).cast(DataType::String)])
        .collect()
        .with_context(|| format!("reading column {column:?} from {}", input.display()))?;
    tracing::info!(rows = df.height(), column, "input_csv_shape");
    let values = df.column(column)?.str()?;
    Ok(values.into_iter().map(|v| v.map(str::to_string)).collect())
}

/// Count reports per status label.
pub fn summarize(reports: &[Report]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for r in reports {
        *counts.entry(r.status).or_insert(0) += 1;
    }
    counts
}

/// Analyze every row of `column` in `input`, write the reports to `out` as a
/// JSON array, and drop a provenance sidecar next to it.
pub fn run(input: &Path, out: &Path, column: &str, opts: AnalyzerOpts) -> Result<Vec<Report>> {
    tracing::info!(input = %input.display(), out = %out.display(), column, "batch");
    let reports: Vec<Report> = read_column(input, column)?
        .into_iter()
        .map(|cell| Report::analyze(cell.as_deref().unwrap_or_default(), opts))
        .collect();

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&reports)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let summary = summarize(&reports);
    tracing::info!(rows = reports.len(), ?summary, "batch done");
    let rejected = reports.iter().filter(|r| r.is_error()).count();
    if rejected > 0 {
        tracing::warn!(rejected, "rows with malformed input");
    }
    let payload = Payload::new(json!({
        "input": input.to_string_lossy(),
        "column": column,
        "lenient": opts.mode == shapes::ParseMode::ZeroFill,
        "eps_collinear": opts.cfg.eps_collinear,
    }))
    .with_summary(json!(summary));
    write_sidecar(out, payload)?;
    Ok(reports)
}
