use std::collections::BTreeMap;

use crate::dom::snapshot::load_snapshot;
use crate::engine::engine::AutofillEngine;
use crate::engine::error::AutofillError;
use crate::report::console::{format_field_summary, format_fill_report};
use crate::trace::logger::TraceLogger;

// ============================================================================
// fill subcommand
// ============================================================================

/// Run one autofill pass over a snapshot. Returns whether anything was filled.
pub fn cmd_fill(
    snapshot_path: &str,
    data_path: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<bool, Box<dyn std::error::Error>> {
    let root = load_snapshot(snapshot_path)?;
    let data = load_extracted_data(data_path)?;

    if verbose > 0 {
        eprintln!(
            "Filling {} with {} data entries...",
            snapshot_path,
            data.len()
        );
    }

    let mut engine = AutofillEngine::new();
    let result = engine.perform_autofill(&root, &data, tracer);

    let output_content = match format {
        "json" => serde_json::to_string_pretty(&result)?,
        _ => format_fill_report(&result),
    };
    emit(output, &output_content)?;

    Ok(result.success)
}

// ============================================================================
// fields subcommand
// ============================================================================

/// Detection-only diagnostics: list what the engine considers fillable.
pub fn cmd_fields(
    snapshot_path: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = load_snapshot(snapshot_path)?;

    let mut engine = AutofillEngine::new();
    let summary = engine.field_summary(&root);

    if verbose > 0 {
        eprintln!("{}: {} fillable fields", snapshot_path, summary.fields_count);
    }

    let output_content = match format {
        "json" => serde_json::to_string_pretty(&summary)?,
        _ => format_field_summary(&summary),
    };
    emit(output, &output_content)?;

    Ok(())
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Load the extracted-data mapping from YAML. A `BTreeMap` keeps the
/// key order deterministic, which is what score tie-breaking keys off.
fn load_extracted_data(path: &str) -> Result<Vec<(String, String)>, AutofillError> {
    let content = std::fs::read_to_string(path).map_err(|e| AutofillError::DataRead {
        path: path.to_string(),
        source: e,
    })?;

    let mapping: BTreeMap<String, String> =
        serde_yaml::from_str(&content).map_err(|e| AutofillError::DataParse {
            path: path.to_string(),
            source: e,
        })?;

    Ok(mapping.into_iter().collect())
}

fn emit(output: Option<&str>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            eprintln!("Report written to: {}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
