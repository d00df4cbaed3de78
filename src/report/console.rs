use crate::engine::result_model::{AutofillResult, FieldSummary};

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format an autofill result for terminal output.
///
/// Produces output like:
/// ```text
/// === Autofill ===
///
/// ✓ FILL  full_name ← name [text] (score 0.90)
/// ✗ FAIL  gender ← gender [select] (score 0.90)
///     [ERROR] No option of 'gender' matches value 'other'
///
/// === Results: 1 filled of 4 found ===
/// ```
pub fn format_fill_report(result: &AutofillResult) -> String {
    let mut out = String::new();

    out.push_str("=== Autofill ===\n\n");

    for record in &result.fills {
        let marker = if record.filled {
            "\u{2713} FILL"
        } else {
            "\u{2717} FAIL"
        };

        out.push_str(&format!(
            "{}  {} \u{2190} {} [{}] (score {:.2})\n",
            marker, record.field, record.data_key, record.kind, record.score
        ));

        if let Some(ref error) = record.error {
            out.push_str(&format!("    [ERROR] {}\n", error));
        }
    }

    if result.fills.is_empty() {
        out.push_str("(no candidates reached the fill stage)\n");
    }

    // Pipeline-level error, if the pass aborted before filling
    if let Some(ref error) = result.error {
        out.push_str(&format!("\n[ERROR] {}\n", error));
    }

    out.push_str(&format!(
        "\n=== Results: {} filled of {} found ===\n",
        result.fields_count,
        result.fields_found.unwrap_or(0)
    ));

    out
}

/// Format a detection-only field summary.
pub fn format_field_summary(summary: &FieldSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Fields: {} fillable ===\n\n",
        summary.fields_count
    ));

    for field in &summary.fields {
        out.push_str(&format!("  {} [{}]", field.name, field.kind));
        if !field.id.is_empty() {
            out.push_str(&format!(" id={}", field.id));
        }
        if !field.placeholder.is_empty() {
            out.push_str(&format!(" placeholder=\"{}\"", field.placeholder));
        }
        out.push('\n');
    }

    out
}
