use serde::Serialize;

// ============================================================================
// Wire-shaped results returned to the calling layer
// ============================================================================

/// Outcome of one autofill pass.
///
/// `fields_count` is the number of fields actually filled; `fields_found` is
/// how many fillable fields detection saw. Serializes camelCase for the
/// calling layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutofillResult {
    pub success: bool,
    pub fields_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields_found: Option<usize>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<FillRecord>,
}

impl AutofillResult {
    /// Terminal result when detection finds nothing fillable.
    pub fn no_fields() -> AutofillResult {
        AutofillResult {
            success: false,
            fields_count: 0,
            fields_found: Some(0),
            message: "No fillable fields found".to_string(),
            error: None,
            fills: Vec::new(),
        }
    }

    /// Result for an error that escaped the detection or mapping stages.
    pub fn pipeline_error(error: String) -> AutofillResult {
        AutofillResult {
            success: false,
            fields_count: 0,
            fields_found: None,
            message: "Autofill aborted".to_string(),
            error: Some(error),
            fills: Vec::new(),
        }
    }
}

/// One committed or failed fill attempt, kept for reporting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillRecord {
    pub data_key: String,
    pub field: String,
    pub kind: String,
    pub score: f32,
    pub filled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Detection-only diagnostics, no filling involved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSummary {
    pub success: bool,
    pub fields_count: usize,
    pub fields: Vec<FieldInfo>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub placeholder: String,
}
