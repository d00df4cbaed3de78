use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One line of the autofill pipeline trace.
///
/// Emitted on phase transitions and per fill attempt; optional fields stay
/// off the wire when unset.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub phase: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields_found: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TraceEvent {
    pub fn now(phase: impl ToString) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            phase: phase.to_string(),
            fields_found: None,
            scan_count: None,
            data_key: None,
            field: None,
            score: None,
            outcome: None,
            message: None,
        }
    }

    pub fn with_fields_found(mut self, count: usize) -> Self {
        self.fields_found = Some(count);
        self
    }

    pub fn with_scan_count(mut self, count: u64) -> Self {
        self.scan_count = Some(count);
        self
    }

    pub fn with_candidate(mut self, data_key: &str, field: &str, score: f32) -> Self {
        self.data_key = Some(data_key.to_string());
        self.field = Some(field.to_string());
        self.score = Some(score);
        self
    }

    pub fn with_outcome(mut self, outcome: impl ToString) -> Self {
        self.outcome = Some(outcome.to_string());
        self
    }

    pub fn with_message(mut self, message: impl ToString) -> Self {
        self.message = Some(message.to_string());
        self
    }
}
