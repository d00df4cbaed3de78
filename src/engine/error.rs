use std::fmt;

#[derive(Debug)]
pub enum AutofillError {
    /// Page snapshot file could not be read
    SnapshotRead { path: String, source: std::io::Error },

    /// Page snapshot JSON did not parse
    SnapshotParse { path: String, source: serde_json::Error },

    /// Extracted-data file could not be read
    DataRead { path: String, source: std::io::Error },

    /// Extracted-data YAML did not parse
    DataParse { path: String, source: serde_yaml::Error },

    /// Page tree had an unexpected shape
    DomStructure(String),

    /// Element was mutably borrowed elsewhere while scanning or filling
    NodeBusy { field: String },

    /// Element behind a descriptor is gone from the page
    ElementDetached { field: String },

    /// No select option contained the target value
    NoMatchingOption { field: String, value: String },

    /// Radio value did not equal the target value
    RadioValueMismatch { field: String, value: String },
}

impl fmt::Display for AutofillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutofillError::SnapshotRead { path, source } => {
                write!(f, "Failed to read snapshot '{}': {}", path, source)
            }
            AutofillError::SnapshotParse { path, source } => {
                write!(f, "Invalid snapshot JSON in '{}': {}", path, source)
            }
            AutofillError::DataRead { path, source } => {
                write!(f, "Failed to read data file '{}': {}", path, source)
            }
            AutofillError::DataParse { path, source } => {
                write!(f, "Invalid data YAML in '{}': {}", path, source)
            }
            AutofillError::DomStructure(msg) => {
                write!(f, "Unexpected page structure: {}", msg)
            }
            AutofillError::NodeBusy { field } => {
                write!(f, "Element '{}' is busy (borrowed elsewhere)", field)
            }
            AutofillError::ElementDetached { field } => {
                write!(f, "Element '{}' is no longer attached to the page", field)
            }
            AutofillError::NoMatchingOption { field, value } => {
                write!(f, "No option of '{}' matches value '{}'", field, value)
            }
            AutofillError::RadioValueMismatch { field, value } => {
                write!(f, "Radio '{}' does not carry value '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for AutofillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AutofillError::SnapshotRead { source, .. } => Some(source),
            AutofillError::DataRead { source, .. } => Some(source),
            AutofillError::SnapshotParse { source, .. } => Some(source),
            AutofillError::DataParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
