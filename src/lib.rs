//! Field-detection and autofill engine for identity-document data.
//!
//! The pipeline discovers fillable fields across a captured page tree
//! (including shadow scopes), scores data-key/field pairings with a
//! heuristic pattern table, greedily commits the best matches so no field
//! and no data key is consumed twice, and injects values per element kind
//! while recording the events reactive frameworks listen for.
//!
//! ```
//! use propace_autofill::dom::dom_model::Element;
//! use propace_autofill::engine::engine::AutofillEngine;
//! use propace_autofill::trace::logger::TraceLogger;
//!
//! let page = Element::new("body")
//!     .with_child(Element::new("input").with_name("full_name").into_node())
//!     .into_node();
//!
//! let data = vec![("name".to_string(), "Jane Doe".to_string())];
//! let mut engine = AutofillEngine::new();
//! let result = engine.perform_autofill(&page, &data, &TraceLogger::disabled());
//! assert!(result.success);
//! ```

pub mod cli;
pub mod detect;
pub mod dom;
pub mod engine;
pub mod fill;
pub mod matching;
pub mod report;
pub mod trace;

pub use crate::detect::detector::FieldDetector;
pub use crate::detect::field_model::{FieldDescriptor, FieldKind};
pub use crate::engine::engine::{AutofillEngine, EnginePhase};
pub use crate::engine::error::AutofillError;
pub use crate::engine::result_model::{AutofillResult, FieldSummary};
