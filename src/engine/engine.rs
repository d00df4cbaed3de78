use std::collections::HashSet;
use std::time::Duration;

use crate::detect::detector::FieldDetector;
use crate::dom::dom_model::{ElementNode, FieldIdentity};
use crate::engine::error::AutofillError;
use crate::engine::result_model::{AutofillResult, FieldInfo, FieldSummary};
use crate::fill::filler::run_fill_pass;
use crate::matching::mapper::build_candidates;
use crate::trace::{logger::TraceLogger, trace::TraceEvent};

/// Pipeline phase of the current or last `perform_autofill` call. Each call
/// is one forward-only pass; there are no backward transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    Idle,
    Detecting,
    Mapping,
    Filling,
    Done,
}

impl EnginePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnginePhase::Idle => "idle",
            EnginePhase::Detecting => "detecting",
            EnginePhase::Mapping => "mapping",
            EnginePhase::Filling => "filling",
            EnginePhase::Done => "done",
        }
    }
}

/// Orchestrates detect → map → fill over one page context.
///
/// Owns the session state: the detector (with its scan cache) and the two
/// used-sets that guarantee at most one fill per field identity and per
/// data key. Construct one engine per page context; nothing here is global.
pub struct AutofillEngine {
    detector: FieldDetector,
    used_fields: HashSet<FieldIdentity>,
    used_keys: HashSet<String>,
    phase: EnginePhase,
}

impl AutofillEngine {
    pub fn new() -> AutofillEngine {
        AutofillEngine {
            detector: FieldDetector::new(),
            used_fields: HashSet::new(),
            used_keys: HashSet::new(),
            phase: EnginePhase::Idle,
        }
    }

    /// Engine with a custom detection-cache TTL.
    pub fn with_cache_ttl(ttl: Duration) -> AutofillEngine {
        AutofillEngine {
            detector: FieldDetector::with_cache_ttl(ttl),
            used_fields: HashSet::new(),
            used_keys: HashSet::new(),
            phase: EnginePhase::Idle,
        }
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Traversals the underlying detector has performed.
    pub fn scan_count(&self) -> u64 {
        self.detector.scan_count()
    }

    /// One full autofill pass: detect, map, fill, aggregate.
    ///
    /// `data` is an ordered sequence of (key, value) pairs; its order is the
    /// discovery order used for tie-breaking. Used field identities and data
    /// keys persist across calls until `reset`, so a second pass can never
    /// re-consume what the first committed. Errors escaping the pipeline are
    /// folded into a failure result rather than propagated.
    pub fn perform_autofill(
        &mut self,
        root: &ElementNode,
        data: &[(String, String)],
        tracer: &TraceLogger,
    ) -> AutofillResult {
        match self.run_pipeline(root, data, tracer) {
            Ok(result) => result,
            Err(e) => {
                self.phase = EnginePhase::Done;
                tracer.log(
                    &TraceEvent::now("done")
                        .with_outcome("error")
                        .with_message(&e),
                );
                AutofillResult::pipeline_error(e.to_string())
            }
        }
    }

    fn run_pipeline(
        &mut self,
        root: &ElementNode,
        data: &[(String, String)],
        tracer: &TraceLogger,
    ) -> Result<AutofillResult, AutofillError> {
        // A root held mutably elsewhere cannot be scanned at all; that is a
        // pipeline failure, not a per-subtree one.
        root.try_borrow().map_err(|_| AutofillError::NodeBusy {
            field: "root".to_string(),
        })?;

        self.phase = EnginePhase::Detecting;
        let fields = self.detector.detect_fields(root);
        tracer.log(
            &TraceEvent::now(self.phase.as_str())
                .with_fields_found(fields.len())
                .with_scan_count(self.detector.scan_count()),
        );

        if fields.is_empty() {
            self.phase = EnginePhase::Done;
            tracer.log(&TraceEvent::now(self.phase.as_str()).with_outcome("no_fields"));
            return Ok(AutofillResult::no_fields());
        }

        self.phase = EnginePhase::Mapping;
        let candidates = build_candidates(data, &fields, &self.used_keys, &self.used_fields);
        tracer.log(
            &TraceEvent::now(self.phase.as_str())
                .with_message(format!("{} candidates above threshold", candidates.len())),
        );

        self.phase = EnginePhase::Filling;
        let (filled, records) = run_fill_pass(
            &candidates,
            &mut self.used_fields,
            &mut self.used_keys,
            tracer,
        );

        self.phase = EnginePhase::Done;
        tracer.log(
            &TraceEvent::now(self.phase.as_str())
                .with_outcome(if filled > 0 { "filled" } else { "nothing_filled" }),
        );

        Ok(AutofillResult {
            success: filled > 0,
            fields_count: filled,
            fields_found: Some(fields.len()),
            message: format!("Filled {} of {} detected fields", filled, fields.len()),
            error: None,
            fills: records,
        })
    }

    /// Detection without filling, for diagnostics.
    pub fn field_summary(&mut self, root: &ElementNode) -> FieldSummary {
        let fields = self.detector.detect_fields(root);

        FieldSummary {
            success: true,
            fields_count: fields.len(),
            fields: fields
                .iter()
                .map(|f| FieldInfo {
                    name: f.name.clone(),
                    kind: f.kind.as_str().to_string(),
                    id: f.dom_id.clone(),
                    placeholder: f.placeholder.clone(),
                })
                .collect(),
        }
    }

    /// Drop all session exclusions and the detection cache. Call between
    /// sessions so stale used-sets never carry over to a new document state.
    pub fn reset(&mut self) {
        self.used_fields.clear();
        self.used_keys.clear();
        self.detector.clear_cache();
        self.phase = EnginePhase::Idle;
    }
}

impl Default for AutofillEngine {
    fn default() -> Self {
        AutofillEngine::new()
    }
}
