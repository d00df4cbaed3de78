use std::collections::HashSet;

use crate::detect::field_model::{FieldDescriptor, FieldKind};
use crate::dom::dom_model::FieldIdentity;
use crate::engine::error::AutofillError;
use crate::engine::result_model::FillRecord;
use crate::matching::mapper::MappingCandidate;
use crate::trace::{logger::TraceLogger, trace::TraceEvent};

/// Truthy forms a checkbox accepts.
const CHECKED_VALUES: [&str; 4] = ["true", "1", "yes", "on"];

/// Apply one value to one field, dispatching on the kind resolved at
/// discovery. Mutates nothing on failure paths other than the generic
/// text-like write itself.
pub fn fill_field(field: &FieldDescriptor, value: &str) -> Result<(), AutofillError> {
    let node = field
        .element
        .upgrade()
        .ok_or_else(|| AutofillError::ElementDetached {
            field: field.name.clone(),
        })?;

    let mut el = node.try_borrow_mut().map_err(|_| AutofillError::NodeBusy {
        field: field.name.clone(),
    })?;

    match field.kind {
        FieldKind::Select => {
            let needle = value.to_lowercase();
            let index = el.options.iter().position(|o| {
                o.text.to_lowercase().contains(&needle) || o.value.to_lowercase().contains(&needle)
            });

            match index {
                Some(i) => {
                    let chosen = el.options[i].clone();
                    // An option without an explicit value carries its text.
                    el.value = if chosen.value.is_empty() {
                        chosen.text
                    } else {
                        chosen.value
                    };
                    el.selected_index = Some(i);
                    el.dispatch("change");
                    Ok(())
                }
                None => Err(AutofillError::NoMatchingOption {
                    field: field.name.clone(),
                    value: value.to_string(),
                }),
            }
        }

        FieldKind::Checkbox => {
            el.checked = CHECKED_VALUES.contains(&value.to_lowercase().as_str());
            el.dispatch("change");
            Ok(())
        }

        FieldKind::Radio => {
            // A radio only accepts its own literal value; checking a
            // mismatched radio would flip the wrong group member.
            if el.value == value {
                el.checked = true;
                el.dispatch("change");
                Ok(())
            } else {
                Err(AutofillError::RadioValueMismatch {
                    field: field.name.clone(),
                    value: value.to_string(),
                })
            }
        }

        FieldKind::ContentEditable => {
            el.text = value.to_string();
            Ok(())
        }

        FieldKind::TextLike => {
            let was_read_only = el.read_only;
            if was_read_only {
                el.read_only = false;
            }
            el.value = value.to_string();
            el.dispatch("input");
            el.dispatch("change");
            el.read_only = was_read_only;
            Ok(())
        }
    }
}

/// Greedy consumption of the sorted candidate sequence, one pass.
///
/// Highest score commits first; once a field identity or data key is
/// consumed, every lower-scoring candidate touching it is skipped. A failed
/// attempt costs only that candidate.
pub fn run_fill_pass(
    candidates: &[MappingCandidate],
    used_fields: &mut HashSet<FieldIdentity>,
    used_keys: &mut HashSet<String>,
    tracer: &TraceLogger,
) -> (usize, Vec<FillRecord>) {
    let mut filled = 0;
    let mut records = Vec::new();

    for cand in candidates {
        if used_fields.contains(&cand.field.identity) || used_keys.contains(&cand.data_key) {
            tracer.log(
                &TraceEvent::now("filling")
                    .with_candidate(&cand.data_key, &cand.field.name, cand.score)
                    .with_outcome("skipped"),
            );
            continue;
        }

        match fill_field(&cand.field, &cand.value) {
            Ok(()) => {
                used_fields.insert(cand.field.identity);
                used_keys.insert(cand.data_key.clone());
                filled += 1;

                records.push(FillRecord {
                    data_key: cand.data_key.clone(),
                    field: cand.field.name.clone(),
                    kind: cand.field.kind.as_str().to_string(),
                    score: cand.score,
                    filled: true,
                    error: None,
                });
                tracer.log(
                    &TraceEvent::now("filling")
                        .with_candidate(&cand.data_key, &cand.field.name, cand.score)
                        .with_outcome("filled"),
                );
            }
            Err(e) => {
                eprintln!("Warning: fill failed for '{}': {}", cand.field.name, e);

                records.push(FillRecord {
                    data_key: cand.data_key.clone(),
                    field: cand.field.name.clone(),
                    kind: cand.field.kind.as_str().to_string(),
                    score: cand.score,
                    filled: false,
                    error: Some(e.to_string()),
                });
                tracer.log(
                    &TraceEvent::now("filling")
                        .with_candidate(&cand.data_key, &cand.field.name, cand.score)
                        .with_outcome("failed")
                        .with_message(e),
                );
            }
        }
    }

    (filled, records)
}
