use std::cmp::Ordering;
use std::collections::HashSet;

use crate::detect::field_model::FieldDescriptor;
use crate::dom::dom_model::FieldIdentity;
use crate::matching::scorer::score;

/// Minimum confidence for a candidate to enter the mapping at all.
pub const MIN_SCORE: f32 = 0.3;

/// One scored pairing of a data key with a detected field. Transient:
/// produced fresh per autofill pass, never persisted.
#[derive(Debug, Clone)]
pub struct MappingCandidate {
    pub data_key: String,
    pub value: String,
    pub field: FieldDescriptor,
    pub score: f32,
}

/// Strictly-above-threshold gate. A score of exactly `MIN_SCORE` stays out.
pub fn above_threshold(score: f32) -> bool {
    score > MIN_SCORE
}

/// Cross-product unused data keys against unused fields and collect every
/// above-threshold candidate, ordered for greedy assignment.
///
/// Pure with respect to session state: the used-sets are only read here.
/// The sort is stable and descending by score, so ties keep discovery order
/// (data-key order first, then field order). No deduplication happens at
/// this stage; conflict resolution belongs to the consumption loop.
pub fn build_candidates(
    data: &[(String, String)],
    fields: &[FieldDescriptor],
    used_keys: &HashSet<String>,
    used_fields: &HashSet<FieldIdentity>,
) -> Vec<MappingCandidate> {
    let mut candidates = Vec::new();

    for (data_key, value) in data {
        if value.is_empty() || used_keys.contains(data_key) {
            continue;
        }

        for field in fields {
            if used_fields.contains(&field.identity) {
                continue;
            }

            let s = score(data_key, field);
            if above_threshold(s) {
                candidates.push(MappingCandidate {
                    data_key: data_key.clone(),
                    value: value.clone(),
                    field: field.clone(),
                    score: s,
                });
            }
        }
    }

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates
}
