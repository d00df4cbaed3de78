use crate::detect::field_model::FieldDescriptor;
use crate::matching::patterns::{categories, normalize_key};

pub const DIRECT_SCORE: f32 = 0.9;

/// Confidence that `data_key` belongs in `field`, in `[0, 1]`.
///
/// Two tiers: the category table (direct hits score 0.9), then a small set
/// of substring fallbacks preserved for behavioral parity with the original
/// heuristics. The fallbacks are coarse by design; the mapping threshold
/// absorbs their false positives.
pub fn score(data_key: &str, field: &FieldDescriptor) -> f32 {
    let key = normalize_key(data_key);
    let text = field.match_text();

    for cat in categories() {
        if cat.data_keys.iter().any(|alias| key.contains(alias)) && cat.pattern.is_match(&text) {
            return DIRECT_SCORE;
        }
    }

    fuzzy_score(&key, &text)
}

/// Fallback tier: each rule is independent, the maximum wins.
fn fuzzy_score(key: &str, text: &str) -> f32 {
    let mut best: f32 = 0.0;

    if key.contains("name") && text.contains("name") {
        best = best.max(0.7);
    }
    if key.contains("email") && text.contains("email") {
        best = best.max(0.8);
    }
    if key.contains("phone") && text.contains("phone") {
        best = best.max(0.8);
    }
    if key.contains("address") && text.contains("address") {
        best = best.max(0.7);
    }

    best
}
