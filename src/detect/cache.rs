use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::detect::field_model::FieldDescriptor;
use crate::dom::dom_model::ElementNode;

pub const CACHE_TTL_MS: u64 = 30_000;
pub const MAX_CACHED_SCANS: usize = 50;

// ============================================================================
// Structural fingerprint
// ============================================================================

/// Cheap structural signature of a page tree: form count, field-tag count,
/// and total serialized length, digested into one fixed-width string.
///
/// Recomputing this is far cheaper than hashing full content; content-only
/// edits that keep the structure and length stable go unnoticed, which the
/// cache accepts as the cost of not re-walking the tree.
pub fn structure_fingerprint(root: &ElementNode) -> String {
    let mut forms: usize = 0;
    let mut fields: usize = 0;
    let mut body_len: usize = 0;

    measure(root, &mut forms, &mut fields, &mut body_len);

    digest(&format!("forms:{forms}|fields:{fields}|len:{body_len}"))
}

fn measure(node: &ElementNode, forms: &mut usize, fields: &mut usize, body_len: &mut usize) {
    let el = match node.try_borrow() {
        Ok(el) => el,
        Err(_) => return,  // busy node, leave it out of the signature
    };

    match el.tag.as_str() {
        "form" => *forms += 1,
        "input" | "select" | "textarea" => *fields += 1,
        _ => {}
    }

    *body_len += el.tag.len()
        + el.dom_id.len()
        + el.name.len()
        + el.placeholder.len()
        + el.text.len()
        + 2;  // tag delimiters

    for child in &el.children {
        measure(child, forms, fields, body_len);
    }
    if let Some(shadow) = &el.shadow_root {
        measure(shadow, forms, fields, body_len);
    }
}

fn digest(signature: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(signature.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Scan cache
// ============================================================================

struct CacheEntry {
    fields: Vec<FieldDescriptor>,
    captured_at: Instant,
}

/// Memoizes detection scans against their structural fingerprint.
///
/// An entry answers `get` only while its fingerprint still matches the page
/// and its age is below the TTL. The entry count is bounded; crossing the
/// bound clears everything before the next store.
pub struct FieldCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
}

impl FieldCache {
    pub fn new() -> FieldCache {
        FieldCache::with_ttl(Duration::from_millis(CACHE_TTL_MS))
    }

    pub fn with_ttl(ttl: Duration) -> FieldCache {
        FieldCache {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn is_valid(&self, fingerprint: &str) -> bool {
        match self.entries.get(fingerprint) {
            Some(entry) => entry.captured_at.elapsed() < self.ttl,
            None => false,
        }
    }

    /// Cached field sequence for this fingerprint, if still valid.
    /// Read-only: an expired entry is not evicted here.
    pub fn get(&self, fingerprint: &str) -> Option<&[FieldDescriptor]> {
        self.entries
            .get(fingerprint)
            .filter(|entry| entry.captured_at.elapsed() < self.ttl)
            .map(|entry| entry.fields.as_slice())
    }

    pub fn set(&mut self, fingerprint: String, fields: Vec<FieldDescriptor>) {
        if self.entries.len() > MAX_CACHED_SCANS {
            self.entries.clear();
        }

        self.entries.insert(
            fingerprint,
            CacheEntry {
                fields,
                captured_at: Instant::now(),
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for FieldCache {
    fn default() -> Self {
        FieldCache::new()
    }
}
