use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

use crate::detect::cache::{FieldCache, structure_fingerprint};
use crate::detect::field_model::{FieldDescriptor, FieldKind};
use crate::dom::dom_model::{Element, ElementNode, FieldIdentity};

/// Walks the page tree once per cache invalidation window and produces
/// normalized descriptors for every currently-fillable element.
///
/// All detection state (cache, identity counter) lives on the instance, so
/// independent page contexts each run their own detector without
/// cross-contamination.
pub struct FieldDetector {
    cache: FieldCache,
    next_identity: u64,
    scan_count: u64,
}

impl FieldDetector {
    pub fn new() -> FieldDetector {
        FieldDetector {
            cache: FieldCache::new(),
            next_identity: 0,
            scan_count: 0,
        }
    }

    /// Detector with a custom cache TTL (tests shrink it to force expiry).
    pub fn with_cache_ttl(ttl: Duration) -> FieldDetector {
        FieldDetector {
            cache: FieldCache::with_ttl(ttl),
            next_identity: 0,
            scan_count: 0,
        }
    }

    /// Traversals performed so far. A cache hit leaves this untouched.
    pub fn scan_count(&self) -> u64 {
        self.scan_count
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Current fillable fields, from cache when the page structure and scan
    /// age allow it, otherwise via one fresh traversal.
    pub fn detect_fields(&mut self, root: &ElementNode) -> Vec<FieldDescriptor> {
        let fingerprint = structure_fingerprint(root);

        if let Some(cached) = self.cache.get(&fingerprint) {
            return cached.to_vec();
        }

        let fields = self.scan(root);
        self.cache.set(fingerprint, fields.clone());
        fields
    }

    fn scan(&mut self, root: &ElementNode) -> Vec<FieldDescriptor> {
        self.scan_count += 1;

        let mut visited: HashSet<FieldIdentity> = HashSet::new();
        let mut fields = Vec::new();
        self.collect(root, false, &mut visited, &mut fields);
        fields
    }

    /// Recursive walk over one element and everything below it, including a
    /// hosted shadow scope. A failure on one node skips that subtree only.
    fn collect(
        &mut self,
        node: &ElementNode,
        in_shadow: bool,
        visited: &mut HashSet<FieldIdentity>,
        fields: &mut Vec<FieldDescriptor>,
    ) {
        let identity = match self.ensure_identity(node) {
            Some(identity) => identity,
            None => {
                eprintln!("Warning: skipping busy element subtree during scan");
                return;
            }
        };

        // Identity-keyed: a shadow host reachable through two paths is
        // processed once.
        if !visited.insert(identity) {
            return;
        }

        let (children, shadow_root) = {
            let el = match node.try_borrow() {
                Ok(el) => el,
                Err(_) => {
                    eprintln!("Warning: skipping busy element subtree during scan");
                    return;
                }
            };

            if is_field_candidate(&el) && is_fillable(&el) {
                fields.push(build_descriptor(node, identity, &el, in_shadow));
            }

            (el.children.clone(), el.shadow_root.clone())
        };

        for child in &children {
            self.collect(child, in_shadow, visited, fields);
        }
        if let Some(shadow) = &shadow_root {
            self.collect(shadow, true, visited, fields);
        }
    }

    /// Stable identity, assigned on first discovery and reused afterwards.
    fn ensure_identity(&mut self, node: &ElementNode) -> Option<FieldIdentity> {
        let mut el = node.try_borrow_mut().ok()?;

        match el.identity {
            Some(identity) => Some(identity),
            None => {
                let identity = FieldIdentity(self.next_identity);
                self.next_identity += 1;
                el.identity = Some(identity);
                Some(identity)
            }
        }
    }
}

impl Default for FieldDetector {
    fn default() -> Self {
        FieldDetector::new()
    }
}

/// Element kinds detection considers at all: inputs other than
/// hidden/submit/button, selects, textareas, and content-editable nodes.
fn is_field_candidate(el: &Element) -> bool {
    if el.content_editable {
        return true;
    }

    match el.tag.as_str() {
        "select" | "textarea" => true,
        "input" => !matches!(el.input_type.as_str(), "hidden" | "submit" | "button"),
        _ => false,
    }
}

/// Gate on current interactability: enabled, writable, styled visible, and
/// actually laid out.
fn is_fillable(el: &Element) -> bool {
    !el.disabled && !el.read_only && !el.is_style_hidden() && el.has_rendered_box()
}

fn build_descriptor(
    node: &ElementNode,
    identity: FieldIdentity,
    el: &Element,
    in_shadow: bool,
) -> FieldDescriptor {
    let name = if !el.name.is_empty() {
        el.name.clone()
    } else if !el.dom_id.is_empty() {
        el.dom_id.clone()
    } else if !el.placeholder.is_empty() {
        el.placeholder.clone()
    } else {
        "unnamed".to_string()
    };

    FieldDescriptor {
        element: Rc::downgrade(node),
        identity,
        name,
        dom_id: el.dom_id.clone(),
        placeholder: el.placeholder.clone(),
        kind: FieldKind::derive(el),
        in_shadow_scope: in_shadow,
        current_value: el.value.clone(),
    }
}
