use std::rc::Rc;

use propace_autofill::detect::field_model::{FieldDescriptor, FieldKind};
use propace_autofill::dom::dom_model::{Element, ElementNode, FieldIdentity};

/// Visible text input with a name attribute.
pub fn text_input(name: &str) -> ElementNode {
    Element::new("input")
        .with_input_type("text")
        .with_name(name)
        .into_node()
}

pub fn typed_input(name: &str, input_type: &str) -> ElementNode {
    Element::new("input")
        .with_input_type(input_type)
        .with_name(name)
        .into_node()
}

/// Body wrapper around a set of children.
pub fn page(children: Vec<ElementNode>) -> ElementNode {
    let mut body = Element::new("body");
    for child in children {
        body = body.with_child(child);
    }
    body.into_node()
}

pub fn data(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Descriptor over a live node, the way detection would build one.
pub fn descriptor_of(node: &ElementNode, identity: u64) -> FieldDescriptor {
    let el = node.borrow();

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
        identity: FieldIdentity(identity),
        name,
        dom_id: el.dom_id.clone(),
        placeholder: el.placeholder.clone(),
        kind: FieldKind::derive(&el),
        in_shadow_scope: false,
        current_value: el.value.clone(),
    }
}

/// Detached descriptor for pure scoring tests; the element handle dangles.
pub fn labeled_descriptor(name: &str, dom_id: &str, placeholder: &str) -> FieldDescriptor {
    FieldDescriptor {
        element: std::rc::Weak::new(),
        identity: FieldIdentity(0),
        name: name.to_string(),
        dom_id: dom_id.to_string(),
        placeholder: placeholder.to_string(),
        kind: FieldKind::TextLike,
        in_shadow_scope: false,
        current_value: String::new(),
    }
}

pub fn value_of(node: &ElementNode) -> String {
    node.borrow().value.clone()
}

pub fn events_of(node: &ElementNode) -> Vec<String> {
    node.borrow().fired_events.clone()
}
