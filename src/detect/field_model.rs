use crate::dom::dom_model::{Element, ElementHandle, FieldIdentity};

/// Fill strategy for a detected field, resolved once at discovery and never
/// re-derived from the live element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    TextLike,
    Select,
    Checkbox,
    Radio,
    ContentEditable,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::TextLike => "text",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::ContentEditable => "contenteditable",
        }
    }

    /// Derive the fill strategy from tag and type at detection time.
    pub fn derive(el: &Element) -> FieldKind {
        if el.content_editable {
            return FieldKind::ContentEditable;
        }
        match el.tag.as_str() {
            "select" => FieldKind::Select,
            "textarea" => FieldKind::TextLike,
            _ => match el.input_type.as_str() {
                "checkbox" => FieldKind::Checkbox,
                "radio" => FieldKind::Radio,
                _ => FieldKind::TextLike,
            },
        }
    }
}

/// One discovered fillable element.
///
/// Holds a non-owning handle to the live node plus the text snapshot taken
/// at discovery. One descriptor exists per unique element per scan, even
/// when the element is reachable through more than one shadow path.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub element: ElementHandle,
    pub identity: FieldIdentity,

    pub name: String,  // fallback order: name, id, placeholder, "unnamed"
    pub dom_id: String,
    pub placeholder: String,

    pub kind: FieldKind,
    pub in_shadow_scope: bool,
    pub current_value: String,  // snapshot at discovery, not kept live
}

impl FieldDescriptor {
    /// Lowercased haystack the scorer matches category patterns against.
    pub fn match_text(&self) -> String {
        format!("{} {} {}", self.name, self.dom_id, self.placeholder).to_lowercase()
    }
}
