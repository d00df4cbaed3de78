use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Shared handle to a live element in the page tree.
pub type ElementNode = Rc<RefCell<Element>>;

/// Non-owning reference to an element. Holding one never keeps a removed
/// node alive; upgrade fails once the page has dropped the element.
pub type ElementHandle = Weak<RefCell<Element>>;

/// Stable opaque identity assigned to an element at first discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldIdentity(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

/// One element of the in-memory page tree.
///
/// Mirrors what the snapshot extractor reports per node: identifying
/// attributes, current value state, interactability flags, computed style
/// relevant to visibility, and structure (children plus an optional shadow
/// scope). `fired_events` records synthetic event dispatches so callers and
/// tests can observe what a fill emitted.
#[derive(Debug)]
pub struct Element {
    pub tag: String,
    pub dom_id: String,
    pub name: String,
    pub input_type: String,
    pub placeholder: String,

    pub value: String,
    pub checked: bool,
    pub text: String,

    pub disabled: bool,
    pub read_only: bool,
    pub content_editable: bool,

    pub display: String,  // computed display, "" = default
    pub visibility: String,
    pub width: f32,  // rendered box, zero when not laid out
    pub height: f32,

    pub options: Vec<SelectOption>,
    pub selected_index: Option<usize>,

    pub children: Vec<ElementNode>,
    pub shadow_root: Option<ElementNode>,

    pub identity: Option<FieldIdentity>,
    pub fired_events: Vec<String>,
}

impl Element {
    /// Fresh element with rendered defaults (visible, enabled, empty).
    pub fn new(tag: &str) -> Element {
        Element {
            tag: tag.to_string(),
            dom_id: String::new(),
            name: String::new(),
            input_type: String::new(),
            placeholder: String::new(),
            value: String::new(),
            checked: false,
            text: String::new(),
            disabled: false,
            read_only: false,
            content_editable: false,
            display: String::new(),
            visibility: String::new(),
            width: 100.0,
            height: 20.0,
            options: Vec::new(),
            selected_index: None,
            children: Vec::new(),
            shadow_root: None,
            identity: None,
            fired_events: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Element {
        self.name = name.to_string();
        self
    }

    pub fn with_dom_id(mut self, dom_id: &str) -> Element {
        self.dom_id = dom_id.to_string();
        self
    }

    pub fn with_input_type(mut self, input_type: &str) -> Element {
        self.input_type = input_type.to_string();
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Element {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Element {
        self.value = value.to_string();
        self
    }

    pub fn with_options(mut self, options: &[(&str, &str)]) -> Element {
        self.options = options
            .iter()
            .map(|(value, text)| SelectOption {
                value: value.to_string(),
                text: text.to_string(),
            })
            .collect();
        self
    }

    pub fn with_child(mut self, child: ElementNode) -> Element {
        self.children.push(child);
        self
    }

    pub fn with_shadow_root(mut self, root: ElementNode) -> Element {
        self.shadow_root = Some(root);
        self
    }

    pub fn into_node(self) -> ElementNode {
        Rc::new(RefCell::new(self))
    }

    /// Record a synthetic event dispatch on this element.
    pub fn dispatch(&mut self, event: &str) {
        self.fired_events.push(event.to_string());
    }

    /// Cheap style check; does not force layout.
    pub fn is_style_hidden(&self) -> bool {
        self.display == "none" || self.visibility == "hidden"
    }

    pub fn has_rendered_box(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
