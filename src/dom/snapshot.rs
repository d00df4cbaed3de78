use serde::Deserialize;

use crate::dom::dom_model::{Element, ElementNode, SelectOption};
use crate::engine::error::AutofillError;

// ============================================================================
// Page snapshot — JSON produced by the DOM extractor, one object per node
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NodeSnapshot {
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub input_type: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(rename = "readOnly", default)]
    pub read_only: bool,
    #[serde(rename = "contentEditable", default)]
    pub content_editable: bool,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default = "default_extent")]
    pub width: f32,
    #[serde(default = "default_extent")]
    pub height: f32,
    #[serde(default)]
    pub options: Vec<OptionSnapshot>,
    #[serde(default)]
    pub children: Vec<NodeSnapshot>,
    #[serde(rename = "shadowRoot", default)]
    pub shadow_root: Option<Box<NodeSnapshot>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionSnapshot {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

// Extractors omit box metrics for nodes they consider trivially visible.
fn default_extent() -> f32 {
    1.0
}

/// Read a page snapshot file and build the live element tree.
pub fn load_snapshot(path: &str) -> Result<ElementNode, AutofillError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| AutofillError::SnapshotRead {
            path: path.to_string(),
            source: e,
        })?;

    let snapshot: NodeSnapshot =
        serde_json::from_str(&content).map_err(|e| AutofillError::SnapshotParse {
            path: path.to_string(),
            source: e,
        })?;

    Ok(build_tree(&snapshot))
}

/// Materialize a snapshot into shared element nodes.
pub fn build_tree(snapshot: &NodeSnapshot) -> ElementNode {
    let mut el = Element::new(&snapshot.tag);
    el.dom_id = snapshot.id.clone().unwrap_or_default();
    el.name = snapshot.name.clone().unwrap_or_default();
    el.input_type = snapshot.input_type.clone().unwrap_or_default();
    el.placeholder = snapshot.placeholder.clone().unwrap_or_default();
    el.value = snapshot.value.clone().unwrap_or_default();
    el.checked = snapshot.checked;
    el.text = snapshot.text.clone().unwrap_or_default();
    el.disabled = snapshot.disabled;
    el.read_only = snapshot.read_only;
    el.content_editable = snapshot.content_editable;
    el.display = snapshot.display.clone().unwrap_or_default();
    el.visibility = snapshot.visibility.clone().unwrap_or_default();
    el.width = snapshot.width;
    el.height = snapshot.height;

    el.options = snapshot
        .options
        .iter()
        .map(|o| SelectOption {
            value: o.value.clone().unwrap_or_default(),
            text: o.text.clone().unwrap_or_default(),
        })
        .collect();

    el.children = snapshot.children.iter().map(build_tree).collect();
    el.shadow_root = snapshot.shadow_root.as_deref().map(build_tree);

    el.into_node()
}
