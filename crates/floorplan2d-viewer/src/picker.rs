//! Element picker.
//!
//! Resolves a pointer target on the drawing surface back to the scene element
//! it belongs to by walking up to the nearest element root and reading the
//! metadata written there.

use std::collections::HashMap;
use std::fmt;

use floorplan2d_core::constants::{attr, ROTATION_ANCHOR_PART};
use floorplan2d_core::{ElementKind, PickError};
use serde::{Deserialize, Serialize};

/// Read access to the node tree of a drawing surface.
pub trait ElementTree {
    type Node: Copy + fmt::Debug;

    /// Whether `node` belongs to this tree.
    fn contains(&self, node: Self::Node) -> bool;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The drawing-surface root, where the ancestor walk stops.
    fn is_surface_root(&self, node: Self::Node) -> bool;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;
}

/// Scene element under the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementData {
    pub kind: ElementKind,
    pub layer_id: String,
    pub element_id: String,
    pub part: Option<String>,
    pub selected: bool,
}

impl ElementData {
    /// True when the pointer is on an item's rotation handle.
    pub fn is_rotation_anchor(&self) -> bool {
        self.part.as_deref() == Some(ROTATION_ANCHOR_PART)
    }
}

/// Finds the element owning `target`.
///
/// Returns `Ok(None)` when the walk reaches the surface root (or a detached
/// node) without meeting an element root. A missing `layer`, `prototype`,
/// `selected` or `id` attribute on the element root is an error.
pub fn pick_element<T: ElementTree>(
    tree: &T,
    target: T::Node,
) -> Result<Option<ElementData>, PickError> {
    if !tree.contains(target) {
        return Err(PickError::UnknownNode {
            node: format!("{target:?}"),
        });
    }

    let mut node = target;
    loop {
        if tree.is_surface_root(node) {
            return Ok(None);
        }
        if tree.attribute(node, attr::ELEMENT_ROOT).is_some() {
            break;
        }
        match tree.parent(node) {
            Some(parent) => node = parent,
            None => {
                tracing::warn!(?target, "pointer target is detached from the surface");
                return Ok(None);
            }
        }
    }

    let required = |name: &'static str| {
        tree.attribute(node, name)
            .ok_or(PickError::MissingAttribute { attribute: name })
    };

    let layer_id = required(attr::LAYER)?.to_string();
    let kind = required(attr::PROTOTYPE)?.parse::<ElementKind>()?;
    let selected = required(attr::SELECTED)? == "true";
    let element_id = required(attr::ID)?.to_string();
    let part = tree.attribute(node, attr::PART).map(str::to_string);

    Ok(Some(ElementData {
        kind,
        layer_id,
        element_id,
        part,
        selected,
    }))
}

/// Handle of a node in a [`SurfaceTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Default)]
struct SurfaceNode {
    parent: Option<NodeId>,
    attributes: HashMap<String, String>,
}

/// In-memory drawing surface: an arena of nodes with string attributes.
///
/// Node `0` is the surface root. Hosts that keep their own scene graph can
/// implement [`ElementTree`] directly instead.
#[derive(Debug, Clone)]
pub struct SurfaceTree {
    nodes: Vec<SurfaceNode>,
}

impl SurfaceTree {
    /// Creates a surface holding only its root.
    pub fn new() -> Self {
        Self {
            nodes: vec![SurfaceNode::default()],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Nodes in the tree, the surface root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Adds an untagged child node (a shape, group or label).
    pub fn add_child(&mut self, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SurfaceNode {
            parent: Some(parent),
            attributes: HashMap::new(),
        });
        id
    }

    /// Adds an element root carrying the full picker metadata.
    pub fn add_element(
        &mut self,
        parent: NodeId,
        kind: ElementKind,
        layer_id: &str,
        element_id: &str,
        selected: bool,
    ) -> NodeId {
        let node = self.add_child(parent);
        self.set_attribute(node, attr::ELEMENT_ROOT, "true");
        self.set_attribute(node, attr::LAYER, layer_id);
        self.set_attribute(node, attr::PROTOTYPE, kind.as_str());
        self.set_attribute(node, attr::SELECTED, if selected { "true" } else { "false" });
        self.set_attribute(node, attr::ID, element_id);
        node
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.attributes.remove(name);
        }
    }
}

impl Default for SurfaceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree for SurfaceTree {
    type Node = NodeId;

    fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    fn is_surface_root(&self, node: NodeId) -> bool {
        node.0 == 0
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(node.0)
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }
}
