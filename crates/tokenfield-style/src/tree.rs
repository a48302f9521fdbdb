//! Element tree the selector engine matches against.
//!
//! Elements live in a slot map arena and are addressed by [`NodeId`].
//! Every state change bumps the tree's generation so cached styles keyed
//! on it are invalidated automatically.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use slotmap::{SlotMap, new_key_type};

use crate::{Error, Result};

new_key_type! {
    /// Stable handle to an element inside an [`ElementTree`].
    pub struct NodeId;
}

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

/// Dynamic state of an element that pseudo-classes test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ElementState {
    /// Pointer is over the element.
    pub hovered: bool,
    /// Element has keyboard focus.
    pub focused: bool,
    /// Element holds user-entered text.
    pub has_text: bool,
}

/// A single element: tag, identity, classes, attributes and state.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Tag name (`div`, `input`, ...).
    pub tag: String,
    /// Optional element id.
    pub id: Option<String>,
    /// Class list.
    pub classes: Vec<String>,
    /// Attributes by name.
    pub attributes: BTreeMap<String, String>,
    /// Dynamic state.
    pub state: ElementState,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    /// Create an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Add a class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the initial state.
    pub fn with_state(mut self, state: ElementState) -> Self {
        self.state = state;
        self
    }

    /// Check for a class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena of elements forming a single rooted tree.
#[derive(Debug)]
pub struct ElementTree {
    nodes: SlotMap<NodeId, Element>,
    root: Option<NodeId>,
    generation: u64,
    tree_id: u64,
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            generation: 0,
            tree_id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Process-unique identifier of this tree.
    pub fn tree_id(&self) -> u64 {
        self.tree_id
    }

    /// Incremented on every structural or state change.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Root node, if one was inserted.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert the root element, replacing any previous tree contents.
    pub fn insert_root(&mut self, element: Element) -> NodeId {
        self.nodes.clear();
        let id = self.nodes.insert(element);
        self.root = Some(id);
        self.generation += 1;
        id
    }

    /// Append `element` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, mut element: Element) -> Result<NodeId> {
        if !self.nodes.contains_key(parent) {
            return Err(Error::UnknownNode);
        }
        element.parent = Some(parent);
        element.children.clear();
        let id = self.nodes.insert(element);
        if let Some(parent) = self.nodes.get_mut(parent) {
            parent.children.push(id);
        }
        self.generation += 1;
        Ok(id)
    }

    /// Look up an element.
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id)
    }

    /// Replace the dynamic state of an element.
    pub fn set_state(&mut self, id: NodeId, state: ElementState) -> Result<()> {
        let element = self.nodes.get_mut(id).ok_or(Error::UnknownNode)?;
        if element.state != state {
            element.state = state;
            self.generation += 1;
        }
        Ok(())
    }

    /// Update the dynamic state of an element in place.
    pub fn update_state(&mut self, id: NodeId, f: impl FnOnce(&mut ElementState)) -> Result<()> {
        let mut state = self.nodes.get(id).ok_or(Error::UnknownNode)?.state;
        f(&mut state);
        self.set_state(id, state)
    }

    /// Ancestors from the immediate parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = self.nodes.get(id).and_then(|e| e.parent);
        while let Some(node) = current {
            result.push(node);
            current = self.nodes.get(node).and_then(|e| e.parent);
        }
        result
    }

    /// Preceding siblings, nearest first.
    pub fn previous_siblings(&self, id: NodeId) -> Vec<NodeId> {
        let Some(parent) = self.nodes.get(id).and_then(|e| e.parent) else {
            return Vec::new();
        };
        let Some(siblings) = self.nodes.get(parent).map(|p| p.children.as_slice()) else {
            return Vec::new();
        };
        match siblings.iter().position(|&s| s == id) {
            Some(index) => siblings[..index].iter().rev().copied().collect(),
            None => Vec::new(),
        }
    }

    /// All descendants in depth-first pre-order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        self.collect_descendants(id, &mut result);
        result
    }

    fn collect_descendants(&self, id: NodeId, result: &mut Vec<NodeId>) {
        if let Some(element) = self.nodes.get(id) {
            for &child in &element.children {
                result.push(child);
                self.collect_descendants(child, result);
            }
        }
    }
}
