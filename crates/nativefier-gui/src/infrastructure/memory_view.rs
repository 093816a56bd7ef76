//! In-memory [`ViewSurface`].
//!
//! Holds a flat element tree: each [`ElementId`] owns an ordered list of
//! [`Node`]s, an optional path datum, an input value and at most one gesture
//! binding.  The console front end renders it as text; tests inspect it
//! directly.

use std::collections::BTreeMap;

use crate::domain::{ElementId, Gesture, ViewSurface};

/// Separator glyph shown between breadcrumb segments.
pub const SEPARATOR_GLYPH: &str = " > ";

/// One child node of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Separator,
}

/// An element tree kept entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryView {
    children: BTreeMap<ElementId, Vec<Node>>,
    path_data: BTreeMap<ElementId, String>,
    fields: BTreeMap<ElementId, String>,
    bindings: BTreeMap<ElementId, Gesture>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The gesture a click on `target` triggers, if one is bound.
    pub fn click(&self, target: ElementId) -> Option<Gesture> {
        self.bindings.get(&target).copied()
    }

    /// Sets the value of an input field, as if the user had typed it.
    pub fn set_field_value(&mut self, target: ElementId, value: impl Into<String>) {
        self.fields.insert(target, value.into());
    }

    pub fn children(&self, target: ElementId) -> &[Node] {
        self.children.get(&target).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Text nodes of `target`, in order.
    pub fn segments(&self, target: ElementId) -> Vec<&str> {
        self.children(target)
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Separator => None,
            })
            .collect()
    }

    pub fn separator_count(&self, target: ElementId) -> usize {
        self.children(target)
            .iter()
            .filter(|node| matches!(node, Node::Separator))
            .count()
    }

    /// Number of elements with a gesture bound.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Indicators in the build-status area.
    pub fn statuses(&self) -> Vec<&str> {
        self.segments(ElementId::BuildStatus)
    }

    /// The content of `target` as a single line of text.
    pub fn render(&self, target: ElementId) -> String {
        self.children(target)
            .iter()
            .map(|node| match node {
                Node::Text(text) => text.as_str(),
                Node::Separator => SEPARATOR_GLYPH,
            })
            .collect()
    }
}

impl ViewSurface for MemoryView {
    fn bind(&mut self, target: ElementId, gesture: Gesture) {
        self.bindings.insert(target, gesture);
    }

    fn clear(&mut self, target: ElementId) {
        self.children.remove(&target);
    }

    fn append_text(&mut self, target: ElementId, text: &str) {
        self.children
            .entry(target)
            .or_default()
            .push(Node::Text(text.to_owned()));
    }

    fn append_separator(&mut self, target: ElementId) {
        self.children.entry(target).or_default().push(Node::Separator);
    }

    fn set_path_data(&mut self, target: ElementId, path: &str) {
        self.path_data.insert(target, path.to_owned());
    }

    fn path_data(&self, target: ElementId) -> Option<String> {
        self.path_data.get(&target).cloned()
    }

    fn field_value(&self, target: ElementId) -> String {
        self.fields.get(&target).cloned().unwrap_or_default()
    }
}
