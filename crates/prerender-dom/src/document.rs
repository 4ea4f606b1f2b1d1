//! Document - the emulated `document` compiled code talks to
//!
//! Holds one batch worth of state: the node arena, the root container
//! every `querySelector` resolves to, the registered mount targets and the
//! style buffer fed by `document.head.appendChild`.

use std::collections::HashMap;

use crate::{DomResult, DomTree, NodeId, StyleBuffer, serialize};

/// Tag used for the root container and mount targets
pub const DEFAULT_CONTAINER_TAG: &str = "div";

/// Emulated document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Container returned by every querySelector call
    root: NodeId,
    /// Mount targets by instance key
    targets: HashMap<String, NodeId>,
    /// Style text by instance key
    styles: StyleBuffer,
    container_tag: String,
}

impl Document {
    /// Create a new document with a `div` root container
    pub fn new() -> Self {
        Self::with_container_tag(DEFAULT_CONTAINER_TAG)
    }

    /// Create a new document whose containers use `tag`
    pub fn with_container_tag(tag: &str) -> Self {
        let mut tree = DomTree::new();
        let root = tree.create_element(tag);
        Self {
            tree,
            root,
            targets: HashMap::new(),
            styles: StyleBuffer::new(),
            container_tag: tag.to_string(),
        }
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        self.tree.create_text(text)
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.tree.create_comment(text)
    }

    pub fn create_document_fragment(&mut self) -> NodeId {
        self.tree.create_fragment()
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.tree.append_child(parent, child)
    }

    pub fn insert_before(&mut self, parent: NodeId, node: NodeId, reference: Option<NodeId>) -> DomResult<()> {
        self.tree.insert_before(parent, node, reference)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: Option<&str>) -> DomResult<()> {
        self.tree.set_attribute(node, name, value)
    }

    /// Selectors are not matched; the root container stands in for any mount point
    pub fn query_selector(&self, selector: &str) -> NodeId {
        tracing::trace!(selector, "querySelector resolved to root container");
        self.root
    }

    /// Root container
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// `document.head.appendChild(style)` with the style's text already read
    pub fn append_style_text(&mut self, text: &str) {
        self.styles.push(text);
    }

    /// Create an empty container registered under `key`
    pub fn register_target(&mut self, key: &str) -> NodeId {
        let id = self.tree.create_element(&self.container_tag);
        self.targets.insert(key.to_string(), id);
        id
    }

    /// Registered container for `key`
    pub fn target(&self, key: &str) -> Option<NodeId> {
        self.targets.get(key).copied()
    }

    /// Serialize a subtree
    pub fn to_html(&self, id: NodeId) -> DomResult<String> {
        serialize(&self.tree, id)
    }

    pub fn styles(&self) -> &StyleBuffer {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut StyleBuffer {
        &mut self.styles
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_selector_always_root() {
        let doc = Document::new();
        assert_eq!(doc.query_selector("#app"), doc.root());
        assert_eq!(doc.query_selector("main > .x"), doc.root());
    }

    #[test]
    fn test_targets_are_distinct() {
        let mut doc = Document::new();
        let a = doc.register_target("Card:0");
        let b = doc.register_target("Card:1");

        assert_ne!(a, b);
        assert_eq!(doc.target("Card:0"), Some(a));
        assert_eq!(doc.target("Card:2"), None);
        assert_eq!(doc.to_html(a).unwrap(), "<div></div>");
    }

    #[test]
    fn test_head_append_routes_to_styles() {
        let mut doc = Document::new();
        doc.styles_mut().set_current_key("Card:0");

        let style = doc.create_element("style");
        let css = doc.create_text_node("p{margin:0}");
        doc.append_child(style, css).unwrap();
        let text = doc.tree().text_content(style);
        doc.append_style_text(&text);
        doc.append_style_text("h1{}");

        assert_eq!(doc.styles().get("Card:0"), Some("p{margin:0}h1{}"));
        // head never becomes part of a tree
        assert_eq!(doc.tree().parent(style), None);
    }

    #[test]
    fn test_custom_container_tag() {
        let mut doc = Document::with_container_tag("section");
        let target = doc.register_target("App:0");
        assert_eq!(doc.to_html(target).unwrap(), "<section></section>");
        assert_eq!(doc.to_html(doc.root()).unwrap(), "<section></section>");
    }
}
