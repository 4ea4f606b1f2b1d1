//! Synthetic Node
//!
//! One emulated DOM node. Structure lives in the node itself:
//! - `parent` is a back-reference only; the arena owns every node
//! - `children` is ordered and each child appears in exactly one parent
//! - `data` carries the kind-specific payload

use crate::{Attributes, NodeId};

/// Synthetic DOM node
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (None while detached)
    pub parent: Option<NodeId>,
    /// Children in document order
    pub children: Vec<NodeId>,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: impl Into<String>) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a new comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Comment(content.into()))
    }

    /// Create a new document fragment
    pub fn fragment() -> Self {
        Self::with_data(NodeData::Fragment)
    }

    /// Whether children may be inserted under this node
    #[inline]
    pub fn accepts_children(&self) -> bool {
        matches!(self.data, NodeData::Element(_) | NodeData::Fragment)
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Get comment content if this is a comment node
    #[inline]
    pub fn as_comment(&self) -> Option<&str> {
        match &self.data {
            NodeData::Comment(c) => Some(c),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
    /// Tagless container
    Fragment,
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name as given to createElement
    pub tag: String,
    /// Attributes set through setAttribute
    pub attrs: Attributes,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attributes::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Set an attribute, `None` clears it
    pub fn set_attr(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.attrs.set(name, value);
            }
            None => {
                self.attrs.remove(name);
            }
        }
    }
}
