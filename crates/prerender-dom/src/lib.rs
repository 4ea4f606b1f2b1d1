//! Prerender DOM - Synthetic Document Object Model
//!
//! The minimal node tree compiled component code builds when it runs
//! outside a browser, plus the serializer that turns it back into markup.
//!
//! Nodes are arena-allocated in a [`DomTree`] and addressed by [`NodeId`].
//! A [`Document`] wraps one tree together with the root container, the
//! per-component mount targets and the [`StyleBuffer`].

mod attributes;
mod document;
mod node;
mod operations;
mod serialize;
mod style;
mod tree;

pub use attributes::{Attr, Attributes};
pub use document::Document;
pub use node::{ElementData, Node, NodeData};
pub use operations::{DomError, DomResult};
pub use serialize::serialize;
pub use style::StyleBuffer;
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Raw arena index, as handed to script code
    #[inline]
    pub fn to_raw(self) -> u32 {
        self.0
    }

    /// Rebuild an id from a raw index received from script code
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
