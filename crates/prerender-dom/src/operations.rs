//! DOM Node Operations
//!
//! Error type shared by the structural operations on [`crate::DomTree`].

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("node {0} not found")]
    NotFound(NodeId),

    /// Leaf parent, or inserting a node into its own subtree
    #[error("hierarchy request error: cannot insert {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// Attribute set on something that is not an element
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// Serializer reached a node the tree does not hold
    #[error("malformed tree: dangling node {0}")]
    MalformedTree(NodeId),
}
