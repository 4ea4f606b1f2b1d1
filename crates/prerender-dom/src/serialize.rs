//! HTML Serializer
//!
//! Turns a subtree back into markup:
//! - comment: `<!-- text -->`
//! - fragment: children only, no wrapping tag
//! - text: verbatim, no escaping
//! - element: `<tag name="value"...>children</tag>`

use crate::{DomError, DomTree, NodeData, NodeId};

/// Serialize the subtree rooted at `id` to an HTML string
pub fn serialize(tree: &DomTree, id: NodeId) -> Result<String, DomError> {
    let mut out = String::new();
    write_node(tree, id, &mut out)?;
    Ok(out)
}

fn write_node(tree: &DomTree, id: NodeId, out: &mut String) -> Result<(), DomError> {
    let node = tree.get(id).ok_or(DomError::MalformedTree(id))?;
    match &node.data {
        NodeData::Comment(text) => {
            out.push_str("<!-- ");
            out.push_str(text);
            out.push_str(" -->");
        }
        NodeData::Fragment => write_children(tree, &node.children, out)?,
        NodeData::Text(text) => out.push_str(text),
        NodeData::Element(elem) => {
            out.push('<');
            out.push_str(&elem.tag);
            for attr in elem.attrs.iter() {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                out.push_str(&attr.value);
                out.push('"');
            }
            out.push('>');
            write_children(tree, &node.children, out)?;
            out.push_str("</");
            out.push_str(&elem.tag);
            out.push('>');
        }
    }
    Ok(())
}

fn write_children(tree: &DomTree, children: &[NodeId], out: &mut String) -> Result<(), DomError> {
    for &child in children {
        write_node(tree, child, out)?;
    }
    Ok(())
}
