//! Structural equivalence of document trees.
//!
//! Markdown cannot tell `[text "a", text "b"]` from `[text "ab"]`, nor
//! remember attributes the remote service attaches for its own bookkeeping
//! (`doc.version`, `table.layout`, ...). Two trees are structurally
//! equivalent when their normal forms are equal:
//!
//! - adjacent text nodes carrying identical marks are merged, empty ones dropped
//! - runs of whitespace in text collapse to one space and block edges are
//!   trimmed, except inside code blocks where text is compared as is
//! - only meaningful attributes survive: `heading.level` (resolved with the
//!   renderer's defaulting) and a non-empty `codeBlock.language`
//! - opaque nodes are compared exactly, attributes and all

use super::nodes::{Attrs, Node, NodeKind};
use serde_json::Value;

/// Returns true when both trees have the same normal form.
pub fn structurally_equivalent(a: &Node, b: &Node) -> bool {
    normalize(a) == normalize(b)
}

/// Computes the normal form of a tree.
pub fn normalize(node: &Node) -> Node {
    normalize_node(node, false)
}

fn normalize_node(node: &Node, in_code: bool) -> Node {
    let kind = node.kind();
    if kind == NodeKind::Opaque {
        return node.clone();
    }

    let in_code = in_code || kind == NodeKind::CodeBlock;
    let children = node
        .children
        .iter()
        .map(|child| normalize_node(child, in_code))
        .collect();

    Node {
        tag: node.tag.clone(),
        children: merge_text_runs(children, in_code),
        text: node.text.as_ref().map(|text| {
            if in_code {
                text.clone()
            } else {
                collapse_whitespace(text)
            }
        }),
        attributes: meaningful_attributes(node, kind),
        marks: node.marks.clone(),
    }
}

fn meaningful_attributes(node: &Node, kind: NodeKind) -> Attrs {
    let mut attrs = Attrs::new();
    match kind {
        NodeKind::Heading => {
            attrs.insert("level".to_string(), Value::from(node.heading_level()));
        }
        NodeKind::CodeBlock => {
            if let Some(language) = node.attr_str("language").filter(|l| !l.is_empty()) {
                attrs.insert("language".to_string(), Value::from(language));
            }
        }
        _ => {}
    }
    attrs
}

fn merge_text_runs(children: Vec<Node>, in_code: bool) -> Vec<Node> {
    let mut merged: Vec<Node> = Vec::with_capacity(children.len());
    for child in children {
        if child.kind() == NodeKind::Text {
            if let Some(last) = merged.last_mut() {
                if last.kind() == NodeKind::Text && last.marks == child.marks {
                    let joined = format!("{}{}", last.text_str(), child.text_str());
                    last.text = Some(if in_code {
                        joined
                    } else {
                        collapse_whitespace(&joined)
                    });
                    continue;
                }
            }
        }
        merged.push(child);
    }

    if !in_code {
        trim_block_edges(&mut merged);
    }
    merged.retain(|child| child.kind() != NodeKind::Text || !child.text_str().is_empty());
    merged
}

fn trim_block_edges(children: &mut [Node]) {
    if let Some(first) = children.first_mut().filter(|n| n.kind() == NodeKind::Text) {
        first.text = Some(first.text_str().trim_start().to_string());
    }
    if let Some(last) = children.last_mut().filter(|n| n.kind() == NodeKind::Text) {
        last.text = Some(last.text_str().trim_end().to_string());
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
