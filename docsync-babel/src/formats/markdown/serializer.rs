//! Markdown serialization (document tree → markdown)
//!
//! A single recursive pass over the tree, writing into one `String`. Block
//! nodes end with a blank line so the parser can find block boundaries
//! again; inline nodes write nothing but their own markup. Nodes the block
//! dispatch does not cover go through the preservation marker codec.

use super::inline::apply_marks;
use super::lists::render_list;
use super::preserved;
use super::table::render_table;
use crate::ir::nodes::{Node, NodeKind};

/// Serialize a document tree to markdown
pub fn serialize_to_markdown(doc: &Node) -> String {
    let mut out = String::new();
    render_block(&mut out, doc);
    out
}

/// Renders `node` as a block.
pub(super) fn render_block(out: &mut String, node: &Node) {
    match node.kind() {
        NodeKind::Doc => {
            for child in &node.children {
                render_block(out, child);
            }
        }
        NodeKind::Paragraph => {
            render_inline_children(out, node);
            out.push_str("\n\n");
        }
        NodeKind::Heading => {
            out.push_str(&"#".repeat(node.heading_level()));
            out.push(' ');
            render_inline_line(out, node);
            out.push_str("\n\n");
        }
        NodeKind::BulletList | NodeKind::OrderedList => {
            render_list(out, node, "");
            out.push('\n');
        }
        NodeKind::CodeBlock => render_code_block(out, node),
        NodeKind::Blockquote => render_blockquote(out, node),
        NodeKind::Rule => out.push_str("---\n\n"),
        NodeKind::Table => render_table(out, node),
        NodeKind::Text
        | NodeKind::HardBreak
        | NodeKind::Mention
        | NodeKind::InlineCard
        | NodeKind::Emoji => render_inline(out, node, LineBreak::Newline),
        NodeKind::ListItem
        | NodeKind::TableRow
        | NodeKind::TableHeader
        | NodeKind::TableCell
        | NodeKind::Opaque => render_preserved(out, node),
    }
}

/// What a `hardBreak` turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineBreak {
    Newline,
    /// Headings, list item leads and table cells must stay on one line.
    Space,
}

/// Renders the children of a paragraph as inline markdown.
pub(super) fn render_inline_children(out: &mut String, node: &Node) {
    for child in &node.children {
        render_inline(out, child, LineBreak::Newline);
    }
}

/// Like [`render_inline_children`], with hard breaks written as spaces.
pub(super) fn render_inline_line(out: &mut String, node: &Node) {
    for child in &node.children {
        render_inline(out, child, LineBreak::Space);
    }
}

fn render_inline(out: &mut String, node: &Node, line_break: LineBreak) {
    match node.kind() {
        NodeKind::Text => out.push_str(&apply_marks(node.text_str(), &node.marks)),
        NodeKind::HardBreak => out.push(match line_break {
            LineBreak::Newline => '\n',
            LineBreak::Space => ' ',
        }),
        NodeKind::Mention => {
            let name = node.attr_str("text").unwrap_or("");
            out.push('@');
            out.push_str(name.strip_prefix('@').unwrap_or(name));
        }
        NodeKind::InlineCard => {
            out.push_str("[link](");
            out.push_str(node.attr_str("url").unwrap_or(""));
            out.push(')');
        }
        NodeKind::Emoji => {
            let text = node
                .attr_str("text")
                .or_else(|| node.attr_str("shortName"))
                .unwrap_or("");
            out.push_str(text);
        }
        _ => render_block(out, node),
    }
}

// no escaping: a ``` line inside the content ends the fence early
fn render_code_block(out: &mut String, node: &Node) {
    out.push_str("```");
    out.push_str(node.attr_str("language").unwrap_or(""));
    out.push('\n');
    out.push_str(&node.child_text());
    out.push_str("\n```\n\n");
}

fn render_blockquote(out: &mut String, node: &Node) {
    let mut inner = String::new();
    for child in &node.children {
        render_block(&mut inner, child);
    }
    for line in inner.trim_end_matches('\n').lines() {
        out.push_str("> ");
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
}

pub(super) fn render_preserved(out: &mut String, node: &Node) {
    log::debug!("preserving '{}' node in a marker block", node.tag);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&preserved::encode(node));
}
