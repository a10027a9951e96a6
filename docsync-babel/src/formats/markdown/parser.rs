//! Markdown parsing (markdown → document tree)
//!
//! A recursive-descent parser over lines. At each position the block
//! candidates are tried in a fixed order and the first match consumes one
//! or more lines:
//!
//! 1. preservation marker (falls through when the block does not decode)
//! 2. horizontal rule: `---`, `***` or `___`
//! 3. heading: one to six leading `#`
//! 4. fenced code block
//! 5. blockquote: `> ` prefix or a lone `>`
//! 6. bullet item, then ordered item
//! 7. pipe table (falls through when it is a single row)
//! 8. paragraph
//!
//! Nothing here fails: any input produces some tree.

use super::inline::parse_inline;
use super::lists::{is_bullet_item, is_ordered_item, parse_list};
use super::preserved;
use super::table::{is_table_row, parse_table};
use crate::ir::nodes::{Node, NodeKind};

const FENCE: &str = "```";

/// Parse markdown into a `doc` node
pub fn parse_from_markdown(source: &str) -> Node {
    let lines: Vec<&str> = source.lines().collect();
    Node::doc(parse_blocks(&lines)).with_attr("version", 1)
}

/// Parses a run of lines into block nodes, skipping blank lines.
fn parse_blocks(lines: &[&str]) -> Vec<Node> {
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if lines[i].trim().is_empty() {
            i += 1;
            continue;
        }
        let (block, next) = parse_block(lines, i);
        blocks.push(block);
        i = next;
    }
    blocks
}

fn parse_block(lines: &[&str], i: usize) -> (Node, usize) {
    let line = lines[i];

    if preserved::is_marker_open(line) {
        match preserved::decode(&lines[i..]) {
            Ok(node) => {
                log::trace!("line {}: restored preserved '{}' node", i + 1, node.tag);
                return (node, i + 3);
            }
            Err(err) => log::debug!("line {}: reading marker block as text: {err}", i + 1),
        }
    }

    if is_rule(line) {
        log::trace!("line {}: rule", i + 1);
        return (Node::element(NodeKind::Rule, Vec::new()), i + 1);
    }

    if let Some((level, text)) = parse_heading(line) {
        log::trace!("line {}: heading level {level}", i + 1);
        return (Node::heading(level, parse_inline(text)), i + 1);
    }

    if is_fence(line) {
        log::trace!("line {}: code block", i + 1);
        return parse_code_block(lines, i);
    }

    if is_blockquote_line(line) {
        log::trace!("line {}: blockquote", i + 1);
        return parse_blockquote(lines, i);
    }

    if is_bullet_item(line) {
        log::trace!("line {}: bullet list", i + 1);
        return parse_list(lines, i, false);
    }

    if is_ordered_item(line) {
        log::trace!("line {}: ordered list", i + 1);
        return parse_list(lines, i, true);
    }

    if is_table_row(line) {
        if let Some(table) = parse_table(lines, i) {
            log::trace!("line {}: table", i + 1);
            return table;
        }
    }

    parse_paragraph(lines, i)
}

fn is_rule(line: &str) -> bool {
    matches!(line.trim(), "---" | "***" | "___")
}

/// Heading level and text for lines starting with one to six `#`.
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    Some((level as u8, line[level..].trim()))
}

fn is_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}

fn is_blockquote_line(line: &str) -> bool {
    line.starts_with("> ") || line == ">"
}

/// True when `line` would open a block other than a paragraph.
fn starts_block(line: &str) -> bool {
    preserved::is_marker_open(line)
        || is_rule(line)
        || parse_heading(line).is_some()
        || is_fence(line)
        || is_blockquote_line(line)
        || is_bullet_item(line)
        || is_ordered_item(line)
        || is_table_row(line)
}

fn parse_code_block(lines: &[&str], start: usize) -> (Node, usize) {
    let language = lines[start].trim()[FENCE.len()..].trim();
    let mut i = start + 1;
    let mut body = Vec::new();
    while i < lines.len() && lines[i].trim() != FENCE {
        body.push(lines[i]);
        i += 1;
    }
    // step past the closing fence when there is one
    let next = (i + 1).min(lines.len());

    let text = body.join("\n");
    let children = if text.is_empty() {
        Vec::new()
    } else {
        vec![Node::text(text)]
    };
    let mut node = Node::element(NodeKind::CodeBlock, children);
    if !language.is_empty() {
        node = node.with_attr("language", language);
    }
    (node, next)
}

fn parse_blockquote(lines: &[&str], start: usize) -> (Node, usize) {
    let mut i = start;
    let mut inner = Vec::new();
    while i < lines.len() && (lines[i].starts_with("> ") || lines[i].trim() == ">") {
        inner.push(lines[i].strip_prefix("> ").unwrap_or(""));
        i += 1;
    }
    (
        Node::element(NodeKind::Blockquote, parse_blocks(&inner)),
        i,
    )
}

fn parse_paragraph(lines: &[&str], start: usize) -> (Node, usize) {
    let mut i = start + 1;
    while i < lines.len() && !lines[i].trim().is_empty() && !starts_block(lines[i]) {
        i += 1;
    }
    let text = lines[start..i]
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join(" ");
    (Node::paragraph(parse_inline(&text)), i)
}
