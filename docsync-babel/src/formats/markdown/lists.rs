//! Bullet and ordered lists
//!
//! Items are written as `- ` or `N. ` where `N` is recomputed from the
//! position in the list. A nested list is indented by the width of its
//! parent item's full prefix, so `- a` nests at two spaces and `10. a` at
//! four. The parser accepts any nested item indented by two or more spaces
//! or a tab, strips the first nested line's indentation from the whole
//! nested block and parses that block recursively, so each level keeps its
//! depth.

use super::inline::parse_inline;
use super::serializer::{render_block, render_inline_line};
use crate::ir::nodes::{Node, NodeKind};
use once_cell::sync::Lazy;
use regex::Regex;

// Indentation is ASCII spaces and tabs only; other Unicode spaces are text.
static BULLET_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*][ \t]").expect("valid regex"));
static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[ \t]").expect("valid regex"));
static NESTED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^( {2,}|\t)([-*]|[0-9]+\.)[ \t]").expect("valid regex"));

pub fn is_bullet_item(line: &str) -> bool {
    BULLET_ITEM.is_match(line)
}

pub fn is_ordered_item(line: &str) -> bool {
    ORDERED_ITEM.is_match(line)
}

fn is_nested_item(line: &str) -> bool {
    NESTED_ITEM.is_match(line)
}

/// Renders `list` with every item prefix starting with `indent`.
pub(super) fn render_list(out: &mut String, list: &Node, indent: &str) {
    let ordered = list.kind() == NodeKind::OrderedList;
    for (position, item) in list.children.iter().enumerate() {
        let prefix = if ordered {
            format!("{indent}{}. ", position + 1)
        } else {
            format!("{indent}- ")
        };
        if item.kind() == NodeKind::ListItem {
            render_item(out, item, &prefix);
        } else {
            render_block(out, item);
        }
    }
}

fn render_item(out: &mut String, item: &Node, prefix: &str) {
    let leads_with_paragraph = item
        .children
        .first()
        .is_some_and(|child| child.kind() == NodeKind::Paragraph);
    if !leads_with_paragraph {
        out.push_str(prefix);
        out.push('\n');
    }

    let nested_indent = " ".repeat(prefix.chars().count());
    for (index, child) in item.children.iter().enumerate() {
        if index == 0 && leads_with_paragraph {
            out.push_str(prefix);
            render_inline_line(out, child);
            out.push('\n');
        } else if child.kind().is_list() {
            render_list(out, child, &nested_indent);
        } else {
            render_block(out, child);
        }
    }
}

/// Parses the list starting at `lines[start]`.
///
/// Returns the list node and the index of the first line after it.
pub(super) fn parse_list(lines: &[&str], start: usize, ordered: bool) -> (Node, usize) {
    let item_pattern: &Regex = if ordered {
        &*ORDERED_ITEM
    } else {
        &*BULLET_ITEM
    };
    let mut items = Vec::new();
    let mut i = start;

    while i < lines.len() {
        let Some(marker) = item_pattern.find(lines[i]) else {
            break;
        };
        let text = &lines[i][marker.end()..];
        let mut item = Node::element(
            NodeKind::ListItem,
            vec![Node::paragraph(parse_inline(text))],
        );
        i += 1;

        let nested_start = i;
        while i < lines.len() && is_nested_item(lines[i]) {
            i += 1;
        }
        if i > nested_start {
            let nested = dedent(&lines[nested_start..i]);
            item.children.extend(parse_nested_lists(&nested));
        }

        items.push(item);
    }

    let kind = if ordered {
        NodeKind::OrderedList
    } else {
        NodeKind::BulletList
    };
    (Node::element(kind, items), i)
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Strips the first line's indentation width from every line.
///
/// Only spaces and tabs count, so every cut is on a char boundary.
fn dedent<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let width = lines.first().map_or(0, |line| indent_width(line));
    lines
        .iter()
        .map(|line| &line[indent_width(line).min(width)..])
        .collect()
}

fn parse_nested_lists(lines: &[&str]) -> Vec<Node> {
    let mut lists = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let (list, next) = if is_bullet_item(lines[i]) {
            parse_list(lines, i, false)
        } else if is_ordered_item(lines[i]) {
            parse_list(lines, i, true)
        } else {
            i += 1;
            continue;
        };
        lists.push(list);
        i = next;
    }
    lists
}
