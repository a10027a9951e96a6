//! Pipe tables
//!
//! Rendering always promotes the first row to a header row followed by a
//! `| --- |` separator, whether or not the tree marked it as a header. The
//! column count is the widest row; shorter rows are padded with empty
//! cells. Header cells lose one pair of surrounding `**` so bold does not
//! pile up over repeated pull/push cycles.
//!
//! A pipe row holds one line of inline text per cell. When any cell holds
//! something else (a block other than a paragraph, a node that would become
//! a marker, a `|` or a line break in its text) or a row is not a
//! `tableRow`, the whole table goes through the preservation marker codec
//! instead.
//!
//! Parsing only assigns a header when the second line is a separator row
//! (every cell made of `-` and `:`). Ragged rows are kept as they are.

use super::inline::parse_inline;
use super::serializer::{render_inline_line, render_preserved};
use crate::ir::nodes::{Node, NodeKind};
use serde_json::Value;

/// Renders `table` followed by a blank line. Tables without rows render nothing.
pub(super) fn render_table(out: &mut String, table: &Node) {
    let Some(rows) = pipe_rows(table) else {
        log::debug!("table content does not fit pipe rows; preserving the whole table");
        render_preserved(out, table);
        return;
    };

    let Some((first, rest)) = rows.split_first() else {
        return;
    };
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);

    write_row(out, first, columns);
    write_row(out, &vec!["---".to_string(); columns], columns);
    for row in rest {
        write_row(out, row, columns);
    }
    out.push('\n');
}

fn pipe_rows(table: &Node) -> Option<Vec<Vec<String>>> {
    table
        .children
        .iter()
        .map(|row| {
            if row.kind() != NodeKind::TableRow {
                return None;
            }
            row.children.iter().map(render_cell).collect()
        })
        .collect()
}

fn is_inline_paragraph(block: &Node) -> bool {
    block.kind() == NodeKind::Paragraph
        && block.children.iter().all(|child| {
            matches!(
                child.kind(),
                NodeKind::Text
                    | NodeKind::HardBreak
                    | NodeKind::Mention
                    | NodeKind::InlineCard
                    | NodeKind::Emoji
            )
        })
}

/// Renders a cell as one line of inline markdown, or `None` when it does not fit one.
fn render_cell(cell: &Node) -> Option<String> {
    let is_header = match cell.kind() {
        NodeKind::TableHeader => true,
        NodeKind::TableCell => false,
        _ => return None,
    };
    if !cell.children.iter().all(is_inline_paragraph) {
        return None;
    }

    let mut buf = String::new();
    for block in &cell.children {
        render_inline_line(&mut buf, block);
    }
    if buf.contains(['\n', '|']) {
        return None;
    }

    let text = buf.trim();
    Some(if is_header {
        strip_bold(text).to_string()
    } else {
        text.to_string()
    })
}

fn strip_bold(text: &str) -> &str {
    if text.len() > 4 {
        if let Some(inner) = text.strip_prefix("**").and_then(|t| t.strip_suffix("**")) {
            return inner;
        }
    }
    text
}

fn write_row(out: &mut String, cells: &[String], columns: usize) {
    let mut padded: Vec<&str> = cells.iter().map(String::as_str).collect();
    padded.resize(columns.max(cells.len()), "");
    out.push_str("| ");
    out.push_str(&padded.join(" | "));
    out.push_str(" |\n");
}

/// True when `line` belongs to a pipe table.
pub fn is_table_row(line: &str) -> bool {
    line.trim().starts_with('|')
}

/// Parses the pipe table starting at `lines[start]`.
///
/// Returns `None` when fewer than two contiguous pipe rows are present; the
/// caller then reads the line as a paragraph.
pub(super) fn parse_table(lines: &[&str], start: usize) -> Option<(Node, usize)> {
    let end = lines[start..]
        .iter()
        .position(|line| !is_table_row(line))
        .map_or(lines.len(), |offset| start + offset);
    let block = &lines[start..end];
    if block.len() < 2 {
        return None;
    }

    let has_header = split_row(block[1])
        .iter()
        .all(|cell| cell.trim_matches(|c| c == ':' || c == '-').is_empty());

    let rows = if has_header {
        std::iter::once(build_row(&split_row(block[0]), NodeKind::TableHeader))
            .chain(
                block[2..]
                    .iter()
                    .map(|line| build_row(&split_row(line), NodeKind::TableCell)),
            )
            .collect()
    } else {
        block
            .iter()
            .map(|line| build_row(&split_row(line), NodeKind::TableCell))
            .collect()
    };

    let table = Node::element(NodeKind::Table, rows)
        .with_attr("isNumberColumnEnabled", Value::Bool(false))
        .with_attr("layout", "default");
    Some((table, end))
}

fn split_row(line: &str) -> Vec<&str> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(str::trim).collect()
}

fn build_row(cells: &[&str], cell_kind: NodeKind) -> Node {
    let cells = cells
        .iter()
        .map(|text| Node::element(cell_kind, vec![Node::paragraph(parse_inline(text))]))
        .collect();
    Node::element(NodeKind::TableRow, cells)
}
