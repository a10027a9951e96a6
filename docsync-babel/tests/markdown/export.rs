//! Export tests for the markdown format (tree → markdown)

use crate::common::*;
use docsync_babel::format::Format;
use docsync_babel::formats::markdown::MarkdownFormat;
use docsync_babel::ir::nodes::{Mark, Node, NodeKind};
use insta::assert_snapshot;

fn to_md(doc: &Node) -> String {
    MarkdownFormat.serialize(doc).expect("Failed to serialize markdown")
}

fn cell(kind: NodeKind, value: &str) -> Node {
    Node::element(kind, vec![para(vec![text(value)])])
}

fn row(cells: Vec<Node>) -> Node {
    Node::element(NodeKind::TableRow, cells)
}

#[test]
fn test_heading_and_marked_paragraph() {
    let tree = doc(vec![
        Node::heading(1, vec![text("Title")]),
        para(vec![text("Hello "), marked("world", &["strong"])]),
    ]);

    assert_eq!(to_md(&tree), "# Title\n\nHello **world**\n\n");
}

#[test]
fn test_kitchensink() {
    let tree = doc(vec![
        Node::heading(1, vec![text("Release notes")]),
        para(vec![
            text("Ships "),
            marked("today", &["strong"]),
            text(" with "),
            text("fixes").with_mark(Mark::link("https://x.test")),
        ]),
        bullet(vec![
            item(vec![
                para(vec![text("one")]),
                bullet(vec![item(vec![para(vec![text("nested")])])]),
            ]),
            item(vec![para(vec![text("two")])]),
        ]),
        ordered(vec![
            item(vec![para(vec![text("first")])]),
            item(vec![para(vec![text("second")])]),
        ]),
        code(Some("sh"), "cargo run"),
        Node::element(NodeKind::Blockquote, vec![para(vec![text("quoted")])]),
        Node::element(NodeKind::Rule, vec![]),
        Node::element(
            NodeKind::Table,
            vec![
                row(vec![
                    cell(NodeKind::TableHeader, "A"),
                    cell(NodeKind::TableHeader, "B"),
                ]),
                row(vec![
                    cell(NodeKind::TableCell, "1"),
                    cell(NodeKind::TableCell, "2"),
                ]),
            ],
        ),
    ]);

    assert_snapshot!(to_md(&tree), @r#"
# Release notes

Ships **today** with [fixes](https://x.test)

- one
  - nested
- two

1. first
2. second

```sh
cargo run
```

> quoted

---

| A | B |
| --- | --- |
| 1 | 2 |
"#);
}

#[test]
fn test_marks_nest_in_list_order() {
    let tree = doc(vec![para(vec![
        marked("a", &["strong", "em"]),
        text(" "),
        marked("b", &["code"]),
        text(" "),
        marked("c", &["strike"]),
        text(" "),
        marked("d", &["underline"]),
        text(" "),
        marked("e", &["subsup", "textColor"]),
    ])]);

    assert_eq!(to_md(&tree), "***a*** `b` ~~c~~ _d_ e\n\n");
}

#[test]
fn test_ordered_items_are_renumbered() {
    let tree = doc(vec![ordered(vec![
        item(vec![para(vec![text("x")])]),
        item(vec![para(vec![text("y")])]),
        item(vec![para(vec![text("z")])]),
    ])
    .with_attr("order", 4)]);

    assert_eq!(to_md(&tree), "1. x\n2. y\n3. z\n\n");
}

#[test]
fn test_nested_list_under_wide_prefix() {
    let items: Vec<Node> = (1..=10)
        .map(|n| item(vec![para(vec![text(&n.to_string())])]))
        .collect();
    let mut tree = ordered(items);
    tree.children[9]
        .children
        .push(bullet(vec![item(vec![para(vec![text("deep")])])]));

    let md = to_md(&doc(vec![tree]));
    assert!(md.contains("\n10. 10\n    - deep\n"));
}

#[test]
fn test_table_without_header_gains_one() {
    let tree = doc(vec![Node::element(
        NodeKind::Table,
        vec![
            row(vec![cell(NodeKind::TableCell, "a"), cell(NodeKind::TableCell, "b")]),
            row(vec![cell(NodeKind::TableCell, "c")]),
        ],
    )]);

    assert_eq!(to_md(&tree), "| a | b |\n| --- | --- |\n| c |  |\n\n");
}

#[test]
fn test_table_header_bold_is_not_doubled() {
    let header = Node::element(
        NodeKind::TableHeader,
        vec![para(vec![marked("Owner", &["strong"])])],
    );
    let tree = doc(vec![Node::element(
        NodeKind::Table,
        vec![row(vec![header]), row(vec![cell(NodeKind::TableCell, "me")])],
    )]);

    assert_eq!(to_md(&tree), "| Owner |\n| --- |\n| me |\n\n");
}

#[test]
fn test_code_block_content_is_not_escaped() {
    let tree = doc(vec![code(None, "a **b** `c`")]);
    assert_eq!(to_md(&tree), "```\na **b** `c`\n```\n\n");
}

#[test]
fn test_unknown_block_becomes_a_marker() {
    let tree = doc(vec![para(vec![text("before")]), media_single()]);
    let md = to_md(&tree);
    let lines: Vec<&str> = md.lines().collect();

    assert_eq!(lines[0], "before");
    assert_eq!(lines[1], "");
    assert_eq!(
        lines[2],
        "<!-- PRESERVED: Inline image — Do not edit this block; it is restored on push. -->"
    );
    assert!(lines[3].starts_with("<!-- data:"));
    assert_eq!(lines[4], "<!-- /PRESERVED -->");
}

#[test]
fn test_hard_break_in_heading_stays_in_the_heading() {
    let tree = doc(vec![
        Node::heading(2, vec![text("Release"), Node::new("hardBreak"), text("notes")]),
        para(vec![text("body")]),
    ]);
    let md = to_md(&tree);
    assert_eq!(md, "## Release notes\n\nbody\n\n");

    let parsed = MarkdownFormat.parse(&md).unwrap();
    assert_eq!(parsed.children.len(), 2);
    assert_eq!(parsed.children[0].child_text(), "Release notes");
}
