use crate::common::*;
use docsync_babel::format::Format;
use docsync_babel::formats::markdown::preserved;
use docsync_babel::formats::markdown::MarkdownFormat;
use docsync_babel::ir::nodes::{Node, NodeKind};
use pretty_assertions::assert_eq;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_media_single_survives_a_round_trip() {
    init_logger();
    let node = media_single();
    let md = MarkdownFormat.serialize(&doc(vec![node.clone()])).unwrap();
    assert_eq!(md.lines().count(), 3);

    let parsed = MarkdownFormat.parse(&md).unwrap();
    assert_eq!(parsed.children, vec![node.clone()]);
    assert_eq!(
        serde_json::to_string(&parsed.children[0]).unwrap(),
        serde_json::to_string(&node).unwrap()
    );
}

#[test]
fn test_marker_between_blocks() {
    let tree = doc(vec![
        Node::heading(2, vec![text("Design")]),
        Node {
            tag: "panel".to_string(),
            children: vec![para(vec![text("careful")])],
            ..Default::default()
        }
        .with_attr("panelType", "warning")
        .with_attr("localId", "a1"),
        para(vec![text("after")]),
    ]);
    let md = MarkdownFormat.serialize(&tree).unwrap();
    let parsed = MarkdownFormat.parse(&md).unwrap();

    assert_eq!(parsed.children.len(), 3);
    assert_eq!(parsed.children[1], tree.children[1]);
    assert_eq!(parsed.children[2].child_text(), "after");
}

#[test]
fn test_malformed_data_line_is_plain_text() {
    init_logger();
    let md = "<!-- PRESERVED: Inline image — Do not edit this block; it is restored on push. -->\n\
              <!-- payload:e30= -->\n\
              <!-- /PRESERVED -->\n";
    let parsed = MarkdownFormat.parse(md).expect("malformed markers never fail");

    assert!(parsed
        .children
        .iter()
        .all(|node| node.kind() == NodeKind::Paragraph));
    let all_text: String = parsed.children.iter().map(Node::child_text).collect();
    assert!(all_text.contains("<!-- payload:e30= -->"));
}

#[test]
fn test_truncated_marker_is_plain_text() {
    let md = "<!-- PRESERVED: Date — Do not edit this block; it is restored on push. -->\n";
    let parsed = MarkdownFormat.parse(md).unwrap();
    assert_eq!(parsed.children.len(), 1);
    assert_eq!(parsed.children[0].kind(), NodeKind::Paragraph);
}

#[test]
fn test_edited_payload_is_plain_text() {
    let md = MarkdownFormat.serialize(&doc(vec![media_single()])).unwrap();
    let tampered = md.replacen("<!-- data:", "<!-- data:!!", 1);
    let parsed = MarkdownFormat.parse(&tampered).unwrap();
    assert!(parsed
        .children
        .iter()
        .all(|node| node.tag != "mediaSingle"));
}

#[test]
fn test_inline_opaque_node_is_hoisted_to_block_level() {
    let status = Node::new("status")
        .with_attr("text", "IN PROGRESS")
        .with_attr("color", "blue");
    let tree = doc(vec![para(vec![text("State: "), status.clone()])]);

    let md = MarkdownFormat.serialize(&tree).unwrap();
    let parsed = MarkdownFormat.parse(&md).unwrap();

    assert_eq!(parsed.children.len(), 2);
    assert_eq!(parsed.children[0].child_text(), "State:");
    assert_eq!(parsed.children[1], status);
}

#[test]
fn test_descriptions() {
    assert_eq!(preserved::describe("expand"), "Expand/collapse section");
    assert_eq!(preserved::describe("bodiedExtension"), "JIRA macro");
    assert_eq!(preserved::describe("embedCard"), "embedCard");
}

#[test]
fn test_table_with_opaque_cells_is_restored_whole() {
    let cell = |children: Vec<Node>| Node::element(NodeKind::TableCell, children);
    let table = Node::element(
        NodeKind::Table,
        vec![
            Node::element(
                NodeKind::TableRow,
                vec![
                    cell(vec![para(vec![text("Status")])]),
                    cell(vec![para(vec![text("Owner")])]),
                ],
            ),
            Node::element(
                NodeKind::TableRow,
                vec![
                    cell(vec![para(vec![Node::new("status")
                        .with_attr("text", "DONE")
                        .with_attr("color", "green")])]),
                    cell(vec![media_single()]),
                ],
            ),
        ],
    )
    .with_attr("layout", "default");
    let tree = doc(vec![table.clone(), para(vec![text("after")])]);

    let md = MarkdownFormat.serialize(&tree).unwrap();
    assert!(!md.contains("| Status |"));

    let parsed = MarkdownFormat.parse(&md).unwrap();
    let tags: Vec<&str> = parsed.children.iter().map(|n| n.tag.as_str()).collect();
    assert_eq!(tags, vec!["table", "paragraph"]);
    assert_eq!(parsed.children[0], table);
}

#[test]
fn test_plain_table_is_still_a_pipe_table() {
    let md = "| A | B |\n| --- | --- |\n| **1** | [x](https://x.test) |\n";
    let parsed = MarkdownFormat.parse(md).unwrap();
    assert_eq!(MarkdownFormat.serialize(&parsed).unwrap(), format!("{md}\n"));
}
