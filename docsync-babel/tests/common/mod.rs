//! Tree builders shared by the integration tests.

use docsync_babel::ir::nodes::{Mark, Node, NodeKind};

pub fn doc(children: Vec<Node>) -> Node {
    Node::doc(children)
}

pub fn para(children: Vec<Node>) -> Node {
    Node::paragraph(children)
}

pub fn text(value: &str) -> Node {
    Node::text(value)
}

pub fn marked(value: &str, marks: &[&str]) -> Node {
    marks
        .iter()
        .fold(Node::text(value), |node, mark| node.with_mark(Mark::new(*mark)))
}

pub fn item(children: Vec<Node>) -> Node {
    Node::element(NodeKind::ListItem, children)
}

pub fn bullet(items: Vec<Node>) -> Node {
    Node::element(NodeKind::BulletList, items)
}

pub fn ordered(items: Vec<Node>) -> Node {
    Node::element(NodeKind::OrderedList, items)
}

pub fn code(language: Option<&str>, body: &str) -> Node {
    let node = Node::element(NodeKind::CodeBlock, vec![Node::text(body)]);
    match language {
        Some(language) => node.with_attr("language", language),
        None => node,
    }
}

/// Opaque node as the remote service would send it.
pub fn media_single() -> Node {
    serde_json::from_str(
        r#"{"type":"mediaSingle","attrs":{"layout":"center","width":50},"content":[{"type":"media","attrs":{"id":"f1d2","type":"file","collection":"contentId-42","alt":"diagram.png"}}]}"#,
    )
    .expect("fixture node is valid JSON")
}
