//! JSON tree format tests

use docsync_babel::format::Format;
use docsync_babel::formats::JsonFormat;
use docsync_babel::ir::nodes::NodeKind;
use docsync_babel::{render, FormatRegistry};
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[test]
fn test_issue_fixture_parses() {
    let doc = JsonFormat::default()
        .parse(&fixture("issue.json"))
        .expect("fixture is a valid tree");
    assert_eq!(doc.kind(), NodeKind::Doc);
    assert!(doc
        .children
        .iter()
        .any(|node| node.kind() == NodeKind::Opaque));
}

#[test]
fn test_issue_fixture_to_markdown_and_back() {
    let registry = FormatRegistry::default();
    let doc = registry.parse(&fixture("issue.json"), "json").unwrap();

    let md = registry.serialize(&doc, "markdown").unwrap();
    assert!(md.starts_with("## Summary\n\n"));
    assert!(md.contains("<!-- PRESERVED: Info/warning panel — "));

    let back = registry.parse(&md, "markdown").unwrap();
    assert_eq!(render(&back), md);

    let panel = back
        .children
        .iter()
        .find(|node| node.tag == "panel")
        .expect("panel restored from its marker");
    let original = doc.children.iter().find(|node| node.tag == "panel").unwrap();
    assert_eq!(panel, original);
}

#[test]
fn test_compact_json_matches_wire_form() {
    let registry = FormatRegistry::default();
    let md = "# T\n\nHello **world**\n";
    let doc = registry.parse(md, "markdown").unwrap();

    let mut options = std::collections::HashMap::new();
    options.insert("pretty".to_string(), "false".to_string());
    let json = registry.serialize_with_options(&doc, "json", &options).unwrap();

    assert_eq!(
        json,
        r#"{"type":"doc","content":[{"type":"heading","content":[{"type":"text","text":"T"}],"attrs":{"level":1}},{"type":"paragraph","content":[{"type":"text","text":"Hello "},{"type":"text","text":"world","marks":[{"type":"strong"}]}]}],"attrs":{"version":1}}"#
    );
}
