use crate::common::*;
use docsync_babel::format::Format;
use docsync_babel::formats::markdown::MarkdownFormat;
use docsync_babel::ir::nodes::{Node, NodeKind};
use docsync_babel::structurally_equivalent;

fn leaf(value: &str) -> Node {
    item(vec![para(vec![text(value)])])
}

#[test]
fn test_one_nested_level() {
    let tree = doc(vec![bullet(vec![
        item(vec![para(vec![text("parent")]), bullet(vec![leaf("child")])]),
        leaf("sibling"),
    ])]);

    let md = MarkdownFormat.serialize(&tree).unwrap();
    assert_eq!(md, "- parent\n  - child\n- sibling\n\n");

    let parsed = MarkdownFormat.parse(&md).unwrap();
    let list = &parsed.children[0];
    assert_eq!(list.kind(), NodeKind::BulletList);
    assert_eq!(list.children.len(), 2);
    assert_eq!(list.children[0].children[1].kind(), NodeKind::BulletList);
    assert!(structurally_equivalent(&parsed, &tree));
}

#[test]
fn test_three_levels_keep_their_depth() {
    let tree = doc(vec![ordered(vec![item(vec![
        para(vec![text("a")]),
        bullet(vec![item(vec![
            para(vec![text("b")]),
            ordered(vec![leaf("c"), leaf("d")]),
        ])]),
    ])])]);

    let md = MarkdownFormat.serialize(&tree).unwrap();
    assert_eq!(md, "1. a\n   - b\n     1. c\n     2. d\n\n");
    assert!(structurally_equivalent(
        &MarkdownFormat.parse(&md).unwrap(),
        &tree
    ));
}

#[test]
fn test_star_bullets_and_tab_nesting() {
    let parsed = MarkdownFormat.parse("* a\n\t* b\n* c\n").unwrap();
    let expected = doc(vec![bullet(vec![
        item(vec![para(vec![text("a")]), bullet(vec![leaf("b")])]),
        leaf("c"),
    ])]);
    assert!(structurally_equivalent(&parsed, &expected));
}

#[test]
fn test_list_item_marks() {
    let parsed = MarkdownFormat.parse("- **done** item\n").unwrap();
    let first = &parsed.children[0].children[0].children[0];
    assert_eq!(first.children[0].marks[0].tag, "strong");
    assert_eq!(first.children[1].text_str(), " item");
}

#[test]
fn test_adjacent_lists_of_different_kinds() {
    let tree = doc(vec![bullet(vec![leaf("x")]), ordered(vec![leaf("y")])]);
    let md = MarkdownFormat.serialize(&tree).unwrap();
    let parsed = MarkdownFormat.parse(&md).unwrap();
    assert_eq!(parsed.children.len(), 2);
    assert!(structurally_equivalent(&parsed, &tree));
}

#[test]
fn test_unicode_space_indentation_is_not_nesting() {
    let parsed = MarkdownFormat.parse("- a\n\t- b\n\u{a0}\u{a0}- c\n").unwrap();

    assert_eq!(parsed.children.len(), 2);
    let list = &parsed.children[0];
    assert_eq!(list.children.len(), 1);
    assert_eq!(list.children[0].children[1].kind(), NodeKind::BulletList);
    assert_eq!(parsed.children[1].kind(), NodeKind::Paragraph);
    assert_eq!(parsed.children[1].child_text(), "- c");
}

#[test]
fn test_hard_break_in_item_stays_in_the_list() {
    let tree = doc(vec![bullet(vec![
        item(vec![para(vec![text("one"), Node::new("hardBreak"), text("more")])]),
        leaf("two"),
    ])]);

    let md = MarkdownFormat.serialize(&tree).unwrap();
    assert_eq!(md, "- one more\n- two\n\n");

    let parsed = MarkdownFormat.parse(&md).unwrap();
    assert_eq!(parsed.children.len(), 1);
    assert_eq!(parsed.children[0].children.len(), 2);
}
