use docsync_babel::common::frontmatter::{join, split};
use docsync_babel::format::Format;
use docsync_babel::formats::markdown::MarkdownFormat;
use docsync_babel::FormatError;

#[test]
fn test_frontmatter_split_then_parse() {
    let md = r#"---
key: PROJ-7
summary: Login fails
---
# Steps

Open the page.
"#;

    let parts = split(md).expect("Failed to split frontmatter");
    assert_eq!(parts.metadata, "key: PROJ-7\nsummary: Login fails");

    let doc = MarkdownFormat.parse(&parts.body).expect("Failed to parse markdown");
    assert_eq!(doc.children.len(), 2);
    assert_eq!(doc.children[0].child_text(), "Steps");
}

#[test]
fn test_frontmatter_render_then_join() {
    let doc = MarkdownFormat.parse("Content.\n").unwrap();
    let body = MarkdownFormat.serialize(&doc).unwrap();
    let output = join("title: Export Test", &body);

    assert_eq!(output, "---\ntitle: Export Test\n---\nContent.\n\n");
    assert_eq!(split(&output).unwrap().body, body);
}

#[test]
fn test_frontmatter_missing_close_is_fatal() {
    let result = split("---\ntitle: open\n\nbody\n");
    assert!(matches!(result, Err(FormatError::StructuralParse(_))));
}

#[test]
fn test_parsing_without_split_reads_fences_as_rules() {
    let doc = MarkdownFormat.parse("---\na: 1\n---\n").unwrap();
    let tags: Vec<&str> = doc.children.iter().map(|n| n.tag.as_str()).collect();
    assert_eq!(tags, vec!["rule", "paragraph", "rule"]);
}
