//! Core data structures for the document tree.
//!
//! A [`Node`] mirrors the remote service's rich-document format one to one:
//! a string tag, ordered children, optional leaf text, a loosely typed
//! attribute map and, on text nodes, an ordered list of [`Mark`]s. The tag
//! stays a string so that content types this crate has never heard of still
//! deserialize, travel through markdown and come back untouched. Dispatch
//! goes through [`NodeKind`], the closed set of tags the markdown layer
//! understands; everything else is [`NodeKind::Opaque`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Loosely typed attribute map (numbers, strings, booleans, nested maps).
pub type Attrs = Map<String, Value>;

pub const DEFAULT_HEADING_LEVEL: usize = 2;

/// A universal document tree element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(rename = "content", default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "attrs", default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Attrs,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

/// An inline decoration attached to a text node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(rename = "attrs", default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Attrs,
}

/// Node tags the markdown layer knows how to express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Doc,
    Paragraph,
    Heading,
    BulletList,
    OrderedList,
    ListItem,
    CodeBlock,
    Blockquote,
    Rule,
    Table,
    TableRow,
    TableHeader,
    TableCell,
    Text,
    HardBreak,
    Mention,
    InlineCard,
    Emoji,
    /// Any tag outside the table above; carried through markdown verbatim.
    Opaque,
}

const NODE_TAGS: &[(NodeKind, &str)] = &[
    (NodeKind::Doc, "doc"),
    (NodeKind::Paragraph, "paragraph"),
    (NodeKind::Heading, "heading"),
    (NodeKind::BulletList, "bulletList"),
    (NodeKind::OrderedList, "orderedList"),
    (NodeKind::ListItem, "listItem"),
    (NodeKind::CodeBlock, "codeBlock"),
    (NodeKind::Blockquote, "blockquote"),
    (NodeKind::Rule, "rule"),
    (NodeKind::Table, "table"),
    (NodeKind::TableRow, "tableRow"),
    (NodeKind::TableHeader, "tableHeader"),
    (NodeKind::TableCell, "tableCell"),
    (NodeKind::Text, "text"),
    (NodeKind::HardBreak, "hardBreak"),
    (NodeKind::Mention, "mention"),
    (NodeKind::InlineCard, "inlineCard"),
    (NodeKind::Emoji, "emoji"),
];

impl NodeKind {
    /// Resolves a wire tag; unknown tags map to [`NodeKind::Opaque`].
    pub fn from_tag(tag: &str) -> Self {
        NODE_TAGS
            .iter()
            .find(|(_, name)| *name == tag)
            .map(|(kind, _)| *kind)
            .unwrap_or(NodeKind::Opaque)
    }

    /// The wire tag for this kind, `None` for [`NodeKind::Opaque`].
    pub fn tag(self) -> Option<&'static str> {
        NODE_TAGS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, name)| *name)
    }

    pub fn is_list(self) -> bool {
        matches!(self, NodeKind::BulletList | NodeKind::OrderedList)
    }
}

/// Mark tags with a markdown spelling (or a deliberate lack of one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKind {
    Strong,
    Em,
    Code,
    Strike,
    Link,
    Underline,
    SubSup,
    Unknown,
}

impl MarkKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "strong" => MarkKind::Strong,
            "em" => MarkKind::Em,
            "code" => MarkKind::Code,
            "strike" => MarkKind::Strike,
            "link" => MarkKind::Link,
            "underline" => MarkKind::Underline,
            "subsup" => MarkKind::SubSup,
            _ => MarkKind::Unknown,
        }
    }
}

impl Node {
    /// Creates a node with no children, text, attributes or marks.
    pub fn new(tag: impl Into<String>) -> Self {
        Node {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Creates an element of a known kind.
    ///
    /// [`NodeKind::Opaque`] has no tag of its own and yields an empty one;
    /// build opaque nodes with [`Node::new`].
    pub fn element(kind: NodeKind, children: Vec<Node>) -> Self {
        Node {
            tag: kind.tag().unwrap_or_default().to_string(),
            children,
            ..Default::default()
        }
    }

    /// Creates a plain text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Node {
            tag: "text".to_string(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Creates the root `doc` node.
    pub fn doc(children: Vec<Node>) -> Self {
        Node::element(NodeKind::Doc, children)
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::element(NodeKind::Paragraph, children)
    }

    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Node::element(NodeKind::Heading, children).with_attr("level", level)
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::from_tag(&self.tag)
    }

    /// String attribute lookup; non-string values read as absent.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Heading level from `attrs.level`, 2 when absent or non-numeric,
    /// clamped to the 1–6 range markdown can express.
    pub fn heading_level(&self) -> usize {
        self.attributes
            .get("level")
            .and_then(Value::as_f64)
            .map(|level| level.clamp(1.0, 6.0) as usize)
            .unwrap_or(DEFAULT_HEADING_LEVEL)
    }

    /// Leaf text, empty for non-text nodes.
    pub fn text_str(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Concatenated text of the direct text children.
    pub fn child_text(&self) -> String {
        self.children.iter().map(Node::text_str).collect()
    }
}

impl Mark {
    pub fn new(tag: impl Into<String>) -> Self {
        Mark {
            tag: tag.into(),
            attributes: Attrs::new(),
        }
    }

    pub fn link(href: impl Into<String>) -> Self {
        let mut mark = Mark::new("link");
        mark.attributes
            .insert("href".to_string(), Value::String(href.into()));
        mark
    }

    pub fn kind(&self) -> MarkKind {
        MarkKind::from_tag(&self.tag)
    }

    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}
