//! Markdown format implementation
//!
//! This module implements bidirectional conversion between the document tree
//! and a line-oriented markdown dialect meant to be edited by hand and pushed
//! back.
//!
//! # Library Choice
//!
//! The dialect is small and its exact byte layout is part of the contract
//! (marker blocks, list indentation, table separators), so both directions
//! are hand-written: a recursive pass for rendering and a line-based
//! recursive-descent parser for reading. `regex` covers the inline mark
//! patterns and list item detection.
//!
//! # Element Mapping Table
//!
//! | Tree node        | Markdown                  | Export Notes                           | Import Notes                          |
//! |------------------|---------------------------|----------------------------------------|---------------------------------------|
//! | heading          | `#`..`######` + space     | `attrs.level`, default 2, clamped 1-6  | Level from `#` count                  |
//! | paragraph        | Text + blank line         | Direct                                 | Lines joined with a space             |
//! | bulletList       | `- item`                  | Nested lists indented by prefix width  | `- ` or `* `                          |
//! | orderedList      | `1. item`                 | Renumbered from position               | `N. ` with any `N`                    |
//! | codeBlock        | ```` ```lang ````         | No escaping of inner fences            | `attrs.language` when present         |
//! | blockquote       | `> ` prefix               | Children rendered then prefixed        | Body parsed recursively               |
//! | rule             | `---`                     | Direct                                 | `---`, `***` or `___`                 |
//! | table            | Pipe table, or a marker   | Marker when a cell is not inline text  | Header only with a separator row      |
//! | text + marks     | `**` `*` `` ` `` `~~` `[]()` `_` | Marks nest in list order       | Leftmost match, fixed priority        |
//! | mention          | `@name`                   | From `attrs.text`                      | Read back as text                     |
//! | inlineCard       | `[link](url)`             | From `attrs.url`                       | Read back as a link mark              |
//! | emoji            | Emoji text                | `attrs.text`, else `attrs.shortName`   | Read back as text                     |
//! | anything else    | Preservation marker       | Base64 of the node's JSON              | Decoded byte for byte                 |
//!
//! # Lossy Conversions
//!
//! - Heading levels outside 1-6 are clamped.
//! - `underline` renders as `_t_` but is read back as text.
//! - `subsup` and unknown marks are dropped.
//! - Mentions, inline cards and emoji come back as plain text or links.
//! - Hard breaks come back as spaces inside the paragraph. In headings,
//!   list item leads and table cells they are written as spaces.
//! - Tables without a header row gain one.
//! - A node that cannot be serialized is replaced by a comment.
//!
//! # Round Trip
//!
//! For trees made of supported nodes, parsing the rendered markdown gives a
//! tree that is [structurally equivalent](crate::ir::equivalence) to the
//! input, and rendering that again reproduces the same bytes.

pub mod inline;
pub mod lists;
pub mod parser;
pub mod preserved;
pub mod serializer;
pub mod table;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Node;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown with preservation markers"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        Ok(parser::parse_from_markdown(source))
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown(doc))
    }
}
