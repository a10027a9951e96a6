//! Document tree ⇄ markdown transcoding
//!
//!     This crate converts the rich-document trees of a remote content service (issue
//!     descriptions, wiki pages) into markdown a person can edit, and reads that markdown back
//!     into an equivalent tree.
//!
//!     TLDR: For format authors:
//!         - Every format converts between its text and the same tree (./ir/nodes.rs).
//!         - Anything markdown cannot say travels inside a preservation marker, never dropped.
//!         - Round trips are checked with ./ir/equivalence.rs, not with tree equality.
//!
//! Architecture
//!
//!     This is a pure lib: it powers docsync-cli but is shell agnostic, so no code here reads
//!     files, env vars or prints. Logging goes through the `log` facade only.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── json                # The tree as the remote service sends it
//!     │   └── markdown
//!     │       ├── parser.rs       # Block dispatch (markdown → tree)
//!     │       ├── serializer.rs   # Block/inline rendering (tree → markdown)
//!     │       ├── inline.rs       # Inline mark engine
//!     │       ├── lists.rs        # List transcoder
//!     │       ├── table.rs        # Table transcoder
//!     │       └── preserved.rs    # Preservation marker codec
//!     ├── ir                      # Document tree and structural equivalence
//!     └── common                  # Frontmatter splitting
//!
//! Testing
//!     tests
//!     └── <format>
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     Rendering is one recursive pass; parsing is a line-based recursive-descent parser with a
//!     fixed block priority order, and an inline scanner that takes the leftmost match among a
//!     priority-ordered pattern list. Both sides share the list indentation and table layout
//!     rules, which is what makes render → parse → render stable.
//!
//!     Node tags outside the known set are never approximated. They are written as a three-line
//!     comment block carrying the node's JSON in base64 and restored from it byte for byte.
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub mod common;
pub mod ir;

pub use error::FormatError;
pub use format::Format;
pub use ir::equivalence::structurally_equivalent;
pub use ir::nodes::{Mark, Node, NodeKind};
pub use registry::FormatRegistry;

/// Renders a document tree as markdown.
pub fn render(doc: &Node) -> String {
    formats::markdown::serializer::serialize_to_markdown(doc)
}

/// Parses markdown into a document tree rooted at a `doc` node.
pub fn parse(markdown: &str) -> Node {
    formats::markdown::parser::parse_from_markdown(markdown)
}
