//! Frontmatter splitting
//!
//! A document file may start with a metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! key: PROJ-1
//! summary: Fix login
//! ---
//! # Body starts here
//! ```
//!
//! This module only finds the fences. The metadata is returned verbatim for
//! a caller that knows its syntax.

use crate::error::FormatError;

const DELIMITER: &str = "---";

/// A document split at its frontmatter fences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    /// Lines between the fences, joined with `\n`, without a trailing newline.
    pub metadata: String,
    /// Everything after the closing fence line.
    pub body: String,
}

fn is_delimiter(line: &str) -> bool {
    line.strip_suffix('\r').unwrap_or(line) == DELIMITER
}

/// True when `content` starts with a frontmatter opening fence.
pub fn has_frontmatter(content: &str) -> bool {
    content.lines().next().is_some_and(is_delimiter)
}

/// Splits `content` into its metadata block and body.
///
/// Fails with [`FormatError::StructuralParse`] when the first line is not
/// `---` or when no closing `---` line follows.
pub fn split(content: &str) -> Result<Frontmatter, FormatError> {
    let mut lines = content.split_inclusive('\n');
    let opening = lines.next().unwrap_or("");
    if !is_delimiter(opening.trim_end_matches('\n')) {
        return Err(FormatError::StructuralParse(
            "missing opening '---' frontmatter delimiter".to_string(),
        ));
    }

    let mut offset = opening.len();
    let mut metadata = Vec::new();
    for line in lines {
        offset += line.len();
        let line = line.trim_end_matches('\n');
        if is_delimiter(line) {
            return Ok(Frontmatter {
                metadata: metadata.join("\n"),
                body: content[offset..].to_string(),
            });
        }
        metadata.push(line.strip_suffix('\r').unwrap_or(line));
    }

    Err(FormatError::StructuralParse(
        "missing closing '---' frontmatter delimiter".to_string(),
    ))
}

/// Prepends a frontmatter block to `body`; the inverse of [`split`].
pub fn join(metadata: &str, body: &str) -> String {
    format!("{DELIMITER}\n{metadata}\n{DELIMITER}\n{body}")
}
