//! Body envelope splitting
//!
//! After the frontmatter, a pulled issue body is laid out as:
//!
//! ```text
//! # PROJ-1: Fix login
//!
//! ## Description
//!
//! The description, converted to and from the tree.
//!
//! ## Comments
//!
//! ### ada@example.com - 2024-03-01
//!
//! First comment.
//! ```
//!
//! Pages use the same layout without the description heading and comments.
//! Every part is optional on input. Like the frontmatter splitter, this only
//! finds section boundaries; the text of each part is returned as written.

use once_cell::sync::Lazy;
use regex::Regex;

const DESCRIPTION_HEADING: &str = "## Description";

static COMMENTS_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^## Comments[ \t]*$").expect("valid regex"));
// The author runs to the last ` - ` on the line.
static COMMENT_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^### (.+) - (\S+)[ \t]*$").expect("valid regex"));

/// One `### author - date` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub author: String,
    pub date: String,
    /// Section text, trimmed.
    pub body: String,
}

/// A body split into its title, description and comment sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    /// Text of a leading `# ` heading, e.g. `PROJ-1: Fix login`.
    pub title: Option<String>,
    /// The markdown that converts to the document tree, trimmed.
    pub description: String,
    pub comments: Vec<Comment>,
}

/// Splits a frontmatter-free body into its envelope parts.
pub fn split(body: &str) -> Envelope {
    let (title, rest) = strip_title(body.trim_start());
    let rest = strip_description_heading(rest);

    let (description, comments) = match COMMENTS_HEADING.find(rest) {
        Some(heading) => (&rest[..heading.start()], parse_comments(&rest[heading.end()..])),
        None => (rest, Vec::new()),
    };

    Envelope {
        title,
        description: description.trim().to_string(),
        comments,
    }
}

/// Writes an envelope back in the issue layout; the inverse of [`split`].
pub fn join(envelope: &Envelope) -> String {
    let mut out = String::new();
    if let Some(title) = &envelope.title {
        out.push_str(&format!("# {title}\n\n"));
    }
    out.push_str(DESCRIPTION_HEADING);
    out.push_str("\n\n");
    push_section(&mut out, &envelope.description);

    if !envelope.comments.is_empty() {
        out.push_str("## Comments\n\n");
        for comment in &envelope.comments {
            out.push_str(&format!("### {} - {}\n\n", comment.author, comment.date));
            push_section(&mut out, &comment.body);
        }
    }
    out
}

fn push_section(out: &mut String, text: &str) {
    if !text.is_empty() {
        out.push_str(text);
        if !text.ends_with('\n') {
            out.push('\n');
        }
    }
    out.push('\n');
}

fn strip_title(body: &str) -> (Option<String>, &str) {
    let (first, rest) = body.split_once('\n').unwrap_or((body, ""));
    match first.trim().strip_prefix("# ") {
        Some(title) => (
            Some(title.trim().to_string()),
            rest.trim_start_matches(['\n', '\r']),
        ),
        None => (None, body),
    }
}

fn strip_description_heading(body: &str) -> &str {
    let trimmed = body.trim();
    match trimmed.strip_prefix(DESCRIPTION_HEADING) {
        Some(rest) => rest.trim_start_matches(['\n', '\r']),
        None => body,
    }
}

fn parse_comments(section: &str) -> Vec<Comment> {
    let headings: Vec<_> = COMMENT_HEADING.captures_iter(section).collect();
    headings
        .iter()
        .enumerate()
        .filter_map(|(index, caps)| {
            let heading = caps.get(0)?;
            let end = headings
                .get(index + 1)
                .and_then(|next| next.get(0))
                .map_or(section.len(), |next| next.start());
            Some(Comment {
                author: caps[1].to_string(),
                date: caps[2].to_string(),
                body: section[heading.end()..end].trim().to_string(),
            })
        })
        .collect()
}
