//! Preservation markers
//!
//! Nodes markdown cannot express travel through the markdown file as a
//! three-line HTML comment block:
//!
//! ```text
//! <!-- PRESERVED: Inline image — Do not edit this block; it is restored on push. -->
//! <!-- data:eyJ0eXBlIjoibWVkaWFTaW5nbGUiLC4uLn0= -->
//! <!-- /PRESERVED -->
//! ```
//!
//! The data line is the standard base64 encoding of the node's JSON form, so
//! decoding it yields the node exactly as it was encoded. Decoding never
//! fails hard: anything that does not match the shape exactly is reported
//! as [`FormatError::MarkerDecode`] and the caller reads the lines as text.

use crate::error::FormatError;
use crate::ir::nodes::Node;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

pub const MARKER_OPEN: &str = "<!-- PRESERVED:";
pub const MARKER_DATA: &str = "<!-- data:";
pub const MARKER_CLOSE: &str = "<!-- /PRESERVED -->";
const COMMENT_END: &str = " -->";
const NOTICE: &str = "Do not edit this block; it is restored on push.";
const FAILURE_NOTICE: &str = "Could not serialize for round-trip";

/// Human-readable labels for the rich node types seen in practice.
static DESCRIPTIONS: &[(&str, &str)] = &[
    ("mediaSingle", "Inline image"),
    ("mediaGroup", "Image group"),
    ("media", "Attachment"),
    ("panel", "Info/warning panel"),
    ("expand", "Expand/collapse section"),
    ("nestedExpand", "Nested expand section"),
    ("extension", "JIRA extension"),
    ("bodiedExtension", "JIRA macro"),
    ("inlineExtension", "Inline JIRA macro"),
    ("multiBodiedExtension", "Multi-body JIRA macro"),
    ("layoutSection", "Layout columns"),
    ("layoutColumn", "Layout column"),
    ("decisionList", "Decision list"),
    ("decisionItem", "Decision item"),
    ("taskList", "Task checklist"),
    ("taskItem", "Task checkbox"),
    ("status", "Status lozenge"),
    ("date", "Date"),
    ("placeholder", "Placeholder"),
];

/// Description shown on the marker's first line; falls back to the raw tag.
pub fn describe(tag: &str) -> &str {
    DESCRIPTIONS
        .iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, description)| *description)
        .unwrap_or(tag)
}

/// True when `line` opens a marker block.
pub fn is_marker_open(line: &str) -> bool {
    line.trim().starts_with(MARKER_OPEN)
}

/// Encodes `value` as the base64 payload of a data line.
pub fn encode_payload<T: Serialize>(value: &T) -> Result<String, FormatError> {
    let json =
        serde_json::to_vec(value).map_err(|e| FormatError::NodeSerialization(e.to_string()))?;
    Ok(STANDARD.encode(json))
}

/// Renders the marker block for `node`, each line terminated by `\n`.
///
/// When the node cannot be serialized, a single comment line noting the
/// failure is returned instead; the node's content is lost in that case.
pub fn encode(node: &Node) -> String {
    marker_block(describe(&node.tag), encode_payload(node))
}

/// Builds a marker block from a description and an encoding outcome.
pub fn marker_block(description: &str, payload: Result<String, FormatError>) -> String {
    match payload {
        Ok(encoded) => format!(
            "{MARKER_OPEN} {description} — {NOTICE}{COMMENT_END}\n\
             {MARKER_DATA}{encoded}{COMMENT_END}\n\
             {MARKER_CLOSE}\n"
        ),
        Err(err) => {
            log::warn!("cannot preserve {description} node: {err}");
            format!("{MARKER_OPEN} {description} — {FAILURE_NOTICE}{COMMENT_END}\n")
        }
    }
}

/// Decodes the marker block starting at `lines[0]`.
///
/// The data line must start with `<!-- data:` and the third line must be
/// exactly `<!-- /PRESERVED -->` (surrounding whitespace ignored). On
/// success the block always spans three lines.
pub fn decode(lines: &[&str]) -> Result<Node, FormatError> {
    let [open, data, close, ..] = lines else {
        return Err(FormatError::MarkerDecode(
            "marker block needs three lines".to_string(),
        ));
    };
    if !is_marker_open(open) {
        return Err(FormatError::MarkerDecode(
            "missing PRESERVED open line".to_string(),
        ));
    }

    let data = data.trim();
    let Some(payload) = data.strip_prefix(MARKER_DATA) else {
        return Err(FormatError::MarkerDecode(
            "second line is not a data line".to_string(),
        ));
    };
    if close.trim() != MARKER_CLOSE {
        return Err(FormatError::MarkerDecode(
            "missing /PRESERVED close line".to_string(),
        ));
    }

    let payload = payload.strip_suffix(COMMENT_END).unwrap_or(payload).trim();
    let json = STANDARD
        .decode(payload)
        .map_err(|e| FormatError::MarkerDecode(format!("invalid base64 payload: {e}")))?;
    serde_json::from_slice(&json)
        .map_err(|e| FormatError::MarkerDecode(format!("invalid node payload: {e}")))
}
