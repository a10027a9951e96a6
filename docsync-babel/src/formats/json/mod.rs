//! JSON tree format
//!
//! The document tree as the remote content service exchanges it:
//!
//! ```json
//! {"type": "doc", "attrs": {"version": 1}, "content": [
//!   {"type": "paragraph", "content": [
//!     {"type": "text", "text": "Hello ", "marks": []},
//!     {"type": "text", "text": "world", "marks": [{"type": "strong"}]}
//!   ]}
//! ]}
//! ```
//!
//! Empty `content`, `attrs` and `marks` are omitted on output, absent ones
//! default to empty on input. Attribute keys keep their input order, so a
//! tree read here and written back is byte-stable in compact mode.
//!
//! # Options
//!
//! - `pretty`: `"true"` (default) indents the output, `"false"` writes one line.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Node;
use std::collections::HashMap;

/// Format implementation for JSON document trees
pub struct JsonFormat {
    pretty: bool,
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new(true)
    }
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn compact() -> Self {
        Self::new(false)
    }

    fn write(doc: &Node, pretty: bool) -> Result<String, FormatError> {
        let result = if pretty {
            serde_json::to_string_pretty(doc)
        } else {
            serde_json::to_string(doc)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        Self::write(doc, self.pretty)
    }

    fn serialize_with_options(
        &self,
        doc: &Node,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut pretty = self.pretty;
        for (key, value) in options {
            match (key.as_str(), value.as_str()) {
                ("pretty", "true") => pretty = true,
                ("pretty", "false") => pretty = false,
                ("pretty", other) => {
                    return Err(FormatError::SerializationError(format!(
                        "Invalid value '{other}' for option 'pretty' (expected true or false)"
                    )))
                }
                (other, _) => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'json' does not support option '{other}'"
                    )))
                }
            }
        }
        Self::write(doc, pretty)
    }
}
