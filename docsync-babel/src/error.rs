//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Document structure is unusable, e.g. a frontmatter block without its delimiters.
    ///
    /// Fatal for the whole operation.
    #[error("Structural parse error: {0}")]
    StructuralParse(String),
    /// A candidate preservation marker did not decode.
    ///
    /// Never fatal: the markdown parser treats the lines as ordinary text.
    #[error("Preserved marker could not be decoded: {0}")]
    MarkerDecode(String),
    /// A node could not be serialized into a preservation marker.
    ///
    /// Never fatal: the renderer emits a plain comment instead.
    #[error("Node could not be serialized for preservation: {0}")]
    NodeSerialization(String),
}
