//! Format-agnostic helpers shared by callers of the formats.

pub mod envelope;
pub mod frontmatter;
