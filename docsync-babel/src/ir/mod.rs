//! Document tree representation.
//!
//! This module defines the tree exchanged with the remote content service
//! and the structural equivalence relation used to compare trees that went
//! through markdown and back.

pub mod equivalence;
pub mod nodes;
