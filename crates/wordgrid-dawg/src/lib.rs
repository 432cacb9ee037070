//! Packed DAWG (Directed Acyclic Word Graph) dictionary.
//!
//! This crate loads a compiled word graph from its binary form and exposes
//! the four traversal accessors (letter, end-of-word, sibling, first child)
//! over node indices. The graph is read-only after load and may be shared
//! by reference across any number of evaluators.
//!
//! # Architecture
//!
//! - [`node`] -- The packed 32-bit node word and its bit-field accessors
//! - [`dawg`] -- Binary loading, validation, and index-based traversal

pub mod dawg;
pub mod node;

pub use dawg::Dawg;
pub use node::DawgNode;

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DawgError {
    /// The dictionary file could not be opened or read.
    #[error("cannot read dictionary: {0}")]
    Io(#[from] std::io::Error),

    /// The blob is smaller than its header declares.
    #[error("dictionary too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    /// A node word violates the packed format.
    #[error("invalid node {index}: {reason}")]
    InvalidNode { index: u32, reason: String },
}
