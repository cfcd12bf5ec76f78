//! # String Trie
//!
//! An edge-compressed prefix tree over strings, built for autocomplete and
//! dictionary lookups.
//!
//! Edges are labelled with whole runs of characters rather than single
//! characters, so a key that shares no prefix with any other key costs a single
//! edge. The outgoing edges of every node are kept sorted by the first character
//! of their label, which makes child lookup a binary search.
//!
//! ## Features
//!
//! - **Exact lookup**: `get`, `contains_key`, `remove`
//! - **Prefix queries**: every value whose key starts with a given prefix, in
//!   depth-first order
//! - **Case folding**: an optional case-insensitive mode canonicalizes every key
//!   before it touches the tree
//! - **Dictionary adapter**: a string set with the operations an autocomplete
//!   text field needs
//!
//! ## Example
//!
//! ```rust
//! use string_trie::StringTrie;
//!
//! let mut trie = StringTrie::new();
//! trie.add("lime", 1);
//! trie.add("limewire", 2);
//! trie.add("lake", 3);
//!
//! assert_eq!(trie.get("lime"), Some(&1));
//!
//! let mut prefixed: Vec<_> = trie.prefixed_by("lim").copied().collect();
//! prefixed.sort();
//! assert_eq!(prefixed, vec![1, 2]);
//! ```

pub mod canonical;
pub mod config;
pub mod dictionary;
pub mod iter;
pub mod node;
mod trie;
mod util;

// Re-export public types
pub use crate::canonical::CaseMode;
pub use crate::config::TrieConfig;
pub use crate::dictionary::{AutoCompleteDictionary, Entries, TrieDictionary};
pub use crate::iter::{Nodes, Values};
pub use crate::node::{Edge, Node};
pub use crate::trie::StringTrie;

/// `tracing` target for every event emitted by this crate.
pub(crate) const LOG_TARGET: &str = "string_trie";

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested range is out of order or extends past the input
    #[error("invalid range {start}..{stop} for input of length {len}")]
    InvalidRange {
        start: usize,
        stop: usize,
        len: usize,
    },
    /// An offset falls inside a multi-byte character
    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// Result type for fallible trie operations.
pub type Result<T> = std::result::Result<T, Error>;
