//! # trie-minimize
//!
//! Minimization of acyclic tries into minimal deterministic automata
//! (DAWGs).
//!
//! A trie shares prefixes; its minimal equivalent also shares suffixes.
//! Because a trie is acyclic, the minimal automaton can be found in a
//! single bottom-up pass: nodes are visited children-first and two nodes
//! are merged when they agree on finality and on where each of their edge
//! symbols leads.
//!
//! ## Example
//!
//! ```rust
//! use trie_minimize::prelude::*;
//!
//! let trie: Trie = Trie::from_words(["walking", "talking", "walked"], TrieConfig::default())?;
//! let minimized = minimize(&trie, &MinimizeOptions::default().with_storage(StorageMode::FixedArray))?;
//!
//! assert!(minimized.trie.len() < trie.len());
//! assert_eq!(minimized.trie.words(), trie.words());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod minimize;
pub mod storage;
pub mod trie;

#[cfg(feature = "serialization")]
pub mod serialization;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::minimize::{
        minimize, MinimizeError, MinimizeOptions, MinimizeStats, Minimized,
    };
    pub use crate::storage::{Graph, StorageMode, TransitionTable};
    pub use crate::trie::{Alphabet, Automaton, Trie, TrieConfig, TrieError};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{
        BincodeSerializer, JsonSerializer, SerializationError, TrieSerializer,
    };
}
