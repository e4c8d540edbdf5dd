//! Error types for trie construction.

use thiserror::Error;

/// Errors raised while inserting words into a [`Trie`](super::Trie).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The word contains a character that is not part of the alphabet.
    #[error("symbol {symbol:?} in {word:?} is not in the alphabet")]
    UnknownSymbol {
        /// The offending character
        symbol: char,
        /// The word being inserted
        word: String,
    },

    /// The word contains a space and the trie was built without
    /// `allow_spaces`.
    #[error("word {0:?} contains a space")]
    SpaceNotAllowed(String),
}

/// A specialized `Result` type for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;
