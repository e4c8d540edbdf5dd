//! Trie persistence.
//!
//! Tries are stored whole: alphabet, configuration, transition table in
//! its own layout, finality and payloads. A minimized trie therefore loads
//! back with the same state numbering it was saved with.
//!
//! # Example
//!
//! ```rust
//! use trie_minimize::prelude::*;
//!
//! let trie: Trie = Trie::from_words(["test", "testing"], TrieConfig::default())?;
//! let minimized = trie.minimized()?;
//!
//! let mut buffer = Vec::new();
//! BincodeSerializer::serialize(&minimized, &mut buffer)?;
//! let loaded: Trie = BincodeSerializer::deserialize(&buffer[..])?;
//! assert_eq!(loaded, minimized);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::minimize::postorder;
use crate::storage::TransitionTable;
use crate::trie::Trie;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

mod bincode_impl;
mod json_impl;
mod plaintext_impl;

pub use self::bincode_impl::BincodeSerializer;
pub use self::json_impl::JsonSerializer;
pub use self::plaintext_impl::PlainTextSerializer;

/// Trait for writing and reading whole tries.
pub trait TrieSerializer {
    /// Serialize a trie to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<T, W>(trie: &Trie<T>, writer: W) -> Result<(), SerializationError>
    where
        T: Serialize,
        W: Write;

    /// Deserialize a trie from a reader.
    ///
    /// The decoded trie is checked with [`validate`] before it is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails, or if the decoded
    /// trie is inconsistent.
    fn deserialize<T, R>(reader: R) -> Result<Trie<T>, SerializationError>
    where
        T: DeserializeOwned,
        R: Read;
}

/// Errors that can occur during serialization/deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during bincode serialization
    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),
    /// Error during JSON serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A word list could not be turned into a trie
    #[error("Trie error: {0}")]
    Trie(#[from] crate::trie::TrieError),
    /// Decoded data does not describe a valid trie
    #[error("Corrupt trie: {0}")]
    Corrupt(String),
}

/// Check that a decoded trie is internally consistent: per-node arrays
/// match the transition table, the table has the alphabet's width, every
/// transition stays inside the trie and its alphabet, and every node is
/// reachable from the root without a cycle.
pub fn validate<T>(trie: &Trie<T>) -> Result<(), SerializationError> {
    let len = trie.graph.num_states();
    if len == 0 {
        return Err(SerializationError::Corrupt("trie has no nodes".to_string()));
    }
    if trie.finals.len() != len || trie.data.len() != len {
        return Err(SerializationError::Corrupt(format!(
            "{} states but {} finality flags and {} payload slots",
            len,
            trie.finals.len(),
            trie.data.len()
        )));
    }
    if trie.root >= len {
        return Err(SerializationError::Corrupt(format!(
            "root {} out of range for {} states",
            trie.root, len
        )));
    }
    let alphabet_len = trie.alphabet().len();
    trie.graph
        .check_shape(alphabet_len)
        .map_err(SerializationError::Corrupt)?;
    for state in 0..len {
        for (symbol, target) in trie.graph.edges(state) {
            if target >= len || symbol >= alphabet_len {
                return Err(SerializationError::Corrupt(format!(
                    "transition {} -{}-> {} out of range",
                    state, symbol, target
                )));
            }
        }
    }
    let order = postorder(trie).map_err(|e| SerializationError::Corrupt(e.to_string()))?;
    if order.len() != len {
        return Err(SerializationError::Corrupt(format!(
            "{} of {} states are unreachable from the root",
            len - order.len(),
            len
        )));
    }
    Ok(())
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimize::{minimize, MinimizeOptions};
    use crate::storage::StorageMode;
    use crate::trie::TrieConfig;

    fn sample() -> Trie<String> {
        let mut trie: Trie<String> = Trie::from_words(
            ["apple", "apply", "ample"],
            TrieConfig::default(),
        )
        .unwrap();
        let node = trie.descend("apple").unwrap();
        trie.set_payload(node, "fruit".to_string());
        trie
    }

    #[test]
    fn test_bincode_roundtrip() {
        let trie = sample();
        let mut buffer = Vec::new();

        BincodeSerializer::serialize(&trie, &mut buffer).unwrap();
        let loaded: Trie<String> = BincodeSerializer::deserialize(&buffer[..]).unwrap();

        assert_eq!(loaded, trie);
        assert_eq!(
            loaded.payload(loaded.descend("apple").unwrap()),
            Some(&"fruit".to_string())
        );
    }

    #[test]
    fn test_json_roundtrip_every_storage_mode() {
        let trie = sample();
        for mode in StorageMode::all() {
            let options = MinimizeOptions::default().with_storage(mode).make_cashed(true);
            let minimized = minimize(&trie, &options).unwrap().trie;
            let mut buffer = Vec::new();

            JsonSerializer::serialize(&minimized, &mut buffer).unwrap();
            let loaded: Trie<String> = JsonSerializer::deserialize(&buffer[..]).unwrap();

            assert_eq!(loaded.graph().mode(), mode);
            assert_eq!(loaded.root(), minimized.root());
            assert_eq!(loaded.words(), vec!["ample", "apple", "apply"]);
        }
    }

    #[test]
    fn test_validate_rejects_dangling_transition() {
        let mut trie: Trie = Trie::from_words(["ab"], TrieConfig::default()).unwrap();
        trie.graph.set_transition(0, 1, 7);
        assert!(matches!(
            validate(&trie),
            Err(SerializationError::Corrupt(_))
        ));
    }

    #[test]
    fn test_validate_rejects_cycle() {
        let mut trie: Trie = Trie::from_words(["ab"], TrieConfig::default()).unwrap();
        let leaf = trie.descend("ab").unwrap();
        trie.graph.set_transition(leaf, 0, trie.root());
        assert!(matches!(
            validate(&trie),
            Err(SerializationError::Corrupt(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unreachable_state() {
        let mut trie: Trie = Trie::from_words(["ab"], TrieConfig::default()).unwrap();
        trie.graph.add_state();
        trie.finals.push(true);
        trie.data.push(None);
        assert!(matches!(
            validate(&trie),
            Err(SerializationError::Corrupt(_))
        ));
    }

    #[test]
    fn test_validate_rejects_width_mismatch() {
        let mut trie: Trie = Trie::from_words(["ab"], TrieConfig::default()).unwrap();
        trie.graph = crate::storage::Graph::with_states(StorageMode::FixedArray, 5, trie.len());
        assert!(matches!(
            validate(&trie),
            Err(SerializationError::Corrupt(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_root() {
        let mut trie: Trie = Trie::from_words(["ab"], TrieConfig::default()).unwrap();
        trie.root = 10;
        assert!(validate(&trie).is_err());
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result: Result<Trie, _> = JsonSerializer::deserialize(&b"{\"nope\": 1}"[..]);
        assert!(matches!(result, Err(SerializationError::Json(_))));
    }
}
