//! JSON serializer for human-readable format.

use super::{validate, SerializationError, TrieSerializer};
use crate::trie::Trie;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// JSON serializer for human-readable format.
///
/// Useful for inspecting small tries by hand; much larger than bincode.
pub struct JsonSerializer;

impl TrieSerializer for JsonSerializer {
    fn serialize<T, W>(trie: &Trie<T>, mut writer: W) -> Result<(), SerializationError>
    where
        T: Serialize,
        W: Write,
    {
        serde_json::to_writer_pretty(&mut writer, trie)?;
        Ok(())
    }

    fn deserialize<T, R>(mut reader: R) -> Result<Trie<T>, SerializationError>
    where
        T: DeserializeOwned,
        R: Read,
    {
        let trie: Trie<T> = serde_json::from_reader(&mut reader)?;
        validate(&trie)?;
        Ok(trie)
    }
}
