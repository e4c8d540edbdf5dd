//! Bincode serializer for compact binary format.

use super::{validate, SerializationError, TrieSerializer};
use crate::trie::Trie;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// Bincode serializer for compact binary format.
///
/// Fast and small. The format of choice for tries that are built once and
/// loaded many times.
pub struct BincodeSerializer;

impl TrieSerializer for BincodeSerializer {
    fn serialize<T, W>(trie: &Trie<T>, mut writer: W) -> Result<(), SerializationError>
    where
        T: Serialize,
        W: Write,
    {
        bincode::serialize_into(&mut writer, trie)?;
        Ok(())
    }

    fn deserialize<T, R>(mut reader: R) -> Result<Trie<T>, SerializationError>
    where
        T: DeserializeOwned,
        R: Read,
    {
        let trie: Trie<T> = bincode::deserialize_from(&mut reader)?;
        validate(&trie)?;
        Ok(trie)
    }
}
