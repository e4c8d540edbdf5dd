//! Plain text word lists.
//!
//! Word lists are newline-delimited UTF-8, one word per line:
//! ```text
//! apple
//! banana
//! cherry
//! ```
//!
//! A word list only carries the language, not the graph, so it is an
//! input format for building tries rather than a
//! [`TrieSerializer`](super::TrieSerializer).

use super::SerializationError;
use crate::trie::{Trie, TrieConfig};
use std::io::{BufRead, BufReader, Read, Write};

/// Reader and writer of newline-delimited word lists.
pub struct PlainTextSerializer;

impl PlainTextSerializer {
    /// Read one word per line. Trailing `\r` is stripped and empty lines
    /// are skipped.
    pub fn read_words<R: Read>(reader: R) -> Result<Vec<String>, SerializationError> {
        let mut words = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.strip_suffix('\r').unwrap_or(&line);
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        Ok(words)
    }

    /// Write every word accepted by `trie`, one per line.
    pub fn write_words<T, W: Write>(trie: &Trie<T>, mut writer: W) -> Result<(), SerializationError> {
        for word in trie.words() {
            writeln!(writer, "{}", word)?;
        }
        Ok(())
    }

    /// Read a word list and build a trie from it.
    pub fn read_trie<T, R: Read>(reader: R, config: TrieConfig) -> Result<Trie<T>, SerializationError> {
        let words = Self::read_words(reader)?;
        Ok(Trie::from_words(words, config)?)
    }
}
