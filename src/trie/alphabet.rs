//! Ordered symbol universe.
//!
//! Every symbol gets a stable index equal to its position in the alphabet.
//! Transition tables use that index as their column, so two tries only
//! agree on symbol indices when they share the same `Alphabet`.

use rustc_hash::FxHashMap;

/// An ordered, duplicate-free set of symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(from = "Vec<char>", into = "Vec<char>"))]
pub struct Alphabet {
    symbols: Vec<char>,
    index: FxHashMap<char, usize>,
}

impl Alphabet {
    /// Create an alphabet from symbols, keeping first-seen order and
    /// dropping duplicates.
    pub fn new<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut alphabet = Alphabet::default();
        for symbol in symbols {
            if !alphabet.index.contains_key(&symbol) {
                alphabet.index.insert(symbol, alphabet.symbols.len());
                alphabet.symbols.push(symbol);
            }
        }
        alphabet
    }

    /// Collect every symbol used by `words`, sorted by code point.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symbols: Vec<char> = words
            .into_iter()
            .flat_map(|w| w.as_ref().chars().collect::<Vec<_>>())
            .collect();
        symbols.sort_unstable();
        symbols.dedup();
        Self::new(symbols)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Index of `symbol`, if it belongs to the alphabet.
    #[inline]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Symbol at `index`.
    #[inline]
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Symbols in index order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Map every character of `word` to its index. Returns the first
    /// character that is not in the alphabet as the error.
    pub fn encode(&self, word: &str) -> Result<Vec<usize>, char> {
        word.chars()
            .map(|c| self.index_of(c).ok_or(c))
            .collect()
    }

    /// Map symbol indices back to a string, skipping unknown indices.
    pub fn decode(&self, indices: &[usize]) -> String {
        indices.iter().filter_map(|&i| self.symbol(i)).collect()
    }
}

impl From<Vec<char>> for Alphabet {
    fn from(symbols: Vec<char>) -> Self {
        Alphabet::new(symbols)
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Alphabet::new(iter)
    }
}
