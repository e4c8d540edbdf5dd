//! Tries over an explicit alphabet.
//!
//! [`Automaton`] is the read-only view the minimizer works against: a
//! rooted, edge-labeled graph whose nodes are numbered `0..len()`.
//! [`Trie`] is the concrete implementation shipped with the crate. It is
//! both the usual input of [`minimize`](crate::minimize::minimize) and the
//! type of its output.

pub mod alphabet;
pub mod error;

pub use self::alphabet::Alphabet;
pub use self::error::{Result, TrieError};

use crate::storage::{Edges, Graph, StorageMode, TransitionTable};
use smallvec::SmallVec;

/// Symbol indices or child ids of one node, in edge order.
pub type NodeList = SmallVec<[usize; 4]>;

/// Read-only access to a rooted, edge-labeled graph.
///
/// `letters(n)` and `children(n)` describe the same outgoing edges of `n`
/// and must be positionally aligned: the `i`-th child is reached by the
/// `i`-th symbol index.
///
/// The minimizer additionally requires the graph to be acyclic.
pub trait Automaton {
    /// Per-node payload type
    type Payload;

    /// Number of nodes.
    fn len(&self) -> usize;

    /// True if the automaton has no nodes at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Id of the start node.
    fn root(&self) -> usize;

    /// Whether `node` is accepting.
    fn is_final(&self, node: usize) -> bool;

    /// Symbol indices of the outgoing edges of `node`.
    fn letters(&self, node: usize) -> NodeList;

    /// Targets of the outgoing edges of `node`, aligned with `letters`.
    fn children(&self, node: usize) -> NodeList;

    /// The symbol universe.
    fn alphabet(&self) -> &Alphabet;

    /// Payload attached to `node`, if any.
    fn payload(&self, _node: usize) -> Option<&Self::Payload> {
        None
    }
}

/// Construction options for a [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct TrieConfig {
    /// Transition table layout
    pub storage_mode: StorageMode,
    /// Accept words containing `' '`
    pub allow_spaces: bool,
    /// Look-ahead depth for [`Trie::future_symbols`], if any
    pub precompute_symbols: Option<usize>,
}

impl TrieConfig {
    /// Set the transition table layout.
    pub fn storage_mode(mut self, mode: StorageMode) -> Self {
        self.storage_mode = mode;
        self
    }

    /// Allow or reject spaces inside words.
    pub fn allow_spaces(mut self, allow: bool) -> Self {
        self.allow_spaces = allow;
        self
    }

    /// Precompute look-ahead symbols up to `depth` transitions.
    pub fn precompute_symbols(mut self, depth: Option<usize>) -> Self {
        self.precompute_symbols = depth;
        self
    }
}

/// A trie (or, after minimization, a DAWG) over an [`Alphabet`].
///
/// Nodes are numbered `0..len()`. Every node has a finality flag and an
/// optional payload of type `T`. Transitions live in a [`Graph`] whose
/// layout is fixed by [`TrieConfig::storage_mode`].
///
/// # Example
///
/// ```rust
/// use trie_minimize::trie::{Trie, TrieConfig};
///
/// let trie: Trie = Trie::from_words(["tap", "top"], TrieConfig::default()).unwrap();
/// assert!(trie.contains("tap"));
/// assert!(!trie.contains("ta"));
/// assert_eq!(trie.words(), vec!["tap", "top"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Trie<T = ()> {
    alphabet: Alphabet,
    config: TrieConfig,
    pub(crate) graph: Graph,
    pub(crate) root: usize,
    pub(crate) finals: Vec<bool>,
    pub(crate) data: Vec<Option<T>>,
    #[cfg_attr(feature = "serialization", serde(default))]
    future_symbols: Option<Vec<Vec<usize>>>,
}

impl<T> Trie<T> {
    /// Create a trie holding only a non-final root.
    pub fn new(alphabet: Alphabet) -> Self {
        Self::with_config(alphabet, TrieConfig::default())
    }

    /// Create a trie holding only a non-final root, with explicit options.
    pub fn with_config(alphabet: Alphabet, config: TrieConfig) -> Self {
        let mut graph = Graph::new(config.storage_mode, alphabet.len());
        let root = graph.add_state();
        Trie {
            alphabet,
            config,
            graph,
            root,
            finals: vec![false],
            data: vec![None],
            future_symbols: None,
        }
    }

    /// Build a trie from `words`, deriving the alphabet from them.
    ///
    /// Look-ahead symbols are precomputed when the config asks for them.
    pub fn from_words<I, S>(words: I, config: TrieConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = words.into_iter().collect();
        let alphabet = Alphabet::from_words(words.iter().map(|w| w.as_ref()));
        let mut trie = Self::with_config(alphabet, config);
        for word in &words {
            trie.insert(word.as_ref())?;
        }
        if let Some(depth) = config.precompute_symbols {
            trie.precompute_symbols(depth);
        }
        Ok(trie)
    }

    /// Insert `word` and return the id of the node that accepts it.
    pub fn insert(&mut self, word: &str) -> Result<usize> {
        if !self.config.allow_spaces && word.contains(' ') {
            return Err(TrieError::SpaceNotAllowed(word.to_string()));
        }
        let symbols = self
            .alphabet
            .encode(word)
            .map_err(|symbol| TrieError::UnknownSymbol {
                symbol,
                word: word.to_string(),
            })?;

        let mut node = self.root;
        for symbol in symbols {
            node = match self.graph.transition(node, symbol) {
                Some(next) => next,
                None => {
                    let next = self.add_node();
                    self.graph.set_transition(node, symbol, next);
                    next
                }
            };
        }
        self.finals[node] = true;
        // Look-ahead sets no longer describe the graph.
        self.future_symbols = None;
        Ok(node)
    }

    /// Insert `word` and attach `payload` to its accepting node.
    pub fn insert_with(&mut self, word: &str, payload: T) -> Result<usize> {
        let node = self.insert(word)?;
        self.data[node] = Some(payload);
        Ok(node)
    }

    fn add_node(&mut self) -> usize {
        let node = self.graph.add_state();
        self.finals.push(false);
        self.data.push(None);
        node
    }

    /// Follow `word` from the root.
    pub fn descend(&self, word: &str) -> Option<usize> {
        let mut node = self.root;
        for c in word.chars() {
            node = self.graph.transition(node, self.alphabet.index_of(c)?)?;
        }
        Some(node)
    }

    /// Whether the trie accepts `word`.
    pub fn contains(&self, word: &str) -> bool {
        self.descend(word)
            .map(|node| self.is_final(node))
            .unwrap_or(false)
    }

    /// Whether the trie accepts the word spelled by `symbols`.
    pub fn accepts_indices(&self, symbols: &[usize]) -> bool {
        let mut node = self.root;
        for &symbol in symbols {
            match self.graph.transition(node, symbol) {
                Some(next) => node = next,
                None => return false,
            }
        }
        self.is_final(node)
    }

    /// Every accepted word, in alphabet-index order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut prefix: Vec<char> = Vec::with_capacity(32);
        // (node, prefix length before its symbol, symbol leading to it)
        let mut stack: Vec<(usize, usize, Option<char>)> = vec![(self.root, 0, None)];

        while let Some((node, depth, symbol)) = stack.pop() {
            prefix.truncate(depth);
            if let Some(c) = symbol {
                prefix.push(c);
            }
            if self.is_final(node) {
                words.push(prefix.iter().collect());
            }
            for (symbol, child) in self.edges(node).into_iter().rev() {
                stack.push((child, prefix.len(), self.alphabet.symbol(symbol)));
            }
        }
        words
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.graph.num_states()
    }

    /// Always false: a trie has at least its root.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Id of the root node.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Whether `node` is accepting. Unknown nodes are not.
    #[inline]
    pub fn is_final(&self, node: usize) -> bool {
        self.finals.get(node).copied().unwrap_or(false)
    }

    /// Target of `node`'s transition on `symbol`.
    #[inline]
    pub fn transition(&self, node: usize, symbol: usize) -> Option<usize> {
        self.graph.transition(node, symbol)
    }

    /// Outgoing edges of `node`, ascending by symbol index.
    pub fn edges(&self, node: usize) -> Edges {
        self.graph.edges(node)
    }

    /// Payload attached to `node`.
    pub fn payload(&self, node: usize) -> Option<&T> {
        self.data.get(node).and_then(Option::as_ref)
    }

    /// Attach `payload` to `node`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of the trie.
    pub fn set_payload(&mut self, node: usize, payload: T) -> Option<T> {
        self.data[node].replace(payload)
    }

    /// Payload slots, indexed by node id.
    pub fn data(&self) -> &[Option<T>] {
        &self.data
    }

    /// Finality flags, indexed by node id.
    pub fn finals(&self) -> &[bool] {
        &self.finals
    }

    /// The transition table.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The options the trie was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// The trie's alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Move the transitions into another table layout.
    pub fn convert_storage(&mut self, mode: StorageMode) {
        if self.graph.mode() != mode {
            self.graph = self.graph.convert(mode, self.alphabet.len());
            self.config.storage_mode = mode;
        }
    }

    /// For every node, collect the symbol indices that occur on paths of
    /// at most `depth` transitions leaving it.
    ///
    /// The sets are dropped by the next insertion.
    pub fn precompute_symbols(&mut self, depth: usize) {
        let n = self.len();
        let mut current: Vec<Vec<usize>> = vec![Vec::new(); n];
        for _ in 0..depth {
            let next: Vec<Vec<usize>> = (0..n)
                .map(|node| {
                    let mut symbols: Vec<usize> = Vec::new();
                    for (symbol, child) in self.edges(node) {
                        symbols.push(symbol);
                        symbols.extend_from_slice(&current[child]);
                    }
                    symbols.sort_unstable();
                    symbols.dedup();
                    symbols
                })
                .collect();
            if next == current {
                break;
            }
            current = next;
        }
        self.config.precompute_symbols = Some(depth);
        self.future_symbols = Some(current);
    }

    /// Symbol indices reachable within the precomputed depth from `node`,
    /// or `None` if [`precompute_symbols`](Self::precompute_symbols) has
    /// not run since the last insertion.
    pub fn future_symbols(&self, node: usize) -> Option<&[usize]> {
        self.future_symbols
            .as_ref()
            .and_then(|sets| sets.get(node))
            .map(Vec::as_slice)
    }
}

impl<T> Automaton for Trie<T> {
    type Payload = T;

    fn len(&self) -> usize {
        Trie::len(self)
    }

    fn root(&self) -> usize {
        self.root
    }

    fn is_final(&self, node: usize) -> bool {
        Trie::is_final(self, node)
    }

    fn letters(&self, node: usize) -> NodeList {
        self.graph.edges(node).iter().map(|&(s, _)| s).collect()
    }

    fn children(&self, node: usize) -> NodeList {
        self.graph.edges(node).iter().map(|&(_, c)| c).collect()
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn payload(&self, node: usize) -> Option<&T> {
        Trie::payload(self, node)
    }
}
