//! Minimization of acyclic tries.
//!
//! [`minimize`] turns any acyclic [`Automaton`] into the smallest
//! [`Trie`] accepting the same language. It runs in three phases:
//!
//! 1. [`postorder`]: schedule nodes children-first with an explicit stack.
//! 2. [`build_classes`]: walk the schedule and give each node the class of
//!    its signature `(edge symbols, child classes, finality)`.
//! 3. [`materialize`]: emit one state per class in the requested storage
//!    layout, then optionally [`carry_over_data`] from class
//!    representatives.
//!
//! # Example
//!
//! ```rust
//! use trie_minimize::minimize::{minimize, MinimizeOptions};
//! use trie_minimize::trie::{Trie, TrieConfig};
//!
//! let trie: Trie = Trie::from_words(["tap", "top"], TrieConfig::default()).unwrap();
//! assert_eq!(trie.len(), 6);
//!
//! let minimized = minimize(&trie, &MinimizeOptions::default()).unwrap();
//! assert_eq!(minimized.trie.len(), 4);
//! assert!(minimized.trie.contains("top"));
//! ```

pub mod classes;
pub mod error;
pub mod materialize;
pub mod postorder;

pub use self::classes::{build_classes, EquivalenceClasses, Signature};
pub use self::error::{MinimizeError, Result};
pub use self::materialize::{carry_over_data, materialize, reversed};
pub use self::postorder::postorder;

use crate::storage::{StorageMode, TransitionTable};
use crate::trie::{Automaton, Trie, TrieConfig};
use std::fmt;

/// Options for [`minimize`].
///
/// The output layout is `Map` when `dict_storage` is set, otherwise
/// `FixedArray` when `make_numpied` is set, otherwise `List`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct MinimizeOptions {
    /// Store transitions in per-state maps
    pub dict_storage: bool,
    /// Copy one representative payload into every class
    pub make_cashed: bool,
    /// Store transitions in a flat dense array
    pub make_numpied: bool,
    /// Precompute look-ahead symbols of the output up to this depth
    pub precompute_symbols: Option<usize>,
    /// Let the output trie accept words with spaces
    pub allow_spaces: bool,
    /// Return the node-to-state mapping alongside the trie
    pub return_groups: bool,
}

impl MinimizeOptions {
    /// Create options with every flag off.
    pub fn new() -> Self {
        Self::default()
    }

    /// The output storage layout these options select.
    pub fn storage_mode(&self) -> StorageMode {
        if self.dict_storage {
            StorageMode::Map
        } else if self.make_numpied {
            StorageMode::FixedArray
        } else {
            StorageMode::List
        }
    }

    /// Select the output storage layout.
    pub fn with_storage(mut self, mode: StorageMode) -> Self {
        self.dict_storage = mode == StorageMode::Map;
        self.make_numpied = mode == StorageMode::FixedArray;
        self
    }

    /// Enable or disable payload carry-over.
    pub fn make_cashed(mut self, enabled: bool) -> Self {
        self.make_cashed = enabled;
        self
    }

    /// Set the look-ahead depth of the output.
    pub fn precompute_symbols(mut self, depth: Option<usize>) -> Self {
        self.precompute_symbols = depth;
        self
    }

    /// Allow spaces in words inserted into the output later.
    pub fn allow_spaces(mut self, allow: bool) -> Self {
        self.allow_spaces = allow;
        self
    }

    /// Request the node-to-state mapping.
    pub fn return_groups(mut self, enabled: bool) -> Self {
        self.return_groups = enabled;
        self
    }

    /// Construction options of the output trie.
    pub fn trie_config(&self) -> TrieConfig {
        TrieConfig {
            storage_mode: self.storage_mode(),
            allow_spaces: self.allow_spaces,
            precompute_symbols: self.precompute_symbols,
        }
    }
}

/// Output of [`minimize`].
#[derive(Debug, Clone)]
pub struct Minimized<T> {
    /// The minimal trie
    pub trie: Trie<T>,
    /// State of the minimal trie for every original node, when requested
    pub node_classes: Option<Vec<usize>>,
    original_nodes: usize,
}

impl<T> Minimized<T> {
    /// Size comparison between input and output.
    pub fn stats(&self) -> MinimizeStats {
        MinimizeStats {
            original_nodes: self.original_nodes,
            minimized_nodes: self.trie.len(),
            merged_nodes: self.original_nodes - self.trie.len(),
            transitions: self.trie.graph().transition_count(),
            storage_mode: self.trie.graph().mode(),
        }
    }

    /// Split into the trie and the optional node mapping.
    pub fn into_parts(self) -> (Trie<T>, Option<Vec<usize>>) {
        (self.trie, self.node_classes)
    }
}

/// Node counts before and after minimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct MinimizeStats {
    /// Nodes of the input automaton
    pub original_nodes: usize,
    /// States of the minimal trie
    pub minimized_nodes: usize,
    /// Nodes removed by merging
    pub merged_nodes: usize,
    /// Transitions of the minimal trie
    pub transitions: usize,
    /// Storage layout of the minimal trie
    pub storage_mode: StorageMode,
}

impl MinimizeStats {
    /// `minimized_nodes / original_nodes`.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_nodes == 0 {
            return 1.0;
        }
        self.minimized_nodes as f64 / self.original_nodes as f64
    }
}

impl fmt::Display for MinimizeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} nodes ({} merged, {:.1}% kept), {} transitions, {} storage",
            self.original_nodes,
            self.minimized_nodes,
            self.merged_nodes,
            self.compression_ratio() * 100.0,
            self.transitions,
            self.storage_mode
        )
    }
}

/// Minimize an acyclic automaton.
///
/// Every node of `automaton` must be reachable from its root and the graph
/// must be acyclic; violations are reported as [`MinimizeError`]s rather
/// than producing a wrong trie.
///
/// With `return_groups`, `node_classes[n]` is the state of the returned
/// trie that original node `n` was merged into.
pub fn minimize<A>(automaton: &A, options: &MinimizeOptions) -> Result<Minimized<A::Payload>>
where
    A: Automaton + ?Sized,
    A::Payload: Clone,
{
    let n = automaton.len();
    if n == 0 {
        return Err(MinimizeError::EmptyAutomaton);
    }

    let order = postorder(automaton)?;
    let classes = build_classes(automaton, &order)?;
    let num_classes = classes.len();

    let mut trie = materialize(automaton, &classes, options.trie_config());
    if options.make_cashed {
        carry_over_data(automaton, &classes, &mut trie);
    }
    if let Some(depth) = options.precompute_symbols {
        trie.precompute_symbols(depth);
    }

    let node_classes = options.return_groups.then(|| {
        classes
            .class_of
            .iter()
            .map(|&class| reversed(class, num_classes))
            .collect()
    });

    log::debug!(
        "minimized {} nodes into {} states ({} storage)",
        n,
        num_classes,
        options.storage_mode()
    );

    Ok(Minimized {
        trie,
        node_classes,
        original_nodes: n,
    })
}

impl<T: Clone> Trie<T> {
    /// Minimal copy of this trie with the same configuration, carrying
    /// payloads over.
    pub fn minimized(&self) -> Result<Trie<T>> {
        let config = self.config();
        let options = MinimizeOptions::new()
            .with_storage(config.storage_mode)
            .allow_spaces(config.allow_spaces)
            .precompute_symbols(config.precompute_symbols)
            .make_cashed(true);
        Ok(minimize(self, &options)?.trie)
    }
}
