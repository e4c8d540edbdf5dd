//! Transition storage backends.
//!
//! A trie's transition relation can be stored three ways, selected by
//! [`StorageMode`]:
//!
//! - [`MapTable`]: one hash map per state, holding only the transitions
//!   that exist. Memory follows the number of edges.
//! - [`ArrayTable`]: one flat `states × |alphabet|` table with a sentinel
//!   for missing transitions. Constant-time lookups, memory follows
//!   `states × |alphabet|`.
//! - [`ListTable`]: one `|alphabet|`-wide row of optional targets per
//!   state. Same shape as the array table without the flat layout.
//!
//! All three implement [`TransitionTable`], and [`Graph`] wraps whichever
//! one was chosen so callers never match on the backend.

mod array;
mod list;
mod map;

pub use self::array::ArrayTable;
pub use self::list::ListTable;
pub use self::map::MapTable;

use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Outgoing edges of a state as `(symbol index, target state)` pairs,
/// ascending by symbol index.
pub type Edges = SmallVec<[(usize, usize); 4]>;

/// Storage layout of a transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum StorageMode {
    /// Hash map per state (sparse)
    Map,
    /// Flat `states × |alphabet|` array (dense, constant-time lookups)
    FixedArray,
    /// `|alphabet|`-wide list per state
    #[default]
    List,
}

impl StorageMode {
    /// All storage modes, in declaration order.
    pub fn all() -> [StorageMode; 3] {
        [StorageMode::Map, StorageMode::FixedArray, StorageMode::List]
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageMode::Map => write!(f, "map"),
            StorageMode::FixedArray => write!(f, "fixed-array"),
            StorageMode::List => write!(f, "list"),
        }
    }
}

/// Error returned when parsing an unknown storage mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown storage mode '{0}' (expected map, fixed-array or list)")]
pub struct ParseStorageModeError(String);

impl FromStr for StorageMode {
    type Err = ParseStorageModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "map" | "dict" => Ok(StorageMode::Map),
            "fixed-array" | "array" | "numpied" => Ok(StorageMode::FixedArray),
            "list" => Ok(StorageMode::List),
            _ => Err(ParseStorageModeError(s.to_string())),
        }
    }
}

/// Operations shared by every transition storage backend.
///
/// States are numbered `0..num_states()`, symbols `0..alphabet_len`.
pub trait TransitionTable {
    /// Number of states the table has rows for.
    fn num_states(&self) -> usize;

    /// Target of the transition from `state` on `symbol`, or `None` when
    /// there is no such transition (including out-of-range arguments).
    fn transition(&self, state: usize, symbol: usize) -> Option<usize>;

    /// Set the transition from `state` on `symbol` to `target`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is not a row of the table, or if `symbol` is
    /// outside the alphabet for the fixed-width backends.
    fn set_transition(&mut self, state: usize, symbol: usize, target: usize);

    /// Append an empty row and return its state id.
    fn add_state(&mut self) -> usize;

    /// Outgoing edges of `state`, ascending by symbol index.
    fn edges(&self, state: usize) -> Edges;

    /// Total number of transitions.
    fn transition_count(&self) -> usize {
        (0..self.num_states()).map(|s| self.edges(s).len()).sum()
    }

    /// Approximate heap footprint in bytes.
    fn memory_usage(&self) -> usize;
}

/// A transition table in one of the supported layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Graph {
    /// Sparse per-state maps
    Map(MapTable),
    /// Flat dense array
    FixedArray(ArrayTable),
    /// Per-state fixed-width lists
    List(ListTable),
}

macro_rules! dispatch {
    ($graph:expr, $table:ident => $body:expr) => {
        match $graph {
            Graph::Map($table) => $body,
            Graph::FixedArray($table) => $body,
            Graph::List($table) => $body,
        }
    };
}

impl Graph {
    /// Create an empty table for an alphabet of `alphabet_len` symbols.
    pub fn new(mode: StorageMode, alphabet_len: usize) -> Self {
        Self::with_states(mode, alphabet_len, 0)
    }

    /// Create a table with `num_states` rows and no transitions.
    pub fn with_states(mode: StorageMode, alphabet_len: usize, num_states: usize) -> Self {
        match mode {
            StorageMode::Map => Graph::Map(MapTable::with_states(num_states)),
            StorageMode::FixedArray => {
                Graph::FixedArray(ArrayTable::with_states(alphabet_len, num_states))
            }
            StorageMode::List => Graph::List(ListTable::with_states(alphabet_len, num_states)),
        }
    }

    /// The layout of this table.
    pub fn mode(&self) -> StorageMode {
        match self {
            Graph::Map(_) => StorageMode::Map,
            Graph::FixedArray(_) => StorageMode::FixedArray,
            Graph::List(_) => StorageMode::List,
        }
    }

    /// Check that a decoded table is consistent with an alphabet of
    /// `alphabet_len` symbols. Sparse tables have no width to check;
    /// their symbols are checked edge by edge.
    pub(crate) fn check_shape(&self, alphabet_len: usize) -> Result<(), String> {
        match self {
            Graph::Map(_) => Ok(()),
            Graph::FixedArray(table) => table.check_shape(alphabet_len),
            Graph::List(table) => table.check_shape(alphabet_len),
        }
    }

    /// Copy every transition into a table of another layout.
    pub fn convert(&self, mode: StorageMode, alphabet_len: usize) -> Graph {
        let mut converted = Graph::with_states(mode, alphabet_len, self.num_states());
        for state in 0..self.num_states() {
            for (symbol, target) in self.edges(state) {
                converted.set_transition(state, symbol, target);
            }
        }
        converted
    }
}

impl TransitionTable for Graph {
    fn num_states(&self) -> usize {
        dispatch!(self, t => t.num_states())
    }

    #[inline]
    fn transition(&self, state: usize, symbol: usize) -> Option<usize> {
        dispatch!(self, t => t.transition(state, symbol))
    }

    fn set_transition(&mut self, state: usize, symbol: usize, target: usize) {
        dispatch!(self, t => t.set_transition(state, symbol, target))
    }

    fn add_state(&mut self) -> usize {
        dispatch!(self, t => t.add_state())
    }

    fn edges(&self, state: usize) -> Edges {
        dispatch!(self, t => t.edges(state))
    }

    fn transition_count(&self) -> usize {
        dispatch!(self, t => t.transition_count())
    }

    fn memory_usage(&self) -> usize {
        dispatch!(self, t => t.memory_usage())
    }
}
