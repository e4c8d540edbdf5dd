//! Sparse transition storage: one hash map per state.

use super::{Edges, TransitionTable};
use rustc_hash::FxHashMap;

/// Per-state maps from symbol index to target state.
///
/// Only existing transitions take memory, which suits large alphabets
/// where most states have one or two outgoing edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct MapTable {
    rows: Vec<FxHashMap<usize, usize>>,
}

impl MapTable {
    /// Create a table with `num_states` empty rows.
    pub fn with_states(num_states: usize) -> Self {
        MapTable {
            rows: vec![FxHashMap::default(); num_states],
        }
    }
}

impl TransitionTable for MapTable {
    fn num_states(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    fn transition(&self, state: usize, symbol: usize) -> Option<usize> {
        self.rows.get(state)?.get(&symbol).copied()
    }

    fn set_transition(&mut self, state: usize, symbol: usize, target: usize) {
        self.rows[state].insert(symbol, target);
    }

    fn add_state(&mut self) -> usize {
        self.rows.push(FxHashMap::default());
        self.rows.len() - 1
    }

    fn edges(&self, state: usize) -> Edges {
        let mut edges: Edges = match self.rows.get(state) {
            Some(row) => row.iter().map(|(&s, &t)| (s, t)).collect(),
            None => Edges::new(),
        };
        edges.sort_unstable_by_key(|(symbol, _)| *symbol);
        edges
    }

    fn transition_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    fn memory_usage(&self) -> usize {
        let entry = std::mem::size_of::<(usize, usize)>() + 1;
        self.rows.capacity() * std::mem::size_of::<FxHashMap<usize, usize>>()
            + self
                .rows
                .iter()
                .map(|row| row.capacity() * entry)
                .sum::<usize>()
    }
}
