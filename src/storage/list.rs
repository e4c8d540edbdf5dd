//! Fixed-width list storage: one row of optional targets per state.

use super::{Edges, TransitionTable};

/// Per-state rows of `alphabet_len` optional targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ListTable {
    alphabet_len: usize,
    rows: Vec<Vec<Option<usize>>>,
}

impl ListTable {
    /// Create a table with `num_states` rows of `alphabet_len` empty slots.
    pub fn with_states(alphabet_len: usize, num_states: usize) -> Self {
        ListTable {
            alphabet_len,
            rows: vec![vec![None; alphabet_len]; num_states],
        }
    }

    /// Check that the table and each of its rows are `alphabet_len` wide.
    pub(crate) fn check_shape(&self, alphabet_len: usize) -> Result<(), String> {
        if self.alphabet_len != alphabet_len {
            return Err(format!(
                "table is {} symbols wide, alphabet has {}",
                self.alphabet_len, alphabet_len
            ));
        }
        match self.rows.iter().position(|row| row.len() != alphabet_len) {
            Some(state) => Err(format!(
                "row {} has {} slots, expected {}",
                state,
                self.rows[state].len(),
                alphabet_len
            )),
            None => Ok(()),
        }
    }
}

impl TransitionTable for ListTable {
    fn num_states(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    fn transition(&self, state: usize, symbol: usize) -> Option<usize> {
        *self.rows.get(state)?.get(symbol)?
    }

    fn set_transition(&mut self, state: usize, symbol: usize, target: usize) {
        self.rows[state][symbol] = Some(target);
    }

    fn add_state(&mut self) -> usize {
        self.rows.push(vec![None; self.alphabet_len]);
        self.rows.len() - 1
    }

    fn edges(&self, state: usize) -> Edges {
        match self.rows.get(state) {
            Some(row) => row
                .iter()
                .enumerate()
                .filter_map(|(symbol, target)| target.map(|t| (symbol, t)))
                .collect(),
            None => Edges::new(),
        }
    }

    fn memory_usage(&self) -> usize {
        self.rows.capacity() * std::mem::size_of::<Vec<Option<usize>>>()
            + self
                .rows
                .iter()
                .map(|row| row.capacity() * std::mem::size_of::<Option<usize>>())
                .sum::<usize>()
    }
}
