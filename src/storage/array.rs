//! Dense transition storage: one flat `states × |alphabet|` array.

use super::{Edges, TransitionTable};

/// Cell value marking a missing transition.
pub const NO_TRANSITION: usize = usize::MAX;

/// Row-major transition matrix.
///
/// The cell for `(state, symbol)` lives at `state * alphabet_len + symbol`
/// and holds the target state or [`NO_TRANSITION`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ArrayTable {
    alphabet_len: usize,
    num_states: usize,
    cells: Vec<usize>,
}

impl ArrayTable {
    /// Create a table with `num_states` rows of `alphabet_len` empty cells.
    pub fn with_states(alphabet_len: usize, num_states: usize) -> Self {
        ArrayTable {
            alphabet_len,
            num_states,
            cells: vec![NO_TRANSITION; alphabet_len * num_states],
        }
    }

    /// Width of every row.
    pub fn alphabet_len(&self) -> usize {
        self.alphabet_len
    }

    /// Check that the table is `alphabet_len` wide and holds exactly
    /// one row of cells per state.
    pub(crate) fn check_shape(&self, alphabet_len: usize) -> Result<(), String> {
        if self.alphabet_len != alphabet_len {
            return Err(format!(
                "table is {} symbols wide, alphabet has {}",
                self.alphabet_len, alphabet_len
            ));
        }
        match self.num_states.checked_mul(self.alphabet_len) {
            Some(expected) if expected == self.cells.len() => Ok(()),
            _ => Err(format!(
                "{} cells for {} states of width {}",
                self.cells.len(),
                self.num_states,
                self.alphabet_len
            )),
        }
    }

    /// The raw cells of `state`'s row.
    pub fn row(&self, state: usize) -> &[usize] {
        if state >= self.num_states {
            return &[];
        }
        let start = state * self.alphabet_len;
        &self.cells[start..start + self.alphabet_len]
    }
}

impl TransitionTable for ArrayTable {
    fn num_states(&self) -> usize {
        self.num_states
    }

    #[inline]
    fn transition(&self, state: usize, symbol: usize) -> Option<usize> {
        if state >= self.num_states || symbol >= self.alphabet_len {
            return None;
        }
        match self.cells[state * self.alphabet_len + symbol] {
            NO_TRANSITION => None,
            target => Some(target),
        }
    }

    fn set_transition(&mut self, state: usize, symbol: usize, target: usize) {
        assert!(
            state < self.num_states && symbol < self.alphabet_len,
            "cell ({}, {}) outside {}x{} table",
            state,
            symbol,
            self.num_states,
            self.alphabet_len
        );
        self.cells[state * self.alphabet_len + symbol] = target;
    }

    fn add_state(&mut self) -> usize {
        self.cells
            .extend(std::iter::repeat(NO_TRANSITION).take(self.alphabet_len));
        self.num_states += 1;
        self.num_states - 1
    }

    fn edges(&self, state: usize) -> Edges {
        self.row(state)
            .iter()
            .enumerate()
            .filter(|(_, &target)| target != NO_TRANSITION)
            .map(|(symbol, &target)| (symbol, target))
            .collect()
    }

    fn transition_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != NO_TRANSITION).count()
    }

    fn memory_usage(&self) -> usize {
        self.cells.capacity() * std::mem::size_of::<usize>()
    }
}
