//! Construction of the minimized trie from equivalence classes.
//!
//! Classes are stored in reverse discovery order: class `c` of `L` becomes
//! state `L - c - 1`. The root is discovered last, so it lands at state 0
//! for a trie whose nodes are all reachable.

use super::classes::EquivalenceClasses;
use crate::storage::{Graph, TransitionTable};
use crate::trie::{Automaton, Trie, TrieConfig};

/// State id of class `class` among `num_classes` classes.
#[inline]
pub fn reversed(class: usize, num_classes: usize) -> usize {
    num_classes - class - 1
}

/// Build the minimized trie: one state per class, transitions and
/// finality taken from the class signatures, all payload slots empty.
pub fn materialize<A>(
    automaton: &A,
    classes: &EquivalenceClasses,
    config: TrieConfig,
) -> Trie<A::Payload>
where
    A: Automaton + ?Sized,
{
    let num_classes = classes.len();
    let alphabet = automaton.alphabet();
    let mut graph = Graph::with_states(config.storage_mode, alphabet.len(), num_classes);
    let mut finals = vec![false; num_classes];

    for (class, signature) in classes.signatures.iter().enumerate() {
        let state = reversed(class, num_classes);
        finals[state] = signature.is_final;
        for (symbol, child_class) in signature.edges() {
            graph.set_transition(state, symbol, reversed(child_class, num_classes));
        }
    }

    let mut compressed = Trie::with_config(alphabet.clone(), config);
    compressed.graph = graph;
    compressed.root = reversed(classes.class_of[automaton.root()], num_classes);
    compressed.finals = finals;
    compressed.data = (0..num_classes).map(|_| None).collect();
    compressed
}

/// Copy the payload of each class representative into its class's slot.
///
/// Members of a class are interchangeable, so exactly one payload per class
/// is carried over. Slots whose representative has no payload stay empty.
pub fn carry_over_data<A>(
    automaton: &A,
    classes: &EquivalenceClasses,
    compressed: &mut Trie<A::Payload>,
) where
    A: Automaton + ?Sized,
    A::Payload: Clone,
{
    let num_classes = classes.len();
    for (class, &representative) in classes.representatives.iter().enumerate() {
        if let Some(payload) = automaton.payload(representative) {
            compressed.data[reversed(class, num_classes)] = Some(payload.clone());
        }
    }
}
