//! Bottom-up assignment of equivalence classes.
//!
//! Two nodes are equivalent when they agree on finality and on the set
//! of `(symbol, class of child)` pairs of their outgoing edges.
//! Processing nodes children-first means every child already has its
//! class when its parent's signature is built, so one pass suffices.

use super::error::{MinimizeError, Result};
use crate::storage::Edges;
use crate::trie::{Automaton, NodeList};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// The equivalence key of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    /// Symbol indices of the outgoing edges, ascending
    pub letters: NodeList,
    /// Classes of the children, aligned with `letters`
    pub child_classes: NodeList,
    /// Whether the node is accepting
    pub is_final: bool,
}

impl Signature {
    /// Outgoing `(symbol, child class)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.letters
            .iter()
            .copied()
            .zip(self.child_classes.iter().copied())
    }
}

/// Result of class assignment.
///
/// Class ids are handed out in discovery order: the first node of the
/// schedule gets class 0, the next node with an unseen signature class 1,
/// and so on. The numbering therefore depends on the schedule, the
/// partition does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceClasses {
    /// Class of every node, indexed by node id
    pub class_of: Vec<usize>,
    /// Signature of every class, indexed by class id
    pub signatures: Vec<Signature>,
    /// First node found in every class, indexed by class id
    pub representatives: Vec<usize>,
}

impl EquivalenceClasses {
    /// Number of classes.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// True if there are no classes.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

/// Assign a class to every node, walking `order` front to back.
///
/// `order` must list every node of `automaton` with children before
/// parents, as produced by [`postorder`](super::postorder::postorder).
pub fn build_classes<A>(automaton: &A, order: &[usize]) -> Result<EquivalenceClasses>
where
    A: Automaton + ?Sized,
{
    let n = automaton.len();
    let alphabet_len = automaton.alphabet().len();
    let mut class_of: Vec<Option<usize>> = vec![None; n];
    let mut classes: FxHashMap<Signature, usize> = FxHashMap::default();
    let mut representatives: Vec<usize> = Vec::new();

    for &node in order {
        let letters = automaton.letters(node);
        let children = automaton.children(node);
        if letters.len() != children.len() {
            return Err(MinimizeError::MisalignedTransitions {
                node,
                letters: letters.len(),
                children: children.len(),
            });
        }

        // Equivalence ignores the order the accessor lists edges in.
        let mut edges: Edges = letters.into_iter().zip(children).collect();
        edges.sort_unstable_by_key(|&(symbol, _)| symbol);
        if let Some(pair) = edges.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(MinimizeError::DuplicateSymbol {
                node,
                symbol: pair[0].0,
            });
        }
        if let Some(&(symbol, _)) = edges.last().filter(|&&(s, _)| s >= alphabet_len) {
            return Err(MinimizeError::SymbolOutOfRange {
                node,
                symbol,
                alphabet_len,
            });
        }

        let mut sorted_letters = NodeList::with_capacity(edges.len());
        let mut child_classes = NodeList::with_capacity(edges.len());
        for (symbol, child) in edges {
            let class = class_of
                .get(child)
                .copied()
                .flatten()
                .ok_or(MinimizeError::NotPostorder { node, child })?;
            sorted_letters.push(symbol);
            child_classes.push(class);
        }

        let signature = Signature {
            letters: sorted_letters,
            child_classes,
            is_final: automaton.is_final(node),
        };
        let next_class = classes.len();
        let class = match classes.entry(signature) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                representatives.push(node);
                *entry.insert(next_class)
            }
        };
        class_of[node] = Some(class);
    }

    let class_of = class_of
        .into_iter()
        .enumerate()
        .map(|(node, class)| class.ok_or(MinimizeError::UnreachableNode { node }))
        .collect::<Result<Vec<usize>>>()?;

    let mut by_class: Vec<(Signature, usize)> = classes.into_iter().collect();
    by_class.sort_unstable_by_key(|(_, class)| *class);
    let signatures = by_class.into_iter().map(|(signature, _)| signature).collect();

    Ok(EquivalenceClasses {
        class_of,
        signatures,
        representatives,
    })
}
