//! Error types for minimization.

use thiserror::Error;

/// Errors that can occur while minimizing an automaton.
///
/// All of them describe input that breaks the minimizer's preconditions;
/// nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MinimizeError {
    /// The automaton has no nodes.
    #[error("cannot minimize an empty automaton")]
    EmptyAutomaton,

    /// `letters(node)` and `children(node)` disagree in length.
    #[error("node {node} has {letters} edge symbols but {children} children")]
    MisalignedTransitions {
        /// Offending node
        node: usize,
        /// Length of the symbol-index sequence
        letters: usize,
        /// Length of the child-id sequence
        children: usize,
    },

    /// A node has two outgoing edges on the same symbol.
    #[error("node {node} has more than one edge on symbol index {symbol}")]
    DuplicateSymbol {
        /// Offending node
        node: usize,
        /// The repeated symbol index
        symbol: usize,
    },

    /// A node can reach itself. Only acyclic automata can be minimized.
    #[error("cycle through node {node}")]
    CycleDetected {
        /// A node on the cycle
        node: usize,
    },

    /// A node id outside `0..len`.
    #[error("node id {node} is out of range for {len} nodes")]
    NodeOutOfRange {
        /// The invalid id
        node: usize,
        /// Number of nodes of the automaton
        len: usize,
    },

    /// An edge symbol index outside the alphabet.
    #[error("node {node} has symbol index {symbol}, alphabet has {alphabet_len} symbols")]
    SymbolOutOfRange {
        /// Node owning the edge
        node: usize,
        /// The invalid symbol index
        symbol: usize,
        /// Size of the alphabet
        alphabet_len: usize,
    },

    /// A node is not reachable from the root, so it has no class.
    #[error("node {node} is not reachable from the root")]
    UnreachableNode {
        /// The unreachable node
        node: usize,
    },

    /// A node was scheduled before one of its children.
    #[error("node {node} scheduled before its child {child}")]
    NotPostorder {
        /// The parent
        node: usize,
        /// The child that had no class yet
        child: usize,
    },
}

/// A specialized `Result` type for minimization.
pub type Result<T> = std::result::Result<T, MinimizeError>;
