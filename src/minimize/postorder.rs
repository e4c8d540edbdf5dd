//! Child-before-parent scheduling of automaton nodes.

use super::error::{MinimizeError, Result};
use crate::trie::Automaton;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Visiting,
    Visited,
}

/// Order the nodes reachable from the root so that every child comes
/// before its parents.
///
/// Uses an explicit stack, so trie depth is bounded by memory rather than
/// by the call stack. A node is emitted when it surfaces again on top of
/// the stack in the `Visiting` state, which happens once all its children
/// are `Visited`.
///
/// Unreachable nodes are left out of the order. Meeting a `Visiting`
/// child means the node is its own descendant and is reported as
/// [`MinimizeError::CycleDetected`].
pub fn postorder<A>(automaton: &A) -> Result<Vec<usize>>
where
    A: Automaton + ?Sized,
{
    let n = automaton.len();
    if n == 0 {
        return Err(MinimizeError::EmptyAutomaton);
    }
    let root = automaton.root();
    if root >= n {
        return Err(MinimizeError::NodeOutOfRange { node: root, len: n });
    }

    let mut marks = vec![Mark::Unvisited; n];
    let mut order = Vec::with_capacity(n);
    let mut stack = vec![root];

    while let Some(&node) = stack.last() {
        match marks[node] {
            Mark::Unvisited => {
                marks[node] = Mark::Visiting;
                // Reversed so the first child is processed first.
                for &child in automaton.children(node).iter().rev() {
                    if child >= n {
                        return Err(MinimizeError::NodeOutOfRange { node: child, len: n });
                    }
                    match marks[child] {
                        Mark::Unvisited => stack.push(child),
                        Mark::Visiting => return Err(MinimizeError::CycleDetected { node: child }),
                        Mark::Visited => {}
                    }
                }
            }
            Mark::Visiting => {
                stack.pop();
                marks[node] = Mark::Visited;
                order.push(node);
            }
            // Duplicate entry of a node shared by several parents.
            Mark::Visited => {
                stack.pop();
            }
        }
    }

    log::trace!("postorder reached {} of {} nodes", order.len(), n);
    Ok(order)
}
