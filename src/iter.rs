//! Depth-first iterators over a subtree of the trie.
//!
//! Traversal is iterative: unvisited siblings are kept on an explicit stack of
//! slice iterators, so there is no recursion however long the keys are. Every
//! descendant of a node is produced before that node's next sibling, and
//! siblings are visited in ascending order of their first character.

use std::iter::FusedIterator;
use std::slice;

use crate::node::{Edge, Node};

/// Iterator over the nodes of a subtree, starting with the subtree root.
///
/// Depending on how it was created it yields every node, or only the nodes
/// that hold a value.
#[derive(Debug, Clone)]
pub struct Nodes<'a, V> {
    /// Siblings still to be visited, innermost last.
    stack: Vec<slice::Iter<'a, Edge<V>>>,

    /// The node `next` will return.
    pending: Option<&'a Node<V>>,

    /// Yield structural (valueless) nodes too.
    all: bool,
}

impl<'a, V> Nodes<'a, V> {
    /// Every node under `start`, valued or not, `start` included.
    pub(crate) fn all(start: &'a Node<V>) -> Self {
        Self::new(Some(start), true)
    }

    /// Every node under `start` that holds a value, `start` included.
    pub(crate) fn valued(start: &'a Node<V>) -> Self {
        Self::new(Some(start), false)
    }

    pub(crate) fn empty() -> Self {
        Self::new(None, false)
    }

    fn new(start: Option<&'a Node<V>>, all: bool) -> Self {
        let mut iter = Nodes {
            stack: Vec::new(),
            pending: None,
            all,
        };
        if let Some(start) = start {
            if iter.qualifies(start) {
                iter.pending = Some(start);
            } else {
                iter.advance(start);
            }
        }
        iter
    }

    fn qualifies(&self, node: &Node<V>) -> bool {
        self.all || node.value.is_some()
    }

    /// Scans downward from the already visited `from` until the next
    /// qualifying node, leaving it in `pending`. Siblings passed over on the
    /// way are saved on the stack.
    fn advance(&mut self, from: &'a Node<V>) {
        let mut children = from.children.iter();
        loop {
            match children.next() {
                Some(edge) => {
                    let node = &edge.child;
                    if !children.as_slice().is_empty() {
                        self.stack.push(children);
                    }
                    if self.qualifies(node) {
                        self.pending = Some(node);
                        return;
                    }
                    children = node.children.iter();
                }
                None => match self.stack.pop() {
                    Some(siblings) => children = siblings,
                    None => return,
                },
            }
        }
    }
}

impl<'a, V> Iterator for Nodes<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.take()?;
        self.advance(node);
        Some(node)
    }
}

impl<'a, V> FusedIterator for Nodes<'a, V> {}

/// Iterator over the values of a subtree, in depth-first order.
///
/// Returned by [`StringTrie::iter`](crate::StringTrie::iter) and
/// [`StringTrie::prefixed_by`](crate::StringTrie::prefixed_by).
#[derive(Debug, Clone)]
pub struct Values<'a, V> {
    nodes: Nodes<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(start: &'a Node<V>) -> Self {
        Values {
            nodes: Nodes::valued(start),
        }
    }

    pub(crate) fn empty() -> Self {
        Values {
            nodes: Nodes::empty(),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.find_map(Node::value)
    }
}

impl<'a, V> FusedIterator for Values<'a, V> {}
