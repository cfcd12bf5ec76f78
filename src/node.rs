//! Node and edge types for the string trie.
//!
//! A [`Node`] holds an optional value and its outgoing [`Edge`]s. Each edge owns
//! a non-empty label and exactly one child node, so the whole structure is a
//! plain tree with single ownership.
//!
//! Neither type is recursive in its operations and neither deals with case;
//! walking the tree is the trie's job.

/// A node of the trie.
///
/// Children are kept in a `Vec` sorted by the first character of their label.
/// No two children share a first character, which is what lets a single
/// character select the edge to follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V> {
    pub(crate) value: Option<V>,
    pub(crate) children: Vec<Edge<V>>,
}

/// A labelled edge leading to a child node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<V> {
    label: String,
    pub(crate) child: Node<V>,
}

impl<V> Node<V> {
    /// Creates a node with no value and no children.
    pub fn new() -> Self {
        Node {
            value: None,
            children: Vec::new(),
        }
    }

    /// Creates a childless node holding `value`.
    pub fn with_value(value: V) -> Self {
        Node {
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// The value stored at this node, if any.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Outgoing edges, in ascending order of their first character.
    pub fn edges(&self) -> &[Edge<V>] {
        &self.children
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node with neither a value nor children carries no information.
    pub(crate) fn is_vacant(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Binary search over the children by first character.
    ///
    /// `Ok(i)` is the unique edge starting with `c`. `Err(i)` means no such
    /// edge exists and `i` is where one would be inserted, i.e. one past the
    /// nearest edge whose first character is lower.
    pub(crate) fn search(&self, c: char) -> Result<usize, usize> {
        self.children.binary_search_by(|edge| edge.first_char().cmp(&c))
    }

    /// The edge whose label starts with `c`, if any.
    pub fn edge_starting_with(&self, c: char) -> Option<&Edge<V>> {
        self.search(c).ok().map(|i| &self.children[i])
    }

    /// Attaches `child` under a new edge labelled `label`.
    ///
    /// Panics if `label` is empty or an edge already starts with the same
    /// character.
    pub(crate) fn put(&mut self, label: String, child: Node<V>) {
        let edge = Edge::new(label, child);
        match self.search(edge.first_char()) {
            Ok(_) => panic!("an edge starting with {:?} already exists", edge.first_char()),
            Err(at) => self.children.insert(at, edge),
        }
    }

    /// Detaches and returns the edge starting with `c`.
    pub(crate) fn remove_edge(&mut self, c: char) -> Option<Edge<V>> {
        let at = self.search(c).ok()?;
        Some(self.children.remove(at))
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.children.shrink_to_fit();
    }
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Edge<V> {
    /// Creates an edge. Panics if `label` is empty.
    pub(crate) fn new(label: String, child: Node<V>) -> Self {
        assert!(!label.is_empty(), "edge label must not be empty");
        Edge { label, child }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn child(&self) -> &Node<V> {
        &self.child
    }

    /// First character of the label.
    pub fn first_char(&self) -> char {
        crate::util::first_char(&self.label)
    }

    /// Splits this edge at byte offset `at` of its label.
    ///
    /// ```text
    ///   parent            parent
    ///  ab |      ==>     a |
    ///   child        intermediate
    ///                   b |
    ///                   child
    /// ```
    ///
    /// The first character of the label is unchanged, so the edge keeps its
    /// position among its siblings. Returns the new intermediate node.
    /// Panics unless `0 < at < label.len()` and `at` is a character boundary.
    pub(crate) fn split_at(&mut self, at: usize) -> &mut Node<V> {
        assert!(
            at > 0 && at < self.label.len(),
            "split offset {} outside label {:?}",
            at,
            self.label
        );
        let tail = self.label.split_off(at);
        let child = std::mem::take(&mut self.child);
        self.child.put(tail, child);
        &mut self.child
    }
}
