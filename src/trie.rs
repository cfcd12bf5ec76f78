//! The main trie implementation.
//!
//! This module contains the `StringTrie` type, which provides the primary API
//! for working with the tree.

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

use tracing::{debug, trace};

use crate::canonical::CaseMode;
use crate::config::TrieConfig;
use crate::iter::{Nodes, Values};
use crate::node::Node;
use crate::util::{first_char, match_label, LabelMatch};
use crate::{Error, Result, LOG_TARGET};

/// An edge-compressed prefix tree mapping strings to values.
///
/// Abstractly the trie is the map `{ KEY(n) -> value(n) }` over every node `n`
/// that holds a value, where `KEY(n)` is the concatenation of the edge labels
/// from the root to `n`. Valueless nodes exist only because their key is a
/// shared prefix of longer keys, or because `remove` left them behind.
///
/// The trie has no internal synchronization. Iterators borrow it, so it cannot
/// be mutated while one is alive.
#[derive(Debug, Clone)]
pub struct StringTrie<V> {
    /// The root node of the trie; its key is the empty string
    pub(crate) root: Node<V>,

    /// The number of values stored in the trie
    size: usize,

    config: TrieConfig,
}

impl<V> StringTrie<V> {
    /// Creates a new, empty, case-sensitive trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::StringTrie;
    ///
    /// let trie = StringTrie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new, empty trie that folds every key to lower case.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::case_insensitive();
    /// trie.add("Lime", 1);
    /// assert_eq!(trie.get("LIME"), Some(&1));
    /// ```
    pub fn case_insensitive() -> Self {
        Self::with_config(TrieConfig::new().ignore_case(true))
    }

    pub fn with_config(config: TrieConfig) -> Self {
        StringTrie {
            root: Node::new(),
            size: 0,
            config,
        }
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    fn case_mode(&self) -> CaseMode {
        self.config.case_mode()
    }

    /// Returns the number of values stored in the trie.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the canonical form of `s` under this trie's case mode.
    ///
    /// Useful to canonicalize a whole buffer once before calling
    /// [`prefixed_by_range`](Self::prefixed_by_range) on slices of it.
    pub fn canonical_case<'a>(&self, s: &'a str) -> Cow<'a, str> {
        self.case_mode().canonicalize(s)
    }

    /// Removes every value and every node.
    pub fn clear(&mut self) {
        debug!(target: LOG_TARGET, values = self.size, "Clearing trie");
        self.root = Node::new();
        self.size = 0;
    }

    /// Maps `key` to `value`, returning the value previously mapped to `key`.
    ///
    /// The empty key is allowed and is stored at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// assert_eq!(trie.add("hello", 1), None);
    /// assert_eq!(trie.add("hello", 2), Some(1));
    /// assert_eq!(trie.get("hello"), Some(&2));
    /// ```
    pub fn add(&mut self, key: &str, value: V) -> Option<V> {
        let key = self.case_mode().canonicalize(key);
        let key: &str = &key;

        // Walk down while whole edge labels match, consuming key[..i].
        let mut node = &mut self.root;
        let mut i = 0;
        while i < key.len() {
            let idx = match node.search(first_char(&key[i..])) {
                Ok(idx) => idx,
                Err(_) => {
                    trace!(target: LOG_TARGET, key, at = i, "Additive insert");
                    node.put(key[i..].to_owned(), Node::with_value(value));
                    self.size += 1;
                    return None;
                }
            };

            let edge = &mut node.children[idx];
            match match_label(key, i, key.len(), edge.label()) {
                LabelMatch::DivergesAt(j) => {
                    debug_assert!(j > 0, "label did not start with key[{}]", i);
                    // label = a + b, remaining key = a + c
                    let rest = &key[i + j..];
                    let intermediate = edge.split_at(j);
                    if rest.is_empty() {
                        trace!(target: LOG_TARGET, key, at = i + j, "Splice insert");
                        intermediate.value = Some(value);
                    } else {
                        trace!(target: LOG_TARGET, key, at = i + j, "Split insert");
                        intermediate.put(rest.to_owned(), Node::with_value(value));
                    }
                    self.size += 1;
                    return None;
                }
                LabelMatch::Full => {
                    i += edge.label().len();
                    node = &mut edge.child;
                }
            }
        }

        // The key ends exactly on an existing node.
        trace!(target: LOG_TARGET, key, "Relabel insert");
        let old = node.value.replace(value);
        if old.is_none() {
            self.size += 1;
        }
        old
    }

    /// The node whose key is exactly `key`, which must be canonical.
    fn fetch(&self, key: &str) -> Option<&Node<V>> {
        let mut node = &self.root;
        let mut i = 0;
        while i < key.len() {
            let edge = node.edge_starting_with(first_char(&key[i..]))?;
            if let LabelMatch::DivergesAt(_) = match_label(key, i, key.len(), edge.label()) {
                return None;
            }
            i += edge.label().len();
            node = edge.child();
        }
        Some(node)
    }

    fn fetch_mut(&mut self, key: &str) -> Option<&mut Node<V>> {
        let mut node = &mut self.root;
        let mut i = 0;
        while i < key.len() {
            let idx = node.search(first_char(&key[i..])).ok()?;
            let edge = &mut node.children[idx];
            if let LabelMatch::DivergesAt(_) = match_label(key, i, key.len(), edge.label()) {
                return None;
            }
            i += edge.label().len();
            node = &mut edge.child;
        }
        Some(node)
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.add("limewire", 42);
    ///
    /// assert_eq!(trie.get("limewire"), Some(&42));
    /// assert_eq!(trie.get("lime"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        let key = self.case_mode().canonicalize(key);
        self.fetch(&key).and_then(Node::value)
    }

    /// Returns `true` if the trie contains a value for the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Ensures no value is associated with `key`.
    ///
    /// Returns `true` if a value was actually removed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.take(key).is_some()
    }

    /// Removes and returns the value associated with `key`.
    ///
    /// Unless the trie was configured with
    /// [`prune_on_remove`](TrieConfig::prune_on_remove), the node that held
    /// the value stays in the tree even if it is now empty.
    pub fn take(&mut self, key: &str) -> Option<V> {
        let key = self.case_mode().canonicalize(key);
        let removed = if self.config.prune_on_remove {
            take_pruning(&mut self.root, &key, 0)
        } else {
            self.fetch_mut(&key).and_then(|node| node.value.take())
        };
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    /// Iterates over every value in the trie, in depth-first order.
    pub fn iter(&self) -> Values<'_, V> {
        Values::new(&self.root)
    }

    /// Iterates over every value whose key starts with `prefix`.
    ///
    /// The values come out in depth-first order; siblings are visited in
    /// ascending order of their first character, but no further ordering is
    /// promised.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.add("hello", 1);
    /// trie.add("help", 2);
    /// trie.add("world", 3);
    ///
    /// let mut values: Vec<_> = trie.prefixed_by("hel").copied().collect();
    /// values.sort();
    /// assert_eq!(values, vec![1, 2]);
    /// assert_eq!(trie.prefixed_by("x").count(), 0);
    /// ```
    pub fn prefixed_by(&self, prefix: &str) -> Values<'_, V> {
        let prefix = self.case_mode().canonicalize(prefix);
        self.values_under(&prefix, 0, prefix.len())
    }

    /// Same as `prefixed_by(&prefix[range])`, without canonicalizing.
    ///
    /// The caller is expected to have canonicalized the whole of `prefix` with
    /// [`canonical_case`](Self::canonical_case) beforehand.
    ///
    /// # Errors
    ///
    /// Fails if the range is out of order, extends past `prefix`, or splits a
    /// character.
    pub fn prefixed_by_range(&self, prefix: &str, range: Range<usize>) -> Result<Values<'_, V>> {
        let Range { start, end: stop } = range;
        if start > stop || stop > prefix.len() {
            return Err(Error::InvalidRange {
                start,
                stop,
                len: prefix.len(),
            });
        }
        for offset in [start, stop] {
            if !prefix.is_char_boundary(offset) {
                return Err(Error::NotCharBoundary { offset });
            }
        }
        Ok(self.values_under(prefix, start, stop))
    }

    fn values_under(&self, prefix: &str, start: usize, stop: usize) -> Values<'_, V> {
        match self.prefix_root(prefix, start, stop) {
            Some(node) => Values::new(node),
            None => Values::empty(),
        }
    }

    /// Finds the topmost node whose key starts with `prefix[start..stop]`.
    ///
    /// Like `fetch`, except that a prefix ending inside an edge label selects
    /// that edge's child.
    fn prefix_root(&self, prefix: &str, start: usize, stop: usize) -> Option<&Node<V>> {
        let mut node = &self.root;
        let mut i = start;
        while i < stop {
            let edge = node.edge_starting_with(first_char(&prefix[i..stop]))?;
            match match_label(prefix, i, stop, edge.label()) {
                // The prefix runs out partway through the label.
                LabelMatch::DivergesAt(j) if i + j == stop => return Some(edge.child()),
                // The prefix and the label disagree.
                LabelMatch::DivergesAt(_) => return None,
                LabelMatch::Full => {
                    i += edge.label().len();
                    node = edge.child();
                }
            }
        }
        Some(node)
    }

    /// Every reachable node, structural ones included, in depth-first order.
    pub fn nodes(&self) -> Nodes<'_, V> {
        Nodes::all(&self.root)
    }

    /// Number of reachable nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Releases excess capacity held by every node's child list.
    ///
    /// Meant to be called after a bulk load. Insertions still work afterwards,
    /// they may just reallocate again.
    pub fn trim(&mut self) {
        self.trim_nodes(None);
    }

    /// Like [`trim`](Self::trim), and also replaces every stored value `v` with
    /// `compactor(v)`, e.g. to intern values after a bulk load.
    pub fn trim_with<F>(&mut self, mut compactor: F)
    where
        F: FnMut(V) -> V,
    {
        self.trim_nodes(Some(&mut compactor));
    }

    fn trim_nodes(&mut self, mut compactor: Option<&mut dyn FnMut(V) -> V>) {
        let mut visited = 0usize;
        let mut stack = vec![&mut self.root];
        while let Some(node) = stack.pop() {
            visited += 1;
            node.shrink_to_fit();
            if let Some(compact) = compactor.as_mut() {
                if let Some(value) = node.value.take() {
                    node.value = Some(compact(value));
                }
            }
            stack.extend(node.children.iter_mut().map(|edge| &mut edge.child));
        }
        debug!(target: LOG_TARGET, nodes = visited, values = self.size, "Trimmed trie");
    }
}

/// Recursive removal that drops nodes left without a value or children,
/// from the removed node back up to (but not including) `node`.
fn take_pruning<V>(node: &mut Node<V>, key: &str, i: usize) -> Option<V> {
    if i == key.len() {
        return node.value.take();
    }

    let first = first_char(&key[i..]);
    let idx = node.search(first).ok()?;
    let edge = &mut node.children[idx];
    if let LabelMatch::DivergesAt(_) = match_label(key, i, key.len(), edge.label()) {
        return None;
    }
    let next = i + edge.label().len();
    let removed = take_pruning(&mut edge.child, key, next);
    if removed.is_some() && edge.child.is_vacant() {
        trace!(target: LOG_TARGET, key = &key[..next], "Pruning empty node");
        node.remove_edge(first);
    }
    removed
}

impl<V> Default for StringTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a StringTrie<V> {
    type Item = &'a V;
    type IntoIter = Values<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the concrete tree: one edge per line, indented by depth, with
/// ` -> value` after every node that holds a value.
impl<V: fmt::Display> fmt::Display for StringTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<root>")?;
        write_subtree(f, &self.root, 1)
    }
}

fn write_subtree<V: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<V>,
    indent: usize,
) -> fmt::Result {
    if let Some(value) = node.value() {
        write!(f, " -> {}", value)?;
    }
    writeln!(f)?;
    for edge in node.edges() {
        write!(f, "{:indent$}{}", "", edge.label(), indent = indent)?;
        write_subtree(f, edge.child(), indent + 1)?;
    }
    Ok(())
}
