//! Dictionary adapter for autocomplete text fields.
//!
//! Text-field widgets only need a handful of operations: remember what was
//! typed, forget an entry, and complete a prefix. [`AutoCompleteDictionary`]
//! is that contract and [`TrieDictionary`] implements it on top of a
//! [`StringTrie`] that maps every entry to itself.

use std::iter::FusedIterator;

use tracing::debug;

use crate::config::TrieConfig;
use crate::iter::Values;
use crate::trie::StringTrie;
use crate::LOG_TARGET;

/// The operations an autocomplete widget performs on its dictionary.
///
/// Object safe, so a widget can hold a `Box<dyn AutoCompleteDictionary>`.
pub trait AutoCompleteDictionary {
    /// Adds `entry`. Returns `false`, leaving the dictionary unchanged, if it
    /// is already present.
    fn add_entry(&mut self, entry: &str) -> bool;

    /// Removes `entry`, returning whether it was present.
    fn remove_entry(&mut self, entry: &str) -> bool;

    fn contains(&self, entry: &str) -> bool;

    /// Completes `prefix`: the last entry, in depth-first order, that starts
    /// with it.
    fn lookup(&self, prefix: &str) -> Option<&str>;

    /// Every entry.
    fn iter_all(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Every entry starting with `prefix`.
    fn iter_prefixed_by(&self, prefix: &str) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Removes every entry.
    fn clear(&mut self);
}

/// A set of strings backed by a [`StringTrie`].
///
/// Each entry is stored as both key and value. In a case-insensitive
/// dictionary the key is folded but the value keeps the casing the entry was
/// first added with, so completions come back as the user typed them.
///
/// # Examples
///
/// ```
/// use string_trie::{AutoCompleteDictionary, TrieDictionary};
///
/// let mut dict = TrieDictionary::case_insensitive();
/// dict.add_entry("LimeWire");
/// dict.add_entry("Lovely");
///
/// assert_eq!(dict.lookup("limew"), Some("LimeWire"));
/// assert!(!dict.add_entry("limewire"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrieDictionary {
    trie: StringTrie<String>,
}

impl TrieDictionary {
    /// Creates an empty, case-sensitive dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty dictionary that ignores case when matching.
    pub fn case_insensitive() -> Self {
        Self::with_config(TrieConfig::new().ignore_case(true))
    }

    pub fn with_config(config: TrieConfig) -> Self {
        TrieDictionary {
            trie: StringTrie::with_config(config),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Every entry, in depth-first order.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            values: self.trie.iter(),
        }
    }

    /// Every entry starting with `prefix`, in depth-first order.
    pub fn entries_prefixed_by(&self, prefix: &str) -> Entries<'_> {
        Entries {
            values: self.trie.prefixed_by(prefix),
        }
    }

    /// The underlying trie.
    pub fn trie(&self) -> &StringTrie<String> {
        &self.trie
    }
}

impl AutoCompleteDictionary for TrieDictionary {
    fn add_entry(&mut self, entry: &str) -> bool {
        if self.trie.contains_key(entry) {
            return false;
        }
        self.trie.add(entry, entry.to_owned());
        true
    }

    fn remove_entry(&mut self, entry: &str) -> bool {
        self.trie.remove(entry)
    }

    fn contains(&self, entry: &str) -> bool {
        self.trie.contains_key(entry)
    }

    fn lookup(&self, prefix: &str) -> Option<&str> {
        self.entries_prefixed_by(prefix).last()
    }

    fn iter_all(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.entries())
    }

    fn iter_prefixed_by(&self, prefix: &str) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.entries_prefixed_by(prefix))
    }

    /// Removes the entries one at a time from a snapshot. The tree itself is
    /// not reset, so its structural nodes remain.
    fn clear(&mut self) {
        let snapshot: Vec<String> = self.trie.iter().cloned().collect();
        for entry in &snapshot {
            self.trie.remove(entry);
        }
        debug!(target: LOG_TARGET, entries = snapshot.len(), "Cleared dictionary");
    }
}

impl<'a> FromIterator<&'a str> for TrieDictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut dict = TrieDictionary::new();
        dict.extend(iter);
        dict
    }
}

impl<'a> Extend<&'a str> for TrieDictionary {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for entry in iter {
            self.add_entry(entry);
        }
    }
}

/// Iterator over dictionary entries.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    values: Values<'a, String>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next().map(String::as_str)
    }
}

impl<'a> FusedIterator for Entries<'a> {}
