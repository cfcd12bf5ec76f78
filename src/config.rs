//! Construction-time settings for [`StringTrie`](crate::StringTrie).

use crate::canonical::CaseMode;

/// Settings fixed when a trie is constructed.
///
/// The default is the reference behaviour: case-sensitive keys and no pruning
/// of nodes emptied by `remove`.
///
/// With the `serde` feature enabled the config can be embedded in a host
/// application's settings file; missing fields take their default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrieConfig {
    /// Fold every key to lower case before use.
    pub ignore_case: bool,

    /// Remove nodes that end up with neither a value nor children after a
    /// `remove`, walking back up toward the root.
    pub prune_on_remove: bool,
}

impl TrieConfig {
    /// Creates the default config.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    #[must_use]
    pub fn prune_on_remove(mut self, prune: bool) -> Self {
        self.prune_on_remove = prune;
        self
    }

    /// The canonicalization implied by `ignore_case`.
    pub fn case_mode(&self) -> CaseMode {
        if self.ignore_case {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrieConfig::default();
        assert!(!config.ignore_case);
        assert!(!config.prune_on_remove);
        assert_eq!(config.case_mode(), CaseMode::Sensitive);
    }

    #[test]
    fn test_builder() {
        let config = TrieConfig::new().ignore_case(true).prune_on_remove(true);
        assert!(config.ignore_case);
        assert!(config.prune_on_remove);
        assert_eq!(config.case_mode(), CaseMode::Insensitive);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_tokens() {
        use serde_test::{assert_de_tokens, assert_tokens, Token};

        let config = TrieConfig::new().ignore_case(true);
        assert_tokens(
            &config,
            &[
                Token::Struct {
                    name: "TrieConfig",
                    len: 2,
                },
                Token::Str("ignore_case"),
                Token::Bool(true),
                Token::Str("prune_on_remove"),
                Token::Bool(false),
                Token::StructEnd,
            ],
        );

        // Missing fields fall back to the defaults.
        assert_de_tokens(
            &TrieConfig::new().prune_on_remove(true),
            &[
                Token::Struct {
                    name: "TrieConfig",
                    len: 1,
                },
                Token::Str("prune_on_remove"),
                Token::Bool(true),
                Token::StructEnd,
            ],
        );
    }
}
