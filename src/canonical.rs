//! Key canonicalization applied before any tree operation.
use std::borrow::Cow;

/// How keys are canonicalized before they are stored or searched for.
///
/// Every public trie operation canonicalizes its key exactly once, so stored
/// keys and query keys are always compared in the same form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaseMode {
    /// Keys are used as given.
    #[default]
    Sensitive,
    /// Keys are folded to lower case. The original casing of stored keys cannot
    /// be recovered from the tree.
    Insensitive,
}

impl CaseMode {
    /// Converts `key` into its canonical form.
    ///
    /// `Cow` lets the case-sensitive mode, and keys that are already lower case,
    /// borrow the input instead of allocating.
    pub fn canonicalize<'a>(self, key: &'a str) -> Cow<'a, str> {
        match self {
            CaseMode::Sensitive => Cow::Borrowed(key),
            CaseMode::Insensitive => fold_case(key),
        }
    }
}

// Upper-casing first collapses characters with several lower-case forms onto one.
fn fold_case(key: &str) -> Cow<'_, str> {
    if key.bytes().all(|b| b.is_ascii() && !b.is_ascii_uppercase()) {
        return Cow::Borrowed(key);
    }
    let folded = key.to_uppercase().to_lowercase();
    if folded == key {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(folded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_borrows() {
        let folded = CaseMode::Sensitive.canonicalize("LimeWire");
        assert_eq!(folded, "LimeWire");
        assert!(matches!(folded, Cow::Borrowed(_)));
    }

    #[test]
    fn test_insensitive_folds() {
        assert_eq!(CaseMode::Insensitive.canonicalize("LimeWire"), "limewire");
        assert_eq!(CaseMode::Insensitive.canonicalize("LIME"), "lime");
    }

    #[test]
    fn test_insensitive_lowercase_borrows() {
        let folded = CaseMode::Insensitive.canonicalize("lime wire");
        assert_eq!(folded, "lime wire");
        assert!(matches!(folded, Cow::Borrowed(_)));
    }

    #[test]
    fn test_insensitive_unicode() {
        assert_eq!(CaseMode::Insensitive.canonicalize("ÉCOLE"), "école");
        // Final sigma and sigma fold to the same form.
        assert_eq!(
            CaseMode::Insensitive.canonicalize("ΣΑΣ"),
            CaseMode::Insensitive.canonicalize("σας")
        );
    }

    #[test]
    fn test_default_is_sensitive() {
        assert_eq!(CaseMode::default(), CaseMode::Sensitive);
    }
}
