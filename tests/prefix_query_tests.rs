use std::collections::HashSet;

use string_trie::{StringTrie, TrieConfig};

fn words(trie: &StringTrie<String>, prefix: &str) -> Vec<String> {
    trie.prefixed_by(prefix).cloned().collect()
}

#[test]
fn test_prefix_query_basic() {
    let mut trie = StringTrie::new();
    trie.add("hello", 1);
    trie.add("help", 2);
    trie.add("world", 3);

    let results: HashSet<i32> = trie.prefixed_by("hel").copied().collect();
    let expected: HashSet<i32> = vec![1, 2].into_iter().collect();

    assert_eq!(results, expected);
}

#[test]
fn test_prefix_query_sibling_order() {
    // Insert keys deliberately out of order; siblings come back sorted by
    // their first character.
    let mut trie = StringTrie::new();
    for word in [
        "zebra",
        "apple",
        "banana",
        "cherry",
        "date",
        "apricot",
        "blueberry",
        "blackberry",
    ] {
        trie.add(word, word.to_string());
    }

    assert_eq!(words(&trie, "a"), vec!["apple", "apricot"]);
    assert_eq!(words(&trie, "b"), vec!["banana", "blackberry", "blueberry"]);

    let mut complex = StringTrie::new();
    for word in ["abcd", "abce", "abcf", "abcg", "abd"] {
        complex.add(word, word.to_string());
    }

    assert_eq!(words(&complex, "abc"), vec!["abcd", "abce", "abcf", "abcg"]);
}

#[test]
fn test_prefix_query_descendants_before_siblings() {
    let mut trie = StringTrie::new();
    for word in ["a", "ab", "abc", "abd", "ac"] {
        trie.add(word, word.to_string());
    }

    // Everything under "ab" comes out before "ac".
    assert_eq!(words(&trie, "a"), vec!["a", "ab", "abc", "abd", "ac"]);
}

#[test]
fn test_prefix_query_nonexistent() {
    let mut trie = StringTrie::new();
    trie.add("hello", 1);
    trie.add("world", 2);

    assert_eq!(trie.prefixed_by("xyz").count(), 0);
    // Diverges in the middle of the "hello" label.
    assert_eq!(trie.prefixed_by("hex").count(), 0);
    // Longer than every key.
    assert_eq!(trie.prefixed_by("hello world").count(), 0);
}

#[test]
fn test_prefix_query_partial_label() {
    let mut trie = StringTrie::new();
    trie.add("hello", 1);
    trie.add("help", 2);

    // "he" is not a key itself, and ends inside the "hel" label.
    assert_eq!(trie.get("he"), None);
    assert_eq!(trie.prefixed_by("he").count(), 2);
}

#[test]
fn test_prefix_query_nested() {
    let mut trie = StringTrie::new();
    trie.add("a", 1);
    trie.add("ab", 2);
    trie.add("abc", 3);
    trie.add("abcd", 4);

    assert_eq!(trie.prefixed_by("a").count(), 4);
    assert_eq!(trie.prefixed_by("ab").count(), 3);
    assert_eq!(trie.prefixed_by("abc").count(), 2);
    assert_eq!(trie.prefixed_by("abcd").count(), 1);
    assert_eq!(trie.prefixed_by("abcde").count(), 0);
}

#[test]
fn test_prefix_query_empty_prefix() {
    let mut trie = StringTrie::new();
    trie.add("hello", 1);
    trie.add("world", 2);

    assert_eq!(trie.prefixed_by("").count(), 2);
}

#[test]
fn test_prefix_query_skips_removed() {
    let mut trie = StringTrie::new();
    trie.add("lime", 1);
    trie.add("limewire", 2);
    trie.add("limeradio", 3);

    assert!(trie.remove("lime"));
    let values: HashSet<i32> = trie.prefixed_by("lime").copied().collect();
    assert_eq!(values, vec![2, 3].into_iter().collect::<HashSet<i32>>());

    assert!(trie.remove("limewire"));
    assert!(trie.remove("limeradio"));
    assert_eq!(trie.prefixed_by("lime").count(), 0);
    assert_eq!(trie.iter().count(), 0);
    assert!(trie.is_empty());
}

#[test]
fn test_prefix_query_case_insensitive() {
    let mut trie = StringTrie::with_config(TrieConfig::new().ignore_case(true));
    trie.add("LimeWire", "LimeWire".to_string());
    trie.add("limeradio", "limeradio".to_string());

    let mut found = words(&trie, "LIME");
    found.sort();
    assert_eq!(found, vec!["LimeWire", "limeradio"]);
}

#[test]
fn test_prefix_query_reference_scenario() {
    let mut trie = StringTrie::new();
    for word in ["Lime", "LimeWire", "LimeRadio", "Lax", "Lake", "Lovely"] {
        trie.add(word, word.to_string());
    }

    assert_eq!(trie.prefixed_by("Lo").last().map(String::as_str), Some("Lovely"));

    let la: HashSet<String> = trie.prefixed_by("La").cloned().collect();
    let expected: HashSet<String> = ["Lax", "Lake"].iter().map(|s| s.to_string()).collect();
    assert_eq!(la, expected);

    assert_eq!(trie.get("Lime").map(String::as_str), Some("Lime"));
    assert_eq!(trie.prefixed_by("Z").next(), None);
}

#[test]
fn test_prefix_query_range_over_buffer() {
    let mut trie = StringTrie::case_insensitive();
    for word in ["Lime", "LimeWire", "Lax"] {
        trie.add(word, word.to_string());
    }

    let typed = "search: LIMEW";
    let canonical = trie.canonical_case(typed);
    let start = canonical.find(':').unwrap() + 2;

    let found: Vec<&String> = trie
        .prefixed_by_range(&canonical, start..canonical.len())
        .unwrap()
        .collect();
    assert_eq!(found, vec!["LimeWire"]);
}
