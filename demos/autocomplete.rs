//! Autocomplete against a case-insensitive dictionary, with trie events logged.
//!
//! Run with
//! `cargo run --example autocomplete`
use string_trie::{AutoCompleteDictionary, StringTrie, TrieDictionary};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let mut dict = TrieDictionary::case_insensitive();
    for search in ["Lime", "LimeWire", "LimeRadio", "Lax", "Lake", "Lovely"] {
        dict.add_entry(search);
    }

    for typed in ["l", "lim", "LIMER", "la", "z"] {
        match dict.lookup(typed) {
            Some(completion) => println!("{:>6} -> {}", typed, completion),
            None => println!("{:>6} -> (no completion)", typed),
        }
    }

    println!("\nEverything starting with \"la\":");
    for entry in dict.iter_prefixed_by("la") {
        println!("  {}", entry);
    }

    // The concrete tree, with the folded keys as edge labels.
    let mut trie = StringTrie::new();
    for (rank, word) in ["lime", "limewire", "limeradio", "lax", "lake", "lovely"]
        .iter()
        .enumerate()
    {
        trie.add(word, rank);
    }
    println!("\n{}", trie);
}
