//! Tokenizing raw document text into normalized words.

use regex::Regex;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // A word is an alphabetic run, optionally continued across interior
    // apostrophes or hyphens ("don't", "well-known"). Digits and punctuation
    // never start or end a word.
    PATTERN.get_or_init(|| {
        Regex::new(r"\p{Alphabetic}+(?:['’\-]\p{Alphabetic}+)*").expect("word pattern compiles")
    })
}

/// Splits text into lowercased words, preserving document order.
pub fn tokenize(text: &str) -> Vec<String> {
    word_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}
