//! Stopword filtering.

use crate::Result;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Common English function words that carry no weight in a cloud.
const DEFAULT_ENGLISH: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "because",
    "been", "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have",
    "he", "her", "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "like", "me",
    "more", "most", "my", "no", "not", "of", "on", "one", "only", "or", "other", "our", "out",
    "over", "she", "so", "some", "such", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "to", "up", "us", "was", "we", "were", "what", "when", "which",
    "while", "who", "will", "with", "would", "you", "your",
];

/// A configurable exclusion set applied between tokenizing and counting.
///
/// Matching is case-insensitive: entries are normalized to lowercase at
/// construction and the tokenizer already lowercases its output.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    excluded: FxHashSet<String>,
}

impl StopwordFilter {
    /// A filter that excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in English stoplist.
    pub fn default_english() -> Self {
        Self::from_words(DEFAULT_ENGLISH.iter().copied())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { excluded }
    }

    /// Loads one word per line; blank lines and `#` comment lines are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_words(
            text.lines().filter(|l| !l.trim_start().starts_with('#')),
        ))
    }

    pub fn is_excluded(&self, word: &str) -> bool {
        self.excluded.contains(word)
    }

    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    /// Pure sequence-to-sequence filter; keeps input order.
    pub fn retain<I>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        words
            .into_iter()
            .filter(|w| !self.is_excluded(w))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = StopwordFilter::empty();
        let words = owned(&["the", "cloud"]);
        assert_eq!(filter.retain(words.clone()), words);
    }

    #[test]
    fn default_english_drops_function_words() {
        let filter = StopwordFilter::default_english();
        let kept = filter.retain(owned(&["the", "spiral", "of", "words"]));
        assert_eq!(kept, owned(&["spiral", "words"]));
    }

    #[test]
    fn entries_are_normalized_to_lowercase() {
        let filter = StopwordFilter::from_words(["  Boring  ", "NOISE"]);
        assert!(filter.is_excluded("boring"));
        assert!(filter.is_excluded("noise"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn file_loading_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "# project stoplist").expect("write");
        writeln!(file, "lorem").expect("write");
        writeln!(file).expect("write");
        writeln!(file, "Ipsum").expect("write");

        let filter = StopwordFilter::from_file(file.path()).expect("load");
        assert_eq!(filter.len(), 2);
        assert!(filter.is_excluded("lorem"));
        assert!(filter.is_excluded("ipsum"));
    }
}
