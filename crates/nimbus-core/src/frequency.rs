//! Word frequency counting and priority ordering.

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub text: String,
    pub count: usize,
}

/// Counts occurrences and returns them in drawing priority order: descending
/// count, ties broken by first appearance in the input.
///
/// The tie-break is what makes the whole pipeline deterministic — two runs
/// over the same document always feed the layouter the same sequence.
pub fn count_words<I>(words: I) -> Vec<WordCount>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for word in words {
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut out: Vec<WordCount> = counts
        .into_iter()
        .map(|(text, count)| WordCount { text, count })
        .collect();
    // Stable sort keeps the map's first-seen order within equal counts.
    out.sort_by(|a, b| b.count.cmp(&a.count));
    tracing::debug!(unique = out.len(), "counted words");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn orders_by_descending_count() {
        let counts = count_words(owned(&["b", "a", "b", "c", "b", "a"]));
        assert_eq!(
            counts,
            vec![
                WordCount { text: "b".into(), count: 3 },
                WordCount { text: "a".into(), count: 2 },
                WordCount { text: "c".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let counts = count_words(owned(&["zeta", "alpha", "mid", "alpha", "zeta"]));
        let texts: Vec<&str> = counts.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn empty_input_yields_empty_counts() {
        assert!(count_words(Vec::new()).is_empty());
    }
}
