//! Font-derived word sizing: frequency in, box out.

use crate::frequency::WordCount;
use crate::text::{TextMeasurer, TextStyle};
use crate::{Error, Result};
use serde::Serialize;

/// Linear map from a count range onto a font-size range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    pub min_size: f64,
    pub max_size: f64,
}

impl FontScale {
    pub fn new(min_size: f64, max_size: f64) -> Result<Self> {
        if !(min_size.is_finite() && min_size > 0.0) {
            return Err(Error::InvalidConfig {
                message: format!("min font size must be > 0, got {min_size}"),
            });
        }
        if !(max_size.is_finite() && max_size >= min_size) {
            return Err(Error::InvalidConfig {
                message: format!("max font size must be >= min, got {max_size} < {min_size}"),
            });
        }
        Ok(Self { min_size, max_size })
    }

    /// Font size for `count` within the observed `[min_count, max_count]`.
    /// When every word has the same count, everything gets the max size.
    pub fn size_for(&self, count: usize, min_count: usize, max_count: usize) -> f64 {
        if max_count <= min_count {
            return self.max_size;
        }
        let t = (count.saturating_sub(min_count)) as f64 / (max_count - min_count) as f64;
        self.min_size + t * (self.max_size - self.min_size)
    }
}

/// A word ready for layout: its text, priority weight, and measured box.
#[derive(Debug, Clone, Serialize)]
pub struct SizedWord {
    pub text: String,
    pub count: usize,
    pub font_size: f64,
    pub width: f64,
    pub height: f64,
}

/// Turns priority-ordered counts into measured boxes using one font scale and
/// one measurer. Pure: same counts, same output.
pub struct WordSizer<'a> {
    scale: FontScale,
    base_style: TextStyle,
    measurer: &'a dyn TextMeasurer,
}

impl<'a> WordSizer<'a> {
    pub fn new(scale: FontScale, base_style: TextStyle, measurer: &'a dyn TextMeasurer) -> Self {
        Self {
            scale,
            base_style,
            measurer,
        }
    }

    pub fn size_words(&self, counts: &[WordCount]) -> Vec<SizedWord> {
        let max_count = counts.iter().map(|c| c.count).max().unwrap_or(0);
        let min_count = counts.iter().map(|c| c.count).min().unwrap_or(0);

        counts
            .iter()
            .map(|c| {
                let font_size = self.scale.size_for(c.count, min_count, max_count);
                let style = TextStyle {
                    font_size,
                    ..self.base_style.clone()
                };
                let metrics = self.measurer.measure(&c.text, &style);
                SizedWord {
                    text: c.text.clone(),
                    count: c.count,
                    font_size,
                    width: metrics.width,
                    height: metrics.height,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::DeterministicTextMeasurer;

    fn counts(pairs: &[(&str, usize)]) -> Vec<WordCount> {
        pairs
            .iter()
            .map(|(text, count)| WordCount {
                text: text.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn font_size_is_monotone_in_count() {
        let scale = FontScale::new(10.0, 50.0).expect("scale");
        let s1 = scale.size_for(1, 1, 9);
        let s5 = scale.size_for(5, 1, 9);
        let s9 = scale.size_for(9, 1, 9);
        assert_eq!(s1, 10.0);
        assert_eq!(s9, 50.0);
        assert!(s1 < s5 && s5 < s9);
    }

    #[test]
    fn uniform_counts_all_get_the_max_size() {
        let scale = FontScale::new(10.0, 50.0).expect("scale");
        assert_eq!(scale.size_for(3, 3, 3), 50.0);
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(FontScale::new(50.0, 10.0).is_err());
        assert!(FontScale::new(0.0, 10.0).is_err());
    }

    #[test]
    fn sized_words_keep_order_and_have_positive_boxes() {
        let measurer = DeterministicTextMeasurer::default();
        let sizer = WordSizer::new(
            FontScale::new(12.0, 48.0).expect("scale"),
            TextStyle::default(),
            &measurer,
        );

        let sized = sizer.size_words(&counts(&[("rust", 7), ("cloud", 3), ("tag", 1)]));
        assert_eq!(sized.len(), 3);
        assert_eq!(sized[0].text, "rust");
        assert!(sized[0].font_size > sized[1].font_size);
        assert!(sized[1].font_size > sized[2].font_size);
        for w in &sized {
            assert!(w.width > 0.0 && w.height > 0.0);
            assert!(w.width.is_finite() && w.height.is_finite());
        }
    }

    #[test]
    fn empty_counts_size_to_nothing() {
        let measurer = DeterministicTextMeasurer::default();
        let sizer = WordSizer::new(
            FontScale::new(12.0, 48.0).expect("scale"),
            TextStyle::default(),
            &measurer,
        );
        assert!(sizer.size_words(&[]).is_empty());
    }
}
