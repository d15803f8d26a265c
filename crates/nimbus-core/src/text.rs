//! Deterministic text measurement.
//!
//! No font files are parsed and no rendering backend is consulted: both
//! measurers are closed-form functions of the string and the style, which is
//! what keeps layouts reproducible across machines.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: f64,
    pub font_weight: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 16.0,
            font_weight: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Maps a single-line string and a style to a bounding box.
///
/// Implementations must be deterministic and total: identical inputs always
/// produce identical, finite, non-negative metrics.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Char-count approximation: every character is `char_width_factor` em wide.
#[derive(Debug, Clone, Default)]
pub struct DeterministicTextMeasurer {
    pub char_width_factor: f64,
    pub line_height_factor: f64,
}

impl DeterministicTextMeasurer {
    fn factors(&self) -> (f64, f64) {
        let cw = if self.char_width_factor == 0.0 {
            0.6
        } else {
            self.char_width_factor
        };
        let lh = if self.line_height_factor == 0.0 {
            1.2
        } else {
            self.line_height_factor
        };
        (cw, lh)
    }
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let (cw, lh) = self.factors();
        let font_size = style.font_size.max(1.0);
        TextMetrics {
            width: text.chars().count() as f64 * font_size * cw,
            height: font_size * lh,
        }
    }
}

/// Display-column approximation: wide (CJK, emoji) characters count double,
/// combining marks count zero. Better proportions than raw char counts for
/// mixed-script documents.
#[derive(Debug, Clone, Default)]
pub struct DisplayWidthTextMeasurer {
    pub column_width_factor: f64,
    pub line_height_factor: f64,
}

impl TextMeasurer for DisplayWidthTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let cw = if self.column_width_factor == 0.0 {
            0.55
        } else {
            self.column_width_factor
        };
        let lh = if self.line_height_factor == 0.0 {
            1.2
        } else {
            self.line_height_factor
        };
        let font_size = style.font_size.max(1.0);
        TextMetrics {
            width: text.width() as f64 * font_size * cw,
            height: font_size * lh,
        }
    }
}
