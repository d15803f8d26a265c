//! Explicit configuration for building one cloud.
//!
//! There is no ambient/global configuration: callers construct a
//! [`CloudConfig`] and pass it down. Defaults are tuned for a few hundred
//! words on a screen-sized canvas.

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct FontConfig {
    /// CSS-style family list; `None` falls back to the renderer's default.
    pub family: Option<String>,
    /// Font size assigned to the rarest surviving word, in px.
    pub min_size: f64,
    /// Font size assigned to the most frequent word, in px.
    pub max_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: None,
            min_size: 12.0,
            max_size: 64.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloudConfig {
    pub center_x: f64,
    pub center_y: f64,
    /// Spiral angle advance per candidate, radians.
    pub angle_step: f64,
    /// Spiral radius growth per full turn.
    pub radius_step: f64,
    pub font: FontConfig,
    /// Keep only the most frequent N words; `None` keeps everything.
    pub max_words: Option<usize>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            angle_step: 0.1,
            radius_step: 0.5,
            font: FontConfig::default(),
            max_words: Some(150),
        }
    }
}

impl CloudConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.center_x.is_finite() && self.center_y.is_finite()) {
            return Err(Error::InvalidConfig {
                message: format!(
                    "center must be finite, got ({}, {})",
                    self.center_x, self.center_y
                ),
            });
        }
        if !(self.angle_step.is_finite() && self.angle_step > 0.0) {
            return Err(Error::InvalidConfig {
                message: format!("angle_step must be > 0, got {}", self.angle_step),
            });
        }
        if !(self.radius_step.is_finite() && self.radius_step > 0.0) {
            return Err(Error::InvalidConfig {
                message: format!("radius_step must be > 0, got {}", self.radius_step),
            });
        }
        if !(self.font.min_size.is_finite() && self.font.min_size > 0.0) {
            return Err(Error::InvalidConfig {
                message: format!("font.min_size must be > 0, got {}", self.font.min_size),
            });
        }
        if !(self.font.max_size.is_finite() && self.font.max_size >= self.font.min_size) {
            return Err(Error::InvalidConfig {
                message: format!(
                    "font.max_size must be >= font.min_size, got {} < {}",
                    self.font.max_size, self.font.min_size
                ),
            });
        }
        Ok(())
    }
}
