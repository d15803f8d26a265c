#![forbid(unsafe_code)]

//! Headless layout + SVG rendering for nimbus tag clouds.
//!
//! [`layout_cloud`] is the bridge between the word pipeline and the spiral
//! layout engine: sized words go in, a serializable [`model::CloudLayout`]
//! comes out. [`svg::render_cloud_svg`] turns that layout into a standalone
//! SVG string.

pub mod model;
pub mod svg;

use crate::model::{Bounds, CloudLayout, TagLayout};
use nautilus::geom::{point, size};
use nautilus::{CloudLayouter, SpiralCloudLayouter, SpiralOptions, place_all};
use nimbus_core::{CloudConfig, SizedWord};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] nimbus_core::Error),
    #[error(transparent)]
    Layout(#[from] nautilus::Error),
}

/// Deterministic fill assignment: palette colors handed out in first-use
/// order, cycling when the palette runs out.
#[derive(Debug, Clone)]
struct ColorScale {
    palette: Vec<&'static str>,
    next: usize,
}

impl ColorScale {
    fn new_default() -> Self {
        Self {
            palette: vec![
                "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
                "#7f7f7f", "#bcbd22", "#17becf",
            ],
            next: 0,
        }
    }

    fn next_color(&mut self) -> String {
        let color = self.palette[self.next % self.palette.len()];
        self.next += 1;
        color.to_string()
    }
}

/// Lays out sized words with a fresh spiral layouter and builds the render
/// model. Input order is the drawing priority order and is preserved.
pub fn layout_cloud(words: &[SizedWord], config: &CloudConfig) -> Result<CloudLayout> {
    config.validate()?;

    let mut layouter = SpiralCloudLayouter::new(SpiralOptions {
        center: point(config.center_x, config.center_y),
        angle_step: config.angle_step,
        radius_step: config.radius_step,
    })?;

    let placed = place_all(
        &mut layouter,
        words.iter().map(|w| (w, size(w.width, w.height))),
    )?;

    let mut colors = ColorScale::new_default();
    let tags: Vec<TagLayout> = placed
        .into_iter()
        .map(|(word, rect)| TagLayout {
            text: word.text.clone(),
            count: word.count,
            x: rect.origin.x,
            y: rect.origin.y,
            width: rect.size.width,
            height: rect.size.height,
            font_size: word.font_size,
            fill: colors.next_color(),
        })
        .collect();

    let bounds = layouter.bounds().map(|b| Bounds {
        min_x: b.min.x,
        min_y: b.min.y,
        max_x: b.max.x,
        max_y: b.max.y,
    });

    tracing::debug!(tags = tags.len(), "cloud layout complete");
    Ok(CloudLayout { tags, bounds })
}
