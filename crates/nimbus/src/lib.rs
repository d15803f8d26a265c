#![forbid(unsafe_code)]

//! `nimbus` is a headless tag-cloud engine.
//!
//! The base crate re-exports the word pipeline ([`nimbus_core`]); everything
//! visual is feature-gated so parsing-only consumers stay light:
//!
//! - `render`: spiral layout + SVG rendering (`nimbus::cloud`)
//! - `raster`: PNG/JPG/PDF output via pure-Rust SVG rasterization

pub use nimbus_core::*;

#[cfg(feature = "render")]
pub mod cloud {
    pub use nimbus_render::layout_cloud;
    pub use nimbus_render::model::{Bounds, CloudLayout, TagLayout};
    pub use nimbus_render::svg::{SvgRenderOptions, render_cloud_svg};

    #[cfg(feature = "raster")]
    pub mod raster;

    use nimbus_core::{
        CloudConfig, DeterministicTextMeasurer, FontScale, ReadService, StopwordFilter,
        TextMeasurer, TextStyle, WordSizer, count_words, tokenize,
    };
    use std::path::Path;
    use std::sync::Arc;

    #[derive(Debug, thiserror::Error)]
    pub enum CloudError {
        #[error(transparent)]
        Pipeline(#[from] nimbus_core::Error),
        #[error(transparent)]
        Render(#[from] nimbus_render::Error),
    }

    pub type Result<T> = std::result::Result<T, CloudError>;

    /// Runs the whole pipeline on raw text: tokenize, filter, count, truncate
    /// to `config.max_words`, size, and lay out.
    pub fn layout_text(
        text: &str,
        config: &CloudConfig,
        stopwords: &StopwordFilter,
        measurer: &dyn TextMeasurer,
    ) -> Result<CloudLayout> {
        config.validate()?;

        let kept = stopwords.retain(tokenize(text));
        let mut counts = count_words(kept);
        if let Some(max) = config.max_words {
            counts.truncate(max);
        }

        let scale = FontScale::new(config.font.min_size, config.font.max_size)?;
        let style = TextStyle {
            font_family: config.font.family.clone(),
            ..Default::default()
        };
        let sized = WordSizer::new(scale, style, measurer).size_words(&counts);

        Ok(nimbus_render::layout_cloud(&sized, config)?)
    }

    /// Pipeline + SVG in one call.
    pub fn render_svg(
        text: &str,
        config: &CloudConfig,
        stopwords: &StopwordFilter,
        measurer: &dyn TextMeasurer,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let layout = layout_text(text, config, stopwords, measurer)?;
        Ok(render_cloud_svg(&layout, svg_options))
    }

    /// Convenience bundle for callers that render more than one cloud with
    /// the same settings. All work is CPU-bound; the only I/O is
    /// [`CloudRenderer::layout_file`]'s initial read.
    #[derive(Clone)]
    pub struct CloudRenderer {
        pub config: CloudConfig,
        pub stopwords: StopwordFilter,
        pub measurer: Arc<dyn TextMeasurer + Send + Sync>,
        pub svg: SvgRenderOptions,
    }

    impl Default for CloudRenderer {
        fn default() -> Self {
            Self {
                config: CloudConfig::default(),
                stopwords: StopwordFilter::default_english(),
                measurer: Arc::new(DeterministicTextMeasurer::default()),
                svg: SvgRenderOptions::default(),
            }
        }
    }

    impl CloudRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_config(mut self, config: CloudConfig) -> Self {
            self.config = config;
            self
        }

        pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
            self.stopwords = stopwords;
            self
        }

        pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer + Send + Sync>) -> Self {
            self.measurer = measurer;
            self
        }

        pub fn with_svg_options(mut self, svg: SvgRenderOptions) -> Self {
            self.svg = svg;
            self
        }

        pub fn layout(&self, text: &str) -> Result<CloudLayout> {
            layout_text(text, &self.config, &self.stopwords, self.measurer.as_ref())
        }

        /// Reads a document through the built-in source registry and lays it
        /// out. Read failures surface unmodified.
        pub fn layout_file(&self, path: &Path) -> Result<CloudLayout> {
            let text = ReadService::new().read(path)?;
            self.layout(&text)
        }

        pub fn render_svg(&self, text: &str) -> Result<String> {
            render_svg(
                text,
                &self.config,
                &self.stopwords,
                self.measurer.as_ref(),
                &self.svg,
            )
        }

        #[cfg(feature = "raster")]
        pub fn render_png(&self, text: &str, raster: &raster::RasterOptions) -> raster::Result<Vec<u8>> {
            let svg = self.render_svg(text)?;
            raster::svg_to_png(&svg, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_jpeg(&self, text: &str, raster: &raster::RasterOptions) -> raster::Result<Vec<u8>> {
            let svg = self.render_svg(text)?;
            raster::svg_to_jpeg(&svg, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_pdf(&self, text: &str) -> raster::Result<Vec<u8>> {
            let svg = self.render_svg(text)?;
            raster::svg_to_pdf(&svg)
        }
    }
}
