#![forbid(unsafe_code)]

//! Word pipeline for tag clouds (headless).
//!
//! Stages, in order: a [`source::ReadService`] loads raw text, [`parser::tokenize`]
//! splits it into normalized words, a [`filter::StopwordFilter`] drops noise,
//! [`frequency::count_words`] produces the priority-ordered counts, and a
//! [`sizing::WordSizer`] turns each count into a measured, font-scaled box for
//! the layout engine. Every stage past the file read is a pure function of its
//! inputs.

pub mod config;
pub mod filter;
pub mod frequency;
pub mod parser;
pub mod sizing;
pub mod source;
pub mod text;

pub use config::{CloudConfig, FontConfig};
pub use filter::StopwordFilter;
pub use frequency::{WordCount, count_words};
pub use parser::tokenize;
pub use sizing::{FontScale, SizedWord, WordSizer};
pub use source::{ReadService, TxtReader, WordsReader};
pub use text::{
    DeterministicTextMeasurer, DisplayWidthTextMeasurer, TextMeasurer, TextMetrics, TextStyle,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source file could not be read. Propagated unmodified from the
    /// filesystem; nothing in the pipeline attempts recovery.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unsupported input format: {path}")]
    UnsupportedFormat { path: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}
