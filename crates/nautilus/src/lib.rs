#![forbid(unsafe_code)]

//! Greedy spiral cloud layout.
//!
//! Design goals:
//! - deterministic placements: same options + same size sequence = same rectangles
//! - strict pairwise non-overlap of everything a layouter commits
//! - compactness via a monotonically outward candidate search
//!
//! The crate ships one point generator ([`ArchimedeanSpiral`]) and one layouter
//! ([`SpiralCloudLayouter`]); both sit behind small traits so alternative search
//! strategies can be substituted without touching callers.

pub mod geom;
pub mod layouter;
pub mod placed;
pub mod sequence;
pub mod spiral;

pub use layouter::{CloudLayouter, SpiralCloudLayouter};
pub use placed::PlacedRectangleSet;
pub use sequence::place_all;
pub use spiral::{ArchimedeanSpiral, PointGenerator, SpiralOptions};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A placement was requested with a negative or non-finite dimension.
    /// The layouter state is untouched when this is returned.
    #[error("invalid rectangle size: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    #[error("invalid spiral options: {message}")]
    InvalidSpiralOptions { message: String },
}
