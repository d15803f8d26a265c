//! Sequencing layer: drive a layouter over an ordered batch of sized items.

use crate::Result;
use crate::geom::{Rect, Size};
use crate::layouter::CloudLayouter;

/// Places every `(identifier, size)` pair in order and pairs each identifier
/// with the rectangle it received.
///
/// The input order is the drawing priority order and is preserved in the
/// output. An empty input yields an empty output without touching the
/// layouter. The returned sequence is plain data; whatever consumes it
/// (rendering, serialization, analysis) is chosen by the composer, not here.
pub fn place_all<L, I, T>(layouter: &mut L, items: I) -> Result<Vec<(T, Rect)>>
where
    L: CloudLayouter + ?Sized,
    I: IntoIterator<Item = (T, Size)>,
{
    let items = items.into_iter();
    let mut out = Vec::with_capacity(items.size_hint().0);
    for (id, size) in items {
        let rect = layouter.place_next(size)?;
        out.push((id, rect));
    }
    Ok(out)
}
