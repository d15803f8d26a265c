//! The stateful cloud layouter: spiral search + commit.

use crate::geom::{Box2, Rect, Size, rect_centered_at};
use crate::placed::PlacedRectangleSet;
use crate::spiral::{ArchimedeanSpiral, PointGenerator, SpiralOptions};
use crate::{Error, Result};

/// Stateful placement of one cloud's rectangles.
///
/// Callers feed sizes in their drawing priority order; each call commits one
/// rectangle and the committed set never changes afterwards. All calls on one
/// instance must come from a single caller in sequence (`&mut self` encodes
/// this); independent layouters are fully independent.
pub trait CloudLayouter {
    /// Places the next rectangle of the given size and returns it.
    ///
    /// The search is unbounded: a size that cannot fit near the already-placed
    /// rectangles keeps probing farther out until it clears them. Pathological
    /// inputs can therefore take arbitrarily long; callers wanting bounded
    /// latency must cap how many placements they request.
    fn place_next(&mut self, size: Size) -> Result<Rect>;

    /// Everything placed so far, in placement order.
    fn rectangles(&self) -> &[Rect];

    /// Union bounding box of everything placed so far.
    fn bounds(&self) -> Option<Box2>;
}

/// Greedy spiral layouter: the first candidate point whose centered rectangle
/// overlaps nothing wins.
///
/// One instance lays out exactly one cloud. The spiral cursor and the
/// committed set both advance monotonically, so reusing an instance for an
/// unrelated cloud would start the search far from the center and collide
/// with stale rectangles; build a fresh layouter instead.
#[derive(Debug)]
pub struct SpiralCloudLayouter<G = ArchimedeanSpiral> {
    generator: G,
    placed: PlacedRectangleSet,
}

impl SpiralCloudLayouter<ArchimedeanSpiral> {
    pub fn new(options: SpiralOptions) -> Result<Self> {
        Ok(Self::with_generator(ArchimedeanSpiral::new(options)?))
    }
}

impl<G: PointGenerator> SpiralCloudLayouter<G> {
    /// Builds a layouter over an arbitrary candidate stream.
    pub fn with_generator(generator: G) -> Self {
        Self {
            generator,
            placed: PlacedRectangleSet::new(),
        }
    }

    pub fn placed(&self) -> &PlacedRectangleSet {
        &self.placed
    }
}

impl<G: PointGenerator> CloudLayouter for SpiralCloudLayouter<G> {
    fn place_next(&mut self, size: Size) -> Result<Rect> {
        // Validate before touching the generator: a rejected call must leave
        // the spiral cursor and the committed set exactly as they were.
        if !(size.width >= 0.0 && size.height >= 0.0)
            || !size.width.is_finite()
            || !size.height.is_finite()
        {
            return Err(Error::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }

        let mut attempts = 0u64;
        loop {
            attempts += 1;
            let candidate = rect_centered_at(self.generator.next_point(), size);
            if !self.placed.overlaps_any(&candidate) {
                tracing::trace!(
                    attempts,
                    placed = self.placed.len(),
                    width = size.width,
                    height = size.height,
                    "committed placement"
                );
                self.placed.push(candidate);
                return Ok(candidate);
            }
        }
    }

    fn rectangles(&self) -> &[Rect] {
        self.placed.rects()
    }

    fn bounds(&self) -> Option<Box2> {
        self.placed.bounds()
    }
}
