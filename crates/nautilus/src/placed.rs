//! Committed-rectangle bookkeeping: the layouter's private state.

use crate::geom::{Box2, Point, Rect, rects_overlap};

/// Ordered, append-only set of rectangles already committed to the canvas,
/// with overlap queries and a running notion of the occupied region.
///
/// Rectangles are never moved or removed once pushed; placement order is
/// preserved by `rects()`.
#[derive(Debug, Clone, Default)]
pub struct PlacedRectangleSet {
    rects: Vec<Rect>,
    bounds: Option<Box2>,
}

impl PlacedRectangleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect) {
        let b = rect.to_box2d();
        self.bounds = Some(match self.bounds {
            Some(cur) => cur.union(&b),
            None => b,
        });
        self.rects.push(rect);
    }

    /// Whether `candidate` has a positive-area intersection with any committed
    /// rectangle. The occupied bounding box rejects far-away candidates before
    /// the linear scan.
    pub fn overlaps_any(&self, candidate: &Rect) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        let cb = candidate.to_box2d();
        if cb.max.x <= bounds.min.x
            || bounds.max.x <= cb.min.x
            || cb.max.y <= bounds.min.y
            || bounds.max.y <= cb.min.y
        {
            return false;
        }
        self.rects.iter().any(|r| rects_overlap(r, candidate))
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The union bounding box of everything committed so far.
    pub fn bounds(&self) -> Option<Box2> {
        self.bounds
    }

    /// Max distance from `center` to any committed corner; 0.0 when empty.
    ///
    /// The occupied region is convex in each axis, so the farthest point of
    /// the set is always a corner of the union bounding box.
    pub fn covering_radius(&self, center: Point) -> f64 {
        let Some(b) = self.bounds else {
            return 0.0;
        };
        let dx = (center.x - b.min.x).abs().max((b.max.x - center.x).abs());
        let dy = (center.y - b.min.y).abs().max((b.max.y - center.y).abs());
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{point, rect_centered_at, size};

    #[test]
    fn empty_set_overlaps_nothing() {
        let set = PlacedRectangleSet::new();
        let r = rect_centered_at(point(0.0, 0.0), size(10.0, 10.0));
        assert!(!set.overlaps_any(&r));
        assert!(set.bounds().is_none());
        assert_eq!(set.covering_radius(point(0.0, 0.0)), 0.0);
    }

    #[test]
    fn bounds_track_the_union() {
        let mut set = PlacedRectangleSet::new();
        set.push(rect_centered_at(point(0.0, 0.0), size(10.0, 10.0)));
        set.push(rect_centered_at(point(20.0, 0.0), size(10.0, 10.0)));

        let b = set.bounds().expect("bounds after push");
        assert_eq!(b.min, point(-5.0, -5.0));
        assert_eq!(b.max, point(25.0, 5.0));
    }

    #[test]
    fn fast_reject_does_not_miss_overlaps() {
        let mut set = PlacedRectangleSet::new();
        set.push(rect_centered_at(point(0.0, 0.0), size(10.0, 10.0)));

        let far = rect_centered_at(point(100.0, 0.0), size(10.0, 10.0));
        let near = rect_centered_at(point(7.0, 0.0), size(10.0, 10.0));
        assert!(!set.overlaps_any(&far));
        assert!(set.overlaps_any(&near));
    }

    #[test]
    fn covering_radius_grows_with_placements() {
        let mut set = PlacedRectangleSet::new();
        let center = point(0.0, 0.0);

        set.push(rect_centered_at(center, size(10.0, 10.0)));
        let r1 = set.covering_radius(center);
        set.push(rect_centered_at(point(30.0, 0.0), size(10.0, 10.0)));
        let r2 = set.covering_radius(center);

        assert!(r1 > 0.0);
        assert!(r2 > r1, "covering radius must not shrink: {r1} -> {r2}");
    }
}
