#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;
pub type Box2 = euclid::Box2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

pub fn size(width: f64, height: f64) -> Size {
    euclid::size2(width, height)
}

/// Rectangle with the given size whose center sits at `center`.
pub fn rect_centered_at(center: Point, size: Size) -> Rect {
    Rect::new(
        point(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}

/// Strict positive-area intersection.
///
/// Extents must overlap in both dimensions as open intervals: rectangles that
/// merely touch along an edge or corner do not overlap, and a rectangle with a
/// zero (or negative) width or height overlaps nothing.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    if a.size.width <= 0.0 || a.size.height <= 0.0 {
        return false;
    }
    if b.size.width <= 0.0 || b.size.height <= 0.0 {
        return false;
    }
    a.min_x() < b.max_x() && b.min_x() < a.max_x() && a.min_y() < b.max_y() && b.min_y() < a.max_y()
}
