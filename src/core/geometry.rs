use serde::{Deserialize, Serialize};

/// A point in either screen or logical drawing coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Margins around the drawing surface, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    #[must_use]
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::zero()
    }
}

/// An axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a normalized rectangle from two opposite corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }

    /// A rectangle with no extent along at least one axis.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Clips this rectangle to the bounds of `other`.
    ///
    /// A disjoint pair yields a zero-extent rectangle pinned at the
    /// nearest edge of `other`, never a negative extent.
    #[must_use]
    pub fn clip_to(self, other: Rect) -> Rect {
        let x0 = self.x.clamp(other.x, other.max_x());
        let y0 = self.y.clamp(other.y, other.max_y());
        let x1 = self.max_x().clamp(other.x, other.max_x());
        let y1 = self.max_y().clamp(other.y, other.max_y());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Clamps a point into this rectangle's bounds.
    #[must_use]
    pub fn clip_point(self, point: Point) -> Point {
        Point::new(
            point.x.clamp(self.x, self.max_x()),
            point.y.clamp(self.y, self.max_y()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect};

    #[test]
    fn from_corners_normalizes_orientation() {
        let rect = Rect::from_corners(Point::new(10.0, 20.0), Point::new(4.0, 2.0));
        assert_eq!(rect, Rect::new(4.0, 2.0, 6.0, 18.0));
    }

    #[test]
    fn clip_to_bounds_inner_rect_unchanged() {
        let area = Rect::new(0.0, 0.0, 100.0, 50.0);
        let inner = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(inner.clip_to(area), inner);
    }

    #[test]
    fn clip_to_trims_overhanging_edges() {
        let area = Rect::new(0.0, 0.0, 100.0, 50.0);
        let wild = Rect::new(-10.0, 40.0, 200.0, 30.0);
        assert_eq!(wild.clip_to(area), Rect::new(0.0, 40.0, 100.0, 10.0));
    }

    #[test]
    fn clip_to_disjoint_rect_collapses_to_edge() {
        let area = Rect::new(0.0, 0.0, 100.0, 50.0);
        let outside = Rect::new(200.0, 200.0, 10.0, 10.0);
        let clipped = outside.clip_to(area);
        assert_eq!(clipped.width, 0.0);
        assert_eq!(clipped.height, 0.0);
        assert!(area.contains(Point::new(clipped.x, clipped.y)));
    }
}
