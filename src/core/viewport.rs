use serde::{Deserialize, Serialize};

use crate::core::geometry::{Insets, Point, Rect};
use crate::error::{ViewportError, ViewportResult};

/// Screen-to-logical mapping for the drawing surface.
///
/// The logical drawing area is pinned between a minimum and maximum size.
/// When the host surface falls outside that band the logical size is pinned
/// to the nearer bound and the result is rendered scaled, so `scale_x` and
/// `scale_y` stay strictly positive and default to `1.0` inside the band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    insets: Insets,
    draw_width: f64,
    draw_height: f64,
    min_draw_width: f64,
    min_draw_height: f64,
    max_draw_width: f64,
    max_draw_height: f64,
    scale_x: f64,
    scale_y: f64,
}

impl Viewport {
    pub fn new(
        insets: Insets,
        min_draw_width: f64,
        min_draw_height: f64,
        max_draw_width: f64,
        max_draw_height: f64,
    ) -> ViewportResult<Self> {
        for (label, value) in [
            ("min draw width", min_draw_width),
            ("min draw height", min_draw_height),
            ("max draw width", max_draw_width),
            ("max draw height", max_draw_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ViewportError::InvalidGeometry(format!(
                    "{label} must be finite and > 0, got {value}"
                )));
            }
        }
        if min_draw_width > max_draw_width || min_draw_height > max_draw_height {
            return Err(ViewportError::InvalidGeometry(
                "minimum draw size must not exceed maximum draw size".to_owned(),
            ));
        }

        Ok(Self {
            insets,
            draw_width: min_draw_width,
            draw_height: min_draw_height,
            min_draw_width,
            min_draw_height,
            max_draw_width,
            max_draw_height,
            scale_x: 1.0,
            scale_y: 1.0,
        })
    }

    /// Recomputes the logical draw size and scale factors for a new host
    /// surface size.
    ///
    /// Non-positive or non-finite available space is ignored without
    /// mutation, so the scale factors never degenerate.
    pub fn on_resize(&mut self, available_width: f64, available_height: f64) {
        let width = available_width - self.insets.horizontal();
        let height = available_height - self.insets.vertical();
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }

        (self.draw_width, self.scale_x) = pin_extent(width, self.min_draw_width, self.max_draw_width);
        (self.draw_height, self.scale_y) =
            pin_extent(height, self.min_draw_height, self.max_draw_height);
    }

    #[must_use]
    pub fn insets(self) -> Insets {
        self.insets
    }

    #[must_use]
    pub fn draw_size(self) -> (f64, f64) {
        (self.draw_width, self.draw_height)
    }

    #[must_use]
    pub fn scale_x(self) -> f64 {
        self.scale_x
    }

    #[must_use]
    pub fn scale_y(self) -> f64 {
        self.scale_y
    }

    /// Maps a screen point into the logical drawing area.
    #[must_use]
    pub fn screen_to_data(self, point: Point) -> Point {
        Point::new(
            (point.x - self.insets.left) / self.scale_x,
            (point.y - self.insets.top) / self.scale_y,
        )
    }

    /// Maps a logical drawing-area point onto the screen.
    #[must_use]
    pub fn data_to_screen(self, point: Point) -> Point {
        Point::new(
            self.insets.left + point.x * self.scale_x,
            self.insets.top + point.y * self.scale_y,
        )
    }

    /// Expresses a logical sub-area rectangle in screen space.
    #[must_use]
    pub fn scale_rect(self, rect: Rect) -> Rect {
        Rect::new(
            self.insets.left + rect.x * self.scale_x,
            self.insets.top + rect.y * self.scale_y,
            rect.width * self.scale_x,
            rect.height * self.scale_y,
        )
    }

    /// The full logical drawing area expressed in screen space.
    #[must_use]
    pub fn screen_draw_area(self) -> Rect {
        self.scale_rect(Rect::new(0.0, 0.0, self.draw_width, self.draw_height))
    }

    /// Resolves which logical sub-area a screen point falls in.
    ///
    /// Returns the index of the first containing sub-area, or `None` when the
    /// point is outside all of them; callers must treat `None` as "no active
    /// region" and not guess.
    #[must_use]
    pub fn sub_area_at(self, point: Point, sub_areas: &[Rect]) -> Option<usize> {
        let data_point = self.screen_to_data(point);
        sub_areas.iter().position(|area| area.contains(data_point))
    }
}

fn pin_extent(available: f64, min: f64, max: f64) -> (f64, f64) {
    if available < min {
        (min, available / min)
    } else if available > max {
        (max, available / max)
    } else {
        (available, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;
    use crate::core::geometry::{Insets, Point, Rect};

    fn viewport() -> Viewport {
        Viewport::new(Insets::new(4.0, 8.0, 4.0, 8.0), 300.0, 200.0, 1024.0, 768.0)
            .expect("valid viewport")
    }

    #[test]
    fn resize_inside_band_keeps_unit_scale() {
        let mut vp = viewport();
        vp.on_resize(516.0, 408.0);
        assert_eq!(vp.draw_size(), (500.0, 400.0));
        assert_eq!(vp.scale_x(), 1.0);
        assert_eq!(vp.scale_y(), 1.0);
    }

    #[test]
    fn resize_below_minimum_pins_and_shrinks_scale() {
        let mut vp = viewport();
        vp.on_resize(166.0, 108.0);
        assert_eq!(vp.draw_size(), (300.0, 200.0));
        assert!((vp.scale_x() - 0.5).abs() <= 1e-12);
        assert!((vp.scale_y() - 0.5).abs() <= 1e-12);
    }

    #[test]
    fn resize_above_maximum_pins_and_grows_scale() {
        let mut vp = viewport();
        vp.on_resize(2064.0, 1544.0);
        assert_eq!(vp.draw_size(), (1024.0, 768.0));
        assert!((vp.scale_x() - 2.0).abs() <= 1e-12);
        assert!((vp.scale_y() - 2.0).abs() <= 1e-12);
    }

    #[test]
    fn screen_data_round_trip() {
        let mut vp = viewport();
        vp.on_resize(166.0, 108.0);
        let original = Point::new(120.0, 90.0);
        let data = vp.screen_to_data(original);
        let back = vp.data_to_screen(data);
        assert!((back.x - original.x).abs() <= 1e-9);
        assert!((back.y - original.y).abs() <= 1e-9);
    }

    #[test]
    fn degenerate_resize_is_ignored() {
        let mut vp = viewport();
        vp.on_resize(516.0, 408.0);
        vp.on_resize(0.0, 408.0);
        vp.on_resize(f64::NAN, f64::NAN);
        assert_eq!(vp.draw_size(), (500.0, 400.0));
        assert!(vp.scale_x() > 0.0);
    }

    #[test]
    fn sub_area_lookup_reports_no_active_region() {
        let vp = viewport();
        let areas = vec![
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(150.0, 0.0, 100.0, 100.0),
        ];
        let inside_second = Point::new(8.0 + 160.0, 4.0 + 50.0);
        assert_eq!(vp.sub_area_at(inside_second, &areas), Some(1));
        let in_gap = Point::new(8.0 + 120.0, 4.0 + 50.0);
        assert_eq!(vp.sub_area_at(in_gap, &areas), None);
    }
}
