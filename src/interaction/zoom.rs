use tracing::debug;

use crate::core::{AxisKind, AxisRegistry, Point, Rect, ScreenAxis};
use crate::interaction::config::InteractionConfig;

/// Computes new axis ranges for anchor-centered and rectangle zoom.
///
/// The engine never notifies anyone; the facade owns broadcast batching.
/// Every public operation reports whether any axis changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomEngine {
    zoom_in_factor: f64,
    zoom_out_factor: f64,
}

impl ZoomEngine {
    #[must_use]
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            zoom_in_factor: config.zoom_in_factor,
            zoom_out_factor: config.zoom_out_factor,
        }
    }

    #[must_use]
    pub fn zoom_in_factor(self) -> f64 {
        self.zoom_in_factor
    }

    #[must_use]
    pub fn zoom_out_factor(self) -> f64 {
        self.zoom_out_factor
    }

    /// Rescales every axis of `kind` around the axis value under
    /// `screen_point`, multiplying each span by `factor`.
    ///
    /// Domain and range axes are scaled independently, so anisotropic plots
    /// zoom correctly per axis. No-op for a non-zoomable kind, a degenerate
    /// data area, or a non-positive factor.
    pub fn zoom_around_point(
        self,
        registry: &mut AxisRegistry,
        screen_point: Point,
        factor: f64,
        kind: AxisKind,
        data_area: Rect,
    ) -> bool {
        if !registry.is_zoomable(kind) {
            return false;
        }
        let screen_axis = registry.orientation().screen_axis(kind);
        let Some(fraction) = anchor_fraction(screen_point, screen_axis, data_area) else {
            return false;
        };

        let mut changed = false;
        for axis in registry.axes_mut(kind) {
            let before = axis.bounds();
            axis.zoom_around_fraction(fraction, factor);
            changed |= axis.bounds() != before;
        }
        if changed {
            debug!(?kind, factor, fraction, "zoom around point");
        }
        changed
    }

    /// Applies `zoom_around_point` to both axis kinds with the same factor,
    /// honoring the per-kind zoomability flags.
    ///
    /// `anchor` is the screen anchor, or `None` to center on the data-area
    /// midpoint.
    pub fn zoom_around_center(
        self,
        registry: &mut AxisRegistry,
        anchor: Option<Point>,
        factor: f64,
        data_area: Rect,
    ) -> bool {
        let anchor = anchor.unwrap_or_else(|| data_area.center());
        let mut changed = false;
        for kind in AxisKind::BOTH {
            changed |= self.zoom_around_point(registry, anchor, factor, kind, data_area);
        }
        changed
    }

    pub fn zoom_in(
        self,
        registry: &mut AxisRegistry,
        anchor: Option<Point>,
        data_area: Rect,
    ) -> bool {
        self.zoom_around_center(registry, anchor, self.zoom_in_factor, data_area)
    }

    pub fn zoom_out(
        self,
        registry: &mut AxisRegistry,
        anchor: Option<Point>,
        data_area: Rect,
    ) -> bool {
        self.zoom_around_center(registry, anchor, self.zoom_out_factor, data_area)
    }

    /// Zooms every zoomable axis to the sub-range selected by `screen_rect`.
    ///
    /// Fractional bounds are measured against the data area, with vertical
    /// fractions taken from the data-area bottom since screen Y grows
    /// downward. Degenerate rectangles are rejected without mutation.
    pub fn zoom_to_rectangle(
        self,
        registry: &mut AxisRegistry,
        screen_rect: Rect,
        data_area: Rect,
    ) -> bool {
        if screen_rect.is_degenerate() || data_area.is_degenerate() {
            return false;
        }

        let h = horizontal_fractions(screen_rect, data_area);
        let v = vertical_fractions(screen_rect, data_area);

        let mut changed = false;
        for kind in AxisKind::BOTH {
            if !registry.is_zoomable(kind) {
                continue;
            }
            let (frac_lower, frac_upper) = match registry.orientation().screen_axis(kind) {
                ScreenAxis::X => h,
                ScreenAxis::Y => v,
            };
            for axis in registry.axes_mut(kind) {
                let before = axis.bounds();
                let lower = axis.value_at(frac_lower);
                let upper = axis.value_at(frac_upper);
                axis.set_bounds(lower, upper);
                changed |= axis.bounds() != before;
            }
        }
        if changed {
            debug!(?screen_rect, "zoom to rectangle");
        }
        changed
    }
}

/// Fractional anchor position of a screen coordinate within the data area,
/// measured from the bottom for the vertical screen axis.
///
/// Returns `None` when the data area has no extent along the relevant axis.
fn anchor_fraction(point: Point, screen_axis: ScreenAxis, data_area: Rect) -> Option<f64> {
    match screen_axis {
        ScreenAxis::X => {
            if data_area.width <= 0.0 {
                return None;
            }
            Some((point.x - data_area.x) / data_area.width)
        }
        ScreenAxis::Y => {
            if data_area.height <= 0.0 {
                return None;
            }
            Some((data_area.max_y() - point.y) / data_area.height)
        }
    }
}

fn horizontal_fractions(rect: Rect, data_area: Rect) -> (f64, f64) {
    (
        (rect.x - data_area.x) / data_area.width,
        (rect.max_x() - data_area.x) / data_area.width,
    )
}

fn vertical_fractions(rect: Rect, data_area: Rect) -> (f64, f64) {
    (
        (data_area.max_y() - rect.max_y()) / data_area.height,
        (data_area.max_y() - rect.y) / data_area.height,
    )
}
