use tracing::trace;

use crate::core::{AxisKind, AxisRegistry, Rect, ScreenAxis};
use crate::interaction::config::{InteractionConfig, ShiftMode};
use crate::interaction::input::{ArrowKey, Modifiers};

const KEYBOARD_SHIFT_MULTIPLIER: f64 = 10.0;
const PERCENTUAL_SHIFT_RATIO: f64 = 0.01;

/// Converts pointer drag distance and keyboard steps into axis-range shifts.
///
/// Drag direction convention: the plotted content follows the pointer, so a
/// rightward drag (`dx > 0`) decreases the bounds of axes mapped to screen X,
/// and a downward drag (`dy > 0`) increases the bounds of axes mapped to
/// screen Y (screen Y is inverted relative to data Y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEngine {
    shift_mode: ShiftMode,
    fixed_domain_shift_units: f64,
    fixed_range_shift_units: f64,
}

impl PanEngine {
    #[must_use]
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            shift_mode: config.shift_mode,
            fixed_domain_shift_units: config.fixed_domain_shift_units,
            fixed_range_shift_units: config.fixed_range_shift_units,
        }
    }

    #[must_use]
    pub fn shift_mode(self) -> ShiftMode {
        self.shift_mode
    }

    /// Shifts every pannable axis by the axis-unit equivalent of a pixel
    /// delta against the data-area extent.
    pub fn pan_by_screen_delta(
        self,
        registry: &mut AxisRegistry,
        dx: f64,
        dy: f64,
        data_area: Rect,
    ) -> bool {
        if !dx.is_finite() || !dy.is_finite() {
            return false;
        }

        let mut changed = false;
        for kind in AxisKind::BOTH {
            if !registry.is_pannable(kind) {
                continue;
            }
            let (pixel_delta, extent, sign) = match registry.orientation().screen_axis(kind) {
                ScreenAxis::X => (dx, data_area.width, -1.0),
                ScreenAxis::Y => (dy, data_area.height, 1.0),
            };
            if extent <= 0.0 || pixel_delta == 0.0 {
                continue;
            }
            for axis in registry.axes_mut(kind) {
                let delta = sign * resolve_axis_delta(pixel_delta, axis.span(), extent);
                if delta != 0.0 {
                    axis.shift_by(delta);
                    changed = true;
                }
            }
        }
        if changed {
            trace!(dx, dy, "pan by screen delta");
        }
        changed
    }

    /// Applies one keyboard pan step to every pannable axis mapped to the
    /// key's screen axis.
    ///
    /// Right/Down step toward higher screen coordinates; the Shift modifier
    /// multiplies the step by 10.
    pub fn keyboard_pan(
        self,
        registry: &mut AxisRegistry,
        key: ArrowKey,
        modifiers: Modifiers,
        data_area: Rect,
    ) -> bool {
        let (screen_axis, direction) = match key {
            ArrowKey::Left => (ScreenAxis::X, -1.0),
            ArrowKey::Right => (ScreenAxis::X, 1.0),
            ArrowKey::Up => (ScreenAxis::Y, 1.0),
            ArrowKey::Down => (ScreenAxis::Y, -1.0),
        };
        let multiplier = if modifiers.shift {
            KEYBOARD_SHIFT_MULTIPLIER
        } else {
            1.0
        };

        let mut changed = false;
        for kind in AxisKind::BOTH {
            if !registry.is_pannable(kind) {
                continue;
            }
            if registry.orientation().screen_axis(kind) != screen_axis {
                continue;
            }
            let extent = match screen_axis {
                ScreenAxis::X => data_area.width,
                ScreenAxis::Y => data_area.height,
            };
            let fixed_units = match kind {
                AxisKind::Domain => self.fixed_domain_shift_units,
                AxisKind::Range => self.fixed_range_shift_units,
            };
            for axis in registry.axes_mut(kind) {
                let step = match self.shift_mode {
                    ShiftMode::Pixel => {
                        if extent <= 0.0 {
                            continue;
                        }
                        axis.span() / extent
                    }
                    ShiftMode::Percentual => axis.span() * PERCENTUAL_SHIFT_RATIO,
                    ShiftMode::Fixed => fixed_units,
                };
                let delta = direction * step * multiplier;
                if delta != 0.0 {
                    axis.shift_by(delta);
                    changed = true;
                }
            }
        }
        if changed {
            trace!(?key, multiplier, "keyboard pan");
        }
        changed
    }
}

/// Axis-unit magnitude for a pixel delta: `pixel_delta * span / extent`.
pub(crate) fn resolve_axis_delta(pixel_delta: f64, axis_span: f64, area_extent: f64) -> f64 {
    pixel_delta * axis_span / area_extent
}
