use serde::{Deserialize, Serialize};

use crate::error::{ViewportError, ViewportResult};

/// Mutable bounds for one logical axis.
///
/// `lower`/`upper` hold the current visible bounds. `auto_lower`/`auto_upper`
/// track the full observed data extent, the target of an auto-bounds restore.
/// The invariant `lower <= upper` holds at all times; equal bounds are legal
/// and every fractional computation against them stays finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    lower: f64,
    upper: f64,
    auto_lower: f64,
    auto_upper: f64,
}

impl AxisRange {
    /// Creates an axis with matching current and auto bounds.
    pub fn new(lower: f64, upper: f64) -> ViewportResult<Self> {
        let (lower, upper) = normalize_bounds(lower, upper)?;
        Ok(Self {
            lower,
            upper,
            auto_lower: lower,
            auto_upper: upper,
        })
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    #[must_use]
    pub fn auto_bounds(self) -> (f64, f64) {
        (self.auto_lower, self.auto_upper)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.lower == self.upper
    }

    /// Overrides the current bounds, normalizing order.
    ///
    /// Non-finite input is ignored without mutation.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) {
        let Ok((lower, upper)) = normalize_bounds(lower, upper) else {
            return;
        };
        self.lower = lower;
        self.upper = upper;
    }

    /// Overrides the full observed data extent used by auto-bounds restore.
    pub fn set_auto_bounds(&mut self, lower: f64, upper: f64) -> ViewportResult<()> {
        let (lower, upper) = normalize_bounds(lower, upper)?;
        self.auto_lower = lower;
        self.auto_upper = upper;
        Ok(())
    }

    /// Resets the current bounds to the full observed data extent.
    pub fn restore_auto_bounds(&mut self) {
        self.lower = self.auto_lower;
        self.upper = self.auto_upper;
    }

    /// Fractional position of `value` within the current bounds.
    ///
    /// Returns the neutral value `0.0` for a degenerate span, never NaN.
    #[must_use]
    pub fn fraction_of(self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            return 0.0;
        }
        (value - self.lower) / span
    }

    /// Axis value at a fractional position of the current bounds.
    #[must_use]
    pub fn value_at(self, fraction: f64) -> f64 {
        self.lower + self.span() * fraction
    }

    /// Shifts both bounds by the same signed delta.
    ///
    /// Non-finite deltas are ignored without mutation.
    pub fn shift_by(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.lower += delta;
        self.upper += delta;
    }

    /// Rescales the span by `factor`, keeping the axis value at `fraction`
    /// pinned at that same fractional position of the new bounds.
    ///
    /// Pinning the anchor (rather than recentering on it) makes a zoom by
    /// `factor` followed by a zoom by `1/factor` at the same anchor an exact
    /// inverse, for any anchor position.
    ///
    /// `factor < 1.0` zooms in, `factor > 1.0` zooms out. Non-positive or
    /// non-finite factors are ignored without mutation.
    pub fn zoom_around_fraction(&mut self, fraction: f64, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 || !fraction.is_finite() {
            return;
        }
        let anchor = self.value_at(fraction);
        let new_span = self.span() * factor;
        self.set_bounds(anchor - fraction * new_span, anchor + (1.0 - fraction) * new_span);
    }
}

fn normalize_bounds(lower: f64, upper: f64) -> ViewportResult<(f64, f64)> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(ViewportError::InvalidData(
            "axis bounds must be finite".to_owned(),
        ));
    }
    Ok((lower.min(upper), lower.max(upper)))
}
