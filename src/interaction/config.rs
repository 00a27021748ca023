use serde::{Deserialize, Serialize};

use crate::error::{ViewportError, ViewportResult};
use crate::interaction::input::Modifiers;

/// Magnitude mode for keyboard panning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftMode {
    /// One screen pixel's worth of axis units, recomputed per key press.
    Pixel,
    /// A fixed 1% of the current axis span.
    Percentual,
    /// A configured absolute amount of axis units per key press.
    Fixed,
}

/// Tuning for zoom, pan and rectangle-selection gestures.
///
/// Serializable so host applications can persist interaction setup alongside
/// their own preferences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Span multiplier applied on zoom-in; must be in `(0, 1]`.
    #[serde(default = "default_zoom_in_factor")]
    pub zoom_in_factor: f64,
    /// Span multiplier applied on zoom-out; must be `>= 1`.
    #[serde(default = "default_zoom_out_factor")]
    pub zoom_out_factor: f64,
    /// Minimum drag distance, in screen pixels, for a rectangle zoom to commit.
    #[serde(default = "default_zoom_trigger_distance_px")]
    pub zoom_trigger_distance_px: f64,
    /// Modifier keys that switch drag behavior from selection to panning.
    #[serde(default = "default_pan_modifier")]
    pub pan_modifier: Modifiers,
    #[serde(default = "default_shift_mode")]
    pub shift_mode: ShiftMode,
    /// Axis units per key press on domain axes when `shift_mode` is `Fixed`.
    #[serde(default = "default_fixed_shift_units")]
    pub fixed_domain_shift_units: f64,
    /// Axis units per key press on range axes when `shift_mode` is `Fixed`.
    #[serde(default = "default_fixed_shift_units")]
    pub fixed_range_shift_units: f64,
    /// Whether non-rectangle zoom centers on the last interaction point
    /// rather than the data-area midpoint.
    #[serde(default = "default_zoom_around_anchor")]
    pub zoom_around_anchor: bool,
    /// Wheel zoom capability, decided at construction.
    #[serde(default = "default_wheel_zoom_enabled")]
    pub wheel_zoom_enabled: bool,
}

fn default_zoom_in_factor() -> f64 {
    0.8
}

fn default_zoom_out_factor() -> f64 {
    1.25
}

fn default_zoom_trigger_distance_px() -> f64 {
    10.0
}

fn default_pan_modifier() -> Modifiers {
    Modifiers::CTRL
}

fn default_shift_mode() -> ShiftMode {
    ShiftMode::Pixel
}

fn default_fixed_shift_units() -> f64 {
    1.0
}

fn default_zoom_around_anchor() -> bool {
    true
}

fn default_wheel_zoom_enabled() -> bool {
    true
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            zoom_in_factor: default_zoom_in_factor(),
            zoom_out_factor: default_zoom_out_factor(),
            zoom_trigger_distance_px: default_zoom_trigger_distance_px(),
            pan_modifier: default_pan_modifier(),
            shift_mode: default_shift_mode(),
            fixed_domain_shift_units: default_fixed_shift_units(),
            fixed_range_shift_units: default_fixed_shift_units(),
            zoom_around_anchor: default_zoom_around_anchor(),
            wheel_zoom_enabled: default_wheel_zoom_enabled(),
        }
    }
}

impl InteractionConfig {
    #[must_use]
    pub fn with_zoom_factors(mut self, zoom_in: f64, zoom_out: f64) -> Self {
        self.zoom_in_factor = zoom_in;
        self.zoom_out_factor = zoom_out;
        self
    }

    #[must_use]
    pub fn with_zoom_trigger_distance_px(mut self, distance: f64) -> Self {
        self.zoom_trigger_distance_px = distance;
        self
    }

    #[must_use]
    pub fn with_pan_modifier(mut self, modifiers: Modifiers) -> Self {
        self.pan_modifier = modifiers;
        self
    }

    #[must_use]
    pub fn with_shift_mode(mut self, mode: ShiftMode) -> Self {
        self.shift_mode = mode;
        self
    }

    #[must_use]
    pub fn with_fixed_shift_units(mut self, domain_units: f64, range_units: f64) -> Self {
        self.fixed_domain_shift_units = domain_units;
        self.fixed_range_shift_units = range_units;
        self
    }

    #[must_use]
    pub fn with_zoom_around_anchor(mut self, enabled: bool) -> Self {
        self.zoom_around_anchor = enabled;
        self
    }

    #[must_use]
    pub fn with_wheel_zoom(mut self, enabled: bool) -> Self {
        self.wheel_zoom_enabled = enabled;
        self
    }

    pub fn validate(self) -> ViewportResult<Self> {
        if !self.zoom_in_factor.is_finite()
            || self.zoom_in_factor <= 0.0
            || self.zoom_in_factor > 1.0
        {
            return Err(ViewportError::InvalidConfig(
                "zoom-in factor must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.zoom_out_factor.is_finite() || self.zoom_out_factor < 1.0 {
            return Err(ViewportError::InvalidConfig(
                "zoom-out factor must be finite and >= 1".to_owned(),
            ));
        }
        if !self.zoom_trigger_distance_px.is_finite() || self.zoom_trigger_distance_px < 0.0 {
            return Err(ViewportError::InvalidConfig(
                "zoom trigger distance must be finite and >= 0".to_owned(),
            ));
        }
        if !self.fixed_domain_shift_units.is_finite()
            || !self.fixed_range_shift_units.is_finite()
            || self.fixed_domain_shift_units <= 0.0
            || self.fixed_range_shift_units <= 0.0
        {
            return Err(ViewportError::InvalidConfig(
                "fixed shift units must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionConfig, ShiftMode};

    #[test]
    fn default_config_validates() {
        let config = InteractionConfig::default().validate().expect("defaults");
        assert_eq!(config.zoom_in_factor, 0.8);
        assert_eq!(config.zoom_out_factor, 1.25);
        assert_eq!(config.shift_mode, ShiftMode::Pixel);
        assert!(config.zoom_around_anchor);
        assert!(config.wheel_zoom_enabled);
    }

    #[test]
    fn out_of_band_factors_are_rejected() {
        assert!(
            InteractionConfig::default()
                .with_zoom_factors(0.0, 1.25)
                .validate()
                .is_err()
        );
        assert!(
            InteractionConfig::default()
                .with_zoom_factors(1.5, 1.25)
                .validate()
                .is_err()
        );
        assert!(
            InteractionConfig::default()
                .with_zoom_factors(0.8, 0.9)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn json_round_trip_with_defaulted_fields() {
        let parsed: InteractionConfig =
            serde_json::from_str(r#"{"zoom_in_factor": 0.5}"#).expect("parse partial config");
        assert_eq!(parsed.zoom_in_factor, 0.5);
        assert_eq!(parsed.zoom_out_factor, 1.25);
        assert_eq!(parsed.zoom_trigger_distance_px, 10.0);
    }
}
