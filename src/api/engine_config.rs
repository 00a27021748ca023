use serde::{Deserialize, Serialize};

use crate::core::{AxisCapabilities, Insets, Orientation};
use crate::error::ViewportResult;
use crate::interaction::InteractionConfig;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load the viewport setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotViewportConfig {
    #[serde(default)]
    pub insets: Insets,
    #[serde(default = "default_min_draw_width")]
    pub min_draw_width: f64,
    #[serde(default = "default_min_draw_height")]
    pub min_draw_height: f64,
    #[serde(default = "default_max_draw_width")]
    pub max_draw_width: f64,
    #[serde(default = "default_max_draw_height")]
    pub max_draw_height: f64,
    #[serde(default = "default_orientation")]
    pub orientation: Orientation,
    #[serde(default)]
    pub capabilities: AxisCapabilities,
    #[serde(default)]
    pub interaction: InteractionConfig,
}

fn default_min_draw_width() -> f64 {
    300.0
}

fn default_min_draw_height() -> f64 {
    200.0
}

fn default_max_draw_width() -> f64 {
    1024.0
}

fn default_max_draw_height() -> f64 {
    768.0
}

fn default_orientation() -> Orientation {
    Orientation::Vertical
}

impl Default for PlotViewportConfig {
    fn default() -> Self {
        Self {
            insets: Insets::zero(),
            min_draw_width: default_min_draw_width(),
            min_draw_height: default_min_draw_height(),
            max_draw_width: default_max_draw_width(),
            max_draw_height: default_max_draw_height(),
            orientation: default_orientation(),
            capabilities: AxisCapabilities::default(),
            interaction: InteractionConfig::default(),
        }
    }
}

impl PlotViewportConfig {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub fn with_draw_size_bounds(
        mut self,
        min_width: f64,
        min_height: f64,
        max_width: f64,
        max_height: f64,
    ) -> Self {
        self.min_draw_width = min_width;
        self.min_draw_height = min_height;
        self.max_draw_width = max_width;
        self.max_draw_height = max_height;
        self
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: AxisCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, interaction: InteractionConfig) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn validate(self) -> ViewportResult<Self> {
        self.interaction.validate()?;
        Ok(self)
    }
}
