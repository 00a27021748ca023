//! plot-viewport: interactive plot viewport engine.
//!
//! This crate converts pointer, wheel and keyboard events into zoom, pan and
//! rectangular-selection operations across one or more overlaid coordinate
//! axes, keeping screen pixels, a scaled drawing area and the logical data
//! axes consistent. Rendering, dataset construction and widget plumbing stay
//! with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{PlotViewport, PlotViewportConfig, ViewportSnapshot};
pub use error::{ViewportError, ViewportResult};
