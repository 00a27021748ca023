mod engine;
mod engine_config;
mod snapshot;

pub use engine::PlotViewport;
pub use engine_config::PlotViewportConfig;
pub use snapshot::{AxisRangeSnapshot, VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1, ViewportSnapshot};
