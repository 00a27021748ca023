pub mod axis;
pub mod geometry;
pub mod registry;
pub mod viewport;

pub use axis::AxisRange;
pub use geometry::{Insets, Point, Rect};
pub use registry::{
    AxisCapabilities, AxisKind, AxisNameResolver, AxisNames, AxisRegistry, Orientation,
    ScreenAxis, StaticNameResolver,
};
pub use viewport::Viewport;
