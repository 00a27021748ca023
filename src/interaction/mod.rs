pub mod broadcast;
pub mod config;
pub mod input;
pub mod pan;
pub mod selection;
pub mod zoom;

pub use broadcast::{ListenerToken, SelectionBroadcaster, SelectionListener};
pub use config::{InteractionConfig, ShiftMode};
pub use input::{ArrowKey, InputEvent, KeyEvent, Modifiers, PointerButton, PointerEvent, WheelEvent};
pub use pan::PanEngine;
pub use selection::{
    RectConstraint, Selection, SelectionEntry, SelectionOutcome, SelectionTracker,
};
pub use zoom::ZoomEngine;
