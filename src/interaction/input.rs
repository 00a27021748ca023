use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Keyboard modifier flags attached to an input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
        alt: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        shift: true,
        alt: false,
    };

    /// Whether every modifier required by `other` is held in `self`.
    #[must_use]
    pub fn contains(self, other: Modifiers) -> bool {
        (!other.ctrl || self.ctrl) && (!other.shift || self.shift) && (!other.alt || self.alt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub point: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    #[must_use]
    pub fn primary(point: Point) -> Self {
        Self {
            point,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Wheel input; `delta > 0.0` is wheel-up and zooms in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub point: Point,
    pub delta: f64,
    pub modifiers: Modifiers,
}

impl WheelEvent {
    #[must_use]
    pub fn new(point: Point, delta: f64) -> Self {
        Self {
            point,
            delta,
            modifiers: Modifiers::NONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrowKey {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: ArrowKey,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    #[must_use]
    pub fn new(key: ArrowKey) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// The originating input event handed to selection listeners.
///
/// Absent for programmatic operations such as an auto-bounds restore.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Wheel(WheelEvent),
    Key(KeyEvent),
}

#[cfg(test)]
mod tests {
    use super::Modifiers;

    #[test]
    fn contains_requires_each_flag_of_the_pattern() {
        let held = Modifiers {
            ctrl: true,
            shift: true,
            alt: false,
        };
        assert!(held.contains(Modifiers::CTRL));
        assert!(held.contains(Modifiers::SHIFT));
        assert!(held.contains(Modifiers::NONE));
        assert!(!Modifiers::NONE.contains(Modifiers::CTRL));
        assert!(!held.contains(Modifiers {
            ctrl: true,
            shift: false,
            alt: true,
        }));
    }
}
