use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisKind, AxisNameResolver, AxisRegistry, Point, Rect};

/// One committed axis-name → range pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub axis_name: String,
    pub lower: f64,
    pub upper: f64,
}

/// The committed result of a zoom, pan or rectangle-select gesture.
///
/// Built fresh on every committed operation by iterating all domain axes and
/// then all range axes, skipping axes whose resolver yields no names; one
/// entry per resolved name. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    #[must_use]
    pub fn from_registry(registry: &AxisRegistry, resolver: &dyn AxisNameResolver) -> Self {
        let mut entries = Vec::new();
        for kind in AxisKind::BOTH {
            for (index, axis) in registry.axes(kind).iter().enumerate() {
                let names = match kind {
                    AxisKind::Domain => resolver.domain_axis_names(index),
                    AxisKind::Range => resolver.range_axis_names(index),
                };
                let (lower, upper) = axis.bounds();
                for axis_name in names {
                    entries.push(SelectionEntry {
                        axis_name,
                        lower,
                        upper,
                    });
                }
            }
        }
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which screen axes a candidate rectangle may extend along.
///
/// When only one axis kind is zoomable for the current orientation, the
/// rectangle is pinned to the full data-area extent on the other axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectConstraint {
    Free,
    HorizontalOnly,
    VerticalOnly,
}

/// Resolution of a released selection gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionOutcome {
    /// Drag distance stayed under the trigger; nothing may be mutated.
    Discarded,
    /// The clipped candidate rectangle to hand to rectangle zoom.
    Committed(Rect),
    /// Release landed on the negative side of the press along a constrained
    /// axis; the full data range is restored instead of a negative zoom.
    RestoreAutoBounds,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pressed,
    Dragging,
}

/// Turns a pointer-down/drag/up sequence into a committed screen rectangle.
///
/// The candidate rectangle is clipped to the data area at every step, so it
/// never extends past the plotted region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionTracker {
    phase: Phase,
    anchor: Point,
    candidate: Rect,
    trigger_distance_px: f64,
}

impl SelectionTracker {
    #[must_use]
    pub fn new(trigger_distance_px: f64) -> Self {
        Self {
            phase: Phase::Idle,
            anchor: Point::new(0.0, 0.0),
            candidate: Rect::new(0.0, 0.0, 0.0, 0.0),
            trigger_distance_px,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// The current candidate rectangle, present only while dragging.
    #[must_use]
    pub fn candidate(&self) -> Option<Rect> {
        match self.phase {
            Phase::Dragging => Some(self.candidate),
            Phase::Idle | Phase::Pressed => None,
        }
    }

    /// Starts a gesture, clipping the anchor into the data area when the
    /// press lands on the axis labels or outside margin.
    ///
    /// A gesture already in progress is discarded first.
    pub fn begin(&mut self, press: Point, data_area: Rect) {
        if self.phase != Phase::Idle {
            debug!("selection gesture interrupted by new pointer-down");
        }
        self.anchor = data_area.clip_point(press);
        self.candidate = Rect::new(self.anchor.x, self.anchor.y, 0.0, 0.0);
        self.phase = Phase::Pressed;
    }

    /// Updates the candidate rectangle for a drag position.
    ///
    /// Returns the clipped candidate, or `None` when no gesture is active.
    pub fn drag(
        &mut self,
        point: Point,
        data_area: Rect,
        constraint: RectConstraint,
    ) -> Option<Rect> {
        match self.phase {
            Phase::Idle => return None,
            Phase::Pressed | Phase::Dragging => {}
        }
        self.candidate = candidate_rect(self.anchor, point, data_area, constraint);
        self.phase = Phase::Dragging;
        Some(self.candidate)
    }

    /// Ends the gesture, resolving it to commit, auto-restore or discard.
    ///
    /// `horizontal_zoomable`/`vertical_zoomable` say which screen axes count
    /// for the trigger-distance and negative-direction checks.
    pub fn release(
        &mut self,
        point: Point,
        data_area: Rect,
        constraint: RectConstraint,
        horizontal_zoomable: bool,
        vertical_zoomable: bool,
    ) -> SelectionOutcome {
        if self.phase == Phase::Idle {
            return SelectionOutcome::Discarded;
        }
        let anchor = self.anchor;
        let candidate = candidate_rect(anchor, point, data_area, constraint);
        self.phase = Phase::Idle;

        let horizontal_trigger =
            horizontal_zoomable && (point.x - anchor.x).abs() >= self.trigger_distance_px;
        let vertical_trigger =
            vertical_zoomable && (point.y - anchor.y).abs() >= self.trigger_distance_px;
        if !horizontal_trigger && !vertical_trigger {
            debug!("selection discarded below trigger distance");
            return SelectionOutcome::Discarded;
        }

        let negative_horizontal = horizontal_zoomable && point.x < anchor.x;
        let negative_vertical = vertical_zoomable && point.y < anchor.y;
        if negative_horizontal || negative_vertical {
            return SelectionOutcome::RestoreAutoBounds;
        }

        SelectionOutcome::Committed(candidate)
    }

    /// Drops any gesture in progress without resolving it.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }
}

fn candidate_rect(
    anchor: Point,
    point: Point,
    data_area: Rect,
    constraint: RectConstraint,
) -> Rect {
    let free = Rect::from_corners(anchor, point);
    let constrained = match constraint {
        RectConstraint::Free => free,
        RectConstraint::HorizontalOnly => {
            Rect::new(free.x, data_area.y, free.width, data_area.height)
        }
        RectConstraint::VerticalOnly => {
            Rect::new(data_area.x, free.y, data_area.width, free.height)
        }
    };
    constrained.clip_to(data_area)
}
