use tracing::{debug, warn};

use crate::core::{
    AxisKind, AxisNameResolver, AxisRange, AxisRegistry, Point, Rect, ScreenAxis, Viewport,
};
use crate::error::{ViewportError, ViewportResult};
use crate::interaction::{
    InputEvent, InteractionConfig, KeyEvent, ListenerToken, PanEngine, PointerEvent,
    RectConstraint, Selection, SelectionBroadcaster, SelectionListener, SelectionOutcome,
    SelectionTracker, WheelEvent, ZoomEngine,
};

use super::PlotViewportConfig;

/// Axis counts captured when a gesture starts; a mismatch later means the
/// axis set changed mid-gesture and the gesture must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AxisCounts {
    domain: usize,
    range: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Pan {
        last_point: Point,
        axis_counts: AxisCounts,
    },
    Select {
        axis_counts: AxisCounts,
    },
}

/// The interactive plot viewport engine.
///
/// Consumes abstract pointer/wheel/key events and resolves them into zoom,
/// pan and rectangle-selection operations over the axis registry. Every
/// committed operation broadcasts exactly one Selection; hosts poll
/// `take_redraw_requests` for overlay/visual-only updates.
pub struct PlotViewport {
    viewport: Viewport,
    registry: AxisRegistry,
    interaction: InteractionConfig,
    zoom: ZoomEngine,
    pan: PanEngine,
    tracker: SelectionTracker,
    broadcaster: SelectionBroadcaster,
    resolver: Box<dyn AxisNameResolver>,
    gesture: Option<Gesture>,
    anchor: Option<Point>,
    explicit_data_area: Option<Rect>,
}

impl PlotViewport {
    pub fn new(
        config: PlotViewportConfig,
        resolver: Box<dyn AxisNameResolver>,
    ) -> ViewportResult<Self> {
        let config = config.validate()?;
        let viewport = Viewport::new(
            config.insets,
            config.min_draw_width,
            config.min_draw_height,
            config.max_draw_width,
            config.max_draw_height,
        )?;
        let registry = AxisRegistry::new(config.orientation, config.capabilities);
        let zoom = ZoomEngine::new(&config.interaction);
        let pan = PanEngine::new(&config.interaction);
        let tracker = SelectionTracker::new(config.interaction.zoom_trigger_distance_px);

        Ok(Self {
            viewport,
            registry,
            interaction: config.interaction,
            zoom,
            pan,
            tracker,
            broadcaster: SelectionBroadcaster::new(),
            resolver,
            gesture: None,
            anchor: None,
            explicit_data_area: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn registry(&self) -> &AxisRegistry {
        &self.registry
    }

    pub(super) fn registry_mut(&mut self) -> &mut AxisRegistry {
        &mut self.registry
    }

    #[must_use]
    pub fn interaction_config(&self) -> InteractionConfig {
        self.interaction
    }

    /// Attaches a domain axis; its index is stable for the engine's lifetime.
    pub fn push_domain_axis(&mut self, lower: f64, upper: f64) -> ViewportResult<usize> {
        self.registry.push_domain_axis(lower, upper)
    }

    /// Attaches a range axis; its index is stable for the engine's lifetime.
    pub fn push_range_axis(&mut self, lower: f64, upper: f64) -> ViewportResult<usize> {
        self.registry.push_range_axis(lower, upper)
    }

    #[must_use]
    pub fn domain_axis(&self, index: usize) -> Option<&AxisRange> {
        self.registry.domain_axis(index)
    }

    #[must_use]
    pub fn range_axis(&self, index: usize) -> Option<&AxisRange> {
        self.registry.range_axis(index)
    }

    /// Updates the full observed data extent of one domain axis, e.g. after
    /// the host recomputes its dataset bounds.
    pub fn set_domain_auto_bounds(
        &mut self,
        index: usize,
        lower: f64,
        upper: f64,
    ) -> ViewportResult<()> {
        match self.registry.domain_axis_mut(index) {
            Some(axis) => axis.set_auto_bounds(lower, upper),
            None => Err(ViewportError::InvalidData(format!(
                "no domain axis at index {index}"
            ))),
        }
    }

    /// Updates the full observed data extent of one range axis.
    pub fn set_range_auto_bounds(
        &mut self,
        index: usize,
        lower: f64,
        upper: f64,
    ) -> ViewportResult<()> {
        match self.registry.range_axis_mut(index) {
            Some(axis) => axis.set_auto_bounds(lower, upper),
            None => Err(ViewportError::InvalidData(format!(
                "no range axis at index {index}"
            ))),
        }
    }

    /// Recomputes the viewport scaling for a new host surface size.
    pub fn on_resize(&mut self, available_width: f64, available_height: f64) {
        self.viewport.on_resize(available_width, available_height);
    }

    /// Overrides the screen-space data area after the host's layout pass.
    ///
    /// Without an override the full scaled drawing area is used.
    pub fn set_data_area(&mut self, area: Rect) {
        self.explicit_data_area = Some(area);
    }

    #[must_use]
    pub fn data_area(&self) -> Rect {
        self.explicit_data_area
            .unwrap_or_else(|| self.viewport.screen_draw_area())
    }

    pub fn add_selection_listener(&mut self, listener: Box<dyn SelectionListener>) -> ListenerToken {
        self.broadcaster.register(listener)
    }

    pub fn remove_selection_listener(&mut self, token: ListenerToken) -> bool {
        self.broadcaster.unregister(token)
    }

    #[must_use]
    pub fn selection_listener_count(&self) -> usize {
        self.broadcaster.listener_count()
    }

    /// Drains redraw requests accumulated since the last poll.
    pub fn take_redraw_requests(&mut self) -> u32 {
        self.broadcaster.take_redraw_requests()
    }

    /// The in-progress selection rectangle, for the host's overlay paint.
    #[must_use]
    pub fn selection_candidate(&self) -> Option<Rect> {
        self.tracker.candidate()
    }

    /// Routes a pointer-down to panning or selection per the pan modifier.
    ///
    /// A gesture already in progress is discarded first: a new pointer-down
    /// always interrupts.
    pub fn pointer_pressed(&mut self, event: PointerEvent) {
        if self.gesture.is_some() || self.tracker.is_active() {
            debug!("pointer-down interrupts in-progress gesture");
            self.tracker.cancel();
            self.gesture = None;
        }
        self.anchor = Some(event.point);
        let area = self.data_area();
        let axis_counts = self.axis_counts();

        if event.modifiers.contains(self.interaction.pan_modifier) {
            // Pan requires the press to land inside the data area.
            if area.contains(event.point) && self.any_pannable() {
                self.gesture = Some(Gesture::Pan {
                    last_point: event.point,
                    axis_counts,
                });
            }
            return;
        }

        if self.rect_constraint().is_some() {
            self.tracker.begin(event.point, area);
            self.gesture = Some(Gesture::Select { axis_counts });
        }
    }

    /// Routes a drag event to the gesture that owns the pointer.
    ///
    /// Pan deltas are incremental from the previous pointer position, so
    /// successive small deltas accumulate exactly once each.
    pub fn pointer_dragged(&mut self, event: PointerEvent) {
        let area = self.data_area();
        match self.gesture {
            Some(Gesture::Pan {
                last_point,
                axis_counts,
            }) => {
                if !self.check_gesture_consistency(axis_counts) {
                    return;
                }
                let dx = event.point.x - last_point.x;
                let dy = event.point.y - last_point.y;
                let changed = self.pan.pan_by_screen_delta(&mut self.registry, dx, dy, area);
                self.gesture = Some(Gesture::Pan {
                    last_point: event.point,
                    axis_counts,
                });
                self.anchor = Some(event.point);
                if changed {
                    self.broadcast(Some(InputEvent::Pointer(event)));
                }
            }
            Some(Gesture::Select { axis_counts }) => {
                if !self.check_gesture_consistency(axis_counts) {
                    return;
                }
                let Some(constraint) = self.rect_constraint() else {
                    return;
                };
                if self.tracker.drag(event.point, area, constraint).is_some() {
                    // Overlay update only; no axis mutation until release.
                    self.broadcaster.request_redraw();
                }
            }
            None => {}
        }
    }

    /// Ends the gesture that owns the pointer.
    ///
    /// A committed selection becomes a rectangle zoom plus one broadcast; a
    /// negative-direction release restores auto bounds; anything else is
    /// discarded without axis mutation.
    pub fn pointer_released(&mut self, event: PointerEvent) {
        let area = self.data_area();
        match self.gesture.take() {
            Some(Gesture::Pan { .. }) => {
                // Each drag step already broadcast its mutation.
            }
            Some(Gesture::Select { axis_counts }) => {
                if !self.check_gesture_consistency(axis_counts) {
                    return;
                }
                let Some(constraint) = self.rect_constraint() else {
                    self.tracker.cancel();
                    return;
                };
                let outcome = self.tracker.release(
                    event.point,
                    area,
                    constraint,
                    self.screen_axis_zoomable(ScreenAxis::X),
                    self.screen_axis_zoomable(ScreenAxis::Y),
                );
                match outcome {
                    SelectionOutcome::Committed(rect) => {
                        if self.zoom.zoom_to_rectangle(&mut self.registry, rect, area) {
                            self.broadcast(Some(InputEvent::Pointer(event)));
                        } else {
                            self.broadcaster.request_redraw();
                        }
                    }
                    SelectionOutcome::RestoreAutoBounds => {
                        self.registry.restore_auto_bounds();
                        self.broadcast(Some(InputEvent::Pointer(event)));
                    }
                    SelectionOutcome::Discarded => {
                        // Clear the rubber band without touching any axis.
                        self.broadcaster.request_redraw();
                    }
                }
            }
            None => {}
        }
    }

    /// Anchor-centered wheel zoom; positive delta zooms in.
    ///
    /// No-op when wheel support is disabled or the pointer is outside every
    /// data region.
    pub fn wheel(&mut self, event: WheelEvent) {
        if !self.interaction.wheel_zoom_enabled {
            return;
        }
        let area = self.data_area();
        if !area.contains(event.point) {
            return;
        }
        self.anchor = Some(event.point);
        let factor = if event.delta > 0.0 {
            self.zoom.zoom_in_factor()
        } else if event.delta < 0.0 {
            self.zoom.zoom_out_factor()
        } else {
            return;
        };
        let anchor = self
            .interaction
            .zoom_around_anchor
            .then_some(event.point);
        let changed = self
            .zoom
            .zoom_around_center(&mut self.registry, anchor, factor, area);
        if changed {
            self.broadcast(Some(InputEvent::Wheel(event)));
        }
    }

    /// Keyboard panning; the Shift modifier multiplies the step by 10.
    pub fn key_pressed(&mut self, event: KeyEvent) {
        let area = self.data_area();
        let changed = self
            .pan
            .keyboard_pan(&mut self.registry, event.key, event.modifiers, area);
        if changed {
            self.broadcast(Some(InputEvent::Key(event)));
        }
    }

    /// Programmatic zoom-in around the last interaction point (or the
    /// data-area midpoint when anchor zoom is off).
    pub fn zoom_in(&mut self) {
        self.zoom_programmatic(self.zoom.zoom_in_factor());
    }

    /// Programmatic zoom-out, same anchoring rules as `zoom_in`.
    pub fn zoom_out(&mut self) {
        self.zoom_programmatic(self.zoom.zoom_out_factor());
    }

    /// Programmatic zoom by an arbitrary span factor around a screen point.
    pub fn zoom_around(&mut self, point: Point, factor: f64) {
        let area = self.data_area();
        let changed = self
            .zoom
            .zoom_around_center(&mut self.registry, Some(point), factor, area);
        self.anchor = Some(point);
        if changed {
            self.broadcast(None);
        }
    }

    /// Resets every axis to its full observed data extent.
    ///
    /// Batched: all axes mutate in one pass and exactly one broadcast is
    /// emitted, with no source event.
    pub fn restore_auto_bounds(&mut self) {
        self.registry.restore_auto_bounds();
        self.broadcast(None);
    }

    fn zoom_programmatic(&mut self, factor: f64) {
        let area = self.data_area();
        let anchor = if self.interaction.zoom_around_anchor {
            self.anchor
        } else {
            None
        };
        let changed = self
            .zoom
            .zoom_around_center(&mut self.registry, anchor, factor, area);
        if changed {
            self.broadcast(None);
        }
    }

    fn broadcast(&mut self, source: Option<InputEvent>) {
        let selection = Selection::from_registry(&self.registry, self.resolver.as_ref());
        self.broadcaster.notify(&selection, source.as_ref());
    }

    fn axis_counts(&self) -> AxisCounts {
        AxisCounts {
            domain: self.registry.domain_axis_count(),
            range: self.registry.range_axis_count(),
        }
    }

    fn check_gesture_consistency(&mut self, recorded: AxisCounts) -> bool {
        if self.axis_counts() == recorded {
            return true;
        }
        warn!(
            recorded_domain = recorded.domain,
            recorded_range = recorded.range,
            current_domain = self.registry.domain_axis_count(),
            current_range = self.registry.range_axis_count(),
            "axis set changed mid-gesture; discarding gesture"
        );
        self.tracker.cancel();
        self.gesture = None;
        false
    }

    fn any_pannable(&self) -> bool {
        AxisKind::BOTH
            .into_iter()
            .any(|kind| self.registry.is_pannable(kind))
    }

    fn screen_axis_zoomable(&self, screen_axis: ScreenAxis) -> bool {
        AxisKind::BOTH.into_iter().any(|kind| {
            self.registry.is_zoomable(kind)
                && self.registry.orientation().screen_axis(kind) == screen_axis
        })
    }

    fn rect_constraint(&self) -> Option<RectConstraint> {
        let horizontal = self.screen_axis_zoomable(ScreenAxis::X);
        let vertical = self.screen_axis_zoomable(ScreenAxis::Y);
        match (horizontal, vertical) {
            (true, true) => Some(RectConstraint::Free),
            (true, false) => Some(RectConstraint::HorizontalOnly),
            (false, true) => Some(RectConstraint::VerticalOnly),
            (false, false) => None,
        }
    }
}

impl std::fmt::Debug for PlotViewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlotViewport")
            .field("viewport", &self.viewport)
            .field("registry", &self.registry)
            .field("gesture", &self.gesture)
            .field("anchor", &self.anchor)
            .finish_non_exhaustive()
    }
}
