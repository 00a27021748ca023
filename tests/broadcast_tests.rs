use std::cell::RefCell;
use std::rc::Rc;

use plot_viewport::core::{
    AxisCapabilities, AxisRegistry, Orientation, StaticNameResolver,
};
use plot_viewport::interaction::{
    InputEvent, Selection, SelectionBroadcaster, SelectionListener,
};

struct TaggedListener {
    tag: &'static str,
    order: Rc<RefCell<Vec<&'static str>>>,
}

impl SelectionListener for TaggedListener {
    fn on_selection(&mut self, _selection: &Selection, _source: Option<&InputEvent>) {
        self.order.borrow_mut().push(self.tag);
    }
}

fn sample_selection() -> Selection {
    let mut registry = AxisRegistry::new(Orientation::Vertical, AxisCapabilities::default());
    registry.push_domain_axis(0.0, 100.0).expect("domain axis");
    registry.push_range_axis(-1.0, 1.0).expect("range axis");
    let resolver = StaticNameResolver::new(
        vec![vec!["time".to_owned()]],
        vec![vec!["value".to_owned()]],
    );
    Selection::from_registry(&registry, &resolver)
}

#[test]
fn listeners_are_notified_in_registration_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut broadcaster = SelectionBroadcaster::new();
    for tag in ["first", "second", "third"] {
        broadcaster.register(Box::new(TaggedListener {
            tag,
            order: Rc::clone(&order),
        }));
    }

    broadcaster.notify(&sample_selection(), None);
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn unregistered_listener_stops_receiving_and_order_is_kept() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut broadcaster = SelectionBroadcaster::new();
    let _first = broadcaster.register(Box::new(TaggedListener {
        tag: "first",
        order: Rc::clone(&order),
    }));
    let second = broadcaster.register(Box::new(TaggedListener {
        tag: "second",
        order: Rc::clone(&order),
    }));
    let _third = broadcaster.register(Box::new(TaggedListener {
        tag: "third",
        order: Rc::clone(&order),
    }));

    assert!(broadcaster.unregister(second));
    assert!(!broadcaster.unregister(second));
    broadcaster.notify(&sample_selection(), None);
    assert_eq!(*order.borrow(), vec!["first", "third"]);
}

#[test]
fn notify_without_listeners_requests_a_redraw_instead() {
    let mut broadcaster = SelectionBroadcaster::new();
    assert_eq!(broadcaster.listener_count(), 0);

    broadcaster.notify(&sample_selection(), None);
    broadcaster.notify(&sample_selection(), None);
    assert_eq!(broadcaster.take_redraw_requests(), 2);
    // Draining resets the counter.
    assert_eq!(broadcaster.take_redraw_requests(), 0);
}

#[test]
fn selection_iterates_domain_axes_before_range_axes() {
    let selection = sample_selection();
    let entries = selection.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].axis_name, "time");
    assert_eq!(entries[0].lower, 0.0);
    assert_eq!(entries[0].upper, 100.0);
    assert_eq!(entries[1].axis_name, "value");
    assert_eq!(entries[1].lower, -1.0);
    assert_eq!(entries[1].upper, 1.0);
}

#[test]
fn selection_json_round_trip() {
    let selection = sample_selection();
    let json = serde_json::to_string(&selection).expect("serialize selection");
    let parsed: Selection = serde_json::from_str(&json).expect("parse selection");
    assert_eq!(parsed, selection);
}
