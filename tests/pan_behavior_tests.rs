use plot_viewport::core::{AxisCapabilities, AxisRegistry, Orientation, Rect};
use plot_viewport::interaction::{
    ArrowKey, InteractionConfig, Modifiers, PanEngine, ShiftMode,
};

const AREA: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 200.0,
    height: 100.0,
};

fn build_registry(orientation: Orientation) -> AxisRegistry {
    let mut registry = AxisRegistry::new(orientation, AxisCapabilities::default());
    registry.push_domain_axis(0.0, 100.0).expect("domain axis");
    registry.push_range_axis(0.0, 100.0).expect("range axis");
    registry
}

fn engine() -> PanEngine {
    PanEngine::new(&InteractionConfig::default())
}

#[test]
fn rightward_drag_shifts_domain_down_by_pixel_ratio() {
    let mut registry = build_registry(Orientation::Vertical);
    let changed = engine().pan_by_screen_delta(&mut registry, 10.0, 0.0, AREA);
    assert!(changed);
    // 10 px over a 200 px area on a 100-unit span is 5 units, content follows
    // the pointer so the bounds move down.
    assert_eq!(
        registry.domain_axis(0).expect("domain axis").bounds(),
        (-5.0, 95.0)
    );
    assert_eq!(
        registry.range_axis(0).expect("range axis").bounds(),
        (0.0, 100.0)
    );
}

#[test]
fn downward_drag_shifts_range_up() {
    let mut registry = build_registry(Orientation::Vertical);
    engine().pan_by_screen_delta(&mut registry, 0.0, 10.0, AREA);
    // Screen Y is inverted relative to data Y.
    assert_eq!(
        registry.range_axis(0).expect("range axis").bounds(),
        (10.0, 110.0)
    );
}

#[test]
fn pan_then_inverse_pan_restores_bounds_exactly() {
    let mut registry = build_registry(Orientation::Vertical);
    engine().pan_by_screen_delta(&mut registry, 17.0, -9.0, AREA);
    engine().pan_by_screen_delta(&mut registry, -17.0, 9.0, AREA);
    assert_eq!(
        registry.domain_axis(0).expect("domain axis").bounds(),
        (0.0, 100.0)
    );
    assert_eq!(
        registry.range_axis(0).expect("range axis").bounds(),
        (0.0, 100.0)
    );
}

#[test]
fn horizontal_orientation_swaps_which_kind_each_delta_drives() {
    let mut registry = build_registry(Orientation::Horizontal);
    engine().pan_by_screen_delta(&mut registry, 10.0, 0.0, AREA);
    // In a horizontal plot the range axes run along screen X.
    assert_eq!(
        registry.domain_axis(0).expect("domain axis").bounds(),
        (0.0, 100.0)
    );
    assert_eq!(
        registry.range_axis(0).expect("range axis").bounds(),
        (-5.0, 95.0)
    );
}

#[test]
fn non_pannable_kind_is_a_silent_no_op() {
    let capabilities = AxisCapabilities {
        domain_pannable: false,
        ..AxisCapabilities::default()
    };
    let mut registry = AxisRegistry::new(Orientation::Vertical, capabilities);
    registry.push_domain_axis(0.0, 100.0).expect("domain axis");
    registry.push_range_axis(0.0, 100.0).expect("range axis");

    engine().pan_by_screen_delta(&mut registry, 10.0, 10.0, AREA);
    assert_eq!(
        registry.domain_axis(0).expect("domain axis").bounds(),
        (0.0, 100.0)
    );
    assert_eq!(
        registry.range_axis(0).expect("range axis").bounds(),
        (10.0, 110.0)
    );
}

#[test]
fn pixel_shift_mode_steps_one_pixel_of_axis_units() {
    let mut registry = build_registry(Orientation::Vertical);
    let changed = engine().keyboard_pan(&mut registry, ArrowKey::Right, Modifiers::NONE, AREA);
    assert!(changed);
    // One pixel over a 200 px area on a 100-unit span.
    let (lower, upper) = registry.domain_axis(0).expect("domain axis").bounds();
    assert!((lower - 0.5).abs() <= 1e-12);
    assert!((upper - 100.5).abs() <= 1e-12);
}

#[test]
fn shift_modifier_multiplies_the_step_by_ten() {
    let mut registry = build_registry(Orientation::Vertical);
    engine().keyboard_pan(&mut registry, ArrowKey::Left, Modifiers::SHIFT, AREA);
    let (lower, upper) = registry.domain_axis(0).expect("domain axis").bounds();
    assert!((lower + 5.0).abs() <= 1e-12);
    assert!((upper - 95.0).abs() <= 1e-12);
}

#[test]
fn percentual_shift_mode_steps_one_percent_of_span() {
    let config = InteractionConfig::default().with_shift_mode(ShiftMode::Percentual);
    let mut registry = build_registry(Orientation::Vertical);
    PanEngine::new(&config).keyboard_pan(&mut registry, ArrowKey::Right, Modifiers::NONE, AREA);
    let (lower, upper) = registry.domain_axis(0).expect("domain axis").bounds();
    assert!((lower - 1.0).abs() <= 1e-12);
    assert!((upper - 101.0).abs() <= 1e-12);
}

#[test]
fn fixed_shift_mode_uses_per_kind_configured_units() {
    let config = InteractionConfig::default()
        .with_shift_mode(ShiftMode::Fixed)
        .with_fixed_shift_units(2.5, 7.0);
    let mut registry = build_registry(Orientation::Vertical);
    let engine = PanEngine::new(&config);

    engine.keyboard_pan(&mut registry, ArrowKey::Right, Modifiers::NONE, AREA);
    engine.keyboard_pan(&mut registry, ArrowKey::Up, Modifiers::NONE, AREA);

    assert_eq!(
        registry.domain_axis(0).expect("domain axis").bounds(),
        (2.5, 102.5)
    );
    assert_eq!(
        registry.range_axis(0).expect("range axis").bounds(),
        (7.0, 107.0)
    );
}

#[test]
fn up_key_moves_range_axes_toward_higher_values() {
    let mut registry = build_registry(Orientation::Vertical);
    engine().keyboard_pan(&mut registry, ArrowKey::Up, Modifiers::SHIFT, AREA);
    // Screen Y is inverted: Up pans the view upward, raising the bounds.
    let (lower, upper) = registry.range_axis(0).expect("range axis").bounds();
    assert!((lower - 10.0).abs() <= 1e-12);
    assert!((upper - 110.0).abs() <= 1e-12);
}

#[test]
fn vertical_keys_drive_only_axes_on_screen_y() {
    let mut registry = build_registry(Orientation::Vertical);
    engine().keyboard_pan(&mut registry, ArrowKey::Down, Modifiers::NONE, AREA);
    assert_eq!(
        registry.domain_axis(0).expect("domain axis").bounds(),
        (0.0, 100.0)
    );
    let (lower, upper) = registry.range_axis(0).expect("range axis").bounds();
    assert!((lower + 1.0).abs() <= 1e-12);
    assert!((upper - 99.0).abs() <= 1e-12);
}

#[test]
fn degenerate_axis_pans_without_nan() {
    let mut registry = AxisRegistry::new(Orientation::Vertical, AxisCapabilities::default());
    registry.push_domain_axis(5.0, 5.0).expect("degenerate axis");

    engine().pan_by_screen_delta(&mut registry, 10.0, 0.0, AREA);
    assert_eq!(registry.domain_axis(0).expect("axis").bounds(), (5.0, 5.0));

    engine().keyboard_pan(&mut registry, ArrowKey::Right, Modifiers::NONE, AREA);
    let (lower, upper) = registry.domain_axis(0).expect("axis").bounds();
    assert!(lower.is_finite() && upper.is_finite());
}
