use approx::assert_relative_eq;
use proptest::prelude::*;
use riskmap::api::{RiskMap, RiskMapConfig};
use riskmap::core::{Surface, SurfacePoint};
use riskmap::interaction::{InteractionMode, ViewTransform, ZoomConfig};
use riskmap::render::NullRenderer;

fn map() -> RiskMap<NullRenderer> {
    RiskMap::new(NullRenderer::default(), RiskMapConfig::default()).expect("map init")
}

#[test]
fn zoom_steps_and_clamps_to_configured_limits() {
    let mut map = map();
    map.zoom_in();
    assert_relative_eq!(map.view().zoom, 1.2);

    for _ in 0..20 {
        map.zoom_in();
    }
    assert_relative_eq!(map.view().zoom, 2.6);

    for _ in 0..20 {
        map.zoom_out();
    }
    assert_relative_eq!(map.view().zoom, 0.6);
}

#[test]
fn repeated_steps_do_not_accumulate_float_drift() {
    let mut map = map();
    for _ in 0..5 {
        map.zoom_in();
    }
    for _ in 0..5 {
        map.zoom_out();
    }
    assert_eq!(map.view().zoom, 1.0);
}

#[test]
fn reset_restores_identity() {
    let mut map = map();
    map.zoom_in();
    map.pan_by(40.0, -12.0).expect("pan");
    map.reset_view();
    assert!(map.view().is_identity());
}

#[test]
fn drag_pans_by_pointer_delta() {
    let mut map = map();
    map.pan_start(100.0, 100.0);
    assert_eq!(map.interaction_mode(), InteractionMode::Panning);
    map.pan_update(130.0, 90.0).expect("pan update");
    map.pan_update(140.0, 95.0).expect("pan update");
    map.pan_end();

    assert_eq!(map.interaction_mode(), InteractionMode::Idle);
    assert_relative_eq!(map.view().pan_x, 40.0);
    assert_relative_eq!(map.view().pan_y, -5.0);
}

#[test]
fn pan_update_without_active_drag_is_ignored() {
    let mut map = map();
    map.pan_update(50.0, 50.0).expect("ignored");
    assert!(map.view().is_identity());
}

#[test]
fn non_finite_pan_is_rejected() {
    let mut map = map();
    assert!(map.pan_by(f64::NAN, 0.0).is_err());
    assert!(map.view().is_identity());
}

#[test]
fn inverted_zoom_range_is_rejected() {
    let config = RiskMapConfig::default().with_zoom(ZoomConfig {
        min: 1.5,
        max: 2.0,
        step: 0.2,
    });
    assert!(RiskMap::new(NullRenderer::default(), config).is_err());
}

proptest! {
    #[test]
    fn view_apply_invert_round_trip(
        zoom in 0.6f64..2.6,
        pan_x in -500.0f64..500.0,
        pan_y in -500.0f64..500.0,
        x in 0.0f64..960.0,
        y in 0.0f64..480.0,
    ) {
        let view = ViewTransform { zoom, pan_x, pan_y };
        let surface = Surface::default();
        let screen = view.apply(SurfacePoint::new(x, y), surface);
        let back = view.invert(screen, surface);
        prop_assert!((back.x - x).abs() <= 1e-9);
        prop_assert!((back.y - y).abs() <= 1e-9);
    }
}
