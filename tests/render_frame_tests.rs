use riskmap::api::{
    MapStyle, RiskMapConfig, SceneInputs, build_render_frame, build_risk_markers, legend_entries,
};
use riskmap::core::{CountryRiskRecord, RiskLevel, Surface, background_shapes};
use riskmap::interaction::ViewTransform;
use riskmap::render::{NullRenderer, Renderer};

fn markers() -> Vec<riskmap::api::RiskMarker> {
    let records = vec![
        CountryRiskRecord::new("US", "United States")
            .with_score(72.0)
            .with_risk_level(RiskLevel::High),
        CountryRiskRecord::new("JP", "Japan").with_risk_level(RiskLevel::Low),
        CountryRiskRecord::new("XX", "Unlisted"),
    ];
    build_risk_markers(&records, RiskMapConfig::default()).expect("markers")
}

fn inputs<'a>(
    markers: &'a [riskmap::api::RiskMarker],
    style: &'a MapStyle,
    selected: Option<usize>,
    hovered: Option<usize>,
) -> SceneInputs<'a> {
    SceneInputs {
        surface: Surface::default(),
        view: ViewTransform::identity(),
        markers,
        selected,
        hovered,
        style,
    }
}

#[test]
fn frame_contains_background_markers_and_legend() {
    let markers = markers();
    let style = MapStyle::default();
    let frame = build_render_frame(inputs(&markers, &style, None, None)).expect("frame");

    assert_eq!(frame.map_layer.polygons.len(), background_shapes().len());
    assert!(!frame.map_layer.lines.is_empty());
    assert_eq!(frame.map_layer.circles.len(), markers.len());

    let legend_labels: Vec<&str> = frame
        .overlay_layer
        .texts
        .iter()
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(legend_labels, ["Low", "Medium", "High", "Critical", "No data"]);
    assert_eq!(legend_entries(&style).len(), 5);
}

#[test]
fn selected_marker_is_drawn_last_and_larger() {
    let markers = markers();
    let style = MapStyle::default();
    let frame = build_render_frame(inputs(&markers, &style, Some(0), None)).expect("frame");

    let last = frame.map_layer.circles.last().expect("circles");
    assert_eq!(last.center_x, markers[0].screen_x);
    assert_eq!(last.radius, style.selected_marker_radius_px);
    assert_eq!(last.stroke_color, style.selected_marker_stroke_color);
    assert!(
        frame.map_layer.circles[..2]
            .iter()
            .all(|circle| circle.radius == style.marker_radius_px)
    );
}

#[test]
fn hovered_marker_gets_a_tooltip() {
    let markers = markers();
    let style = MapStyle::default();
    let frame = build_render_frame(inputs(&markers, &style, None, Some(2))).expect("frame");
    assert!(
        frame
            .overlay_layer
            .texts
            .iter()
            .any(|text| text.text == "Unlisted · No data · n/a")
    );
}

#[test]
fn graticule_can_be_disabled() {
    let markers = markers();
    let style = MapStyle {
        show_graticule: false,
        ..MapStyle::default()
    };
    let frame = build_render_frame(inputs(&markers, &style, None, None)).expect("frame");
    assert!(frame.map_layer.lines.is_empty());
}

#[test]
fn frames_are_deterministic_and_validate() {
    let markers = markers();
    let style = MapStyle::default();
    let a = build_render_frame(inputs(&markers, &style, Some(1), Some(2))).expect("frame");
    let b = build_render_frame(inputs(&markers, &style, Some(1), Some(2))).expect("frame");
    assert_eq!(a, b);

    let mut renderer = NullRenderer::default();
    renderer.render(&a).expect("render");
    assert_eq!(renderer.last_marker_count, 3);
}
