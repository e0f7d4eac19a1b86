use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use riskmap::api::{MapStyle, RiskMap, RiskMapConfig, SelectionChanged};
use riskmap::core::{
    CountryRiskRecord, DataSourceFilter, MarkerRiskLevel, RegionTag, RiskLevel, RiskUpdateSource,
};
use riskmap::render::NullRenderer;

fn map_with(records: Vec<CountryRiskRecord>) -> RiskMap<NullRenderer> {
    let mut map =
        RiskMap::new(NullRenderer::default(), RiskMapConfig::default()).expect("map init");
    map.set_records(records).expect("set records");
    map
}

fn us_and_unknown() -> Vec<CountryRiskRecord> {
    vec![
        CountryRiskRecord::new("US", "United States")
            .with_score(72.0)
            .with_risk_level(RiskLevel::High),
        CountryRiskRecord::new("XX", "Unlisted"),
    ]
}

#[test]
fn known_and_unknown_codes_both_produce_markers() {
    let map = map_with(us_and_unknown());
    let style = MapStyle::default();
    let markers = map.markers();
    assert_eq!(markers.len(), 2);

    assert_eq!(markers[0].risk_level, MarkerRiskLevel::High);
    assert_eq!(style.risk_color(markers[0].risk_level).to_hex(), "#f97316");
    // First americas marker: projected US position plus the (-9, -9) slot.
    assert_relative_eq!(markers[0].screen_x, 83.0 / 360.0 * 960.0 - 9.0, epsilon = 1e-9);
    assert_relative_eq!(markers[0].screen_y, 52.0 / 180.0 * 480.0 - 9.0, epsilon = 1e-9);

    assert_eq!(markers[1].risk_level, MarkerRiskLevel::None);
    assert_eq!(markers[1].coordinate.region, RegionTag::Oceania);
    assert_eq!(style.risk_color(markers[1].risk_level).to_hex(), "#94a3b8");
}

#[test]
fn markers_are_rebuilt_from_scratch_on_each_update() {
    let mut map = map_with(us_and_unknown());
    let first = map.markers().to_vec();
    map.set_records(us_and_unknown()).expect("set records");
    assert_eq!(map.markers(), first.as_slice());
    assert_eq!(map.markers()[0].stack_offset_index, 0);
}

#[test]
fn same_region_markers_get_distinct_positions() {
    let map = map_with(vec![
        CountryRiskRecord::new("DE", "Germany"),
        CountryRiskRecord::new("FR", "France"),
        CountryRiskRecord::new("ZZZ", "Unknown"),
        CountryRiskRecord::new("GB", "United Kingdom"),
    ]);
    let europe: Vec<_> = map
        .markers()
        .iter()
        .filter(|marker| marker.coordinate.region == RegionTag::Europe)
        .collect();
    assert_eq!(europe.len(), 3);
    assert_eq!(
        europe.iter().map(|m| m.stack_offset_index).collect::<Vec<_>>(),
        [0, 1, 2]
    );
}

#[test]
fn selection_matches_case_insensitively() {
    let mut map = map_with(us_and_unknown());
    map.set_selected_country(Some("us"));
    assert_eq!(map.selected_marker_index(), Some(0));

    map.set_selected_country(Some("nowhere"));
    assert_eq!(map.selected_marker_index(), None);

    map.set_selected_country(None);
    assert_eq!(map.selected_country(), None);
}

#[test]
fn click_on_marker_emits_selection_event() {
    let mut map = map_with(us_and_unknown());
    let events = Rc::new(RefCell::new(Vec::<SelectionChanged>::new()));
    {
        let events = Rc::clone(&events);
        map.set_selection_handler(move |event| events.borrow_mut().push(event.clone()));
    }

    let position = map.markers()[0].position();
    let event = map.click(position.x + 2.0, position.y - 1.0).expect("hit");
    assert_eq!(event.country_code, "US");
    assert_eq!(events.borrow().as_slice(), [event]);

    // Selection stays host-controlled.
    assert_eq!(map.selected_country(), None);
}

#[test]
fn click_on_empty_area_emits_nothing() {
    let mut map = map_with(us_and_unknown());
    let calls = Rc::new(RefCell::new(0usize));
    {
        let calls = Rc::clone(&calls);
        map.set_selection_handler(move |_| *calls.borrow_mut() += 1);
    }
    assert!(map.click(5.0, 470.0).is_none());
    assert!(map.click(f64::NAN, 10.0).is_none());
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn click_hit_test_follows_pan_and_zoom() {
    let mut map = map_with(us_and_unknown());
    let surface_position = map.markers()[0].position();
    map.zoom_in();
    map.pan_by(30.0, 20.0).expect("pan");

    let screen = map.view().apply(surface_position, map.surface());
    assert_eq!(map.hit_test(screen.x, screen.y), Some(0));
    assert_eq!(
        map.hit_test(surface_position.x, surface_position.y),
        None
    );
}

#[test]
fn hover_reports_marker_under_pointer() {
    let mut map = map_with(us_and_unknown());
    let position = map.markers()[1].position();
    map.pointer_move(position.x, position.y);
    assert_eq!(
        map.hovered_marker().map(|marker| marker.code.as_str()),
        Some("XX")
    );
    map.pointer_leave();
    assert!(map.hovered_marker().is_none());
}

#[test]
fn data_source_filter_skips_other_sources() {
    let records = vec![
        CountryRiskRecord::new("US", "United States")
            .with_update_source(RiskUpdateSource::ExternalData),
        CountryRiskRecord::new("DE", "Germany").with_update_source(RiskUpdateSource::Manual),
        CountryRiskRecord::new("FR", "France"),
    ];
    let config = RiskMapConfig::default().with_data_source(DataSourceFilter::Internal);
    let mut map = RiskMap::new(NullRenderer::default(), config).expect("map init");
    map.set_records(records).expect("set records");

    let codes: Vec<&str> = map.markers().iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, ["DE", "FR"]);
}

#[test]
fn score_derivation_is_opt_in() {
    let records = vec![CountryRiskRecord::new("BR", "Brazil").with_score(80.0)];
    let plain = map_with(records.clone());
    assert_eq!(plain.markers()[0].risk_level, MarkerRiskLevel::None);

    let config = RiskMapConfig::default().with_derive_level_from_score(true);
    let mut derived = RiskMap::new(NullRenderer::default(), config).expect("map init");
    derived.set_records(records).expect("set records");
    assert_eq!(derived.markers()[0].risk_level, MarkerRiskLevel::Critical);
}

#[test]
fn render_draws_one_circle_per_marker() {
    let mut map = map_with(us_and_unknown());
    map.set_selected_country(Some("XX"));
    map.render().expect("render");
    let renderer = map.into_renderer();
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_marker_count, 2);
    assert!(renderer.last_polygon_count > 0);
}
