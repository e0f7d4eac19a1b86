#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use riskmap::MapError;
use riskmap::api::{RiskMap, RiskMapConfig};
use riskmap::core::{CountryRiskRecord, RiskLevel, Surface};
use riskmap::render::CairoRenderer;

fn records() -> Vec<CountryRiskRecord> {
    vec![
        CountryRiskRecord::new("US", "United States").with_risk_level(RiskLevel::High),
        CountryRiskRecord::new("XX", "Unlisted"),
    ]
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, MapError::InvalidSurface { .. }));
}

#[test]
fn cairo_renderer_draws_map_and_overlay() {
    let renderer = CairoRenderer::new(960, 480).expect("renderer");
    let mut map = RiskMap::new(renderer, RiskMapConfig::new(Surface::new(960.0, 480.0)))
        .expect("map init");
    map.set_records(records()).expect("records");
    map.set_selected_country(Some("us"));

    map.render().expect("render");
    let renderer = map.into_renderer();
    let stats = renderer.last_stats();
    assert_eq!(stats.circles_drawn, 2);
    assert!(stats.polygons_drawn > 0);
    assert!(stats.texts_drawn >= 5);

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(b"\x89PNG"));
}

#[test]
fn cairo_renderer_draws_on_external_context() {
    let renderer = CairoRenderer::new(320, 160).expect("renderer");
    let mut map =
        RiskMap::new(renderer, RiskMapConfig::new(Surface::new(320.0, 160.0))).expect("map init");
    map.set_records(records()).expect("records");
    map.zoom_in();

    let surface = ImageSurface::create(Format::ARgb32, 320, 160).expect("surface");
    let context = Context::new(&surface).expect("context");
    map.render_on_cairo_context(&context).expect("render");
    assert_eq!(map.renderer().last_stats().circles_drawn, 2);
}
