use crate::core::MarkerRiskLevel;
use crate::error::{MapError, MapResult};
use crate::render::Color;

/// Color token per display risk level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskPalette {
    pub low: Color,
    pub medium: Color,
    pub high: Color,
    pub critical: Color,
    pub none: Color,
}

impl Default for RiskPalette {
    fn default() -> Self {
        Self {
            low: Color::from_rgb8(0x22, 0xc5, 0x5e),
            medium: Color::from_rgb8(0xea, 0xb3, 0x08),
            high: Color::from_rgb8(0xf9, 0x73, 0x16),
            critical: Color::from_rgb8(0xdc, 0x26, 0x26),
            none: Color::from_rgb8(0x94, 0xa3, 0xb8),
        }
    }
}

impl RiskPalette {
    #[must_use]
    pub fn color_for(self, level: MarkerRiskLevel) -> Color {
        match level {
            MarkerRiskLevel::Low => self.low,
            MarkerRiskLevel::Medium => self.medium,
            MarkerRiskLevel::High => self.high,
            MarkerRiskLevel::Critical => self.critical,
            MarkerRiskLevel::None => self.none,
        }
    }

    fn validate(self) -> MapResult<()> {
        for color in [self.low, self.medium, self.high, self.critical, self.none] {
            color.validate()?;
        }
        Ok(())
    }
}

/// Visual styling for map layers, markers, legend and tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapStyle {
    pub palette: RiskPalette,
    pub ocean_color: Color,
    pub land_color: Color,
    pub land_stroke_color: Color,
    pub land_stroke_width: f64,
    pub graticule_color: Color,
    pub graticule_width: f64,
    pub show_graticule: bool,
    pub marker_radius_px: f64,
    pub selected_marker_radius_px: f64,
    pub marker_stroke_width: f64,
    pub selected_marker_stroke_width: f64,
    pub marker_stroke_color: Color,
    pub selected_marker_stroke_color: Color,
    pub legend_origin_x: f64,
    pub legend_origin_y: f64,
    pub legend_swatch_px: f64,
    pub legend_row_height_px: f64,
    pub legend_font_size_px: f64,
    pub legend_background_color: Color,
    pub text_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_offset_px: f64,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            palette: RiskPalette::default(),
            ocean_color: Color::from_rgb8(0xf1, 0xf5, 0xf9),
            land_color: Color::from_rgb8(0xe2, 0xe8, 0xf0),
            land_stroke_color: Color::from_rgb8(0xcb, 0xd5, 0xe1),
            land_stroke_width: 0.8,
            graticule_color: Color::rgba(0.58, 0.64, 0.72, 0.25),
            graticule_width: 0.5,
            show_graticule: true,
            marker_radius_px: 5.0,
            selected_marker_radius_px: 8.0,
            marker_stroke_width: 1.0,
            selected_marker_stroke_width: 2.5,
            marker_stroke_color: Color::rgb(1.0, 1.0, 1.0),
            selected_marker_stroke_color: Color::from_rgb8(0x0f, 0x17, 0x2a),
            legend_origin_x: 12.0,
            legend_origin_y: 12.0,
            legend_swatch_px: 10.0,
            legend_row_height_px: 16.0,
            legend_font_size_px: 11.0,
            legend_background_color: Color::rgba(1.0, 1.0, 1.0, 0.85),
            text_color: Color::from_rgb8(0x33, 0x41, 0x55),
            tooltip_font_size_px: 12.0,
            tooltip_offset_px: 12.0,
        }
    }
}

impl MapStyle {
    #[must_use]
    pub fn risk_color(&self, level: MarkerRiskLevel) -> Color {
        self.palette.color_for(level)
    }

    pub fn validate(&self) -> MapResult<()> {
        self.palette.validate()?;
        for color in [
            self.ocean_color,
            self.land_color,
            self.land_stroke_color,
            self.graticule_color,
            self.marker_stroke_color,
            self.selected_marker_stroke_color,
            self.legend_background_color,
            self.text_color,
        ] {
            color.validate()?;
        }
        for (value, name) in [
            (self.marker_radius_px, "marker_radius_px"),
            (self.selected_marker_radius_px, "selected_marker_radius_px"),
            (self.legend_swatch_px, "legend_swatch_px"),
            (self.legend_row_height_px, "legend_row_height_px"),
            (self.legend_font_size_px, "legend_font_size_px"),
            (self.tooltip_font_size_px, "tooltip_font_size_px"),
            (self.graticule_width, "graticule_width"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MapError::InvalidConfig(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        for (value, name) in [
            (self.land_stroke_width, "land_stroke_width"),
            (self.marker_stroke_width, "marker_stroke_width"),
            (
                self.selected_marker_stroke_width,
                "selected_marker_stroke_width",
            ),
            (self.legend_origin_x, "legend_origin_x"),
            (self.legend_origin_y, "legend_origin_y"),
            (self.tooltip_offset_px, "tooltip_offset_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MapError::InvalidConfig(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}
