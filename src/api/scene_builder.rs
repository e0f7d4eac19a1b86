use crate::core::{
    EquirectangularProjection, Surface, SurfacePoint, background_shapes, graticule_segments,
};
use crate::error::MapResult;
use crate::interaction::ViewTransform;
use crate::render::{
    CirclePrimitive, LayerPrimitives, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

use super::{MapStyle, RiskMarker, legend_entries};

const TOOLTIP_CHAR_WIDTH_RATIO: f64 = 0.6;
const TOOLTIP_PADDING_PX: f64 = 6.0;
const LEGEND_PADDING_PX: f64 = 8.0;
const LEGEND_WIDTH_PX: f64 = 96.0;

/// Inputs for one scene build.
#[derive(Debug, Clone, Copy)]
pub struct SceneInputs<'a> {
    pub surface: Surface,
    pub view: ViewTransform,
    pub markers: &'a [RiskMarker],
    pub selected: Option<usize>,
    pub hovered: Option<usize>,
    pub style: &'a MapStyle,
}

/// Materializes a deterministic frame: background, graticule and markers in
/// surface space, legend and tooltip in screen space.
pub fn build_render_frame(inputs: SceneInputs<'_>) -> MapResult<RenderFrame> {
    let projection = EquirectangularProjection::new(inputs.surface)?;
    let style = inputs.style;
    let mut frame = RenderFrame::new(inputs.surface, inputs.view);

    frame.map_layer.rects.push(RectPrimitive::new(
        0.0,
        0.0,
        inputs.surface.width,
        inputs.surface.height,
        style.ocean_color,
    ));

    for shape in background_shapes() {
        let mut points = Vec::with_capacity(shape.outline.len());
        for vertex in shape.outline {
            let projected = projection.project(*vertex)?;
            points.push((projected.x, projected.y));
        }
        frame.map_layer.polygons.push(
            PolygonPrimitive::new(points, style.land_color)
                .with_stroke(style.land_stroke_width, style.land_stroke_color),
        );
    }

    if style.show_graticule {
        for (start, end) in graticule_segments() {
            let a = projection.project(start)?;
            let b = projection.project(end)?;
            frame.map_layer.lines.push(LinePrimitive::new(
                a.x,
                a.y,
                b.x,
                b.y,
                style.graticule_width,
                style.graticule_color,
            ));
        }
    }

    push_markers(&mut frame.map_layer, inputs);
    push_legend(&mut frame.overlay_layer, style);

    let tooltip_target = inputs.hovered.or(inputs.selected);
    if let Some(marker) = tooltip_target.and_then(|index| inputs.markers.get(index)) {
        let anchor = inputs.view.apply(marker.position(), inputs.surface);
        push_tooltip(&mut frame.overlay_layer, marker, anchor, style);
    }

    Ok(frame)
}

fn push_markers(layer: &mut LayerPrimitives, inputs: SceneInputs<'_>) {
    let style = inputs.style;
    for (index, marker) in inputs.markers.iter().enumerate() {
        if Some(index) == inputs.selected {
            continue;
        }
        layer.circles.push(
            CirclePrimitive::new(
                marker.screen_x,
                marker.screen_y,
                style.marker_radius_px,
                style.risk_color(marker.risk_level),
            )
            .with_stroke(style.marker_stroke_width, style.marker_stroke_color),
        );
    }

    // Selected marker last so it draws above its neighbours.
    if let Some(marker) = inputs.selected.and_then(|index| inputs.markers.get(index)) {
        layer.circles.push(
            CirclePrimitive::new(
                marker.screen_x,
                marker.screen_y,
                style.selected_marker_radius_px,
                style.risk_color(marker.risk_level),
            )
            .with_stroke(
                style.selected_marker_stroke_width,
                style.selected_marker_stroke_color,
            ),
        );
    }
}

fn push_legend(layer: &mut LayerPrimitives, style: &MapStyle) {
    let entries = legend_entries(style);
    let left = style.legend_origin_x;
    let top = style.legend_origin_y;
    let height = entries.len() as f64 * style.legend_row_height_px + 2.0 * LEGEND_PADDING_PX;

    layer.rects.push(
        RectPrimitive::new(left, top, LEGEND_WIDTH_PX, height, style.legend_background_color)
            .with_corner_radius(4.0),
    );

    for (row, entry) in entries.iter().enumerate() {
        let row_top = top + LEGEND_PADDING_PX + row as f64 * style.legend_row_height_px;
        let swatch_top = row_top + 0.5 * (style.legend_row_height_px - style.legend_swatch_px);
        layer.rects.push(RectPrimitive::new(
            left + LEGEND_PADDING_PX,
            swatch_top,
            style.legend_swatch_px,
            style.legend_swatch_px,
            entry.color,
        ));
        layer.texts.push(TextPrimitive::new(
            entry.label,
            left + 2.0 * LEGEND_PADDING_PX + style.legend_swatch_px,
            row_top,
            style.legend_font_size_px,
            style.text_color,
            TextHAlign::Left,
        ));
    }
}

fn push_tooltip(
    layer: &mut LayerPrimitives,
    marker: &RiskMarker,
    anchor: SurfacePoint,
    style: &MapStyle,
) {
    let text = marker.tooltip_text();
    let width = text.chars().count() as f64 * style.tooltip_font_size_px * TOOLTIP_CHAR_WIDTH_RATIO
        + 2.0 * TOOLTIP_PADDING_PX;
    let height = style.tooltip_font_size_px + 2.0 * TOOLTIP_PADDING_PX;
    let left = anchor.x + style.tooltip_offset_px;
    let top = anchor.y - style.tooltip_offset_px - height;

    layer.rects.push(
        RectPrimitive::new(left, top, width, height, style.legend_background_color)
            .with_border(1.0, style.risk_color(marker.risk_level))
            .with_corner_radius(3.0),
    );
    layer.texts.push(TextPrimitive::new(
        text,
        left + TOOLTIP_PADDING_PX,
        top + TOOLTIP_PADDING_PX,
        style.tooltip_font_size_px,
        style.text_color,
        TextHAlign::Left,
    ));
}
