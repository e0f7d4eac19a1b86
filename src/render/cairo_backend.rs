use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{MapError, MapResult};
use crate::render::{Color, LayerPrimitives, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_drawn: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

impl CairoRenderStats {
    fn accumulate(&mut self, other: CairoRenderStats) {
        self.polygons_drawn += other.polygons_drawn;
        self.lines_drawn += other.lines_drawn;
        self.rects_drawn += other.rects_drawn;
        self.circles_drawn += other.circles_drawn;
        self.texts_drawn += other.texts_drawn;
    }
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> MapResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> MapResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidSurface {
                width: f64::from(width),
                height: f64::from(height),
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> MapResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the offscreen surface as PNG into `writer`.
    pub fn write_png<W: std::io::Write>(&self, writer: &mut W) -> MapResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| MapError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> MapResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        let center = frame.surface.center();
        context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        context.translate(center.x + frame.view.pan_x, center.y + frame.view.pan_y);
        context.scale(frame.view.zoom, frame.view.zoom);
        context.translate(-center.x, -center.y);
        stats.accumulate(draw_layer(context, &frame.map_layer)?);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;

        stats.accumulate(draw_layer(context, &frame.overlay_layer)?);

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> MapResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> MapResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_layer(context: &Context, layer: &LayerPrimitives) -> MapResult<CairoRenderStats> {
    let mut stats = CairoRenderStats::default();

    for polygon in &layer.polygons {
        let mut points = polygon.points.iter();
        if let Some((x, y)) = points.next() {
            context.move_to(*x, *y);
        }
        for (x, y) in points {
            context.line_to(*x, *y);
        }
        context.close_path();
        fill_and_stroke(
            context,
            polygon.fill_color,
            polygon.stroke_width,
            polygon.stroke_color,
            "polygon",
        )?;
        stats.polygons_drawn += 1;
    }

    for line in &layer.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for rect in &layer.rects {
        append_rect_path(context, *rect);
        fill_and_stroke(
            context,
            rect.fill_color,
            rect.border_width,
            rect.border_color,
            "rectangle",
        )?;
        stats.rects_drawn += 1;
    }

    for circle in &layer.circles {
        context.new_sub_path();
        context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, TAU);
        fill_and_stroke(
            context,
            circle.fill_color,
            circle.stroke_width,
            circle.stroke_color,
            "circle",
        )?;
        stats.circles_drawn += 1;
    }

    for text in &layer.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(x, text.y);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

fn fill_and_stroke(
    context: &Context,
    fill_color: Color,
    stroke_width: f64,
    stroke_color: Color,
    what: &str,
) -> MapResult<()> {
    apply_color(context, fill_color);
    if stroke_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error(&format!("failed to fill {what}"), err))?;
        apply_color(context, stroke_color);
        context.set_line_width(stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error(&format!("failed to stroke {what}"), err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error(&format!("failed to fill {what}"), err))
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: crate::render::RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> MapError {
    MapError::InvalidData(format!("{prefix}: {err}"))
}
