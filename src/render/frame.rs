use crate::core::Surface;
use crate::error::{MapError, MapResult};
use crate::interaction::ViewTransform;
use crate::render::{CirclePrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive};

/// Primitives sharing one coordinate space, drawn in field order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerPrimitives {
    pub polygons: Vec<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    pub fn validate(&self) -> MapResult<()> {
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
            && self.lines.is_empty()
            && self.rects.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one map draw pass.
///
/// `map_layer` is in surface coordinates and is drawn under `view`.
/// `overlay_layer` (legend, tooltip) is already in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surface: Surface,
    pub view: ViewTransform,
    pub map_layer: LayerPrimitives,
    pub overlay_layer: LayerPrimitives,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface: Surface, view: ViewTransform) -> Self {
        Self {
            surface,
            view,
            map_layer: LayerPrimitives::default(),
            overlay_layer: LayerPrimitives::default(),
        }
    }

    pub fn validate(&self) -> MapResult<()> {
        if !self.surface.is_valid() {
            return Err(MapError::InvalidSurface {
                width: self.surface.width,
                height: self.surface.height,
            });
        }
        if !self.view.zoom.is_finite()
            || self.view.zoom <= 0.0
            || !self.view.pan_x.is_finite()
            || !self.view.pan_y.is_finite()
        {
            return Err(MapError::InvalidData(
                "view transform must be finite with zoom > 0".to_owned(),
            ));
        }
        self.map_layer.validate()?;
        self.overlay_layer.validate()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map_layer.is_empty() && self.overlay_layer.is_empty()
    }
}
