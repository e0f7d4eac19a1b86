use tracing::debug;

use crate::core::{CountryRiskRecord, Surface};
use crate::error::MapResult;
use crate::interaction::InteractionState;
use crate::render::{RenderFrame, Renderer};

use super::scene_builder::{SceneInputs, build_render_frame};
use super::{MapStyle, RiskMapConfig, RiskMarker, SelectionChanged};

pub(super) type SelectionHandler = Box<dyn FnMut(&SelectionChanged)>;

/// Main orchestration facade consumed by the hosting dashboard.
///
/// `RiskMap` owns the current records, the markers rebuilt from them, the
/// selection, and the pan/zoom state, and hands finished frames to a renderer.
pub struct RiskMap<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: RiskMapConfig,
    pub(super) style: MapStyle,
    pub(super) records: Vec<CountryRiskRecord>,
    pub(super) markers: Vec<RiskMarker>,
    pub(super) selected_code: Option<String>,
    pub(super) interaction: InteractionState,
    pub(super) selection_handler: Option<SelectionHandler>,
}

impl<R: Renderer> RiskMap<R> {
    pub fn new(renderer: R, config: RiskMapConfig) -> MapResult<Self> {
        let config = config.validate()?;
        debug!(
            width = config.surface.width,
            height = config.surface.height,
            "init risk map"
        );
        Ok(Self {
            renderer,
            config,
            style: MapStyle::default(),
            records: Vec::new(),
            markers: Vec::new(),
            selected_code: None,
            interaction: InteractionState::default(),
            selection_handler: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> RiskMapConfig {
        self.config
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.config.surface
    }

    /// Resizes the target surface and re-projects every marker.
    pub fn set_surface(&mut self, surface: Surface) -> MapResult<()> {
        if surface == self.config.surface {
            return Ok(());
        }
        let config = RiskMapConfig {
            surface,
            ..self.config
        }
        .validate()?;
        self.markers = super::build_risk_markers(&self.records, config)?;
        self.config = config;
        debug!(width = surface.width, height = surface.height, "resized risk map");
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> &MapStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: MapStyle) -> MapResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    /// Builds the frame for the current records, selection and view.
    pub fn build_frame(&self) -> MapResult<RenderFrame> {
        let hovered = self
            .interaction
            .pointer()
            .and_then(|pointer| self.hit_test(pointer.x, pointer.y));
        build_render_frame(SceneInputs {
            surface: self.config.surface,
            view: self.interaction.view(),
            markers: &self.markers,
            selected: self.selected_index(),
            hovered,
            style: &self.style,
        })
    }

    pub fn render(&mut self) -> MapResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks while keeping the renderer decoupled from
    /// GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> MapResult<()>
    where
        R: crate::render::CairoContextRenderer,
    {
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
