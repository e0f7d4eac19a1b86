use tracing::trace;

use crate::error::MapResult;
use crate::interaction::{InteractionMode, ViewTransform};
use crate::render::Renderer;

use super::{RiskMap, RiskMarker};

impl<R: Renderer> RiskMap<R> {
    #[must_use]
    pub fn view(&self) -> ViewTransform {
        self.interaction.view()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    pub fn zoom_in(&mut self) {
        self.interaction.view_mut().zoom_in(self.config.zoom);
        trace!(zoom = self.interaction.view().zoom, "zoom in");
    }

    pub fn zoom_out(&mut self) {
        self.interaction.view_mut().zoom_out(self.config.zoom);
        trace!(zoom = self.interaction.view().zoom, "zoom out");
    }

    /// Restores zoom 1 and zero pan.
    pub fn reset_view(&mut self) {
        self.interaction.view_mut().reset();
    }

    pub fn pan_by(&mut self, delta_x: f64, delta_y: f64) -> MapResult<()> {
        self.interaction.view_mut().pan_by(delta_x, delta_y)
    }

    pub fn pan_start(&mut self, x: f64, y: f64) {
        self.interaction.on_pan_start(x, y);
    }

    pub fn pan_update(&mut self, x: f64, y: f64) -> MapResult<()> {
        self.interaction.on_pan_update(x, y)
    }

    pub fn pan_end(&mut self) {
        self.interaction.on_pan_end();
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.interaction.on_pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Marker currently under the pointer, if any.
    #[must_use]
    pub fn hovered_marker(&self) -> Option<&RiskMarker> {
        let pointer = self.interaction.pointer()?;
        let index = self.hit_test(pointer.x, pointer.y)?;
        self.markers.get(index)
    }
}
