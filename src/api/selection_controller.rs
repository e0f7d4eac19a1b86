use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::SurfacePoint;
use crate::render::Renderer;

use super::RiskMap;
use super::hit_test::find_marker_at;

/// Emitted when the user clicks a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChanged {
    /// Country code as supplied in the record.
    pub country_code: String,
}

impl<R: Renderer> RiskMap<R> {
    /// Sets the externally controlled selection. Matching is case-insensitive;
    /// unknown codes are kept and simply highlight nothing.
    pub fn set_selected_country(&mut self, code: Option<&str>) {
        self.selected_code = code
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_owned);
    }

    #[must_use]
    pub fn selected_country(&self) -> Option<&str> {
        self.selected_code.as_deref()
    }

    #[must_use]
    pub fn selected_marker_index(&self) -> Option<usize> {
        self.selected_index()
    }

    pub(super) fn selected_index(&self) -> Option<usize> {
        let code = self.selected_code.as_deref()?;
        self.markers.iter().position(|marker| marker.matches_code(code))
    }

    /// Registers the callback that receives [`SelectionChanged`] events.
    pub fn set_selection_handler<F>(&mut self, handler: F)
    where
        F: FnMut(&SelectionChanged) + 'static,
    {
        self.selection_handler = Some(Box::new(handler));
    }

    pub fn clear_selection_handler(&mut self) {
        self.selection_handler = None;
    }

    /// Marker under the screen point `(x, y)`, honouring the current view.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let surface_point =
            self.interaction
                .view()
                .invert(SurfacePoint::new(x, y), self.config.surface);
        let selected = self.selected_index();
        let style = &self.style;
        find_marker_at(&self.markers, surface_point, |index| {
            if Some(index) == selected {
                style.selected_marker_radius_px + 0.5 * style.selected_marker_stroke_width
            } else {
                style.marker_radius_px + 0.5 * style.marker_stroke_width
            }
        })
    }

    /// Handles a click at screen point `(x, y)`.
    ///
    /// Emits [`SelectionChanged`] with the clicked marker's code and returns
    /// it. The selection itself stays host-controlled.
    pub fn click(&mut self, x: f64, y: f64) -> Option<SelectionChanged> {
        let index = self.hit_test(x, y)?;
        let event = SelectionChanged {
            country_code: self.markers[index].code.clone(),
        };
        debug!(country_code = %event.country_code, "marker clicked");
        if let Some(handler) = self.selection_handler.as_mut() {
            handler(&event);
        }
        Some(event)
    }
}
