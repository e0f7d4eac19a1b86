use serde::{Deserialize, Serialize};

use crate::core::{Surface, SurfacePoint};
use crate::error::{MapError, MapResult};

const ZOOM_ROUNDING: f64 = 1e9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Limits and increment for explicit zoom-in/zoom-out actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 0.6,
            max: 2.6,
            step: 0.2,
        }
    }
}

impl ZoomConfig {
    pub fn validate(self) -> MapResult<Self> {
        for (value, name) in [(self.min, "min"), (self.max, "max"), (self.step, "step")] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MapError::InvalidConfig(format!(
                    "zoom `{name}` must be finite and > 0"
                )));
            }
        }
        if !(self.min <= 1.0 && 1.0 <= self.max) {
            return Err(MapError::InvalidConfig(
                "zoom range must contain the reset factor 1.0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Pan/zoom view state applied on top of projected surface coordinates.
///
/// The transform scales about the surface centre, then translates by the pan.
/// Projected marker positions are never touched by it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::identity()
    }

    pub fn zoom_in(&mut self, config: ZoomConfig) {
        self.zoom = step_zoom(self.zoom, config.step, config);
    }

    pub fn zoom_out(&mut self, config: ZoomConfig) {
        self.zoom = step_zoom(self.zoom, -config.step, config);
    }

    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Translates the view by a screen-space delta.
    pub fn pan_by(&mut self, delta_x: f64, delta_y: f64) -> MapResult<()> {
        if !delta_x.is_finite() || !delta_y.is_finite() {
            return Err(MapError::InvalidData("pan delta must be finite".to_owned()));
        }
        let pan_x = self.pan_x + delta_x;
        let pan_y = self.pan_y + delta_y;
        if !pan_x.is_finite() || !pan_y.is_finite() {
            return Err(MapError::InvalidData(
                "pan offset overflowed to a non-finite value".to_owned(),
            ));
        }
        self.pan_x = pan_x;
        self.pan_y = pan_y;
        Ok(())
    }

    /// Maps a surface point to its on-screen position.
    #[must_use]
    pub fn apply(self, point: SurfacePoint, surface: Surface) -> SurfacePoint {
        let center = surface.center();
        SurfacePoint {
            x: center.x + (point.x - center.x) * self.zoom + self.pan_x,
            y: center.y + (point.y - center.y) * self.zoom + self.pan_y,
        }
    }

    /// Maps an on-screen position back to surface coordinates.
    #[must_use]
    pub fn invert(self, point: SurfacePoint, surface: Surface) -> SurfacePoint {
        let center = surface.center();
        SurfacePoint {
            x: center.x + (point.x - self.pan_x - center.x) / self.zoom,
            y: center.y + (point.y - self.pan_y - center.y) / self.zoom,
        }
    }
}

fn step_zoom(current: f64, delta: f64, config: ZoomConfig) -> f64 {
    let next = ((current + delta) * ZOOM_ROUNDING).round() / ZOOM_ROUNDING;
    if next.is_finite() {
        next.clamp(config.min, config.max)
    } else {
        current
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    view: ViewTransform,
    pointer: Option<SurfacePoint>,
    drag_anchor: Option<SurfacePoint>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            view: ViewTransform::identity(),
            pointer: None,
            drag_anchor: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn view(self) -> ViewTransform {
        self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    /// Last pointer position in screen coordinates, if the pointer is over the map.
    #[must_use]
    pub fn pointer(self) -> Option<SurfacePoint> {
        self.pointer
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = Some(SurfacePoint::new(x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
    }

    pub fn on_pan_start(&mut self, x: f64, y: f64) {
        self.mode = InteractionMode::Panning;
        self.drag_anchor = Some(SurfacePoint::new(x, y));
    }

    /// Moves the view by the pointer delta since the last drag update.
    ///
    /// Ignored unless a pan is in progress.
    pub fn on_pan_update(&mut self, x: f64, y: f64) -> MapResult<()> {
        let Some(anchor) = self.drag_anchor else {
            return Ok(());
        };
        self.view.pan_by(x - anchor.x, y - anchor.y)?;
        self.drag_anchor = Some(SurfacePoint::new(x, y));
        Ok(())
    }

    pub fn on_pan_end(&mut self) {
        self.mode = InteractionMode::Idle;
        self.drag_anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionMode, InteractionState, ViewTransform, ZoomConfig};
    use crate::core::{Surface, SurfacePoint};

    #[test]
    fn zoom_steps_do_not_drift() {
        let config = ZoomConfig::default();
        let mut view = ViewTransform::identity();
        for _ in 0..3 {
            view.zoom_in(config);
        }
        assert_eq!(view.zoom, 1.6);
        for _ in 0..3 {
            view.zoom_out(config);
        }
        assert_eq!(view.zoom, 1.0);
    }

    #[test]
    fn zoom_range_must_contain_unity() {
        let config = ZoomConfig {
            min: 1.2,
            max: 2.0,
            step: 0.2,
        };
        assert!(config.validate().is_err());
        assert!(ZoomConfig::default().validate().is_ok());
    }

    #[test]
    fn drag_pan_accumulates_deltas() {
        let mut state = InteractionState::default();
        state.on_pan_start(10.0, 10.0);
        assert_eq!(state.mode(), InteractionMode::Panning);
        state.on_pan_update(15.0, 8.0).expect("update");
        state.on_pan_update(20.0, 8.0).expect("update");
        state.on_pan_end();
        assert_eq!(state.mode(), InteractionMode::Idle);
        assert_eq!(state.view().pan_x, 10.0);
        assert_eq!(state.view().pan_y, -2.0);

        state.on_pan_update(100.0, 100.0).expect("ignored");
        assert_eq!(state.view().pan_x, 10.0);
    }

    #[test]
    fn apply_and_invert_are_inverse() {
        let surface = Surface::new(800.0, 400.0);
        let view = ViewTransform {
            zoom: 1.8,
            pan_x: -35.0,
            pan_y: 12.5,
        };
        let point = SurfacePoint::new(123.0, 321.0);
        let back = view.invert(view.apply(point, surface), surface);
        assert!((back.x - point.x).abs() <= 1e-9);
        assert!((back.y - point.y).abs() <= 1e-9);
    }
}
