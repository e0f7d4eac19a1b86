use crate::core::types::{GeoPoint, Surface, SurfacePoint};
use crate::error::{MapError, MapResult};

/// Stylized equirectangular mapping from degrees to surface pixels.
///
/// `x = (lon + 180) / 360 * width`, `y = (90 - lat) / 180 * height`.
/// Markers and background outlines share this transform so they always line up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquirectangularProjection {
    surface: Surface,
}

impl EquirectangularProjection {
    pub fn new(surface: Surface) -> MapResult<Self> {
        if !surface.is_valid() {
            return Err(MapError::InvalidSurface {
                width: surface.width,
                height: surface.height,
            });
        }
        Ok(Self { surface })
    }

    #[must_use]
    pub fn surface(self) -> Surface {
        self.surface
    }

    pub fn project(self, point: GeoPoint) -> MapResult<SurfacePoint> {
        if !point.latitude.is_finite() || !point.longitude.is_finite() {
            return Err(MapError::InvalidData(
                "latitude and longitude must be finite".to_owned(),
            ));
        }

        Ok(SurfacePoint {
            x: (point.longitude + 180.0) / 360.0 * self.surface.width,
            y: (90.0 - point.latitude) / 180.0 * self.surface.height,
        })
    }

    pub fn unproject(self, point: SurfacePoint) -> MapResult<GeoPoint> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(MapError::InvalidData(
                "surface point must be finite".to_owned(),
            ));
        }

        Ok(GeoPoint {
            latitude: 90.0 - point.y / self.surface.height * 180.0,
            longitude: point.x / self.surface.width * 360.0 - 180.0,
        })
    }
}
