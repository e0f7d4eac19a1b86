use serde::{Deserialize, Serialize};

use crate::core::{DataSourceFilter, StackingConfig, Surface};
use crate::error::{MapError, MapResult};
use crate::interaction::ZoomConfig;

/// Public map bootstrap configuration.
///
/// Serializable so host dashboards can persist/load map setup. Missing fields
/// fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMapConfig {
    pub surface: Surface,
    #[serde(default)]
    pub stacking: StackingConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    /// Fill a missing `risk_level` from `overall_score` thresholds.
    #[serde(default)]
    pub derive_level_from_score: bool,
    #[serde(default)]
    pub data_source: DataSourceFilter,
}

impl Default for RiskMapConfig {
    fn default() -> Self {
        Self::new(Surface::default())
    }
}

impl RiskMapConfig {
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            stacking: StackingConfig::default(),
            zoom: ZoomConfig::default(),
            derive_level_from_score: false,
            data_source: DataSourceFilter::All,
        }
    }

    #[must_use]
    pub fn with_stacking(mut self, stacking: StackingConfig) -> Self {
        self.stacking = stacking;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomConfig) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_derive_level_from_score(mut self, enabled: bool) -> Self {
        self.derive_level_from_score = enabled;
        self
    }

    #[must_use]
    pub fn with_data_source(mut self, filter: DataSourceFilter) -> Self {
        self.data_source = filter;
        self
    }

    pub fn validate(self) -> MapResult<Self> {
        if !self.surface.is_valid() {
            return Err(MapError::InvalidSurface {
                width: self.surface.width,
                height: self.surface.height,
            });
        }
        self.stacking.validate()?;
        self.zoom.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(self) -> MapResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| MapError::InvalidData(format!("failed to serialize map config: {e}")))
    }

    pub fn from_json_str(input: &str) -> MapResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| MapError::InvalidData(format!("failed to parse map config: {e}")))?;
        config.validate()
    }
}
