use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{RegionTag, Surface};
use crate::error::{MapError, MapResult};
use crate::interaction::ViewTransform;
use crate::render::Renderer;

use super::{RiskMap, RiskMarker};

/// Deterministic view of the engine state, suitable for fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub surface: Surface,
    pub view: ViewTransform,
    pub selected_country: Option<String>,
    pub markers: Vec<RiskMarker>,
    /// Marker count per region in first-seen order.
    pub region_counts: IndexMap<RegionTag, usize>,
}

impl<R: Renderer> RiskMap<R> {
    #[must_use]
    pub fn snapshot(&self) -> MapSnapshot {
        let mut region_counts = IndexMap::new();
        for marker in &self.markers {
            *region_counts.entry(marker.coordinate.region).or_insert(0) += 1;
        }
        MapSnapshot {
            surface: self.config.surface,
            view: self.interaction.view(),
            selected_country: self.selected_code.clone(),
            markers: self.markers.clone(),
            region_counts,
        }
    }

    pub fn snapshot_json_pretty(&self) -> MapResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| MapError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
