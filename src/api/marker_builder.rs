#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(not(feature = "parallel-projection"))]
use crate::core::CoordinateCache;
use crate::core::{
    CountryCoordinate, CountryRiskRecord, EquirectangularProjection, GeoPoint,
    MarkerRiskLevel, RegionStackCounter, RiskConfidence, RiskTrend, RiskUpdateSource,
    SurfacePoint, normalize_country_code, stack_offset,
};
use crate::error::MapResult;

use super::RiskMapConfig;

/// One placed country marker. Rebuilt from scratch on every pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMarker {
    /// Country code exactly as supplied by the host (trimmed).
    pub code: String,
    pub name: String,
    pub risk_level: MarkerRiskLevel,
    pub score: Option<f64>,
    pub trend: Option<RiskTrend>,
    pub confidence: Option<RiskConfidence>,
    pub update_source: Option<RiskUpdateSource>,
    pub coordinate: CountryCoordinate,
    /// Projected position before stacking.
    pub base_x: f64,
    pub base_y: f64,
    /// Surface position after stacking; the view transform is applied at draw time.
    pub screen_x: f64,
    pub screen_y: f64,
    pub stack_offset_index: usize,
}

impl RiskMarker {
    #[must_use]
    pub fn position(&self) -> SurfacePoint {
        SurfacePoint::new(self.screen_x, self.screen_y)
    }

    /// Case- and whitespace-insensitive code comparison.
    #[must_use]
    pub fn matches_code(&self, code: &str) -> bool {
        normalize_country_code(&self.code) == normalize_country_code(code)
    }

    /// One-line hover/selection summary.
    #[must_use]
    pub fn tooltip_text(&self) -> String {
        let score = self
            .score
            .map_or_else(|| "n/a".to_owned(), |score| format!("{score:.0}"));
        format!("{} · {} · {}", self.name, self.risk_level.label(), score)
    }
}

/// Resolves, projects and stacks markers for `records` in input order.
///
/// Records rejected by the configured data-source filter are skipped.
pub fn build_risk_markers(
    records: &[CountryRiskRecord],
    config: RiskMapConfig,
) -> MapResult<Vec<RiskMarker>> {
    let config = config.validate()?;
    let projection = EquirectangularProjection::new(config.surface)?;

    let admitted: Vec<&CountryRiskRecord> = records
        .iter()
        .filter(|record| config.data_source.admits(record.update_source))
        .collect();
    let coordinates = resolve_coordinates(&admitted);

    let mut counter = RegionStackCounter::new();
    let mut markers = Vec::with_capacity(admitted.len());
    for (record, coordinate) in admitted.iter().zip(coordinates) {
        let base = projection.project(GeoPoint::new(coordinate.latitude, coordinate.longitude))?;
        let stack_index = counter.next_index(coordinate.region);
        let (dx, dy) = stack_offset(stack_index, config.stacking);

        let code = record.country_code.trim().to_owned();
        let name = match record.country_name.trim() {
            "" => code.clone(),
            name => name.to_owned(),
        };
        markers.push(RiskMarker {
            code,
            name,
            risk_level: record.marker_level(config.derive_level_from_score),
            score: record.display_score(),
            trend: record.trend,
            confidence: record.confidence,
            update_source: record.update_source,
            coordinate,
            base_x: base.x,
            base_y: base.y,
            screen_x: base.x + dx,
            screen_y: base.y + dy,
            stack_offset_index: stack_index,
        });
    }

    debug!(
        input_count = records.len(),
        marker_count = markers.len(),
        region_count = counter.iter().count(),
        "built risk markers"
    );
    Ok(markers)
}

fn resolve_coordinates(records: &[&CountryRiskRecord]) -> Vec<CountryCoordinate> {
    // Resolution is pure, so the parallel path yields identical results.
    #[cfg(feature = "parallel-projection")]
    {
        records
            .par_iter()
            .map(|record| crate::core::resolve_country_coordinate(&record.country_code))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut cache = CoordinateCache::new();
        records
            .iter()
            .map(|record| cache.resolve(&record.country_code))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::build_risk_markers;
    use crate::api::RiskMapConfig;
    use crate::core::{CountryRiskRecord, MarkerRiskLevel, RiskLevel, Surface};

    #[test]
    fn blank_name_falls_back_to_code() {
        let records = vec![CountryRiskRecord::new(" de ", "  ")];
        let markers =
            build_risk_markers(&records, RiskMapConfig::new(Surface::new(720.0, 360.0)))
                .expect("markers");
        assert_eq!(markers[0].code, "de");
        assert_eq!(markers[0].name, "de");
    }

    #[test]
    fn tooltip_reports_level_and_score() {
        let records = vec![
            CountryRiskRecord::new("FR", "France")
                .with_score(64.4)
                .with_risk_level(RiskLevel::High),
            CountryRiskRecord::new("XX", "Nowhere"),
        ];
        let markers =
            build_risk_markers(&records, RiskMapConfig::default()).expect("markers");
        assert_eq!(markers[0].tooltip_text(), "France · High · 64");
        assert_eq!(markers[1].risk_level, MarkerRiskLevel::None);
        assert_eq!(markers[1].tooltip_text(), "Nowhere · No data · n/a");
    }
}
