use tracing::debug;

use crate::core::CountryRiskRecord;
use crate::error::MapResult;
use crate::render::Renderer;

use super::{RiskMap, RiskMarker, build_risk_markers};

impl<R: Renderer> RiskMap<R> {
    /// Replaces the record set and rebuilds every marker from scratch.
    ///
    /// On error the previous records and markers are kept. The selection is
    /// host-owned and is left untouched.
    pub fn set_records(&mut self, records: Vec<CountryRiskRecord>) -> MapResult<()> {
        let markers = build_risk_markers(&records, self.config)?;
        debug!(
            record_count = records.len(),
            marker_count = markers.len(),
            "set risk records"
        );
        self.records = records;
        self.markers = markers;
        Ok(())
    }

    /// Parses a records payload (see [`super::parse_risk_records_json`]) and
    /// applies it.
    pub fn set_records_json(&mut self, input: &str) -> MapResult<()> {
        let records = super::parse_risk_records_json(input)?;
        self.set_records(records)
    }

    #[must_use]
    pub fn records(&self) -> &[CountryRiskRecord] {
        &self.records
    }

    #[must_use]
    pub fn markers(&self) -> &[RiskMarker] {
        &self.markers
    }

    #[must_use]
    pub fn marker(&self, code: &str) -> Option<&RiskMarker> {
        self.markers.iter().find(|marker| marker.matches_code(code))
    }
}
