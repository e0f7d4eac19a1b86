use serde::{Deserialize, Serialize};

use crate::core::CountryRiskRecord;
use crate::error::{MapError, MapResult};
use crate::render::Renderer;

use super::{MapSnapshot, RiskMap};

pub const MAP_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: MapSnapshot,
}

/// Dashboard response shape carrying the map entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapCountriesPayload {
    pub map_countries: Vec<CountryRiskRecord>,
}

impl MapSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> MapResult<String> {
        let payload = MapSnapshotJsonContractV1 {
            schema_version: MAP_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            MapError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> MapResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<MapSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: MapSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            MapError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != MAP_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(MapError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

/// Parses risk records from either a bare JSON array or a
/// `{"map_countries": [...]}` dashboard payload.
pub fn parse_risk_records_json(input: &str) -> MapResult<Vec<CountryRiskRecord>> {
    if input.trim_start().starts_with('[') {
        return serde_json::from_str::<Vec<CountryRiskRecord>>(input).map_err(|e| {
            MapError::InvalidData(format!("failed to parse risk records json: {e}"))
        });
    }
    let payload: MapCountriesPayload = serde_json::from_str(input)
        .map_err(|e| MapError::InvalidData(format!("failed to parse risk records json: {e}")))?;
    Ok(payload.map_countries)
}

impl<R: Renderer> RiskMap<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> MapResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
