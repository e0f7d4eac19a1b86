mod data_controller;
mod engine;
mod interaction_controller;
mod json_contract;
mod legend;
mod map_config;
mod map_style;
mod marker_builder;
mod scene_builder;
mod selection_controller;
mod snapshot;

pub use engine::RiskMap;
pub use json_contract::{
    MAP_SNAPSHOT_JSON_SCHEMA_V1, MapCountriesPayload, MapSnapshotJsonContractV1,
    parse_risk_records_json,
};
pub use legend::{LEGEND_ORDER, LegendEntry, legend_entries};
pub use map_config::RiskMapConfig;
pub use map_style::{MapStyle, RiskPalette};
pub use marker_builder::{RiskMarker, build_risk_markers};
pub use scene_builder::{SceneInputs, build_render_frame};
pub use selection_controller::SelectionChanged;
pub use snapshot::MapSnapshot;
