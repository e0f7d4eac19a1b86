pub mod coordinates;
pub mod projection;
pub mod region;
pub mod risk;
pub mod shapes;
pub mod stacking;
pub mod types;

pub use coordinates::{
    CoordinateCache, CoordinateSource, CountryCoordinate, known_country_codes,
    normalize_country_code, resolve_country_coordinate, resolve_with_source,
};
pub use projection::EquirectangularProjection;
pub use region::{RegionTag, classify_by_first_letter, classify_membership};
pub use risk::{
    CountryRiskRecord, DataSourceFilter, MarkerRiskLevel, RiskConfidence, RiskLevel, RiskTrend,
    RiskUpdateSource,
};
pub use shapes::{GRATICULE_STEP_DEGREES, RegionShape, background_shapes, graticule_segments};
pub use stacking::{RegionStackCounter, StackingConfig, stack_offset};
pub use types::{GeoPoint, Surface, SurfacePoint};
