//! risk-map: country risk markers on a world map.
//!
//! The crate resolves country codes to coordinates (always succeeding, with
//! deterministic synthesis for unknown codes), projects and stacks markers,
//! and materializes render frames for pluggable backends.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{RiskMap, RiskMapConfig, SelectionChanged};
pub use error::{MapError, MapResult};
