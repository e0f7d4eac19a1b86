use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::region::RegionTag;
use crate::error::{MapError, MapResult};

/// Grid used to spread markers that share a region.
///
/// Markers fill `columns` slots per row and `rows` rows, then wrap back onto
/// the grid with a sub-step shift so positions stay bounded and distinct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackingConfig {
    pub step_px: f64,
    pub centering_px: f64,
    pub columns: usize,
    pub rows: usize,
}

impl Default for StackingConfig {
    fn default() -> Self {
        Self {
            step_px: 6.0,
            centering_px: 9.0,
            columns: 4,
            rows: 4,
        }
    }
}

impl StackingConfig {
    pub fn validate(self) -> MapResult<Self> {
        if !self.step_px.is_finite() || self.step_px <= 0.0 {
            return Err(MapError::InvalidConfig(
                "stacking `step_px` must be finite and > 0".to_owned(),
            ));
        }
        if !self.centering_px.is_finite() {
            return Err(MapError::InvalidConfig(
                "stacking `centering_px` must be finite".to_owned(),
            ));
        }
        if self.columns == 0 || self.rows == 0 {
            return Err(MapError::InvalidConfig(
                "stacking grid must have at least one column and one row".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn slots_per_layer(self) -> usize {
        self.columns * self.rows
    }

    /// Inclusive lower and exclusive upper bound of any offset on either axis.
    #[must_use]
    pub fn offset_bounds(self) -> (f64, f64) {
        let span = self.columns.max(self.rows).saturating_sub(1) as f64 * self.step_px;
        (
            -self.centering_px,
            span - self.centering_px + 0.5 * self.step_px,
        )
    }
}

/// Offset of the `index`-th marker placed in one region during a pass.
///
/// The first `columns * rows` markers form a grid separated by `step_px`.
/// Later markers reuse the grid shifted by less than half a step, with a
/// distinct shift per wrap.
#[must_use]
pub fn stack_offset(index: usize, config: StackingConfig) -> (f64, f64) {
    let columns = config.columns.max(1);
    let slots = columns * config.rows.max(1);
    let slot = index % slots;
    let layer = index / slots;
    let column = slot % columns;
    let row = slot / columns;
    let shift = 0.5 * config.step_px * radical_inverse(layer);

    (
        column as f64 * config.step_px - config.centering_px + shift,
        row as f64 * config.step_px - config.centering_px + shift,
    )
}

/// Base-2 radical inverse: maps distinct integers to distinct values in `[0, 1)`.
fn radical_inverse(value: usize) -> f64 {
    let bits = (value as u64).reverse_bits() >> 11;
    bits as f64 / 2f64.powi(53)
}

/// Counts markers already placed per region in the current pass.
#[derive(Debug, Clone, Default)]
pub struct RegionStackCounter {
    counts: IndexMap<RegionTag, usize>,
}

impl RegionStackCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stacking index for the next marker in `region`.
    pub fn next_index(&mut self, region: RegionTag) -> usize {
        let count = self.counts.entry(region).or_insert(0);
        let index = *count;
        *count += 1;
        index
    }

    #[must_use]
    pub fn count(&self, region: RegionTag) -> usize {
        self.counts.get(&region).copied().unwrap_or(0)
    }

    /// Regions in first-placement order with their marker counts.
    pub fn iter(&self) -> impl Iterator<Item = (RegionTag, usize)> + '_ {
        self.counts.iter().map(|(region, count)| (*region, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::{RegionStackCounter, StackingConfig, radical_inverse, stack_offset};
    use crate::core::RegionTag;

    #[test]
    fn first_row_steps_horizontally() {
        let config = StackingConfig::default();
        assert_eq!(stack_offset(0, config), (-9.0, -9.0));
        assert_eq!(stack_offset(1, config), (-3.0, -9.0));
        assert_eq!(stack_offset(3, config), (9.0, -9.0));
        assert_eq!(stack_offset(4, config), (-9.0, -3.0));
    }

    #[test]
    fn radical_inverse_stays_in_unit_interval() {
        assert_eq!(radical_inverse(0), 0.0);
        assert_eq!(radical_inverse(1), 0.5);
        assert_eq!(radical_inverse(2), 0.25);
        assert_eq!(radical_inverse(3), 0.75);
        for value in 0..1_000 {
            let inverse = radical_inverse(value);
            assert!((0.0..1.0).contains(&inverse));
        }
    }

    #[test]
    fn counter_tracks_regions_independently() {
        let mut counter = RegionStackCounter::new();
        assert_eq!(counter.next_index(RegionTag::Europe), 0);
        assert_eq!(counter.next_index(RegionTag::Europe), 1);
        assert_eq!(counter.next_index(RegionTag::Africa), 0);
        assert_eq!(counter.count(RegionTag::Europe), 2);
        assert_eq!(counter.count(RegionTag::Oceania), 0);
    }

    #[test]
    fn invalid_grid_is_rejected() {
        let config = StackingConfig {
            columns: 0,
            ..StackingConfig::default()
        };
        assert!(config.validate().is_err());

        let config = StackingConfig {
            step_px: f64::NAN,
            ..StackingConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
