use crate::core::MarkerRiskLevel;
use crate::render::Color;

use super::MapStyle;

/// Display order of the legend; independent of the current dataset.
pub const LEGEND_ORDER: [MarkerRiskLevel; 5] = [
    MarkerRiskLevel::Low,
    MarkerRiskLevel::Medium,
    MarkerRiskLevel::High,
    MarkerRiskLevel::Critical,
    MarkerRiskLevel::None,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub level: MarkerRiskLevel,
    pub label: &'static str,
    pub color: Color,
}

#[must_use]
pub fn legend_entries(style: &MapStyle) -> [LegendEntry; 5] {
    LEGEND_ORDER.map(|level| LegendEntry {
        level,
        label: level.label(),
        color: style.risk_color(level),
    })
}

#[cfg(test)]
mod tests {
    use super::legend_entries;
    use crate::api::MapStyle;
    use crate::core::MarkerRiskLevel;

    #[test]
    fn legend_lists_every_level_once() {
        let entries = legend_entries(&MapStyle::default());
        let labels: Vec<&str> = entries.iter().map(|entry| entry.label).collect();
        assert_eq!(labels, ["Low", "Medium", "High", "Critical", "No data"]);
        assert_eq!(entries[4].level, MarkerRiskLevel::None);
    }
}
