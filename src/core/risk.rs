use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Derives a level from an overall score on the 0..=100 scale.
    ///
    /// Returns `None` for missing or non-finite scores.
    #[must_use]
    pub fn from_score(score: Option<f64>) -> Option<Self> {
        let score = score.filter(|value| value.is_finite())?;
        Some(if score >= 76.0 {
            RiskLevel::Critical
        } else if score >= 51.0 {
            RiskLevel::High
        } else if score >= 26.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTrend {
    Improving,
    Stable,
    Deteriorating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskConfidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskUpdateSource {
    Manual,
    ExternalData,
    AiAnalysis,
    /// Any label this crate does not recognise.
    #[serde(other)]
    Other,
}

/// Display level of a marker. `None` marks records without a risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRiskLevel {
    Low,
    Medium,
    High,
    Critical,
    None,
}

impl MarkerRiskLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MarkerRiskLevel::Low => "Low",
            MarkerRiskLevel::Medium => "Medium",
            MarkerRiskLevel::High => "High",
            MarkerRiskLevel::Critical => "Critical",
            MarkerRiskLevel::None => "No data",
        }
    }
}

impl From<Option<RiskLevel>> for MarkerRiskLevel {
    fn from(level: Option<RiskLevel>) -> Self {
        match level {
            Some(RiskLevel::Low) => MarkerRiskLevel::Low,
            Some(RiskLevel::Medium) => MarkerRiskLevel::Medium,
            Some(RiskLevel::High) => MarkerRiskLevel::High,
            Some(RiskLevel::Critical) => MarkerRiskLevel::Critical,
            None => MarkerRiskLevel::None,
        }
    }
}

/// One country row supplied by the hosting dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRiskRecord {
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub trend: Option<RiskTrend>,
    #[serde(default)]
    pub confidence: Option<RiskConfidence>,
    #[serde(default)]
    pub update_source: Option<RiskUpdateSource>,
}

impl CountryRiskRecord {
    #[must_use]
    pub fn new(country_code: impl Into<String>, country_name: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            country_name: country_name.into(),
            overall_score: None,
            risk_level: None,
            trend: None,
            confidence: None,
            update_source: None,
        }
    }

    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.overall_score = Some(score);
        self
    }

    #[must_use]
    pub fn with_risk_level(mut self, level: RiskLevel) -> Self {
        self.risk_level = Some(level);
        self
    }

    #[must_use]
    pub fn with_trend(mut self, trend: RiskTrend) -> Self {
        self.trend = Some(trend);
        self
    }

    #[must_use]
    pub fn with_confidence(mut self, confidence: RiskConfidence) -> Self {
        self.confidence = Some(confidence);
        self
    }

    #[must_use]
    pub fn with_update_source(mut self, source: RiskUpdateSource) -> Self {
        self.update_source = Some(source);
        self
    }

    /// Level used for display. When `derive_from_score` is set, a missing level
    /// falls back to the score thresholds.
    #[must_use]
    pub fn marker_level(&self, derive_from_score: bool) -> MarkerRiskLevel {
        let level = match self.risk_level {
            Some(level) => Some(level),
            None if derive_from_score => RiskLevel::from_score(self.overall_score),
            None => None,
        };
        MarkerRiskLevel::from(level)
    }

    /// Score usable for display: finite and clamped into `0..=100`.
    #[must_use]
    pub fn display_score(&self) -> Option<f64> {
        self.overall_score
            .filter(|score| score.is_finite())
            .map(|score| score.clamp(0.0, 100.0))
    }
}

/// Which update sources a map view admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceFilter {
    #[default]
    All,
    /// Manual entries and AI analysis.
    Internal,
    /// External data feeds only.
    External,
}

impl DataSourceFilter {
    /// Records without a recognised update source always pass.
    #[must_use]
    pub fn admits(self, source: Option<RiskUpdateSource>) -> bool {
        let Some(source) = source.filter(|source| *source != RiskUpdateSource::Other) else {
            return true;
        };
        match self {
            DataSourceFilter::All => true,
            DataSourceFilter::Internal => matches!(
                source,
                RiskUpdateSource::Manual | RiskUpdateSource::AiAnalysis
            ),
            DataSourceFilter::External => source == RiskUpdateSource::ExternalData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CountryRiskRecord, DataSourceFilter, MarkerRiskLevel, RiskLevel, RiskUpdateSource,
    };

    #[test]
    fn score_thresholds_match_dashboard_bands() {
        assert_eq!(RiskLevel::from_score(Some(76.0)), Some(RiskLevel::Critical));
        assert_eq!(RiskLevel::from_score(Some(75.9)), Some(RiskLevel::High));
        assert_eq!(RiskLevel::from_score(Some(51.0)), Some(RiskLevel::High));
        assert_eq!(RiskLevel::from_score(Some(26.0)), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::from_score(Some(25.0)), Some(RiskLevel::Low));
        assert_eq!(RiskLevel::from_score(None), None);
        assert_eq!(RiskLevel::from_score(Some(f64::NAN)), None);
    }

    #[test]
    fn missing_level_stays_none_unless_derivation_enabled() {
        let record = CountryRiskRecord::new("FR", "France").with_score(80.0);
        assert_eq!(record.marker_level(false), MarkerRiskLevel::None);
        assert_eq!(record.marker_level(true), MarkerRiskLevel::Critical);

        let explicit = record.clone().with_risk_level(RiskLevel::Low);
        assert_eq!(explicit.marker_level(true), MarkerRiskLevel::Low);
    }

    #[test]
    fn data_source_filter_partitions_sources() {
        assert!(DataSourceFilter::Internal.admits(Some(RiskUpdateSource::Manual)));
        assert!(DataSourceFilter::Internal.admits(Some(RiskUpdateSource::AiAnalysis)));
        assert!(!DataSourceFilter::Internal.admits(Some(RiskUpdateSource::ExternalData)));
        assert!(DataSourceFilter::External.admits(Some(RiskUpdateSource::ExternalData)));
        assert!(!DataSourceFilter::External.admits(Some(RiskUpdateSource::Manual)));
        assert!(DataSourceFilter::External.admits(None));
        assert!(DataSourceFilter::All.admits(Some(RiskUpdateSource::Manual)));
    }

    #[test]
    fn unrecognised_update_source_degrades_to_other() {
        let json = r#"{"country_code": "FR", "update_source": "import"}"#;
        let record: CountryRiskRecord = serde_json::from_str(json).expect("record");
        assert_eq!(record.update_source, Some(RiskUpdateSource::Other));
        assert!(DataSourceFilter::Internal.admits(record.update_source));
        assert!(DataSourceFilter::External.admits(record.update_source));
    }

    #[test]
    fn record_deserializes_with_nullable_fields() {
        let json = r#"{
            "country_code": "XX",
            "country_name": "Unknown",
            "overall_score": null,
            "risk_level": null,
            "trend": "deteriorating",
            "confidence": "high",
            "update_source": "external_data"
        }"#;
        let record: CountryRiskRecord = serde_json::from_str(json).expect("record");
        assert_eq!(record.country_code, "XX");
        assert!(record.risk_level.is_none());
        assert_eq!(record.update_source, Some(RiskUpdateSource::ExternalData));
    }
}
