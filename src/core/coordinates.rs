//! Country code to map coordinate resolution.
//!
//! Resolution is total and pure: every input string yields a coordinate, and
//! the same input always yields the same coordinate. Codes missing from the
//! base table get a synthesized position near their region's anchor.

use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::region::{RegionTag, classify_by_first_letter, classify_membership};

const SYNTHESIS_LONGITUDE_SPAN_DEGREES: f64 = 60.0;
const SYNTHESIS_LATITUDE_SPAN_DEGREES: f64 = 6.0;
const PRINTABLE_FIRST: u32 = 0x20;
const PRINTABLE_LAST: u32 = 0x7E;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountryCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub region: RegionTag,
}

impl CountryCoordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, region: RegionTag) -> Self {
        Self {
            latitude,
            longitude,
            region,
        }
    }
}

/// Which path produced a resolved coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateSource {
    Table,
    Synthesized,
}

/// Trims surrounding whitespace and ASCII upper-cases the code.
#[must_use]
pub fn normalize_country_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Resolves a country identifier to a map coordinate.
#[must_use]
pub fn resolve_country_coordinate(code: &str) -> CountryCoordinate {
    resolve_with_source(code).0
}

/// Resolves a country identifier and reports whether the base table or the
/// synthesis fallback produced it.
#[must_use]
pub fn resolve_with_source(code: &str) -> (CountryCoordinate, CoordinateSource) {
    let normalized = normalize_country_code(code);
    if let Some(coordinate) = BASE_TABLE.get(normalized.as_str()) {
        return (*coordinate, CoordinateSource::Table);
    }

    let region =
        classify_membership(&normalized).unwrap_or_else(|| classify_by_first_letter(&normalized));
    let coordinate = synthesize(&normalized, region);
    trace!(
        code = %normalized,
        region = %region,
        latitude = coordinate.latitude,
        longitude = coordinate.longitude,
        "synthesized country coordinate"
    );
    (coordinate, CoordinateSource::Synthesized)
}

/// Codes present in the base coordinate table, in table order.
pub fn known_country_codes() -> impl Iterator<Item = &'static str> {
    BASE_COORDINATES.iter().map(|(code, ..)| *code)
}

fn synthesize(normalized: &str, region: RegionTag) -> CountryCoordinate {
    let anchor = region.anchor();
    let mut chars = normalized.chars();
    let longitude_offset = chars
        .next()
        .map_or(0.0, |c| band_offset(c, SYNTHESIS_LONGITUDE_SPAN_DEGREES));
    let latitude_offset = chars
        .next()
        .map_or(0.0, |c| band_offset(c, SYNTHESIS_LATITUDE_SPAN_DEGREES));

    CountryCoordinate {
        latitude: anchor.latitude + latitude_offset,
        longitude: anchor.longitude + longitude_offset,
        region,
    }
}

/// Maps a character onto `[-span/2, span/2)` by its code point.
///
/// Injective over printable ASCII; other characters clamp to the nearest
/// printable end. No character maps to exactly 0, which is reserved for a
/// missing character.
fn band_offset(c: char, span: f64) -> f64 {
    let code = u32::from(c).clamp(PRINTABLE_FIRST, PRINTABLE_LAST);
    let slots = f64::from(PRINTABLE_LAST - PRINTABLE_FIRST + 1);
    f64::from(code - PRINTABLE_FIRST) / slots * span - span * 0.5
}

/// Per-pass memo of resolved coordinates keyed by normalized code.
///
/// Safe only because resolution is pure; entries never go stale.
#[derive(Debug, Default, Clone)]
pub struct CoordinateCache {
    entries: IndexMap<String, CountryCoordinate>,
}

impl CoordinateCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, code: &str) -> CountryCoordinate {
        let normalized = normalize_country_code(code);
        if let Some(coordinate) = self.entries.get(&normalized) {
            return *coordinate;
        }
        let coordinate = resolve_country_coordinate(&normalized);
        self.entries.insert(normalized, coordinate);
        coordinate
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static BASE_TABLE: LazyLock<HashMap<&'static str, CountryCoordinate>> = LazyLock::new(|| {
    BASE_COORDINATES
        .iter()
        .map(|&(code, latitude, longitude, region)| {
            (code, CountryCoordinate::new(latitude, longitude, region))
        })
        .collect()
});

use super::region::RegionTag::{
    Africa, Americas, CentralAsia, EastAsia, Europe, MiddleEast, Oceania, SouthAsia, SoutheastAsia,
};

#[rustfmt::skip]
const BASE_COORDINATES: &[(&str, f64, f64, RegionTag)] = &[
    // Americas
    ("US", 38.0, -97.0, Americas),
    ("CA", 56.0, -106.0, Americas),
    ("MX", 23.0, -102.0, Americas),
    ("BR", -14.0, -51.0, Americas),
    ("AR", -38.0, -63.0, Americas),
    ("CL", -35.0, -71.0, Americas),
    ("CO", 4.0, -72.0, Americas),
    ("PE", -9.0, -75.0, Americas),
    ("VE", 6.0, -66.0, Americas),
    ("EC", -1.8, -78.0, Americas),
    ("BO", -16.0, -63.0, Americas),
    ("PY", -23.0, -58.0, Americas),
    ("UY", -33.0, -56.0, Americas),
    ("CU", 21.5, -77.8, Americas),
    ("DO", 18.7, -70.2, Americas),
    ("HT", 19.0, -72.3, Americas),
    ("JM", 18.1, -77.3, Americas),
    ("GT", 15.8, -90.2, Americas),
    ("HN", 15.2, -86.2, Americas),
    ("SV", 13.8, -88.9, Americas),
    ("NI", 12.9, -85.2, Americas),
    ("CR", 9.7, -83.8, Americas),
    ("PA", 8.5, -80.8, Americas),
    ("PR", 18.2, -66.6, Americas),
    ("TT", 10.7, -61.2, Americas),
    ("BS", 25.0, -77.4, Americas),
    ("BB", 13.2, -59.5, Americas),
    ("BZ", 17.2, -88.5, Americas),
    ("GY", 4.9, -58.9, Americas),
    ("SR", 3.9, -56.0, Americas),
    // Europe
    ("GB", 55.0, -3.0, Europe),
    ("IE", 53.0, -8.0, Europe),
    ("FR", 46.0, 2.0, Europe),
    ("DE", 51.0, 10.0, Europe),
    ("ES", 40.0, -4.0, Europe),
    ("PT", 39.4, -8.2, Europe),
    ("IT", 42.8, 12.8, Europe),
    ("NL", 52.1, 5.3, Europe),
    ("BE", 50.5, 4.5, Europe),
    ("LU", 49.8, 6.1, Europe),
    ("CH", 46.8, 8.2, Europe),
    ("AT", 47.5, 14.6, Europe),
    ("DK", 56.0, 10.0, Europe),
    ("NO", 60.5, 8.5, Europe),
    ("SE", 60.1, 18.6, Europe),
    ("FI", 61.9, 25.7, Europe),
    ("IS", 65.0, -19.0, Europe),
    ("PL", 52.0, 19.0, Europe),
    ("CZ", 49.8, 15.5, Europe),
    ("SK", 48.7, 19.7, Europe),
    ("HU", 47.2, 19.5, Europe),
    ("RO", 45.9, 25.0, Europe),
    ("BG", 42.7, 25.5, Europe),
    ("GR", 39.0, 22.0, Europe),
    ("HR", 45.1, 15.2, Europe),
    ("SI", 46.2, 15.0, Europe),
    ("RS", 44.0, 21.0, Europe),
    ("BA", 43.9, 17.7, Europe),
    ("ME", 42.7, 19.4, Europe),
    ("MK", 41.6, 21.7, Europe),
    ("AL", 41.2, 20.2, Europe),
    ("UA", 48.4, 31.2, Europe),
    ("BY", 53.7, 28.0, Europe),
    ("MD", 47.4, 28.4, Europe),
    ("LT", 55.2, 23.9, Europe),
    ("LV", 56.9, 24.6, Europe),
    ("EE", 58.6, 25.0, Europe),
    ("RU", 61.5, 105.3, Europe),
    ("MT", 35.9, 14.4, Europe),
    ("CY", 35.1, 33.4, Europe),
    // Africa
    ("ZA", -30.6, 22.9, Africa),
    ("NG", 9.1, 8.7, Africa),
    ("EG", 26.8, 30.8, Africa),
    ("KE", 0.0, 37.9, Africa),
    ("ET", 9.1, 40.5, Africa),
    ("GH", 7.9, -1.0, Africa),
    ("MA", 31.8, -7.1, Africa),
    ("DZ", 28.0, 1.7, Africa),
    ("TN", 33.9, 9.5, Africa),
    ("LY", 26.3, 17.2, Africa),
    ("SD", 12.9, 30.2, Africa),
    ("SS", 6.9, 31.3, Africa),
    ("TZ", -6.4, 34.9, Africa),
    ("UG", 1.4, 32.3, Africa),
    ("RW", -1.9, 29.9, Africa),
    ("CD", -4.0, 21.8, Africa),
    ("CG", -0.2, 15.8, Africa),
    ("AO", -11.2, 17.9, Africa),
    ("ZM", -13.1, 27.8, Africa),
    ("ZW", -19.0, 29.2, Africa),
    ("MZ", -18.7, 35.5, Africa),
    ("MW", -13.3, 34.3, Africa),
    ("BW", -22.3, 24.7, Africa),
    ("NA", -22.9, 18.5, Africa),
    ("MG", -18.8, 46.9, Africa),
    ("CM", 7.4, 12.4, Africa),
    ("CI", 7.5, -5.5, Africa),
    ("SN", 14.5, -14.5, Africa),
    ("ML", 17.6, -4.0, Africa),
    ("NE", 17.6, 8.1, Africa),
    ("BF", 12.2, -1.6, Africa),
    ("TD", 15.5, 18.7, Africa),
    ("SO", 5.2, 46.2, Africa),
    ("MR", 21.0, -10.9, Africa),
    ("GN", 9.9, -9.7, Africa),
    ("SL", 8.5, -11.8, Africa),
    ("LR", 6.4, -9.4, Africa),
    ("BJ", 9.3, 2.3, Africa),
    ("TG", 8.6, 0.8, Africa),
    ("GA", -0.8, 11.6, Africa),
    ("ER", 15.2, 39.8, Africa),
    ("DJ", 11.8, 42.6, Africa),
    ("MU", -20.3, 57.6, Africa),
    // Middle East
    ("SA", 23.9, 45.1, MiddleEast),
    ("AE", 23.4, 53.8, MiddleEast),
    ("QA", 25.4, 51.2, MiddleEast),
    ("KW", 29.3, 47.5, MiddleEast),
    ("BH", 26.0, 50.6, MiddleEast),
    ("OM", 21.5, 55.9, MiddleEast),
    ("YE", 15.6, 48.5, MiddleEast),
    ("IQ", 33.2, 43.7, MiddleEast),
    ("IR", 32.4, 53.7, MiddleEast),
    ("IL", 31.0, 34.9, MiddleEast),
    ("PS", 31.9, 35.2, MiddleEast),
    ("JO", 30.6, 36.2, MiddleEast),
    ("LB", 33.9, 35.9, MiddleEast),
    ("SY", 34.8, 39.0, MiddleEast),
    ("TR", 39.0, 35.2, MiddleEast),
    // South Asia
    ("IN", 20.6, 78.9, SouthAsia),
    ("PK", 30.4, 69.3, SouthAsia),
    ("BD", 23.7, 90.4, SouthAsia),
    ("LK", 7.9, 80.8, SouthAsia),
    ("NP", 28.4, 84.1, SouthAsia),
    ("BT", 27.5, 90.4, SouthAsia),
    ("MV", 3.2, 73.2, SouthAsia),
    ("AF", 33.9, 67.7, SouthAsia),
    // Southeast Asia
    ("SG", 1.3, 103.8, SoutheastAsia),
    ("MY", 4.2, 102.0, SoutheastAsia),
    ("ID", -0.8, 113.9, SoutheastAsia),
    ("TH", 15.9, 101.0, SoutheastAsia),
    ("VN", 14.1, 108.3, SoutheastAsia),
    ("PH", 12.9, 121.8, SoutheastAsia),
    ("MM", 21.9, 96.0, SoutheastAsia),
    ("KH", 12.6, 105.0, SoutheastAsia),
    ("LA", 19.9, 102.5, SoutheastAsia),
    ("BN", 4.5, 114.7, SoutheastAsia),
    ("TL", -8.9, 125.7, SoutheastAsia),
    // Central Asia
    ("KZ", 48.0, 66.9, CentralAsia),
    ("UZ", 41.4, 64.6, CentralAsia),
    ("TM", 39.0, 59.6, CentralAsia),
    ("KG", 41.2, 74.8, CentralAsia),
    ("TJ", 38.9, 71.3, CentralAsia),
    ("AZ", 40.1, 47.6, CentralAsia),
    ("GE", 42.3, 43.4, CentralAsia),
    ("AM", 40.1, 45.0, CentralAsia),
    // East Asia
    ("CN", 35.9, 104.2, EastAsia),
    ("JP", 36.2, 138.3, EastAsia),
    ("KR", 35.9, 127.8, EastAsia),
    ("TW", 23.7, 121.0, EastAsia),
    ("HK", 22.3, 114.2, EastAsia),
    ("MN", 46.9, 103.8, EastAsia),
    // Oceania
    ("AU", -25.3, 133.8, Oceania),
    ("NZ", -40.9, 174.9, Oceania),
    ("PG", -6.3, 144.0, Oceania),
    ("FJ", -17.7, 178.1, Oceania),
    ("SB", -9.6, 160.2, Oceania),
    ("VU", -15.4, 167.0, Oceania),
    ("WS", -13.8, -172.1, Oceania),
    ("TO", -21.2, -175.2, Oceania),
];

#[cfg(test)]
mod tests {
    use super::{BASE_COORDINATES, band_offset, normalize_country_code};

    #[test]
    fn base_table_has_unique_codes() {
        let mut codes: Vec<&str> = BASE_COORDINATES.iter().map(|(code, ..)| *code).collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
        assert!(total >= 150);
    }

    #[test]
    fn band_offset_stays_in_range_and_never_hits_zero() {
        let mut seen = Vec::new();
        for code in 0x20u8..=0x7E {
            let offset = band_offset(char::from(code), 60.0);
            assert!((-30.0..30.0).contains(&offset), "{code:#x}");
            assert_ne!(offset, 0.0, "{code:#x}");
            seen.push(offset);
        }
        seen.dedup();
        assert_eq!(seen.len(), 95);
        assert_eq!(band_offset('\u{7}', 6.0), band_offset(' ', 6.0));
        assert_eq!(band_offset('é', 6.0), band_offset('~', 6.0));
    }

    #[test]
    fn normalization_trims_and_uppercases() {
        assert_eq!(normalize_country_code("  gb\t"), "GB");
        assert_eq!(normalize_country_code(""), "");
    }
}
