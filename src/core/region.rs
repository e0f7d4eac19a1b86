use serde::{Deserialize, Serialize};

use super::types::GeoPoint;

/// Coarse geographic bucket used for marker layout and coordinate synthesis.
///
/// Not a geopolitical classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionTag {
    Americas,
    Europe,
    Africa,
    Asia,
    MiddleEast,
    SouthAsia,
    SoutheastAsia,
    CentralAsia,
    EastAsia,
    Oceania,
}

impl RegionTag {
    /// Membership classification order. The first set containing a code wins.
    pub const ALL: [RegionTag; 10] = [
        RegionTag::Americas,
        RegionTag::Europe,
        RegionTag::Africa,
        RegionTag::Asia,
        RegionTag::MiddleEast,
        RegionTag::SouthAsia,
        RegionTag::SoutheastAsia,
        RegionTag::CentralAsia,
        RegionTag::EastAsia,
        RegionTag::Oceania,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RegionTag::Americas => "americas",
            RegionTag::Europe => "europe",
            RegionTag::Africa => "africa",
            RegionTag::Asia => "asia",
            RegionTag::MiddleEast => "middleEast",
            RegionTag::SouthAsia => "southAsia",
            RegionTag::SoutheastAsia => "southeastAsia",
            RegionTag::CentralAsia => "centralAsia",
            RegionTag::EastAsia => "eastAsia",
            RegionTag::Oceania => "oceania",
        }
    }

    /// Default centroid used as the base point for synthesized coordinates.
    #[must_use]
    pub const fn anchor(self) -> GeoPoint {
        match self {
            RegionTag::Americas => GeoPoint::new(15.0, -80.0),
            RegionTag::Europe => GeoPoint::new(50.0, 10.0),
            RegionTag::Africa => GeoPoint::new(5.0, 20.0),
            RegionTag::Asia => GeoPoint::new(35.0, 100.0),
            RegionTag::MiddleEast => GeoPoint::new(28.0, 45.0),
            RegionTag::SouthAsia => GeoPoint::new(22.0, 78.0),
            RegionTag::SoutheastAsia => GeoPoint::new(5.0, 110.0),
            RegionTag::CentralAsia => GeoPoint::new(43.0, 65.0),
            RegionTag::EastAsia => GeoPoint::new(35.0, 120.0),
            RegionTag::Oceania => GeoPoint::new(-25.0, 140.0),
        }
    }

    /// ISO alpha-2 codes belonging to this region's membership set.
    #[must_use]
    pub const fn members(self) -> &'static [&'static str] {
        match self {
            RegionTag::Americas => AMERICAS,
            RegionTag::Europe => EUROPE,
            RegionTag::Africa => AFRICA,
            RegionTag::Asia => ASIA,
            RegionTag::MiddleEast => MIDDLE_EAST,
            RegionTag::SouthAsia => SOUTH_ASIA,
            RegionTag::SoutheastAsia => SOUTHEAST_ASIA,
            RegionTag::CentralAsia => CENTRAL_ASIA,
            RegionTag::EastAsia => EAST_ASIA,
            RegionTag::Oceania => OCEANIA,
        }
    }

    #[must_use]
    pub fn contains(self, code: &str) -> bool {
        self.members().contains(&code)
    }
}

impl std::fmt::Display for RegionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the first membership set (in `RegionTag::ALL` order) containing `code`.
///
/// `code` is expected to be normalized already.
#[must_use]
pub fn classify_membership(code: &str) -> Option<RegionTag> {
    RegionTag::ALL.into_iter().find(|region| region.contains(code))
}

/// Coarse band classification for codes that match no membership set.
///
/// Bands on the first byte: `< 'F'` americas, `< 'K'` europe, `< 'P'` africa,
/// `< 'U'` asia, everything else oceania. An empty code bands as byte 0.
#[must_use]
pub fn classify_by_first_letter(code: &str) -> RegionTag {
    let first = code.bytes().next().unwrap_or(0);
    match first {
        b if b < b'F' => RegionTag::Americas,
        b if b < b'K' => RegionTag::Europe,
        b if b < b'P' => RegionTag::Africa,
        b if b < b'U' => RegionTag::Asia,
        _ => RegionTag::Oceania,
    }
}

const AMERICAS: &[&str] = &[
    "US", "CA", "MX", "BR", "AR", "CL", "CO", "PE", "VE", "EC", "BO", "PY", "UY", "CU", "DO", "HT",
    "JM", "GT", "HN", "SV", "NI", "CR", "PA", "PR", "TT", "BS", "BB", "BZ", "GY", "SR", "AG", "AI",
    "AW", "BL", "BM", "BQ", "CW", "DM", "FK", "GD", "GF", "GL", "GP", "KN", "KY", "LC", "MF", "MQ",
    "MS", "PM", "SX", "TC", "VC", "VG", "VI",
];

const EUROPE: &[&str] = &[
    "GB", "IE", "FR", "DE", "ES", "PT", "IT", "NL", "BE", "LU", "CH", "AT", "DK", "NO", "SE", "FI",
    "IS", "PL", "CZ", "SK", "HU", "RO", "BG", "GR", "HR", "SI", "RS", "BA", "ME", "MK", "AL", "UA",
    "BY", "MD", "LT", "LV", "EE", "RU", "MT", "CY", "AD", "AX", "FO", "GG", "GI", "IM", "JE", "LI",
    "MC", "SJ", "SM", "VA", "XK",
];

const AFRICA: &[&str] = &[
    "ZA", "NG", "EG", "KE", "ET", "GH", "MA", "DZ", "TN", "LY", "SD", "SS", "TZ", "UG", "RW", "CD",
    "CG", "AO", "ZM", "ZW", "MZ", "MW", "BW", "NA", "MG", "CM", "CI", "SN", "ML", "NE", "BF", "TD",
    "SO", "MR", "GN", "SL", "LR", "BJ", "TG", "GA", "ER", "DJ", "MU", "BI", "CF", "CV", "EH", "GM",
    "GQ", "GW", "KM", "LS", "RE", "SC", "SH", "ST", "SZ", "YT",
];

// Shares every member with EAST_ASIA; checked first, so these codes classify
// as `Asia` when they are missing from the base coordinate table.
const ASIA: &[&str] = &["CN", "JP", "KR", "KP", "MN", "TW", "HK", "MO"];

const MIDDLE_EAST: &[&str] = &[
    "SA", "AE", "QA", "KW", "BH", "OM", "YE", "IQ", "IR", "IL", "PS", "JO", "LB", "SY", "TR",
];

const SOUTH_ASIA: &[&str] = &["IN", "PK", "BD", "LK", "NP", "BT", "MV", "AF", "IO"];

const SOUTHEAST_ASIA: &[&str] = &[
    "SG", "MY", "ID", "TH", "VN", "PH", "MM", "KH", "LA", "BN", "TL", "CX", "CC",
];

const CENTRAL_ASIA: &[&str] = &["KZ", "UZ", "TM", "KG", "TJ", "AZ", "GE", "AM"];

const EAST_ASIA: &[&str] = &["CN", "JP", "KR", "KP", "MN", "TW", "HK", "MO"];

const OCEANIA: &[&str] = &[
    "AU", "NZ", "PG", "FJ", "SB", "VU", "WS", "TO", "AS", "CK", "FM", "GU", "KI", "MH", "MP", "NC",
    "NF", "NR", "NU", "PF", "PN", "PW", "TK", "TV", "WF",
];

#[cfg(test)]
mod tests {
    use super::{RegionTag, classify_by_first_letter, classify_membership};

    #[test]
    fn dual_listed_codes_resolve_to_the_earlier_set() {
        assert!(RegionTag::EastAsia.contains("KP"));
        assert_eq!(classify_membership("KP"), Some(RegionTag::Asia));
        assert_eq!(classify_membership("MO"), Some(RegionTag::Asia));
    }

    #[test]
    fn membership_is_exact_match_only() {
        assert_eq!(classify_membership("GL"), Some(RegionTag::Americas));
        assert_eq!(classify_membership("gl"), None);
        assert_eq!(classify_membership("QQ"), None);
    }

    #[test]
    fn first_letter_bands_cover_the_alphabet() {
        assert_eq!(classify_by_first_letter("AZ"), RegionTag::Americas);
        assert_eq!(classify_by_first_letter("EZ"), RegionTag::Americas);
        assert_eq!(classify_by_first_letter("FZ"), RegionTag::Europe);
        assert_eq!(classify_by_first_letter("JZ"), RegionTag::Europe);
        assert_eq!(classify_by_first_letter("KZ"), RegionTag::Africa);
        assert_eq!(classify_by_first_letter("OZ"), RegionTag::Africa);
        assert_eq!(classify_by_first_letter("PZ"), RegionTag::Asia);
        assert_eq!(classify_by_first_letter("TZ"), RegionTag::Asia);
        assert_eq!(classify_by_first_letter("UZ"), RegionTag::Oceania);
        assert_eq!(classify_by_first_letter("ZZ"), RegionTag::Oceania);
        assert_eq!(classify_by_first_letter(""), RegionTag::Americas);
        assert_eq!(classify_by_first_letter("9X"), RegionTag::Americas);
    }

    #[test]
    fn region_tags_serialize_in_camel_case() {
        let json = serde_json::to_string(&RegionTag::SoutheastAsia).expect("serialize");
        assert_eq!(json, "\"southeastAsia\"");
        for region in RegionTag::ALL {
            let json = serde_json::to_string(&region).expect("serialize");
            assert_eq!(json, format!("\"{}\"", region.as_str()));
        }
    }
}
