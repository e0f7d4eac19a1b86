//! Static background outlines drawn beneath the risk markers.
//!
//! Outlines are deliberately coarse; they only need to sit under the right
//! markers once projected.

use super::types::GeoPoint;

pub const GRATICULE_STEP_DEGREES: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionShape {
    pub name: &'static str,
    pub outline: &'static [GeoPoint],
}

/// Land-mass outlines in drawing order.
#[must_use]
pub fn background_shapes() -> &'static [RegionShape] {
    SHAPES
}

/// Latitude and longitude grid lines as `(start, end)` segments.
#[must_use]
pub fn graticule_segments() -> Vec<(GeoPoint, GeoPoint)> {
    let steps = (180.0 / GRATICULE_STEP_DEGREES) as i32;
    let mut segments = Vec::new();
    for i in 1..steps {
        let latitude = -90.0 + f64::from(i) * GRATICULE_STEP_DEGREES;
        segments.push((
            GeoPoint::new(latitude, -180.0),
            GeoPoint::new(latitude, 180.0),
        ));
    }
    for i in 1..(steps * 2) {
        let longitude = -180.0 + f64::from(i) * GRATICULE_STEP_DEGREES;
        segments.push((
            GeoPoint::new(90.0, longitude),
            GeoPoint::new(-90.0, longitude),
        ));
    }
    segments
}

const fn p(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude)
}

const SHAPES: &[RegionShape] = &[
    RegionShape {
        name: "North America",
        outline: &[
            p(70.0, -165.0),
            p(72.0, -120.0),
            p(68.0, -85.0),
            p(60.0, -64.0),
            p(45.0, -60.0),
            p(30.0, -80.0),
            p(25.0, -80.0),
            p(18.0, -95.0),
            p(8.0, -78.0),
            p(15.0, -92.0),
            p(22.0, -106.0),
            p(32.0, -117.0),
            p(48.0, -125.0),
            p(60.0, -145.0),
            p(58.0, -165.0),
        ],
    },
    RegionShape {
        name: "Greenland",
        outline: &[
            p(83.0, -35.0),
            p(78.0, -20.0),
            p(70.0, -22.0),
            p(60.0, -43.0),
            p(70.0, -54.0),
            p(78.0, -72.0),
        ],
    },
    RegionShape {
        name: "South America",
        outline: &[
            p(12.0, -72.0),
            p(8.0, -60.0),
            p(0.0, -50.0),
            p(-7.0, -35.0),
            p(-23.0, -42.0),
            p(-35.0, -56.0),
            p(-55.0, -68.0),
            p(-45.0, -75.0),
            p(-18.0, -71.0),
            p(-5.0, -81.0),
            p(2.0, -79.0),
        ],
    },
    RegionShape {
        name: "Europe",
        outline: &[
            p(71.0, 25.0),
            p(68.0, 45.0),
            p(55.0, 50.0),
            p(45.0, 40.0),
            p(41.0, 29.0),
            p(36.0, 23.0),
            p(38.0, 15.0),
            p(43.0, 8.0),
            p(36.0, -6.0),
            p(43.0, -9.0),
            p(48.0, -5.0),
            p(54.0, 8.0),
            p(58.0, 5.0),
            p(63.0, 8.0),
        ],
    },
    RegionShape {
        name: "British Isles",
        outline: &[
            p(58.5, -5.0),
            p(55.0, -1.5),
            p(51.0, 1.5),
            p(50.0, -5.5),
            p(51.5, -10.0),
            p(55.0, -8.0),
        ],
    },
    RegionShape {
        name: "Africa",
        outline: &[
            p(37.0, 10.0),
            p(31.0, 32.0),
            p(12.0, 44.0),
            p(11.0, 51.0),
            p(-10.0, 40.0),
            p(-26.0, 33.0),
            p(-34.0, 20.0),
            p(-17.0, 11.0),
            p(-5.0, 12.0),
            p(4.0, 9.0),
            p(5.0, -8.0),
            p(15.0, -17.0),
            p(28.0, -13.0),
            p(35.0, -6.0),
        ],
    },
    RegionShape {
        name: "Madagascar",
        outline: &[
            p(-12.0, 49.0),
            p(-25.0, 47.0),
            p(-24.0, 43.5),
            p(-16.0, 44.5),
        ],
    },
    RegionShape {
        name: "Arabia",
        outline: &[
            p(30.0, 35.0),
            p(30.0, 48.0),
            p(24.0, 56.0),
            p(22.0, 60.0),
            p(13.0, 45.0),
            p(20.0, 40.0),
        ],
    },
    RegionShape {
        name: "Asia",
        outline: &[
            p(72.0, 60.0),
            p(76.0, 100.0),
            p(70.0, 160.0),
            p(62.0, 178.0),
            p(52.0, 157.0),
            p(40.0, 132.0),
            p(35.0, 127.0),
            p(30.0, 122.0),
            p(22.0, 114.0),
            p(10.0, 106.0),
            p(1.5, 104.0),
            p(10.0, 98.0),
            p(22.0, 90.0),
            p(8.0, 77.0),
            p(22.0, 69.0),
            p(25.0, 57.0),
            p(37.0, 48.0),
            p(42.0, 42.0),
            p(55.0, 50.0),
            p(68.0, 45.0),
        ],
    },
    RegionShape {
        name: "Japan",
        outline: &[
            p(45.0, 142.0),
            p(40.0, 142.0),
            p(35.0, 140.5),
            p(31.0, 131.0),
            p(34.0, 130.0),
            p(41.0, 140.0),
        ],
    },
    RegionShape {
        name: "Maritime Southeast Asia",
        outline: &[
            p(7.0, 117.0),
            p(1.0, 119.0),
            p(-3.0, 141.0),
            p(-9.0, 141.0),
            p(-8.5, 115.0),
            p(-6.0, 105.0),
            p(5.0, 95.0),
            p(1.0, 109.0),
        ],
    },
    RegionShape {
        name: "Australia",
        outline: &[
            p(-11.0, 142.0),
            p(-25.0, 153.0),
            p(-38.0, 146.0),
            p(-32.0, 133.0),
            p(-35.0, 117.0),
            p(-22.0, 114.0),
            p(-14.0, 127.0),
            p(-12.0, 137.0),
        ],
    },
    RegionShape {
        name: "New Zealand",
        outline: &[
            p(-34.5, 173.0),
            p(-41.0, 176.5),
            p(-46.5, 169.0),
            p(-44.0, 168.0),
            p(-40.5, 172.5),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::{background_shapes, graticule_segments};

    #[test]
    fn outlines_are_closed_polygons_in_range() {
        for shape in background_shapes() {
            assert!(shape.outline.len() >= 3, "{} needs 3+ vertices", shape.name);
            for point in shape.outline {
                assert!((-90.0..=90.0).contains(&point.latitude));
                assert!((-180.0..=180.0).contains(&point.longitude));
            }
        }
    }

    #[test]
    fn graticule_has_parallels_and_meridians() {
        let segments = graticule_segments();
        // 5 parallels (-60..=60) and 11 meridians (-150..=150).
        assert_eq!(segments.len(), 16);
    }
}
