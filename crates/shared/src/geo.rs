use serde::{Deserialize, Serialize};

// Degrees throughout. Boxes never wrap the antimeridian: east/west are plain
// max/min of the longitudes involved.

/// Minimum span (degrees) a selection needs on at least one axis.
pub const MIN_AREA_SIZE_DEG: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_coordinate(self.lat, self.lng))
    }
}

/// Axis-aligned rectangle described by its latitude/longitude extrema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    /// Bounding box of two arbitrary points. The argument order does not matter.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Bounds {
            north: a.lat.max(b.lat),
            south: a.lat.min(b.lat),
            east: a.lng.max(b.lng),
            west: a.lng.min(b.lng),
        }
    }

    /// Same box with each pair of extrema put in order.
    pub fn normalized(&self) -> Self {
        Bounds::from_corners(
            LatLng::new(self.south, self.west),
            LatLng::new(self.north, self.east),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.north.is_finite()
            && self.south.is_finite()
            && self.east.is_finite()
            && self.west.is_finite()
    }

    pub fn lat_span(&self) -> f64 {
        (self.north - self.south).abs()
    }

    pub fn lng_span(&self) -> f64 {
        (self.east - self.west).abs()
    }

    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.north, self.west)
    }

    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.south, self.east)
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Inclusive containment check.
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }
}

/// Render a coordinate pair as `"lat, lng"` with six decimal places.
pub fn format_coordinate(lat: f64, lng: f64) -> String {
    format!("{:.6}, {:.6}", lat, lng)
}

/// True when either span strictly exceeds [`MIN_AREA_SIZE_DEG`].
pub fn meets_minimum_size(bounds: &Bounds) -> bool {
    exceeds_span(bounds, MIN_AREA_SIZE_DEG)
}

/// Same check as [`meets_minimum_size`] against a caller-supplied threshold.
pub fn exceeds_span(bounds: &Bounds, threshold: f64) -> bool {
    bounds.lat_span() > threshold || bounds.lng_span() > threshold
}

/// Formatted readouts shown next to a candidate selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CornerReport {
    pub north_west: String,
    pub north_east: String,
    pub south_west: String,
    pub south_east: String,
    pub center: String,
}

impl CornerReport {
    pub fn from_bounds(bounds: &Bounds) -> Self {
        let fmt = |p: LatLng| format_coordinate(p.lat, p.lng);
        CornerReport {
            north_west: fmt(bounds.north_west()),
            north_east: fmt(bounds.north_east()),
            south_west: fmt(bounds.south_west()),
            south_east: fmt(bounds.south_east()),
            center: fmt(bounds.center()),
        }
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("North-west corner", &self.north_west),
            ("North-east corner", &self.north_east),
            ("South-west corner", &self.south_west),
            ("South-east corner", &self.south_east),
            ("Center", &self.center),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moscow_box() -> Bounds {
        Bounds::from_corners(LatLng::new(55.70, 37.50), LatLng::new(55.80, 37.70))
    }

    #[test]
    fn test_format_coordinate_six_decimals() {
        assert_eq!(format_coordinate(55.7558, 37.6176), "55.755800, 37.617600");
    }

    #[test]
    fn test_format_coordinate_negative_and_rounding() {
        assert_eq!(format_coordinate(-33.8688197, 151.2093), "-33.868820, 151.209300");
        assert_eq!(format_coordinate(0.0, 180.0), "0.000000, 180.000000");
    }

    #[test]
    fn test_from_corners_is_order_independent() {
        let pairs = [
            (LatLng::new(55.70, 37.50), LatLng::new(55.80, 37.70)),
            (LatLng::new(-10.0, 170.0), LatLng::new(10.0, -170.0)),
            (LatLng::new(1.0, 1.0), LatLng::new(1.0, 1.0)),
            (LatLng::new(48.85, 2.29), LatLng::new(48.86, 2.35)),
        ];
        for (a, b) in pairs {
            assert_eq!(Bounds::from_corners(a, b), Bounds::from_corners(b, a));
        }
    }

    #[test]
    fn test_from_corners_extrema() {
        let b = Bounds::from_corners(LatLng::new(55.80, 37.50), LatLng::new(55.70, 37.70));
        assert!((b.north - 55.80).abs() < 1e-9);
        assert!((b.south - 55.70).abs() < 1e-9);
        assert!((b.east - 37.70).abs() < 1e-9);
        assert!((b.west - 37.50).abs() < 1e-9);
    }

    #[test]
    fn test_normalized_orders_extrema() {
        let swapped = Bounds {
            north: 1.0,
            south: 2.0,
            east: 3.0,
            west: 4.0,
        };
        let b = swapped.normalized();
        assert_eq!((b.north, b.south, b.east, b.west), (2.0, 1.0, 4.0, 3.0));
        assert_eq!(moscow_box().normalized(), moscow_box());
    }

    #[test]
    fn test_is_finite() {
        assert!(moscow_box().is_finite());
        let mut b = moscow_box();
        b.north = f64::NAN;
        assert!(!b.is_finite());
        let mut b = moscow_box();
        b.west = f64::NEG_INFINITY;
        assert!(!b.is_finite());
    }

    #[test]
    fn test_minimum_size_rejects_exact_threshold() {
        let b = Bounds {
            north: 0.001,
            south: 0.0,
            east: 0.001,
            west: 0.0,
        };
        assert!(!meets_minimum_size(&b));
    }

    #[test]
    fn test_minimum_size_either_axis_suffices() {
        let tall = Bounds {
            north: 10.5,
            south: 10.0,
            east: 20.0,
            west: 20.0,
        };
        let wide = Bounds {
            north: 10.0,
            south: 10.0,
            east: 20.5,
            west: 20.0,
        };
        assert!(meets_minimum_size(&tall));
        assert!(meets_minimum_size(&wide));
    }

    #[test]
    fn test_minimum_size_rejects_tiny_box() {
        let b = Bounds::from_corners(LatLng::new(55.0, 37.0), LatLng::new(55.0005, 37.0009));
        assert!(!meets_minimum_size(&b));
    }

    #[test]
    fn test_exceeds_span_custom_threshold() {
        let b = moscow_box();
        assert!(exceeds_span(&b, 0.15));
        assert!(!exceeds_span(&b, 0.25));
    }

    #[test]
    fn test_corners_and_center() {
        let b = moscow_box();
        assert_eq!(b.north_west(), LatLng::new(55.80, 37.50));
        assert_eq!(b.south_east(), LatLng::new(55.70, 37.70));
        let c = b.center();
        assert!((c.lat - 55.75).abs() < 1e-9);
        assert!((c.lng - 37.60).abs() < 1e-9);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = moscow_box();
        assert!(b.contains(LatLng::new(55.75, 37.60)));
        assert!(b.contains(b.north_east()));
        assert!(!b.contains(LatLng::new(55.81, 37.60)));
    }

    #[test]
    fn test_corner_report() {
        let report = CornerReport::from_bounds(&moscow_box());
        assert_eq!(report.north_west, "55.800000, 37.500000");
        assert_eq!(report.north_east, "55.800000, 37.700000");
        assert_eq!(report.south_west, "55.700000, 37.500000");
        assert_eq!(report.south_east, "55.700000, 37.700000");
        assert_eq!(report.center, "55.750000, 37.600000");
        assert_eq!(report.rows()[4], ("Center", "55.750000, 37.600000"));
    }

    #[test]
    fn test_latlng_display() {
        assert_eq!(LatLng::new(1.5, -2.25).to_string(), "1.500000, -2.250000");
    }
}
