//! Tests for the canonical coordinate model

use super::*;

#[test]
fn test_new_accepts_range_bounds() {
    assert!(CanonicalCoordinate::new(MAX_LAT_E5, MAX_LON_E5).is_ok());
    assert!(CanonicalCoordinate::new(MIN_LAT_E5, MIN_LON_E5).is_ok());
    assert!(CanonicalCoordinate::new(0, 0).is_ok());
}

#[test]
fn test_new_rejects_latitude_past_pole() {
    let result = CanonicalCoordinate::new(9_000_001, 0);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(9_000_001))));
}

#[test]
fn test_new_rejects_longitude_past_antimeridian() {
    let result = CanonicalCoordinate::new(0, -18_000_001);
    assert!(matches!(
        result,
        Err(CoordError::InvalidLongitude(-18_000_001))
    ));
}

#[test]
fn test_from_degrees_rounds_to_e5() {
    // New York City
    let coord = CanonicalCoordinate::from_degrees(40.75, -73.98).unwrap();
    assert_eq!(coord.lat_e5, 4_075_000);
    assert_eq!(coord.lon_e5, -7_398_000);

    let coord = CanonicalCoordinate::from_degrees(0.000_004_9, -0.000_005_1).unwrap();
    assert_eq!(coord.lat_e5, 0);
    assert_eq!(coord.lon_e5, -1);
}

#[test]
fn test_from_degrees_rejects_non_finite() {
    assert!(matches!(
        CanonicalCoordinate::from_degrees(f64::NAN, 0.0),
        Err(CoordError::LatitudeOutOfRange(_))
    ));
    assert!(matches!(
        CanonicalCoordinate::from_degrees(0.0, f64::INFINITY),
        Err(CoordError::LongitudeOutOfRange(_))
    ));
    assert!(matches!(
        CanonicalCoordinate::from_degrees(90.5, 0.0),
        Err(CoordError::LatitudeOutOfRange(_))
    ));
}

#[test]
fn test_degrees_accessors() {
    let coord = CanonicalCoordinate::from_e5(-3_386_880, 15_120_930);
    assert!((coord.latitude() - (-33.8688)).abs() < 1e-9);
    assert!((coord.longitude() - 151.2093).abs() < 1e-9);
    assert_eq!(coord.axis(Axis::Latitude), -3_386_880);
    assert_eq!(coord.axis(Axis::Longitude), 15_120_930);
}

#[test]
fn test_display_uses_five_decimals() {
    let coord = CanonicalCoordinate::from_e5(4_075_000, -7_398_000);
    assert_eq!(coord.to_string(), "40.75000, -73.98000");
}

#[test]
fn test_is_valid_flags_unchecked_values() {
    assert!(CanonicalCoordinate::from_e5(100, 100).is_valid());
    assert!(!CanonicalCoordinate::from_e5(9_100_000, 0).is_valid());
}

#[test]
fn test_latlon_map_and_access() {
    let pair = LatLon::new(1, 2).map(|axis, v| (axis, v * 10));
    assert_eq!(pair.latitude, (Axis::Latitude, 10));
    assert_eq!(pair.longitude, (Axis::Longitude, 20));

    let mut pair = LatLon::new(1, 2);
    *pair.get_mut(Axis::Longitude) = 7;
    assert_eq!(*pair.get(Axis::Longitude), 7);

    let coord: CanonicalCoordinate = LatLon::new(5, 6).into();
    assert_eq!(coord.split(), LatLon::new(5, 6));
}

#[test]
fn test_axis_limits_and_hemispheres() {
    assert_eq!(Axis::Latitude.limit_e5(), 9_000_000);
    assert_eq!(Axis::Longitude.limit_degrees(), 180);
    assert_eq!(Axis::Latitude.hemisphere(true), 'S');
    assert_eq!(Axis::Longitude.hemisphere(false), 'E');
    assert_eq!(Axis::Longitude.to_string(), "longitude");
}

#[test]
fn test_invalid_code_error_message() {
    let err = CoordError::invalid_code("geohash", "abc", "contains 'a'");
    assert_eq!(err.to_string(), "Invalid geohash code 'abc': contains 'a'");
}

#[test]
fn test_serde_round_trip() {
    let coord = CanonicalCoordinate::from_e5(4_075_000, -7_398_000);
    let json = serde_json::to_string(&coord).unwrap();
    assert_eq!(json, r#"{"lat_e5":4075000,"lon_e5":-7398000}"#);
    let back: CanonicalCoordinate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, coord);
}
