use claims::{assert_err, assert_ok};
use insta::assert_compact_debug_snapshot;
use roof_area::{
    GeoPoint, Polygon, calculate_roof_area, calculate_roof_area_from_vertices, convert_area_units,
    edge_distance_feet,
};

// 0.001° x 0.001° with the south-west corner at 40°N 74°W
const SQUARE_AREA_M2: f64 = 9492.775_465_796;

fn square() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(40.0, -74.0),
        GeoPoint::new(40.001, -74.0),
        GeoPoint::new(40.001, -73.999),
        GeoPoint::new(40.0, -73.999),
    ]
}

fn irregular() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(40.7128, -74.006),
        GeoPoint::new(40.71295, -74.00601),
        GeoPoint::new(40.7131, -74.0058),
        GeoPoint::new(40.71282, -74.00585),
    ]
}

fn assert_relative_eq(actual: f64, expected: f64, tolerance: f64) {
    let error = ((actual - expected) / expected).abs();
    assert!(error <= tolerance, "{actual} != {expected} (relative error {error})");
}

#[test]
fn flat_roof_real_area_equals_projected() {
    for vertices in [square(), irregular()] {
        let result = assert_ok!(calculate_roof_area_from_vertices(&vertices, 0.0));
        assert_relative_eq(result.real_area_m2, result.projected_area_m2, 1e-9);
    }
}

#[test]
fn real_area_grows_with_pitch() {
    let polygon = Polygon::new(irregular()).unwrap();
    let pitches = [0.0, 5.0, 18.4, 26.6, 33.7, 45.0, 60.0, 75.0, 89.0, 89.999];

    let areas: Vec<f64> = pitches
        .iter()
        .map(|&pitch| calculate_roof_area(&polygon, pitch).unwrap().real_area_m2)
        .collect();

    for pair in areas.windows(2) {
        assert!(pair[0] < pair[1], "{areas:?}");
    }
}

fn spread_points() -> [GeoPoint; 5] {
    [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(40.7128, -74.006),
        GeoPoint::new(-33.8688, 151.2093),
        GeoPoint::new(89.9, 179.9),
        GeoPoint::new(-45.0, -180.0),
    ]
}

#[test]
fn edge_distance_is_symmetric() {
    let points = spread_points();

    for &a in &points {
        for &b in &points {
            assert_eq!(edge_distance_feet(a, b), edge_distance_feet(b, a));
        }
    }
}

#[test]
fn edge_distance_to_self_is_zero() {
    for vertex in irregular() {
        assert_eq!(edge_distance_feet(vertex, vertex), 0.0);
    }
}

#[test]
fn edge_distance_triangle_inequality() {
    let mut points = spread_points().to_vec();
    points.extend(irregular());

    for &a in &points {
        for &b in &points {
            for &c in &points {
                let ab = edge_distance_feet(a, b);
                let bc = edge_distance_feet(b, c);
                let ac = edge_distance_feet(a, c);
                // rounding slack for nearly collinear triples
                assert!(ac <= (ab + bc) * (1.0 + 1e-12) + 1e-9, "{a:?} {b:?} {c:?}");
            }
        }
    }
}

#[test]
fn vertex_count() {
    let vertices = square();

    assert_compact_debug_snapshot!(
        calculate_roof_area_from_vertices(&vertices[..2], 0.0),
        @"Err(InvalidPolygon(TooFewVertices { distinct: 2 }))"
    );

    assert_ok!(calculate_roof_area_from_vertices(&vertices[..3], 0.0));
}

#[test]
fn pitch_range() {
    let vertices = square();

    assert_compact_debug_snapshot!(
        calculate_roof_area_from_vertices(&vertices, 90.0),
        @"Err(InvalidPitch(90.0))"
    );
    assert_compact_debug_snapshot!(
        calculate_roof_area_from_vertices(&vertices, -1.0),
        @"Err(InvalidPitch(-1.0))"
    );
    assert_err!(calculate_roof_area_from_vertices(&vertices, f64::NAN));

    let steep = assert_ok!(calculate_roof_area_from_vertices(&vertices, 89.999));
    assert!(steep.real_area_m2 > 50_000.0 * steep.projected_area_m2);
}

#[test]
fn square_golden_area() {
    let result = assert_ok!(calculate_roof_area_from_vertices(&square(), 0.0));

    assert!((result.projected_area_m2 - SQUARE_AREA_M2).abs() < 1e-3);
    assert!((result.real_area_m2 - SQUARE_AREA_M2).abs() < 1e-3);
}

#[test]
fn pitch_45_scales_by_sqrt_2() {
    let result = assert_ok!(calculate_roof_area_from_vertices(&square(), 45.0));
    assert_relative_eq(
        result.real_area_m2,
        result.projected_area_m2 * std::f64::consts::SQRT_2,
        1e-12,
    );
}

#[test]
fn unit_conversion() {
    let units = convert_area_units(100.0);
    assert_relative_eq(units.area_ft2, 1076.39, 1e-12);
    assert_relative_eq(units.area_sq, 10.7639, 1e-12);
}

#[test]
fn winding_independent() {
    let mut reversed = irregular();
    reversed.reverse();

    let forward = calculate_roof_area_from_vertices(&irregular(), 30.0).unwrap();
    let backward = calculate_roof_area_from_vertices(&reversed, 30.0).unwrap();

    assert!(forward.projected_area_m2 > 0.0);
    assert_relative_eq(backward.projected_area_m2, forward.projected_area_m2, 1e-9);
    assert_relative_eq(backward.area_sq, forward.area_sq, 1e-9);
}
