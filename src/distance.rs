use crate::units::meters_to_feet;
use crate::{EdgeMeasurement, GeoPoint, Polygon};
use geo::{Distance, Haversine};

/// Great-circle ground distance between two points in feet
///
/// Haversine formula on a sphere with the mean Earth radius. The result is
/// zero for identical points and does not depend on argument order.
pub fn edge_distance_feet(a: GeoPoint, b: GeoPoint) -> f64 {
    let meters = Haversine::distance(geo::Point::from(a), geo::Point::from(b));
    meters_to_feet(meters)
}

/// Length and label anchor for every edge of the outline
///
/// Includes the closing edge from the last vertex back to the first.
pub fn edge_measurements(polygon: &Polygon) -> Vec<EdgeMeasurement> {
    polygon
        .edges()
        .map(|(start, end)| EdgeMeasurement {
            start,
            end,
            midpoint: start.midpoint(end),
            length_ft: edge_distance_feet(start, end),
        })
        .collect()
}

/// Total outline length in feet
pub fn perimeter_feet(polygon: &Polygon) -> f64 {
    polygon
        .edges()
        .map(|(start, end)| edge_distance_feet(start, end))
        .sum()
}
