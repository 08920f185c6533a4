use serde::{Deserialize, Serialize};

/// A geographic coordinate
///
/// Latitude and longitude are stored in degrees. Use [`GeoPoint::is_valid`]
/// to check that both are finite and inside their ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, `-90..=90`
    pub latitude: f64,
    /// Longitude in degrees, `-180..=180`
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that latitude is within `-90..=90` and longitude within
    /// `-180..=180`
    ///
    /// NaN and infinite values are rejected.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Arithmetic mean of two coordinates
    ///
    /// This is the label anchor for an edge, not the great-circle midpoint.
    /// Roof edges are short enough that the difference is invisible.
    pub fn midpoint(&self, other: GeoPoint) -> GeoPoint {
        GeoPoint::new(
            (self.latitude + other.latitude) / 2.0,
            (self.longitude + other.longitude) / 2.0,
        )
    }

    /// Shift by the given number of degrees
    pub fn offset(&self, d_lat: f64, d_lon: f64) -> GeoPoint {
        GeoPoint::new(self.latitude + d_lat, self.longitude + d_lon)
    }
}

// geo uses x = longitude, y = latitude
impl From<GeoPoint> for geo::Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Coord {
            x: point.longitude,
            y: point.latitude,
        }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.longitude, point.latitude)
    }
}
