use crate::GeoPoint;
use serde::{Deserialize, Serialize};

/// Bounding box for geographic areas
///
/// Represents a rectangular geographic area defined by longitude and latitude bounds.
/// All coordinates are stored in degrees.
///
/// # Limitations
///
/// **Anti-meridian handling**: This implementation does not correctly handle areas
/// crossing the ±180° longitude line (anti-meridian). Simple min/max logic is used,
/// so such a box spans nearly the entire globe instead of the actual smaller region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Create a bounding box from a slice of points
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;

        let mut bbox = Self::from(first);
        for &point in rest {
            bbox.extend(point);
        }
        Some(bbox)
    }

    /// Extend bounding box to include a point
    ///
    /// Grows the bounding box if necessary to encompass the given point.
    /// If the point is already inside the bbox, no change is made.
    pub fn extend(&mut self, point: GeoPoint) {
        self.west = self.west.min(point.longitude);
        self.east = self.east.max(point.longitude);
        self.north = self.north.max(point.latitude);
        self.south = self.south.min(point.latitude);
    }

    /// Merge another bounding box into this one
    pub fn merge(&mut self, other: BoundingBox) {
        self.west = self.west.min(other.west);
        self.east = self.east.max(other.east);
        self.north = self.north.max(other.north);
        self.south = self.south.min(other.south);
    }

    /// Check whether a point lies inside the box (edges included)
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.west..=self.east).contains(&point.longitude)
            && (self.south..=self.north).contains(&point.latitude)
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

impl From<GeoPoint> for BoundingBox {
    fn from(point: GeoPoint) -> Self {
        Self {
            west: point.longitude,
            south: point.latitude,
            east: point.longitude,
            north: point.latitude,
        }
    }
}
