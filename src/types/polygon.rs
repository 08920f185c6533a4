use crate::error::{PolygonError, Result};
use crate::{BoundingBox, GeoPoint};

/// A closed ring of geographic vertices describing a roof outline
///
/// The last vertex implicitly connects back to the first one. A polygon
/// always holds at least [`Polygon::MIN_VERTICES`] distinct, valid
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<GeoPoint>,
}

impl Polygon {
    pub const MIN_VERTICES: usize = 3;

    /// Create a polygon from an ordered vertex sequence
    ///
    /// An explicit closing vertex (equal to the first one) is dropped, since
    /// the ring is closed implicitly. Fails if fewer than three distinct
    /// vertices remain or if any vertex is not a valid coordinate.
    pub fn new(vertices: impl Into<Vec<GeoPoint>>) -> Result<Self> {
        let mut vertices = vertices.into();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        let distinct = count_distinct(&vertices, Self::MIN_VERTICES);
        if distinct < Self::MIN_VERTICES {
            return Err(PolygonError::TooFewVertices { distinct }.into());
        }

        if let Some(&point) = vertices.iter().find(|p| !p.is_valid()) {
            return Err(PolygonError::CoordinateOutOfRange { point }.into());
        }

        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`, a polygon holds at least three vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over the edges as `(start, end)` pairs
    ///
    /// The last edge wraps around from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Mean of all vertex coordinates
    pub fn center(&self) -> GeoPoint {
        let n = self.vertices.len() as f64;
        let (lat_sum, lon_sum) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(lat, lon), p| (lat + p.latitude, lon + p.longitude));

        GeoPoint::new(lat_sum / n, lon_sum / n)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::from(self.vertices[0]);
        for &point in &self.vertices[1..] {
            bbox.extend(point);
        }
        bbox
    }

    /// Shift every vertex by the given number of degrees
    ///
    /// Used to nudge a fetched outline onto the imagery. The shifted
    /// polygon is validated again, so moving a vertex out of range fails.
    pub fn translate(&self, d_lat: f64, d_lon: f64) -> Result<Polygon> {
        let shifted: Vec<_> = self
            .vertices
            .iter()
            .map(|p| p.offset(d_lat, d_lon))
            .collect();

        Polygon::new(shifted)
    }

    pub(crate) fn to_geo(&self) -> geo::Polygon<f64> {
        let ring: Vec<geo::Coord<f64>> = self.vertices.iter().map(|&p| p.into()).collect();
        geo::Polygon::new(geo::LineString::new(ring), vec![])
    }
}

impl TryFrom<Vec<GeoPoint>> for Polygon {
    type Error = crate::Error;

    fn try_from(vertices: Vec<GeoPoint>) -> Result<Self> {
        Self::new(vertices)
    }
}

/// Count distinct points, stopping once `limit` have been seen
fn count_distinct(points: &[GeoPoint], limit: usize) -> usize {
    let mut seen: Vec<GeoPoint> = Vec::with_capacity(limit);
    for &point in points {
        if !seen.contains(&point) {
            seen.push(point);
            if seen.len() == limit {
                break;
            }
        }
    }
    seen.len()
}
