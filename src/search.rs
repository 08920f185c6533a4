//! Address search results from the Nominatim geocoder
//!
//! Nominatim encodes coordinates as JSON strings. The records here keep them
//! as received and parse them on access.

use crate::error::{Error, Result};
use crate::{BoundingBox, GeoPoint};
use serde::{Deserialize, Serialize};

/// A single geocoder search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    /// `[south, north, west, east]` as decimal strings
    #[serde(default)]
    pub boundingbox: Vec<String>,
}

impl SearchResult {
    /// Parse the result coordinates
    pub fn location(&self) -> Result<GeoPoint> {
        let point = GeoPoint::new(parse_degrees(&self.lat)?, parse_degrees(&self.lon)?);
        if !point.is_valid() {
            return Err(Error::InvalidCoordinate(format!("{},{}", self.lat, self.lon)));
        }
        Ok(point)
    }

    /// Parse the result extent, if present and well-formed
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let [south, north, west, east] = self.boundingbox.as_slice() else {
            return None;
        };

        Some(BoundingBox {
            west: west.trim().parse().ok()?,
            south: south.trim().parse().ok()?,
            east: east.trim().parse().ok()?,
            north: north.trim().parse().ok()?,
        })
    }
}

/// Decode a geocoder response body
pub fn parse_results(json: &str) -> Result<Vec<SearchResult>> {
    Ok(serde_json::from_str(json)?)
}

/// The last selected address, as persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
}

impl SavedSearch {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

impl TryFrom<&SearchResult> for SavedSearch {
    type Error = Error;

    fn try_from(result: &SearchResult) -> Result<Self> {
        let location = result.location()?;
        Ok(Self {
            display_name: result.display_name.clone(),
            lat: location.latitude,
            lon: location.longitude,
        })
    }
}

/// Pick the best (first) match of a search
///
/// Fails with [`Error::AddressNotFound`] for an empty result list.
pub fn first_match(results: &[SearchResult]) -> Result<SavedSearch> {
    let first = results.first().ok_or(Error::AddressNotFound)?;
    SavedSearch::try_from(first)
}

fn parse_degrees(value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidCoordinate(value.to_string()))
}
