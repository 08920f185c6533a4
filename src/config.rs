//! Endpoints and request settings for the geocoding and outline services

use crate::error::Result;
use crate::outline::{DEFAULT_RADIUS_M, overpass_query};
use crate::{BoundingBox, GeoPoint};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Service configuration
///
/// Every field has a default, so a partial document deserializes into a
/// complete configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub nominatim_url: String,
    pub overpass_url: String,
    /// Radius around the geocoded point searched for building ways
    pub outline_radius_m: f64,
    /// Maximum number of address suggestions
    pub suggestion_limit: u32,
    /// Area that address suggestions are restricted to
    pub suggestion_viewbox: Option<BoundingBox>,
    pub request_timeout_ms: u64,
    pub search_debounce_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            overpass_url: DEFAULT_OVERPASS_URL.to_string(),
            outline_radius_m: DEFAULT_RADIUS_M,
            suggestion_limit: 5,
            suggestion_viewbox: None,
            request_timeout_ms: 10_000,
            search_debounce_ms: 300,
        }
    }
}

impl ServiceConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// URL for a full address search
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let params = [("format", "json"), ("q", query)];
        Ok(Url::parse_with_params(&self.nominatim_url, &params)?)
    }

    /// URL for as-you-type address suggestions
    pub fn suggestions_url(&self, query: &str) -> Result<Url> {
        let mut params = vec![
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
            ("limit", self.suggestion_limit.to_string()),
        ];

        // Nominatim expects the viewbox as west,north,east,south
        if let Some(b) = self.suggestion_viewbox {
            let viewbox = format!("{},{},{},{}", b.west, b.north, b.east, b.south);
            params.push(("viewbox", viewbox));
            params.push(("bounded", "1".to_string()));
        }

        params.push(("q", query.to_string()));
        Ok(Url::parse_with_params(&self.nominatim_url, &params)?)
    }

    /// URL fetching building outlines around a location
    pub fn outline_url(&self, location: GeoPoint) -> Result<Url> {
        let query = overpass_query(location, self.outline_radius_m);
        Ok(Url::parse_with_params(&self.overpass_url, &[("data", query)])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok;

    #[test]
    fn partial_config_uses_defaults() {
        let config = assert_ok!(ServiceConfig::from_json(r#"{ "outline_radius_m": 25 }"#));

        assert_eq!(config.outline_radius_m, 25.0);
        assert_eq!(config.nominatim_url, DEFAULT_NOMINATIM_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
    }

    #[test]
    fn search_url() {
        let url = ServiceConfig::default().search_url("1600 Main St, Dallas").unwrap();
        assert_eq!(
            url.as_str(),
            "https://nominatim.openstreetmap.org/search?format=json&q=1600+Main+St%2C+Dallas"
        );
    }

    #[test]
    fn suggestions_url_with_viewbox() {
        let config = ServiceConfig {
            suggestion_viewbox: Some(BoundingBox {
                west: -97.05,
                south: 32.55,
                east: -96.45,
                north: 33.05,
            }),
            ..ServiceConfig::default()
        };

        let url = config.suggestions_url("elm").unwrap();
        assert_eq!(
            url.as_str(),
            "https://nominatim.openstreetmap.org/search?format=json&addressdetails=1&limit=5&viewbox=-97.05%2C33.05%2C-96.45%2C32.55&bounded=1&q=elm"
        );
    }

    #[test]
    fn outline_url_carries_query() {
        let location = GeoPoint::new(32.7767, -96.797);
        let url = ServiceConfig::default().outline_url(location).unwrap();

        assert_eq!(url.host_str(), Some("overpass-api.de"));
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "data");
        assert_eq!(value, overpass_query(location, DEFAULT_RADIUS_M));
    }

    #[test]
    fn malformed_base_url() {
        let config = ServiceConfig {
            overpass_url: "not a url".to_string(),
            ..ServiceConfig::default()
        };
        let result = config.outline_url(GeoPoint::new(0.0, 0.0));
        assert!(matches!(result, Err(crate::Error::InvalidUrl(_))));
    }
}
