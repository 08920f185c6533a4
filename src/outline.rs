//! Building outlines from Overpass API responses
//!
//! The Overpass API returns a flat list of elements: nodes carrying
//! coordinates and ways referencing nodes by id. The first way in the
//! response is taken as the building outline.

use crate::error::{Error, PolygonError, Result, Warning};
use crate::{GeoPoint, Polygon};
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;

/// Default search radius around the geocoded location, in metres
pub const DEFAULT_RADIUS_M: f64 = 10.0;

/// Overpass API response body
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A single Overpass element
///
/// Element types other than nodes and ways (e.g. relations) are kept as
/// [`Element::Other`] and ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Node {
        id: i64,
        lat: f64,
        lon: f64,
    },
    Way {
        id: i64,
        #[serde(default)]
        nodes: Vec<i64>,
    },
    #[serde(other)]
    Other,
}

impl OutlineResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Resolve the first way into a polygon
    ///
    /// Node references that cannot be resolved are skipped and reported in
    /// `warnings`. Fails with [`Error::OutlineNotFound`] if there is no way
    /// or fewer than three distinct vertices remain.
    pub fn building_outline(&self, warnings: &mut Vec<Warning>) -> Result<Polygon> {
        let nodes: HashMap<i64, GeoPoint> = self
            .elements
            .iter()
            .filter_map(|element| match *element {
                Element::Node { id, lat, lon } => Some((id, GeoPoint::new(lat, lon))),
                _ => None,
            })
            .collect();

        let mut ways = self.elements.iter().filter_map(|element| match element {
            Element::Way { id, nodes } => Some((*id, nodes)),
            _ => None,
        });

        let (way_id, node_ids) = ways.next().ok_or(Error::OutlineNotFound)?;

        let ignored = ways.count();
        if ignored > 0 {
            warn!("ignoring {ignored} ways after way {way_id}");
            warnings.push(Warning::ExtraWays { ignored });
        }

        let mut vertices = Vec::with_capacity(node_ids.len());
        for &node in node_ids {
            match nodes.get(&node) {
                Some(&point) => vertices.push(point),
                None => {
                    warn!("way {way_id} references missing node {node}");
                    warnings.push(Warning::MissingNode { way: way_id, node });
                }
            }
        }

        match Polygon::new(vertices) {
            Err(Error::InvalidPolygon(PolygonError::TooFewVertices { .. })) => {
                Err(Error::OutlineNotFound)
            }
            result => result,
        }
    }
}

/// Overpass QL query for building ways around a location
pub fn overpass_query(location: GeoPoint, radius_m: f64) -> String {
    format!(
        "[out:json];\n(\n  way[\"building\"](around:{radius_m},{},{});\n);\nout body;\n>;\nout skel qt;\n",
        location.latitude, location.longitude
    )
}
