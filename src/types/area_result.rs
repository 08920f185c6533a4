use crate::GeoPoint;
use serde::Serialize;

/// Measurements for one roof outline at one pitch
///
/// Produced by [`calculate_roof_area`](crate::calculate_roof_area); never
/// modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaResult {
    /// Footprint area seen from directly above, in m²
    pub projected_area_m2: f64,
    /// Sloped surface area, in m²
    pub real_area_m2: f64,
    /// Real area in ft²
    pub area_ft2: f64,
    /// Real area in roofing squares (100 ft²)
    pub area_sq: f64,
}

/// An area expressed in imperial roofing units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaUnits {
    pub area_ft2: f64,
    pub area_sq: f64,
}

/// Length and label anchor of one outline edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeMeasurement {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub midpoint: GeoPoint,
    pub length_ft: f64,
}
