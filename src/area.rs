//! Roof area computation
//!
//! Projected (footprint) area uses the spherical approximation of
//! Chamberlain & Duquette, "Some algorithms for polygons on a sphere"
//! (JPL, 2007), on a sphere with the WGS84 equatorial radius. The area is
//! unsigned, so vertex winding does not matter.

use crate::error::Result;
use crate::units::{square_feet_to_squares, square_meters_to_square_feet};
use crate::{AreaResult, AreaUnits, GeoPoint, Pitch, Polygon};
use geo::ChamberlainDuquetteArea;
use log::debug;

/// Footprint area of a polygon in m²
///
/// Self-intersecting outlines do not fail: lobes with opposite winding
/// cancel out and the absolute value of the sum is returned.
pub fn projected_area(polygon: &Polygon) -> f64 {
    polygon.to_geo().chamberlain_duquette_unsigned_area()
}

/// Sloped surface area for a footprint area and a pitch angle in degrees
///
/// `real = projected / cos(pitch)`. Fails with
/// [`Error::InvalidPitch`](crate::Error::InvalidPitch) unless
/// `0 <= pitch < 90`.
pub fn real_area(projected_area_m2: f64, pitch_degrees: f64) -> Result<f64> {
    let pitch = Pitch::from_degrees(pitch_degrees)?;
    Ok(projected_area_m2 / pitch.radians().cos())
}

/// Convert an area in m² to ft² and roofing squares
///
/// No validation happens here; NaN and infinite inputs propagate.
pub fn convert_area_units(area_m2: f64) -> AreaUnits {
    let area_ft2 = square_meters_to_square_feet(area_m2);
    AreaUnits {
        area_ft2,
        area_sq: square_feet_to_squares(area_ft2),
    }
}

/// Measure a roof outline at the given pitch
///
/// The imperial units in the result are derived from the real (sloped)
/// area.
pub fn calculate_roof_area(polygon: &Polygon, pitch_degrees: f64) -> Result<AreaResult> {
    let projected_area_m2 = projected_area(polygon);
    let real_area_m2 = real_area(projected_area_m2, pitch_degrees)?;
    let AreaUnits { area_ft2, area_sq } = convert_area_units(real_area_m2);

    debug!(
        "measured {} vertices at {pitch_degrees}°: projected={projected_area_m2:.2} m², real={real_area_m2:.2} m²",
        polygon.len()
    );

    Ok(AreaResult {
        projected_area_m2,
        real_area_m2,
        area_ft2,
        area_sq,
    })
}

/// Measure a raw vertex sequence at the given pitch
///
/// Validates the vertices first, then the pitch, and fails on the first
/// violated precondition.
pub fn calculate_roof_area_from_vertices(
    vertices: &[GeoPoint],
    pitch_degrees: f64,
) -> Result<AreaResult> {
    let polygon = Polygon::new(vertices)?;
    calculate_roof_area(&polygon, pitch_degrees)
}
