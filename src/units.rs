//! Conversion constants between metric and roofing units

/// Feet per metre
pub const METERS_TO_FEET: f64 = 3.28084;

/// Square feet per square metre
pub const SQUARE_METERS_TO_SQUARE_FEET: f64 = 10.7639;

/// Square feet per roofing square
pub const SQUARE_FEET_PER_SQUARE: f64 = 100.0;

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * METERS_TO_FEET
}

pub fn square_meters_to_square_feet(area_m2: f64) -> f64 {
    area_m2 * SQUARE_METERS_TO_SQUARE_FEET
}

pub fn square_feet_to_squares(area_ft2: f64) -> f64 {
    area_ft2 / SQUARE_FEET_PER_SQUARE
}
