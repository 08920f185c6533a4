//! Text content of the roof measurement report
//!
//! Rendering (page layout, map snapshot) is left to the caller; this module
//! only produces the lines that go under the title.

use crate::AreaResult;
use crate::units::square_meters_to_square_feet;
use std::fmt;

pub const REPORT_TITLE: &str = "Roof Measurement Report";

const NOT_AVAILABLE: &str = "N/A";

/// Inputs of one measurement report
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub address: Option<&'a str>,
    pub pitch_degrees: f64,
    pub result: &'a AreaResult,
}

impl Report<'_> {
    pub fn lines(&self) -> Vec<String> {
        let r = self.result;
        vec![
            format!("Address: {}", self.address.unwrap_or(NOT_AVAILABLE)),
            format!("Roof pitch angle: {}°", self.pitch_degrees),
            format!(
                "Projected area: {:.2} m² ({:.0} ft²)",
                r.projected_area_m2,
                square_meters_to_square_feet(r.projected_area_m2)
            ),
            format!(
                "Real area: {:.2} m² ({:.0} ft²)",
                r.real_area_m2,
                square_meters_to_square_feet(r.real_area_m2)
            ),
            format!("In ft²: {:.0} ft²", r.area_ft2),
            format!("In squares: {:.1} squares", r.area_sq),
        ]
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_TITLE}")?;
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Label shown next to an outline edge
pub fn edge_label(length_ft: f64) -> String {
    format!("{length_ft:.1} ft")
}
