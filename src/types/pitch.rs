use crate::error::{Error, Result};

/// Roof pitch: the angle of the roof plane from horizontal
///
/// Always within `0..90` degrees. A vertical plane (90°) has no finite
/// surface-to-footprint ratio and is rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Pitch(f64);

impl Pitch {
    pub const FLAT: Pitch = Pitch(0.0);

    /// Validate a pitch angle given in degrees
    ///
    /// Fails with [`Error::InvalidPitch`] for negative values, values of
    /// 90 or more, and NaN.
    pub fn from_degrees(degrees: f64) -> Result<Self> {
        if (0.0..90.0).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(Error::InvalidPitch(degrees))
        }
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Ratio of sloped surface area to its footprint, `1 / cos(pitch)`
    pub fn slope_factor(self) -> f64 {
        1.0 / self.radians().cos()
    }
}

impl TryFrom<f64> for Pitch {
    type Error = Error;

    fn try_from(degrees: f64) -> Result<Self> {
        Self::from_degrees(degrees)
    }
}
