#![doc = include_str!("../README.md")]

pub use crate::area::{
    calculate_roof_area, calculate_roof_area_from_vertices, convert_area_units, projected_area,
    real_area,
};
pub use crate::distance::{edge_distance_feet, edge_measurements, perimeter_feet};
pub use crate::error::{Error, PolygonError, Result, Warning};
pub use crate::types::*;

mod area;
pub mod config;
mod distance;
mod error;
pub mod outline;
pub mod report;
pub mod search;
mod types;
pub mod units;
