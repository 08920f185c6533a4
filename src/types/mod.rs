mod area_result;
mod bounding_box;
mod geo_point;
mod pitch;
mod polygon;

pub use area_result::*;
pub use bounding_box::*;
pub use geo_point::*;
pub use pitch::*;
pub use polygon::*;
