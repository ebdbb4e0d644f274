//! Planar geometry primitives
//!
//! Coordinates are `geo_types::Coord<f64>`; everything in a GEN file is
//! planimetric, elevations (if any) travel in DAT columns.

mod extent;
mod point;

pub use extent::Extent;
pub use point::{cross, distance, midpoint, similar, TOLERANCE};
