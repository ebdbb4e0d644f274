//! Vector geometry operations
//!
//! Operations on GEN features and feature collections:
//! - Orientation: signed area, clockwise test, winding alignment
//! - Containment: point-in-polygon
//! - Convex hull: Graham scan over a point set
//! - Clip: polygon/line/point against rectangular extents and convex
//!   clip polygons, with DAT row propagation at the collection level

mod clip;
mod hull;
mod ops;
mod orientation;

pub use clip::{
    clip_feature, clip_line_by_extent, clip_line_by_ring, clip_ring_by_extent, clip_ring_by_ring,
    ClipBoundary,
};
pub use hull::{convex_hull, ConvexHull, HullParams};
pub use ops::{clip_collection, hull_collection, Clip, ClipOutcome, ClipParams};
pub use orientation::{align_winding, is_clockwise, point_in_polygon, signed_area};
