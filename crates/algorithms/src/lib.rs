//! # genvec Algorithms
//!
//! Geometry operations for GEN vector features.
//!
//! ## Available operation categories
//!
//! - **vector::orientation**: signed area, winding, point-in-polygon
//! - **vector::hull**: Graham-scan convex hull
//! - **vector::clip**: polygon/line/point clipping against extents and
//!   convex polygons
//! - **vector::ops**: collection-level drivers with DAT row propagation

pub mod vector;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::vector::{
        align_winding, clip_collection, clip_feature, clip_line_by_extent, clip_line_by_ring,
        clip_ring_by_extent, clip_ring_by_ring, convex_hull, hull_collection, is_clockwise,
        point_in_polygon, signed_area, Clip, ClipBoundary, ClipOutcome, ClipParams, ConvexHull,
    };
    pub use genvec_core::prelude::*;
}
