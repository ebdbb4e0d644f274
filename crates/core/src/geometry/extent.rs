//! Axis-aligned extents
//!
//! An `Extent` is the (llx, lly, urx, ury) rectangle used throughout the
//! GEN tools: bounding boxes of features, clip windows, grid extents.

use geo_types::Coord;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Axis-aligned bounding region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub llx: f64,
    pub lly: f64,
    pub urx: f64,
    pub ury: f64,
}

impl Extent {
    pub fn new(llx: f64, lly: f64, urx: f64, ury: f64) -> Self {
        Self { llx, lly, urx, ury }
    }

    /// An extent with no coordinates yet; invalid until combined with
    /// real data via [`Extent::union`] or replaced.
    pub fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    /// Smallest extent covering all coordinates, `None` for an empty
    /// slice. A single coordinate yields a degenerate (zero-size) extent.
    pub fn from_coords(coords: &[Coord<f64>]) -> Option<Self> {
        let first = coords.first()?;
        let mut ext = Self::new(first.x, first.y, first.x, first.y);
        for c in &coords[1..] {
            ext.llx = ext.llx.min(c.x);
            ext.lly = ext.lly.min(c.y);
            ext.urx = ext.urx.max(c.x);
            ext.ury = ext.ury.max(c.y);
        }
        Some(ext)
    }

    /// A valid extent has strictly positive width and height.
    pub fn is_valid(&self) -> bool {
        self.urx > self.llx && self.ury > self.lly
    }

    /// Returns `self` if valid, the structural error otherwise.
    pub fn validated(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::InvalidExtent {
                llx: self.llx,
                lly: self.lly,
                urx: self.urx,
                ury: self.ury,
            })
        }
    }

    pub fn width(&self) -> f64 {
        self.urx - self.llx
    }

    pub fn height(&self) -> f64 {
        self.ury - self.lly
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Inclusive containment test for a coordinate (boundary counts).
    pub fn contains_coord(&self, c: Coord<f64>) -> bool {
        c.x >= self.llx && c.x <= self.urx && c.y >= self.lly && c.y <= self.ury
    }

    /// Inclusive containment test for another extent.
    pub fn contains(&self, other: &Extent) -> bool {
        other.llx >= self.llx
            && other.urx <= self.urx
            && other.lly >= self.lly
            && other.ury <= self.ury
    }

    /// Strict interior overlap. Extents that only share an edge or a
    /// corner do NOT intersect under this definition.
    pub fn intersects(&self, other: &Extent) -> bool {
        self.llx < other.urx
            && self.urx > other.llx
            && self.lly < other.ury
            && self.ury > other.lly
    }

    /// Touch-tolerant overlap. Unlike [`Extent::intersects`], shared
    /// edges count, which makes this the right test for zero-width or
    /// zero-height extents (degenerate clip results, point extents).
    pub fn intersects2(&self, other: &Extent) -> bool {
        self.llx <= other.urx
            && self.urx >= other.llx
            && self.lly <= other.ury
            && self.ury >= other.lly
    }

    /// Intersection with `other`. When the clip region lies outside this
    /// extent the raw intersection would be inverted (urx < llx); such a
    /// result collapses to a degenerate box at this extent's lower-left
    /// corner so an invalid extent never propagates.
    pub fn clip(&self, other: &Extent) -> Extent {
        let clipped = Extent::new(
            self.llx.max(other.llx),
            self.lly.max(other.lly),
            self.urx.min(other.urx),
            self.ury.min(other.ury),
        );
        if clipped.urx < clipped.llx || clipped.ury < clipped.lly {
            Extent::new(self.llx, self.lly, self.llx, self.lly)
        } else {
            clipped
        }
    }

    /// Smallest extent covering both `self` and `other`.
    pub fn union(&self, other: &Extent) -> Extent {
        Extent::new(
            self.llx.min(other.llx),
            self.lly.min(other.lly),
            self.urx.max(other.urx),
            self.ury.max(other.ury),
        )
    }

    /// Extent grown by `margin` on every side.
    pub fn enlarged(&self, margin: f64) -> Extent {
        Extent::new(
            self.llx - margin,
            self.lly - margin,
            self.urx + margin,
            self.ury + margin,
        )
    }

    /// Snap each coordinate to a multiple of `cellsize`.
    ///
    /// With `enlarge` set, lower-left is floored and upper-right is
    /// ceiled so the snapped extent is a superset of the original;
    /// otherwise every coordinate is rounded to the nearest multiple.
    pub fn snap(&self, cellsize: f64, enlarge: bool) -> Extent {
        if enlarge {
            Extent::new(
                (self.llx / cellsize).floor() * cellsize,
                (self.lly / cellsize).floor() * cellsize,
                (self.urx / cellsize).ceil() * cellsize,
                (self.ury / cellsize).ceil() * cellsize,
            )
        } else {
            Extent::new(
                (self.llx / cellsize).round() * cellsize,
                (self.lly / cellsize).round() * cellsize,
                (self.urx / cellsize).round() * cellsize,
                (self.ury / cellsize).round() * cellsize,
            )
        }
    }

    /// Corner ring of the extent as a closed counter-clockwise polygon.
    pub fn to_ring(&self) -> Vec<Coord<f64>> {
        vec![
            Coord { x: self.llx, y: self.lly },
            Coord { x: self.urx, y: self.lly },
            Coord { x: self.urx, y: self.ury },
            Coord { x: self.llx, y: self.ury },
            Coord { x: self.llx, y: self.lly },
        ]
    }
}
