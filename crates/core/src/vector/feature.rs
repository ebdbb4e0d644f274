//! Feature geometry variants and the feature type

use geo_types::Coord;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{distance, Extent};

/// Geometry of a single GEN feature.
///
/// A polygon ring is stored closed: the first coordinate is repeated as
/// the last one. Construction validates this, so a `Polygon` value can
/// always be trusted to be a closed ring with at least three distinct
/// vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Coord<f64>),
    Line(Vec<Coord<f64>>),
    Polygon(Vec<Coord<f64>>),
}

impl Geometry {
    pub fn point(c: Coord<f64>) -> Self {
        Geometry::Point(c)
    }

    /// An open polyline; needs at least two vertices.
    pub fn line(coords: Vec<Coord<f64>>) -> Result<Self> {
        if coords.len() < 2 {
            return Err(Error::TooFewPoints {
                kind: "line",
                got: coords.len(),
                min: 2,
            });
        }
        Ok(Geometry::Line(coords))
    }

    /// A closed ring: at least four coordinates with `first == last`
    /// (three distinct vertices plus the closing duplicate).
    ///
    /// Closure is checked with exact equality; readers emit bit-identical
    /// closing points and a tolerant check would mask truly open rings.
    pub fn polygon(ring: Vec<Coord<f64>>) -> Result<Self> {
        if ring.len() < 4 {
            return Err(Error::TooFewPoints {
                kind: "polygon",
                got: ring.len(),
                min: 4,
            });
        }
        if ring.first() != ring.last() {
            return Err(Error::OpenRing);
        }
        Ok(Geometry::Polygon(ring))
    }

    /// All coordinates of the geometry, closing duplicate included.
    pub fn coords(&self) -> &[Coord<f64>] {
        match self {
            Geometry::Point(c) => std::slice::from_ref(c),
            Geometry::Line(cs) | Geometry::Polygon(cs) => cs,
        }
    }

    /// Polygon ring without the closing duplicate; the form the
    /// low-level clip primitives operate on.
    pub fn open_ring(&self) -> Option<&[Coord<f64>]> {
        match self {
            Geometry::Polygon(ring) => Some(&ring[..ring.len() - 1]),
            _ => None,
        }
    }

    /// Bounding extent; degenerate (zero-size) for a point.
    pub fn extent(&self) -> Extent {
        // coords() is never empty, so from_coords cannot fail
        Extent::from_coords(self.coords()).unwrap_or_else(Extent::nan)
    }

    /// Geometric measure: 0 for a point, length for a line, unsigned
    /// area for a polygon.
    pub fn measure(&self) -> f64 {
        match self {
            Geometry::Point(_) => 0.0,
            Geometry::Line(cs) => cs.windows(2).map(|w| distance(w[0], w[1])).sum(),
            Geometry::Polygon(ring) => {
                let mut sum = 0.0;
                for w in ring.windows(2) {
                    sum += w[0].x * w[1].y - w[1].x * w[0].y;
                }
                sum.abs() * 0.5
            }
        }
    }
}

/// A feature: geometry plus its id, unique within the owning collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(id: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: id.into(),
            geometry,
        }
    }

    pub fn extent(&self) -> Extent {
        self.geometry.extent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    fn square_ring() -> Vec<Coord<f64>> {
        vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 10.0), c(0.0, 0.0)]
    }

    #[test]
    fn test_polygon_requires_closed_ring() {
        assert!(Geometry::polygon(square_ring()).is_ok());

        let open = vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 10.0)];
        assert!(matches!(Geometry::polygon(open), Err(Error::OpenRing)));
    }

    #[test]
    fn test_polygon_requires_three_vertices() {
        let two = vec![c(0.0, 0.0), c(1.0, 1.0), c(0.0, 0.0)];
        assert!(matches!(
            Geometry::polygon(two),
            Err(Error::TooFewPoints { kind: "polygon", .. })
        ));
    }

    #[test]
    fn test_line_requires_two_vertices() {
        assert!(Geometry::line(vec![c(0.0, 0.0)]).is_err());
        assert!(Geometry::line(vec![c(0.0, 0.0), c(1.0, 0.0)]).is_ok());
    }

    #[test]
    fn test_open_ring_drops_closing_duplicate() {
        let poly = Geometry::polygon(square_ring()).unwrap();
        let open = poly.open_ring().unwrap();
        assert_eq!(open.len(), 4);
        assert_ne!(open.first(), open.last());
        assert!(Geometry::point(c(0.0, 0.0)).open_ring().is_none());
    }

    #[test]
    fn test_measure() {
        let poly = Geometry::polygon(square_ring()).unwrap();
        assert!((poly.measure() - 100.0).abs() < 1e-10);

        let line = Geometry::line(vec![c(0.0, 0.0), c(3.0, 4.0), c(3.0, 10.0)]).unwrap();
        assert!((line.measure() - 11.0).abs() < 1e-10);

        assert_eq!(Geometry::point(c(1.0, 1.0)).measure(), 0.0);
    }

    #[test]
    fn test_measure_winding_independent() {
        let mut reversed = square_ring();
        reversed.reverse();
        let a = Geometry::polygon(square_ring()).unwrap().measure();
        let b = Geometry::polygon(reversed).unwrap().measure();
        assert!((a - b).abs() < 1e-10, "unsigned measure ignores winding");
    }

    #[test]
    fn test_extent() {
        let poly = Geometry::polygon(square_ring()).unwrap();
        assert_eq!(poly.extent(), Extent::new(0.0, 0.0, 10.0, 10.0));

        let pt = Geometry::point(c(3.0, 4.0));
        assert_eq!(pt.extent(), Extent::new(3.0, 4.0, 3.0, 4.0));
    }

    #[test]
    fn test_copy_does_not_alias() {
        let original = Feature::new("1", Geometry::polygon(square_ring()).unwrap());
        let mut copy = original.clone();
        if let Geometry::Polygon(ring) = &mut copy.geometry {
            ring[0].x = 99.0;
        }
        if let Geometry::Polygon(ring) = &original.geometry {
            assert_eq!(ring[0].x, 0.0, "mutating the copy must not touch the original");
        }
    }
}
