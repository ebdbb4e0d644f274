//! Convex hull (Graham scan)
//!
//! Builds the minimum enclosing convex polygon of a point set. "No
//! hull" (fewer than three non-collinear points) is an expected outcome,
//! reported as `None`, never as an error.

use geo_types::Coord;

use genvec_core::geometry::{cross, distance};
use genvec_core::{Algorithm, Error};

/// Parameters for convex hull construction
#[derive(Debug, Clone, Default)]
pub struct HullParams {}

/// Convex hull operation
#[derive(Debug, Clone, Default)]
pub struct ConvexHull;

impl Algorithm for ConvexHull {
    type Input = Vec<Coord<f64>>;
    type Output = Option<Vec<Coord<f64>>>;
    type Params = HullParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "ConvexHull"
    }

    fn description(&self) -> &'static str {
        "Graham-scan convex hull over an unordered point set"
    }

    fn execute(
        &self,
        input: Self::Input,
        _params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error> {
        Ok(convex_hull(&input))
    }
}

/// Convex hull of `points` via Graham scan.
///
/// The pivot is the lexicographic (y, then x) minimum; the remaining
/// points are walked in polar-angle order around it, keeping only the
/// farthest of each equal-angle group and popping anything that does not
/// make a strict left turn.
///
/// Returns the hull as an open counter-clockwise ring, or `None` when
/// fewer than three non-collinear distinct points remain (all-identical
/// and two-point inputs included). Close the ring yourself if a closed
/// polygon is required.
pub fn convex_hull(points: &[Coord<f64>]) -> Option<Vec<Coord<f64>>> {
    // Sort by (y, x): puts the pivot first and makes exact duplicates
    // adjacent so they can be dropped.
    let mut pts: Vec<Coord<f64>> = points.to_vec();
    pts.sort_by(|a, b| {
        (a.y, a.x)
            .partial_cmp(&(b.y, b.x))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pts.dedup();

    if pts.len() < 3 {
        return None;
    }

    let pivot = pts[0];
    let mut rest = pts.split_off(1);

    // Ascending polar angle around the pivot; ties ordered near to far.
    rest.sort_by(|&a, &b| {
        let turn = cross(pivot, a, b);
        if turn > 0.0 {
            std::cmp::Ordering::Less
        } else if turn < 0.0 {
            std::cmp::Ordering::Greater
        } else {
            distance(pivot, a)
                .partial_cmp(&distance(pivot, b))
                .unwrap_or(std::cmp::Ordering::Equal)
        }
    });

    // Of each equal-angle run only the farthest point can be a hull
    // vertex; the run is sorted near-to-far, so keep its last entry.
    let mut pruned: Vec<Coord<f64>> = Vec::with_capacity(rest.len());
    for p in rest {
        if let Some(last) = pruned.last() {
            if cross(pivot, *last, p) == 0.0 {
                pruned.pop();
            }
        }
        pruned.push(p);
    }

    if pruned.len() < 2 {
        return None; // all points collinear with the pivot
    }

    let mut stack = vec![pivot, pruned[0]];
    for &p in &pruned[1..] {
        while stack.len() >= 2 && cross(stack[stack.len() - 2], stack[stack.len() - 1], p) <= 0.0 {
            stack.pop();
        }
        stack.push(p);
    }

    if stack.len() < 3 {
        None
    } else {
        Some(stack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::orientation::is_clockwise;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn test_hull_of_square_corners() {
        // Any input order must give the same square.
        let corners = vec![c(2.0, 2.0), c(0.0, 0.0), c(0.0, 2.0), c(2.0, 0.0)];
        let hull = convex_hull(&corners).unwrap();
        assert_eq!(hull.len(), 4);
        assert_eq!(hull, vec![c(0.0, 0.0), c(2.0, 0.0), c(2.0, 2.0), c(0.0, 2.0)]);
        assert!(!is_clockwise(&hull).unwrap(), "hull is counter-clockwise");
    }

    #[test]
    fn test_hull_excludes_interior_point() {
        let pts = vec![c(0.0, 0.0), c(2.0, 0.0), c(1.0, 1.0), c(2.0, 2.0), c(0.0, 2.0)];
        let hull = convex_hull(&pts).unwrap();
        assert_eq!(hull, vec![c(0.0, 0.0), c(2.0, 0.0), c(2.0, 2.0), c(0.0, 2.0)]);
    }

    #[test]
    fn test_hull_prunes_edge_collinear_points() {
        // Midpoints on the square edges must not appear in the hull.
        let pts = vec![
            c(0.0, 0.0),
            c(1.0, 0.0),
            c(2.0, 0.0),
            c(2.0, 1.0),
            c(2.0, 2.0),
            c(0.0, 2.0),
        ];
        let hull = convex_hull(&pts).unwrap();
        assert_eq!(hull, vec![c(0.0, 0.0), c(2.0, 0.0), c(2.0, 2.0), c(0.0, 2.0)]);
    }

    #[test]
    fn test_hull_collinear_undefined() {
        let pts = vec![c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0)];
        assert!(convex_hull(&pts).is_none());
    }

    #[test]
    fn test_hull_degenerate_inputs() {
        assert!(convex_hull(&[]).is_none());
        assert!(convex_hull(&[c(1.0, 1.0)]).is_none());
        assert!(convex_hull(&[c(1.0, 1.0), c(2.0, 2.0)]).is_none());
        // All points identical
        assert!(convex_hull(&[c(1.0, 1.0), c(1.0, 1.0), c(1.0, 1.0)]).is_none());
    }

    #[test]
    fn test_hull_open_ring() {
        let pts = vec![c(0.0, 0.0), c(4.0, 0.0), c(2.0, 3.0)];
        let hull = convex_hull(&pts).unwrap();
        assert_eq!(hull.len(), 3);
        assert_ne!(hull.first(), hull.last(), "hull ring is open");
    }

    #[test]
    fn test_hull_pivot_tie_break() {
        // Two points share the minimum y; the leftmost must be first.
        let pts = vec![c(5.0, 0.0), c(1.0, 0.0), c(3.0, 4.0)];
        let hull = convex_hull(&pts).unwrap();
        assert_eq!(hull[0], c(1.0, 0.0));
    }

    #[test]
    fn test_hull_via_algorithm_trait() {
        let pts = vec![c(0.0, 0.0), c(2.0, 0.0), c(2.0, 2.0), c(0.0, 2.0)];
        let out = ConvexHull.execute_default(pts).unwrap();
        assert_eq!(out.unwrap().len(), 4);
    }
}
