//! Coordinate helpers: distance, tolerance equality, orientation test

use geo_types::Coord;

/// Default tolerance for coordinate comparison.
///
/// GEN coordinates are written with at most nanometer precision; two
/// coordinates closer than this are the same point.
pub const TOLERANCE: f64 = 1e-9;

/// Euclidean distance between two coordinates.
pub fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Midpoint of the segment from `a` to `b`.
pub fn midpoint(a: Coord<f64>, b: Coord<f64>) -> Coord<f64> {
    Coord {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    }
}

/// Tolerance equality: both components within `tol` of each other.
pub fn similar(a: Coord<f64>, b: Coord<f64>, tol: f64) -> bool {
    (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol
}

/// Cross product of the vectors `o -> a` and `o -> b`.
///
/// Positive when `a -> b` turns counter-clockwise around `o`, negative
/// when clockwise, zero when the three points are collinear.
pub fn cross(o: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_345() {
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 3.0, y: 4.0 };
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint() {
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 3.0, y: 4.0 };
        let m = midpoint(a, b);
        assert_eq!(m, Coord { x: 1.5, y: 2.0 });
    }

    #[test]
    fn test_similar_within_tolerance() {
        let a = Coord { x: 1.0, y: 2.0 };
        let b = Coord {
            x: 1.0 + 1e-10,
            y: 2.0 - 1e-10,
        };
        assert!(similar(a, b, TOLERANCE));
        assert!(!similar(a, Coord { x: 1.1, y: 2.0 }, TOLERANCE));
    }

    #[test]
    fn test_cross_sign() {
        let o = Coord { x: 0.0, y: 0.0 };
        let a = Coord { x: 1.0, y: 0.0 };
        let b = Coord { x: 0.0, y: 1.0 };
        assert!(cross(o, a, b) > 0.0, "left turn should be positive");
        assert!(cross(o, b, a) < 0.0, "right turn should be negative");
    }

    #[test]
    fn test_cross_collinear() {
        let o = Coord { x: 0.0, y: 0.0 };
        let a = Coord { x: 1.0, y: 1.0 };
        let b = Coord { x: 3.0, y: 3.0 };
        assert_eq!(cross(o, a, b), 0.0);
    }
}
