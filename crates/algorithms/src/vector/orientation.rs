//! Polygon orientation and measure
//!
//! Winding defines "inside" for every consumer of GEN polygons, so any
//! operation that builds a new ring runs it through [`align_winding`]
//! against the winding of the ring it came from.

use geo_types::Coord;

use genvec_core::geometry::cross;
use genvec_core::{Error, Result};

/// Signed area of a ring via the shoelace formula.
///
/// Accepts an open or closed ring: the wrap-around term closes an open
/// ring, and a closing duplicate contributes zero. Positive for
/// counter-clockwise winding, negative for clockwise.
pub fn signed_area(ring: &[Coord<f64>]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

/// Winding of a ring.
///
/// Decided by the sign of the signed area; when the area vanishes the
/// turn direction at the lowest/leftmost vertex is used instead. Fully
/// collinear rings have no orientation and yield
/// [`Error::CollinearPoints`].
pub fn is_clockwise(ring: &[Coord<f64>]) -> Result<bool> {
    if ring.len() < 3 {
        return Err(Error::CollinearPoints);
    }
    let area = signed_area(ring);
    if area != 0.0 {
        return Ok(area < 0.0);
    }

    // Zero area: decide at the lowest (then leftmost) vertex, where the
    // hull turn direction matches the ring winding.
    let open = open_view(ring);
    let n = open.len();
    let pivot = (0..n)
        .min_by(|&i, &j| {
            (open[i].y, open[i].x)
                .partial_cmp(&(open[j].y, open[j].x))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(0);
    let prev = open[(pivot + n - 1) % n];
    let next = open[(pivot + 1) % n];
    let turn = cross(open[pivot], prev, next);
    if turn > 0.0 {
        Ok(true)
    } else if turn < 0.0 {
        Ok(false)
    } else {
        Err(Error::CollinearPoints)
    }
}

/// Reverse `ring` in place when its winding differs from `clockwise`.
///
/// Reversal preserves closure: a closed ring stays closed.
pub fn align_winding(ring: &mut [Coord<f64>], clockwise: bool) -> Result<()> {
    if is_clockwise(ring)? != clockwise {
        ring.reverse();
    }
    Ok(())
}

/// Even-odd ray-casting containment test; accepts an open or closed
/// ring. Points on the boundary count as inside.
pub fn point_in_polygon(p: Coord<f64>, ring: &[Coord<f64>]) -> bool {
    let open = open_view(ring);
    let n = open.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    for i in 0..n {
        let a = open[i];
        let b = open[(i + 1) % n];

        if on_segment(p, a, b) {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x_hit = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_hit {
                inside = !inside;
            }
        }
    }
    inside
}

fn on_segment(p: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> bool {
    cross(a, b, p) == 0.0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// Ring without its closing duplicate, if it has one.
fn open_view(ring: &[Coord<f64>]) -> &[Coord<f64>] {
    if ring.len() > 1 && ring.first() == ring.last() {
        &ring[..ring.len() - 1]
    } else {
        ring
    }
}
