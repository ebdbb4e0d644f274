//! Clipping operations
//!
//! Clip GEN geometries by a rectangular extent or a convex clip polygon:
//! Sutherland-Hodgman for polygon subjects, per-segment trimming
//! (Cohen-Sutherland against extents, parametric edge clipping against
//! rings) for polylines, plain containment for points.
//!
//! The ring primitives take and return **open** rings (no closing
//! duplicate); [`clip_feature`] re-closes its results. Every produced
//! ring is deduplicated, rejected when its area vanishes, and re-wound
//! to the subject's winding before it is returned.
//!
//! Clipping is only guaranteed correct for convex clip regions. Concave
//! clip rings are not rejected, but their results are undefined.

use geo_types::Coord;

use genvec_core::geometry::{cross, similar, Extent, TOLERANCE};
use genvec_core::vector::{Feature, Geometry};
use genvec_core::Result;

use crate::vector::orientation::{align_winding, is_clockwise, point_in_polygon, signed_area};

/// Region to clip against
#[derive(Debug, Clone)]
pub enum ClipBoundary {
    /// Rectangular window (llx, lly, urx, ury)
    Extent(Extent),
    /// Convex clip polygon, closed ring
    Ring(Vec<Coord<f64>>),
}

impl ClipBoundary {
    /// Bounding extent of the clip region.
    pub fn extent(&self) -> Extent {
        match self {
            ClipBoundary::Extent(e) => *e,
            ClipBoundary::Ring(ring) => Extent::from_coords(ring).unwrap_or_else(Extent::nan),
        }
    }

    /// Inclusive containment of a single coordinate.
    pub fn contains_coord(&self, c: Coord<f64>) -> bool {
        match self {
            ClipBoundary::Extent(e) => e.contains_coord(c),
            ClipBoundary::Ring(ring) => point_in_polygon(c, ring),
        }
    }

    /// Structural check for use at the start of a batch: an extent
    /// boundary must have positive span, a ring boundary must be a
    /// closed ring with an orientation.
    pub fn validate(&self) -> Result<()> {
        match self {
            ClipBoundary::Extent(e) => e.validated().map(|_| ()),
            ClipBoundary::Ring(ring) => {
                Geometry::polygon(ring.clone())?;
                is_clockwise(ring).map(|_| ())
            }
        }
    }

    /// True when the whole of `ext` lies inside the clip region. For a
    /// convex ring, corner containment is sufficient.
    pub fn contains_extent(&self, ext: &Extent) -> bool {
        match self {
            ClipBoundary::Extent(e) => e.contains(ext),
            ClipBoundary::Ring(ring) => {
                let corners = [
                    Coord { x: ext.llx, y: ext.lly },
                    Coord { x: ext.urx, y: ext.lly },
                    Coord { x: ext.urx, y: ext.ury },
                    Coord { x: ext.llx, y: ext.ury },
                ];
                corners.iter().all(|&c| point_in_polygon(c, ring))
            }
        }
    }
}

/// Edge of a rectangular clip window
#[derive(Debug, Clone, Copy)]
enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

impl Edge {
    fn is_inside(&self, p: Coord<f64>, ext: &Extent) -> bool {
        match self {
            Edge::Left => p.x >= ext.llx,
            Edge::Right => p.x <= ext.urx,
            Edge::Bottom => p.y >= ext.lly,
            Edge::Top => p.y <= ext.ury,
        }
    }

    fn intersect(&self, p: Coord<f64>, q: Coord<f64>, ext: &Extent) -> Coord<f64> {
        let dx = q.x - p.x;
        let dy = q.y - p.y;
        match self {
            Edge::Left => {
                let t = (ext.llx - p.x) / dx;
                Coord { x: ext.llx, y: p.y + t * dy }
            }
            Edge::Right => {
                let t = (ext.urx - p.x) / dx;
                Coord { x: ext.urx, y: p.y + t * dy }
            }
            Edge::Bottom => {
                let t = (ext.lly - p.y) / dy;
                Coord { x: p.x + t * dx, y: ext.lly }
            }
            Edge::Top => {
                let t = (ext.ury - p.y) / dy;
                Coord { x: p.x + t * dx, y: ext.ury }
            }
        }
    }
}

/// One Sutherland-Hodgman pass against a rectangle edge.
fn clip_edge_rect(vertices: &[Coord<f64>], edge: Edge, ext: &Extent) -> Vec<Coord<f64>> {
    let mut output = Vec::with_capacity(vertices.len() + 2);
    let n = vertices.len();
    for i in 0..n {
        let current = vertices[i];
        let next = vertices[(i + 1) % n];
        match (edge.is_inside(current, ext), edge.is_inside(next, ext)) {
            (true, true) => output.push(next),
            (true, false) => output.push(edge.intersect(current, next, ext)),
            (false, true) => {
                output.push(edge.intersect(current, next, ext));
                output.push(next);
            }
            (false, false) => {}
        }
    }
    output
}

/// Clip an open subject ring against a rectangular extent.
///
/// Sutherland-Hodgman over the four window edges. Returns the raw open
/// result ring, empty when the subject lies outside the window.
pub fn clip_ring_by_extent(subject: &[Coord<f64>], ext: &Extent) -> Vec<Coord<f64>> {
    let mut vertices = subject.to_vec();
    for edge in [Edge::Left, Edge::Right, Edge::Bottom, Edge::Top] {
        vertices = clip_edge_rect(&vertices, edge, ext);
        if vertices.is_empty() {
            return Vec::new();
        }
    }
    vertices
}

/// One Sutherland-Hodgman pass against the directed clip edge `a -> b`.
///
/// `inside_sign` encodes which side of the edge is the interior: +1.0
/// for a counter-clockwise clip ring (interior on the left), -1.0 for a
/// clockwise one.
fn clip_edge_line(
    vertices: &[Coord<f64>],
    a: Coord<f64>,
    b: Coord<f64>,
    inside_sign: f64,
) -> Vec<Coord<f64>> {
    let inside = |p: Coord<f64>| inside_sign * cross(a, b, p) >= 0.0;

    let mut output = Vec::with_capacity(vertices.len() + 2);
    let n = vertices.len();
    for i in 0..n {
        let current = vertices[i];
        let next = vertices[(i + 1) % n];
        match (inside(current), inside(next)) {
            (true, true) => output.push(next),
            (true, false) => output.push(line_intersection(current, next, a, b)),
            (false, true) => {
                output.push(line_intersection(current, next, a, b));
                output.push(next);
            }
            (false, false) => {}
        }
    }
    output
}

/// Intersection of segment `p -> q` with the infinite line through
/// `a -> b`. The Sutherland-Hodgman crossing cases guarantee the two are
/// not parallel; the degenerate guard keeps a NaN out of the ring anyway.
fn line_intersection(
    p: Coord<f64>,
    q: Coord<f64>,
    a: Coord<f64>,
    b: Coord<f64>,
) -> Coord<f64> {
    let d1 = Coord { x: q.x - p.x, y: q.y - p.y };
    let d2 = Coord { x: b.x - a.x, y: b.y - a.y };
    let denom = d1.x * d2.y - d1.y * d2.x;
    if denom == 0.0 {
        return q;
    }
    let t = ((a.x - p.x) * d2.y - (a.y - p.y) * d2.x) / denom;
    Coord {
        x: p.x + t * d1.x,
        y: p.y + t * d1.y,
    }
}

/// Clip an open subject ring against a convex clip ring.
///
/// Directional Sutherland-Hodgman: "inside" is derived from the clip
/// ring's actual winding, so clockwise and counter-clockwise clip rings
/// both work. Fails when the clip ring has no defined orientation.
pub fn clip_ring_by_ring(subject: &[Coord<f64>], clip: &[Coord<f64>]) -> Result<Vec<Coord<f64>>> {
    let inside_sign = if is_clockwise(clip)? { -1.0 } else { 1.0 };
    let open_clip = open_clip_ring(clip);

    let mut vertices = subject.to_vec();
    let n = open_clip.len();
    for i in 0..n {
        let a = open_clip[i];
        let b = open_clip[(i + 1) % n];
        vertices = clip_edge_line(&vertices, a, b, inside_sign);
        if vertices.is_empty() {
            return Ok(Vec::new());
        }
    }
    Ok(vertices)
}

/// Clip-ring view without the closing duplicate.
fn open_clip_ring(ring: &[Coord<f64>]) -> &[Coord<f64>] {
    if ring.len() > 1 && ring.first() == ring.last() {
        &ring[..ring.len() - 1]
    } else {
        ring
    }
}

/// Cohen-Sutherland region codes
const INSIDE: u8 = 0b0000;
const LEFT: u8 = 0b0001;
const RIGHT: u8 = 0b0010;
const BOTTOM: u8 = 0b0100;
const TOP: u8 = 0b1000;

fn outcode(p: Coord<f64>, ext: &Extent) -> u8 {
    let mut code = INSIDE;
    if p.x < ext.llx {
        code |= LEFT;
    }
    if p.x > ext.urx {
        code |= RIGHT;
    }
    if p.y < ext.lly {
        code |= BOTTOM;
    }
    if p.y > ext.ury {
        code |= TOP;
    }
    code
}

/// Cohen-Sutherland clip of one segment; `None` when it misses the
/// window entirely.
fn clip_segment(
    mut p0: Coord<f64>,
    mut p1: Coord<f64>,
    ext: &Extent,
) -> Option<(Coord<f64>, Coord<f64>)> {
    let mut code0 = outcode(p0, ext);
    let mut code1 = outcode(p1, ext);

    loop {
        if (code0 | code1) == 0 {
            return Some((p0, p1));
        }
        if (code0 & code1) != 0 {
            return None;
        }

        let code_out = if code0 != 0 { code0 } else { code1 };
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;

        let clipped = if code_out & TOP != 0 {
            let t = (ext.ury - p0.y) / dy;
            Coord { x: p0.x + t * dx, y: ext.ury }
        } else if code_out & BOTTOM != 0 {
            let t = (ext.lly - p0.y) / dy;
            Coord { x: p0.x + t * dx, y: ext.lly }
        } else if code_out & RIGHT != 0 {
            let t = (ext.urx - p0.x) / dx;
            Coord { x: ext.urx, y: p0.y + t * dy }
        } else {
            let t = (ext.llx - p0.x) / dx;
            Coord { x: ext.llx, y: p0.y + t * dy }
        };

        if code_out == code0 {
            p0 = clipped;
            code0 = outcode(p0, ext);
        } else {
            p1 = clipped;
            code1 = outcode(p1, ext);
        }
    }
}

/// Trim a polyline to the portions inside `ext`.
///
/// A line that exits and re-enters the window breaks into several
/// disjoint polylines; each maximal run of surviving segments becomes
/// one output line. A segment whose surviving portion collapses to a
/// single point (a corner or boundary touch) contributes nothing, so
/// the output never holds a zero-length line.
pub fn clip_line_by_extent(line: &[Coord<f64>], ext: &Extent) -> Vec<Vec<Coord<f64>>> {
    assemble_runs(line, |p, q| clip_segment(p, q, ext))
}

/// Trim a polyline to the portions inside a convex clip ring.
///
/// Each segment is clipped parametrically against the ring's directed
/// edges; runs are assembled exactly as in [`clip_line_by_extent`].
/// Fails when the clip ring has no defined orientation.
pub fn clip_line_by_ring(
    line: &[Coord<f64>],
    clip: &[Coord<f64>],
) -> Result<Vec<Vec<Coord<f64>>>> {
    let inside_sign = if is_clockwise(clip)? { -1.0 } else { 1.0 };
    let open_clip = open_clip_ring(clip);
    Ok(assemble_runs(line, |p, q| {
        segment_in_ring(p, q, open_clip, inside_sign)
    }))
}

/// Parametric clip of segment `p -> q` against a convex clip ring's
/// directed edges, narrowing the surviving parameter interval edge by
/// edge. `None` when the segment misses the clip region.
fn segment_in_ring(
    p: Coord<f64>,
    q: Coord<f64>,
    open_clip: &[Coord<f64>],
    inside_sign: f64,
) -> Option<(Coord<f64>, Coord<f64>)> {
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    let n = open_clip.len();
    for i in 0..n {
        let a = open_clip[i];
        let b = open_clip[(i + 1) % n];
        let fp = inside_sign * cross(a, b, p);
        let fq = inside_sign * cross(a, b, q);
        if fp < 0.0 && fq < 0.0 {
            return None;
        }
        if fp >= 0.0 && fq >= 0.0 {
            continue;
        }
        let t = fp / (fp - fq);
        if fp < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }
    let lerp = |t: f64| Coord {
        x: p.x + t * (q.x - p.x),
        y: p.y + t * (q.y - p.y),
    };
    Some((lerp(t0), lerp(t1)))
}

/// Assemble the surviving portions of a polyline's segments into maximal
/// runs, one output polyline per run.
///
/// `clip` maps an input segment to its surviving portion. Portions
/// collapsed to a single point are skipped; a skipped or rejected
/// segment ends the current run. Runs shorter than two vertices are
/// dropped.
fn assemble_runs(
    line: &[Coord<f64>],
    mut clip: impl FnMut(Coord<f64>, Coord<f64>) -> Option<(Coord<f64>, Coord<f64>)>,
) -> Vec<Vec<Coord<f64>>> {
    let mut parts: Vec<Vec<Coord<f64>>> = Vec::new();
    let mut run: Vec<Coord<f64>> = Vec::new();

    for w in line.windows(2) {
        match clip(w[0], w[1]) {
            Some((c0, c1)) if !similar(c0, c1, TOLERANCE) => {
                let continues = run
                    .last()
                    .map(|last| similar(*last, c0, TOLERANCE))
                    .unwrap_or(false);
                if !continues {
                    if run.len() >= 2 {
                        parts.push(std::mem::take(&mut run));
                    } else {
                        run.clear();
                    }
                    run.push(c0);
                }
                run.push(c1);
            }
            _ => {
                if run.len() >= 2 {
                    parts.push(std::mem::take(&mut run));
                } else {
                    run.clear();
                }
            }
        }
    }
    if run.len() >= 2 {
        parts.push(run);
    }
    parts
}

/// Drop consecutive near-duplicate vertices, and a last vertex that
/// duplicates the first (the ring stays open here).
fn dedup_ring(ring: Vec<Coord<f64>>) -> Vec<Coord<f64>> {
    let mut out: Vec<Coord<f64>> = Vec::with_capacity(ring.len());
    for c in ring {
        if !out.last().map(|l| similar(*l, c, TOLERANCE)).unwrap_or(false) {
            out.push(c);
        }
    }
    while out.len() > 1 && similar(out[0], out[out.len() - 1], TOLERANCE) {
        out.pop();
    }
    out
}

/// Post-pass for a raw clipped ring: dedup, reject vanished area, align
/// winding with the subject ring's winding. Returns the finished open
/// ring.
fn finish_ring(raw: Vec<Coord<f64>>, source_clockwise: bool) -> Option<Vec<Coord<f64>>> {
    let mut ring = dedup_ring(raw);
    if ring.len() < 3 || signed_area(&ring).abs() < TOLERANCE {
        return None;
    }
    // Area is non-zero, so the winding is defined.
    align_winding(&mut ring, source_clockwise).ok()?;
    Some(ring)
}

/// Clip one feature against a boundary.
///
/// Fast paths first: a feature whose bounding extent lies fully inside
/// the clip region is returned as an exact copy without touching its
/// geometry; a feature whose extent does not even touch the clip
/// region's extent yields nothing. Otherwise polygons go through
/// Sutherland-Hodgman, lines through per-segment trimming, points
/// through a containment test.
///
/// Returns zero or more geometries; attribute handling is the caller's
/// job (see `clip_collection`).
pub fn clip_feature(feature: &Feature, boundary: &ClipBoundary) -> Result<Vec<Geometry>> {
    let fext = feature.extent();
    if boundary.contains_extent(&fext) {
        return Ok(vec![feature.geometry.clone()]);
    }
    if !boundary.extent().intersects2(&fext) {
        return Ok(Vec::new());
    }

    match &feature.geometry {
        Geometry::Point(c) => Ok(if boundary.contains_coord(*c) {
            vec![Geometry::point(*c)]
        } else {
            Vec::new()
        }),

        Geometry::Line(coords) => {
            let parts = match boundary {
                ClipBoundary::Extent(ext) => clip_line_by_extent(coords, ext),
                ClipBoundary::Ring(clip) => clip_line_by_ring(coords, clip)?,
            };
            parts.into_iter().map(Geometry::line).collect()
        }

        Geometry::Polygon(closed) => {
            let subject = &closed[..closed.len() - 1];
            let source_clockwise = is_clockwise(subject)?;

            let raw = match boundary {
                ClipBoundary::Extent(ext) => clip_ring_by_extent(subject, ext),
                ClipBoundary::Ring(clip) => clip_ring_by_ring(subject, clip)?,
            };

            match finish_ring(raw, source_clockwise) {
                Some(mut ring) => {
                    ring.push(ring[0]); // re-close
                    Ok(vec![Geometry::polygon(ring)?])
                }
                None => Ok(Vec::new()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;
    use geo_types::{LineString, Polygon};

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    fn window() -> Extent {
        Extent::new(0.0, 0.0, 10.0, 10.0)
    }

    /// Independent area check via the geo crate.
    fn geo_area(open_ring: &[Coord<f64>]) -> f64 {
        let mut closed = open_ring.to_vec();
        closed.push(closed[0]);
        Polygon::new(LineString::new(closed), vec![]).unsigned_area()
    }

    #[test]
    fn test_clip_ring_fully_inside() {
        let subject = vec![c(2.0, 2.0), c(8.0, 2.0), c(8.0, 8.0), c(2.0, 8.0)];
        let out = clip_ring_by_extent(&subject, &window());
        assert!((geo_area(&out) - 36.0).abs() < 1e-10);
    }

    #[test]
    fn test_clip_ring_fully_outside() {
        let subject = vec![c(20.0, 20.0), c(30.0, 20.0), c(25.0, 30.0)];
        assert!(clip_ring_by_extent(&subject, &window()).is_empty());
    }

    #[test]
    fn test_clip_ring_straddling() {
        // 10x10 square half inside the window
        let subject = vec![c(5.0, 2.0), c(15.0, 2.0), c(15.0, 8.0), c(5.0, 8.0)];
        let out = clip_ring_by_extent(&subject, &window());
        assert!((geo_area(&out) - 30.0).abs() < 1e-10);
        for v in &out {
            assert!(window().contains_coord(*v), "vertex {v:?} outside window");
        }
    }

    #[test]
    fn test_clip_quarter_overlap() {
        // 10x10 square against a window covering its upper-right quarter.
        let subject = vec![c(0.0, 0.0), c(0.0, 10.0), c(10.0, 10.0), c(10.0, 0.0)];
        let ext = Extent::new(5.0, 5.0, 15.0, 15.0);
        let out = clip_ring_by_extent(&subject, &ext);
        assert!((geo_area(&out) - 25.0).abs() < 1e-10);
        for v in &out {
            assert!(v.x >= 5.0 && v.x <= 10.0 && v.y >= 5.0 && v.y <= 10.0);
        }
    }

    #[test]
    fn test_partition_property() {
        // Fragments from a window and its complement halves sum to the
        // subject's area.
        let subject = vec![c(2.0, 2.0), c(14.0, 2.0), c(14.0, 8.0), c(2.0, 8.0)];
        let left = Extent::new(0.0, 0.0, 10.0, 10.0);
        let right = Extent::new(10.0, 0.0, 20.0, 10.0);
        let a = geo_area(&clip_ring_by_extent(&subject, &left));
        let b = geo_area(&clip_ring_by_extent(&subject, &right));
        assert!((a + b - 72.0).abs() < 1e-10, "partition lost area: {a} + {b}");
    }

    #[test]
    fn test_clip_ring_by_ring_windings() {
        let subject = vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 10.0)];
        let ccw_clip = vec![c(5.0, 5.0), c(15.0, 5.0), c(15.0, 15.0), c(5.0, 15.0), c(5.0, 5.0)];
        let mut cw_clip = ccw_clip.clone();
        cw_clip.reverse();

        let out_ccw = clip_ring_by_ring(&subject, &ccw_clip).unwrap();
        let out_cw = clip_ring_by_ring(&subject, &cw_clip).unwrap();
        assert!((geo_area(&out_ccw) - 25.0).abs() < 1e-10);
        assert!((geo_area(&out_cw) - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_clip_ring_by_ring_triangle() {
        // Clip a square with a triangle covering its lower-left half.
        let subject = vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 10.0)];
        let clip = vec![c(0.0, 0.0), c(10.0, 0.0), c(0.0, 10.0), c(0.0, 0.0)];
        let out = clip_ring_by_ring(&subject, &clip).unwrap();
        assert!((geo_area(&out) - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_clip_ring_by_collinear_clip_fails() {
        let subject = vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0)];
        let degenerate = vec![c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0)];
        assert!(clip_ring_by_ring(&subject, &degenerate).is_err());
    }

    #[test]
    fn test_clip_line_single_crossing() {
        let line = vec![c(-5.0, 5.0), c(15.0, 5.0)];
        let parts = clip_line_by_extent(&line, &window());
        assert_eq!(parts.len(), 1);
        assert!((parts[0][0].x - 0.0).abs() < 1e-10);
        assert!((parts[0].last().unwrap().x - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_clip_line_exit_and_reenter() {
        // Down through the window, out the bottom, back in: two parts.
        let line = vec![c(2.0, 5.0), c(2.0, -5.0), c(8.0, -5.0), c(8.0, 5.0)];
        let parts = clip_line_by_extent(&line, &window());
        assert_eq!(parts.len(), 2, "exit and re-entry must split the line");
        assert!((parts[0][0].y - 5.0).abs() < 1e-10);
        assert!((parts[0][1].y - 0.0).abs() < 1e-10);
        assert!((parts[1][0].y - 0.0).abs() < 1e-10);
        assert!((parts[1][1].y - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_clip_line_fully_outside() {
        let line = vec![c(20.0, 20.0), c(30.0, 30.0)];
        assert!(clip_line_by_extent(&line, &window()).is_empty());
    }

    #[test]
    fn test_clip_line_corner_touch_yields_nothing() {
        // Grazes the window at a single point, (10, 10).
        let line = vec![c(5.0, 15.0), c(15.0, 5.0)];
        assert!(
            clip_line_by_extent(&line, &window()).is_empty(),
            "a point touch must not become a zero-length line"
        );
    }

    #[test]
    fn test_clip_line_boundary_touch_keeps_real_parts() {
        // Exits through the right edge: the interior part survives and
        // ends exactly on the boundary.
        let line = vec![c(5.0, 5.0), c(15.0, 5.0)];
        let parts = clip_line_by_extent(&line, &window());
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], vec![c(5.0, 5.0), c(10.0, 5.0)]);
    }

    #[test]
    fn test_clip_line_by_ring_trims_to_polygon() {
        // Triangle clip region; the bounding extent alone would keep
        // x up to 10, the hypotenuse cuts the line at x = 8.
        let clip = vec![c(0.0, 0.0), c(10.0, 0.0), c(0.0, 10.0), c(0.0, 0.0)];
        let line = vec![c(-5.0, 2.0), c(15.0, 2.0)];
        let parts = clip_line_by_ring(&line, &clip).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].len(), 2);
        assert!((parts[0][0].x - 0.0).abs() < 1e-10);
        assert!((parts[0][1].x - 8.0).abs() < 1e-10);
        assert!((parts[0][1].y - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_clip_line_by_ring_windings() {
        let ccw = vec![c(0.0, 0.0), c(10.0, 0.0), c(0.0, 10.0), c(0.0, 0.0)];
        let mut cw = ccw.clone();
        cw.reverse();
        let line = vec![c(2.0, -5.0), c(2.0, 15.0)];
        for clip in [ccw, cw] {
            let parts = clip_line_by_ring(&line, &clip).unwrap();
            assert_eq!(parts.len(), 1);
            assert!((parts[0][0].y - 0.0).abs() < 1e-10);
            assert!((parts[0][1].y - 8.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_clip_feature_fast_path_copy() {
        let ring = vec![c(2.0, 2.0), c(8.0, 2.0), c(8.0, 8.0), c(2.0, 8.0), c(2.0, 2.0)];
        let feature = Feature::new("1", Geometry::polygon(ring).unwrap());
        let out = clip_feature(&feature, &ClipBoundary::Extent(window())).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], feature.geometry, "fully inside must be an exact copy");
    }

    #[test]
    fn test_clip_feature_disjoint_empty() {
        let ring = vec![c(20.0, 20.0), c(30.0, 20.0), c(25.0, 30.0), c(20.0, 20.0)];
        let feature = Feature::new("1", Geometry::polygon(ring).unwrap());
        let out = clip_feature(&feature, &ClipBoundary::Extent(window())).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_clip_feature_preserves_winding() {
        // Clockwise subject straddling the window; fragment must stay
        // clockwise.
        let ring = vec![c(5.0, 2.0), c(5.0, 8.0), c(15.0, 8.0), c(15.0, 2.0), c(5.0, 2.0)];
        assert!(is_clockwise(&ring).unwrap());
        let feature = Feature::new("1", Geometry::polygon(ring).unwrap());

        let out = clip_feature(&feature, &ClipBoundary::Extent(window())).unwrap();
        assert_eq!(out.len(), 1);
        let clipped = out[0].coords();
        assert!(is_clockwise(clipped).unwrap(), "winding flipped during clip");
        assert_eq!(clipped.first(), clipped.last(), "result ring is closed");
        assert!((out[0].measure() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_clip_feature_degenerate_sliver_rejected() {
        // Subject extent overlaps the window's extent, but only along
        // the shared boundary line: clip result has zero area.
        let ring = vec![c(10.0, 2.0), c(15.0, 2.0), c(15.0, 8.0), c(10.0, 8.0), c(10.0, 2.0)];
        let feature = Feature::new("1", Geometry::polygon(ring).unwrap());
        let out = clip_feature(&feature, &ClipBoundary::Extent(window())).unwrap();
        assert!(out.is_empty(), "zero-area result must be omitted");
    }

    #[test]
    fn test_clip_feature_point() {
        let inside = Feature::new("1", Geometry::point(c(5.0, 5.0)));
        let on_edge = Feature::new("2", Geometry::point(c(10.0, 5.0)));
        let outside = Feature::new("3", Geometry::point(c(11.0, 5.0)));
        let b = ClipBoundary::Extent(window());
        assert_eq!(clip_feature(&inside, &b).unwrap().len(), 1);
        assert_eq!(clip_feature(&on_edge, &b).unwrap().len(), 1, "boundary is inclusive");
        assert!(clip_feature(&outside, &b).unwrap().is_empty());
    }

    #[test]
    fn test_clip_feature_point_against_ring() {
        let clip = ClipBoundary::Ring(vec![
            c(0.0, 0.0),
            c(10.0, 0.0),
            c(0.0, 10.0),
            c(0.0, 0.0),
        ]);
        let inside = Feature::new("1", Geometry::point(c(2.0, 2.0)));
        let outside = Feature::new("2", Geometry::point(c(8.0, 8.0)));
        assert_eq!(clip_feature(&inside, &clip).unwrap().len(), 1);
        assert!(clip_feature(&outside, &clip).unwrap().is_empty());
    }

    #[test]
    fn test_clip_feature_line_against_ring() {
        // The part beyond the hypotenuse lies inside the ring's
        // bounding extent but outside the ring; it must not survive.
        let clip = ClipBoundary::Ring(vec![
            c(0.0, 0.0),
            c(10.0, 0.0),
            c(0.0, 10.0),
            c(0.0, 0.0),
        ]);
        let line = Feature::new("1", Geometry::line(vec![c(1.0, 2.0), c(9.0, 2.0)]).unwrap());
        let out = clip_feature(&line, &clip).unwrap();
        assert_eq!(out.len(), 1);
        let coords = out[0].coords();
        assert!((coords[0].x - 1.0).abs() < 1e-10);
        assert!((coords[1].x - 8.0).abs() < 1e-10);
    }
}
