//! Collection-level operation drivers
//!
//! The entry points the per-tool front-ends call: clip or hull a whole
//! feature collection, producing a brand-new collection with renumbered
//! features and consistently propagated DAT rows. A failure in one
//! feature's computation is logged and recorded, and processing
//! continues with the remaining features; only collection-level
//! invariant breaches abort the run.

use tracing::warn;

use genvec_core::vector::{Feature, FeatureCollection, Geometry};
use genvec_core::{Algorithm, Error, Extent, Result};

use crate::vector::clip::{clip_feature, ClipBoundary};
use crate::vector::hull::convex_hull;

/// Parameters for collection clipping
#[derive(Debug, Clone)]
pub struct ClipParams {
    /// Region to clip against; validated before the batch starts.
    pub boundary: ClipBoundary,
}

impl Default for ClipParams {
    fn default() -> Self {
        Self {
            boundary: ClipBoundary::Extent(Extent::nan()),
        }
    }
}

/// Result of clipping a collection: the output collection plus the
/// per-feature failures that were skipped along the way.
#[derive(Debug)]
pub struct ClipOutcome {
    pub collection: FeatureCollection,
    pub failures: Vec<(String, Error)>,
}

/// Collection clip operation
#[derive(Debug, Clone, Default)]
pub struct Clip;

impl Algorithm for Clip {
    type Input = FeatureCollection;
    type Output = ClipOutcome;
    type Params = ClipParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Clip"
    }

    fn description(&self) -> &'static str {
        "Clip every feature of a collection against an extent or convex polygon"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        clip_collection(&input, &params.boundary)
    }
}

/// Clip every feature of `src` against `boundary`.
///
/// Output features are renumbered from 1 in source order, independent of
/// their source ids. A feature that survives whole keeps a verbatim copy
/// of its DAT row; fragments of a partially clipped feature each get a
/// row with the `SourceID` column set to the originating id. Features
/// outside the boundary are dropped.
///
/// Per-feature geometry failures (e.g. a collinear ring with no defined
/// winding) do not abort the batch: they are logged, collected into the
/// outcome, and the remaining features are processed. An invalid
/// boundary or a corrupt feature/row relation does abort.
pub fn clip_collection(src: &FeatureCollection, boundary: &ClipBoundary) -> Result<ClipOutcome> {
    boundary.validate()?;
    src.validate()?;

    let mut out = FeatureCollection::new();
    let mut failures = Vec::new();

    for feature in src.iter() {
        let geoms = match clip_feature(feature, boundary) {
            Ok(geoms) => geoms,
            Err(err) => {
                warn!(feature_id = %feature.id, error = %err, "skipping feature, clip failed");
                failures.push((feature.id.clone(), err));
                continue;
            }
        };

        let unchanged = geoms.len() == 1 && geoms[0] == feature.geometry;
        for geometry in geoms {
            out.adopt_derived(src, &feature.id, geometry, !unchanged)?;
        }
    }

    out.validate()?;
    Ok(ClipOutcome {
        collection: out,
        failures,
    })
}

/// Convex hull of an entire collection.
///
/// Every vertex of every feature feeds the hull. The result is a new
/// collection holding a single closed polygon feature (id "1") without
/// an attribute table, or `None` when the hull is undefined (fewer than
/// three non-collinear vertices in the whole collection).
pub fn hull_collection(src: &FeatureCollection) -> Option<FeatureCollection> {
    let coords: Vec<_> = src
        .iter()
        .flat_map(|f| f.geometry.coords().iter().copied())
        .collect();
    let mut ring = convex_hull(&coords)?;
    ring.push(ring[0]);

    let mut out = FeatureCollection::new();
    let id = out.allocate_id();
    // hull rings always have at least three distinct vertices
    let geometry = Geometry::polygon(ring).ok()?;
    out.push(Feature::new(id, geometry)).ok()?;
    Some(out)
}
