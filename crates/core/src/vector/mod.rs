//! Vector feature model
//!
//! - `Geometry`: point / polyline / polygon, validated at construction
//! - `Feature`: a geometry with its id
//! - `DatTable`: companion attribute rows keyed by feature id
//! - `FeatureCollection`: one GEN file worth of features and rows

mod collection;
mod dat;
mod feature;

pub use collection::FeatureCollection;
pub use dat::{DatTable, SOURCE_ID_COLUMN};
pub use feature::{Feature, Geometry};
