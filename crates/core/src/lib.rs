//! # genvec Core
//!
//! Core types and the feature/attribute co-model for the genvec
//! GEN-file geometry library.
//!
//! This crate provides:
//! - `Extent`: axis-aligned bounding region with snap/clip/union semantics
//! - `Geometry` / `Feature`: point, polyline and polygon vector features
//! - `DatTable`: the companion attribute table keyed by feature id
//! - `FeatureCollection`: one logical GEN file worth of features + rows
//! - The `Algorithm` trait implemented by the operation drivers
//!
//! File parsing and writing live outside this crate: readers hand in
//! already-built collections, writers receive collections back.

pub mod error;
pub mod geometry;
pub mod vector;

pub use error::{Error, Result};
pub use geometry::{Extent, TOLERANCE};
pub use vector::{DatTable, Feature, FeatureCollection, Geometry};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Extent, TOLERANCE};
    pub use crate::vector::{DatTable, Feature, FeatureCollection, Geometry};
    pub use crate::Algorithm;
}

/// Core trait for all operations in genvec.
///
/// Operations are pure functions that transform input data according to
/// parameters; a driver processes one collection end-to-end before the
/// result is handed to a writer.
pub trait Algorithm {
    /// Input type for the operation
    type Input;
    /// Output type for the operation
    type Output;
    /// Parameters controlling behavior
    type Params: Default;
    /// Error type for execution
    type Error: std::error::Error;

    /// Returns the operation name
    fn name(&self) -> &'static str;

    /// Returns a description of what the operation does
    fn description(&self) -> &'static str;

    /// Execute the operation
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(
        &self,
        input: Self::Input,
    ) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
