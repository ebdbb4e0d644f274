//! Feature collections
//!
//! A `FeatureCollection` is one logical GEN file: the ordered feature
//! list (order is preserved through to the writer), the optional DAT
//! table, and the id allocator used when operations synthesize new
//! features. The allocator is owned by the collection; there is no
//! process-wide counter.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vector::dat::{DatTable, SOURCE_ID_COLUMN};
use crate::vector::feature::{Feature, Geometry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    features: Vec<Feature>,
    dat: Option<DatTable>,
    next_id: u64,
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureCollection {
    /// Empty collection without an attribute table.
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
            dat: None,
            next_id: 1,
        }
    }

    /// Empty collection that declares an attribute table with the given
    /// columns; every feature added must then get a row.
    pub fn with_table(columns: Vec<String>) -> Self {
        Self {
            features: Vec::new(),
            dat: Some(DatTable::new(columns)),
            next_id: 1,
        }
    }

    pub fn has_table(&self) -> bool {
        self.dat.is_some()
    }

    pub fn dat(&self) -> Option<&DatTable> {
        self.dat.as_ref()
    }

    pub fn dat_mut(&mut self) -> Option<&mut DatTable> {
        self.dat.as_mut()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.features.iter().any(|f| f.id == id)
    }

    /// Next free id: monotonically increasing integers starting from 1,
    /// skipping ids already taken by adopted features.
    pub fn allocate_id(&mut self) -> String {
        loop {
            let id = self.next_id.to_string();
            self.next_id += 1;
            if !self.contains_id(&id) {
                return id;
            }
        }
    }

    /// Append a feature; its id must be unique within the collection.
    pub fn push(&mut self, feature: Feature) -> Result<()> {
        if self.contains_id(&feature.id) {
            return Err(Error::DuplicateId(feature.id));
        }
        self.features.push(feature);
        Ok(())
    }

    /// Append a feature taken (or copied) from `src`.
    ///
    /// Geometry always moves; the DAT row is copied only when asked and
    /// only when `src` actually has one for this id — the explicit
    /// two-step contract that keeps multi-step pipelines from inserting
    /// a row twice. The destination table is created with the source's
    /// columns on first use, and the row copy allocates the `SourceID`
    /// column (left empty) so adopted and derived rows share one layout.
    pub fn adopt(&mut self, src: &FeatureCollection, feature: Feature, copy_dat_row: bool) -> Result<()> {
        if copy_dat_row {
            if let Some(src_dat) = src.dat() {
                if src_dat.contains_row(&feature.id) {
                    let row = src_dat.row(&feature.id)?.to_vec();
                    let dat = self.table_like(src_dat);
                    dat.ensure_column(SOURCE_ID_COLUMN);
                    let row = pad_to(row, dat.columns().len());
                    dat.insert_row(feature.id.clone(), row)?;
                }
            }
        }
        self.push(feature)
    }

    /// Append a feature derived from `source_id` during a clip, hull or
    /// split: a fresh id is allocated and, when `src` carries a table,
    /// the new row is a copy of the source row with the `SourceID`
    /// column allocated. With `record_source` set the column is filled
    /// with `source_id` so lineage survives the subdivision; a verbatim
    /// copy (full containment) leaves it empty.
    ///
    /// Returns the id given to the new feature.
    pub fn adopt_derived(
        &mut self,
        src: &FeatureCollection,
        source_id: &str,
        geometry: Geometry,
        record_source: bool,
    ) -> Result<String> {
        let id = self.allocate_id();
        if let Some(src_dat) = src.dat() {
            let row = src_dat.row(source_id)?.to_vec();
            let dat = self.table_like(src_dat);
            let idx = dat.ensure_column(SOURCE_ID_COLUMN);
            let mut row = pad_to(row, dat.columns().len());
            if record_source {
                row[idx] = source_id.to_string();
            }
            dat.insert_row(id.clone(), row)?;
        }
        self.push(Feature::new(id.clone(), geometry))?;
        Ok(id)
    }

    /// Collection-level invariant: when a table is declared it holds
    /// exactly one row per feature. A mismatch means the file is corrupt
    /// and processing of it must stop.
    pub fn validate(&self) -> Result<()> {
        if let Some(dat) = self.dat() {
            if dat.len() != self.features.len() {
                return Err(Error::TableSizeMismatch {
                    features: self.features.len(),
                    rows: dat.len(),
                });
            }
        }
        Ok(())
    }

    fn table_like(&mut self, template: &DatTable) -> &mut DatTable {
        self.dat
            .get_or_insert_with(|| DatTable::new(template.columns().to_vec()))
    }
}

// Pads only; an over-long row is left for insert_row to reject.
fn pad_to(mut row: Vec<String>, width: usize) -> Vec<String> {
    if row.len() < width {
        row.resize(width, String::new());
    }
    row
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}
