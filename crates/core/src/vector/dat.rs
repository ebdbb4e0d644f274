//! DAT attribute table
//!
//! The companion table of a GEN file: named columns plus one row of
//! string values per feature id. Row width always equals column count;
//! that invariant is enforced on insert and preserved when columns are
//! added later (existing rows are padded with empty fields).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Column recording the originating feature id when a feature is
/// subdivided by clipping or splitting.
pub const SOURCE_ID_COLUMN: &str = "SourceID";

/// Attribute rows keyed by feature id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatTable {
    columns: Vec<String>,
    rows: HashMap<String, Vec<String>>,
}

impl DatTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: HashMap::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of `name`, appending the column (and padding every existing
    /// row with an empty field) when it is not present yet.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.columns.push(name.to_string());
        for row in self.rows.values_mut() {
            row.push(String::new());
        }
        self.columns.len() - 1
    }

    /// Insert (or replace) the row for `id`.
    pub fn insert_row(&mut self, id: impl Into<String>, values: Vec<String>) -> Result<()> {
        let id = id.into();
        if values.len() != self.columns.len() {
            return Err(Error::FieldCountMismatch {
                id,
                expected: self.columns.len(),
                got: values.len(),
            });
        }
        self.rows.insert(id, values);
        Ok(())
    }

    /// Row for `id`, distinct from "table absent" which callers check on
    /// the collection.
    pub fn row(&self, id: &str) -> Result<&[String]> {
        self.rows
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::RowNotFound(id.to_string()))
    }

    pub fn contains_row(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    pub fn remove_row(&mut self, id: &str) -> Option<Vec<String>> {
        self.rows.remove(id)
    }

    /// Set one field of an existing row.
    pub fn set_value(&mut self, id: &str, column: &str, value: impl Into<String>) -> Result<()> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| Error::Other(format!("unknown DAT column: {column}")))?;
        let row = self
            .rows
            .get_mut(id)
            .ok_or_else(|| Error::RowNotFound(id.to_string()))?;
        row[idx] = value.into();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
