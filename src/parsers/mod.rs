//! Readers for BOM sources.
//!
//! The core in [`crate::hierarchy`], [`crate::topology`] and
//! [`crate::explosion`] works on typed rows and maps. This module gets data
//! into that shape:
//!
//! - [`BomTable`]: a header row plus string records, read from CSV.
//! - [`leveled_rows`]: table → [`LeveledRow`](crate::model::LeveledRow)s,
//!   validating that the required columns exist.
//! - [`relations_from_table`]: explicit Parent/Child tables →
//!   [`BomRelation`](crate::model::BomRelation)s.
//! - [`parse_adjacency_str`] / [`load_adjacency`]: JSON or YAML adjacency maps.

mod adjacency;
mod columns;
mod table;

pub use adjacency::{
    detect_adjacency_format, load_adjacency, parse_adjacency_str, render_adjacency, AdjacencyFormat,
};
pub use columns::{
    leveled_rows, relations_from_table, ColumnMapping, ParentChildMapping,
    DEFAULT_QUANTITY_COLUMNS,
};
pub use table::BomTable;

use crate::error::{ErrorContext, Result};
use crate::model::LeveledRow;
use std::path::Path;

/// Read a leveled-row CSV file with the given column mapping.
pub fn load_leveled_rows(path: &Path, delimiter: u8, mapping: &ColumnMapping) -> Result<Vec<LeveledRow>> {
    let table = BomTable::from_path(path, delimiter)?;
    leveled_rows(&table, mapping).with_context(|| format!("reading rows from {}", path.display()))
}
