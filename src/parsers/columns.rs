//! Column mapping and schema validation for tabular BOMs.

use super::BomTable;
use crate::error::{BomError, Result};
use crate::model::{parse_quantity, Attributes, BomRelation, LeveledRow, DEFAULT_QUANTITY};
use serde::{Deserialize, Serialize};

/// Conventional names of the quantity column, in lookup order.
pub const DEFAULT_QUANTITY_COLUMNS: &[&str] = &["Comp. Qty (BUn)", "Comp. Qty", "Quantity"];

/// Column names of an indentation-style export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Required level column
    pub level: String,
    /// Required component identifier column
    pub component: String,
    /// Optional quantity column; the first name present wins
    pub quantity_candidates: Vec<String>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            level: "Level".to_string(),
            component: "Component number".to_string(),
            quantity_candidates: default_quantity_columns(),
        }
    }
}

/// Column names of an explicit Parent/Child table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentChildMapping {
    pub parent: String,
    pub child: String,
    pub quantity_candidates: Vec<String>,
}

impl Default for ParentChildMapping {
    fn default() -> Self {
        Self {
            parent: "Parent".to_string(),
            child: "Child".to_string(),
            quantity_candidates: default_quantity_columns(),
        }
    }
}

fn default_quantity_columns() -> Vec<String> {
    DEFAULT_QUANTITY_COLUMNS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

/// Resolve required columns, failing with every missing name at once.
fn require_columns(table: &BomTable, names: &[&str]) -> Result<Vec<usize>> {
    let resolved: Vec<Option<usize>> = names.iter().map(|n| table.column_index(n)).collect();
    let missing: Vec<&str> = names
        .iter()
        .zip(&resolved)
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(BomError::schema(missing));
    }

    Ok(resolved.into_iter().flatten().collect())
}

fn quantity_column(table: &BomTable, candidates: &[String]) -> Option<usize> {
    candidates.iter().find_map(|c| table.column_index(c))
}

/// Every column except the excluded ones, in header order.
fn attributes_of(table: &BomTable, record: usize, excluded: &[usize]) -> Attributes {
    table
        .headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| !excluded.contains(idx))
        .map(|(idx, name)| (name.clone(), table.cell(record, idx).to_string()))
        .collect()
}

fn is_blank_record(table: &BomTable, record: usize) -> bool {
    table.records[record].iter().all(|cell| cell.trim().is_empty())
}

/// Parse a level cell. Integral floats such as `2.0` are accepted.
fn parse_level(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(level) = raw.parse::<u32>() {
        return Some(level);
    }
    let value = raw.replace(',', ".").parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

/// Convert a table into leveled rows.
///
/// The level and component columns are required; if either is absent the
/// call fails before any record is read, naming every missing column. The
/// quantity column is optional and unreadable quantities default to 1.0.
/// All columns other than level and component are kept as attributes.
/// Completely blank records are skipped.
pub fn leveled_rows(table: &BomTable, mapping: &ColumnMapping) -> Result<Vec<LeveledRow>> {
    let columns = require_columns(table, &[mapping.level.as_str(), mapping.component.as_str()])?;
    let (level_col, component_col) = (columns[0], columns[1]);
    let qty_col = quantity_column(table, &mapping.quantity_candidates);
    let excluded = [level_col, component_col];

    let mut rows = Vec::with_capacity(table.len());
    for record in 0..table.len() {
        if is_blank_record(table, record) {
            tracing::debug!(row = record + 2, "Skipping blank record");
            continue;
        }

        let raw_level = table.cell(record, level_col);
        let level = parse_level(raw_level)
            .ok_or_else(|| BomError::invalid_value(&mapping.level, raw_level, record + 2))?;

        let quantity = qty_col.map_or(DEFAULT_QUANTITY, |col| parse_quantity(table.cell(record, col)));

        rows.push(LeveledRow {
            level,
            component: table.cell(record, component_col).into(),
            quantity,
            attributes: attributes_of(table, record, &excluded),
        });
    }

    tracing::debug!(rows = rows.len(), quantity_column = ?qty_col.map(|c| &table.headers[c]), "Parsed leveled rows");
    Ok(rows)
}

/// Convert an explicit Parent/Child table into relations.
pub fn relations_from_table(table: &BomTable, mapping: &ParentChildMapping) -> Result<Vec<BomRelation>> {
    let columns = require_columns(table, &[mapping.parent.as_str(), mapping.child.as_str()])?;
    let (parent_col, child_col) = (columns[0], columns[1]);
    let qty_col = quantity_column(table, &mapping.quantity_candidates);
    let excluded = [parent_col, child_col];

    let relations = (0..table.len())
        .filter(|&record| !is_blank_record(table, record))
        .map(|record| BomRelation {
            parent: table.cell(record, parent_col).into(),
            child: table.cell(record, child_col).into(),
            quantity: qty_col.map_or(DEFAULT_QUANTITY, |col| parse_quantity(table.cell(record, col))),
            attributes: attributes_of(table, record, &excluded),
        })
        .collect();

    Ok(relations)
}
