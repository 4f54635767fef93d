//! Leveled rows and the parent/child relations derived from them.

use super::ComponentId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping of column name to raw cell value.
pub type Attributes = IndexMap<String, String>;

/// Quantity used when a cell is absent or cannot be read as a number.
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Parse a quantity cell, tolerating a comma as decimal separator.
///
/// Empty, unparseable and non-finite values fall back to
/// [`DEFAULT_QUANTITY`]. This never fails.
#[must_use]
pub fn parse_quantity(raw: &str) -> f64 {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => DEFAULT_QUANTITY,
    }
}

/// One row of an indentation-style BOM export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeveledRow {
    /// Nesting depth; 1 is the topmost level
    pub level: u32,
    /// Component on this row
    pub component: ComponentId,
    /// Per-parent-unit quantity
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    /// Every other column, passed through verbatim
    #[serde(default)]
    pub attributes: Attributes,
}

fn default_quantity() -> f64 {
    DEFAULT_QUANTITY
}

impl LeveledRow {
    /// Create a row with the default quantity and no attributes
    pub fn new(level: u32, component: impl Into<ComponentId>) -> Self {
        Self {
            level,
            component: component.into(),
            quantity: DEFAULT_QUANTITY,
            attributes: Attributes::new(),
        }
    }

    /// Set the quantity
    #[must_use]
    pub const fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set the quantity from a raw cell value
    #[must_use]
    pub fn with_raw_quantity(mut self, raw: &str) -> Self {
        self.quantity = parse_quantity(raw);
        self
    }

    /// Add a pass-through attribute
    #[must_use]
    pub fn with_attribute(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(column.into(), value.into());
        self
    }
}

/// A parent/child link with the per-parent-unit quantity of the child.
///
/// The quantity is not multiplied by any ancestor quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomRelation {
    pub parent: ComponentId,
    pub child: ComponentId,
    pub quantity: f64,
    #[serde(default)]
    pub attributes: Attributes,
}

impl BomRelation {
    /// Create a relation without attributes
    pub fn new(parent: impl Into<ComponentId>, child: impl Into<ComponentId>, quantity: f64) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
            quantity,
            attributes: Attributes::new(),
        }
    }

    /// Attach attributes
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}
