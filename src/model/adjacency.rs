//! Adjacency-map BOM: component → ordered list of (child, unit quantity).

use super::ComponentId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One child line of an assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BomLineRepr", into = "(ComponentId, f64)")]
pub struct BomLine {
    pub child: ComponentId,
    /// Quantity of `child` per unit of the parent
    pub quantity: f64,
}

impl BomLine {
    pub fn new(child: impl Into<ComponentId>, quantity: f64) -> Self {
        Self {
            child: child.into(),
            quantity,
        }
    }
}

/// Accepted on input: `["RM001", 2.0]` or `{"child": "RM001", "quantity": 2.0}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum BomLineRepr {
    Tuple(ComponentId, f64),
    Struct {
        child: ComponentId,
        #[serde(default = "unit_quantity")]
        quantity: f64,
    },
}

fn unit_quantity() -> f64 {
    super::DEFAULT_QUANTITY
}

impl From<BomLineRepr> for BomLine {
    fn from(repr: BomLineRepr) -> Self {
        match repr {
            BomLineRepr::Tuple(child, quantity) | BomLineRepr::Struct { child, quantity } => {
                Self { child, quantity }
            }
        }
    }
}

/// Written out as `["RM001", 2.0]`.
impl From<BomLine> for (ComponentId, f64) {
    fn from(line: BomLine) -> Self {
        (line.child, line.quantity)
    }
}

/// Adjacency representation of a BOM.
///
/// A component with no entry, or with an empty list, is a raw material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyBom {
    entries: IndexMap<ComponentId, Vec<BomLine>>,
}

impl AdjacencyBom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(parent, [(child, quantity)])` pairs.
    pub fn from_tuples<P, C, L, I>(entries: I) -> Self
    where
        P: Into<ComponentId>,
        C: Into<ComponentId>,
        L: IntoIterator<Item = (C, f64)>,
        I: IntoIterator<Item = (P, L)>,
    {
        let mut bom = Self::new();
        for (parent, lines) in entries {
            let lines: Vec<BomLine> = lines
                .into_iter()
                .map(|(child, qty)| BomLine::new(child, qty))
                .collect();
            bom.insert(parent, lines);
        }
        bom
    }

    /// Replace the child list of a component.
    pub fn insert(&mut self, parent: impl Into<ComponentId>, lines: Vec<BomLine>) {
        self.entries.insert(parent.into(), lines);
    }

    /// Append one child line, creating the entry if needed.
    pub fn add_line(&mut self, parent: impl Into<ComponentId>, line: BomLine) {
        self.entries.entry(parent.into()).or_default().push(line);
    }

    /// Make sure a component has an entry, leaving existing lines alone.
    pub fn ensure_entry(&mut self, id: impl Into<ComponentId>) {
        self.entries.entry(id.into()).or_default();
    }

    /// Child lines of a component; empty for raw materials.
    #[must_use]
    pub fn children(&self, id: &str) -> &[BomLine] {
        self.entries.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a component has no recorded sub-components.
    #[must_use]
    pub fn is_leaf(&self, id: &str) -> bool {
        self.children(id).is_empty()
    }

    /// Whether a component has an entry, even an empty one.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Components with an entry, in insertion order.
    pub fn skus(&self) -> impl Iterator<Item = &ComponentId> {
        self.entries.keys()
    }

    /// All entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ComponentId, &[BomLine])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of child lines across all entries.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl FromIterator<(ComponentId, Vec<BomLine>)> for AdjacencyBom {
    fn from_iter<T: IntoIterator<Item = (ComponentId, Vec<BomLine>)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
