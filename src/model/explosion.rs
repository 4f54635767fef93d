//! Explosion trace and raw-material demand summary.

use super::ComponentId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a node in an exploded BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeClass {
    /// The requested entry point, when it has sub-components
    FinishedGood,
    /// An intermediate assembly
    Compound,
    /// A component with no recorded sub-components
    RawMaterial,
    /// A component already open on the current descent path
    CircularReference,
}

impl NodeClass {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FinishedGood => "Finished Good",
            Self::Compound => "Compound",
            Self::RawMaterial => "Raw Material",
            Self::CircularReference => "Circular Reference",
        }
    }

    /// Short machine-friendly name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FinishedGood => "finished-good",
            Self::Compound => "compound",
            Self::RawMaterial => "raw-material",
            Self::CircularReference => "circular-reference",
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One node occurrence in the exploded tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Distance from the requested root (root = 0)
    pub depth: usize,
    pub component: ComponentId,
    /// Multiplier times every unit quantity on the path from the root
    pub cumulative_quantity: f64,
    pub class: NodeClass,
}

/// Depth-first preorder listing of an exploded BOM.
///
/// A node's entry always precedes the entries of its own sub-tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionTrace {
    /// Requested root
    pub root: ComponentId,
    /// Requested quantity of the root
    pub multiplier: f64,
    /// Entries in preorder, root first
    pub entries: Vec<TraceEntry>,
}

impl ExplosionTrace {
    /// Create an empty trace for a root and multiplier
    pub fn new(root: impl Into<ComponentId>, multiplier: f64) -> Self {
        Self {
            root: root.into(),
            multiplier,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEntry> {
        self.entries.iter()
    }

    /// Circular reference markers in the trace
    pub fn cycles(&self) -> impl Iterator<Item = &TraceEntry> {
        self.entries
            .iter()
            .filter(|e| e.class == NodeClass::CircularReference)
    }

    /// Whether any cycle was detected
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        self.cycles().next().is_some()
    }

    /// Deepest depth reached
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.entries.iter().map(|e| e.depth).max().unwrap_or(0)
    }

    /// Number of entries per classification
    #[must_use]
    pub fn count_by_class(&self) -> IndexMap<NodeClass, usize> {
        let mut counts = IndexMap::new();
        for entry in &self.entries {
            *counts.entry(entry.class).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a ExplosionTrace {
    type Item = &'a TraceEntry;
    type IntoIter = std::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Total required quantity per raw material.
///
/// Keys appear in first-occurrence order; use [`DemandSummary::sorted`] for
/// a stable listing by identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DemandSummary {
    totals: IndexMap<ComponentId, f64>,
}

impl DemandSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quantity to a component's running total
    pub fn add(&mut self, component: &ComponentId, quantity: f64) {
        *self.totals.entry(component.clone()).or_insert(0.0) += quantity;
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<f64> {
        self.totals.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.totals.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum of all totals
    #[must_use]
    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ComponentId, f64)> {
        self.totals.iter().map(|(k, v)| (k, *v))
    }

    /// Entries sorted by identifier
    #[must_use]
    pub fn sorted(&self) -> Vec<(&ComponentId, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
