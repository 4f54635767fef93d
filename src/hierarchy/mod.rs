//! Hierarchy reconstruction from indentation-style BOM exports.
//!
//! Each row carries a level and a component; its parent is the nearest
//! preceding row with a strictly smaller level. The first level-1 row is the
//! root of the whole export. Later level-1 rows hang directly off that root
//! and start a new chain.
//!
//! ```
//! use bom_topology::hierarchy::reconstruct;
//! use bom_topology::model::LeveledRow;
//!
//! let rows = vec![
//!     LeveledRow::new(1, "FG001"),
//!     LeveledRow::new(2, "COMP001").with_quantity(2.0),
//!     LeveledRow::new(3, "RM003").with_quantity(2.0),
//!     LeveledRow::new(2, "RM001").with_quantity(4.0),
//! ];
//! let relations = reconstruct(&rows);
//! assert_eq!(relations.len(), 3);
//! assert_eq!(relations[2].parent.as_str(), "FG001");
//! ```

use crate::model::{BomRelation, ComponentId, LeveledRow};

/// Level of the topmost rows.
pub const TOP_LEVEL: u32 = 1;

/// Convert an ordered sequence of leveled rows into parent → child relations.
///
/// Never fails. Rows whose ancestor chain is broken are attached to the root,
/// or to [`crate::model::SENTINEL_ROOT`] when no root has been seen yet.
#[must_use]
pub fn reconstruct(rows: &[LeveledRow]) -> Vec<BomRelation> {
    let mut reconstructor = HierarchyReconstructor::new();
    for row in rows {
        reconstructor.push_row(row);
    }
    reconstructor.finish()
}

/// Incremental level-stack reconstructor.
///
/// Feed rows in input order with [`push_row`](Self::push_row) and collect the
/// relations with [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct HierarchyReconstructor {
    /// Open ancestors, from the root chain base to the most recent row
    stack: Vec<(u32, ComponentId)>,
    root: Option<ComponentId>,
    relations: Vec<BomRelation>,
    /// Rows that fell back to the root or sentinel
    orphaned: usize,
}

impl HierarchyReconstructor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The first level-1 component seen, if any
    #[must_use]
    pub fn root(&self) -> Option<&ComponentId> {
        self.root.as_ref()
    }

    /// Number of rows whose parent had to be recovered
    #[must_use]
    pub const fn orphaned(&self) -> usize {
        self.orphaned
    }

    /// Relations emitted so far
    #[must_use]
    pub fn relations(&self) -> &[BomRelation] {
        &self.relations
    }

    /// Process one row.
    ///
    /// Level 0 is read as level 1.
    pub fn push_row(&mut self, row: &LeveledRow) {
        let level = if row.level == 0 {
            tracing::debug!(component = %row.component, "Level 0 row treated as level 1");
            TOP_LEVEL
        } else {
            row.level
        };

        if level == TOP_LEVEL {
            self.push_top_level(row);
            return;
        }

        while self.stack.last().is_some_and(|(open, _)| *open >= level) {
            self.stack.pop();
        }

        let parent = match self.stack.last() {
            Some((_, parent)) => parent.clone(),
            None => {
                self.orphaned += 1;
                let fallback = self.root.clone().unwrap_or_else(ComponentId::sentinel);
                tracing::debug!(
                    component = %row.component,
                    level,
                    parent = %fallback,
                    "No open ancestor, attaching to fallback parent"
                );
                fallback
            }
        };

        self.emit(parent, row);
        self.stack.push((level, row.component.clone()));
    }

    fn push_top_level(&mut self, row: &LeveledRow) {
        match &self.root {
            None => {
                self.root = Some(row.component.clone());
            }
            Some(root) => {
                let root = root.clone();
                self.emit(root, row);
            }
        }
        self.stack.clear();
        self.stack.push((TOP_LEVEL, row.component.clone()));
    }

    fn emit(&mut self, parent: ComponentId, row: &LeveledRow) {
        tracing::trace!(parent = %parent, child = %row.component, quantity = row.quantity, "relation");
        self.relations.push(
            BomRelation::new(parent, row.component.clone(), row.quantity)
                .with_attributes(row.attributes.clone()),
        );
    }

    /// Consume the reconstructor and return the relations in emission order
    #[must_use]
    pub fn finish(self) -> Vec<BomRelation> {
        if self.orphaned > 0 {
            tracing::debug!(
                orphaned = self.orphaned,
                "Recovered {} rows without an open ancestor",
                self.orphaned
            );
        }
        self.relations
    }
}
