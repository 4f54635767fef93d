//! Caller-owned holder for the most recently loaded BOM.
//!
//! Front ends that keep "the current BOM" between interactions own a
//! [`BomSession`] and pass it around explicitly. Each load replaces the whole
//! state; the core functions stay stateless.

use crate::error::{OptionContext, Result};
use crate::explosion::{aggregate, ExplosionConfig, ExplosionEngine};
use crate::hierarchy::reconstruct;
use crate::model::{
    AdjacencyBom, BomRelation, ComponentId, DemandSummary, ExplosionTrace, LeveledRow, Topology,
    TopologyEdge,
};
use crate::parsers::{leveled_rows, BomTable, ColumnMapping};
use crate::topology::{build, relations_from_adjacency, to_adjacency};

/// One loaded BOM, in both topology and adjacency form.
#[derive(Debug, Clone, Default)]
pub struct BomSession {
    relations: Option<Vec<BomRelation>>,
    topology: Option<Topology>,
    adjacency: Option<AdjacencyBom>,
    explosion: ExplosionConfig,
}

impl BomSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use specific explosion settings for [`explode`](Self::explode).
    #[must_use]
    pub const fn with_explosion_config(mut self, config: ExplosionConfig) -> Self {
        self.explosion = config;
        self
    }

    /// Load leveled rows, replacing any previous BOM.
    pub fn load_rows(&mut self, rows: &[LeveledRow]) -> &Topology {
        self.load_relations(reconstruct(rows))
    }

    /// Load a table. On a schema error the previous BOM is kept.
    pub fn load_table(&mut self, table: &BomTable, mapping: &ColumnMapping) -> Result<&Topology> {
        let rows = leveled_rows(table, mapping)?;
        Ok(self.load_rows(&rows))
    }

    /// Load explicit relations, replacing any previous BOM.
    pub fn load_relations(&mut self, relations: Vec<BomRelation>) -> &Topology {
        let topology = build(&relations);
        self.adjacency = Some(to_adjacency(&topology));
        self.relations = Some(relations);
        self.topology.insert(topology)
    }

    /// Load an adjacency map, replacing any previous BOM.
    pub fn load_adjacency(&mut self, bom: AdjacencyBom) -> &Topology {
        let relations = relations_from_adjacency(&bom);
        let topology = build(&relations);
        self.adjacency = Some(bom);
        self.relations = Some(relations);
        self.topology.insert(topology)
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.relations = None;
        self.topology = None;
        self.adjacency = None;
    }

    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.relations.is_some()
    }

    #[must_use]
    pub const fn has_topology(&self) -> bool {
        self.topology.is_some()
    }

    #[must_use]
    pub const fn topology(&self) -> Option<&Topology> {
        self.topology.as_ref()
    }

    #[must_use]
    pub fn relations(&self) -> &[BomRelation] {
        self.relations.as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub const fn adjacency(&self) -> Option<&AdjacencyBom> {
        self.adjacency.as_ref()
    }

    /// The adjacency map, or a validation error when nothing is loaded.
    pub fn require_adjacency(&self) -> Result<&AdjacencyBom> {
        self.adjacency.as_ref().context_none("no BOM loaded")
    }

    /// Nodes of the loaded topology, empty when nothing is loaded.
    #[must_use]
    pub fn nodes(&self) -> Vec<&ComponentId> {
        self.topology
            .as_ref()
            .map(|t| t.nodes.iter().collect())
            .unwrap_or_default()
    }

    /// Edges of the loaded topology, empty when nothing is loaded.
    #[must_use]
    pub fn edges(&self) -> &[TopologyEdge] {
        self.topology.as_ref().map_or(&[], |t| t.edges.as_slice())
    }

    /// Explode a component of the loaded BOM.
    #[must_use]
    pub fn explode(&self, root: &str, multiplier: f64) -> Option<ExplosionTrace> {
        let bom = self.adjacency.as_ref()?;
        Some(
            ExplosionEngine::new(bom)
                .with_config(self.explosion)
                .explode(root, multiplier),
        )
    }

    /// Raw-material demand for a component of the loaded BOM.
    #[must_use]
    pub fn demand(&self, root: &str, multiplier: f64) -> Option<DemandSummary> {
        self.explode(root, multiplier).map(|trace| aggregate(&trace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<LeveledRow> {
        vec![
            LeveledRow::new(1, "FG"),
            LeveledRow::new(2, "C1").with_quantity(2.0),
            LeveledRow::new(3, "R1").with_quantity(3.0),
            LeveledRow::new(2, "R1").with_quantity(1.0),
        ]
    }

    #[test]
    fn test_empty_session() {
        let session = BomSession::new();
        assert!(!session.has_data());
        assert!(!session.has_topology());
        assert!(session.nodes().is_empty());
        assert!(session.edges().is_empty());
        assert!(session.explode("FG", 1.0).is_none());
        assert!(matches!(
            session.require_adjacency(),
            Err(crate::error::BomError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rows_then_explode() {
        let mut session = BomSession::new();
        let topology = session.load_rows(&rows());
        assert_eq!(topology.node_count(), 3);
        assert_eq!(session.edges().len(), 3);

        let demand = session.demand("FG", 2.0).expect("loaded");
        assert_eq!(demand.get("R1"), Some(14.0));
    }

    #[test]
    fn test_reload_replaces_state() {
        let mut session = BomSession::new();
        session.load_rows(&rows());
        session.load_adjacency(AdjacencyBom::from_tuples([("X", vec![("Y", 1.0)])]));
        let nodes: Vec<_> = session.nodes().into_iter().map(ComponentId::as_str).collect();
        assert_eq!(nodes, vec!["X", "Y"]);
        assert_eq!(session.relations().len(), 1);
    }

    #[test]
    fn test_schema_error_keeps_previous_bom() {
        let mut session = BomSession::new();
        session.load_rows(&rows());
        let bad = BomTable::new(["Part"], vec![vec!["A".to_string()]]);
        assert!(session.load_table(&bad, &ColumnMapping::default()).is_err());
        assert_eq!(session.edges().len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut session = BomSession::new();
        session.load_rows(&rows());
        session.clear();
        assert!(!session.has_data());
    }
}
