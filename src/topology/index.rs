//! Precomputed lookups over a topology.
//!
//! `Topology::children_of` scans every edge. Renderers and inspectors that
//! walk the whole graph should build a [`TopologyIndex`] once instead.

use crate::model::{ComponentId, Topology, TopologyEdge};
use std::collections::HashMap;

/// Edge indices by source and target component.
#[derive(Debug, Clone)]
#[must_use]
pub struct TopologyIndex {
    edges_by_source: HashMap<ComponentId, Vec<usize>>,
    edges_by_target: HashMap<ComponentId, Vec<usize>>,
    edge_count: usize,
}

impl TopologyIndex {
    /// Build the index for a topology
    pub fn build(topology: &Topology) -> Self {
        let mut edges_by_source: HashMap<ComponentId, Vec<usize>> = HashMap::new();
        let mut edges_by_target: HashMap<ComponentId, Vec<usize>> = HashMap::new();

        for (idx, edge) in topology.edges.iter().enumerate() {
            edges_by_source
                .entry(edge.from.clone())
                .or_default()
                .push(idx);
            edges_by_target.entry(edge.to.clone()).or_default().push(idx);
        }

        Self {
            edges_by_source,
            edges_by_target,
            edge_count: topology.edges.len(),
        }
    }

    /// Outgoing edges of a node, in discovery order
    pub fn children_of<'a>(&self, id: &str, topology: &'a Topology) -> Vec<&'a TopologyEdge> {
        self.edges_by_source
            .get(id)
            .map(|indices| indices.iter().map(|&i| &topology.edges[i]).collect())
            .unwrap_or_default()
    }

    /// Incoming edges of a node, in discovery order
    pub fn parents_of<'a>(&self, id: &str, topology: &'a Topology) -> Vec<&'a TopologyEdge> {
        self.edges_by_target
            .get(id)
            .map(|indices| indices.iter().map(|&i| &topology.edges[i]).collect())
            .unwrap_or_default()
    }

    /// Number of outgoing edges
    #[must_use]
    pub fn out_degree(&self, id: &str) -> usize {
        self.edges_by_source.get(id).map_or(0, Vec::len)
    }

    /// Number of incoming edges
    #[must_use]
    pub fn in_degree(&self, id: &str) -> usize {
        self.edges_by_target.get(id).map_or(0, Vec::len)
    }

    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }
}
