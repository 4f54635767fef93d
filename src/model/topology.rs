//! Topology: unique node set plus quantity-weighted edges.

use super::{Attributes, ComponentId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use xxhash_rust::xxh3::xxh3_64;

/// A directed parent → child edge as seen by renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyEdge {
    pub from: ComponentId,
    pub to: ComponentId,
    pub quantity: f64,
    /// Pass-through attributes of the row that produced this edge
    #[serde(default)]
    pub meta: Attributes,
}

/// Nodes and edges reconstructed from one BOM snapshot.
///
/// Every `from`/`to` of an edge is in `nodes`, and `nodes` holds nothing
/// else. Edges keep discovery order; repeated parent → child pairs are kept
/// as separate edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    /// Unique component identifiers, sorted
    pub nodes: BTreeSet<ComponentId>,
    /// Edges in discovery order
    pub edges: Vec<TopologyEdge>,
    /// Parent of the first discovered edge, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<ComponentId>,
}

impl Topology {
    /// Number of unique nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, duplicates included
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the topology holds no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check whether a node exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    /// Outgoing edges of a node, in discovery order
    #[must_use]
    pub fn children_of(&self, id: &str) -> Vec<&TopologyEdge> {
        self.edges.iter().filter(|e| e.from.as_str() == id).collect()
    }

    /// Incoming edges of a node, in discovery order
    #[must_use]
    pub fn parents_of(&self, id: &str) -> Vec<&TopologyEdge> {
        self.edges.iter().filter(|e| e.to.as_str() == id).collect()
    }

    /// Nodes that never appear as the target of an edge
    #[must_use]
    pub fn roots(&self) -> Vec<&ComponentId> {
        let targets: HashSet<&str> = self.edges.iter().map(|e| e.to.as_str()).collect();
        self.nodes
            .iter()
            .filter(|n| !targets.contains(n.as_str()))
            .collect()
    }

    /// Nodes that never appear as the source of an edge
    #[must_use]
    pub fn leaves(&self) -> Vec<&ComponentId> {
        let sources: HashSet<&str> = self.edges.iter().map(|e| e.from.as_str()).collect();
        self.nodes
            .iter()
            .filter(|n| !sources.contains(n.as_str()))
            .collect()
    }

    /// Hash of nodes and edges for quick equality checks
    #[must_use]
    pub fn content_hash(&self) -> u64 {
        let mut hasher_input = Vec::new();

        for node in &self.nodes {
            hasher_input.extend(node.as_str().as_bytes());
            hasher_input.push(0);
        }

        for edge in &self.edges {
            hasher_input.extend(edge.from.as_str().as_bytes());
            hasher_input.push(0);
            hasher_input.extend(edge.to.as_str().as_bytes());
            hasher_input.push(0);
            hasher_input.extend(edge.quantity.to_le_bytes());
        }

        xxh3_64(&hasher_input)
    }
}
