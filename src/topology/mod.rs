//! Topology construction and conversion.
//!
//! [`build`] turns reconstructed relations into a [`Topology`] for renderers.
//! [`to_adjacency`] bridges a topology to the [`AdjacencyBom`] shape the
//! explosion engine consumes.

mod index;

pub use index::TopologyIndex;

use crate::model::{AdjacencyBom, BomLine, BomRelation, Topology, TopologyEdge};
use std::collections::BTreeSet;

/// Build a topology from relations.
///
/// Nodes are the union of every parent and child. One edge is produced per
/// relation, in input order, without merging repeated pairs.
#[must_use]
pub fn build(relations: &[BomRelation]) -> Topology {
    let mut nodes = BTreeSet::new();
    let mut edges = Vec::with_capacity(relations.len());

    for relation in relations {
        nodes.insert(relation.parent.clone());
        nodes.insert(relation.child.clone());
        edges.push(TopologyEdge {
            from: relation.parent.clone(),
            to: relation.child.clone(),
            quantity: relation.quantity,
            meta: relation.attributes.clone(),
        });
    }

    let root = relations.first().map(|r| r.parent.clone());

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "Built topology"
    );

    Topology { nodes, edges, root }
}

/// Convert a topology to an adjacency BOM.
///
/// Each edge becomes one child line under its parent, in edge order. Nodes
/// without outgoing edges get an empty entry so they classify as raw
/// materials. Repeated parent → child edges stay separate lines.
#[must_use]
pub fn to_adjacency(topology: &Topology) -> AdjacencyBom {
    let mut bom = AdjacencyBom::new();

    for edge in &topology.edges {
        bom.add_line(edge.from.clone(), BomLine::new(edge.to.clone(), edge.quantity));
    }
    for node in &topology.nodes {
        bom.ensure_entry(node.clone());
    }

    bom
}

/// Convert an adjacency BOM back to relations.
///
/// Entries are walked in insertion order, lines in list order.
#[must_use]
pub fn relations_from_adjacency(bom: &AdjacencyBom) -> Vec<BomRelation> {
    bom.iter()
        .flat_map(|(parent, lines)| {
            lines
                .iter()
                .map(move |line| BomRelation::new(parent.clone(), line.child.clone(), line.quantity))
        })
        .collect()
}
