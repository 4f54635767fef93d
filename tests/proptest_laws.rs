//! Property-based tests for reconstruction, topology and explosion.
//!
//! Random inputs must never panic, and the structural laws of each stage
//! must hold for any input shape.

use bom_topology::explosion::{aggregate, explode};
use bom_topology::hierarchy::reconstruct;
use bom_topology::model::{parse_quantity, AdjacencyBom, BomRelation, LeveledRow, NodeClass};
use bom_topology::topology;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Small identifier alphabet so random graphs share nodes and form cycles.
fn component() -> impl Strategy<Value = String> {
    "[A-F][0-3]"
}

fn relations() -> impl Strategy<Value = Vec<BomRelation>> {
    prop::collection::vec((component(), component(), 0.0f64..100.0), 0..40).prop_map(|triples| {
        triples
            .into_iter()
            .map(|(parent, child, qty)| BomRelation::new(parent, child, qty))
            .collect()
    })
}

fn adjacency() -> impl Strategy<Value = AdjacencyBom> {
    prop::collection::vec(
        (
            component(),
            prop::collection::vec((component(), 0.1f64..10.0), 0..3),
        ),
        0..8,
    )
    .prop_map(AdjacencyBom::from_tuples)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn parse_quantity_never_panics(s in "\\PC{0,40}") {
        let q = parse_quantity(&s);
        prop_assert!(q.is_finite());
    }

    #[test]
    fn reconstruct_never_panics(levels in prop::collection::vec(0u32..8, 0..60)) {
        let rows: Vec<LeveledRow> = levels
            .iter()
            .enumerate()
            .map(|(i, &level)| LeveledRow::new(level, format!("N{i}")))
            .collect();
        let relations = reconstruct(&rows);
        // Only the first top-level row escapes without a relation.
        prop_assert!(relations.len() + 1 >= rows.len());
        prop_assert!(relations.len() <= rows.len());
    }

    #[test]
    fn increasing_levels_form_a_chain(len in 2usize..30) {
        let rows: Vec<LeveledRow> = (0..len)
            .map(|i| LeveledRow::new(i as u32 + 1, format!("N{i}")))
            .collect();
        let relations = reconstruct(&rows);

        prop_assert_eq!(relations.len(), len - 1);
        for (i, relation) in relations.iter().enumerate() {
            prop_assert_eq!(relation.parent.as_str(), format!("N{i}"));
            prop_assert_eq!(relation.child.as_str(), format!("N{}", i + 1));
        }
    }

    #[test]
    fn later_top_level_rows_attach_to_root(tail in prop::collection::vec(1u32..5, 1..40)) {
        let mut rows = vec![LeveledRow::new(1, "N0")];
        rows.extend(
            tail.iter()
                .enumerate()
                .map(|(i, &level)| LeveledRow::new(level, format!("N{}", i + 1))),
        );
        let relations = reconstruct(&rows);
        let parent_of: HashMap<&str, &str> = relations
            .iter()
            .map(|r| (r.child.as_str(), r.parent.as_str()))
            .collect();

        for row in rows.iter().skip(1).filter(|r| r.level == 1) {
            prop_assert_eq!(parent_of.get(row.component.as_str()).copied(), Some("N0"));
        }
    }

    #[test]
    fn topology_nodes_are_exactly_the_endpoints(relations in relations()) {
        let topo = topology::build(&relations);
        let expected: BTreeSet<&str> = relations
            .iter()
            .flat_map(|r| [r.parent.as_str(), r.child.as_str()])
            .collect();
        let actual: BTreeSet<&str> = topo.nodes.iter().map(|n| n.as_str()).collect();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(topo.edge_count(), relations.len());
    }

    #[test]
    fn explosion_terminates_and_is_deterministic(bom in adjacency(), root in component()) {
        let first = explode(&bom, &root, 1.0);
        let second = explode(&bom, &root, 1.0);

        prop_assert!(!first.is_empty());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.entries[0].depth, 0);
        prop_assert_eq!(first.entries[0].component.as_str(), root.as_str());
    }

    #[test]
    fn markers_never_have_children(bom in adjacency(), root in component()) {
        let trace = explode(&bom, &root, 1.0);
        for pair in trace.entries.windows(2) {
            if pair[0].class == NodeClass::CircularReference {
                prop_assert!(pair[1].depth <= pair[0].depth);
            }
        }
    }

    #[test]
    fn demand_equals_sum_of_raw_entries(bom in adjacency(), root in component(), mult in 0.0f64..50.0) {
        let trace = explode(&bom, &root, mult);
        let demand = aggregate(&trace);

        let raw_total: f64 = trace
            .iter()
            .filter(|e| e.class == NodeClass::RawMaterial)
            .map(|e| e.cumulative_quantity)
            .sum();
        prop_assert!((demand.total() - raw_total).abs() <= 1e-6 * raw_total.max(1.0));

        for (id, _) in demand.iter() {
            prop_assert!(bom.is_leaf(id.as_str()));
        }
    }
}
