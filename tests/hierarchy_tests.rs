//! Hierarchy reconstruction and topology tests.
//!
//! Exercise the level-stack rules on hand-built rows and on the indented
//! widget export, then check the topology and adjacency conversions built on
//! top of them.

use bom_topology::hierarchy::{reconstruct, HierarchyReconstructor};
use bom_topology::model::{BomRelation, LeveledRow, SENTINEL_ROOT};
use bom_topology::parsers::{leveled_rows, BomTable, ColumnMapping};
use bom_topology::topology::{self, TopologyIndex};
use std::path::{Path, PathBuf};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn pairs(relations: &[BomRelation]) -> Vec<(&str, &str)> {
    relations
        .iter()
        .map(|r| (r.parent.as_str(), r.child.as_str()))
        .collect()
}

fn widget_rows() -> Vec<LeveledRow> {
    let table = BomTable::from_path(&fixture_path("widget_export.csv"), b',').expect("read csv");
    leveled_rows(&table, &ColumnMapping::default()).expect("valid columns")
}

// ============================================================================
// Level-stack rules
// ============================================================================

mod level_stack {
    use super::*;

    #[test]
    fn strictly_increasing_levels_form_a_path() {
        let rows: Vec<LeveledRow> = (1..=6).map(|level| LeveledRow::new(level, format!("P{level}"))).collect();
        let relations = reconstruct(&rows);

        assert_eq!(relations.len(), 5);
        for (i, relation) in relations.iter().enumerate() {
            assert_eq!(relation.parent.as_str(), format!("P{}", i + 1));
            assert_eq!(relation.child.as_str(), format!("P{}", i + 2));
        }
    }

    #[test]
    fn later_top_level_rows_hang_off_the_first_root() {
        let rows = vec![
            LeveledRow::new(1, "FG001"),
            LeveledRow::new(2, "A"),
            LeveledRow::new(1, "FG002"),
            LeveledRow::new(2, "B"),
            LeveledRow::new(1, "FG003"),
        ];
        let relations = reconstruct(&rows);

        assert_eq!(
            pairs(&relations),
            vec![
                ("FG001", "A"),
                ("FG001", "FG002"),
                ("FG002", "B"),
                ("FG001", "FG003"),
            ]
        );
    }

    #[test]
    fn shallower_row_closes_deeper_subtrees() {
        let rows = vec![
            LeveledRow::new(1, "R"),
            LeveledRow::new(2, "A"),
            LeveledRow::new(3, "A1"),
            LeveledRow::new(4, "A1x"),
            LeveledRow::new(3, "A2"),
            LeveledRow::new(2, "B"),
            LeveledRow::new(3, "B1"),
        ];
        assert_eq!(
            pairs(&reconstruct(&rows)),
            vec![
                ("R", "A"),
                ("A", "A1"),
                ("A1", "A1x"),
                ("A", "A2"),
                ("R", "B"),
                ("B", "B1"),
            ]
        );
    }

    #[test]
    fn skipped_levels_attach_to_nearest_shallower_row() {
        let rows = vec![
            LeveledRow::new(1, "R"),
            LeveledRow::new(2, "A"),
            LeveledRow::new(5, "DEEP"),
            LeveledRow::new(3, "MID"),
        ];
        assert_eq!(
            pairs(&reconstruct(&rows)),
            vec![("R", "A"), ("A", "DEEP"), ("A", "MID")]
        );
    }

    #[test]
    fn rows_before_any_root_use_the_sentinel() {
        let rows = vec![LeveledRow::new(2, "ORPHAN"), LeveledRow::new(3, "CHILD")];
        let mut reconstructor = HierarchyReconstructor::new();
        for row in &rows {
            reconstructor.push_row(row);
        }

        assert_eq!(reconstructor.orphaned(), 1);
        assert!(reconstructor.root().is_none());
        assert_eq!(
            pairs(reconstructor.relations()),
            vec![(SENTINEL_ROOT, "ORPHAN"), ("ORPHAN", "CHILD")]
        );
    }

    #[test]
    fn level_zero_is_read_as_top_level() {
        let rows = vec![
            LeveledRow::new(0, "FG"),
            LeveledRow::new(2, "A"),
            LeveledRow::new(0, "FG2"),
        ];
        assert_eq!(pairs(&reconstruct(&rows)), vec![("FG", "A"), ("FG", "FG2")]);
    }

    #[test]
    fn quantities_and_attributes_are_carried() {
        let rows = vec![
            LeveledRow::new(1, "FG"),
            LeveledRow::new(2, "A")
                .with_raw_quantity("2,5")
                .with_attribute("Unit", "KG"),
            LeveledRow::new(2, "B").with_raw_quantity("lots"),
        ];
        let relations = reconstruct(&rows);

        assert_eq!(relations[0].quantity, 2.5);
        assert_eq!(relations[0].attributes.get("Unit").map(String::as_str), Some("KG"));
        assert_eq!(relations[1].quantity, 1.0);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(reconstruct(&[]).is_empty());
        assert!(reconstruct(&[LeveledRow::new(1, "ONLY")]).is_empty());
    }
}

// ============================================================================
// Indented export
// ============================================================================

mod widget_export {
    use super::*;

    #[test]
    fn export_reconstructs_expected_edges() {
        let relations = reconstruct(&widget_rows());
        assert_eq!(
            pairs(&relations),
            vec![
                ("FG001", "COMP001"),
                ("COMP001", "RM003"),
                ("COMP001", "RM004"),
                ("COMP001", "RM001"),
                ("FG001", "COMP002"),
                ("COMP002", "RM005"),
                ("COMP002", "RM006"),
                ("COMP002", "RM001"),
                ("FG001", "RM001"),
            ]
        );
    }

    #[test]
    fn extra_columns_become_edge_metadata() {
        let topo = topology::build(&reconstruct(&widget_rows()));
        let edge = &topo.edges[0];

        assert_eq!(edge.meta.get("Object description").map(String::as_str), Some("Frame assembly"));
        assert_eq!(edge.meta.get("Component unit").map(String::as_str), Some("EA"));
        assert!(edge.meta.contains_key("Comp. Qty (BUn)"));
        assert!(!edge.meta.contains_key("Level"));
        assert!(!edge.meta.contains_key("Component number"));
    }

    #[test]
    fn comma_decimal_quantity_is_read() {
        let relations = reconstruct(&widget_rows());
        let primer = relations
            .iter()
            .find(|r| r.child.as_str() == "RM004")
            .expect("primer row");
        assert_eq!(primer.quantity, 1.0);
    }

    #[test]
    fn export_and_adjacency_fixture_agree_on_demand() {
        let topo = topology::build(&reconstruct(&widget_rows()));
        let bom = topology::to_adjacency(&topo);
        let demand = bom_topology::raw_material_summary(&bom, "FG001", 1.0);

        assert_eq!(demand.get("RM001"), Some(24.0));
        assert_eq!(demand.get("RM003"), Some(4.0));
        assert_eq!(demand.len(), 5);
    }
}

// ============================================================================
// Topology
// ============================================================================

mod topology_build {
    use super::*;

    #[test]
    fn empty_relations_give_empty_topology() {
        let topo = topology::build(&[]);
        assert!(topo.nodes.is_empty());
        assert!(topo.edges.is_empty());
        assert!(topo.root.is_none());
    }

    #[test]
    fn nodes_are_exactly_the_endpoints() {
        let topo = topology::build(&reconstruct(&widget_rows()));
        let names: Vec<&str> = topo.nodes.iter().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["COMP001", "COMP002", "FG001", "RM001", "RM003", "RM004", "RM005", "RM006"]
        );
        assert_eq!(topo.edge_count(), 9);
        assert_eq!(topo.root.as_ref().map(|r| r.as_str()), Some("FG001"));
    }

    #[test]
    fn duplicate_pairs_stay_separate_edges() {
        let relations = vec![
            BomRelation::new("P", "C", 1.0),
            BomRelation::new("P", "C", 2.0),
        ];
        let topo = topology::build(&relations);
        assert_eq!(topo.node_count(), 2);
        assert_eq!(topo.edge_count(), 2);

        let bom = topology::to_adjacency(&topo);
        assert_eq!(bom.children("P").len(), 2);
        assert_eq!(bom_topology::raw_material_summary(&bom, "P", 1.0).get("C"), Some(3.0));
    }

    #[test]
    fn index_reports_degrees() {
        let topo = topology::build(&reconstruct(&widget_rows()));
        let index = TopologyIndex::build(&topo);

        assert_eq!(index.out_degree("FG001"), 3);
        assert_eq!(index.in_degree("RM001"), 3);
        assert_eq!(index.in_degree("FG001"), 0);
        assert_eq!(index.children_of("COMP002", &topo).len(), 3);
        assert_eq!(index.parents_of("RM001", &topo).len(), 3);
    }

    #[test]
    fn roots_and_leaves() {
        let topo = topology::build(&reconstruct(&widget_rows()));
        let roots: Vec<&str> = topo.roots().iter().map(|r| r.as_str()).collect();
        assert_eq!(roots, vec!["FG001"]);
        assert_eq!(topo.leaves().len(), 5);
    }

    #[test]
    fn adjacency_roundtrip_keeps_edges() {
        let topo = topology::build(&reconstruct(&widget_rows()));
        let bom = topology::to_adjacency(&topo);
        let rebuilt = topology::build(&topology::relations_from_adjacency(&bom));

        assert_eq!(rebuilt.nodes, topo.nodes);
        assert_eq!(rebuilt.edge_count(), topo.edge_count());
    }
}
