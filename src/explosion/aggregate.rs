//! Raw-material demand aggregation.

use super::explode;
use crate::model::{AdjacencyBom, DemandSummary, ExplosionTrace, NodeClass};

/// Sum cumulative quantities per raw material across the whole trace.
///
/// Circular reference markers and non-leaf entries are skipped. A raw
/// material reached through several ancestors is summed, not overwritten.
#[must_use]
pub fn aggregate(trace: &ExplosionTrace) -> DemandSummary {
    let mut summary = DemandSummary::new();
    for entry in trace
        .iter()
        .filter(|e| e.class == NodeClass::RawMaterial)
    {
        summary.add(&entry.component, entry.cumulative_quantity);
    }
    summary
}

/// Explode `root` and aggregate its raw-material demand in one step.
#[must_use]
pub fn raw_material_summary(bom: &AdjacencyBom, root: &str, multiplier: f64) -> DemandSummary {
    aggregate(&explode(bom, root, multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_raw_material_is_summed() {
        let bom = AdjacencyBom::from_tuples([
            ("FG001", vec![("COMP001", 2.0), ("COMP002", 1.0), ("RM001", 4.0)]),
            ("COMP001", vec![("RM003", 2.0), ("RM001", 8.0)]),
            ("COMP002", vec![("RM001", 4.0)]),
        ]);
        let summary = raw_material_summary(&bom, "FG001", 1.0);
        assert_eq!(summary.get("RM001"), Some(24.0));
        assert_eq!(summary.get("RM003"), Some(4.0));
        assert!(!summary.contains("COMP001"));
        assert!(!summary.contains("FG001"));
    }

    #[test]
    fn test_cycle_markers_are_excluded() {
        let bom = AdjacencyBom::from_tuples([
            ("A", vec![("B", 1.0), ("RM", 2.0)]),
            ("B", vec![("A", 1.0)]),
        ]);
        let summary = raw_material_summary(&bom, "A", 1.0);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary.get("RM"), Some(2.0));
    }

    #[test]
    fn test_empty_trace() {
        let trace = ExplosionTrace::new("X", 1.0);
        assert!(aggregate(&trace).is_empty());
    }
}
