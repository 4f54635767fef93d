#![no_main]
use bom_topology::hierarchy::reconstruct;
use bom_topology::parsers::{leveled_rows, BomTable, ColumnMapping};
use bom_topology::topology;
use libfuzzer_sys::fuzz_target;

/// Fuzz CSV reading and hierarchy reconstruction.
///
/// Input without the expected header is also tried behind a standard
/// `Level,Component number,Quantity` header so record handling is reached.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mapping = ColumnMapping::default();

        for content in [s.to_string(), format!("Level,Component number,Quantity\n{s}")] {
            if let Ok(table) = BomTable::from_csv_str(&content, b',') {
                if let Ok(rows) = leveled_rows(&table, &mapping) {
                    let relations = reconstruct(&rows);
                    let topo = topology::build(&relations);
                    assert_eq!(topo.edge_count(), relations.len());
                }
            }
        }
    }
});
