#![no_main]
use bom_topology::explosion::{aggregate, explode};
use bom_topology::parsers::parse_adjacency_str;
use libfuzzer_sys::fuzz_target;

/// Fuzz adjacency map parsing and explode every parsed component.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(bom) = parse_adjacency_str(s, None) {
            // Keep diamond-heavy inputs from taking exponential time.
            if bom.line_count() > 24 {
                return;
            }
            for sku in bom.skus() {
                let trace = explode(&bom, sku.as_str(), 1.0);
                let _ = aggregate(&trace);
            }
        }
    }
});
