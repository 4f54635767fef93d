//! Topology command handler.
//!
//! Reads a BOM and prints the reconstructed nodes and edges.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_bom, output_topology};
use anyhow::Result;
use std::path::Path;

/// Run the topology command
pub fn run_topology(input: &Path, config: &AppConfig) -> Result<i32> {
    let loaded = load_bom(input, config)?;
    let topology = loaded.session.topology().cloned().unwrap_or_default();

    if topology.is_empty() {
        tracing::warn!(path = %input.display(), "No parent/child relations found");
    }

    output_topology(config, &topology, Some(&loaded.source_display()))?;
    Ok(exit_codes::SUCCESS)
}
