//! Input loading stage.
//!
//! Reads a BOM file into a [`BomSession`], choosing the reader from the file
//! extension: `.json`, `.yaml` and `.yml` are adjacency maps, everything else
//! is treated as a delimited table.

use crate::config::{AppConfig, TableLayout};
use crate::error::BomError;
use crate::parsers::{load_adjacency, relations_from_table, AdjacencyFormat, BomTable};
use crate::session::BomSession;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Kind of BOM source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Delimited table (leveled or parent/child)
    Table,
    /// JSON or YAML adjacency map
    Adjacency,
}

impl InputKind {
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        if AdjacencyFormat::from_extension(path).is_some() {
            Self::Adjacency
        } else {
            Self::Table
        }
    }
}

/// A BOM loaded from disk
#[derive(Debug)]
pub struct LoadedBom {
    pub session: BomSession,
    pub source: PathBuf,
    pub kind: InputKind,
}

impl LoadedBom {
    /// Source path for report metadata
    #[must_use]
    pub fn source_display(&self) -> String {
        self.source.to_string_lossy().to_string()
    }
}

/// Read a delimited table using the ingest settings.
pub fn read_table(path: &Path, config: &AppConfig) -> Result<BomTable> {
    let delimiter = config.ingest.delimiter_byte().ok_or_else(|| {
        BomError::config(format!(
            "delimiter '{}' is not a single ASCII character",
            config.ingest.delimiter
        ))
    })?;
    BomTable::from_path(path, delimiter)
        .with_context(|| format!("Failed to read BOM table from {}", path.display()))
}

/// Load any supported BOM file.
pub fn load_bom(path: &Path, config: &AppConfig) -> Result<LoadedBom> {
    let kind = InputKind::detect(path);
    let mut session = BomSession::new().with_explosion_config(config.explosion.engine_config());

    match kind {
        InputKind::Adjacency => {
            let bom = load_adjacency(path)?;
            session.load_adjacency(bom);
        }
        InputKind::Table => {
            let table = read_table(path, config)?;
            match config.ingest.layout {
                TableLayout::Leveled => {
                    session
                        .load_table(&table, &config.ingest.column_mapping())
                        .with_context(|| format!("Invalid BOM table {}", path.display()))?;
                }
                TableLayout::ParentChild => {
                    let relations =
                        relations_from_table(&table, &config.ingest.parent_child_mapping())
                            .with_context(|| format!("Invalid BOM table {}", path.display()))?;
                    session.load_relations(relations);
                }
            }
        }
    }

    if let Some(topology) = session.topology() {
        tracing::info!(
            path = %path.display(),
            nodes = topology.node_count(),
            edges = topology.edge_count(),
            "Loaded BOM"
        );
    }

    Ok(LoadedBom {
        session,
        source: path.to_path_buf(),
        kind,
    })
}
