//! Adjacency map loading (JSON or YAML).

use crate::error::{BomError, ErrorContext, ParseErrorKind, Result};
use crate::model::AdjacencyBom;
use std::path::Path;

/// Serialization of an adjacency file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AdjacencyFormat {
    Json,
    Yaml,
}

impl AdjacencyFormat {
    /// Guess the format from a file extension.
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Serialize an adjacency map.
pub fn render_adjacency(bom: &AdjacencyBom, format: AdjacencyFormat) -> Result<String> {
    let mut out = match format {
        AdjacencyFormat::Json => serde_json::to_string_pretty(bom)?,
        AdjacencyFormat::Yaml => serde_yaml::to_string(bom)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Sniff the format from content: a leading `{` means JSON, anything else
/// non-empty is read as YAML.
#[must_use]
pub fn detect_adjacency_format(content: &str) -> Option<AdjacencyFormat> {
    let first = content
        .trim_start_matches('\u{feff}')
        .trim_start()
        .chars()
        .next()?;
    if first == '{' {
        Some(AdjacencyFormat::Json)
    } else {
        Some(AdjacencyFormat::Yaml)
    }
}

/// Parse an adjacency map, sniffing the format when none is given.
pub fn parse_adjacency_str(content: &str, format: Option<AdjacencyFormat>) -> Result<AdjacencyBom> {
    let format = format
        .or_else(|| detect_adjacency_format(content))
        .ok_or_else(|| BomError::parse("empty adjacency document", ParseErrorKind::UnknownFormat))?;

    let content = content.trim_start_matches('\u{feff}');
    let bom: AdjacencyBom = match format {
        AdjacencyFormat::Json => serde_json::from_str(content)?,
        AdjacencyFormat::Yaml => serde_yaml::from_str(content)?,
    };

    tracing::debug!(
        format = format.name(),
        skus = bom.len(),
        lines = bom.line_count(),
        "Parsed adjacency BOM"
    );
    Ok(bom)
}

/// Load an adjacency map from a file.
pub fn load_adjacency(path: &Path) -> Result<AdjacencyBom> {
    let content = std::fs::read_to_string(path).map_err(|e| BomError::io(path, e))?;
    parse_adjacency_str(&content, AdjacencyFormat::from_extension(path))
        .with_context(|| format!("loading adjacency BOM from {}", path.display()))
}
