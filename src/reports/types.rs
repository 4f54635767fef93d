//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Indented tree with a raw-material summary
    #[default]
    Summary,
    /// Aligned columns for terminal
    Table,
    /// Structured JSON output
    Json,
    /// CSV for spreadsheet import
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Decimal places for quantities
    pub precision: usize,
    /// Include the full explosion trace, not only the demand summary
    pub include_trace: bool,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            precision: 2,
            include_trace: true,
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.metadata.source_path = Some(source.into());
        self
    }

    /// Format a quantity at the configured precision
    #[must_use]
    pub fn quantity(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Input file the BOM was loaded from
    pub source_path: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Custom properties
    pub custom: std::collections::BTreeMap<String, String>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}

/// Render a requested quantity the way users typed it: integral values keep
/// one decimal (`1.0`), everything else uses the shortest form.
#[must_use]
pub fn display_multiplier(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
