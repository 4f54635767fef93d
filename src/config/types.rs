//! Configuration types for ingestion, explosion and output.

use super::defaults::{DEFAULT_DELIMITER, DEFAULT_EXPLOSION_QUANTITY, DEFAULT_PRECISION};
use crate::explosion::ExplosionConfig;
use crate::parsers::{ColumnMapping, ParentChildMapping, DEFAULT_QUANTITY_COLUMNS};
use crate::reports::{ReportConfig, ReportFormat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration, loaded from a config file and
/// overridden by command-line arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// How tabular BOM exports are read
    pub ingest: IngestConfig,
    /// Explosion behaviour
    pub explosion: ExplosionSettings,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Report settings derived from the output section.
    #[must_use]
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            precision: self.output.precision,
            include_trace: self.output.include_trace,
            ..ReportConfig::default()
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the CSV field delimiter.
    pub const fn delimiter(mut self, delimiter: char) -> Self {
        self.config.ingest.delimiter = delimiter;
        self
    }

    /// Set the table layout.
    pub const fn layout(mut self, layout: TableLayout) -> Self {
        self.config.ingest.layout = layout;
        self
    }

    /// Set the level column name.
    pub fn level_column(mut self, name: impl Into<String>) -> Self {
        self.config.ingest.level_column = name.into();
        self
    }

    /// Set the component column name.
    pub fn component_column(mut self, name: impl Into<String>) -> Self {
        self.config.ingest.component_column = name.into();
        self
    }

    /// Limit explosion depth.
    pub const fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.config.explosion.max_depth = max_depth;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set quantity precision.
    pub const fn precision(mut self, precision: usize) -> Self {
        self.config.output.precision = precision;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section configs
// ============================================================================

/// Shape of a tabular BOM export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TableLayout {
    /// One row per component with an indentation level
    #[default]
    Leveled,
    /// One row per explicit parent/child pair
    ParentChild,
}

/// Ingestion configuration for tabular exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct IngestConfig {
    /// Field delimiter (single ASCII character)
    pub delimiter: char,
    /// Table layout
    pub layout: TableLayout,
    /// Level column (leveled layout)
    pub level_column: String,
    /// Component column (leveled layout)
    pub component_column: String,
    /// Parent column (parent-child layout)
    pub parent_column: String,
    /// Child column (parent-child layout)
    pub child_column: String,
    /// Candidate quantity columns, first match wins
    pub quantity_columns: Vec<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        let leveled = ColumnMapping::default();
        let parent_child = ParentChildMapping::default();
        Self {
            delimiter: DEFAULT_DELIMITER,
            layout: TableLayout::default(),
            level_column: leveled.level,
            component_column: leveled.component,
            parent_column: parent_child.parent,
            child_column: parent_child.child,
            quantity_columns: DEFAULT_QUANTITY_COLUMNS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl IngestConfig {
    #[must_use]
    pub fn column_mapping(&self) -> ColumnMapping {
        ColumnMapping {
            level: self.level_column.clone(),
            component: self.component_column.clone(),
            quantity_candidates: self.quantity_columns.clone(),
        }
    }

    #[must_use]
    pub fn parent_child_mapping(&self) -> ParentChildMapping {
        ParentChildMapping {
            parent: self.parent_column.clone(),
            child: self.child_column.clone(),
            quantity_candidates: self.quantity_columns.clone(),
        }
    }

    /// Delimiter as a byte, if it is a single ASCII character.
    #[must_use]
    pub fn delimiter_byte(&self) -> Option<u8> {
        u8::try_from(u32::from(self.delimiter))
            .ok()
            .filter(u8::is_ascii)
    }
}

/// Explosion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExplosionSettings {
    /// Quantity exploded when none is given
    pub default_quantity: f64,
    /// Stop descending below this depth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for ExplosionSettings {
    fn default() -> Self {
        Self {
            default_quantity: DEFAULT_EXPLOSION_QUANTITY,
            max_depth: None,
        }
    }
}

impl ExplosionSettings {
    #[must_use]
    pub const fn engine_config(&self) -> ExplosionConfig {
        ExplosionConfig {
            max_depth: self.max_depth,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Decimal places for quantities
    pub precision: usize,
    /// Include the per-node explosion listing
    pub include_trace: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Summary,
            file: None,
            no_color: false,
            precision: DEFAULT_PRECISION,
            include_trace: true,
        }
    }
}
