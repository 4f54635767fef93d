//! Report generation for topologies and explosion results.
//!
//! Formats:
//! - Summary: indented tree plus raw-material totals, for people
//! - Table: aligned columns for terminals
//! - JSON: structured data for programmatic integration
//! - CSV: spreadsheet import

mod csv;
mod json;
mod summary;
mod table;
mod types;

pub use self::csv::CsvReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use table::TableReporter;
pub use types::{display_multiplier, ReportConfig, ReportFormat, ReportMetadata};

use crate::model::{DemandSummary, ExplosionTrace, Topology};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<::csv::Error> for ReportError {
    fn from(err: ::csv::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a reconstructed topology
    fn generate_topology_report(
        &self,
        topology: &Topology,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Render an explosion trace together with its demand summary
    fn generate_explosion_report(
        &self,
        trace: &ExplosionTrace,
        summary: &DemandSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write an explosion report to a writer
    fn write_explosion_report(
        &self,
        trace: &ExplosionTrace,
        summary: &DemandSummary,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_explosion_report(trace, summary, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        for format in [
            ReportFormat::Summary,
            ReportFormat::Table,
            ReportFormat::Json,
            ReportFormat::Csv,
        ] {
            assert_eq!(create_reporter_with_options(format, false).format(), format);
        }
    }

    #[test]
    fn test_ansi_color_disabled() {
        assert_eq!(ansi_color("x", "red", false), "x");
        assert_eq!(ansi_color("x", "red", true), "\x1b[31mx\x1b[0m");
    }
}
