//! Configuration validation.

use super::defaults::MAX_PRECISION;
use super::types::{AppConfig, ExplosionSettings, IngestConfig, OutputConfig, TableLayout};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.ingest.validate());
        errors.extend(self.explosion.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for IngestConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.delimiter_byte().is_none() {
            errors.push(ConfigError::new(
                "ingest.delimiter",
                format!("Delimiter must be a single ASCII character, got '{}'", self.delimiter),
            ));
        } else if self.delimiter == '"' || self.delimiter == '\n' {
            errors.push(ConfigError::new(
                "ingest.delimiter",
                "Delimiter cannot be a quote or newline",
            ));
        }

        let required = match self.layout {
            TableLayout::Leveled => [
                ("ingest.level_column", &self.level_column),
                ("ingest.component_column", &self.component_column),
            ],
            TableLayout::ParentChild => [
                ("ingest.parent_column", &self.parent_column),
                ("ingest.child_column", &self.child_column),
            ],
        };
        for (field, name) in required {
            if name.trim().is_empty() {
                errors.push(ConfigError::new(field, "Column name cannot be empty"));
            }
        }
        if required[0].1 == required[1].1 {
            errors.push(ConfigError::new(
                required[1].0,
                format!("Column '{}' is used twice", required[1].1),
            ));
        }

        if self.quantity_columns.iter().any(|c| c.trim().is_empty()) {
            errors.push(ConfigError::new(
                "ingest.quantity_columns",
                "Quantity column names cannot be empty",
            ));
        }

        errors
    }
}

impl Validatable for ExplosionSettings {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !self.default_quantity.is_finite() || self.default_quantity < 0.0 {
            errors.push(ConfigError::new(
                "explosion.default_quantity",
                format!(
                    "Default quantity must be a finite, non-negative number, got {}",
                    self.default_quantity
                ),
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        if self.precision > MAX_PRECISION {
            errors.push(ConfigError::new(
                "output.precision",
                format!(
                    "Precision must be at most {MAX_PRECISION}, got {}",
                    self.precision
                ),
            ));
        }

        errors
    }
}
