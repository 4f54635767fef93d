//! Unified error types for bom-topology.
//!
//! Only schema problems in the input (missing required columns) and I/O or
//! configuration failures surface as errors. Unparseable quantities, broken
//! level chains and cyclic references are recovered inside the core and
//! never reach this type.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bom-topology operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BomError {
    /// Required columns are absent from a tabular source
    #[error("Missing required columns in BOM data: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Errors while reading a BOM source
    #[error("Failed to parse BOM: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid CSV structure: {0}")]
    InvalidCsv(String),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Invalid value '{value}' for column '{column}' on row {row}")]
    InvalidValue {
        column: String,
        value: String,
        row: usize,
    },

    #[error("Unknown adjacency format - expected a JSON or YAML mapping")]
    UnknownFormat,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for bom-topology operations
pub type Result<T> = std::result::Result<T, BomError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl BomError {
    /// Create a schema error listing every missing column
    pub fn schema<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Schema {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for a cell that could not be read
    pub fn invalid_value(column: impl Into<String>, value: impl Into<String>, row: usize) -> Self {
        Self::parse(
            "invalid cell value",
            ParseErrorKind::InvalidValue {
                column: column.into(),
                value: value.into(),
                row,
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns the missing columns if this is a schema error
    #[must_use]
    pub fn missing_columns(&self) -> Option<&[String]> {
        match self {
            Self::Schema { missing } => Some(missing),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for BomError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for BomError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for BomError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

impl From<csv::Error> for BomError {
    fn from(err: csv::Error) -> Self {
        Self::parse("CSV reading", ParseErrorKind::InvalidCsv(err.to_string()))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The new context is prepended to whatever context the error already
/// carries, so a chain like `"loading rows: CSV reading"` shows the path
/// through the code.
///
/// # Example
///
/// ```ignore
/// use bom_topology::error::ErrorContext;
///
/// let table = BomTable::from_csv_reader(file, b',')
///     .with_context(|| format!("reading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<BomError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// Schema errors are passed through untouched: the missing column list must
/// reach the caller verbatim.
fn add_context_to_error(err: BomError, new_ctx: &str) -> BomError {
    match err {
        BomError::Schema { missing } => BomError::Schema { missing },
        BomError::Parse {
            context: existing,
            source,
        } => BomError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        BomError::Io {
            path,
            message,
            source,
        } => BomError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        BomError::Config(msg) => BomError::Config(chain_context(new_ctx, &msg)),
        BomError::Validation(msg) => BomError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| BomError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| BomError::Validation(f().into()))
    }
}
