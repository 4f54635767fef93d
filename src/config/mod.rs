//! Configuration for bom-topology.
//!
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//!
//! # Configuration File
//!
//! Place a `.bom-topology.yaml` file in your project root or
//! `~/.config/bom-topology/`:
//!
//! ```yaml
//! ingest:
//!   delimiter: ';'
//!   quantity_columns: ["Comp. Qty (BUn)", "Menge"]
//! explosion:
//!   max_depth: 12
//! output:
//!   format: table
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    CONFIG_FILE_NAME, DEFAULT_DELIMITER, DEFAULT_EXPLOSION_QUANTITY, DEFAULT_PRECISION,
    MAX_PRECISION,
};
pub use types::{
    AppConfig, AppConfigBuilder, ExplosionSettings, IngestConfig, OutputConfig, TableLayout,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    user_config_path, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.bom-topology.yaml`.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
