//! Default values shared by the configuration types and the CLI.

/// Field separator of tabular exports.
pub const DEFAULT_DELIMITER: char = ',';

/// Decimal places used when printing quantities.
pub const DEFAULT_PRECISION: usize = 2;

/// Upper bound accepted for `output.precision`.
pub const MAX_PRECISION: usize = 12;

/// Quantity exploded when none is given on the command line.
pub const DEFAULT_EXPLOSION_QUANTITY: f64 = 1.0;

/// Name of the project-level configuration file.
pub const CONFIG_FILE_NAME: &str = ".bom-topology.yaml";

/// Alternative configuration file names, checked in order after the primary one.
pub const CONFIG_FILE_ALIASES: &[&str] = &[".bom-topology.yml", "bom-topology.yaml"];
