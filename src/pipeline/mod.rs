//! Pipeline orchestration for CLI commands.
//!
//! load → (reconstruct | explode) → report, shared by the command handlers.

mod load;
mod output;
mod report_stage;

pub use load::{load_bom, read_table, InputKind, LoadedBom};
pub use output::{should_use_color, write_output, OutputTarget};
pub use report_stage::{output_explosion, output_topology};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Circular references were found and `--fail-on-cycle` was given
    pub const CYCLES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
