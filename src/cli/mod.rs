//! CLI command handlers.
//!
//! Testable handlers invoked by `main.rs`. Each returns the process exit
//! code on success.

mod convert;
mod explode;
mod topology;

pub use convert::{run_convert, ConvertArgs};
pub use explode::{run_explode, ExplodeArgs};
pub use topology::run_topology;
