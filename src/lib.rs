//! **Reconstruct, inspect and explode manufacturing Bills of Materials.**
//!
//! ERP systems usually export a BOM as a flat, indented table: each row carries
//! a nesting level and a component number, and the parent of a row is implied by
//! the rows above it. `bom-topology` turns such exports into explicit
//! parent/child relations, builds a node/edge topology from them, and explodes
//! any component into its full multi-level tree with cumulative quantities and
//! a raw-material demand summary.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: shared data types: [`LeveledRow`], [`BomRelation`],
//!   [`Topology`], [`AdjacencyBom`], [`ExplosionTrace`] and [`DemandSummary`].
//! - **[`hierarchy`]**: rebuilds parent/child relations from leveled rows.
//! - **[`topology`]**: turns relations into a node set plus weighted edges, and
//!   converts between topology and adjacency form.
//! - **[`explosion`]**: depth-first explosion with cycle protection, and
//!   raw-material aggregation.
//! - **[`parsers`]**: CSV tables and JSON/YAML adjacency maps.
//! - **[`session`]**: a caller-owned holder for the most recently loaded BOM.
//! - **[`reports`]**: summary, table, JSON and CSV renderers.
//!
//! ## Getting Started
//!
//! ```
//! use bom_topology::{explosion, hierarchy, topology, LeveledRow};
//!
//! let rows = vec![
//!     LeveledRow::new(1, "BIKE"),
//!     LeveledRow::new(2, "FRAME"),
//!     LeveledRow::new(3, "TUBE").with_quantity(3.0),
//!     LeveledRow::new(2, "WHEEL").with_quantity(2.0),
//!     LeveledRow::new(3, "SPOKE").with_quantity(32.0),
//! ];
//!
//! let relations = hierarchy::reconstruct(&rows);
//! let topo = topology::build(&relations);
//! assert_eq!(topo.node_count(), 5);
//!
//! let bom = topology::to_adjacency(&topo);
//! let demand = explosion::raw_material_summary(&bom, "BIKE", 10.0);
//! assert_eq!(demand.get("SPOKE"), Some(640.0));
//! assert_eq!(demand.get("TUBE"), Some(30.0));
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `bom-topology` binary wraps these modules: `topology`, `explode` and
//! `convert` subcommands, YAML configuration discovery and shell completions.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Level and depth casts are bounded by input size
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_excessive_bools
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod explosion;
pub mod hierarchy;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod session;
pub mod topology;

pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use error::{BomError, ErrorContext, OptionContext, ParseErrorKind, Result};
pub use explosion::{aggregate, explode, raw_material_summary, ExplosionConfig, ExplosionEngine};
pub use hierarchy::{reconstruct, HierarchyReconstructor};
pub use model::{
    AdjacencyBom, BomLine, BomRelation, ComponentId, DemandSummary, ExplosionTrace, LeveledRow,
    NodeClass, Topology, TopologyEdge, TraceEntry, SENTINEL_ROOT,
};
pub use parsers::{leveled_rows, load_adjacency, BomTable, ColumnMapping, ParentChildMapping};
pub use reports::{ReportFormat, ReportGenerator};
pub use session::BomSession;
pub use topology::TopologyIndex;
