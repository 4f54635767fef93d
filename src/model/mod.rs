//! Shared data model for BOM topology and explosion.
//!
//! Two encodings of the same domain live side by side here:
//!
//! - **Leveled rows** ([`LeveledRow`]) from indentation-style exports, turned
//!   into [`BomRelation`]s by [`crate::hierarchy`] and into a [`Topology`] by
//!   [`crate::topology`].
//! - **Adjacency maps** ([`AdjacencyBom`]) consumed by [`crate::explosion`],
//!   producing an [`ExplosionTrace`] and a [`DemandSummary`].
//!
//! Both share [`ComponentId`], quantities as `f64`, and [`NodeClass`].
//! Every structure is built fresh from one input snapshot and is not mutated
//! afterwards.

mod adjacency;
mod explosion;
mod identifiers;
mod rows;
mod topology;

pub use adjacency::*;
pub use explosion::*;
pub use identifiers::*;
pub use rows::*;
pub use topology::*;
