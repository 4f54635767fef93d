//! Multi-level BOM explosion.
//!
//! Expands an [`AdjacencyBom`] from a requested root, multiplying unit
//! quantities down every path, and sums raw-material demand.
//!
//! # Classification
//!
//! - A component with no adjacency entry, or an empty child list, is a
//!   [`NodeClass::RawMaterial`]. This wins over every other rule, including
//!   for the requested root itself.
//! - Otherwise the requested root is a [`NodeClass::FinishedGood`] and every
//!   deeper node is a [`NodeClass::Compound`].
//! - A component that is already open on the current descent path yields a
//!   single [`NodeClass::CircularReference`] entry and is not expanded again.
//!
//! The same component reached through different paths (a diamond) is
//! expanded once per path.
//!
//! ```
//! use bom_topology::explosion::{aggregate, explode};
//! use bom_topology::model::AdjacencyBom;
//!
//! let bom = AdjacencyBom::from_tuples([
//!     ("A", vec![("B", 2.0)]),
//!     ("B", vec![("C", 3.0)]),
//! ]);
//! let trace = explode(&bom, "A", 5.0);
//! let demand = aggregate(&trace);
//! assert!((demand.get("C").unwrap() - 30.0).abs() < 1e-9);
//! ```

mod aggregate;

pub use aggregate::{aggregate, raw_material_summary};

use crate::model::{AdjacencyBom, ComponentId, ExplosionTrace, NodeClass, TraceEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Explosion settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplosionConfig {
    /// Stop descending below this depth (`None` = unlimited)
    pub max_depth: Option<usize>,
}

/// Explode a component using default settings.
#[must_use]
pub fn explode(bom: &AdjacencyBom, root: &str, multiplier: f64) -> ExplosionTrace {
    ExplosionEngine::new(bom).explode(root, multiplier)
}

/// Depth-first explosion engine over one adjacency BOM.
#[derive(Debug, Clone)]
pub struct ExplosionEngine<'a> {
    bom: &'a AdjacencyBom,
    config: ExplosionConfig,
}

impl<'a> ExplosionEngine<'a> {
    pub const fn new(bom: &'a AdjacencyBom) -> Self {
        Self {
            bom,
            config: ExplosionConfig { max_depth: None },
        }
    }

    #[must_use]
    pub const fn with_config(mut self, config: ExplosionConfig) -> Self {
        self.config = config;
        self
    }

    /// Classify a component found at `depth`, ignoring cycles.
    #[must_use]
    pub fn classify(&self, id: &str, depth: usize) -> NodeClass {
        if self.bom.is_leaf(id) {
            NodeClass::RawMaterial
        } else if depth == 0 {
            NodeClass::FinishedGood
        } else {
            NodeClass::Compound
        }
    }

    /// Explode `root` for `multiplier` units.
    #[must_use]
    pub fn explode(&self, root: &str, multiplier: f64) -> ExplosionTrace {
        let root = ComponentId::from(root);
        let mut trace = ExplosionTrace::new(root.clone(), multiplier);
        let mut path = HashSet::new();

        self.descend(&root, multiplier, &mut path, &mut trace.entries);

        if trace.has_cycles() {
            tracing::warn!(
                root = %trace.root,
                cycles = trace.cycles().count(),
                "Circular references detected during explosion"
            );
        }
        tracing::debug!(
            root = %trace.root,
            entries = trace.len(),
            max_depth = trace.max_depth(),
            "Exploded BOM"
        );

        trace
    }

    /// Preorder walk with an explicit work stack so deep BOMs cannot
    /// exhaust the call stack.
    fn descend(
        &self,
        root: &ComponentId,
        multiplier: f64,
        path: &mut HashSet<ComponentId>,
        out: &mut Vec<TraceEntry>,
    ) {
        let mut stack = vec![Frame::Enter {
            id: root.clone(),
            quantity: multiplier,
            depth: 0,
        }];

        while let Some(frame) = stack.pop() {
            let (id, quantity, depth) = match frame {
                Frame::Leave(id) => {
                    path.remove(&id);
                    continue;
                }
                Frame::Enter {
                    id,
                    quantity,
                    depth,
                } => (id, quantity, depth),
            };

            if path.contains(&id) {
                out.push(TraceEntry {
                    depth,
                    component: id,
                    cumulative_quantity: quantity,
                    class: NodeClass::CircularReference,
                });
                continue;
            }

            let class = self.classify(id.as_str(), depth);
            out.push(TraceEntry {
                depth,
                component: id.clone(),
                cumulative_quantity: quantity,
                class,
            });

            let children = self.bom.children(id.as_str());
            if children.is_empty() {
                continue;
            }

            if self.config.max_depth.is_some_and(|max| depth >= max) {
                tracing::warn!(
                    component = %id,
                    depth,
                    "Depth limit reached, sub-components not expanded"
                );
                continue;
            }

            path.insert(id.clone());
            stack.push(Frame::Leave(id));
            // Reversed so the first child is popped first.
            stack.extend(children.iter().rev().map(|line| Frame::Enter {
                id: line.child.clone(),
                quantity: quantity * line.quantity,
                depth: depth + 1,
            }));
        }
    }
}

/// Pending work for [`ExplosionEngine::descend`].
enum Frame {
    Enter {
        id: ComponentId,
        quantity: f64,
        depth: usize,
    },
    /// All children of this component are done; close it on the path
    Leave(ComponentId),
}
