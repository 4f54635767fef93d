//! Summary report generator for shell output.
//!
//! The explosion summary is an indented tree, one line per trace entry,
//! followed by raw-material totals sorted by identifier.

use super::{
    ansi_color, display_multiplier, ReportConfig, ReportError, ReportFormat, ReportGenerator,
};
use crate::model::{DemandSummary, ExplosionTrace, NodeClass, Topology, SENTINEL_ROOT};

const BANNER_WIDTH: usize = 80;
const RULE_WIDTH: usize = 40;

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn class_color(class: NodeClass) -> &'static str {
        match class {
            NodeClass::FinishedGood => "bold",
            NodeClass::Compound => "cyan",
            NodeClass::RawMaterial => "green",
            NodeClass::CircularReference => "red",
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_topology_report(
        &self,
        topology: &Topology,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(config.title.as_deref().unwrap_or("BOM Topology"), "bold"));
        lines.push(self.color("─".repeat(RULE_WIDTH).as_str(), "dim"));

        if let Some(source) = &config.metadata.source_path {
            lines.push(format!("{}  {source}", self.color("Source:", "cyan")));
        }
        lines.push(format!(
            "{}    {}",
            self.color("Root:", "cyan"),
            topology.root.as_ref().map_or("-", |r| r.as_str())
        ));
        lines.push(format!("{}   {}", self.color("Nodes:", "cyan"), topology.node_count()));
        lines.push(format!("{}   {}", self.color("Edges:", "cyan"), topology.edge_count()));
        lines.push(format!("{}  {}", self.color("Leaves:", "cyan"), topology.leaves().len()));

        if topology.contains(SENTINEL_ROOT) {
            let orphans = topology.children_of(SENTINEL_ROOT).len();
            lines.push(self.color(
                &format!("  {orphans} orphaned row(s) attached to {SENTINEL_ROOT}"),
                "yellow",
            ));
        }

        if topology.is_empty() {
            lines.push(String::new());
            lines.push(format!("  {}", self.color("No relations", "dim")));
            return Ok(lines.join("\n") + "\n");
        }

        lines.push(String::new());
        lines.push(self.color("Edges:", "bold"));
        for edge in &topology.edges {
            lines.push(format!(
                "  {} → {} (Qty: {})",
                edge.from,
                edge.to,
                config.quantity(edge.quantity)
            ));
        }

        Ok(lines.join("\n") + "\n")
    }

    fn generate_explosion_report(
        &self,
        trace: &ExplosionTrace,
        summary: &DemandSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let banner = "=".repeat(BANNER_WIDTH);
        let mut lines = Vec::new();

        if let Some(title) = &config.title {
            lines.push(self.color(title, "bold"));
        }

        if config.include_trace {
            lines.push(banner.clone());
            lines.push(self.color(
                &format!(
                    "BOM EXPLOSION FOR: {} (Quantity: {})",
                    trace.root,
                    display_multiplier(trace.multiplier)
                ),
                "bold",
            ));
            lines.push(banner.clone());
            lines.push(String::new());

            for entry in trace {
                let indent = "  ".repeat(entry.depth);
                let prefix = if entry.depth > 0 { "└─ " } else { "" };
                let label = format!("[{}]", entry.class.label());
                lines.push(format!(
                    "{indent}{prefix}{} (Qty: {}) {}",
                    entry.component,
                    config.quantity(entry.cumulative_quantity),
                    self.color(&label, Self::class_color(entry.class))
                ));
            }

            lines.push(String::new());
            lines.push(banner);
            lines.push(String::new());
        }

        lines.push(self.color(
            &format!("RAW MATERIALS SUMMARY FOR {}:", trace.root),
            "bold",
        ));
        lines.push("-".repeat(RULE_WIDTH));
        if summary.is_empty() {
            lines.push(self.color("No raw materials", "dim"));
        }
        for (component, total) in summary.sorted() {
            lines.push(format!("{component}: {}", config.quantity(total)));
        }

        let cycles = trace.cycles().count();
        if cycles > 0 {
            lines.push(String::new());
            lines.push(self.color(
                &format!("{cycles} circular reference(s) detected"),
                "red",
            ));
        }

        Ok(lines.join("\n") + "\n")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
