//! Aligned table output for terminals.
//!
//! Column widths are measured in display cells, so component identifiers
//! with wide characters still line up.

use super::{ansi_color, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{DemandSummary, ExplosionTrace, Topology};
use unicode_width::UnicodeWidthStr;

/// Table reporter for terminal output
pub struct TableReporter {
    colored: bool,
}

impl TableReporter {
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

    /// Render rows under a header. Numeric columns are right-aligned.
    fn render(&self, headers: &[&str], numeric: &[bool], rows: &[Vec<String>]) -> Vec<String> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for row in rows {
            for (idx, cell) in row.iter().enumerate() {
                widths[idx] = widths[idx].max(cell.width());
            }
        }

        let header = headers
            .iter()
            .enumerate()
            .map(|(idx, h)| align(h, widths[idx], numeric[idx]))
            .collect::<Vec<_>>()
            .join("  ");
        let rule = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ");

        let mut lines = vec![self.color(header.trim_end(), "bold"), self.color(&rule, "dim")];
        for row in rows {
            let line = row
                .iter()
                .enumerate()
                .map(|(idx, cell)| align(cell, widths[idx], numeric[idx]))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(line.trim_end().to_string());
        }
        lines
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Pad to a display width.
fn align(text: &str, width: usize, right: bool) -> String {
    let pad = " ".repeat(width.saturating_sub(text.width()));
    if right {
        format!("{pad}{text}")
    } else {
        format!("{text}{pad}")
    }
}

impl ReportGenerator for TableReporter {
    fn generate_topology_report(
        &self,
        topology: &Topology,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let rows: Vec<Vec<String>> = topology
            .edges
            .iter()
            .map(|e| {
                vec![
                    e.from.to_string(),
                    e.to.to_string(),
                    config.quantity(e.quantity),
                ]
            })
            .collect();

        let mut lines = self.render(&["Parent", "Child", "Quantity"], &[false, false, true], &rows);
        lines.push(String::new());
        lines.push(format!(
            "{} nodes, {} edges",
            topology.node_count(),
            topology.edge_count()
        ));
        Ok(lines.join("\n") + "\n")
    }

    fn generate_explosion_report(
        &self,
        trace: &ExplosionTrace,
        summary: &DemandSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        if config.include_trace {
            let rows: Vec<Vec<String>> = trace
                .iter()
                .map(|e| {
                    vec![
                        e.depth.to_string(),
                        format!("{}{}", "  ".repeat(e.depth), e.component),
                        e.class.label().to_string(),
                        config.quantity(e.cumulative_quantity),
                    ]
                })
                .collect();
            lines.extend(self.render(
                &["Depth", "Component", "Type", "Quantity"],
                &[true, false, false, true],
                &rows,
            ));
            lines.push(String::new());
        }

        let rows: Vec<Vec<String>> = summary
            .sorted()
            .into_iter()
            .map(|(id, total)| vec![id.to_string(), config.quantity(total)])
            .collect();
        lines.extend(self.render(&["Raw Material", "Total"], &[false, true], &rows));

        Ok(lines.join("\n") + "\n")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explosion::{aggregate, explode};
    use crate::model::AdjacencyBom;

    #[test]
    fn test_columns_align_with_wide_characters() {
        let bom = AdjacencyBom::from_tuples([("FG", vec![("螺丝", 4.0), ("NUT", 10.0)])]);
        let trace = explode(&bom, "FG", 1.0);
        let report = TableReporter::new()
            .no_color()
            .generate_explosion_report(&trace, &aggregate(&trace), &ReportConfig::default())
            .expect("report");

        let demand: Vec<&str> = report
            .lines()
            .skip_while(|l| !l.starts_with("Raw Material"))
            .skip(2)
            .collect();
        assert_eq!(demand.len(), 2);
        assert!(demand[0].starts_with("NUT ") && demand[0].ends_with(" 10.00"));
        assert!(demand[1].starts_with("螺丝 ") && demand[1].ends_with(" 4.00"));
        assert_eq!(demand[0].width(), demand[1].width());
    }

    #[test]
    fn test_topology_table() {
        let bom = AdjacencyBom::from_tuples([("FG", vec![("C1", 2.0)])]);
        let topology = crate::topology::build(&crate::topology::relations_from_adjacency(&bom));
        let report = TableReporter::new()
            .no_color()
            .generate_topology_report(&topology, &ReportConfig::default())
            .expect("report");
        let row = report.lines().nth(2).expect("edge row");
        assert_eq!(row, format!("{:<6}  {:<5}  {:>8}", "FG", "C1", "2.00"));
        assert!(report.ends_with("2 nodes, 1 edges\n"));
    }
}
