//! CSV report generator.
//!
//! Output is one or more `# Section` blocks, each a self-contained CSV table
//! suitable for spreadsheet import.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{DemandSummary, ExplosionTrace, Topology};

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize one section with the `csv` writer, which handles quoting.
fn section<I, R>(title: &str, header: &[&str], rows: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = ::csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::SerializationError(e.to_string()))?;
    let body =
        String::from_utf8(bytes).map_err(|e| ReportError::SerializationError(e.to_string()))?;
    Ok(format!("# {title}\n{body}"))
}

impl ReportGenerator for CsvReporter {
    fn generate_topology_report(
        &self,
        topology: &Topology,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        section(
            "Edges",
            &["Parent", "Child", "Quantity"],
            topology.edges.iter().map(|e| {
                [
                    e.from.to_string(),
                    e.to.to_string(),
                    config.quantity(e.quantity),
                ]
            }),
        )
    }

    fn generate_explosion_report(
        &self,
        trace: &ExplosionTrace,
        summary: &DemandSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();

        if config.include_trace {
            content.push_str(&section(
                "Explosion",
                &["Depth", "Component", "Quantity", "Type"],
                trace.iter().map(|e| {
                    [
                        e.depth.to_string(),
                        e.component.to_string(),
                        config.quantity(e.cumulative_quantity),
                        e.class.label().to_string(),
                    ]
                }),
            )?);
            content.push('\n');
        }

        content.push_str(&section(
            "Raw Materials",
            &["Component", "Total"],
            summary
                .sorted()
                .into_iter()
                .map(|(id, total)| [id.to_string(), config.quantity(total)]),
        )?);

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explosion::{aggregate, explode};
    use crate::model::AdjacencyBom;

    #[test]
    fn test_explosion_sections() {
        let bom = AdjacencyBom::from_tuples([("FG", vec![("RM, coated", 2.0)])]);
        let trace = explode(&bom, "FG", 1.0);
        let csv = CsvReporter::new()
            .generate_explosion_report(&trace, &aggregate(&trace), &ReportConfig::default())
            .expect("report");

        assert_eq!(
            csv,
            "# Explosion\n\
             Depth,Component,Quantity,Type\n\
             0,FG,1.00,Finished Good\n\
             1,\"RM, coated\",2.00,Raw Material\n\
             \n\
             # Raw Materials\n\
             Component,Total\n\
             \"RM, coated\",2.00\n"
        );
    }

    #[test]
    fn test_topology_edges() {
        let bom = AdjacencyBom::from_tuples([("FG", vec![("C1", 0.5)])]);
        let topology = crate::topology::build(&crate::topology::relations_from_adjacency(&bom));
        let csv = CsvReporter::new()
            .generate_topology_report(&topology, &ReportConfig::default())
            .expect("report");
        assert_eq!(csv, "# Edges\nParent,Child,Quantity\nFG,C1,0.50\n");
    }
}
