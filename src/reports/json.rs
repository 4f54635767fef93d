//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{ComponentId, DemandSummary, ExplosionTrace, Topology, TopologyEdge, TraceEntry};
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let mut out = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        out.push('\n');
        Ok(out)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: String,
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom: Option<&'a BTreeMap<String, String>>,
}

impl<'a> JsonReportMetadata<'a> {
    fn from_config(config: &'a ReportConfig) -> Self {
        Self {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: config.metadata.tool_version.clone(),
            },
            generated_at: Utc::now().to_rfc3339(),
            title: config.title.as_deref(),
            source: config.metadata.source_path.as_deref(),
            custom: (!config.metadata.custom.is_empty()).then_some(&config.metadata.custom),
        }
    }
}

#[derive(Serialize)]
struct JsonTopologyReport<'a> {
    metadata: JsonReportMetadata<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<&'a ComponentId>,
    node_count: usize,
    edge_count: usize,
    nodes: Vec<&'a ComponentId>,
    edges: &'a [TopologyEdge],
}

#[derive(Serialize)]
struct JsonExplosionReport<'a> {
    metadata: JsonReportMetadata<'a>,
    root: &'a ComponentId,
    quantity: f64,
    circular_references: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a [TraceEntry]>,
    /// Sorted by identifier
    raw_materials: IndexMap<&'a ComponentId, f64>,
}

impl ReportGenerator for JsonReporter {
    fn generate_topology_report(
        &self,
        topology: &Topology,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonTopologyReport {
            metadata: JsonReportMetadata::from_config(config),
            root: topology.root.as_ref(),
            node_count: topology.node_count(),
            edge_count: topology.edge_count(),
            nodes: topology.nodes.iter().collect(),
            edges: &topology.edges,
        };
        self.render(&report)
    }

    fn generate_explosion_report(
        &self,
        trace: &ExplosionTrace,
        summary: &DemandSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonExplosionReport {
            metadata: JsonReportMetadata::from_config(config),
            root: &trace.root,
            quantity: trace.multiplier,
            circular_references: trace.cycles().count(),
            trace: config.include_trace.then_some(trace.entries.as_slice()),
            raw_materials: summary.sorted().into_iter().collect(),
        };
        self.render(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explosion::{aggregate, explode};
    use crate::model::AdjacencyBom;

    #[test]
    fn test_explosion_json_shape() {
        let bom = AdjacencyBom::from_tuples([
            ("FG", vec![("R2", 1.0), ("R1", 3.0)]),
        ]);
        let trace = explode(&bom, "FG", 2.0);
        let json = JsonReporter::new()
            .generate_explosion_report(&trace, &aggregate(&trace), &ReportConfig::default())
            .expect("report");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["root"], "FG");
        assert_eq!(value["quantity"], 2.0);
        assert_eq!(value["metadata"]["tool"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(value["metadata"]["generated_at"].is_string());
        assert_eq!(value["trace"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["trace"][2]["class"], "RawMaterial");

        let keys: Vec<_> = value["raw_materials"]
            .as_object()
            .expect("object")
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, vec!["R1", "R2"]);
        assert_eq!(value["raw_materials"]["R1"], 6.0);
    }

    #[test]
    fn test_trace_can_be_omitted() {
        let trace = explode(&AdjacencyBom::new(), "X", 1.0);
        let config = ReportConfig {
            include_trace: false,
            ..ReportConfig::default()
        };
        let json = JsonReporter::new()
            .pretty(false)
            .generate_explosion_report(&trace, &aggregate(&trace), &config)
            .expect("report");
        assert!(!json.contains("\"trace\""));
        assert_eq!(json.lines().count(), 1);
    }

    #[test]
    fn test_topology_json() {
        let bom = AdjacencyBom::from_tuples([("FG", vec![("C1", 2.0)])]);
        let topology = crate::topology::build(&crate::topology::relations_from_adjacency(&bom));
        let json = JsonReporter::new()
            .generate_topology_report(&topology, &ReportConfig::default())
            .expect("report");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["nodes"], serde_json::json!(["C1", "FG"]));
        assert_eq!(value["edges"][0]["from"], "FG");
        assert_eq!(value["edges"][0]["quantity"], 2.0);
    }
}
