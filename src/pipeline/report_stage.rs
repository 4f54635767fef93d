//! Report output stage.

use crate::config::AppConfig;
use crate::model::{DemandSummary, ExplosionTrace, Topology};
use crate::reports::{create_reporter_with_options, ReportConfig};
use anyhow::Result;

use super::{should_use_color, write_output, OutputTarget};

fn report_config(config: &AppConfig, source: Option<&str>) -> ReportConfig {
    let report = config.report_config();
    match source {
        Some(source) => report.with_source(source),
        None => report,
    }
}

/// Render a topology report and write it to the configured destination.
pub fn output_topology(config: &AppConfig, topology: &Topology, source: Option<&str>) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter =
        create_reporter_with_options(config.output.format, should_use_color(config.output.no_color, &target));
    let report = reporter.generate_topology_report(topology, &report_config(config, source))?;
    write_output(&report, &target)
}

/// Render an explosion report and write it to the configured destination.
pub fn output_explosion(
    config: &AppConfig,
    trace: &ExplosionTrace,
    summary: &DemandSummary,
    source: Option<&str>,
) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter =
        create_reporter_with_options(config.output.format, should_use_color(config.output.no_color, &target));
    let report =
        reporter.generate_explosion_report(trace, summary, &report_config(config, source))?;
    write_output(&report, &target)
}
