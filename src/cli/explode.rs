//! Explode command handler.
//!
//! Expands one component of a BOM and reports its raw-material demand.

use crate::config::AppConfig;
use crate::explosion::aggregate;
use crate::pipeline::{exit_codes, load_bom, output_explosion};
use crate::session::BomSession;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Arguments for the explode command
#[derive(Debug, Clone)]
pub struct ExplodeArgs {
    /// BOM file (table or adjacency map)
    pub input: PathBuf,
    /// Component to explode; defaults to the BOM's top-level component
    pub root: Option<String>,
    /// Units of the root; defaults to `explosion.default_quantity`
    pub quantity: Option<f64>,
    /// Exit with code 1 when circular references are found
    pub fail_on_cycle: bool,
}

/// Whether a component appears anywhere in the loaded BOM, including
/// childless adjacency entries that have no edge.
fn component_known(session: &BomSession, id: &str) -> bool {
    session.adjacency().is_some_and(|bom| bom.contains(id))
        || session.topology().is_some_and(|t| t.contains(id))
}

/// Run the explode command
pub fn run_explode(args: &ExplodeArgs, config: &AppConfig) -> Result<i32> {
    let quantity = args.quantity.unwrap_or(config.explosion.default_quantity);
    if !quantity.is_finite() || quantity < 0.0 {
        bail!("quantity must be a finite, non-negative number, got {quantity}");
    }

    let loaded = load_bom(&args.input, config)?;
    let session = &loaded.session;

    let root = match (&args.root, session.topology().and_then(|t| t.root.as_ref())) {
        (Some(root), _) => root.clone(),
        (None, Some(root)) => {
            tracing::info!(root = %root, "No component given, exploding the top-level component");
            root.to_string()
        }
        (None, None) => bail!("{} contains no assemblies to explode", args.input.display()),
    };

    if !component_known(session, &root) {
        tracing::warn!(component = %root, "Component not found in BOM, treating it as a raw material");
    }

    let Some(trace) = session.explode(&root, quantity) else {
        bail!("no BOM loaded from {}", args.input.display());
    };
    let summary = aggregate(&trace);

    output_explosion(config, &trace, &summary, Some(&loaded.source_display()))?;

    if args.fail_on_cycle && trace.has_cycles() {
        return Ok(exit_codes::CYCLES_DETECTED);
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn setup(content: &str, name: &str) -> (TempDir, PathBuf, AppConfig) {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join(name);
        std::fs::write(&input, content).unwrap();
        let config = AppConfig::builder()
            .output_format(ReportFormat::Csv)
            .output_file(Some(tmp.path().join("out.csv")))
            .build();
        (tmp, input, config)
    }

    #[test]
    fn test_explode_defaults_to_top_level_component() {
        let (tmp, input, config) = setup("{\"FG\": [[\"R1\", 2.0]]}", "bom.json");
        let args = ExplodeArgs {
            input,
            root: None,
            quantity: Some(3.0),
            fail_on_cycle: false,
        };
        assert_eq!(run_explode(&args, &config).unwrap(), exit_codes::SUCCESS);
        let out = std::fs::read_to_string(tmp.path().join("out.csv")).unwrap();
        assert!(out.contains("R1,6.00"));
    }

    #[test]
    fn test_fail_on_cycle() {
        let (_tmp, input, config) = setup("A: [[B, 1]]\nB: [[A, 1]]\n", "bom.yaml");
        let mut args = ExplodeArgs {
            input,
            root: Some("A".to_string()),
            quantity: None,
            fail_on_cycle: true,
        };
        assert_eq!(run_explode(&args, &config).unwrap(), exit_codes::CYCLES_DETECTED);

        args.fail_on_cycle = false;
        assert_eq!(run_explode(&args, &config).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let (_tmp, input, config) = setup("{}", "bom.json");
        let args = ExplodeArgs {
            input,
            root: Some("X".to_string()),
            quantity: Some(-2.0),
            fail_on_cycle: false,
        };
        assert!(run_explode(&args, &config).is_err());
    }

    #[test]
    fn test_empty_bom_without_root_is_an_error() {
        let (_tmp, input, config) = setup("{}", "bom.json");
        let args = ExplodeArgs {
            input,
            root: None,
            quantity: None,
            fail_on_cycle: false,
        };
        assert!(run_explode(&args, &config).is_err());
    }

    #[test]
    fn test_childless_adjacency_entry_is_known() {
        let mut session = BomSession::new();
        session.load_adjacency(crate::model::AdjacencyBom::from_tuples([
            ("FG", vec![("R1", 2.0)]),
            ("RM001", Vec::new()),
        ]));

        assert!(component_known(&session, "RM001"));
        assert!(component_known(&session, "R1"));
        assert!(!component_known(&session, "MISSING"));
    }

    #[test]
    fn test_explode_childless_entry() {
        let (tmp, input, config) = setup("{\"RM001\": []}", "bom.json");
        let args = ExplodeArgs {
            input,
            root: Some("RM001".to_string()),
            quantity: Some(4.0),
            fail_on_cycle: false,
        };
        assert_eq!(run_explode(&args, &config).unwrap(), exit_codes::SUCCESS);
        let out = std::fs::read_to_string(tmp.path().join("out.csv")).unwrap();
        assert!(out.contains("RM001,4.00"));
    }
}
