//! Convert command handler.
//!
//! Rewrites any supported BOM file as an adjacency map, ready for `explode`.

use crate::config::AppConfig;
use crate::parsers::{render_adjacency, AdjacencyFormat};
use crate::pipeline::{exit_codes, load_bom, write_output, OutputTarget};
use anyhow::Result;
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    pub input: PathBuf,
    /// Destination file; stdout when absent
    pub output: Option<PathBuf>,
    /// Output serialization; guessed from the output extension, else JSON
    pub format: Option<AdjacencyFormat>,
}

/// Run the convert command
pub fn run_convert(args: &ConvertArgs, config: &AppConfig) -> Result<i32> {
    let format = args
        .format
        .or_else(|| args.output.as_deref().and_then(AdjacencyFormat::from_extension))
        .unwrap_or(AdjacencyFormat::Json);

    let loaded = load_bom(&args.input, config)?;
    let bom = loaded.session.require_adjacency()?;

    let content = render_adjacency(bom, format)?;
    write_output(&content, &OutputTarget::from_option(args.output.clone()))?;

    tracing::debug!(
        skus = bom.len(),
        lines = bom.line_count(),
        format = format.name(),
        "Converted BOM to adjacency map"
    );
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::load_adjacency;
    use tempfile::TempDir;

    #[test]
    fn test_convert_leveled_csv_to_yaml() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("bom.csv");
        let output = tmp.path().join("bom.yaml");
        std::fs::write(
            &input,
            "Level,Component number,Comp. Qty (BUn)\n1,FG,1\n2,C1,2\n3,R1,\"1,5\"\n2,R2,4\n",
        )
        .unwrap();

        let args = ConvertArgs {
            input,
            output: Some(output.clone()),
            format: None,
        };
        assert_eq!(
            run_convert(&args, &AppConfig::default()).unwrap(),
            exit_codes::SUCCESS
        );

        let bom = load_adjacency(&output).unwrap();
        assert_eq!(bom.children("FG").len(), 2);
        assert_eq!(bom.children("C1")[0].quantity, 1.5);
        assert!(bom.contains("R1"));
        assert!(bom.is_leaf("R1"));
    }
}
