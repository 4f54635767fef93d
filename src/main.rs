//! bom-topology: reconstruct and explode manufacturing BOMs

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use bom_topology::{
    cli::{self, ConvertArgs, ExplodeArgs},
    config::{self, AppConfig, TableLayout, Validatable},
    parsers::AdjacencyFormat,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bom-topology")]
#[command(author)]
#[command(version)]
#[command(about = "Reconstruct BOM hierarchies and explode them into raw-material demand", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Circular references detected (with --fail-on-cycle)
    3  Error occurred

EXAMPLES:
    # Show parent/child edges of an indented ERP export
    bom-topology topology export.csv

    # Raw materials for 25 units of FG001
    bom-topology explode bom.json FG001 --quantity 25

    # Convert an indented export into an adjacency map
    bom-topology convert export.csv -O bom.yaml")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "BOM_TOPOLOGY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Table reading options shared by all input-taking commands
#[derive(Parser)]
struct IngestArgs {
    /// Field delimiter for tabular input
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Table layout for tabular input
    #[arg(long, value_enum)]
    layout: Option<TableLayout>,

    /// Name of the level column
    #[arg(long)]
    level_column: Option<String>,

    /// Name of the component column
    #[arg(long)]
    component_column: Option<String>,

    /// Quantity column to use (repeatable, first present wins)
    #[arg(long = "quantity-column", value_name = "NAME")]
    quantity_columns: Vec<String>,
}

/// Report options shared by reporting commands
#[derive(Parser)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout when omitted)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Decimal places for quantities
    #[arg(long)]
    precision: Option<usize>,
}

/// Arguments for the `explode` subcommand
#[derive(Parser)]
struct ExplodeCommand {
    /// BOM file: adjacency map (.json/.yaml) or table
    input: PathBuf,

    /// Component to explode (defaults to the top-level component)
    root: Option<String>,

    /// Units of the root component
    #[arg(short = 'n', long)]
    quantity: Option<f64>,

    /// Stop descending below this depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Only print the raw-material summary
    #[arg(long)]
    summary_only: bool,

    /// Exit with code 1 when circular references are found
    #[arg(long)]
    fail_on_cycle: bool,

    #[command(flatten)]
    ingest: IngestArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct and print the parent/child topology of a BOM
    Topology {
        /// BOM file: table or adjacency map
        input: PathBuf,

        #[command(flatten)]
        ingest: IngestArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Explode a component into its full tree and raw-material demand
    Explode(ExplodeCommand),

    /// Convert a BOM file into an adjacency map
    Convert {
        /// BOM file: table or adjacency map
        input: PathBuf,

        /// Output file path (stdout when omitted)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,

        /// Output serialization (guessed from the output extension)
        #[arg(short, long, value_enum)]
        format: Option<AdjacencyFormat>,

        #[command(flatten)]
        ingest: IngestArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the JSON Schema of the configuration file
    ConfigSchema {
        /// Write the schema to a file instead of stdout
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .bom-topology.yaml in the current directory
    Init,
}

impl IngestArgs {
    fn apply(self, config: &mut AppConfig) {
        if let Some(delimiter) = self.delimiter {
            config.ingest.delimiter = delimiter;
        }
        if let Some(layout) = self.layout {
            config.ingest.layout = layout;
        }
        if let Some(level) = self.level_column {
            config.ingest.level_column = level;
        }
        if let Some(component) = self.component_column {
            config.ingest.component_column = component;
        }
        if !self.quantity_columns.is_empty() {
            config.ingest.quantity_columns = self.quantity_columns;
        }
    }
}

impl OutputArgs {
    fn apply(self, config: &mut AppConfig) {
        if let Some(format) = self.output {
            config.output.format = format;
        }
        if self.output_file.is_some() {
            config.output.file = self.output_file;
        }
        if let Some(precision) = self.precision {
            config.output.precision = precision;
        }
    }
}

/// Load the file config, apply CLI overrides and validate the result.
fn effective_config(
    config_path: Option<&Path>,
    no_color: bool,
    overrides: impl FnOnce(&mut AppConfig),
) -> Result<AppConfig> {
    let (mut config, loaded_from) = config::load_or_default(config_path);
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    if no_color {
        config.output.no_color = true;
    }
    overrides(&mut config);

    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration:\n  {}", details.join("\n  "));
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<i32> {
    let Cli {
        no_color,
        config: config_path,
        command,
        ..
    } = cli;
    let config_path = config_path.as_deref();

    match command {
        Commands::Topology {
            input,
            ingest,
            output,
        } => {
            let config = effective_config(config_path, no_color, |c| {
                ingest.apply(c);
                output.apply(c);
            })?;
            cli::run_topology(&input, &config)
        }

        Commands::Explode(cmd) => {
            let ExplodeCommand {
                input,
                root,
                quantity,
                max_depth,
                summary_only,
                fail_on_cycle,
                ingest,
                output,
            } = cmd;
            let config = effective_config(config_path, no_color, |c| {
                ingest.apply(c);
                output.apply(c);
                if max_depth.is_some() {
                    c.explosion.max_depth = max_depth;
                }
                if summary_only {
                    c.output.include_trace = false;
                }
            })?;
            let args = ExplodeArgs {
                input,
                root,
                quantity,
                fail_on_cycle,
            };
            cli::run_explode(&args, &config)
        }

        Commands::Convert {
            input,
            output_file,
            format,
            ingest,
        } => {
            let config = effective_config(config_path, no_color, |c| ingest.apply(c))?;
            let args = ConvertArgs {
                input,
                output: output_file,
                format,
            };
            cli::run_convert(&args, &config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "bom-topology", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to serialize schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(config_path);
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths = [
                    std::env::current_dir().ok(),
                    config::user_config_path().and_then(|p| p.parent().map(Path::to_path_buf)),
                    dirs::home_dir(),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                eprintln!("  {}", config::CONFIG_FILE_NAME);
                eprintln!();
                match config::discover_config_file(config_path) {
                    Some(path) => eprintln!("Active config: {}", path.display()),
                    None => eprintln!("Active config: (none, using defaults)"),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(config::CONFIG_FILE_NAME);
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_author_comes_from_manifest() {
        let command = Cli::command();
        assert_eq!(command.get_author(), Some(env!("CARGO_PKG_AUTHORS")));
    }
}
