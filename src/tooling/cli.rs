//! CLI Tooling
//!
//! Command-line interface over the listing transforms. Every command reads a
//! listing (file or `-` for stdin), runs one transform and returns its
//! rendered output as a string.

use crate::annotate::Annotator;
use crate::config::{ConfigLoader, RepoMapConfig};
use crate::error::ApiError;
use crate::listing::{parse_listing, retain_valid, validate_entries};
use crate::report::{build_report, format_report_text};
use crate::tree::html::render_standalone_html;
use crate::tree::{GraphSummary, RepoGraph, TreeBuilder};
use crate::types::{Entry, RawEntry};
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Repomap CLI - repository listing visualizer and reporter
#[derive(Parser)]
#[command(name = "repomap")]
#[command(about = "Materialize repository listings into annotated trees and paginated reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where repomap.toml is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the containment graph of a listing
    Graph {
        /// Listing file (JSON), or - for stdin
        input: PathBuf,
        /// Output format (json or html)
        #[arg(long, default_value = "json")]
        format: String,
        /// Title used by the html export
        #[arg(long)]
        title: Option<String>,
        /// Drop malformed entries instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Render the paginated, annotated report of a listing
    Report {
        /// Listing file (JSON), or - for stdin
        input: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Report title
        #[arg(long)]
        title: Option<String>,
        /// Override the configured page capacity
        #[arg(long)]
        page_capacity: Option<u32>,
        /// Drop malformed entries instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Show node counts and anomalies for a listing
    Summary {
        /// Listing file (JSON), or - for stdin
        input: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Drop malformed entries instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Print the annotation of each path
    Annotate {
        /// Paths to annotate
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Graph { .. } => "graph",
        Commands::Report { .. } => "report",
        Commands::Summary { .. } => "summary",
        Commands::Annotate { .. } => "annotate",
        Commands::Config { .. } => "config.show",
    }
}

/// CLI context: resolved configuration and the annotator built from it
pub struct CliContext {
    config: RepoMapConfig,
    annotator: Annotator,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::with_config(config))
    }

    /// Create a context from an already resolved configuration
    pub fn with_config(config: RepoMapConfig) -> Self {
        let annotator = Annotator::new(config.annotations.to_table());
        Self {
            config,
            annotator,
        }
    }

    pub fn config(&self) -> &RepoMapConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Graph {
                input,
                format,
                title,
                skip_invalid,
            } => {
                let raw = read_listing(input)?;
                let graph = self.build_graph(&raw, *skip_invalid)?;
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&graph.to_export())?),
                    "html" => {
                        let title = title.clone().unwrap_or_else(|| default_title(input));
                        render_standalone_html(&title, &graph.to_export())
                    }
                    other => Err(unsupported_format(other, &["json", "html"])),
                }
            }
            Commands::Report {
                input,
                format,
                title,
                page_capacity,
                skip_invalid,
            } => {
                let raw = read_listing(input)?;
                let entries = self.load_entries(&raw, *skip_invalid)?;
                let mut layout = self.config.report.clone();
                if let Some(capacity) = page_capacity {
                    layout.page_capacity = *capacity;
                }
                let title = title.clone().unwrap_or_else(|| default_title(input));
                let report = build_report(&title, &entries, &self.annotator, &layout)?;
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&report)?),
                    "text" => Ok(format_report_text(&report, self.config.color)),
                    other => Err(unsupported_format(other, &["text", "json"])),
                }
            }
            Commands::Summary {
                input,
                format,
                skip_invalid,
            } => {
                let raw = read_listing(input)?;
                let summary = self.build_graph(&raw, *skip_invalid)?.summary();
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&summary)?),
                    "text" => Ok(format_summary_text(&summary)),
                    other => Err(unsupported_format(other, &["text", "json"])),
                }
            }
            Commands::Annotate { paths } => Ok(paths
                .iter()
                .map(|p| format!("{}\t{}", p, self.annotator.annotate(p)))
                .collect::<Vec<_>>()
                .join("\n")),
            Commands::Config {
                command: ConfigCommands::Show,
            } => self.config.to_toml(),
        }
    }

    fn load_entries(&self, raw: &[RawEntry], skip_invalid: bool) -> Result<Vec<Entry>, ApiError> {
        if skip_invalid {
            Ok(retain_valid(raw).valid)
        } else {
            Ok(validate_entries(raw)?)
        }
    }

    fn build_graph(&self, raw: &[RawEntry], skip_invalid: bool) -> Result<RepoGraph, ApiError> {
        let builder = TreeBuilder::new(&self.annotator);
        if skip_invalid {
            Ok(builder.build_entries(&retain_valid(raw).valid))
        } else {
            Ok(builder.build(raw)?)
        }
    }
}

/// Read and parse a listing from a file, or stdin when `input` is `-`.
pub fn read_listing(input: &Path) -> Result<Vec<RawEntry>, ApiError> {
    let text = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };
    parse_listing(&text)
}

fn default_title(input: &Path) -> String {
    if input.as_os_str() == "-" {
        return "repository".to_string();
    }
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "repository".to_string())
}

fn unsupported_format(format: &str, allowed: &[&str]) -> ApiError {
    ApiError::ConfigError(format!(
        "Unsupported output format '{}' (expected one of: {})",
        format,
        allowed.join(", ")
    ))
}

/// Format graph summary as human-readable text.
pub fn format_summary_text(summary: &GraphSummary) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.force_no_tty();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Nodes".to_string(), summary.nodes.to_string()]);
    table.add_row(vec!["Edges".to_string(), summary.edges.to_string()]);
    table.add_row(vec!["Files".to_string(), summary.files.to_string()]);
    table.add_row(vec![
        "Directories".to_string(),
        summary.directories.to_string(),
    ]);
    table.add_row(vec!["Max depth".to_string(), summary.max_depth.to_string()]);

    let mut out = format!("{}\n", table);
    if summary.anomalies.is_empty() {
        out.push_str("No anomalies.\n");
    } else {
        out.push_str(&format!("Anomalies ({}):\n", summary.anomalies.len()));
        for anomaly in &summary.anomalies {
            out.push_str(&format!("  - {}\n", anomaly));
        }
    }
    out
}
