//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Console output format for expanded trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown outline grouped by archetype
    Outline,
    /// Structured JSON tree
    Json,
    /// Counts, distribution and sample questions
    Summary,
}

/// CLI arguments for pseudorag
#[derive(Parser, Debug)]
#[command(name = "pseudorag")]
#[command(author, version, about = "Expand a topic into a questionnaire across 16 information archetypes")]
#[command(long_about = r#"
PseudoRAG expands a short topic query into a structured questionnaire.

Every topic is scored against 16 fixed information archetypes, built from four
binary axes (material/abstract, static/dynamic, elementary/complex,
ordered/fluid). Archetypes at or above the relevance threshold contribute
their question templates, instantiated with the topic.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./pseudorag.toml      Project-level config
3. ~/.config/pseudorag/config.toml   Global config

Example:
  pseudorag "Города Европы" -r 0.4
  pseudorag "Транспортные системы" "Животные Африки" -o summary
  pseudorag "Urban mobility" -o json --out-dir questionnaires
  pseudorag --archetypes
"#)]
pub struct Cli {
    /// Topic queries to expand, in order
    pub queries: Vec<String>,

    /// Minimum relevance for an archetype to contribute questions (0.0-1.0)
    #[arg(short = 'r', long, value_name = "F")]
    pub min_relevance: Option<f64>,

    /// Decomposition depth (recorded in metadata)
    #[arg(short, long, value_name = "N")]
    pub depth: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Also write {stem}.json and {stem}.md for each query into this directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Print the archetype taxonomy and exit
    #[arg(long)]
    pub archetypes: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the ranking report
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
