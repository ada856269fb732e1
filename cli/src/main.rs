//! CLI entrypoint for PseudoRAG
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use pseudorag_application::{
    ExpandTopicInput, ExpandTopicUseCase, ExpansionLogger, ExportTreeUseCase, NoExpansionLogger,
};
use pseudorag_domain::{ConfigIssue, Severity};
use pseudorag_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, FileTreeExporter, JsonlExpansionLogger,
};
use pseudorag_presentation::{
    Cli, ConsoleFormatter, ConsoleProgress, ExpansionSummary, OutputConfig, OutputFormat,
    OutputFormatter,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting PseudoRAG");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let output = resolve_output(&config, &cli);

    if !output.color {
        colored::control::set_override(false);
    }

    if cli.archetypes {
        print!("{}", ConsoleFormatter::format_taxonomy());
        return Ok(());
    }

    if cli.queries.is_empty() {
        bail!("At least one query is required. Use --archetypes to list the taxonomy.");
    }

    apply_overrides(&mut config, &cli);
    check_config(&config)?;
    let (params, _) = config.expansion.to_params();

    // === Dependency Injection ===
    let logger: Arc<dyn ExpansionLogger> = match &config.history.file {
        Some(path) => match JsonlExpansionLogger::open(expand_home(path)) {
            Some(logger) => {
                info!("Recording expansion history to {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoExpansionLogger),
        },
        None => Arc::new(NoExpansionLogger),
    };
    let expand = ExpandTopicUseCase::heuristic().with_logger(logger);
    let export = ExportTreeUseCase::new(FileTreeExporter::new().with_create_dirs(true));
    let formatter = ConsoleFormatter;

    // Several JSON trees are printed together as one array
    let json_batch = output.format == OutputFormat::Json && cli.queries.len() > 1;
    let mut trees = Vec::new();
    let mut results = Vec::with_capacity(cli.queries.len());

    for query in &cli.queries {
        let input = ExpandTopicInput::new(query.clone()).with_params(params);

        let tree = if output.show_progress {
            expand.execute_with_progress(input, &ConsoleProgress::new())?
        } else {
            expand.execute(input)?
        };

        if !json_batch {
            println!("{}", formatter.format(&tree, output.format)?);
        }

        if let Some(dir) = &output.export_dir {
            for path in export.export_all(&tree, dir)? {
                eprintln!("Saved {}", path.display());
            }
        }

        results.push(ExpansionSummary::of(&tree));
        if json_batch {
            trees.push(tree);
        }
    }

    if json_batch {
        println!("{}", ConsoleFormatter::format_json_batch(&trees)?);
    } else if results.len() > 1 && output.format != OutputFormat::Json {
        print!("{}", ConsoleFormatter::format_batch_totals(&results));
    }

    Ok(())
}

/// Install the stderr subscriber, plus a file layer when `--log-file` is given.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("--log-file must name a file: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Report config warnings and abort on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        warn!("{}", issue.message);
    }

    if ConfigIssue::has_errors(&issues) {
        let messages: Vec<&str> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.message.as_str())
            .collect();
        bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }
    Ok(())
}

/// Replace config expansion values with the ones given on the command line
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(min_relevance) = cli.min_relevance {
        config.expansion.min_relevance = min_relevance;
    }
    if let Some(depth) = cli.depth {
        config.expansion.depth = depth;
    }
}

fn resolve_output(config: &FileConfig, cli: &Cli) -> OutputConfig {
    let format = cli.output.unwrap_or_else(|| {
        match config.output.parse_format().0.unwrap_or_default() {
            FileOutputFormat::Outline => OutputFormat::Outline,
            FileOutputFormat::Json => OutputFormat::Json,
            FileOutputFormat::Summary => OutputFormat::Summary,
        }
    });

    OutputConfig::default()
        .with_format(format)
        .with_color(config.output.color)
        .with_progress(!cli.quiet)
        .with_export_dir(cli.out_dir.clone().or_else(|| config.output.directory.clone()))
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pseudorag").chain(args.iter().copied())).unwrap()
    }

    fn resolved(config: &FileConfig, args: &[&str]) -> Result<FileConfig> {
        let mut config = config.clone();
        apply_overrides(&mut config, &cli(args));
        check_config(&config)?;
        Ok(config)
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = FileConfig::default();
        config.expansion.min_relevance = 0.5;
        config.expansion.depth = 2;

        let (params, _) = resolved(&config, &["x", "-r", "0.35"])
            .unwrap()
            .expansion
            .to_params();
        assert_eq!(params.min_relevance, 0.35);
        assert_eq!(params.depth, 2);
    }

    #[test]
    fn test_invalid_flag_values_rejected() {
        let config = FileConfig::default();
        assert!(resolved(&config, &["x", "-r", "1.5"]).is_err());
        assert!(resolved(&config, &["x", "-d", "0"]).is_err());
    }

    #[test]
    fn test_flag_replaces_invalid_config_value() {
        let mut config = FileConfig::default();
        config.expansion.min_relevance = 1.5;
        config.expansion.depth = 0;
        assert!(resolved(&config, &["x"]).is_err());

        let config = resolved(&config, &["x", "-r", "0.3", "-d", "1"]).unwrap();
        assert_eq!(config.expansion.min_relevance, 0.3);
        assert_eq!(config.expansion.depth, 1);
    }

    #[test]
    fn test_output_resolution() {
        let mut config = FileConfig::default();
        config.output.format = Some("summary".to_string());
        config.output.directory = Some(PathBuf::from("from-config"));

        let output = resolve_output(&config, &cli(&["x", "-q"]));
        assert_eq!(output.format, OutputFormat::Summary);
        assert!(!output.show_progress);
        assert_eq!(output.export_dir, Some(PathBuf::from("from-config")));

        let output = resolve_output(&config, &cli(&["x", "-o", "json", "--out-dir", "cli"]));
        assert_eq!(output.format, OutputFormat::Json);
        assert_eq!(output.export_dir, Some(PathBuf::from("cli")));
    }

    #[test]
    fn test_config_errors_abort() {
        let mut config = FileConfig::default();
        config.expansion.depth = 0;
        assert!(check_config(&config).is_err());

        let mut config = FileConfig::default();
        config.output.format = Some("xml".to_string());
        assert!(check_config(&config).is_ok());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home(Path::new("/tmp/h.jsonl")), PathBuf::from("/tmp/h.jsonl"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/h.jsonl")), home.join("h.jsonl"));
        }
    }
}
