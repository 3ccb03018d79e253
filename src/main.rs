//! logdiff: line-based diff for logs, query output and other text
//!
//! Compares an expected text against a current one, either as an ordered
//! alignment or as an unordered multiset.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use logdiff::{
    cli,
    config::{AppConfig, ConfigOverrides, ConfigPreset, DiffConfig, DiffInputs, Validatable},
    diff::DiffMode,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with mode and format info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nDiff Modes:",
        "\n  ordered    minimal-edit alignment (default)",
        "\n  unordered  match lines regardless of position",
        "\n\nOutput Formats:",
        "\n  side-by-side, unified, summary, json"
    )
}

#[derive(Parser)]
#[command(name = "logdiff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Line-based diff for logs and text output", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Inputs match (or differences without --fail-on-diff)
    1  Differences found with --fail-on-diff
    3  Error occurred

EXAMPLES:
    # Side-by-side view in a terminal
    logdiff diff expected.log actual.log

    # Compare query results where row order does not matter
    logdiff diff expected.txt actual.txt --unordered --trim

    # CI check reading the current output from stdin
    run-query | logdiff diff expected.txt - --preset ci

    # Export JSON for processing
    logdiff diff a.txt b.txt -o json > diff.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Expected (baseline) text file, or `-` for stdin
    #[arg(required_unless_present = "request")]
    expected: Option<PathBuf>,

    /// Current text file, or `-` for stdin
    #[arg(required_unless_present = "request")]
    current: Option<PathBuf>,

    /// Read both sides and options from a JSON request file instead
    #[arg(long, value_name = "PATH", conflicts_with_all = ["expected", "current"])]
    request: Option<PathBuf>,

    /// Diff algorithm (ordered, unordered)
    #[arg(long, value_enum)]
    mode: Option<DiffMode>,

    /// Match lines regardless of position (same as `--mode unordered`)
    #[arg(long, conflicts_with = "mode")]
    unordered: bool,

    /// Compare lines case-insensitively (`--ignore-case=false` to turn off)
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    ignore_case: Option<bool>,

    /// Ignore leading and trailing whitespace (`--trim=false` to turn off)
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    trim: Option<bool>,

    /// Output format (auto: side-by-side if interactive, summary otherwise)
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Total width of the side-by-side view
    #[arg(long, value_parser = clap::value_parser!(u16).range(20..))]
    width: Option<u16>,

    /// Only show changed lines (hide unchanged)
    #[arg(long)]
    only_changes: bool,

    /// Maximum missing/extra lines listed in the summary
    #[arg(long)]
    max_items: Option<usize>,

    /// Exit with code 1 if the inputs differ
    #[arg(long)]
    fail_on_diff: bool,

    /// Start from a named configuration preset
    #[arg(long, value_enum)]
    preset: Option<ConfigPreset>,

    /// Maximum number of lines per input
    #[arg(long, env = "LOGDIFF_MAX_LINES")]
    max_lines: Option<usize>,
}

impl DiffArgs {
    /// Settings given explicitly on the command line.
    fn overrides(&self, cli: &Cli) -> ConfigOverrides {
        ConfigOverrides {
            mode: self
                .mode
                .or_else(|| self.unordered.then_some(DiffMode::Unordered)),
            ignore_case: self.ignore_case,
            trim: self.trim,
            format: self.output,
            output_file: self.output_file.clone(),
            no_color: cli.no_color.then_some(true),
            width: self.width.map(usize::from),
            only_changes: self.only_changes.then_some(true),
            max_items: self.max_items,
            fail_on_diff: self.fail_on_diff.then_some(true),
            quiet: cli.quiet.then_some(true),
            max_lines: self.max_lines,
        }
    }

    fn inputs(&self) -> Result<DiffInputs> {
        if let Some(request) = &self.request {
            return Ok(DiffInputs::Request(request.clone()));
        }
        match (&self.expected, &self.current) {
            (Some(expected), Some(current)) => Ok(DiffInputs::Paths {
                expected: expected.clone(),
                current: current.clone(),
            }),
            _ => anyhow::bail!("both an expected and a current input are required"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two texts line by line
    Diff(DiffArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
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
    /// List the named presets
    Presets,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .logdiff.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay machine-readable
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:?}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Diff(args) => {
            let (config, loaded_from) = AppConfig::from_file_with_overrides(
                cli.config.as_deref(),
                args.preset,
                &args.overrides(&cli),
            );
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            let config = DiffConfig::from_app_config(config, args.inputs()?);
            cli::run_diff(config)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "logdiff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema =
                logdiff::config::generate_json_schema().context("failed to serialize schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = logdiff::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                let problems = config.validate();
                for problem in &problems {
                    eprintln!("# Invalid: {problem}");
                }
                Ok(if problems.is_empty() {
                    exit_codes::SUCCESS
                } else {
                    exit_codes::ERROR
                })
            }
            ConfigAction::Presets => {
                for preset in ConfigPreset::all() {
                    println!("{:<10} {}", preset.name(), preset.description());
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("logdiff").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!("  (and the enclosing git repository root)");
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[".logdiff.yaml", ".logdiff.yml", "logdiff.yaml", "logdiff.yml"] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match logdiff::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".logdiff.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = logdiff::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
