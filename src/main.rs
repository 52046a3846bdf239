//! iphone-monitor: browse carrier iPhone pricing catalogs
//!
//! Loads a listing feed and renders it interactively or as a report.

#![allow(clippy::too_many_lines, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use iphone_monitor::{
    catalog::{Choice, PricingMode, SortKey},
    cli,
    config::{AppConfig, BrowseConfig, ConfigOverrides, OptionsConfig, Validatable},
    model::Carrier,
    parsers::FeedSource,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "iphone-monitor")]
#[command(version)]
#[command(about = "Browse and compare carrier iPhone prices", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  At least one listing matched
    1  No listing matched the filters
    3  Error occurred

EXAMPLES:
    # Interactive browser over the local feed
    iphone-monitor browse data.json

    # Cheapest one-time prices for iPhone 16 on au and docomo
    iphone-monitor browse --carrier au --carrier docomo --model \"iPhone 16\" --pricing one-time -o table

    # Everything as JSON from a published feed
    iphone-monitor browse https://example.github.io/iphone-monitor/ --pages 100 -o json")]
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

/// Arguments for the `browse` subcommand
#[derive(Parser)]
struct BrowseArgs {
    /// Feed file, directory containing data.json, or http(s) URL
    #[arg(env = "IPHONE_MONITOR_FEED")]
    feed: Option<String>,

    /// Carrier to include (repeatable; default: all carriers)
    #[arg(long = "carrier", value_enum)]
    carriers: Vec<Carrier>,

    /// Only show this model (e.g. "iPhone 16 Pro")
    #[arg(long)]
    model: Option<String>,

    /// Only show this storage tier (e.g. 256GB)
    #[arg(long)]
    storage: Option<String>,

    /// Compare monthly installments or one-time prices
    #[arg(long, value_enum)]
    pricing: Option<PricingMode>,

    /// Sort order
    #[arg(long, value_enum)]
    sort: Option<SortKey>,

    /// Apply "show more" this many times before rendering
    #[arg(long, default_value = "0")]
    pages: usize,

    /// Output format (auto detects TTY: tui if interactive, summary otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `options` subcommand
#[derive(Parser)]
struct OptionsArgs {
    /// Feed file, directory containing data.json, or http(s) URL
    #[arg(env = "IPHONE_MONITOR_FEED")]
    feed: Option<String>,

    /// Output format (summary, table or json)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog (TUI on a terminal, report otherwise)
    Browse(BrowseArgs),

    /// List the model and storage choices offered by a feed
    Options(OptionsArgs),

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
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .iphone-monitor.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

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
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Browse(args) => {
            let config = effective_config(
                cli.config.as_deref(),
                &ConfigOverrides {
                    feed: args.feed,
                    carriers: (!args.carriers.is_empty()).then_some(args.carriers),
                    pricing_mode: args.pricing,
                    sort: args.sort,
                    format: args.output,
                    output_file: args.output_file,
                    no_color: cli.no_color,
                },
            )?;

            let mut selection = config.defaults.to_selection();
            if let Some(model) = args.model {
                selection.model = Choice::from(model);
            }
            if let Some(storage) = args.storage {
                selection.storage = Choice::from(storage);
            }

            cli::run_browse(BrowseConfig {
                source: feed_source(&config)?,
                selection,
                pages: args.pages,
                output: config.output,
                tui: config.tui,
                quiet: cli.quiet,
            })
        }

        Commands::Options(args) => {
            let config = effective_config(
                cli.config.as_deref(),
                &ConfigOverrides {
                    feed: args.feed,
                    format: args.output,
                    output_file: args.output_file,
                    no_color: cli.no_color,
                    ..ConfigOverrides::default()
                },
            )?;

            cli::run_options(OptionsConfig {
                source: feed_source(&config)?,
                output: config.output,
                quiet: cli.quiet,
            })
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "iphone-monitor", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = iphone_monitor::config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
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
                let (config, loaded_from) =
                    iphone_monitor::config::load_or_default(cli.config.as_deref());
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
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    iphone_monitor::config::user_config_dir().map(|p| p.display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in iphone_monitor::config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match iphone_monitor::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".iphone-monitor.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = iphone_monitor::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

/// Layer CLI flags over the discovered config file and validate the result.
fn effective_config(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<AppConfig> {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(config_path, overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration:\n  {}", details.join("\n  "));
    }
    Ok(config)
}

/// Resolve the configured feed location, defaulting to `data.json`.
fn feed_source(config: &AppConfig) -> Result<FeedSource> {
    let raw = config
        .feed
        .source
        .as_deref()
        .unwrap_or(iphone_monitor::config::DEFAULT_FEED_SOURCE);
    raw.parse::<FeedSource>()
        .with_context(|| format!("invalid feed source '{raw}'"))
}
