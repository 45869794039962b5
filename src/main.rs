//! site-verdict: industry-aware website verdicts
//!
//! Scores already-collected page analyses and recommends a remediation plan.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use site_verdict::{
    cli::{self, EvaluateConfig},
    config::{self, ScoringConfig, ScoringPreset},
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site-verdict")]
#[command(version)]
#[command(about = "Industry-aware website scoring and plan recommendation", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    3  Error occurred (including any page that could not be evaluated)

EXAMPLES:
    # Score one collected analysis
    site-verdict evaluate analysis.json

    # Score a batch as a dental clinic, compact JSON to a file
    site-verdict evaluate pages.json --industry dental_clinic --compact -O verdicts.json

    # Inspect the built-in industry profiles
    site-verdict industries")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `evaluate` subcommand
#[derive(Parser)]
struct EvaluateArgs {
    /// Page analysis JSON: one object or an array of them
    input: PathBuf,

    /// Industry id for every page (overrides the analysis)
    #[arg(long)]
    industry: Option<String>,

    /// Known monthly revenue for every page (overrides the analysis)
    #[arg(long)]
    revenue: Option<i64>,

    /// Weight preset (default, local-business, ecommerce); replaces configured weights
    #[arg(long)]
    preset: Option<String>,

    /// Guess the industry from page text when none is given
    #[arg(long)]
    detect_industry: bool,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score collected page analyses and recommend a plan
    Evaluate(EvaluateArgs),

    /// List industry profiles (built-ins plus configured overrides)
    Industries {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
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
    /// Print the JSON Schema of the config file format
    Schema,
    /// Print a commented example config
    Example,
    /// Generate an example .site-verdict.yaml in the current directory
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

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            site_verdict::pipeline::exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Evaluate(args) => {
            let mut scoring = load_scoring_config(cli.config.as_deref());
            if let Some(name) = &args.preset {
                let preset = ScoringPreset::parse(name)?;
                scoring.weights = preset.weights();
            }
            if args.detect_industry {
                scoring.auto_detect_industry = true;
            }

            cli::run_evaluate(EvaluateConfig {
                input: args.input,
                industry: args.industry,
                revenue: args.revenue,
                output_file: args.output_file,
                compact: args.compact,
                quiet: cli.quiet,
                scoring,
            })
        }

        Commands::Industries { json } => {
            let scoring = load_scoring_config(cli.config.as_deref());
            cli::run_industries(&scoring, json)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "site-verdict", &mut io::stdout());
            Ok(0)
        }

        Commands::Config { action } => run_config(action, cli.config.as_deref()),
    }
}

fn load_scoring_config(explicit: Option<&Path>) -> ScoringConfig {
    let (scoring, loaded_from) = config::load_or_default(explicit);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    scoring
}

fn run_config(action: ConfigAction, explicit: Option<&Path>) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (scoring, loaded_from) = config::load_or_default(explicit);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml_ng::to_string(&scoring).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                ::dirs::config_dir().map(|p| p.join("site-verdict").display().to_string()),
                ::dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in config::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(explicit) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Schema => {
            println!("{}", config::generate_json_schema()?);
        }
        ConfigAction::Example => {
            print!("{}", config::generate_full_example_config());
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".site-verdict.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(0)
}
