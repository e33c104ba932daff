//! Plurals CLI entry point.
//!
//! Provides command-line tools for CLDR plural rule tables:
//! - `plurals category` - Resolve the plural category of quantities
//! - `plurals check` - Validate every rule in a table
//! - `plurals table` - Show categories for a range of quantities

mod commands;
mod output;

use std::io::stderr;
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_category, run_check, run_table, CategoryArgs, CheckArgs, TableArgs};
use miette::IntoDiagnostic;
use plurals::{RuleListCache, RuleTable};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLDR plural rule tools.
#[derive(Debug, Parser)]
#[command(name = "plurals")]
#[command(about = "CLDR plural rule tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON rule table to use instead of the built-in CLDR data
    #[arg(long, global = true, env = "PLURALS_TABLE")]
    pub table: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the plural category of one or more quantities
    Category(CategoryArgs),
    /// Validate every rule in the table
    Check(CheckArgs),
    /// Show categories for a range of quantities across locales
    Table(TableArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag.
fn setup_logging(verbose: bool) {
    let default = if verbose { "plurals=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(stderr)
        .init();
}

fn load_table(path: Option<&Path>) -> miette::Result<RuleTable> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading rule table");
            RuleTable::load(path).into_diagnostic()
        }
        None => Ok(RuleTable::cldr()),
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let cache = RuleListCache::builder()
        .source(load_table(cli.table.as_deref())?)
        .build();

    let result = match cli.command {
        Commands::Category(args) => run_category(&cache, args),
        Commands::Check(args) => run_check(&cache, args),
        Commands::Table(args) => run_table(&cache, args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
