//! TQM CLI - quality dashboard and report export
//!
//! Renders the quality dashboard from a data snapshot and exports the
//! dashboard report as CSV.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tqm")]
#[command(author, version, about = "Quality dashboard and report export CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Override dashboard data file (or set TQM_DATA_PATH env var)
    #[arg(long, env = "TQM_DATA_PATH", global = true)]
    data: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export or inspect dashboard reports
    Report {
        #[command(subcommand)]
        action: commands::report::ReportAction,
    },

    /// Dashboard stat cards, charts and recent products
    Dashboard {
        #[command(subcommand)]
        action: commands::dashboard::DashboardAction,
    },

    /// Browse registered products
    Products {
        #[command(subcommand)]
        action: commands::products::ProductsAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        output::print_error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up data path if provided
    if let Some(data_path) = &cli.data {
        std::env::set_var(tqm_core::config::DATA_PATH_ENV, data_path);
    }

    let config = tqm_core::Config::load()?;
    log::debug!("[cli] Data file: {:?}", config.data_path());

    // Create context for commands
    let ctx = commands::Context {
        config,
        format: cli.format,
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command {
        Commands::Report { action } => commands::report::execute(&ctx, action),
        Commands::Dashboard { action } => commands::dashboard::execute(&ctx, action),
        Commands::Products { action } => commands::products::execute(&ctx, action),
        Commands::Config { action } => commands::config::execute(&ctx, action),
    }
}
