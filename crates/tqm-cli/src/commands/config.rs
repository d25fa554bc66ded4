//! Config commands
//!
//! Commands for inspecting CLI configuration.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{print_info, print_output};
use tqm_core::config::{CONFIG_PATH_ENV, DATA_PATH_ENV, EXPORT_DIR_ENV};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Print the config file location
    Path,
}

/// Config row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

pub fn execute(ctx: &Context, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(ctx),
        ConfigAction::Get { key } => get_config(ctx, key),
        ConfigAction::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    print_output(&config_rows(ctx), ctx.format)
}

fn get_config(ctx: &Context, key: String) -> Result<()> {
    let rows = config_rows(ctx);

    if let Some(row) = rows.iter().find(|r| r.key.eq_ignore_ascii_case(&key)) {
        print_info(&format!("{} = {}", row.key, row.value), false);
        Ok(())
    } else {
        print_info("Available keys: data_path, export_dir, recent_limit", ctx.quiet);
        Err(anyhow::anyhow!("Config key not found: {}", key))
    }
}

fn show_path(ctx: &Context) -> Result<()> {
    match &ctx.config.config_path {
        Some(path) => print_info(&path.display().to_string(), false),
        None => print_info(&format!("Unknown (set {})", CONFIG_PATH_ENV), false),
    }
    Ok(())
}

fn config_rows(ctx: &Context) -> Vec<ConfigRow> {
    let config = &ctx.config;
    vec![
        ConfigRow {
            key: "data_path".to_string(),
            value: config.data_path().display().to_string(),
            source: source_label(config.data_path.1, DATA_PATH_ENV),
        },
        ConfigRow {
            key: "export_dir".to_string(),
            value: config.export_dir().display().to_string(),
            source: source_label(config.export_dir.1, EXPORT_DIR_ENV),
        },
        ConfigRow {
            key: "recent_limit".to_string(),
            value: config.recent_limit().to_string(),
            source: config.recent_limit.1.to_string(),
        },
    ]
}

fn source_label(source: tqm_core::config::ConfigSource, env_var: &str) -> String {
    match source {
        tqm_core::config::ConfigSource::Env => format!("env ({})", env_var),
        other => other.to_string(),
    }
}
