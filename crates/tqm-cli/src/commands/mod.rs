//! CLI commands module
//!
//! Contains all CLI command implementations.

pub mod config;
pub mod dashboard;
pub mod products;
pub mod report;

use anyhow::Result;

use crate::output::OutputFormat;
use tqm_core::{Config, DashboardSnapshot};

/// Shared context for all commands
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// Load the dashboard data the host supplies
    pub fn snapshot(&self) -> Result<DashboardSnapshot> {
        Ok(tqm_core::config::load_snapshot(self.config.data_path())?)
    }
}
