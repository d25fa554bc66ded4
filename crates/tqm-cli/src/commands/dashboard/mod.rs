//! Dashboard commands
//!
//! CLI commands for the dashboard: stat cards, charts, recent products.

mod charts;
mod helpers;
mod overview;
mod recent;
mod stats;
mod types;

use anyhow::Result;

use crate::commands::Context;

// Re-export public types
pub use types::{ChartRow, DashboardAction, ProductRow, StatsRow};

pub fn execute(ctx: &Context, action: DashboardAction) -> Result<()> {
    match action {
        DashboardAction::Overview { width } => overview::show_overview(ctx, width),
        DashboardAction::Stats => stats::show_stats(ctx),
        DashboardAction::Charts { width } => charts::show_charts(ctx, width),
        DashboardAction::Recent { limit } => recent::show_recent(ctx, limit),
    }
}
