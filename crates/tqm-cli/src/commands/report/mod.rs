//! Report commands
//!
//! Commands for dashboard reports: export, inspect.

mod export;
mod inspect;
mod types;

use anyhow::Result;

use crate::commands::Context;

// Re-export public types
pub use types::{RecordRow, ReportAction, SummaryRow};

pub fn execute(ctx: &Context, action: ReportAction) -> Result<()> {
    match action {
        ReportAction::Export { output_dir, stdout } => export::export_csv(ctx, output_dir, stdout),
        ReportAction::Inspect { file } => inspect::inspect_report(ctx, file),
    }
}
