//! Report export command
//!
//! The dashboard's export trigger: build the report from the current data
//! and deliver it in one step.

use anyhow::Result;
use std::path::PathBuf;

use crate::commands::Context;
use crate::output::{print_info, print_json, print_success, OutputFormat};
use tqm_core::{deliver, Delivery, DirectorySink, ReportExporter, WriterSink};

pub fn export_csv(ctx: &Context, output_dir: Option<String>, stdout: bool) -> Result<()> {
    let snapshot = ctx.snapshot()?;
    let summary = snapshot.summary();
    let document = ReportExporter::new().export(&snapshot.kpi_data, summary);

    if stdout {
        let mut sink = WriterSink::new(std::io::stdout().lock());
        deliver(&document, &mut sink)?;
        return Ok(());
    }

    let dir = output_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| ctx.config.export_dir().to_path_buf());
    let mut sink = DirectorySink::new(dir);

    print_info(
        &format!(
            "Exporting {} products / {} performance records to {}",
            summary.total_products,
            summary.total_reports,
            sink.dir().display()
        ),
        ctx.quiet,
    );

    let delivery = deliver(&document, &mut sink)?;

    match ctx.format {
        OutputFormat::Json => print_json(&delivery)?,
        OutputFormat::Table => {
            if let Delivery::Saved { path } = &delivery {
                print_success(&format!("Report saved to {}", path.display()), ctx.quiet);
            }
        }
    }
    Ok(())
}
