//! Report inspect command

use anyhow::{Context as _, Result};

use super::types::{RecordRow, SummaryRow};
use crate::commands::Context;
use crate::output::{print_info, print_json, print_output, OutputFormat};
use tqm_core::services::locale;
use tqm_core::ParsedReport;

pub fn inspect_report(ctx: &Context, file: String) -> Result<()> {
    let text = std::fs::read_to_string(&file).with_context(|| format!("Failed to read {}", file))?;
    let report = tqm_core::parse_report(&text).with_context(|| format!("Invalid report {}", file))?;

    match ctx.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => {
            print_output(&summary_rows(&report), OutputFormat::Table)?;
            print_info("", ctx.quiet);
            print_info(locale::PERFORMANCE_SECTION_TITLE, ctx.quiet);
            let rows: Vec<RecordRow> = report.records.iter().map(RecordRow::from).collect();
            print_output(&rows, OutputFormat::Table)?;
        }
    }
    Ok(())
}

fn summary_rows(report: &ParsedReport) -> Vec<SummaryRow> {
    vec![
        SummaryRow {
            metric: locale::REPORT_DATE_LABEL.to_string(),
            value: report.generated_on.clone(),
        },
        SummaryRow {
            metric: locale::TOTAL_PRODUCTS_LABEL.to_string(),
            value: report.total_products.to_string(),
        },
        SummaryRow {
            metric: locale::TOTAL_REPORTS_LABEL.to_string(),
            value: report.total_reports.to_string(),
        },
    ]
}
