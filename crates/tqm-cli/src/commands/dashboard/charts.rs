//! Dashboard charts command
//!
//! Quality rate and defect bar charts, one bar per period in input order.

use anyhow::Result;

use super::helpers::bar;
use super::types::ChartRow;
use crate::commands::Context;
use crate::output::{print_json, print_output, print_section, OutputFormat, Section};
use tqm_core::{format_number, ChartMetric, ChartSeries};

pub fn show_charts(ctx: &Context, width: usize) -> Result<()> {
    let snapshot = ctx.snapshot()?;
    let series = [
        ChartSeries::from_records(&snapshot.kpi_data, ChartMetric::QualityRate),
        ChartSeries::from_records(&snapshot.kpi_data, ChartMetric::Defects),
    ];

    if ctx.format == OutputFormat::Json {
        return print_json(&series);
    }

    for (i, chart) in series.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_section(Section::Chart, &chart_heading(chart), ctx.quiet);
        print_output(&chart_rows(chart, width), OutputFormat::Table)?;
    }
    Ok(())
}

pub(super) fn chart_heading(chart: &ChartSeries) -> String {
    format!("{} ({})", chart.title, chart.name)
}

pub(super) fn chart_rows(chart: &ChartSeries, width: usize) -> Vec<ChartRow> {
    chart
        .points
        .iter()
        .zip(chart.bar_lengths(width))
        .map(|(point, len)| ChartRow {
            period: point.label.clone(),
            value: format_number(point.value),
            bar: bar(len),
        })
        .collect()
}
