//! Dashboard overview command
//!
//! The full dashboard page in one view.

use anyhow::Result;

use super::charts::{chart_heading, chart_rows};
use super::types::{ProductRow, StatsRow};
use crate::commands::Context;
use crate::output::{print_json, print_output, print_section, OutputFormat, Section};
use tqm_core::services::locale;
use tqm_core::DashboardView;

pub fn show_overview(ctx: &Context, width: usize) -> Result<()> {
    let snapshot = ctx.snapshot()?;
    let view = DashboardView::compose(&snapshot, ctx.config.recent_limit());

    if ctx.format == OutputFormat::Json {
        return print_json(&view);
    }

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  نظرة عامة");
    println!("║  {}", locale::format_report_date(chrono::Local::now().date_naive()));
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let cards: Vec<StatsRow> = view.cards.iter().map(StatsRow::from).collect();
    print_output(&cards, OutputFormat::Table)?;
    println!("   {}", locale::TREND_CAPTION);

    for chart in [&view.quality_chart, &view.defects_chart] {
        println!();
        print_section(Section::Chart, &chart_heading(chart), ctx.quiet);
        print_output(&chart_rows(chart, width), OutputFormat::Table)?;
    }

    println!();
    print_section(Section::RecentProducts, locale::RECENT_PRODUCTS_TITLE, ctx.quiet);
    let products: Vec<ProductRow> = view.recent_products.iter().map(ProductRow::from).collect();
    print_output(&products, OutputFormat::Table)?;

    println!("───────────────────────────────────────────────────────────────");
    println!(
        "{} products / {} performance records",
        snapshot.products.len(),
        snapshot.kpi_data.len()
    );
    Ok(())
}
