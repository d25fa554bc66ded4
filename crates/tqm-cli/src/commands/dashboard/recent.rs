//! Dashboard recent products command

use anyhow::Result;

use super::types::ProductRow;
use crate::commands::Context;
use crate::output::{print_info, print_output, print_section, OutputFormat, Section};
use tqm_core::services::locale;

pub fn show_recent(ctx: &Context, limit: Option<usize>) -> Result<()> {
    let snapshot = ctx.snapshot()?;
    let limit = limit.unwrap_or_else(|| ctx.config.recent_limit());

    let rows: Vec<ProductRow> = tqm_core::recent_products(&snapshot.products, limit)
        .iter()
        .map(ProductRow::from)
        .collect();

    if ctx.format == OutputFormat::Json {
        return print_output(&rows, ctx.format);
    }

    print_section(Section::RecentProducts, locale::RECENT_PRODUCTS_TITLE, ctx.quiet);
    print_output(&rows, ctx.format)?;

    if snapshot.products.len() > rows.len() {
        print_info("Run `tqm products list` to see all products.", ctx.quiet);
    }
    Ok(())
}
