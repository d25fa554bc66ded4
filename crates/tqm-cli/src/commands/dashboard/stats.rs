//! Dashboard stats command
//!
//! Show the stat cards for registered products and performance reports.

use anyhow::Result;

use super::types::StatsRow;
use crate::commands::Context;
use crate::output::print_output;

pub fn show_stats(ctx: &Context) -> Result<()> {
    let snapshot = ctx.snapshot()?;
    let cards = tqm_core::stat_cards(snapshot.summary());

    let rows: Vec<StatsRow> = cards.iter().map(StatsRow::from).collect();
    print_output(&rows, ctx.format)
}
