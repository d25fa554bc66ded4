//! Products commands
//!
//! The "view all" target of the dashboard's recent-products table.

use anyhow::Result;
use clap::Subcommand;

use super::dashboard::ProductRow;
use super::Context;
use crate::output::print_output;

#[derive(Subcommand)]
pub enum ProductsAction {
    /// List all registered products
    List,

    /// Show a single product by id
    Show {
        /// Product id
        id: String,
    },
}

pub fn execute(ctx: &Context, action: ProductsAction) -> Result<()> {
    match action {
        ProductsAction::List => list_products(ctx),
        ProductsAction::Show { id } => show_product(ctx, id),
    }
}

fn list_products(ctx: &Context) -> Result<()> {
    let snapshot = ctx.snapshot()?;
    let rows: Vec<ProductRow> = snapshot.products.iter().map(ProductRow::from).collect();
    print_output(&rows, ctx.format)
}

fn show_product(ctx: &Context, id: String) -> Result<()> {
    let snapshot = ctx.snapshot()?;
    match snapshot.products.iter().find(|p| p.id == id) {
        Some(product) => print_output(&[ProductRow::from(product)], ctx.format),
        None => Err(tqm_core::Error::not_found(format!("product {}", id)).into()),
    }
}
