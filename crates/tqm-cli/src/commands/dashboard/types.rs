//! Dashboard types
//!
//! Types for dashboard commands and display.

use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;
use tqm_core::{Product, StatCard};

use super::helpers::truncate;

#[derive(Subcommand)]
pub enum DashboardAction {
    /// Show the whole dashboard: cards, both charts and recent products
    Overview {
        /// Width of the longest bar (default: 30)
        #[arg(short, long, default_value = "30")]
        width: usize,
    },

    /// Show the summary stat cards
    Stats,

    /// Show quality rate and defect charts per period
    Charts {
        /// Width of the longest bar (default: 30)
        #[arg(short, long, default_value = "30")]
        width: usize,
    },

    /// Show the most recently added products
    Recent {
        /// Number of products to show (default: config recent_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Debug, Serialize, Tabled)]
pub struct StatsRow {
    #[tabled(rename = "المقياس")]
    pub metric: String,
    #[tabled(rename = "القيمة")]
    pub value: String,
    #[tabled(rename = "الاتجاه")]
    pub trend: String,
}

impl From<&StatCard> for StatsRow {
    fn from(card: &StatCard) -> Self {
        Self {
            metric: card.title.to_string(),
            value: card.value.to_string(),
            trend: card.trend.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
pub struct ChartRow {
    #[tabled(rename = "الشهر")]
    pub period: String,
    #[tabled(rename = "القيمة")]
    pub value: String,
    #[tabled(rename = "")]
    pub bar: String,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ProductRow {
    #[tabled(rename = "معرف")]
    pub id: String,
    #[tabled(rename = "المنتج")]
    pub name: String,
    #[tabled(rename = "المواصفات الفنية")]
    pub specs: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: format!("#{}", product.id),
            name: product.name.clone(),
            specs: truncate(&product.specs, 40),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_row_from_card() {
        let card = StatCard {
            title: "إجمالي المنتجات المسجلة",
            value: 12,
            trend: "+12%",
        };
        let row = StatsRow::from(&card);
        assert_eq!(row.value, "12");
        assert_eq!(row.trend, "+12%");
    }

    #[test]
    fn test_product_row_truncates_specs() {
        let product = Product {
            id: "7".to_string(),
            name: "Gearbox".to_string(),
            specs: "x".repeat(60),
            image: None,
        };
        let row = ProductRow::from(&product);
        assert_eq!(row.id, "#7");
        assert_eq!(row.specs.chars().count(), 40);
        assert!(row.specs.ends_with("..."));
    }

    #[test]
    fn test_chart_row_serialization() {
        let row = ChartRow {
            period: "Jan".to_string(),
            value: "95".to_string(),
            bar: "███".to_string(),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("Jan"));
        assert!(json.contains("bar"));
    }
}
