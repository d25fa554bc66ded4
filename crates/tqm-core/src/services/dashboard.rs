//! Dashboard composition
//!
//! Turns a [`DashboardSnapshot`] into the pieces the dashboard shows: stat
//! cards, the quality and defect bar charts, and the recent-products list.

use serde::Serialize;

use super::locale;
use crate::models::{DashboardSnapshot, PerformanceRecord, Product, SummaryCounts};

/// Number of products shown in the recent-products table
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: usize,
    /// Month-over-month caption, e.g. "+12%"
    pub trend: &'static str,
}

/// Stat cards for the two summary counts
pub fn stat_cards(summary: SummaryCounts) -> Vec<StatCard> {
    vec![
        StatCard {
            title: locale::REGISTERED_PRODUCTS_TITLE,
            value: summary.total_products,
            trend: "+12%",
        },
        StatCard {
            title: locale::TOTAL_REPORTS_LABEL,
            value: summary.total_reports,
            trend: "+5%",
        },
    ]
}

/// Which figure a chart plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMetric {
    QualityRate,
    Defects,
}

impl ChartMetric {
    pub fn title(self) -> &'static str {
        match self {
            ChartMetric::QualityRate => locale::QUALITY_CHART_TITLE,
            ChartMetric::Defects => locale::DEFECTS_CHART_TITLE,
        }
    }

    /// Legend name of the plotted series
    pub fn series_name(self) -> &'static str {
        match self {
            ChartMetric::QualityRate => locale::QUALITY_SERIES_NAME,
            ChartMetric::Defects => locale::DEFECT_COUNT_HEADER,
        }
    }

    fn value_of(self, record: &PerformanceRecord) -> f64 {
        match self {
            ChartMetric::QualityRate => record.quality_rate,
            ChartMetric::Defects => record.defect_count as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// One bar chart's data, in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: &'static str,
    pub name: &'static str,
    pub metric: ChartMetric,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn from_records(records: &[PerformanceRecord], metric: ChartMetric) -> Self {
        let points = records
            .iter()
            .map(|r| ChartPoint {
                label: r.period.clone(),
                value: metric.value_of(r),
            })
            .collect();

        Self {
            title: metric.title(),
            name: metric.series_name(),
            metric,
            points,
        }
    }

    /// Largest plotted value, 0 for an empty series
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    /// Bar length per point, scaled so the maximum fills `width` cells
    pub fn bar_lengths(&self, width: usize) -> Vec<usize> {
        let max = self.max_value();
        self.points
            .iter()
            .map(|p| {
                if max <= 0.0 || p.value <= 0.0 {
                    0
                } else {
                    ((p.value / max) * width as f64).round() as usize
                }
            })
            .collect()
    }
}

/// First `limit` products, in the order supplied
pub fn recent_products(products: &[Product], limit: usize) -> &[Product] {
    &products[..products.len().min(limit)]
}

/// Everything the dashboard view renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView<'a> {
    pub cards: Vec<StatCard>,
    pub quality_chart: ChartSeries,
    pub defects_chart: ChartSeries,
    pub recent_products: &'a [Product],
}

impl<'a> DashboardView<'a> {
    pub fn compose(snapshot: &'a DashboardSnapshot, recent_limit: usize) -> Self {
        Self {
            cards: stat_cards(snapshot.summary()),
            quality_chart: ChartSeries::from_records(&snapshot.kpi_data, ChartMetric::QualityRate),
            defects_chart: ChartSeries::from_records(&snapshot.kpi_data, ChartMetric::Defects),
            recent_products: recent_products(&snapshot.products, recent_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            specs: String::new(),
            image: None,
        }
    }

    fn records() -> Vec<PerformanceRecord> {
        vec![
            PerformanceRecord::new("Jan", 95.0, 3),
            PerformanceRecord::new("Feb", 97.0, 1),
            PerformanceRecord::new("Mar", 90.0, 6),
        ]
    }

    #[test]
    fn test_stat_cards() {
        let cards = stat_cards(SummaryCounts {
            total_products: 7,
            total_reports: 3,
        });
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].value, 7);
        assert_eq!(cards[0].trend, "+12%");
        assert_eq!(cards[1].value, 3);
        assert_eq!(cards[1].trend, "+5%");
    }

    #[test]
    fn test_chart_series_keeps_input_order() {
        let series = ChartSeries::from_records(&records(), ChartMetric::Defects);
        let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan", "Feb", "Mar"]);
        assert_eq!(series.points[2].value, 6.0);
        assert_eq!(series.title, locale::DEFECTS_CHART_TITLE);
    }

    #[test]
    fn test_bar_lengths_scale_to_max() {
        let series = ChartSeries::from_records(&records(), ChartMetric::Defects);
        assert_eq!(series.bar_lengths(12), vec![6, 2, 12]);
    }

    #[test]
    fn test_bar_lengths_all_zero() {
        let flat = vec![PerformanceRecord::new("Jan", 0.0, 0)];
        let series = ChartSeries::from_records(&flat, ChartMetric::Defects);
        assert_eq!(series.bar_lengths(10), vec![0]);
    }

    #[test]
    fn test_empty_series() {
        let series = ChartSeries::from_records(&[], ChartMetric::QualityRate);
        assert_eq!(series.max_value(), 0.0);
        assert!(series.bar_lengths(10).is_empty());
    }

    #[test]
    fn test_recent_products_limit() {
        let products: Vec<Product> = (1..=8).map(|i| product(&i.to_string())).collect();
        let recent = recent_products(&products, DEFAULT_RECENT_LIMIT);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].id, "1");
        assert_eq!(recent[4].id, "5");

        assert_eq!(recent_products(&products[..2], 5).len(), 2);
    }

    #[test]
    fn test_compose_view() {
        let snapshot = DashboardSnapshot {
            products: vec![product("a"), product("b")],
            kpi_data: records(),
        };
        let view = DashboardView::compose(&snapshot, 1);
        assert_eq!(view.cards[0].value, 2);
        assert_eq!(view.cards[1].value, 3);
        assert_eq!(view.quality_chart.points.len(), 3);
        assert_eq!(view.recent_products.len(), 1);
    }
}
