//! # tqm-core
//!
//! Core logic for the TQM quality dashboard.
//!
//! This crate provides:
//! - Data models (`models` module)
//! - Report export, delivery and parsing, dashboard composition (`services` module)
//! - Configuration resolution (`config` module)
//! - Unified error handling (`error` module)

pub mod config;
pub mod error;
pub mod models;
pub mod services;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};

pub use models::{DashboardSnapshot, PerformanceRecord, Product, SummaryCounts};

pub use services::{
    deliver, format_number, format_report_date, parse_report, recent_products, report_filename,
    stat_cards, ChartMetric, ChartPoint, ChartSeries, DashboardView, Delivery, DirectorySink,
    MemorySink, ParsedReport, ReportDocument, ReportExporter, ReportSink, StatCard, WriterSink,
    DEFAULT_RECENT_LIMIT,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
