//! Business logic services
//!
//! Report building and delivery, report parsing, dashboard composition and
//! the fixed-locale text they share.

pub mod dashboard;
pub mod delivery;
pub mod locale;
pub mod report_export;
pub mod report_parse;

pub use dashboard::{
    recent_products, stat_cards, ChartMetric, ChartPoint, ChartSeries, DashboardView, StatCard,
    DEFAULT_RECENT_LIMIT,
};
pub use delivery::{Delivery, DirectorySink, MemorySink, ReportSink, WriterSink};
pub use locale::format_report_date;
pub use report_export::{deliver, format_number, report_filename, ReportDocument, ReportExporter};
pub use report_parse::{parse_report, ParsedReport};
