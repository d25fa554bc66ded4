//! Dashboard report export
//!
//! Serializes summary counts and performance records into a two-section
//! CSV document that spreadsheet software opens with the right encoding.
//!
//! Layout:
//!
//! ```text
//! \u{FEFF}metric,value
//! <report date label>,<date>
//! <total products label>,<count>
//! <total reports label>,<count>
//!
//! <performance section title>
//! period,quality rate,defect count
//! <one row per record, input order>
//! ```

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;

use super::delivery::{Delivery, ReportSink};
use super::locale;
use crate::error::Result;
use crate::models::{PerformanceRecord, SummaryCounts};

/// Byte-order mark placed before the first header
pub const BOM: char = '\u{FEFF}';

/// Filename prefix for exported reports
pub const FILENAME_PREFIX: &str = "TQM_Dashboard_Report_";

/// Declared content type of the export
pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8;";

/// Field and line separators
pub const DELIMITER: char = ',';
pub const LINE_SEPARATOR: &str = "\n";

/// A finished report, ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub filename: String,
    /// Full text payload, BOM included
    pub content: String,
    pub content_type: &'static str,
    pub encoding: &'static str,
}

impl ReportDocument {
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Payload lines with the BOM removed from the first one
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content
            .strip_prefix(BOM)
            .unwrap_or(&self.content)
            .split(LINE_SEPARATOR)
    }
}

/// Builds dashboard reports
#[derive(Debug, Clone, Default)]
pub struct ReportExporter;

impl ReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Build a report stamped with the current local time
    pub fn export(&self, records: &[PerformanceRecord], summary: SummaryCounts) -> ReportDocument {
        self.export_at(records, summary, Local::now())
    }

    /// Build a report for a given clock reading.
    ///
    /// The summary date uses `now` in its own timezone; the filename date is
    /// always the UTC calendar date.
    pub fn export_at<Tz: TimeZone>(
        &self,
        records: &[PerformanceRecord],
        summary: SummaryCounts,
        now: DateTime<Tz>,
    ) -> ReportDocument {
        let generated_on = locale::format_report_date(now.date_naive());

        let mut lines: Vec<String> = Vec::with_capacity(records.len() + 7);
        lines.push(format!(
            "{}{}",
            BOM,
            csv_row([locale::METRIC_HEADER, locale::VALUE_HEADER])
        ));
        lines.push(csv_row([locale::REPORT_DATE_LABEL, generated_on.as_str()]));
        lines.push(csv_row([
            locale::TOTAL_PRODUCTS_LABEL,
            summary.total_products.to_string().as_str(),
        ]));
        lines.push(csv_row([
            locale::TOTAL_REPORTS_LABEL,
            summary.total_reports.to_string().as_str(),
        ]));
        lines.push(String::new());
        lines.push(csv_row([locale::PERFORMANCE_SECTION_TITLE]));
        lines.push(csv_row([
            locale::PERIOD_HEADER,
            locale::QUALITY_RATE_HEADER,
            locale::DEFECT_COUNT_HEADER,
        ]));
        for record in records {
            lines.push(csv_row([
                record.period.as_str(),
                format_number(record.quality_rate).as_str(),
                record.defect_count.to_string().as_str(),
            ]));
        }

        let filename = report_filename(&now.with_timezone(&Utc));
        log::debug!(
            "[report] Built {} with {} performance rows",
            filename,
            records.len()
        );

        ReportDocument {
            filename,
            content: lines.join(LINE_SEPARATOR),
            content_type: CSV_CONTENT_TYPE,
            encoding: "utf-8",
        }
    }

    /// Build a report and hand it to `sink` in one step.
    ///
    /// Building cannot fail; any error comes from the sink.
    pub fn export_and_deliver<S: ReportSink + ?Sized>(
        &self,
        records: &[PerformanceRecord],
        summary: SummaryCounts,
        sink: &mut S,
    ) -> Result<Delivery> {
        let document = self.export(records, summary);
        deliver(&document, sink)
    }
}

/// Hand a built document to a sink, logging the outcome
pub fn deliver<S: ReportSink + ?Sized>(document: &ReportDocument, sink: &mut S) -> Result<Delivery> {
    match sink.deliver(document) {
        Ok(delivery) => {
            log::info!("[report] Delivered {} ({} bytes)", document.filename, document.as_bytes().len());
            Ok(delivery)
        }
        Err(e) => {
            log::warn!("[report] Delivery of {} failed: {}", document.filename, e);
            Err(e)
        }
    }
}

/// `TQM_Dashboard_Report_YYYY-MM-DD.csv` for the given instant
pub fn report_filename(now: &DateTime<Utc>) -> String {
    format!("{}{}.csv", FILENAME_PREFIX, now.format("%Y-%m-%d"))
}

/// Numeric field text: shortest round-trip digits, with `-0` written as `0`
/// and exponent form (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exp_form = format!("{:e}", value);
    match exp_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exp_form,
    }
}

/// Join fields into one CSV row
pub fn csv_row<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a field only when it holds a delimiter, quote or line break
pub fn escape_field(value: &str) -> String {
    let needs_quotes = value.contains(DELIMITER)
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');
    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
