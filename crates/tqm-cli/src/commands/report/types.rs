//! Report types
//!
//! Types for report commands.

use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;
use tqm_core::{format_number, PerformanceRecord};

#[derive(Subcommand)]
pub enum ReportAction {
    /// Export the dashboard report as CSV
    Export {
        /// Directory to save into (default: TQM_EXPORT_DIR, config file, or Downloads)
        #[arg(short, long, conflicts_with = "stdout")]
        output_dir: Option<String>,

        /// Write the CSV to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },

    /// Read back an exported report
    Inspect {
        /// Path to an exported CSV report
        file: String,
    },
}

/// Summary row of an exported report
#[derive(Debug, Serialize, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "المقياس")]
    pub metric: String,
    #[tabled(rename = "القيمة")]
    pub value: String,
}

/// Performance row of an exported report
#[derive(Debug, Serialize, Tabled)]
pub struct RecordRow {
    #[tabled(rename = "الشهر")]
    pub period: String,
    #[tabled(rename = "معدل الجودة (%)")]
    pub quality_rate: String,
    #[tabled(rename = "عدد العيوب")]
    pub defect_count: String,
}

impl From<&PerformanceRecord> for RecordRow {
    fn from(record: &PerformanceRecord) -> Self {
        Self {
            period: record.period.clone(),
            quality_rate: format_number(record.quality_rate),
            defect_count: record.defect_count.to_string(),
        }
    }
}
