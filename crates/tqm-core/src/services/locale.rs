//! Fixed-locale text for the dashboard (Arabic, Egypt)
//!
//! Labels and date formatting are hardcoded; there is no locale switching.

use chrono::{Datelike, NaiveDate};

/// Right-to-left mark emitted before each date separator
pub const RLM: char = '\u{200F}';

// Export document
pub const METRIC_HEADER: &str = "المقياس";
pub const VALUE_HEADER: &str = "القيمة";
pub const REPORT_DATE_LABEL: &str = "تقرير ملخص النظام";
pub const TOTAL_PRODUCTS_LABEL: &str = "إجمالي المنتجات";
pub const TOTAL_REPORTS_LABEL: &str = "إجمالي تقارير الأداء";
pub const PERFORMANCE_SECTION_TITLE: &str = "تحليل مؤشرات الأداء";
pub const PERIOD_HEADER: &str = "الشهر";
pub const QUALITY_RATE_HEADER: &str = "معدل الجودة (%)";
pub const DEFECT_COUNT_HEADER: &str = "عدد العيوب";

// Dashboard view
pub const REGISTERED_PRODUCTS_TITLE: &str = "إجمالي المنتجات المسجلة";
pub const QUALITY_CHART_TITLE: &str = "مؤشر الجودة العام";
pub const DEFECTS_CHART_TITLE: &str = "تحليل عيوب الإنتاج";
pub const QUALITY_SERIES_NAME: &str = "معدل الجودة %";
pub const RECENT_PRODUCTS_TITLE: &str = "أحدث المنتجات المضافة";
pub const TREND_CAPTION: &str = "مقارنة بالشهر الماضي";

/// Map ASCII digits to Arabic-Indic digits (U+0660..U+0669)
pub fn to_arabic_indic_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Short date in the `ar-EG` form: day/month/year, unpadded, Arabic-Indic digits
pub fn format_report_date(date: NaiveDate) -> String {
    let parts = [
        date.day().to_string(),
        date.month().to_string(),
        date.year().to_string(),
    ];
    let sep = format!("{}/", RLM);
    to_arabic_indic_digits(&parts.join(&sep))
}
