//! Data models for the TQM dashboard

use serde::{Deserialize, Serialize};

/// One period's quality figures (typically a month)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    #[serde(alias = "month")]
    pub period: String,
    pub quality_rate: f64,
    #[serde(alias = "defects")]
    pub defect_count: u64,
}

impl PerformanceRecord {
    pub fn new(period: impl Into<String>, quality_rate: f64, defect_count: u64) -> Self {
        Self {
            period: period.into(),
            quality_rate,
            defect_count,
        }
    }
}

/// Registered product shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specs: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Summary counts, derived from the caller's collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCounts {
    pub total_products: usize,
    pub total_reports: usize,
}

impl SummaryCounts {
    /// Derive the counts from the lengths of the product and report collections
    pub fn from_collections<P, R>(products: &[P], reports: &[R]) -> Self {
        Self {
            total_products: products.len(),
            total_reports: reports.len(),
        }
    }
}

/// Everything the host hands to the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub kpi_data: Vec<PerformanceRecord>,
}

impl DashboardSnapshot {
    pub fn summary(&self) -> SummaryCounts {
        SummaryCounts::from_collections(&self.products, &self.kpi_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_dashboard_field_names() {
        let json = r#"{"month":"Jan","qualityRate":95,"defects":3}"#;
        let record: PerformanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, PerformanceRecord::new("Jan", 95.0, 3));
    }

    #[test]
    fn test_record_accepts_canonical_field_names() {
        let json = r#"{"period":"Feb","qualityRate":97.5,"defectCount":1}"#;
        let record: PerformanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.period, "Feb");
        assert_eq!(record.quality_rate, 97.5);
        assert_eq!(record.defect_count, 1);
    }

    #[test]
    fn test_record_rejects_negative_defects() {
        let json = r#"{"period":"Feb","qualityRate":97,"defectCount":-1}"#;
        assert!(serde_json::from_str::<PerformanceRecord>(json).is_err());
    }

    #[test]
    fn test_summary_counts_follow_collection_lengths() {
        let empty: Vec<Product> = Vec::new();
        let records = vec![PerformanceRecord::new("Jan", 95.0, 3)];
        assert_eq!(
            SummaryCounts::from_collections(&empty, &records),
            SummaryCounts { total_products: 0, total_reports: 1 }
        );

        let many = vec![(); 10];
        let counts = SummaryCounts::from_collections(&many, &[(), ()]);
        assert_eq!(counts.total_products, 10);
        assert_eq!(counts.total_reports, 2);
    }

    #[test]
    fn test_snapshot_defaults_missing_collections() {
        let snapshot: DashboardSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.products.is_empty());
        assert!(snapshot.kpi_data.is_empty());
        assert_eq!(snapshot.summary(), SummaryCounts::default());
    }

    #[test]
    fn test_product_optional_fields() {
        let json = r#"{"id":"p-1","name":"Valve"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.specs, "");
        assert!(product.image.is_none());
    }
}
