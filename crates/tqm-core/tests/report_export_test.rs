//! Integration tests for dashboard report export and read-back

use chrono::{TimeZone, Utc};
use tempfile::TempDir;
use tqm_core::{
    parse_report, DirectorySink, MemorySink, PerformanceRecord, Product, ReportExporter,
    ReportSink, SummaryCounts,
};

fn product(id: usize) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        specs: "steel".to_string(),
        image: None,
    }
}

fn records(n: usize) -> Vec<PerformanceRecord> {
    (0..n)
        .map(|i| PerformanceRecord::new(format!("P{:02}", i), 90.0 + i as f64 / 4.0, i as u64))
        .collect()
}

#[test]
fn test_export_worked_example() {
    let records = vec![
        PerformanceRecord::new("Jan", 95.0, 3),
        PerformanceRecord::new("Feb", 97.0, 1),
    ];
    let summary = SummaryCounts {
        total_products: 10,
        total_reports: 2,
    };
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();

    let doc = ReportExporter::new().export_at(&records, summary, now);
    let lines: Vec<&str> = doc.lines().collect();

    assert_eq!(&lines[7..], &["Jan,95,3", "Feb,97,1"]);
    assert!(lines[2].ends_with(",10"));
    assert!(lines[3].ends_with(",2"));
}

#[test]
fn test_data_rows_match_input_in_order() {
    let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    for n in [0, 1, 25] {
        let input = records(n);
        let doc = ReportExporter::new().export_at(&input, SummaryCounts::default(), now);
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines.len(), 7 + n, "rows for n={}", n);

        for (line, record) in lines[7..].iter().zip(&input) {
            assert!(line.starts_with(&format!("{},", record.period)));
        }
    }
}

#[test]
fn test_summary_counts_follow_collections() {
    let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    for (n_products, n_records) in [(0, 0), (1, 1), (12, 30)] {
        let products: Vec<Product> = (0..n_products).map(product).collect();
        let kpis = records(n_records);
        let summary = SummaryCounts::from_collections(&products, &kpis);

        let doc = ReportExporter::new().export_at(&kpis, summary, now);
        let parsed = parse_report(&doc.content).unwrap();
        assert_eq!(parsed.total_products, n_products);
        assert_eq!(parsed.total_reports, n_records);
    }
}

#[test]
fn test_round_trip_recovers_records() {
    let now = Utc.with_ymd_and_hms(2026, 6, 30, 8, 0, 0).unwrap();
    let mut input = records(6);
    input.push(PerformanceRecord::new("Q3, adjusted", 88.5, 11));
    input.push(PerformanceRecord::new("يناير", 99.0, 0));

    let summary = SummaryCounts {
        total_products: 4,
        total_reports: input.len(),
    };
    let doc = ReportExporter::new().export_at(&input, summary, now);
    let parsed = parse_report(&doc.content).unwrap();

    assert_eq!(parsed.records, input);
    assert_eq!(parsed.generated_on, "٣٠\u{200F}/٦\u{200F}/٢٠٢٦");
}

#[test]
fn test_export_and_deliver_to_memory() {
    let mut sink = MemorySink::new();
    let input = records(3);
    let summary = SummaryCounts::from_collections(&[product(1)], &input);

    ReportExporter::new()
        .export_and_deliver(&input, summary, &mut sink)
        .unwrap();

    let doc = sink.last().unwrap();
    assert!(doc.filename.starts_with("TQM_Dashboard_Report_"));
    assert!(doc.filename.ends_with(".csv"));
    assert_eq!(parse_report(&doc.content).unwrap().records, input);
}

#[test]
fn test_export_and_deliver_to_directory() {
    let temp_dir = TempDir::new().unwrap();
    let mut sink = DirectorySink::new(temp_dir.path());
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();

    let doc = ReportExporter::new().export_at(&records(2), SummaryCounts::default(), now);
    sink.deliver(&doc).unwrap();

    let path = temp_dir.path().join("TQM_Dashboard_Report_2026-10-18.csv");
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    assert_eq!(bytes, doc.as_bytes());
}
