//! Read back an exported dashboard report

use serde::Serialize;

use super::report_export::BOM;
use crate::error::{Error, Result};
use crate::models::PerformanceRecord;

/// Contents recovered from an exported report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedReport {
    /// Report date exactly as written (localized)
    pub generated_on: String,
    pub total_products: usize,
    pub total_reports: usize,
    pub records: Vec<PerformanceRecord>,
}

/// Parse a report produced by [`super::report_export::ReportExporter`].
///
/// Header labels are not checked, only the shape: a header plus three
/// summary rows, a blank line, a title, a column header, then data rows.
pub fn parse_report(text: &str) -> Result<ParsedReport> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let rows = split_rows(text)?;

    let blank = rows
        .iter()
        .position(|(_, fields)| fields.len() == 1 && fields[0].is_empty())
        .ok_or_else(|| Error::parse(1, "missing blank line between sections"))?;

    let summary = &rows[..blank];
    if summary.len() != 4 {
        return Err(Error::parse(
            1,
            format!("expected header and 3 summary rows, found {} rows", summary.len()),
        ));
    }

    let generated_on = summary_value(&summary[1])?.to_string();
    let total_products = parse_count(&summary[2])?;
    let total_reports = parse_count(&summary[3])?;

    // Title and column header follow the blank line
    let data_start = blank + 3;
    if rows.len() < data_start {
        let line = rows.last().map(|(n, _)| *n).unwrap_or(1);
        return Err(Error::parse(line, "missing performance section headers"));
    }

    let records = rows[data_start..]
        .iter()
        .map(parse_record)
        .collect::<Result<Vec<_>>>()?;

    Ok(ParsedReport {
        generated_on,
        total_products,
        total_reports,
        records,
    })
}

type Row = (usize, Vec<String>);

fn summary_value(row: &Row) -> Result<&str> {
    let (line, fields) = row;
    match fields.as_slice() {
        [_, value] => Ok(value.as_str()),
        _ => Err(Error::parse(*line, format!("expected 2 fields, found {}", fields.len()))),
    }
}

fn parse_count(row: &Row) -> Result<usize> {
    let value = summary_value(row)?;
    value
        .parse()
        .map_err(|_| Error::parse(row.0, format!("invalid count: {}", value)))
}

fn parse_record(row: &Row) -> Result<PerformanceRecord> {
    let (line, fields) = row;
    let [period, rate, defects] = fields.as_slice() else {
        return Err(Error::parse(*line, format!("expected 3 fields, found {}", fields.len())));
    };
    let quality_rate: f64 = rate
        .parse()
        .map_err(|_| Error::parse(*line, format!("invalid quality rate: {}", rate)))?;
    let defect_count: u64 = defects
        .parse()
        .map_err(|_| Error::parse(*line, format!("invalid defect count: {}", defects)))?;
    Ok(PerformanceRecord::new(period.clone(), quality_rate, defect_count))
}

/// Split CSV text into rows of unquoted fields, tagged with their 1-based start line
fn split_rows(text: &str) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                rows.push((row_start, std::mem::take(&mut fields)));
                line += 1;
                row_start = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(Error::parse(row_start, "unterminated quoted field"));
    }
    // A final line break does not open another row
    let trailing_break = row_start > 1 && fields.is_empty() && field.is_empty();
    if !trailing_break {
        fields.push(field);
        rows.push((row_start, fields));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\u{FEFF}المقياس,القيمة\n\
        تقرير ملخص النظام,١٨\u{200F}/١٠\u{200F}/٢٠٢٦\n\
        إجمالي المنتجات,10\n\
        إجمالي تقارير الأداء,2\n\
        \n\
        تحليل مؤشرات الأداء\n\
        الشهر,معدل الجودة (%),عدد العيوب\n\
        Jan,95,3\n\
        Feb,97,1";

    #[test]
    fn test_parse_sample() {
        let parsed = parse_report(SAMPLE).unwrap();
        assert_eq!(parsed.generated_on, "١٨\u{200F}/١٠\u{200F}/٢٠٢٦");
        assert_eq!(parsed.total_products, 10);
        assert_eq!(parsed.total_reports, 2);
        assert_eq!(
            parsed.records,
            vec![
                PerformanceRecord::new("Jan", 95.0, 3),
                PerformanceRecord::new("Feb", 97.0, 1),
            ]
        );
    }

    #[test]
    fn test_parse_trailing_newline() {
        let parsed = parse_report(&format!("{}\n", SAMPLE)).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1].period, "Feb");
    }

    #[test]
    fn test_parse_crlf_with_trailing_newline() {
        let text = SAMPLE.replace('\n', "\r\n") + "\r\n";
        let parsed = parse_report(&text).unwrap();
        assert_eq!(parsed.total_products, 10);
        assert_eq!(
            parsed.records,
            vec![
                PerformanceRecord::new("Jan", 95.0, 3),
                PerformanceRecord::new("Feb", 97.0, 1),
            ]
        );
    }

    #[test]
    fn test_parse_without_data_rows_trailing_newline() {
        let text = SAMPLE.rsplitn(3, '\n').nth(2).unwrap();
        let parsed = parse_report(&format!("{}\n", text)).unwrap();
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_parse_without_data_rows() {
        let text = SAMPLE.rsplitn(3, '\n').nth(2).unwrap();
        let parsed = parse_report(text).unwrap();
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_parse_quoted_period() {
        let text = SAMPLE.replace("Jan,95,3", "\"Q1, \"\"early\"\"\",95,3");
        let parsed = parse_report(&text).unwrap();
        assert_eq!(parsed.records[0].period, "Q1, \"early\"");
    }

    #[test]
    fn test_parse_missing_blank_line() {
        let err = parse_report("a,b\nc,d").unwrap_err();
        assert!(err.to_string().contains("blank line"));
    }

    #[test]
    fn test_parse_bad_count_reports_line() {
        let text = SAMPLE.replace("إجمالي المنتجات,10", "إجمالي المنتجات,ten");
        let err = parse_report(&text).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn test_parse_short_record_row() {
        let text = format!("{}\nMar,90", SAMPLE);
        let err = parse_report(&text).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 10, .. }));
    }

    #[test]
    fn test_parse_unterminated_quote() {
        let text = format!("{}\n\"Mar,90,1", SAMPLE);
        assert!(parse_report(&text).is_err());
    }
}
