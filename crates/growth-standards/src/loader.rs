//! CSV loader for weight-for-age reference tables.

use std::collections::BTreeMap;

use csv::{ReaderBuilder, Trim};
use growth_model::SdRow;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, StandardsError};

/// One line of a WHO weight-for-age table.
#[derive(Debug, Deserialize)]
struct WeightForAgeRecord {
    #[serde(rename = "Month")]
    month: u8,
    #[serde(rename = "SD3neg")]
    sd3neg: f32,
    #[serde(rename = "SD2neg")]
    sd2neg: f32,
    #[serde(rename = "SD1neg")]
    sd1neg: f32,
    #[serde(rename = "SD0")]
    sd0: f32,
    #[serde(rename = "SD1")]
    sd1: f32,
    #[serde(rename = "SD2")]
    sd2: f32,
    #[serde(rename = "SD3")]
    sd3: f32,
}

impl WeightForAgeRecord {
    fn weights(&self) -> [f32; 7] {
        [
            self.sd3neg,
            self.sd2neg,
            self.sd1neg,
            self.sd0,
            self.sd1,
            self.sd2,
            self.sd3,
        ]
    }
}

/// Parses one sex's table into rows keyed by age in months.
///
/// `source_name` only appears in error messages. Every row is checked for
/// strictly increasing weights and every month may appear once.
pub fn parse_weight_for_age(source_name: &str, content: &str) -> Result<BTreeMap<u8, SdRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(content.trim_start_matches('\u{feff}').as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(source_name, e))?
        .clone();

    let mut rows = BTreeMap::new();
    for record in reader.records() {
        let record = record.map_err(|e| StandardsError::csv(source_name, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let parsed: WeightForAgeRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| StandardsError::csv(source_name, e))?;

        let row = SdRow::from_weights(parsed.weights()).map_err(|source| {
            StandardsError::InvalidRow {
                source_name: source_name.to_string(),
                line,
                source,
            }
        })?;
        if rows.insert(parsed.month, row).is_some() {
            return Err(StandardsError::DuplicateAge {
                source_name: source_name.to_string(),
                age: parsed.month,
            });
        }
    }

    if rows.is_empty() {
        return Err(StandardsError::EmptyTable {
            source_name: source_name.to_string(),
        });
    }
    debug!(source = source_name, rows = rows.len(), "parsed weight-for-age table");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use growth_model::SdRowError;

    const HEADER: &str = "Month,SD3neg,SD2neg,SD1neg,SD0,SD1,SD2,SD3\n";

    #[test]
    fn parses_rows_by_month() {
        let content = format!(
            "{HEADER}0,2.1,2.5,2.9,3.3,3.9,4.4,5.0\n6,5.0,5.8,6.5,7.2,7.9,8.7,9.5\n"
        );
        let rows = parse_weight_for_age("test.csv", &content).expect("parse table");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[&6].median(), 7.2);
        assert_eq!(rows[&0].lowest(), 2.1);
    }

    #[test]
    fn tolerates_bom_and_padding() {
        let content = format!("\u{feff}{HEADER}3, 4.4, 5.0, 5.7, 6.4, 7.2, 8.0, 9.0\n");
        let rows = parse_weight_for_age("bom.csv", &content).expect("parse table");
        assert_eq!(rows[&3].highest(), 9.0);
    }

    #[test]
    fn rejects_decreasing_weights_with_line() {
        let content = format!(
            "{HEADER}0,2.1,2.5,2.9,3.3,3.9,4.4,5.0\n1,2.9,3.4,3.3,4.5,5.1,5.8,6.6\n"
        );
        let err = parse_weight_for_age("bad.csv", &content).unwrap_err();
        match err {
            StandardsError::InvalidRow { line, source, .. } => {
                assert_eq!(line, 3);
                assert!(matches!(source, SdRowError::NotIncreasing { index: 2, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_positive_weights_with_line() {
        let content = format!("{HEADER}0,-6,-5,-4,-3,-2,-1,0\n");
        let err = parse_weight_for_age("negative.csv", &content).unwrap_err();
        match err {
            StandardsError::InvalidRow { line, source, .. } => {
                assert_eq!(line, 2);
                assert_eq!(source, SdRowError::NotPositive { index: 0, weight: -6.0 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_duplicate_month() {
        let content = format!(
            "{HEADER}0,2.1,2.5,2.9,3.3,3.9,4.4,5.0\n0,2.1,2.5,2.9,3.3,3.9,4.4,5.0\n"
        );
        let err = parse_weight_for_age("dup.csv", &content).unwrap_err();
        assert!(matches!(err, StandardsError::DuplicateAge { age: 0, .. }));
    }

    #[test]
    fn rejects_non_numeric_weight() {
        let content = format!("{HEADER}0,2.1,abc,2.9,3.3,3.9,4.4,5.0\n");
        let err = parse_weight_for_age("nan.csv", &content).unwrap_err();
        assert!(matches!(err, StandardsError::Csv { .. }));
    }

    #[test]
    fn rejects_empty_table() {
        let err = parse_weight_for_age("empty.csv", HEADER).unwrap_err();
        assert!(matches!(err, StandardsError::EmptyTable { .. }));
    }
}
