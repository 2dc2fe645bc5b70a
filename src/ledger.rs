//! Records of calculated emissions, appended to a CSV ledger after each run.
//!
//! The ledger is only ever appended to. It is read back to rank categories and award credits
//! across past months.
use crate::aggregate::Footprint;
use crate::reading::ReadingSource;
use crate::units::round2;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Description used for records derived from questionnaire answers
const ESTIMATE_DESCRIPTION: &str = "questionnaire estimate (30 days)";

/// A single entry in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// The category key (a lifestyle category or a direct-reading category)
    pub category: String,
    /// Emissions attributed to the user, in kg CO₂e
    pub amount: f64,
    /// Where the figure came from
    pub source: ReadingSource,
    /// Free-text description (e.g. "120 kWh (OCR)")
    pub description: String,
    /// When the record was made
    pub timestamp: DateTime<Utc>,
}

/// Build the ledger records for a footprint.
///
/// Each non-zero category estimate yields a monthly record and each direct reading yields a
/// record of its attributed emissions. Amounts are rounded to two decimal places.
pub fn records_for_footprint(footprint: &Footprint, timestamp: DateTime<Utc>) -> Vec<LedgerRecord> {
    let estimated = footprint
        .breakdown
        .iter()
        .map(|entry| (entry, round2(entry.monthly().value())))
        .filter(|(_, amount)| *amount != 0.0)
        .map(|(entry, amount)| LedgerRecord {
            category: entry.category.to_string(),
            amount,
            source: ReadingSource::Manual,
            description: ESTIMATE_DESCRIPTION.to_string(),
            timestamp,
        });

    let direct = footprint.direct.readings.iter().map(|reading| LedgerRecord {
        category: reading.category.to_string(),
        amount: reading.attributed(footprint.household_size).value(),
        source: reading.source,
        description: reading.describe(),
        timestamp,
    });

    estimated.chain(direct).collect()
}

/// Whether the last byte of a non-empty file is a newline
fn ends_with_newline(file: &mut File) -> Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;

    Ok(last[0] == b'\n')
}

/// Append records to the ledger at `file_path`, creating it if needed.
///
/// If the existing ledger does not end with a newline, one is added before the new records.
pub fn append_records(file_path: &Path, records: &[LedgerRecord]) -> Result<()> {
    let is_new = !file_path.is_file() || file_path.metadata()?.len() == 0;
    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(file_path)
        .with_context(|| format!("Could not open ledger: {}", file_path.display()))?;

    if !is_new && !ends_with_newline(&mut file)? {
        file.write_all(b"\n")?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Read all records from the ledger at `file_path`
pub fn read_ledger(file_path: &Path) -> Result<Vec<LedgerRecord>> {
    let mut reader = csv::Reader::from_path(file_path)
        .with_context(|| format!("Could not read ledger: {}", file_path.display()))?;

    reader
        .deserialize()
        .enumerate()
        .map(|(idx, record)| {
            record.with_context(|| {
                format!("Invalid record on line {} of {}", idx + 2, file_path.display())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::answers::{Answers, FoodAnswers};
    use crate::fixture::{assert_error, ledger_record};
    use crate::reading::ReadingSession;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_records_for_footprint() {
        let answers = Answers {
            food: FoodAnswers {
                diet_type: Some("vegetarian".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut session = ReadingSession::new();
        session.submit("electricity", 100.0, ReadingSource::Ocr);
        let footprint = aggregate(&answers, &session, 2);
        let timestamp = "2026-05-01T12:00:00Z".parse().unwrap();

        let records = records_for_footprint(&footprint, timestamp);
        assert_eq!(
            records,
            [
                LedgerRecord {
                    category: "food".into(),
                    amount: 50.14, // 610 / 365 × 30
                    source: ReadingSource::Manual,
                    description: ESTIMATE_DESCRIPTION.into(),
                    timestamp,
                },
                LedgerRecord {
                    category: "electricity".into(),
                    amount: 41.0,
                    source: ReadingSource::Ocr,
                    description: "100 kWh (OCR)".into(),
                    timestamp,
                }
            ]
        );
    }

    #[test]
    fn test_append_and_read() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("ledger.csv");

        let first = [ledger_record("petrol", 23.1, "2026-01-05T10:00:00Z")];
        let second = [
            ledger_record("bus", 8.9, "2026-02-01T08:30:00Z"),
            ledger_record("waste", -1.75, "2026-02-01T08:30:00Z"),
        ];
        append_records(&file_path, &first).unwrap();
        append_records(&file_path, &second).unwrap();

        // The header is only written once
        let contents = fs::read_to_string(&file_path).unwrap();
        assert_eq!(contents.matches("category").count(), 1);

        let records = read_ledger(&file_path).unwrap();
        assert_eq!(records, [first.as_slice(), second.as_slice()].concat());
    }

    #[test]
    fn test_append_without_trailing_newline() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("ledger.csv");
        fs::write(
            &file_path,
            "category,amount,source,description,timestamp\npetrol,23.1,manual,,2026-01-05T10:00:00Z",
        )
        .unwrap();

        let new = [ledger_record("bus", 8.9, "2026-02-01T08:30:00Z")];
        append_records(&file_path, &new).unwrap();

        let records = read_ledger(&file_path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, "petrol");
        assert_eq!(records[1], new[0]);
    }

    #[test]
    fn test_read_ledger_invalid() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("ledger.csv");
        fs::write(
            &file_path,
            "category,amount,source,description,timestamp\npetrol,abc,manual,x,2026-01-05T10:00:00Z\n",
        )
        .unwrap();

        assert_error!(
            read_ledger(&file_path),
            format!("Invalid record on line 2 of {}", file_path.display())
        );
    }
}
