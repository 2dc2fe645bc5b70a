//! The module responsible for writing output data to disk.
use crate::aggregate::{Footprint, Resolution};
use crate::budget::BudgetStatus;
use crate::factors::MONTHLY_BUDGET_KG;
use crate::reading::ReadingSource;
use crate::units::round2;
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod metadata;

/// The root folder in which session-specific output folders will be created
const OUTPUT_DIRECTORY_ROOT: &str = "footprint_results";

/// The output file name for the category breakdown
const BREAKDOWN_FILE_NAME: &str = "breakdown.csv";

/// The output file name for direct readings
const DIRECT_READINGS_FILE_NAME: &str = "direct_readings.csv";

/// The output file name for the summary
const SUMMARY_FILE_NAME: &str = "summary.toml";

/// Get the default output directory for the session in the specified directory
pub fn get_output_dir(session_dir: &Path) -> Result<PathBuf> {
    // Canonicalise in case the user has specified "."
    let session_dir = session_dir
        .canonicalize()
        .context("Could not resolve path to session")?;

    let session_name = session_dir
        .file_name()
        .context("Session cannot be in root folder")?
        .to_str()
        .context("Invalid chars in session dir name")?;

    Ok([OUTPUT_DIRECTORY_ROOT, session_name].iter().collect())
}

/// Create a new output directory, optionally replacing an existing one.
///
/// # Returns
///
/// Whether an existing, non-empty directory is being overwritten.
pub fn create_output_directory(output_dir: &Path, allow_overwrite: bool) -> Result<bool> {
    // If the folder already exists, then delete it if allowed
    let overwrite = if let Ok(mut it) = fs::read_dir(output_dir) {
        if it.next().is_none() {
            // Folder exists and is empty: nothing to do
            return Ok(false);
        }

        ensure!(
            allow_overwrite,
            "Output folder already exists and is not empty. Please re-run with --overwrite."
        );
        fs::remove_dir_all(output_dir)?;
        true
    } else {
        false
    };

    fs::create_dir_all(output_dir)?;

    Ok(overwrite)
}

/// Represents a row in the breakdown CSV file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct BreakdownRow {
    category: String,
    label: String,
    daily_kg: f64,
    monthly_kg: f64,
}

/// Represents a row in the direct readings CSV file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct DirectReadingRow {
    category: String,
    quantity: f64,
    unit: String,
    source: ReadingSource,
    emission_kg: f64,
    attributed_kg: f64,
}

/// The contents of the summary file
#[derive(Serialize)]
struct Summary {
    household_size: u32,
    /// Monthly emissions estimated from the questionnaire
    category_total_kg: f64,
    /// Emissions from direct readings, attributed to one person
    direct_total_kg: f64,
    grand_total_kg: f64,
    tips: Vec<&'static str>,
    budget: BudgetStatus,
}

impl Summary {
    fn new(footprint: &Footprint) -> Self {
        let status = footprint.status(MONTHLY_BUDGET_KG);
        Self {
            household_size: footprint.household_size,
            category_total_kg: round2(footprint.category_total(Resolution::Monthly)),
            direct_total_kg: footprint.direct.total.round2().value(),
            grand_total_kg: footprint.grand_total.round2().value(),
            tips: footprint.tips(),
            budget: BudgetStatus {
                total: round2(status.total),
                budget: status.budget,
                surplus: round2(status.surplus),
                credits: round2(status.credits),
                is_over: status.is_over,
                percent_used: round2(status.percent_used),
            },
        }
    }
}

/// Write the category breakdown to a CSV file
fn write_breakdown(output_path: &Path, footprint: &Footprint) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path.join(BREAKDOWN_FILE_NAME))?;
    for entry in &footprint.breakdown {
        writer.serialize(BreakdownRow {
            category: entry.category.to_string(),
            label: entry.label().to_string(),
            daily_kg: entry.daily.round2().value(),
            monthly_kg: entry.monthly().round2().value(),
        })?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the direct readings to a CSV file
fn write_direct_readings(output_path: &Path, footprint: &Footprint) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path.join(DIRECT_READINGS_FILE_NAME))?;
    for reading in &footprint.direct.readings {
        writer.serialize(DirectReadingRow {
            category: reading.category.to_string(),
            quantity: reading.quantity,
            unit: reading.category.emission_factor().unit.to_string(),
            source: reading.source,
            emission_kg: reading.emission.value(),
            attributed_kg: reading.attributed(footprint.household_size).value(),
        })?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the summary to a TOML file
fn write_summary(output_path: &Path, footprint: &Footprint) -> Result<()> {
    let summary = Summary::new(footprint);
    fs::write(
        output_path.join(SUMMARY_FILE_NAME),
        toml::to_string(&summary)?,
    )?;

    Ok(())
}

/// Write all results for a footprint to the specified folder
pub fn write_results(output_path: &Path, footprint: &Footprint) -> Result<()> {
    write_breakdown(output_path, footprint)?;
    write_direct_readings(output_path, footprint)?;
    write_summary(output_path, footprint)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::answers::{Answers, WasteAnswers};
    use crate::fixture::typical_answers;
    use crate::reading::ReadingSession;
    use itertools::Itertools;
    use rstest::rstest;
    use tempfile::tempdir;

    #[test]
    fn test_create_output_directory_new() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("results");
        assert!(!create_output_directory(&output_dir, false).unwrap());
        assert!(output_dir.is_dir());
    }

    #[test]
    fn test_create_output_directory_existing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("old.csv"), "x").unwrap();

        assert!(create_output_directory(dir.path(), false).is_err());
        assert!(dir.path().join("old.csv").is_file());

        assert!(create_output_directory(dir.path(), true).unwrap());
        assert!(dir.path().is_dir());
        assert!(!dir.path().join("old.csv").exists());
    }

    #[test]
    fn test_get_output_dir() {
        let dir = tempdir().unwrap();
        let session_dir = dir.path().join("my_session");
        fs::create_dir(&session_dir).unwrap();

        assert_eq!(
            get_output_dir(&session_dir).unwrap(),
            PathBuf::from("footprint_results/my_session")
        );
    }

    #[rstest]
    fn test_write_breakdown(typical_answers: Answers) {
        let footprint = aggregate(&typical_answers, &ReadingSession::new(), 1);
        let dir = tempdir().unwrap();
        write_breakdown(dir.path(), &footprint).unwrap();

        let rows: Vec<BreakdownRow> = csv::Reader::from_path(dir.path().join(BREAKDOWN_FILE_NAME))
            .unwrap()
            .into_deserialize()
            .try_collect()
            .unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[3].category, "shopping");
        assert_eq!(rows[3].label, "Electronics");
        // 28.3 × 1.5 / 365
        assert_eq!(rows[3].daily_kg, 0.12);
        assert_eq!(rows[3].monthly_kg, 3.49);
    }

    #[test]
    fn test_write_direct_readings() {
        let mut session = ReadingSession::new();
        session.submit("electricity", 100.0, ReadingSource::Ocr);
        let footprint = aggregate(&Answers::default(), &session, 4);
        let dir = tempdir().unwrap();
        write_direct_readings(dir.path(), &footprint).unwrap();

        let rows: Vec<DirectReadingRow> =
            csv::Reader::from_path(dir.path().join(DIRECT_READINGS_FILE_NAME))
                .unwrap()
                .into_deserialize()
                .try_collect()
                .unwrap();
        assert_eq!(
            rows,
            [DirectReadingRow {
                category: "electricity".into(),
                quantity: 100.0,
                unit: "kWh".into(),
                source: ReadingSource::Ocr,
                emission_kg: 82.0,
                attributed_kg: 20.5,
            }]
        );
    }

    #[test]
    fn test_write_summary() {
        let answers = Answers {
            waste: WasteAnswers {
                bag_size: Some("large".into()),
                segregation: Some("yes".into()),
                disposal: Some("recycle".into()),
            },
            ..Default::default()
        };
        let footprint = aggregate(&answers, &ReadingSession::new(), 1);
        let dir = tempdir().unwrap();
        write_summary(dir.path(), &footprint).unwrap();

        let summary: toml::Table =
            toml::from_str(&fs::read_to_string(dir.path().join(SUMMARY_FILE_NAME)).unwrap())
                .unwrap();
        // 292 × -0.2 × 0.6 / 365 × 30
        assert_eq!(summary["grand_total_kg"].as_float(), Some(-2.88));
        assert_eq!(summary["budget"]["credits"].as_float(), Some(482.88));
        assert_eq!(summary["budget"]["is_over"].as_bool(), Some(false));
        assert_eq!(
            summary["tips"].as_array().unwrap()[0].as_str(),
            Some(crate::recommend::FALLBACK_TIP)
        );
    }
}
