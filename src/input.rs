//! Common routines for reading a calculation session from disk.
//!
//! A session directory contains a `session.toml` file with the household size and the answers
//! to the questionnaire, plus an optional `readings.csv` file with quantities read from bills
//! and receipts. The session file may also hold recent temperatures for the household's
//! location, in which case they are used to detect the climate zone.
use crate::answers::{
    Answers, FoodAnswers, GoodsAnswers, HomeEnergyAnswers, TransportAnswers, WasteAnswers,
    WaterAnswers,
};
use crate::climate::{apply_override, classify};
use crate::reading::{ReadingSession, ReadingSource};
use anyhow::{Context, Result, ensure};
use log::warn;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

const SESSION_FILE_NAME: &str = "session.toml";
const READINGS_FILE_NAME: &str = "readings.csv";

/// Read a TOML file at the specified path.
///
/// # Arguments
///
/// * `file_path` - The path to the TOML file
///
/// # Returns
///
/// * The deserialised TOML data or an error if the file could not be read or parsed.
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let toml_str = fs::read_to_string(file_path)
        .with_context(|| format!("Could not read file: {}", file_path.display()))?;
    let toml_data = toml::from_str(&toml_str)
        .with_context(|| format!("Could not parse TOML file: {}", file_path.display()))?;

    Ok(toml_data)
}

/// Read a series of type `T`s from a CSV file.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
pub fn read_csv<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(file_path)
        .with_context(|| format!("Could not read file: {}", file_path.display()))?;

    reader
        .deserialize()
        .enumerate()
        .map(|(idx, record)| {
            record.with_context(|| {
                format!("Invalid data on line {} of {}", idx + 2, file_path.display())
            })
        })
        .collect()
}

fn default_household_size() -> u32 {
    1
}

/// Recent daily temperatures at the household's location, in °C
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct Temperatures {
    daily_max: Vec<f64>,
    daily_min: Vec<f64>,
}

/// The contents of a `session.toml` file
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct SessionFile {
    #[serde(default = "default_household_size")]
    household_size: u32,
    temperatures: Option<Temperatures>,
    #[serde(default)]
    transport: TransportAnswers,
    #[serde(default)]
    home_energy: HomeEnergyAnswers,
    #[serde(default)]
    food: FoodAnswers,
    #[serde(default)]
    goods: GoodsAnswers,
    #[serde(default)]
    water: WaterAnswers,
    #[serde(default)]
    waste: WasteAnswers,
}

impl SessionFile {
    fn into_parts(self) -> (u32, Answers) {
        let mut answers = Answers {
            transport: self.transport,
            home_energy: self.home_energy,
            food: self.food,
            goods: self.goods,
            water: self.water,
            waste: self.waste,
        };

        if let Some(temperatures) = self.temperatures {
            let detected = classify(&temperatures.daily_max, &temperatures.daily_min)
                .context("Not enough temperature readings to classify the climate");
            apply_override(&mut answers.home_energy, detected);
        }

        (self.household_size, answers)
    }
}

/// A row of `readings.csv`
#[derive(Debug, Deserialize, PartialEq)]
struct ReadingRow {
    category: String,
    quantity: f64,
    #[serde(default)]
    source: ReadingSource,
}

/// Everything needed to calculate a footprint
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Questionnaire answers
    pub answers: Answers,
    /// Readings from bills and receipts
    pub readings: ReadingSession,
    /// The number of people living in the household
    pub household_size: u32,
}

/// Read the answers and household size from the `session.toml` file in `session_dir`
fn read_session_file(session_dir: &Path) -> Result<(u32, Answers)> {
    let file_path = session_dir.join(SESSION_FILE_NAME);
    let session_file: SessionFile = read_toml(&file_path)?;
    ensure!(
        session_file.household_size >= 1,
        "household_size must be at least 1"
    );

    let (household_size, answers) = session_file.into_parts();
    for key in answers.unknown_keys() {
        warn!("Unrecognised answer {key}: the default will be used");
    }
    for field in answers.negative_fields() {
        warn!("Negative value for {field} will be treated as zero");
    }

    Ok((household_size, answers))
}

/// Read direct readings from the `readings.csv` file in `session_dir`, if present.
///
/// Rows are submitted in order, so a later row for a category replaces an earlier one.
fn read_readings_file(session_dir: &Path) -> Result<ReadingSession> {
    let file_path = session_dir.join(READINGS_FILE_NAME);
    let mut session = ReadingSession::new();
    if !file_path.is_file() {
        return Ok(session);
    }

    for row in read_csv::<ReadingRow>(&file_path)? {
        ensure!(
            row.quantity.is_finite() && row.quantity >= 0.0,
            "Invalid quantity for {} in {}: {}",
            row.category,
            file_path.display(),
            row.quantity
        );
        session.submit(&row.category, row.quantity, row.source);
    }

    Ok(session)
}

/// Read a calculation session from the specified directory.
///
/// # Arguments
///
/// * `session_dir` - Folder containing the session files
///
/// # Returns
///
/// The session or an error if the files are missing or invalid.
pub fn load_session(session_dir: &Path) -> Result<Session> {
    let (household_size, answers) = read_session_file(session_dir)?;
    let readings = read_readings_file(session_dir)?;

    Ok(Session {
        answers,
        readings,
        household_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::DirectCategory;
    use crate::fixture::assert_error;
    use rstest::rstest;
    use tempfile::{TempDir, tempdir};

    fn session_dir(session_toml: &str, readings_csv: Option<&str>) -> TempDir {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SESSION_FILE_NAME), session_toml).unwrap();
        if let Some(readings_csv) = readings_csv {
            fs::write(dir.path().join(READINGS_FILE_NAME), readings_csv).unwrap();
        }

        dir
    }

    #[test]
    fn test_load_session() {
        let dir = session_dir(
            "household_size = 3\n\n[food]\ndiet_type = \"vegetarian\"\n",
            Some("category,quantity,source\nelectricity,120,ocr\npetrol,10,manual\n"),
        );

        let session = load_session(dir.path()).unwrap();
        assert_eq!(session.household_size, 3);
        assert_eq!(session.answers.food.diet_type.as_deref(), Some("vegetarian"));
        assert_eq!(session.readings.len(), 2);
        assert_eq!(
            session
                .readings
                .get(DirectCategory::Electricity)
                .unwrap()
                .source,
            ReadingSource::Ocr
        );
    }

    #[test]
    fn test_load_session_defaults() {
        let dir = session_dir("", None);

        let session = load_session(dir.path()).unwrap();
        assert_eq!(session.household_size, 1);
        assert_eq!(session.answers, Answers::default());
        assert!(session.readings.is_empty());
    }

    #[rstest]
    #[case("[temperatures]\ndaily_max = [18.0, 17.0]\ndaily_min = [8.0, 9.0]\n", "cold")]
    #[case("[temperatures]\ndaily_max = []\ndaily_min = []\n", "moderate")] // Detection failed
    fn test_climate_detection(#[case] temperatures: &str, #[case] expected: &str) {
        let dir = session_dir(
            &format!("[home_energy]\nclimate_zone = \"moderate\"\n\n{temperatures}"),
            None,
        );

        let session = load_session(dir.path()).unwrap();
        assert_eq!(
            session.answers.home_energy.climate_zone.as_deref(),
            Some(expected)
        );
    }

    #[test]
    fn test_readings_later_rows_replace_earlier() {
        let dir = session_dir(
            "",
            Some("category,quantity\nelectricity,100\nelectricity,50\nfirewood,3\n"),
        );

        let session = load_session(dir.path()).unwrap();
        assert_eq!(session.readings.len(), 1);
        let reading = session.readings.get(DirectCategory::Electricity).unwrap();
        assert_eq!(reading.quantity, 50.0);
        assert_eq!(reading.source, ReadingSource::Manual);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let dir = session_dir("", Some("category,quantity\npetrol,-5\n"));
        let file_path = dir.path().join(READINGS_FILE_NAME);

        assert_error!(
            load_session(dir.path()),
            format!("Invalid quantity for petrol in {}: -5", file_path.display())
        );
    }

    #[test]
    fn test_household_size_zero_rejected() {
        let dir = session_dir("household_size = 0\n", None);
        assert_error!(load_session(dir.path()), "household_size must be at least 1");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = session_dir("[transport]\nspeed = 3\n", None);
        let file_path = dir.path().join(SESSION_FILE_NAME);

        assert_error!(
            load_session(dir.path()),
            format!("Could not parse TOML file: {}", file_path.display())
        );
    }

    #[test]
    fn test_missing_session_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(SESSION_FILE_NAME);

        assert_error!(
            load_session(dir.path()),
            format!("Could not read file: {}", file_path.display())
        );
    }
}
