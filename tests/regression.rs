//! Common code for running regression tests.
use float_cmp::approx_eq;
use footprint::cli::RunOpts;
use footprint::cli::example::handle_example_run_command;
use footprint::settings::Settings;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::fs::read_dir;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const FLOAT_CMP_TOLERANCE: f64 = 1e-10;

/// A row of an output file which can be compared against expected data
trait OutputRow: DeserializeOwned + Debug {
    fn matches(&self, expected: &Self) -> bool;
}

fn kg_eq(a: f64, b: f64) -> bool {
    approx_eq!(f64, a, b, epsilon = FLOAT_CMP_TOLERANCE)
}

#[derive(Debug, Deserialize)]
struct BreakdownRow {
    category: String,
    label: String,
    daily_kg: f64,
    monthly_kg: f64,
}

impl OutputRow for BreakdownRow {
    fn matches(&self, expected: &Self) -> bool {
        self.category == expected.category
            && self.label == expected.label
            && kg_eq(self.daily_kg, expected.daily_kg)
            && kg_eq(self.monthly_kg, expected.monthly_kg)
    }
}

#[derive(Debug, Deserialize)]
struct DirectReadingRow {
    category: String,
    quantity: f64,
    unit: String,
    source: String,
    emission_kg: f64,
    attributed_kg: f64,
}

impl OutputRow for DirectReadingRow {
    fn matches(&self, expected: &Self) -> bool {
        self.category == expected.category
            && self.unit == expected.unit
            && self.source == expected.source
            && kg_eq(self.quantity, expected.quantity)
            && kg_eq(self.emission_kg, expected.emission_kg)
            && kg_eq(self.attributed_kg, expected.attributed_kg)
    }
}

/// Run a regression test for an example session
#[allow(dead_code)] // Unused when this file is compiled as its own test crate
pub fn run_regression_test(example_name: &str) {
    unsafe { std::env::set_var("FOOTPRINT_LOG_LEVEL", "off") };

    let tempdir = tempdir().unwrap();
    let opts = RunOpts {
        output_dir: Some(tempdir.path().to_path_buf()),
        overwrite: false,
    };
    let output_dir = tempdir.path();
    handle_example_run_command(example_name, &opts, Some(Settings::default())).unwrap();

    let test_data_dir = PathBuf::from(format!("tests/data/{example_name}"));

    // Check that output files haven't been added/removed
    assert_eq!(
        get_csv_file_names(output_dir),
        get_csv_file_names(&test_data_dir)
    );

    let mut errors = Vec::new();
    compare_rows::<BreakdownRow>(output_dir, &test_data_dir, "breakdown.csv", &mut errors);
    compare_rows::<DirectReadingRow>(
        output_dir,
        &test_data_dir,
        "direct_readings.csv",
        &mut errors,
    );

    assert!(
        errors.is_empty(),
        "The following errors occurred:\n  * {}",
        errors.join("\n  * ")
    );
}

fn compare_rows<T: OutputRow>(
    output_dir: &Path,
    test_data_dir: &Path,
    file_name: &str,
    errors: &mut Vec<String>,
) {
    let actual: Vec<T> = read_rows(&output_dir.join(file_name));
    let expected: Vec<T> = read_rows(&test_data_dir.join(file_name));

    if actual.len() != expected.len() {
        errors.push(format!(
            "{file_name}: Different number of rows: {} vs {}",
            actual.len(),
            expected.len()
        ));
    }

    for (num, (row1, row2)) in actual.iter().zip(&expected).enumerate() {
        if !row1.matches(row2) {
            errors.push(format!(
                "{file_name}: row {num}:\n    + {row1:?}\n    - {row2:?}"
            ));
        }
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    csv::Reader::from_path(path)
        .unwrap()
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap()
}

/// Get the names of CSV files expected to appear in the given folder
fn get_csv_file_names(dir_path: &Path) -> Vec<String> {
    let mut file_names: Vec<_> = read_dir(dir_path)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|file_name| file_name.ends_with(".csv"))
        .collect();

    file_names.sort();
    file_names
}
