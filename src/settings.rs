//! Code for loading program settings.
use crate::get_config_dir;
use crate::input::read_toml;
use crate::log::DEFAULT_LOG_LEVEL;
use anyhow::Result;
use documented::DocumentedFields;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "settings.toml";

const DEFAULT_SETTINGS_FILE_HEADER: &str = "# This file contains the program settings for footprint
# Uncomment a line to change a setting from its default value.
";

/// Commented-out line documenting the ledger, which has no default to serialise
const EXAMPLE_LEDGER_PATH_LINE: &str = "ledger_path = \"footprint_ledger.csv\"";

/// Default log level for program
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Get the path to where the settings file will be read from
pub fn get_settings_file_path() -> PathBuf {
    let mut path = get_config_dir();
    path.push(SETTINGS_FILE_NAME);

    path
}

/// Program settings from config file
#[derive(Debug, DocumentedFields, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// The default program log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whether to overwrite output files by default
    #[serde(default)]
    pub overwrite: bool,
    /// Path to a CSV ledger to which the results of each run are appended.
    /// Nothing is recorded if this is not set.
    #[serde(default)]
    pub ledger_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            overwrite: false,
            ledger_path: None,
        }
    }
}

impl Settings {
    /// Read the contents of a settings file from the model directory.
    ///
    /// If the file is not present, default values for settings will be used
    ///
    /// # Returns
    ///
    /// The program settings as a `Settings` struct or an error if the file is invalid
    pub fn load() -> Result<Settings> {
        Self::load_from_path(&get_settings_file_path())
    }

    /// Read settings from the specified path, using defaults if the file does not exist
    fn load_from_path(file_path: &Path) -> Result<Settings> {
        if !file_path.is_file() {
            return Ok(Settings::default());
        }

        read_toml(file_path)
    }

    /// The contents of the default settings file
    pub fn default_file_contents() -> String {
        // Settings object with default values set by serde
        let settings: Settings =
            toml::from_str("").expect("Cannot create settings from empty TOML file");

        // Convert to TOML
        let settings_raw = toml::to_string(&settings).expect("Could not convert settings to TOML");

        // Iterate through the generated TOML, commenting out lines and adding docs
        let mut out = DEFAULT_SETTINGS_FILE_HEADER.to_string();
        for line in settings_raw.split('\n') {
            if let Some(last) = line.find('=') {
                write_commented_field(&mut out, line[..last].trim(), line);
            }
        }

        // Unset optional fields are skipped when serialising
        if settings.ledger_path.is_none() {
            write_commented_field(&mut out, "ledger_path", EXAMPLE_LEDGER_PATH_LINE);
        }

        out
    }
}

/// Append a commented-out setting, preceded by its doc comment
fn write_commented_field(out: &mut String, field: &str, setting: &str) {
    // Use doc comment to document parameter. All fields should have doc comments.
    let docs = Settings::get_field_docs(field).expect("Missing doc comment for field");
    for line in docs.split('\n') {
        write!(out, "\n# # {}\n", line.trim()).unwrap();
    }

    writeln!(out, "# {}", setting.trim()).unwrap();
}
