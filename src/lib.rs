//! A household carbon footprint calculator.
//!
//! Questionnaire answers are turned into daily emission estimates for six lifestyle categories,
//! combined with readings taken from bills and receipts, and compared against a monthly budget.
#![warn(missing_docs)]
use std::path::PathBuf;

pub mod aggregate;
pub mod answers;
pub mod budget;
pub mod cli;
pub mod climate;
pub mod estimate;
pub mod factors;
pub mod input;
pub mod ledger;
pub mod log;
pub mod output;
pub mod reading;
pub mod recommend;
pub mod settings;
pub mod units;

#[cfg(test)]
mod fixture;

/// Get the config folder for the program.
///
/// Falls back to the current directory if the platform has no config folder.
pub fn get_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_default();
    path.push("footprint");
    path
}
