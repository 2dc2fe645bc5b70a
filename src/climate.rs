//! Climate zone classification.
//!
//! The zone is normally detected by an external weather service from the user's location. This
//! module holds the classification rule applied to the temperatures that service returns, and
//! the best-effort override of the questionnaire answer. Fetching the temperatures is left to the
//! caller.
use crate::answers::HomeEnergyAnswers;
use crate::factors::ClimateZone;
use anyhow::Result;
use log::{info, warn};

/// Mean temperature above which a location counts as hot, in °C
const HOT_MEAN_TEMPERATURE: f64 = 30.0;

/// Mean temperature above which a location counts as warm, in °C
const WARM_MEAN_TEMPERATURE: f64 = 25.0;

/// Mean temperature below which a location counts as cold, in °C
const COLD_MEAN_TEMPERATURE: f64 = 15.0;

/// Diurnal temperature range separating dry (wide) from humid (narrow) climates, in °C
const DRY_DIURNAL_RANGE: f64 = 12.0;

/// Arithmetic mean of a series, or `None` if it is empty
#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Classify a location's climate from recent daily maximum and minimum temperatures.
///
/// A wide gap between daily maximum and minimum is used as a proxy for dry air.
///
/// # Returns
///
/// The climate zone, or `None` if either series is empty.
pub fn classify(daily_max: &[f64], daily_min: &[f64]) -> Option<ClimateZone> {
    let mean_max = mean(daily_max)?;
    let mean_min = mean(daily_min)?;
    let mean_temperature = (mean_max + mean_min) / 2.0;
    let diurnal_range = mean_max - mean_min;

    let zone = if mean_temperature > HOT_MEAN_TEMPERATURE && diurnal_range > DRY_DIURNAL_RANGE {
        ClimateZone::HotDry
    } else if mean_temperature > WARM_MEAN_TEMPERATURE && diurnal_range <= DRY_DIURNAL_RANGE {
        ClimateZone::WarmHumid
    } else if mean_temperature < COLD_MEAN_TEMPERATURE {
        ClimateZone::Cold
    } else {
        ClimateZone::Moderate
    };

    Some(zone)
}

/// Apply the result of a climate detection to the answers.
///
/// Detection is best effort: if it failed, the existing answer is kept and a warning is logged.
///
/// # Returns
///
/// Whether the answer was changed.
pub fn apply_override(answers: &mut HomeEnergyAnswers, detected: Result<ClimateZone>) -> bool {
    match detected {
        Ok(zone) => {
            let key: &'static str = zone.into();
            info!(
                "Detected climate zone: {} (heating/cooling factor {})",
                zone.label(),
                zone.factor()
            );
            let changed = answers.climate_zone.as_deref() != Some(key);
            answers.climate_zone = Some(key.to_string());
            changed
        }
        Err(err) => {
            warn!(
                "Climate detection failed, keeping {}: {err:#}",
                answers.climate_zone.as_deref().unwrap_or("the default zone")
            );
            false
        }
    }
}
