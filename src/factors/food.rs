#![allow(missing_docs)]
//! Factors for diet and food waste.
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Number of rice meals per week already included in the diet baselines
pub const BASELINE_RICE_MEALS_PER_WEEK: f64 = 5.0;

/// Emissions from one extra rice meal (2.3 kg CO₂e/kg × 0.15 kg), in kg CO₂e
pub const KG_PER_EXTRA_RICE_MEAL: f64 = 2.3 * 0.15;

/// Number of weeks in a year
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// The broad type of a person's diet.
///
/// Unrecognised diet keys fall back to the vegetarian baseline.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum DietType {
    #[default]
    Vegetarian,
    NonvegModerate,
    NonvegHeavy,
}

impl DietType {
    /// Annual emissions of the diet, in kg CO₂e/year
    pub fn annual_kg(self) -> f64 {
        match self {
            Self::Vegetarian => 610.0,
            Self::NonvegModerate => 689.0,
            Self::NonvegHeavy => 796.0,
        }
    }
}

/// Self-reported food waste habit.
///
/// Unrecognised keys fall back to average waste.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum FoodWaste {
    Minimal,
    #[default]
    Average,
    Significant,
    High,
}

impl FoodWaste {
    /// Multiplier applied to the diet's emissions, in the range [0.93, 1.30]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Minimal => 0.93,
            Self::Average => 1.0,
            Self::Significant => 1.15,
            Self::High => 1.30,
        }
    }
}
