#![allow(missing_docs)]
//! Factors for consumer electronics.
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A type of electronic device a person may own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Device {
    Smartphone,
    Laptop,
    LedTv,
    Refrigerator,
    Ac,
}

impl Device {
    /// Annualised embodied emissions of the device, in kg CO₂e/year
    pub fn annual_kg(self) -> f64 {
        match self {
            Self::Smartphone => 28.3,
            Self::Laptop => 102.5,
            Self::LedTv => 40.0,
            Self::Refrigerator => 56.3,
            Self::Ac => 89.0,
        }
    }
}

/// How often devices are replaced.
///
/// Unrecognised keys fall back to replacing devices only when broken.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum UpgradeCadence {
    #[default]
    OnlyBroken,
    FewYears,
    Frequent,
}

impl UpgradeCadence {
    /// Multiplier applied to the annualised device emissions
    pub fn multiplier(self) -> f64 {
        match self {
            Self::OnlyBroken => 1.0,
            Self::FewYears => 1.5,
            Self::Frequent => 2.5,
        }
    }
}
