#![allow(missing_docs)]
//! Factors for household water use.
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Emissions of supplying (0.34) and treating the waste water (0.57) of one cubic metre, in kg
/// CO₂e/m³
pub const KG_PER_M3: f64 = 0.91;

/// Litres in a cubic metre
pub const LITRES_PER_M3: f64 = 1000.0;

/// How much water a person uses.
///
/// Unrecognised keys fall back to average use.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum WaterUsage {
    Conservative,
    #[default]
    Average,
    High,
}

impl WaterUsage {
    /// Base water use, in litres per day
    pub fn litres_per_day(self) -> f64 {
        match self {
            Self::Conservative => 95.0,
            Self::Average => 150.0,
            Self::High => 250.0,
        }
    }
}

/// Where household water comes from
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum WaterSource {
    #[default]
    Municipal,
    Borewell,
    Tanker,
}

impl WaterSource {
    /// Sourcing burden relative to a municipal supply baseline of 1.0
    pub fn factor(self) -> f64 {
        match self {
            Self::Municipal => 1.0,
            Self::Borewell => 1.2,
            Self::Tanker => 1.5,
        }
    }
}

/// How drinking water is treated at home
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum WaterTreatment {
    #[default]
    None,
    Basic,
    RoUv,
}

impl WaterTreatment {
    /// Treatment burden relative to an untreated baseline of 1.0
    pub fn factor(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Basic => 1.1,
            Self::RoUv => 1.3,
        }
    }
}
