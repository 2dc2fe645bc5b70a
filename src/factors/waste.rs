#![allow(missing_docs)]
//! Factors for household waste.
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The size of the bag of waste a household throws away each day.
///
/// Unrecognised keys fall back to a medium bag.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum BagSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BagSize {
    /// Mass of waste thrown away per year, in kg/year
    pub fn kg_per_year(self) -> f64 {
        match self {
            Self::Small => 109.5,
            Self::Medium => 182.5,
            Self::Large => 292.0,
        }
    }
}

/// How thoroughly waste is segregated at source.
///
/// Unrecognised keys are treated as no segregation.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display,
)]
pub enum Segregation {
    #[strum(serialize = "yes")]
    Full,
    #[strum(serialize = "partial")]
    Partial,
    #[default]
    #[strum(serialize = "no")]
    None,
}

impl Segregation {
    /// Share of the waste's emissions which remains after segregation
    pub fn reduction(self) -> f64 {
        match self {
            Self::Full => 0.6,
            Self::Partial => 0.8,
            Self::None => 1.0,
        }
    }
}

/// The main way waste is disposed of.
///
/// Unrecognised keys fall back to landfill.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Disposal {
    #[default]
    Landfill,
    Recycle,
    Compost,
    Mix,
}

impl Disposal {
    /// Emissions per kg of waste, in kg CO₂e/kg.
    ///
    /// Recycling has a negative factor: it is a net credit.
    pub fn factor(self) -> f64 {
        match self {
            Self::Landfill => 0.94,
            Self::Recycle => -0.2,
            Self::Compost => 0.15,
            Self::Mix => 0.5,
        }
    }
}
