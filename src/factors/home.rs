#![allow(missing_docs)]
//! Factors for household cooking fuel and climate.
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Emissions from burning one domestic LPG cylinder (14.2 kg × 2.98 kg CO₂/kg), in kg CO₂e
pub const LPG_KG_PER_CYLINDER: f64 = 42.3;

/// Emissions per kilogram of piped natural gas, in kg CO₂e/kg
pub const PNG_KG_PER_KG: f64 = 2.75;

/// The fuel used for cooking at home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CookingFuel {
    /// LPG cylinders
    Lpg,
    /// Piped natural gas
    Png,
    /// No gas cooking
    None,
}

/// The climate zone in which a household is located
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum ClimateZone {
    HotDry,
    WarmHumid,
    #[default]
    Moderate,
    Cold,
}

impl ClimateZone {
    /// Relative heating/cooling burden compared with a moderate baseline
    pub fn factor(self) -> f64 {
        match self {
            Self::HotDry => 1.3,
            Self::WarmHumid => 1.2,
            Self::Moderate => 0.9,
            Self::Cold => 1.1,
        }
    }

    /// Human-readable description
    pub fn label(self) -> &'static str {
        match self {
            Self::HotDry => "Hot & Dry (Delhi, Rajasthan)",
            Self::WarmHumid => "Warm & Humid (Mumbai, Chennai)",
            Self::Moderate => "Moderate (Bangalore, Pune)",
            Self::Cold => "Cold (Hill Stations)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_moderate_zone_has_lowest_burden() {
        let moderate = ClimateZone::Moderate.factor();
        assert!(ClimateZone::iter().all(|zone| zone.factor() >= moderate));
        assert_eq!(ClimateZone::HotDry.factor(), 1.3);
    }
}
