#![allow(missing_docs)]
//! Factors for personal vehicles and flights.
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The type of a personal vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum VehicleType {
    PetrolSmall,
    PetrolMedium,
    PetrolLarge,
    DieselSmall,
    DieselMedium,
    DieselLarge,
    CngSmall,
    CngMedium,
    TwoWheelerSmall,
    TwoWheelerLarge,
    EvTwoWheeler,
    EvCar,
}

impl VehicleType {
    /// Emissions per kilometre driven, in kg CO₂e/km
    pub fn factor(self) -> f64 {
        match self {
            Self::PetrolSmall => 0.147,
            Self::PetrolMedium => 0.181,
            Self::PetrolLarge => 0.239,
            Self::DieselSmall => 0.142,
            Self::DieselMedium => 0.168,
            Self::DieselLarge => 0.201,
            Self::CngSmall => 0.109,
            Self::CngMedium | Self::EvCar => 0.132,
            Self::TwoWheelerSmall => 0.065,
            Self::TwoWheelerLarge | Self::EvTwoWheeler => 0.089,
        }
    }
}

/// A class of flight, with an assumed average distance per trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum FlightClass {
    Domestic,
    International,
}

/// Multiplier applied to flight CO₂ to account for non-CO₂ warming at altitude
pub const RADIATIVE_FORCING_MULTIPLIER: f64 = 1.9;

impl FlightClass {
    /// Emissions per passenger kilometre, before radiative forcing, in kg CO₂e/km
    pub fn per_km_factor(self) -> f64 {
        match self {
            Self::Domestic => 0.177,
            Self::International => 0.156,
        }
    }

    /// Multiplier for high-altitude warming effects (always > 1)
    pub fn radiative_forcing(self) -> f64 {
        RADIATIVE_FORCING_MULTIPLIER
    }

    /// Average one-way distance of a flight of this class, in km
    pub fn average_distance_km(self) -> f64 {
        match self {
            Self::Domestic => 1300.0,
            Self::International => 5000.0,
        }
    }

    /// Emissions attributed to a single flight of this class, in kg CO₂e
    pub fn per_flight(self) -> f64 {
        self.average_distance_km() * self.per_km_factor() * self.radiative_forcing()
    }
}
