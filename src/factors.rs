//! Static reference data used to turn lifestyle answers and bill readings into emissions.
//!
//! Each categorical choice a user can make (vehicle type, diet, water source, etc.) is modelled as
//! an enum whose string keys match those used in session files. The numeric factors live in
//! `match` expressions on these enums, so the tables are immutable and exist for the whole life of
//! the process.
//!
//! Lookups never fail: [`lookup`] returns `None` for a missing or unrecognised key and the caller
//! decides which default applies.
use std::str::FromStr;

pub mod direct;
pub mod food;
pub mod goods;
pub mod home;
pub mod transport;
pub mod waste;
pub mod water;

pub use direct::{DirectCategory, EMISSION_FACTORS, EmissionFactor};
pub use food::{DietType, FoodWaste};
pub use goods::{Device, UpgradeCadence};
pub use home::{ClimateZone, CookingFuel};
pub use transport::{FlightClass, VehicleType};
pub use waste::{BagSize, Disposal, Segregation};
pub use water::{WaterSource, WaterTreatment, WaterUsage};

/// The monthly emissions budget for one person, in kg CO₂e.
///
/// One credit is awarded for every kilogram emitted below this figure.
pub const MONTHLY_BUDGET_KG: f64 = 480.0;

/// Look up the table entry for `key`.
///
/// # Returns
///
/// The matching entry, or `None` if `key` is unset or not a valid key for the table.
pub fn lookup<T: FromStr>(key: Option<&str>) -> Option<T> {
    key.and_then(|key| key.trim().parse().ok())
}

/// Check whether `key` is either unset or a valid key for the table
pub fn is_known_or_unset<T: FromStr>(key: Option<&str>) -> bool {
    key.is_none() || lookup::<T>(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("petrol_small"), Some(VehicleType::PetrolSmall))]
    #[case(Some(" ev_car "), Some(VehicleType::EvCar))]
    #[case(Some("hovercraft"), None)]
    #[case(Some(""), None)]
    #[case(None, None)]
    fn test_lookup(#[case] key: Option<&str>, #[case] expected: Option<VehicleType>) {
        assert_eq!(lookup::<VehicleType>(key), expected);
    }

    #[test]
    fn test_is_known_or_unset() {
        assert!(is_known_or_unset::<DietType>(None));
        assert!(is_known_or_unset::<DietType>(Some("vegetarian")));
        assert!(!is_known_or_unset::<DietType>(Some("carnivore")));
    }
}
