//! Linear emission factors for quantities read directly from bills and receipts.
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A category of direct reading, i.e. something measured on a bill or receipt
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DirectCategory {
    /// Grid electricity, in kWh
    Electricity,
    /// Petrol, in litres
    Petrol,
    /// Diesel, in litres
    Diesel,
    /// Piped natural gas, in kg
    NaturalGas,
    /// Bus travel, in km
    Bus,
    /// Train or metro travel, in km
    Train,
    /// Clothing purchased, in items
    Clothing,
}

impl DirectCategory {
    /// The emission factor record for this category
    pub fn emission_factor(self) -> &'static EmissionFactor {
        // The table is declared in the same order as the enum
        &EMISSION_FACTORS[self as usize]
    }

    /// Whether a reading of this category covers a whole household and should be split between
    /// its occupants
    pub fn is_household_shared(self) -> bool {
        matches!(self, Self::Electricity)
    }
}

/// A linear factor converting a measured quantity into kg CO₂e
#[derive(Debug, PartialEq)]
pub struct EmissionFactor {
    /// The category key (e.g. "electricity")
    pub key: &'static str,
    /// Human-readable description
    pub label: &'static str,
    /// kg CO₂e per unit
    pub factor: f64,
    /// The unit in which quantities are measured (e.g. "kWh")
    pub unit: &'static str,
}

/// Emission factors for all direct-reading categories, in the order of [`DirectCategory`]
pub static EMISSION_FACTORS: [EmissionFactor; 7] = [
    EmissionFactor {
        key: "electricity",
        label: "Electricity",
        factor: 0.82,
        unit: "kWh",
    },
    EmissionFactor {
        key: "petrol",
        label: "Petrol / Gasoline",
        factor: 2.31,
        unit: "liters",
    },
    EmissionFactor {
        key: "diesel",
        label: "Diesel",
        factor: 2.68,
        unit: "liters",
    },
    EmissionFactor {
        key: "natural_gas",
        label: "Natural Gas (PNG)",
        factor: 2.75,
        unit: "kg",
    },
    EmissionFactor {
        key: "bus",
        label: "Bus Travel",
        factor: 0.089,
        unit: "km",
    },
    EmissionFactor {
        key: "train",
        label: "Train / Metro",
        factor: 0.033,
        unit: "km",
    },
    EmissionFactor {
        key: "clothing",
        label: "Clothing Purchased",
        factor: 12.5,
        unit: "items",
    },
];

impl EmissionFactor {
    /// Find the emission factor for the given category key
    pub fn lookup(key: &str) -> Option<&'static EmissionFactor> {
        key.trim()
            .parse::<DirectCategory>()
            .ok()
            .map(DirectCategory::emission_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_matches_enum_order() {
        for category in DirectCategory::iter() {
            let key: &str = category.into();
            assert_eq!(category.emission_factor().key, key);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(EmissionFactor::lookup("petrol").unwrap().factor, 2.31);
        assert_eq!(EmissionFactor::lookup("electricity").unwrap().unit, "kWh");
        assert!(EmissionFactor::lookup("firewood").is_none());
    }

    #[test]
    fn test_only_electricity_is_shared() {
        let shared: Vec<_> = DirectCategory::iter()
            .filter(|c| c.is_household_shared())
            .collect();
        assert_eq!(shared, [DirectCategory::Electricity]);
    }
}
