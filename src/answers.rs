//! Questionnaire answers for the six lifestyle categories.
//!
//! Enumerated choices are stored as the raw string keys supplied by the caller. An unset key
//! (`None`) means the question was not answered; a key which is set but unrecognised is resolved
//! to the documented default for its table when estimating.
use crate::factors::{
    BagSize, ClimateZone, CookingFuel, Device, DietType, Disposal, FoodWaste, Segregation,
    UpgradeCadence, VehicleType, WaterSource, WaterTreatment, WaterUsage, is_known_or_unset,
};
use serde::{Deserialize, Serialize};

/// Answers about personal travel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportAnswers {
    /// Whether the person uses a personal vehicle
    pub has_vehicle: bool,
    /// The [`VehicleType`] key
    pub vehicle_type: Option<String>,
    /// Distance driven per day, in km
    pub daily_km: f64,
    /// Whether the person usually shares their vehicle
    pub carpools: bool,
    /// Number of domestic flights per year
    pub domestic_flights_per_year: f64,
    /// Number of international flights per year
    pub international_flights_per_year: f64,
    /// Distance walked or cycled per day, in km (contributes no emissions)
    pub walk_cycle_km: f64,
}

/// Answers about the home.
///
/// Only cooking fuel contributes here; electricity is taken from bill readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HomeEnergyAnswers {
    /// The [`ClimateZone`] key
    pub climate_zone: Option<String>,
    /// The [`CookingFuel`] key
    pub cooking_fuel: Option<String>,
    /// Number of LPG cylinders used per year
    pub lpg_cylinders_per_year: f64,
    /// Piped natural gas used per month, in kg
    pub png_monthly_kg: f64,
}

/// Answers about food and diet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FoodAnswers {
    /// The [`DietType`] key
    pub diet_type: Option<String>,
    /// Meat meals per week (already reflected in the diet type)
    pub meat_meals_per_week: f64,
    /// Dairy servings per week (already reflected in the diet type)
    pub dairy_per_week: f64,
    /// Rice meals per week
    pub rice_meals_per_week: f64,
    /// The [`FoodWaste`] key
    pub waste_level: Option<String>,
}

/// Answers about consumer electronics.
///
/// Clothing is taken from receipt readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GoodsAnswers {
    /// [`Device`] keys for the devices owned
    pub devices_owned: Vec<String>,
    /// The [`UpgradeCadence`] key
    pub upgrade_frequency: Option<String>,
}

/// Answers about water use
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaterAnswers {
    /// The [`WaterUsage`] key
    pub usage_level: Option<String>,
    /// The [`WaterSource`] key
    pub source: Option<String>,
    /// The [`WaterTreatment`] key
    pub treatment: Option<String>,
}

/// Answers about household waste
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WasteAnswers {
    /// The [`BagSize`] key
    pub bag_size: Option<String>,
    /// The [`Segregation`] key
    pub segregation: Option<String>,
    /// The [`Disposal`] key
    pub disposal: Option<String>,
}

/// Answers for all six lifestyle categories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Answers {
    /// Personal travel
    pub transport: TransportAnswers,
    /// Cooking fuel and climate
    pub home_energy: HomeEnergyAnswers,
    /// Food and diet
    pub food: FoodAnswers,
    /// Electronics
    pub goods: GoodsAnswers,
    /// Water use
    pub water: WaterAnswers,
    /// Household waste
    pub waste: WasteAnswers,
}

/// Check a single key, recording a description of it if it is not recognised
fn check_key<T: std::str::FromStr>(field: &str, key: Option<&str>, unknown: &mut Vec<String>) {
    if !is_known_or_unset::<T>(key) {
        unknown.push(format!("{field} = \"{}\"", key.unwrap_or_default()));
    }
}

impl Answers {
    /// Describe every enumerated answer which is set to an unrecognised key.
    ///
    /// Such answers are not an error: they resolve to a default when estimating. This is used to
    /// warn the user about likely typos.
    pub fn unknown_keys(&self) -> Vec<String> {
        let mut unknown = Vec::new();
        let t = &self.transport;
        check_key::<VehicleType>("transport.vehicle_type", t.vehicle_type.as_deref(), &mut unknown);
        let h = &self.home_energy;
        check_key::<ClimateZone>("home_energy.climate_zone", h.climate_zone.as_deref(), &mut unknown);
        check_key::<CookingFuel>("home_energy.cooking_fuel", h.cooking_fuel.as_deref(), &mut unknown);
        let f = &self.food;
        check_key::<DietType>("food.diet_type", f.diet_type.as_deref(), &mut unknown);
        check_key::<FoodWaste>("food.waste_level", f.waste_level.as_deref(), &mut unknown);
        let g = &self.goods;
        for device in &g.devices_owned {
            check_key::<Device>("goods.devices_owned", Some(device), &mut unknown);
        }
        check_key::<UpgradeCadence>(
            "goods.upgrade_frequency",
            g.upgrade_frequency.as_deref(),
            &mut unknown,
        );
        let w = &self.water;
        check_key::<WaterUsage>("water.usage_level", w.usage_level.as_deref(), &mut unknown);
        check_key::<WaterSource>("water.source", w.source.as_deref(), &mut unknown);
        check_key::<WaterTreatment>("water.treatment", w.treatment.as_deref(), &mut unknown);
        let w = &self.waste;
        check_key::<BagSize>("waste.bag_size", w.bag_size.as_deref(), &mut unknown);
        check_key::<Segregation>("waste.segregation", w.segregation.as_deref(), &mut unknown);
        check_key::<Disposal>("waste.disposal", w.disposal.as_deref(), &mut unknown);

        unknown
    }

    /// Describe every numeric answer which is negative.
    ///
    /// Negative values are treated as zero when estimating.
    pub fn negative_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("transport.daily_km", self.transport.daily_km),
            (
                "transport.domestic_flights_per_year",
                self.transport.domestic_flights_per_year,
            ),
            (
                "transport.international_flights_per_year",
                self.transport.international_flights_per_year,
            ),
            ("transport.walk_cycle_km", self.transport.walk_cycle_km),
            (
                "home_energy.lpg_cylinders_per_year",
                self.home_energy.lpg_cylinders_per_year,
            ),
            ("home_energy.png_monthly_kg", self.home_energy.png_monthly_kg),
            ("food.meat_meals_per_week", self.food.meat_meals_per_week),
            ("food.dairy_per_week", self.food.dairy_per_week),
            ("food.rice_meals_per_week", self.food.rice_meals_per_week),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| *value < 0.0)
            .map(|(name, _)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialise_partial() {
        let answers: Answers = toml::from_str(
            r#"
            [transport]
            has_vehicle = true
            vehicle_type = "petrol_small"
            daily_km = 20

            [water]
            usage_level = "high"
            "#,
        )
        .unwrap();

        assert!(answers.transport.has_vehicle);
        assert_eq!(answers.transport.daily_km, 20.0);
        assert_eq!(answers.water.usage_level.as_deref(), Some("high"));
        assert_eq!(answers.food, FoodAnswers::default());
    }

    #[test]
    fn test_deserialise_unknown_field() {
        assert!(toml::from_str::<Answers>("[transport]\nhas_car = true\n").is_err());
    }

    #[test]
    fn test_unknown_keys() {
        let mut answers = Answers::default();
        assert!(answers.unknown_keys().is_empty());

        answers.food.diet_type = Some("carnivore".into());
        answers.goods.devices_owned = vec!["laptop".into(), "toaster".into()];
        assert_eq!(
            answers.unknown_keys(),
            [
                "food.diet_type = \"carnivore\"",
                "goods.devices_owned = \"toaster\""
            ]
        );
    }

    #[test]
    fn test_negative_fields() {
        let mut answers = Answers::default();
        answers.transport.daily_km = -3.0;
        answers.food.rice_meals_per_week = -1.0;
        assert_eq!(
            answers.negative_fields(),
            ["transport.daily_km", "food.rice_meals_per_week"]
        );
    }
}
