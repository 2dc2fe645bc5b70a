//! Estimators converting questionnaire answers into daily emissions, one per lifestyle category.
//!
//! Every estimator follows the same shape: resolve the chosen table entries (falling back to a
//! documented default), apply a deterministic formula to get an annual figure and divide by 365.
//! An estimator given default answers returns exactly zero and none of them can fail.
use crate::answers::{
    Answers, FoodAnswers, GoodsAnswers, HomeEnergyAnswers, TransportAnswers, WasteAnswers,
    WaterAnswers,
};
use crate::factors::food::{BASELINE_RICE_MEALS_PER_WEEK, KG_PER_EXTRA_RICE_MEAL, WEEKS_PER_YEAR};
use crate::factors::home::{LPG_KG_PER_CYLINDER, PNG_KG_PER_KG};
use crate::factors::water::{KG_PER_M3, LITRES_PER_M3};
use crate::factors::{
    BagSize, CookingFuel, Device, DietType, Disposal, FlightClass, FoodWaste, Segregation,
    UpgradeCadence, VehicleType, WaterSource, WaterTreatment, WaterUsage, lookup,
};
use crate::units::{DAYS_PER_YEAR, Dimensionless, KgCO2ePerDay, KgCO2ePerYear};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Share of a vehicle's emissions attributed to someone who carpools
const CARPOOL_SHARE: f64 = 0.5;

/// One of the six lifestyle categories, in their fixed reporting order
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
pub enum Category {
    /// Personal vehicles and flights
    Transport,
    /// Cooking fuel
    HomeEnergy,
    /// Food and diet
    Food,
    /// Consumer electronics
    #[strum(serialize = "shopping")]
    #[serde(rename = "shopping")]
    Goods,
    /// Water use
    Water,
    /// Household waste
    Waste,
}

impl Category {
    /// Human-readable name of the category
    pub fn label(self) -> &'static str {
        match self {
            Self::Transport => "Transportation",
            Self::HomeEnergy => "Cooking Fuel",
            Self::Food => "Food & Diet",
            Self::Goods => "Electronics",
            Self::Water => "Water",
            Self::Waste => "Waste",
        }
    }
}

/// Clamp a numeric answer so that negative values count as zero
fn non_negative(value: f64) -> f64 {
    value.max(0.0)
}

/// Estimate the daily emissions for one category.
///
/// # Arguments
///
/// * `category` - The category to estimate
/// * `answers` - Answers for all categories (only those for `category` are used)
pub fn estimate(category: Category, answers: &Answers) -> KgCO2ePerDay {
    match category {
        Category::Transport => estimate_transport(&answers.transport),
        Category::HomeEnergy => estimate_home_energy(&answers.home_energy),
        Category::Food => estimate_food(&answers.food),
        Category::Goods => estimate_goods(&answers.goods),
        Category::Water => estimate_water(&answers.water),
        Category::Waste => estimate_waste(&answers.waste),
    }
}

/// Estimate daily emissions from personal vehicles and flights.
///
/// Carpooling halves the personal-vehicle term only. Flights are charged per trip using an
/// average distance and a radiative forcing multiplier. An unknown vehicle type contributes
/// nothing.
pub fn estimate_transport(answers: &TransportAnswers) -> KgCO2ePerDay {
    let mut annual = KgCO2ePerYear(0.0);

    if answers.has_vehicle {
        let factor = lookup::<VehicleType>(answers.vehicle_type.as_deref())
            .map_or(0.0, VehicleType::factor);
        let share = if answers.carpools { CARPOOL_SHARE } else { 1.0 };
        annual += KgCO2ePerYear(non_negative(answers.daily_km) * DAYS_PER_YEAR * factor)
            * Dimensionless(share);
    }

    for (class, flights) in [
        (FlightClass::Domestic, answers.domestic_flights_per_year),
        (
            FlightClass::International,
            answers.international_flights_per_year,
        ),
    ] {
        annual += KgCO2ePerYear(non_negative(flights) * class.per_flight());
    }

    // Walking and cycling are emission-free
    annual.per_day()
}

/// Estimate daily emissions from cooking fuel.
///
/// Electricity is not covered here: it comes from bill readings.
pub fn estimate_home_energy(answers: &HomeEnergyAnswers) -> KgCO2ePerDay {
    let annual = match lookup::<CookingFuel>(answers.cooking_fuel.as_deref()) {
        Some(CookingFuel::Lpg) => {
            non_negative(answers.lpg_cylinders_per_year) * LPG_KG_PER_CYLINDER
        }
        Some(CookingFuel::Png) => non_negative(answers.png_monthly_kg) * 12.0 * PNG_KG_PER_KG,
        Some(CookingFuel::None) | None => 0.0,
    };

    KgCO2ePerYear(annual).per_day()
}

/// Estimate daily emissions from diet.
///
/// Rice is only charged for meals above the baseline already included in the diet figures. An
/// unanswered diet contributes nothing; an unrecognised one uses the vegetarian baseline.
pub fn estimate_food(answers: &FoodAnswers) -> KgCO2ePerDay {
    if answers.diet_type.is_none() {
        return KgCO2ePerDay(0.0);
    }

    let diet = lookup::<DietType>(answers.diet_type.as_deref()).unwrap_or_default();
    let waste = lookup::<FoodWaste>(answers.waste_level.as_deref()).unwrap_or_default();
    let extra_rice_meals =
        (non_negative(answers.rice_meals_per_week) - BASELINE_RICE_MEALS_PER_WEEK).max(0.0);
    let extra_rice = extra_rice_meals * KG_PER_EXTRA_RICE_MEAL * WEEKS_PER_YEAR;

    (KgCO2ePerYear(diet.annual_kg() + extra_rice) * Dimensionless(waste.multiplier())).per_day()
}

/// Estimate daily emissions from owning electronic devices.
///
/// Clothing is not covered here: it comes from receipt readings. Unrecognised devices contribute
/// nothing.
pub fn estimate_goods(answers: &GoodsAnswers) -> KgCO2ePerDay {
    let cadence = lookup::<UpgradeCadence>(answers.upgrade_frequency.as_deref()).unwrap_or_default();
    let devices: KgCO2ePerYear = answers
        .devices_owned
        .iter()
        .filter_map(|key| lookup::<Device>(Some(key)))
        .map(|device| KgCO2ePerYear(device.annual_kg()))
        .sum();

    (devices * Dimensionless(cadence.multiplier())).per_day()
}

/// Estimate daily emissions from water use.
///
/// The source and treatment factors are added together, not multiplied: they are independent
/// burdens, each relative to a baseline of 1.0.
pub fn estimate_water(answers: &WaterAnswers) -> KgCO2ePerDay {
    if answers.usage_level.is_none() {
        return KgCO2ePerDay(0.0);
    }

    let usage = lookup::<WaterUsage>(answers.usage_level.as_deref()).unwrap_or_default();
    let source = lookup::<WaterSource>(answers.source.as_deref()).unwrap_or_default();
    let treatment = lookup::<WaterTreatment>(answers.treatment.as_deref()).unwrap_or_default();

    let litres_per_day = usage.litres_per_day() * (source.factor() + treatment.factor());
    let m3_per_year = litres_per_day * DAYS_PER_YEAR / LITRES_PER_M3;

    KgCO2ePerYear(m3_per_year * KG_PER_M3).per_day()
}

/// Estimate daily emissions from household waste.
///
/// The result is negative when waste is mostly recycled. An unanswered bag size contributes
/// nothing; unrecognised keys fall back to a medium bag, landfill and no segregation.
pub fn estimate_waste(answers: &WasteAnswers) -> KgCO2ePerDay {
    if answers.bag_size.is_none() {
        return KgCO2ePerDay(0.0);
    }

    let bag = lookup::<BagSize>(answers.bag_size.as_deref()).unwrap_or_default();
    let disposal = lookup::<Disposal>(answers.disposal.as_deref()).unwrap_or_default();
    let segregation = lookup::<Segregation>(answers.segregation.as_deref()).unwrap_or_default();

    (KgCO2ePerYear(bag.kg_per_year() * disposal.factor()) * Dimensionless(segregation.reduction()))
        .per_day()
}
