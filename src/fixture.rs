//! Fixtures for tests
use crate::answers::{
    Answers, FoodAnswers, GoodsAnswers, HomeEnergyAnswers, TransportAnswers, WasteAnswers,
    WaterAnswers,
};
use crate::ledger::LedgerRecord;
use crate::reading::ReadingSource;
use crate::units::KgCO2ePerDay;
use float_cmp::assert_approx_eq;
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

/// Assert that a daily emission is approximately equal to the expected value in kg
pub fn assert_daily_approx_eq(actual: KgCO2ePerDay, expected: f64) {
    assert_approx_eq!(f64, actual.value(), expected, epsilon = 1e-9);
}

/// Answers resembling a typical questionnaire submission
#[fixture]
pub fn typical_answers() -> Answers {
    Answers {
        transport: TransportAnswers {
            has_vehicle: true,
            vehicle_type: Some("petrol_small".into()),
            daily_km: 20.0,
            carpools: false,
            domestic_flights_per_year: 2.0,
            international_flights_per_year: 0.0,
            walk_cycle_km: 2.0,
        },
        home_energy: HomeEnergyAnswers {
            climate_zone: Some("warm_humid".into()),
            cooking_fuel: Some("lpg".into()),
            lpg_cylinders_per_year: 12.0,
            png_monthly_kg: 0.0,
        },
        food: FoodAnswers {
            diet_type: Some("vegetarian".into()),
            rice_meals_per_week: 7.0,
            waste_level: Some("average".into()),
            ..Default::default()
        },
        goods: GoodsAnswers {
            devices_owned: vec!["smartphone".into()],
            upgrade_frequency: Some("few_years".into()),
        },
        water: WaterAnswers {
            usage_level: Some("average".into()),
            source: Some("municipal".into()),
            treatment: Some("basic".into()),
        },
        waste: WasteAnswers {
            bag_size: Some("medium".into()),
            segregation: Some("partial".into()),
            disposal: Some("landfill".into()),
        },
    }
}

/// A ledger record with a manual source, timestamped with an RFC 3339 string
pub fn ledger_record(category: &str, amount: f64, timestamp: &str) -> LedgerRecord {
    LedgerRecord {
        category: category.into(),
        amount,
        source: ReadingSource::Manual,
        description: String::new(),
        timestamp: timestamp.parse().unwrap(),
    }
}
