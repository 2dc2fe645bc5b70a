//! Converting quantities read from bills and receipts directly into emissions.
//!
//! Readings are collected in a [`ReadingSession`], which is scoped to a single calculation.
//! Submitting a second reading for a category replaces the first: a bill is a statement of the
//! whole period, so adding two of them together would double count.
use crate::factors::{DirectCategory, EmissionFactor};
use crate::units::{Dimensionless, KgCO2e, round2};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Convert a measured quantity into emissions using the category's linear factor.
///
/// # Returns
///
/// The emissions rounded to two decimal places, or zero if `key` is not a known category.
pub fn convert(key: &str, quantity: f64) -> KgCO2e {
    EmissionFactor::lookup(key).map_or(KgCO2e(0.0), |factor| {
        KgCO2e(round2(quantity * factor.factor))
    })
}

/// Split a household-wide emission between the people living there.
///
/// A household size of zero is treated as one.
pub fn apportion(emission: KgCO2e, household_size: u32) -> KgCO2e {
    let occupants = Dimensionless(f64::from(household_size.max(1)));
    (emission / occupants).round2()
}

/// Where a reading came from
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReadingSource {
    /// Entered by hand
    #[default]
    Manual,
    /// Extracted from a photo of a bill or receipt
    Ocr,
}

/// A quantity measured on a bill or receipt and the emissions derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct DirectReading {
    /// What was measured
    pub category: DirectCategory,
    /// The measured quantity, in the category's unit
    pub quantity: f64,
    /// Emissions for the whole household over the bill's period
    pub emission: KgCO2e,
    /// Where the reading came from
    pub source: ReadingSource,
}

impl DirectReading {
    /// Create a new reading, converting `quantity` into emissions
    pub fn new(category: DirectCategory, quantity: f64, source: ReadingSource) -> Self {
        Self {
            category,
            quantity,
            emission: convert(category.emission_factor().key, quantity),
            source,
        }
    }

    /// The emissions attributable to one person.
    ///
    /// Only household-shared categories (i.e. electricity) are apportioned.
    pub fn attributed(&self, household_size: u32) -> KgCO2e {
        if self.category.is_household_shared() {
            apportion(self.emission, household_size)
        } else {
            self.emission
        }
    }

    /// Description of the measured quantity with its unit (e.g. "120 kWh")
    pub fn describe(&self) -> String {
        let unit = self.category.emission_factor().unit;
        match self.source {
            ReadingSource::Manual => format!("{} {unit}", self.quantity),
            ReadingSource::Ocr => format!("{} {unit} (OCR)", self.quantity),
        }
    }
}

/// The direct readings gathered during one calculation session.
///
/// There is at most one reading per category: a later reading replaces an earlier one. The
/// position of a category is fixed by its first submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingSession {
    readings: IndexMap<DirectCategory, DirectReading>,
}

impl ReadingSession {
    /// Create a new, empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a reading for the category named by `key`.
    ///
    /// An unrecognised key is ignored: the category is treated as not present rather than as a
    /// zero reading.
    ///
    /// # Returns
    ///
    /// The reading which was replaced, if any.
    pub fn submit(
        &mut self,
        key: &str,
        quantity: f64,
        source: ReadingSource,
    ) -> Option<DirectReading> {
        let Ok(category) = key.trim().parse::<DirectCategory>() else {
            warn!("Ignoring reading for unknown category '{key}'");
            return None;
        };

        self.insert(DirectReading::new(category, quantity, source))
    }

    /// Add a reading to the session, replacing any previous reading for the same category
    pub fn insert(&mut self, reading: DirectReading) -> Option<DirectReading> {
        let category = reading.category;
        let previous = self.readings.insert(category, reading);
        if let Some(previous) = &previous {
            debug!(
                "Reading for {category} replaced (was {}, now {})",
                previous.quantity, self.readings[&category].quantity
            );
        }

        previous
    }

    /// Get the reading for a category, if one has been submitted
    pub fn get(&self, category: DirectCategory) -> Option<&DirectReading> {
        self.readings.get(&category)
    }

    /// Iterate over readings in order of first submission
    pub fn iter(&self) -> impl Iterator<Item = &DirectReading> {
        self.readings.values()
    }

    /// The number of categories with a reading
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether no readings have been submitted
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Total emissions attributable to one person across all readings
    pub fn total(&self, household_size: u32) -> KgCO2e {
        self.iter()
            .map(|reading| reading.attributed(household_size))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    #[rstest]
    #[case("electricity", 100.0, 82.0)]
    #[case("petrol", 10.0, 23.1)]
    #[case("clothing", 3.0, 37.5)]
    #[case("bus", 123.0, 10.95)] // 10.947 rounded
    #[case("firewood", 100.0, 0.0)]
    fn test_convert(#[case] key: &str, #[case] quantity: f64, #[case] expected: f64) {
        assert_approx_eq!(KgCO2e, convert(key, quantity), KgCO2e(expected));
    }

    #[rstest]
    #[case(82.0, 4, 20.5)]
    #[case(82.0, 0, 82.0)] // Treated as a single occupant
    #[case(82.0, 1, 82.0)]
    #[case(100.0, 3, 33.33)]
    fn test_apportion(#[case] emission: f64, #[case] household_size: u32, #[case] expected: f64) {
        assert_approx_eq!(
            KgCO2e,
            apportion(KgCO2e(emission), household_size),
            KgCO2e(expected)
        );
    }

    #[test]
    fn test_submit_replaces() {
        let mut session = ReadingSession::new();
        assert!(
            session
                .submit("electricity", 100.0, ReadingSource::Ocr)
                .is_none()
        );
        let previous = session
            .submit("electricity", 50.0, ReadingSource::Manual)
            .unwrap();
        assert_eq!(previous.quantity, 100.0);

        assert_eq!(session.len(), 1);
        assert_approx_eq!(KgCO2e, session.total(1), KgCO2e(41.0));
    }

    #[test]
    fn test_submit_unknown_category() {
        let mut session = ReadingSession::new();
        assert!(session.submit("firewood", 10.0, ReadingSource::Ocr).is_none());
        assert!(session.is_empty());
        assert_eq!(session.total(1), KgCO2e(0.0));
    }

    #[test]
    fn test_total_apportions_shared_only() {
        let mut session = ReadingSession::new();
        session.submit("electricity", 100.0, ReadingSource::Ocr);
        session.submit("petrol", 10.0, ReadingSource::Manual);

        // 82 / 4 + 23.1
        assert_approx_eq!(KgCO2e, session.total(4), KgCO2e(43.6));
    }

    #[test]
    fn test_iteration_order_follows_first_submission() {
        let mut session = ReadingSession::new();
        session.submit("train", 10.0, ReadingSource::Manual);
        session.submit("electricity", 10.0, ReadingSource::Manual);
        session.submit("train", 20.0, ReadingSource::Manual);

        let categories: Vec<_> = session.iter().map(|r| r.category).collect();
        assert_eq!(categories, [DirectCategory::Train, DirectCategory::Electricity]);
        assert_eq!(session.get(DirectCategory::Train).unwrap().quantity, 20.0);
    }

    #[rstest]
    #[case(ReadingSource::Manual, "120 kWh")]
    #[case(ReadingSource::Ocr, "120 kWh (OCR)")]
    fn test_describe(#[case] source: ReadingSource, #[case] expected: &str) {
        let reading = DirectReading::new(DirectCategory::Electricity, 120.0, source);
        assert_eq!(reading.describe(), expected);
    }
}
