//! Combining category estimates and direct readings into a single footprint.
//!
//! Two kinds of source feed the total: daily estimates from questionnaire answers and period
//! totals from bills and receipts. Both are represented as a [`Contribution`] and reduced to
//! monthly figures by [`Contribution::monthly`], which is the only place the rule "estimates are
//! daily and scale by 30, direct readings already cover the period" is applied.
use crate::answers::Answers;
use crate::budget::{BudgetStatus, evaluate};
use crate::estimate::{Category, estimate};
use crate::reading::{DirectReading, ReadingSession};
use crate::recommend::rank_breakdown;
use crate::units::{KgCO2e, KgCO2ePerDay};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoEnumIterator};

/// The time resolution at which to view a footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Resolution {
    /// Per day
    Daily,
    /// Per month (30 days)
    #[default]
    Monthly,
}

/// A single source of emissions feeding into the footprint
#[derive(Debug, Clone, PartialEq)]
pub enum Contribution<'a> {
    /// A daily estimate derived from questionnaire answers
    Estimated {
        /// The lifestyle category
        category: Category,
        /// Estimated daily emissions
        daily: KgCO2ePerDay,
    },
    /// A reading from a bill or receipt, already covering a whole period
    Direct {
        /// The reading
        reading: &'a DirectReading,
        /// Emissions attributed to one person
        attributed: KgCO2e,
    },
}

impl Contribution<'_> {
    /// The emissions this source contributes to a monthly total
    pub fn monthly(&self) -> KgCO2e {
        match self {
            Self::Estimated { daily, .. } => daily.per_month(),
            Self::Direct { attributed, .. } => *attributed,
        }
    }
}

/// The estimated emissions for one lifestyle category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBreakdown {
    /// The category
    pub category: Category,
    /// Estimated daily emissions. May be negative (e.g. when waste is recycled).
    pub daily: KgCO2ePerDay,
}

impl CategoryBreakdown {
    /// Human-readable name of the category
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Emissions over a 30-day month
    pub fn monthly(&self) -> KgCO2e {
        self.daily.per_month()
    }

    /// Emissions at the given resolution, in kg
    pub fn kg(&self, resolution: Resolution) -> f64 {
        match resolution {
            Resolution::Daily => self.daily.value(),
            Resolution::Monthly => self.monthly().value(),
        }
    }
}

/// Summary of the direct readings used in a footprint
#[derive(Debug, Clone, PartialEq)]
pub struct DirectSummary {
    /// The readings, in order of first submission
    pub readings: Vec<DirectReading>,
    /// Emissions attributed to one person across all readings
    pub total: KgCO2e,
}

/// A complete footprint: all six categories, direct readings and their combined total
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    /// One entry per lifestyle category, in fixed order, including zero entries
    pub breakdown: Vec<CategoryBreakdown>,
    /// Readings from bills and receipts
    pub direct: DirectSummary,
    /// The household size used to apportion shared readings
    pub household_size: u32,
    /// Monthly category emissions plus direct readings
    pub grand_total: KgCO2e,
}

impl Footprint {
    /// Combined category emissions at the given resolution (excluding direct readings), in kg
    pub fn category_total(&self, resolution: Resolution) -> f64 {
        self.breakdown.iter().map(|entry| entry.kg(resolution)).sum()
    }

    /// Compare the grand total against a monthly budget
    pub fn status(&self, budget: f64) -> BudgetStatus {
        evaluate(self.grand_total.value(), budget)
    }

    /// Tips for reducing the largest category emissions
    pub fn tips(&self) -> Vec<&'static str> {
        rank_breakdown(&self.breakdown)
    }
}

/// Gather the contributions of all sources in a session
pub fn contributions<'a>(
    answers: &Answers,
    session: &'a ReadingSession,
    household_size: u32,
) -> Vec<Contribution<'a>> {
    let estimated = Category::iter().map(|category| Contribution::Estimated {
        category,
        daily: estimate(category, answers),
    });
    let direct = session.iter().map(|reading| Contribution::Direct {
        reading,
        attributed: reading.attributed(household_size),
    });

    estimated.chain(direct).collect()
}

/// Calculate the footprint for one session.
///
/// # Arguments
///
/// * `answers` - Questionnaire answers for all six categories
/// * `session` - Readings from bills and receipts
/// * `household_size` - The number of people sharing household readings (0 is treated as 1)
pub fn aggregate(answers: &Answers, session: &ReadingSession, household_size: u32) -> Footprint {
    let contributions = contributions(answers, session, household_size);

    let mut breakdown = Vec::with_capacity(Category::iter().len());
    let mut direct_total = KgCO2e(0.0);
    let mut grand_total = KgCO2e(0.0);
    for contribution in &contributions {
        grand_total += contribution.monthly();
        match contribution {
            Contribution::Estimated { category, daily } => breakdown.push(CategoryBreakdown {
                category: *category,
                daily: *daily,
            }),
            Contribution::Direct { attributed, .. } => direct_total += *attributed,
        }
    }

    Footprint {
        breakdown,
        direct: DirectSummary {
            readings: session.iter().cloned().collect(),
            total: direct_total,
        },
        household_size: household_size.max(1),
        grand_total,
    }
}
