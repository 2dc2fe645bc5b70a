//! Comparing emissions against the monthly budget and awarding credits.
//!
//! One credit is awarded for each kilogram emitted below the budget.
use crate::ledger::LedgerRecord;
use crate::units::round2;
use chrono::Datelike;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

/// How a monthly total compares with the budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetStatus {
    /// The monthly total, in kg CO₂e
    pub total: f64,
    /// The monthly budget, in kg CO₂e
    pub budget: f64,
    /// How far the total exceeds the budget (zero if within it)
    pub surplus: f64,
    /// Credits earned: one per kg below the budget (zero if over it)
    pub credits: f64,
    /// Whether the total exceeds the budget
    pub is_over: bool,
    /// The share of the budget used, as a percentage capped at 100
    pub percent_used: f64,
}

/// Compare a monthly total against a budget.
///
/// A negative total (possible when recycling outweighs everything else) earns more credits than
/// the budget itself. Display code may clamp it; this function does not.
pub fn evaluate(total: f64, budget: f64) -> BudgetStatus {
    let percent_used = if budget > 0.0 {
        (total / budget * 100.0).min(100.0)
    } else {
        100.0
    };

    BudgetStatus {
        total,
        budget,
        surplus: (total - budget).max(0.0),
        credits: (budget - total).max(0.0),
        is_over: total > budget,
        percent_used,
    }
}

/// Emissions and credits for one calendar month of a ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCredits {
    /// The year
    pub year: i32,
    /// The month (1-12)
    pub month: u32,
    /// Total emissions recorded in the month, in kg CO₂e
    pub total: f64,
    /// Credits earned in the month
    pub credits: f64,
    /// Whether the month's total exceeds the budget
    pub is_over: bool,
}

/// Group ledger records by calendar month and evaluate each month against the budget.
///
/// # Returns
///
/// One entry per month with at least one record, newest first.
pub fn monthly_credits(records: &[LedgerRecord], budget: f64) -> Vec<MonthlyCredits> {
    let mut totals: IndexMap<(i32, u32), f64> = IndexMap::new();
    for record in records {
        let key = (record.timestamp.year(), record.timestamp.month());
        *totals.entry(key).or_default() += record.amount;
    }

    totals
        .into_iter()
        .sorted_by(|(a, _), (b, _)| b.cmp(a))
        .map(|((year, month), total)| {
            let status = evaluate(total, budget);
            MonthlyCredits {
                year,
                month,
                total: round2(total),
                credits: round2(status.credits),
                is_over: status.is_over,
            }
        })
        .collect()
}

/// The credits earned across all months
pub fn total_credits(months: &[MonthlyCredits]) -> f64 {
    round2(months.iter().map(|month| month.credits).sum())
}
