//! Turning an emissions breakdown into a short list of tips.
//!
//! Categories are ranked by how much they contribute and the largest three each yield one fixed
//! tip. Contributions can come from a fresh breakdown or from totals recorded in a ledger; ledger
//! categories (e.g. "petrol") are first mapped onto the lifestyle category they belong to.
use crate::aggregate::CategoryBreakdown;
use crate::estimate::Category;
use crate::factors::DirectCategory;
use crate::ledger::LedgerRecord;
use indexmap::IndexMap;

/// The maximum number of tips returned
pub const MAX_TIPS: usize = 3;

/// The tip given when nothing contributes positively
pub const FALLBACK_TIP: &str = "Great job! Keep tracking to maintain your low carbon footprint";

/// The single tip for each category
pub fn tip(category: Category) -> &'static str {
    match category {
        Category::Transport => {
            "Use public transport, carpool, or switch to EVs to cut transport emissions"
        }
        Category::HomeEnergy => "Switch to LED lighting, solar panels, and 5-star rated appliances",
        Category::Food => "Try more plant-based meals and reduce food waste",
        Category::Goods => "Repair electronics instead of replacing, extend device lifespans",
        Category::Water => "Install low-flow fixtures and use rainwater harvesting",
        Category::Waste => "Segregate waste, compost organic waste, and maximize recycling",
    }
}

/// Longer advice for each category
pub fn detailed_tips(category: Category) -> &'static [&'static str] {
    match category {
        Category::Transport => &[
            "Use public transport (bus, metro) instead of personal vehicles.",
            "Carpool with colleagues or neighbours to halve your per-person vehicle emissions.",
            "Consider switching to an electric vehicle or electric two-wheeler for daily commutes.",
            "For short distances, prefer walking or cycling.",
            "Combine multiple errands into a single trip to reduce total kilometres driven.",
            "Use video calls instead of travelling for meetings when possible.",
        ],
        Category::HomeEnergy => &[
            "Switch to LED lighting.",
            "Use 5-star rated appliances for maximum efficiency.",
            "Install solar panels or subscribe to a solar co-op.",
            "Set AC temperature to 24°C or higher.",
            "Use pressure cookers to reduce cooking time and LPG consumption.",
            "Consider induction cooking.",
            "Unplug devices when not in use to eliminate standby power consumption.",
        ],
        Category::Food => &[
            "Increase plant-based meals.",
            "Reduce food waste by planning meals, using leftovers, and composting scraps.",
            "Buy seasonal and locally-grown produce.",
            "Reduce rice consumption where possible: rice paddies emit significant methane.",
            "Avoid processed and packaged foods.",
        ],
        Category::Goods => &[
            "Extend the lifespan of electronics: repair instead of replacing.",
            "Buy refurbished electronics when possible.",
            "Sell or donate old electronics instead of discarding them.",
            "Opt for quality over quantity when buying clothes.",
        ],
        Category::Water => &[
            "Install low-flow showerheads and faucet aerators.",
            "Fix leaky taps immediately.",
            "Install rainwater harvesting.",
            "Use RO reject water for mopping, gardening, or flushing.",
            "Run washing machines and dishwashers only with full loads.",
        ],
        Category::Waste => &[
            "Segregate waste into wet, dry, and hazardous categories at source.",
            "Compost kitchen waste at home.",
            "Maximise recycling: paper, plastic, glass, and metal can all be recycled.",
            "Avoid single-use plastics.",
            "Reduce packaging waste by buying in bulk.",
        ],
    }
}

/// The lifestyle category a direct-reading category belongs to
pub fn lifestyle_category(category: DirectCategory) -> Category {
    match category {
        DirectCategory::Electricity | DirectCategory::NaturalGas => Category::HomeEnergy,
        DirectCategory::Petrol
        | DirectCategory::Diesel
        | DirectCategory::Bus
        | DirectCategory::Train => Category::Transport,
        DirectCategory::Clothing => Category::Goods,
    }
}

/// Resolve a category key from either the lifestyle or the direct-reading tables
pub fn resolve_category(key: &str) -> Option<Category> {
    let key = key.trim();
    key.parse::<Category>()
        .ok()
        .or_else(|| key.parse::<DirectCategory>().ok().map(lifestyle_category))
}

/// Rank contributions and return the largest categories.
///
/// Non-positive contributions are skipped. Ties are broken by category declaration order. Each
/// category appears at most once.
///
/// # Returns
///
/// Up to [`MAX_TIPS`] distinct categories, largest first.
pub fn ranked_categories<I>(contributions: I) -> Vec<Category>
where
    I: IntoIterator<Item = (Category, f64)>,
{
    let mut positive: Vec<_> = contributions
        .into_iter()
        .filter(|(_, amount)| *amount > 0.0)
        .collect();
    positive.sort_by(|(ca, a), (cb, b)| b.total_cmp(a).then(ca.cmp(cb)));

    let mut categories = Vec::with_capacity(MAX_TIPS);
    for (category, _) in positive {
        if !categories.contains(&category) {
            categories.push(category);
        }
        if categories.len() == MAX_TIPS {
            break;
        }
    }

    categories
}

/// Rank contributions and return tips for the largest.
///
/// # Returns
///
/// Between one and [`MAX_TIPS`] distinct tips, or only [`FALLBACK_TIP`] if nothing contributes
/// positively.
pub fn rank<I>(contributions: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = (Category, f64)>,
{
    let tips: Vec<_> = ranked_categories(contributions).into_iter().map(tip).collect();
    if tips.is_empty() {
        vec![FALLBACK_TIP]
    } else {
        tips
    }
}

/// Rank the categories of a breakdown
pub fn rank_breakdown(breakdown: &[CategoryBreakdown]) -> Vec<&'static str> {
    rank(
        breakdown
            .iter()
            .map(|entry| (entry.category, entry.daily.value())),
    )
}

/// Total the amounts in a ledger by lifestyle category.
///
/// Records with unrecognised categories are skipped. Categories appear in order of first
/// occurrence.
pub fn category_totals(records: &[LedgerRecord]) -> IndexMap<Category, f64> {
    let mut totals = IndexMap::new();
    for record in records {
        if let Some(category) = resolve_category(&record.category) {
            *totals.entry(category).or_default() += record.amount;
        }
    }

    totals
}

/// Rank the categories of a ledger by their recorded totals
pub fn rank_history(records: &[LedgerRecord]) -> Vec<&'static str> {
    rank(category_totals(records))
}

/// The category with the largest recorded total in a ledger, if any is positive
pub fn top_history_category(records: &[LedgerRecord]) -> Option<Category> {
    ranked_categories(category_totals(records)).first().copied()
}
