//! Jar allocation - envelope budgeting over percentage shares of income.
//!
//! Jars claim percentage shares of *regular* income only. The 100% ceiling
//! is a soft invariant: [`remaining_allocatable`] goes negative when jars
//! are over-allocated and the caller decides what to surface, nothing here
//! rejects the state.

use crate::entities::{ColorTag, Income, IncomeKind, Jar, new_record_id};

/// The six canonical envelopes seeded by [`default_preset`]:
/// name, description, percentage, emoji, color.
const DEFAULT_PRESET: [(&str, &str, f64, &str, ColorTag); 6] = [
    (
        "Necessities",
        "Day-to-day essentials such as food, transport, and phone bills",
        55.0,
        "🏠",
        ColorTag::Pink,
    ),
    (
        "Financial Freedom",
        "Investments and anything that builds future income",
        10.0,
        "💰",
        ColorTag::Yellow,
    ),
    (
        "Education",
        "Courses, books, and anything that grows your skills",
        10.0,
        "📚",
        ColorTag::Blue,
    ),
    (
        "Play",
        "Guilt-free spending: eating out, shopping, movies, trips",
        10.0,
        "🎉",
        ColorTag::Purple,
    ),
    (
        "Emergency Savings",
        "Reserved for emergencies and long-term goals",
        10.0,
        "🏦",
        ColorTag::Green,
    ),
    (
        "Giving",
        "Sharing with and helping others",
        5.0,
        "❤️",
        ColorTag::Mint,
    ),
];

/// Per-jar view model combining the allocation with target progress.
#[derive(Clone, Debug, PartialEq)]
pub struct JarReport {
    /// Jar the report describes
    pub jar_id: String,
    /// Monthly amount the jar's percentage claims from regular income
    pub allocated_amount: f64,
    /// Progress toward the target, absent when the jar tracks no target
    pub progress: Option<f64>,
}

/// Sum of percentage shares across all jars.
#[must_use]
pub fn total_allocated_percentage(jars: &[Jar]) -> f64 {
    jars.iter().map(|j| j.percentage).sum()
}

/// Unallocated share of regular income. Negative when jars claim more than
/// 100% combined; that state is advisory, not an error.
#[must_use]
pub fn remaining_allocatable(jars: &[Jar]) -> f64 {
    100.0 - total_allocated_percentage(jars)
}

/// The amount of regular income this jar's percentage claims.
#[must_use]
pub fn allocated_amount(jar: &Jar, regular_income_total: f64) -> f64 {
    regular_income_total * jar.percentage / 100.0
}

/// Progress toward the jar's savings target as a percentage.
///
/// Returns `None` when the jar has no target (or a zero target), meaning
/// progress is not tracked for this jar at all.
#[must_use]
pub fn jar_progress(jar: &Jar) -> Option<f64> {
    match jar.target_amount {
        Some(target) if target != 0.0 => Some(jar.current_amount / target * 100.0),
        _ => None,
    }
}

/// Builds the six canonical jars with fresh identifiers and zero balances.
///
/// This is a pure producer: it does not look at any existing jar set. The
/// session workflow is responsible for only applying it when the jar list
/// is empty, because persisting the preset replaces the collection
/// wholesale.
#[must_use]
pub fn default_preset() -> Vec<Jar> {
    DEFAULT_PRESET
        .iter()
        .map(|&(name, description, percentage, emoji, color)| Jar {
            id: new_record_id(),
            name: name.to_string(),
            description: description.to_string(),
            percentage,
            emoji: emoji.to_string(),
            color,
            current_amount: 0.0,
            target_amount: None,
        })
        .collect()
}

/// Sum of all regular income, the base jar percentages are applied to.
#[must_use]
pub fn regular_income_total(incomes: &[Income]) -> f64 {
    income_total_of_kind(incomes, IncomeKind::Regular)
}

/// Sum of all irregular income. Tracked but never allocated.
#[must_use]
pub fn irregular_income_total(incomes: &[Income]) -> f64 {
    income_total_of_kind(incomes, IncomeKind::Irregular)
}

/// Sum of all income regardless of kind.
#[must_use]
pub fn total_income(incomes: &[Income]) -> f64 {
    incomes.iter().map(|i| i.amount).sum()
}

/// Builds the per-jar view model for one jar.
#[must_use]
pub fn jar_report(jar: &Jar, regular_income_total: f64) -> JarReport {
    JarReport {
        jar_id: jar.id.clone(),
        allocated_amount: allocated_amount(jar, regular_income_total),
        progress: jar_progress(jar),
    }
}

fn income_total_of_kind(incomes: &[Income], kind: IncomeKind) -> f64 {
    incomes
        .iter()
        .filter(|i| i.kind == kind)
        .map(|i| i.amount)
        .sum()
}
