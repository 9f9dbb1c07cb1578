//! Expense aggregation - time-bucketed and category-bucketed summaries.
//!
//! Turns a snapshot of expense records into monthly/yearly totals, grouped
//! category sums, and ranked percentage shares. Grouping preserves the order
//! categories are first encountered in, which doubles as the deterministic
//! tie-break when two categories rank with equal amounts.

use crate::entities::Expense;
use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;

/// Summed spending for one category within the selected period.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    /// Category the expenses were grouped under
    pub category_id: String,
    /// Sum of `amount` across the grouped expenses
    pub amount: f64,
}

/// A category's slice of the period total, ready for ranking displays.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    /// Category the share belongs to
    pub category_id: String,
    /// Summed spending for the category
    pub amount: f64,
    /// Share of the period total, in `[0, 100]`; 0 when the total is 0
    pub percentage: f64,
}

/// Whether `date` falls in the given calendar month and year.
#[must_use]
pub fn falls_in_month(date: &DateTime<Utc>, month: u32, year: i32) -> bool {
    date.month() == month && date.year() == year
}

/// Whether `date` falls in the given calendar year.
#[must_use]
pub fn falls_in_year(date: &DateTime<Utc>, year: i32) -> bool {
    date.year() == year
}

/// Sums all expenses dated within the given calendar month and year.
/// Months are 1-based (January = 1). No matching records yields 0.
#[must_use]
pub fn monthly_total(expenses: &[Expense], month: u32, year: i32) -> f64 {
    expenses
        .iter()
        .filter(|e| falls_in_month(&e.date, month, year))
        .map(|e| e.amount)
        .sum()
}

/// Sums all expenses dated within the given calendar year.
#[must_use]
pub fn yearly_total(expenses: &[Expense], year: i32) -> f64 {
    expenses
        .iter()
        .filter(|e| falls_in_year(&e.date, year))
        .map(|e| e.amount)
        .sum()
}

/// Groups the month's expenses by category and sums each group.
///
/// The returned sequence is ordered by first encounter in the input, so
/// downstream ranking stays deterministic even for equal-amount categories.
#[must_use]
pub fn by_category(expenses: &[Expense], month: u32, year: i32) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for expense in expenses
        .iter()
        .filter(|e| falls_in_month(&e.date, month, year))
    {
        match index.get(expense.category_id.as_str()) {
            Some(&slot) => totals[slot].amount += expense.amount,
            None => {
                index.insert(expense.category_id.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category_id: expense.category_id.clone(),
                    amount: expense.amount,
                });
            }
        }
    }

    totals
}

/// Ranks grouped category totals descending by amount and computes each
/// category's percentage share of `total`.
///
/// A zero (or negative) `total` yields a 0 percentage for every entry
/// rather than dividing by zero. The sort is stable, so equal amounts keep
/// their input order.
#[must_use]
pub fn ranked_categories(totals: &[CategoryTotal], total: f64) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = totals
        .iter()
        .map(|t| CategoryShare {
            category_id: t.category_id.clone(),
            amount: t.amount,
            percentage: if total > 0.0 {
                t.amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    shares
}

/// Projects a monthly amount over a full year.
#[must_use]
pub fn yearly_projection(monthly_amount: f64) -> f64 {
    monthly_amount * 12.0
}
