//! Debt payoff progress and bounded payments.
//!
//! `paid_amount` only ever moves through [`apply_payment`], which clamps the
//! result into `[0, total_amount]`. A delta that would overshoot either
//! boundary is snapped to it, never rejected.

use crate::entities::Debt;

/// Aggregate view over the whole debt portfolio.
#[derive(Clone, Debug, PartialEq)]
pub struct DebtPortfolio {
    /// Sum of `total_amount` across all debts
    pub total_debt: f64,
    /// Sum of `paid_amount` across all debts
    pub total_paid: f64,
    /// Outstanding amount across all debts
    pub remaining_debt: f64,
    /// Overall payoff percentage, 0 when there is no debt
    pub progress_percent: f64,
}

/// The outstanding balance of a debt.
#[must_use]
pub fn remaining(debt: &Debt) -> f64 {
    debt.total_amount - debt.paid_amount
}

/// Payoff progress as a percentage in `[0, 100]`.
///
/// A zero `total_amount` yields 0 rather than letting the division produce
/// a non-numeric value.
#[must_use]
pub fn progress_percent(debt: &Debt) -> f64 {
    share_percent(debt.paid_amount, debt.total_amount)
}

/// Returns an updated copy of the debt with `delta` applied to
/// `paid_amount`, clamped into `[0, total_amount]`. A positive delta
/// records a payment; a negative delta reverses one.
#[must_use]
pub fn apply_payment(debt: &Debt, delta: f64) -> Debt {
    let mut updated = debt.clone();
    updated.paid_amount = (debt.paid_amount + delta).clamp(0.0, debt.total_amount);
    updated
}

/// Sums every debt into a portfolio overview with guarded overall progress.
#[must_use]
pub fn portfolio(debts: &[Debt]) -> DebtPortfolio {
    let total_debt: f64 = debts.iter().map(|d| d.total_amount).sum();
    let total_paid: f64 = debts.iter().map(|d| d.paid_amount).sum();

    DebtPortfolio {
        total_debt,
        total_paid,
        remaining_debt: total_debt - total_paid,
        progress_percent: share_percent(total_paid, total_debt),
    }
}

fn share_percent(paid: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    paid / total * 100.0
}
