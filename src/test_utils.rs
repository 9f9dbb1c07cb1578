//! Shared test fixtures.
//!
//! Helpers for building entity records and drafts with sensible defaults,
//! so individual tests only spell out the fields they actually exercise.

#![allow(clippy::unwrap_used)]

use crate::entities::{
    ColorTag, Debt, DebtDraft, Expense, ExpenseDraft, Income, IncomeDraft, IncomeKind, Jar,
    JarDraft, new_record_id,
};
use chrono::{DateTime, TimeZone, Utc};

/// Noon UTC on the given calendar day.
pub fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// An expense dated noon on the given day, with a fresh id.
pub fn expense_on(name: &str, amount: f64, category_id: &str, year: i32, month: u32, day: u32) -> Expense {
    Expense {
        id: new_record_id(),
        name: name.to_string(),
        amount,
        category_id: category_id.to_string(),
        sub_category_id: None,
        date: noon(year, month, day),
        color: ColorTag::Pink,
        note: None,
        custom_icon: None,
    }
}

/// An expense draft dated 2025-01-15.
pub fn expense_draft(name: &str, amount: f64, category_id: &str) -> ExpenseDraft {
    ExpenseDraft {
        name: name.to_string(),
        amount,
        category_id: category_id.to_string(),
        sub_category_id: None,
        date: noon(2025, 1, 15),
        color: ColorTag::Pink,
        note: None,
        custom_icon: None,
    }
}

/// A debt with the given totals and a fresh id.
pub fn debt_with(name: &str, total_amount: f64, paid_amount: f64) -> Debt {
    Debt {
        id: new_record_id(),
        name: name.to_string(),
        icon: "💳".to_string(),
        total_amount,
        paid_amount,
        color: ColorTag::Blue,
        custom_icon: None,
    }
}

/// A debt draft with nothing paid yet.
pub fn debt_draft(name: &str, total_amount: f64) -> DebtDraft {
    DebtDraft {
        name: name.to_string(),
        icon: "💳".to_string(),
        total_amount,
        color: ColorTag::Blue,
        custom_icon: None,
    }
}

/// A jar with the given percentage, no target, and a fresh id.
pub fn jar_with(name: &str, percentage: f64) -> Jar {
    Jar {
        id: new_record_id(),
        name: name.to_string(),
        description: "Test jar".to_string(),
        percentage,
        emoji: "💰".to_string(),
        color: ColorTag::Green,
        current_amount: 0.0,
        target_amount: None,
    }
}

/// A jar tracking progress toward a target.
pub fn jar_with_target(name: &str, percentage: f64, current_amount: f64, target_amount: f64) -> Jar {
    let mut jar = jar_with(name, percentage);
    jar.current_amount = current_amount;
    jar.target_amount = Some(target_amount);
    jar
}

/// A jar draft with the given percentage and no target.
pub fn jar_draft(name: &str, percentage: f64) -> JarDraft {
    JarDraft {
        name: name.to_string(),
        description: "Test jar".to_string(),
        percentage,
        emoji: "💰".to_string(),
        color: ColorTag::Green,
        target_amount: None,
    }
}

/// An income record dated 2025-01-01 with a fresh id.
pub fn income_of(name: &str, amount: f64, kind: IncomeKind) -> Income {
    Income {
        id: new_record_id(),
        name: name.to_string(),
        amount,
        kind,
        date: noon(2025, 1, 1),
    }
}

/// An income draft dated 2025-01-01.
pub fn income_draft(name: &str, amount: f64, kind: IncomeKind) -> IncomeDraft {
    IncomeDraft {
        name: name.to_string(),
        amount,
        kind,
        date: noon(2025, 1, 1),
    }
}
