//! Entity module - plain data records owned by the single user's data scope.
//!
//! These are the records the store layer persists and the core engine
//! computes over. Serialized form matches the local blob layout: camelCase
//! field names and ISO-8601 date strings.

pub mod bank_account;
pub mod category;
pub mod color;
pub mod debt;
pub mod expense;
pub mod income;
pub mod jar;

pub use bank_account::BankAccount;
pub use category::{Category, CategoryKind, SubCategory};
pub use color::ColorTag;
pub use debt::{Debt, DebtDraft};
pub use expense::{Expense, ExpenseDraft};
pub use income::{Income, IncomeDraft, IncomeKind};
pub use jar::{Jar, JarDraft};

use uuid::Uuid;

/// Generates a fresh unique identifier for a newly created record.
#[must_use]
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
