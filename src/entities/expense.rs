//! Expense entity - a single dated, categorized spending record.

use crate::entities::ColorTag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged expense. `amount` is always non-negative; the session layer
/// rejects drafts that would violate that invariant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, assigned once on creation
    pub id: String,
    /// Human-readable label (e.g. "Lunch", "Rent")
    pub name: String,
    /// Amount spent, in the tracked currency
    pub amount: f64,
    /// Reference into the static category catalog
    pub category_id: String,
    /// Optional reference to a sub-category of `category_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category_id: Option<String>,
    /// When the expense occurred
    pub date: DateTime<Utc>,
    /// Cosmetic color tag
    pub color: ColorTag,
    /// Optional free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Optional user-uploaded icon reference, overriding the category icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_icon: Option<String>,
}

/// Fields for a new expense. The session assigns the identifier.
#[derive(Clone, Debug)]
pub struct ExpenseDraft {
    /// Human-readable label
    pub name: String,
    /// Amount spent, must be finite and non-negative
    pub amount: f64,
    /// Reference into the category catalog
    pub category_id: String,
    /// Optional sub-category reference
    pub sub_category_id: Option<String>,
    /// When the expense occurred
    pub date: DateTime<Utc>,
    /// Cosmetic color tag
    pub color: ColorTag,
    /// Optional free-form note
    pub note: Option<String>,
    /// Optional user-uploaded icon reference
    pub custom_icon: Option<String>,
}

impl Expense {
    /// Builds a full record from a draft and a freshly generated id.
    #[must_use]
    pub fn from_draft(id: String, draft: ExpenseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            amount: draft.amount,
            category_id: draft.category_id,
            sub_category_id: draft.sub_category_id,
            date: draft.date,
            color: draft.color,
            note: draft.note,
            custom_icon: draft.custom_icon,
        }
    }
}
