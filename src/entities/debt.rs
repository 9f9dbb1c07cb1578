//! Debt entity - an outstanding balance paid down over time.

use crate::entities::ColorTag;
use serde::{Deserialize, Serialize};

/// A tracked debt. Invariant: `0 <= paid_amount <= total_amount`, enforced
/// by clamping in [`crate::core::debt::apply_payment`], never by rejecting
/// out-of-range payment deltas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    /// Unique identifier, assigned once on creation
    pub id: String,
    /// Human-readable label (e.g. "Car loan")
    pub name: String,
    /// Emoji or glyph shown next to the debt
    pub icon: String,
    /// Full amount owed
    pub total_amount: f64,
    /// Amount paid off so far
    pub paid_amount: f64,
    /// Cosmetic color tag
    pub color: ColorTag,
    /// Optional user-uploaded icon reference, overriding `icon`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_icon: Option<String>,
}

/// Fields for a new debt. `paid_amount` always starts at zero.
#[derive(Clone, Debug)]
pub struct DebtDraft {
    /// Human-readable label
    pub name: String,
    /// Emoji or glyph shown next to the debt
    pub icon: String,
    /// Full amount owed, must be finite and positive
    pub total_amount: f64,
    /// Cosmetic color tag
    pub color: ColorTag,
    /// Optional user-uploaded icon reference
    pub custom_icon: Option<String>,
}

impl Debt {
    /// Builds a full record from a draft and a freshly generated id.
    #[must_use]
    pub fn from_draft(id: String, draft: DebtDraft) -> Self {
        Self {
            id,
            name: draft.name,
            icon: draft.icon,
            total_amount: draft.total_amount,
            paid_amount: 0.0,
            color: draft.color,
            custom_icon: draft.custom_icon,
        }
    }
}
