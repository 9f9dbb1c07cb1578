//! Income entity - money coming in, split into regular and irregular.

use crate::errors::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of an income record. Only regular income forms the base
/// that jar percentages are applied to; irregular income is tracked but
/// never allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeKind {
    /// Recurring income (salary), subject to jar allocation
    Regular,
    /// One-off income (bonus, gift), tracked separately
    Irregular,
}

impl IncomeKind {
    /// The lowercase wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Irregular => "irregular",
        }
    }
}

impl std::str::FromStr for IncomeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "irregular" => Ok(Self::Irregular),
            other => Err(Error::Decode {
                field: "type",
                message: format!("unknown income kind {other:?}"),
            }),
        }
    }
}

/// An income record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    /// Unique identifier, assigned once on creation
    pub id: String,
    /// Display name (e.g. "Salary")
    pub name: String,
    /// Amount received
    pub amount: f64,
    /// Regular or irregular
    #[serde(rename = "type")]
    pub kind: IncomeKind,
    /// When the income was recorded
    pub date: DateTime<Utc>,
}

/// Fields for a new income record.
#[derive(Clone, Debug)]
pub struct IncomeDraft {
    /// Display name
    pub name: String,
    /// Amount received, must be finite and positive
    pub amount: f64,
    /// Regular or irregular
    pub kind: IncomeKind,
    /// When the income was recorded
    pub date: DateTime<Utc>,
}

impl Income {
    /// Builds a full record from a draft and a freshly generated id.
    #[must_use]
    pub fn from_draft(id: String, draft: IncomeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            amount: draft.amount,
            kind: draft.kind,
            date: draft.date,
        }
    }
}
