//! Category reference data.
//!
//! Categories are static: loaded from the catalog at session start and only
//! ever joined against `Expense::category_id`. They are never created,
//! edited, or removed at runtime.

use crate::errors::Error;
use serde::{Deserialize, Serialize};

/// Broad grouping a category belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Essential living costs
    Needs,
    /// Discretionary spending
    Lifestyle,
    /// Money set aside
    Savings,
    /// Debt repayments
    Debt,
}

impl CategoryKind {
    /// The lowercase wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Needs => "needs",
            Self::Lifestyle => "lifestyle",
            Self::Savings => "savings",
            Self::Debt => "debt",
        }
    }
}

impl std::str::FromStr for CategoryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "needs" => Ok(Self::Needs),
            "lifestyle" => Ok(Self::Lifestyle),
            "savings" => Ok(Self::Savings),
            "debt" => Ok(Self::Debt),
            other => Err(Error::Decode {
                field: "type",
                message: format!("unknown category kind {other:?}"),
            }),
        }
    }
}

/// A spending category expenses are grouped under.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Stable identifier referenced by `Expense::category_id`
    pub id: String,
    /// Display name
    pub name: String,
    /// Broad grouping
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    /// Emoji shown for the category
    pub icon: String,
    /// Ordered list of sub-categories
    #[serde(default)]
    pub sub_categories: Vec<SubCategory>,
}

/// A finer-grained bucket inside a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    /// Stable identifier referenced by `Expense::sub_category_id`
    pub id: String,
    /// Display name
    pub name: String,
    /// Emoji shown for the sub-category
    pub icon: String,
}
