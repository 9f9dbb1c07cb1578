//! Jar entity - a percentage-based budget envelope over regular income.

use crate::entities::ColorTag;
use serde::{Deserialize, Serialize};

/// A budget jar. Each jar claims a percentage share of regular income.
/// The sum of shares across all jars should stay at or below 100; going
/// over is advisory only and is surfaced through
/// [`crate::core::jar::remaining_allocatable`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jar {
    /// Unique identifier, assigned once on creation
    pub id: String,
    /// Display name
    pub name: String,
    /// What this jar is for
    pub description: String,
    /// Share of regular income, in `[0, 100]`
    pub percentage: f64,
    /// Emoji shown on the jar card
    pub emoji: String,
    /// Cosmetic color tag
    pub color: ColorTag,
    /// Amount saved into the jar so far
    pub current_amount: f64,
    /// Optional savings target. Absent means the jar tracks no progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
}

/// Fields for a new jar. `current_amount` always starts at zero.
#[derive(Clone, Debug)]
pub struct JarDraft {
    /// Display name
    pub name: String,
    /// What this jar is for
    pub description: String,
    /// Share of regular income, must be finite and within `[0, 100]`
    pub percentage: f64,
    /// Emoji shown on the jar card
    pub emoji: String,
    /// Cosmetic color tag
    pub color: ColorTag,
    /// Optional savings target, must be finite and positive when present
    pub target_amount: Option<f64>,
}

impl Jar {
    /// Builds a full record from a draft and a freshly generated id.
    #[must_use]
    pub fn from_draft(id: String, draft: JarDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            percentage: draft.percentage,
            emoji: draft.emoji,
            color: draft.color,
            current_amount: 0.0,
            target_amount: draft.target_amount,
        }
    }
}
