//! Wire DTOs for the remote backend.
//!
//! The backend speaks snake_case JSON with string-encoded enums and dates;
//! the domain types use camelCase blobs and typed fields. The mapping
//! between the two lives here, explicitly and in full: every field of
//! every record is converted in both directions, and malformed wire values
//! surface as [`Error::Decode`] instead of silently defaulting.

use crate::entities::{BankAccount, Debt, Expense, Income, Jar};
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn parse_date(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| Error::Decode {
            field,
            message: format!("{value:?}: {e}"),
        })
}

/// Expense row as the backend serves it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireExpense {
    /// Record id
    pub id: String,
    /// Display name
    pub name: String,
    /// Amount spent
    pub amount: f64,
    /// Category reference
    pub category_id: String,
    /// Optional sub-category reference
    #[serde(default)]
    pub sub_category_id: Option<String>,
    /// ISO-8601 timestamp
    pub date: String,
    /// Color tag name
    pub color: String,
    /// Optional note
    #[serde(default)]
    pub note: Option<String>,
    /// Optional custom icon reference
    #[serde(default)]
    pub custom_icon: Option<String>,
}

impl From<&Expense> for WireExpense {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.clone(),
            name: expense.name.clone(),
            amount: expense.amount,
            category_id: expense.category_id.clone(),
            sub_category_id: expense.sub_category_id.clone(),
            date: expense.date.to_rfc3339(),
            color: expense.color.as_str().to_string(),
            note: expense.note.clone(),
            custom_icon: expense.custom_icon.clone(),
        }
    }
}

impl TryFrom<WireExpense> for Expense {
    type Error = Error;

    fn try_from(wire: WireExpense) -> Result<Self> {
        Ok(Self {
            date: parse_date("date", &wire.date)?,
            color: wire.color.parse()?,
            id: wire.id,
            name: wire.name,
            amount: wire.amount,
            category_id: wire.category_id,
            sub_category_id: wire.sub_category_id,
            note: wire.note,
            custom_icon: wire.custom_icon,
        })
    }
}

/// Debt row as the backend serves it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireDebt {
    /// Record id
    pub id: String,
    /// Display name
    pub name: String,
    /// Emoji or glyph
    pub icon: String,
    /// Full amount owed
    pub total_amount: f64,
    /// Amount paid off so far
    pub paid_amount: f64,
    /// Color tag name
    pub color: String,
    /// Optional custom icon reference
    #[serde(default)]
    pub custom_icon: Option<String>,
}

impl From<&Debt> for WireDebt {
    fn from(debt: &Debt) -> Self {
        Self {
            id: debt.id.clone(),
            name: debt.name.clone(),
            icon: debt.icon.clone(),
            total_amount: debt.total_amount,
            paid_amount: debt.paid_amount,
            color: debt.color.as_str().to_string(),
            custom_icon: debt.custom_icon.clone(),
        }
    }
}

impl TryFrom<WireDebt> for Debt {
    type Error = Error;

    fn try_from(wire: WireDebt) -> Result<Self> {
        Ok(Self {
            color: wire.color.parse()?,
            id: wire.id,
            name: wire.name,
            icon: wire.icon,
            total_amount: wire.total_amount,
            paid_amount: wire.paid_amount,
            custom_icon: wire.custom_icon,
        })
    }
}

/// Jar row as the backend serves it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireJar {
    /// Record id
    pub id: String,
    /// Display name
    pub name: String,
    /// What the jar is for
    pub description: String,
    /// Share of regular income
    pub percentage: f64,
    /// Emoji shown on the jar card
    pub emoji: String,
    /// Color tag name
    pub color: String,
    /// Amount saved so far
    pub current_amount: f64,
    /// Optional savings target
    #[serde(default)]
    pub target_amount: Option<f64>,
}

impl From<&Jar> for WireJar {
    fn from(jar: &Jar) -> Self {
        Self {
            id: jar.id.clone(),
            name: jar.name.clone(),
            description: jar.description.clone(),
            percentage: jar.percentage,
            emoji: jar.emoji.clone(),
            color: jar.color.as_str().to_string(),
            current_amount: jar.current_amount,
            target_amount: jar.target_amount,
        }
    }
}

impl TryFrom<WireJar> for Jar {
    type Error = Error;

    fn try_from(wire: WireJar) -> Result<Self> {
        Ok(Self {
            color: wire.color.parse()?,
            id: wire.id,
            name: wire.name,
            description: wire.description,
            percentage: wire.percentage,
            emoji: wire.emoji,
            current_amount: wire.current_amount,
            target_amount: wire.target_amount,
        })
    }
}

/// Income row as the backend serves it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireIncome {
    /// Record id
    pub id: String,
    /// Display name
    pub name: String,
    /// Amount received
    pub amount: f64,
    /// `regular` or `irregular`
    #[serde(rename = "type")]
    pub kind: String,
    /// ISO-8601 timestamp
    pub date: String,
}

impl From<&Income> for WireIncome {
    fn from(income: &Income) -> Self {
        Self {
            id: income.id.clone(),
            name: income.name.clone(),
            amount: income.amount,
            kind: income.kind.as_str().to_string(),
            date: income.date.to_rfc3339(),
        }
    }
}

impl TryFrom<WireIncome> for Income {
    type Error = Error;

    fn try_from(wire: WireIncome) -> Result<Self> {
        Ok(Self {
            kind: wire.kind.parse()?,
            date: parse_date("date", &wire.date)?,
            id: wire.id,
            name: wire.name,
            amount: wire.amount,
        })
    }
}

/// Bank account row as the backend serves it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireBankAccount {
    /// Record id
    pub id: String,
    /// Display name
    pub name: String,
    /// Jars grouped under the account
    #[serde(default)]
    pub jar_ids: Vec<String>,
    /// Last known balance
    pub balance: f64,
}

impl From<&BankAccount> for WireBankAccount {
    fn from(account: &BankAccount) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            jar_ids: account.jar_ids.clone(),
            balance: account.balance,
        }
    }
}

impl From<WireBankAccount> for BankAccount {
    fn from(wire: WireBankAccount) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            jar_ids: wire.jar_ids,
            balance: wire.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::{ColorTag, IncomeKind};
    use crate::test_utils::{debt_with, expense_on, income_of, jar_with_target};

    #[test]
    fn test_expense_to_wire_covers_every_field() {
        let mut expense = expense_on("lunch", 120.0, "food", 2025, 1, 15);
        expense.sub_category_id = Some("daily-food".to_string());
        expense.color = ColorTag::Mint;
        expense.note = Some("team outing".to_string());
        expense.custom_icon = Some("icons/noodles.png".to_string());

        let wire = WireExpense::from(&expense);
        assert_eq!(wire.id, expense.id);
        assert_eq!(wire.name, "lunch");
        assert_eq!(wire.amount, 120.0);
        assert_eq!(wire.category_id, "food");
        assert_eq!(wire.sub_category_id.as_deref(), Some("daily-food"));
        assert_eq!(wire.date, "2025-01-15T12:00:00+00:00");
        assert_eq!(wire.color, "mint");
        assert_eq!(wire.note.as_deref(), Some("team outing"));
        assert_eq!(wire.custom_icon.as_deref(), Some("icons/noodles.png"));
    }

    #[test]
    fn test_expense_from_wire_covers_every_field() {
        let wire = WireExpense {
            id: "e-1".to_string(),
            name: "lunch".to_string(),
            amount: 120.0,
            category_id: "food".to_string(),
            sub_category_id: Some("daily-food".to_string()),
            date: "2025-01-15T12:00:00Z".to_string(),
            color: "blue".to_string(),
            note: None,
            custom_icon: None,
        };

        let expense = Expense::try_from(wire).unwrap();
        assert_eq!(expense.id, "e-1");
        assert_eq!(expense.name, "lunch");
        assert_eq!(expense.amount, 120.0);
        assert_eq!(expense.category_id, "food");
        assert_eq!(expense.sub_category_id.as_deref(), Some("daily-food"));
        assert_eq!(expense.date.to_rfc3339(), "2025-01-15T12:00:00+00:00");
        assert_eq!(expense.color, ColorTag::Blue);
        assert_eq!(expense.note, None);
        assert_eq!(expense.custom_icon, None);
    }

    #[test]
    fn test_expense_wire_rejects_unknown_color() {
        let mut wire = WireExpense::from(&expense_on("lunch", 120.0, "food", 2025, 1, 15));
        wire.color = "chartreuse".to_string();

        let err = Expense::try_from(wire).unwrap_err();
        assert!(matches!(err, Error::Decode { field: "color", .. }));
    }

    #[test]
    fn test_expense_wire_rejects_malformed_date() {
        let mut wire = WireExpense::from(&expense_on("lunch", 120.0, "food", 2025, 1, 15));
        wire.date = "15/01/2025".to_string();

        let err = Expense::try_from(wire).unwrap_err();
        assert!(matches!(err, Error::Decode { field: "date", .. }));
    }

    #[test]
    fn test_debt_maps_both_directions() {
        let mut debt = debt_with("Car loan", 10_000.0, 3000.0);
        debt.custom_icon = Some("icons/car.png".to_string());

        let wire = WireDebt::from(&debt);
        assert_eq!(wire.id, debt.id);
        assert_eq!(wire.name, "Car loan");
        assert_eq!(wire.icon, debt.icon);
        assert_eq!(wire.total_amount, 10_000.0);
        assert_eq!(wire.paid_amount, 3000.0);
        assert_eq!(wire.color, debt.color.as_str());
        assert_eq!(wire.custom_icon.as_deref(), Some("icons/car.png"));

        let back = Debt::try_from(wire).unwrap();
        assert_eq!(back, debt);
    }

    #[test]
    fn test_jar_maps_both_directions() {
        let jar = jar_with_target("Emergency", 10.0, 2500.0, 10_000.0);

        let wire = WireJar::from(&jar);
        assert_eq!(wire.id, jar.id);
        assert_eq!(wire.name, "Emergency");
        assert_eq!(wire.description, jar.description);
        assert_eq!(wire.percentage, 10.0);
        assert_eq!(wire.emoji, jar.emoji);
        assert_eq!(wire.color, jar.color.as_str());
        assert_eq!(wire.current_amount, 2500.0);
        assert_eq!(wire.target_amount, Some(10_000.0));

        let back = Jar::try_from(wire).unwrap();
        assert_eq!(back, jar);
    }

    #[test]
    fn test_income_maps_both_directions_with_type_field() {
        let income = income_of("Salary", 50_000.0, IncomeKind::Regular);

        let wire = WireIncome::from(&income);
        assert_eq!(wire.id, income.id);
        assert_eq!(wire.name, "Salary");
        assert_eq!(wire.amount, 50_000.0);
        assert_eq!(wire.kind, "regular");
        assert_eq!(wire.date, income.date.to_rfc3339());

        // the backend column is literally named `type`
        let json = serde_json::to_value(&wire).unwrap();
        assert!(json.get("type").is_some());
        assert!(json.get("kind").is_none());

        let back = Income::try_from(wire).unwrap();
        assert_eq!(back, income);
    }

    #[test]
    fn test_income_wire_rejects_unknown_kind() {
        let mut wire = WireIncome::from(&income_of("Salary", 50_000.0, IncomeKind::Regular));
        wire.kind = "windfall".to_string();

        let err = Income::try_from(wire).unwrap_err();
        assert!(matches!(err, Error::Decode { field: "type", .. }));
    }

    #[test]
    fn test_bank_account_maps_both_directions() {
        let account = BankAccount {
            id: "b-1".to_string(),
            name: "Everyday".to_string(),
            jar_ids: vec!["j-1".to_string(), "j-2".to_string()],
            balance: 12_345.0,
        };

        let wire = WireBankAccount::from(&account);
        assert_eq!(wire.id, "b-1");
        assert_eq!(wire.name, "Everyday");
        assert_eq!(wire.jar_ids, vec!["j-1", "j-2"]);
        assert_eq!(wire.balance, 12_345.0);

        let back = BankAccount::from(wire);
        assert_eq!(back, account);
    }
}
