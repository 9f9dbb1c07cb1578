//! Bank account entity - a grouping of jars under one account.
//!
//! Accounts are stored and listed so the data round-trips through every
//! store backend, but reconciling `balance` against jar contents is
//! deliberately not implemented.

use serde::{Deserialize, Serialize};

/// A bank account holding one or more jars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Jars grouped under this account
    #[serde(default)]
    pub jar_ids: Vec<String>,
    /// Last known account balance
    pub balance: f64,
}
