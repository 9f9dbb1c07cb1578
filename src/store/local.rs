//! Local keyed-blob store.
//!
//! Persists each entity collection as one independent JSON blob in a data
//! directory: `expenses.json`, `debts.json`, `jars.json`, `incomes.json`,
//! and `bank_accounts.json`, each holding a serialized array. Field names
//! are camelCase and dates ISO-8601 strings, re-hydrated to calendar
//! timestamps on load. A missing blob reads as an empty collection.

use crate::entities::{BankAccount, Debt, Expense, Income, Jar};
use crate::errors::{Error, Result};
use crate::store::Store;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const EXPENSES_BLOB: &str = "expenses.json";
const DEBTS_BLOB: &str = "debts.json";
const JARS_BLOB: &str = "jars.json";
const INCOMES_BLOB: &str = "incomes.json";
const BANK_ACCOUNTS_BLOB: &str = "bank_accounts.json";

/// Store implementation backed by JSON blob files in a local directory.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Opens the store rooted at `dir`, creating the directory if needed.
    pub fn open<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn read_blob<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents).map_err(Into::into)
    }

    fn write_blob<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(self.dir.join(name), json)?;
        debug!(blob = name, count = records.len(), "wrote blob");
        Ok(())
    }
}

#[async_trait]
impl Store for LocalStore {
    async fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.read_blob(EXPENSES_BLOB)
    }

    async fn create_expense(&self, expense: &Expense) -> Result<()> {
        let mut expenses: Vec<Expense> = self.read_blob(EXPENSES_BLOB)?;
        // newest first
        expenses.insert(0, expense.clone());
        self.write_blob(EXPENSES_BLOB, &expenses)
    }

    async fn update_expense(&self, expense: &Expense) -> Result<()> {
        let mut expenses: Vec<Expense> = self.read_blob(EXPENSES_BLOB)?;
        let slot = expenses
            .iter_mut()
            .find(|e| e.id == expense.id)
            .ok_or_else(|| Error::NotFound {
                entity: "expense",
                id: expense.id.clone(),
            })?;
        *slot = expense.clone();
        self.write_blob(EXPENSES_BLOB, &expenses)
    }

    async fn delete_expense(&self, id: &str) -> Result<()> {
        let mut expenses: Vec<Expense> = self.read_blob(EXPENSES_BLOB)?;
        expenses.retain(|e| e.id != id);
        self.write_blob(EXPENSES_BLOB, &expenses)
    }

    async fn list_debts(&self) -> Result<Vec<Debt>> {
        self.read_blob(DEBTS_BLOB)
    }

    async fn create_debt(&self, debt: &Debt) -> Result<()> {
        let mut debts: Vec<Debt> = self.read_blob(DEBTS_BLOB)?;
        debts.push(debt.clone());
        self.write_blob(DEBTS_BLOB, &debts)
    }

    async fn update_debt(&self, debt: &Debt) -> Result<()> {
        let mut debts: Vec<Debt> = self.read_blob(DEBTS_BLOB)?;
        let slot = debts
            .iter_mut()
            .find(|d| d.id == debt.id)
            .ok_or_else(|| Error::NotFound {
                entity: "debt",
                id: debt.id.clone(),
            })?;
        *slot = debt.clone();
        self.write_blob(DEBTS_BLOB, &debts)
    }

    async fn delete_debt(&self, id: &str) -> Result<()> {
        let mut debts: Vec<Debt> = self.read_blob(DEBTS_BLOB)?;
        debts.retain(|d| d.id != id);
        self.write_blob(DEBTS_BLOB, &debts)
    }

    async fn list_jars(&self) -> Result<Vec<Jar>> {
        self.read_blob(JARS_BLOB)
    }

    async fn replace_jars(&self, jars: &[Jar]) -> Result<()> {
        self.write_blob(JARS_BLOB, jars)
    }

    async fn list_incomes(&self) -> Result<Vec<Income>> {
        self.read_blob(INCOMES_BLOB)
    }

    async fn replace_incomes(&self, incomes: &[Income]) -> Result<()> {
        self.write_blob(INCOMES_BLOB, incomes)
    }

    async fn list_bank_accounts(&self) -> Result<Vec<BankAccount>> {
        self.read_blob(BANK_ACCOUNTS_BLOB)
    }

    async fn replace_bank_accounts(&self, accounts: &[BankAccount]) -> Result<()> {
        self.write_blob(BANK_ACCOUNTS_BLOB, accounts)
    }
}
