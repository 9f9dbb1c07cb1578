//! Persistence collaborators.
//!
//! The engine never talks to storage directly; it goes through the
//! [`Store`] trait, an opaque record-CRUD collaborator. Two implementations
//! ship with the crate: [`LocalStore`] (keyed JSON blobs on disk) and
//! [`RemoteStore`] (an HTTP backend service). The store is assumed to
//! serialize its own writes; the engine performs no locking.

/// Keyed JSON blob store on the local filesystem
pub mod local;
/// HTTP client for a remote backend service
pub mod remote;
/// Wire DTOs and the explicit snake_case ⇄ domain mapping
pub mod wire;

pub use local::LocalStore;
pub use remote::RemoteStore;

use crate::entities::{BankAccount, Debt, Expense, Income, Jar};
use crate::errors::Result;
use async_trait::async_trait;

/// Record CRUD interface over the five entity collections.
///
/// Expenses and debts mutate record-by-record; jars, incomes, and bank
/// accounts are replaced wholesale (bulk upsert semantics). Every mutation
/// is a discrete, independent operation: callers re-list the collections
/// after each acknowledged write rather than patching local state.
#[async_trait]
pub trait Store: Send + Sync {
    /// Lists all expenses, newest first by convention.
    async fn list_expenses(&self) -> Result<Vec<Expense>>;
    /// Persists a new expense.
    async fn create_expense(&self, expense: &Expense) -> Result<()>;
    /// Replaces the stored expense with the same id.
    async fn update_expense(&self, expense: &Expense) -> Result<()>;
    /// Removes the expense with the given id. Removing an unknown id is a
    /// no-op.
    async fn delete_expense(&self, id: &str) -> Result<()>;

    /// Lists all debts.
    async fn list_debts(&self) -> Result<Vec<Debt>>;
    /// Persists a new debt.
    async fn create_debt(&self, debt: &Debt) -> Result<()>;
    /// Replaces the stored debt with the same id.
    async fn update_debt(&self, debt: &Debt) -> Result<()>;
    /// Removes the debt with the given id. Removing an unknown id is a
    /// no-op.
    async fn delete_debt(&self, id: &str) -> Result<()>;

    /// Lists all jars.
    async fn list_jars(&self) -> Result<Vec<Jar>>;
    /// Replaces the whole jar collection.
    async fn replace_jars(&self, jars: &[Jar]) -> Result<()>;

    /// Lists all income records.
    async fn list_incomes(&self) -> Result<Vec<Income>>;
    /// Replaces the whole income collection.
    async fn replace_incomes(&self, incomes: &[Income]) -> Result<()>;

    /// Lists all bank accounts.
    async fn list_bank_accounts(&self) -> Result<Vec<BankAccount>>;
    /// Replaces the whole bank account collection.
    async fn replace_bank_accounts(&self, accounts: &[BankAccount]) -> Result<()>;
}
