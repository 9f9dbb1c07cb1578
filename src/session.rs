//! Owned application state and the mutation pipeline.
//!
//! A [`Session`] holds the five entity collections plus the static category
//! catalog, loaded once at session start. Every mutation runs the same
//! pipeline: validate the input, send the mutation to the store, await the
//! acknowledgment, then reload every collection and replace the in-memory
//! snapshot wholesale. There is no optimistic local patching; when the
//! store rejects a mutation the snapshot is left exactly as it was and the
//! error propagates to the caller.

use crate::config;
use crate::core::aggregate::{self, CategoryShare};
use crate::core::debt as debt_core;
use crate::core::debt::DebtPortfolio;
use crate::core::jar as jar_core;
use crate::core::jar::JarReport;
use crate::entities::{
    BankAccount, Category, Debt, DebtDraft, Expense, ExpenseDraft, Income, IncomeDraft, Jar,
    JarDraft, new_record_id,
};
use crate::errors::{Error, Result};
use crate::store::Store;
use tracing::{debug, info};

/// The single user's loaded data scope.
pub struct Session<S> {
    store: S,
    categories: Vec<Category>,
    expenses: Vec<Expense>,
    debts: Vec<Debt>,
    jars: Vec<Jar>,
    incomes: Vec<Income>,
    bank_accounts: Vec<BankAccount>,
}

impl<S: Store> Session<S> {
    /// Opens a session over `store` with the built-in category catalog.
    pub async fn start(store: S) -> Result<Self> {
        let categories = config::builtin_catalog()?;
        Self::start_with_catalog(store, categories).await
    }

    /// Opens a session over `store` with an explicit category catalog
    /// (see [`config::catalog`]).
    pub async fn start_with_catalog(store: S, categories: Vec<Category>) -> Result<Self> {
        let mut session = Self {
            store,
            categories,
            expenses: Vec::new(),
            debts: Vec::new(),
            jars: Vec::new(),
            incomes: Vec::new(),
            bank_accounts: Vec::new(),
        };
        session.refresh().await?;
        info!(
            expenses = session.expenses.len(),
            debts = session.debts.len(),
            jars = session.jars.len(),
            "session started"
        );
        Ok(session)
    }

    /// Reloads every collection from the store and replaces the snapshot.
    ///
    /// All five lists are fetched before any of them is swapped in, so a
    /// failing fetch leaves the previous snapshot fully intact.
    pub async fn refresh(&mut self) -> Result<()> {
        let expenses = self.store.list_expenses().await?;
        let debts = self.store.list_debts().await?;
        let jars = self.store.list_jars().await?;
        let incomes = self.store.list_incomes().await?;
        let bank_accounts = self.store.list_bank_accounts().await?;

        self.expenses = expenses;
        self.debts = debts;
        self.jars = jars;
        self.incomes = incomes;
        self.bank_accounts = bank_accounts;
        debug!("session snapshot replaced");
        Ok(())
    }

    // --- snapshot accessors -------------------------------------------------

    /// Loaded expenses, newest first.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Loaded debts.
    #[must_use]
    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    /// Loaded jars.
    #[must_use]
    pub fn jars(&self) -> &[Jar] {
        &self.jars
    }

    /// Loaded income records.
    #[must_use]
    pub fn incomes(&self) -> &[Income] {
        &self.incomes
    }

    /// Loaded bank accounts.
    #[must_use]
    pub fn bank_accounts(&self) -> &[BankAccount] {
        &self.bank_accounts
    }

    /// The static category catalog.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    // --- derived views ------------------------------------------------------

    /// Total spending in the given calendar month.
    #[must_use]
    pub fn monthly_total(&self, month: u32, year: i32) -> f64 {
        aggregate::monthly_total(&self.expenses, month, year)
    }

    /// Total spending in the given calendar year.
    #[must_use]
    pub fn yearly_total(&self, year: i32) -> f64 {
        aggregate::yearly_total(&self.expenses, year)
    }

    /// Category shares of the month, ranked by amount.
    #[must_use]
    pub fn ranked_categories(&self, month: u32, year: i32) -> Vec<CategoryShare> {
        let totals = aggregate::by_category(&self.expenses, month, year);
        aggregate::ranked_categories(&totals, aggregate::monthly_total(&self.expenses, month, year))
    }

    /// Aggregate view over all debts.
    #[must_use]
    pub fn debt_portfolio(&self) -> DebtPortfolio {
        debt_core::portfolio(&self.debts)
    }

    /// Per-jar allocation and progress view models.
    #[must_use]
    pub fn jar_reports(&self) -> Vec<JarReport> {
        let regular = jar_core::regular_income_total(&self.incomes);
        self.jars
            .iter()
            .map(|jar| jar_core::jar_report(jar, regular))
            .collect()
    }

    /// Unallocated share of regular income; negative when over-allocated.
    #[must_use]
    pub fn remaining_allocatable(&self) -> f64 {
        jar_core::remaining_allocatable(&self.jars)
    }

    // --- expense mutations --------------------------------------------------

    /// Creates an expense from a draft and returns its new id.
    pub async fn add_expense(&mut self, draft: ExpenseDraft) -> Result<String> {
        require_name("expense", &draft.name)?;
        require_finite("expense amount", draft.amount)?;
        if draft.amount < 0.0 {
            return Err(Error::Validation {
                message: format!("expense amount cannot be negative, got {}", draft.amount),
            });
        }
        if draft.category_id.trim().is_empty() {
            return Err(Error::Validation {
                message: "expense category cannot be empty".to_string(),
            });
        }

        let expense = Expense::from_draft(new_record_id(), draft);
        debug!(id = %expense.id, "creating expense");
        self.store.create_expense(&expense).await?;
        self.refresh().await?;
        Ok(expense.id)
    }

    /// Replaces an existing expense wholesale (all fields but the id).
    pub async fn update_expense(&mut self, expense: Expense) -> Result<()> {
        require_name("expense", &expense.name)?;
        require_finite("expense amount", expense.amount)?;
        if expense.amount < 0.0 {
            return Err(Error::Validation {
                message: format!("expense amount cannot be negative, got {}", expense.amount),
            });
        }
        self.store.update_expense(&expense).await?;
        self.refresh().await
    }

    /// Removes an expense by id.
    pub async fn remove_expense(&mut self, id: &str) -> Result<()> {
        self.store.delete_expense(id).await?;
        self.refresh().await
    }

    // --- debt mutations -----------------------------------------------------

    /// Creates a debt from a draft (nothing paid yet) and returns its id.
    pub async fn add_debt(&mut self, draft: DebtDraft) -> Result<String> {
        require_name("debt", &draft.name)?;
        require_finite("debt total", draft.total_amount)?;
        if draft.total_amount <= 0.0 {
            return Err(Error::Validation {
                message: format!("debt total must be positive, got {}", draft.total_amount),
            });
        }

        let debt = Debt::from_draft(new_record_id(), draft);
        debug!(id = %debt.id, "creating debt");
        self.store.create_debt(&debt).await?;
        self.refresh().await?;
        Ok(debt.id)
    }

    /// Replaces an existing debt wholesale. `paid_amount` is clamped back
    /// into `[0, total_amount]` rather than rejected.
    pub async fn update_debt(&mut self, mut debt: Debt) -> Result<()> {
        require_name("debt", &debt.name)?;
        require_finite("debt total", debt.total_amount)?;
        require_finite("debt paid amount", debt.paid_amount)?;
        if debt.total_amount <= 0.0 {
            return Err(Error::Validation {
                message: format!("debt total must be positive, got {}", debt.total_amount),
            });
        }
        debt.paid_amount = debt.paid_amount.clamp(0.0, debt.total_amount);

        self.store.update_debt(&debt).await?;
        self.refresh().await
    }

    /// Applies a payment delta to a debt, clamped into `[0, total_amount]`.
    /// Positive deltas record payments, negative deltas reverse them.
    pub async fn record_debt_payment(&mut self, id: &str, delta: f64) -> Result<()> {
        require_finite("payment delta", delta)?;
        let debt = self
            .debts
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| Error::NotFound {
                entity: "debt",
                id: id.to_string(),
            })?;

        let updated = debt_core::apply_payment(debt, delta);
        debug!(id, delta, paid = updated.paid_amount, "recording debt payment");
        self.store.update_debt(&updated).await?;
        self.refresh().await
    }

    /// Removes a debt by id.
    pub async fn remove_debt(&mut self, id: &str) -> Result<()> {
        self.store.delete_debt(id).await?;
        self.refresh().await
    }

    // --- jar mutations ------------------------------------------------------

    /// Creates a jar from a draft and returns its new id.
    pub async fn add_jar(&mut self, draft: JarDraft) -> Result<String> {
        validate_jar_fields(&draft.name, draft.percentage, draft.target_amount)?;

        let jar = Jar::from_draft(new_record_id(), draft);
        let id = jar.id.clone();
        let mut jars = self.jars.clone();
        jars.push(jar);
        self.store.replace_jars(&jars).await?;
        self.refresh().await?;
        Ok(id)
    }

    /// Replaces an existing jar wholesale.
    pub async fn update_jar(&mut self, jar: Jar) -> Result<()> {
        validate_jar_fields(&jar.name, jar.percentage, jar.target_amount)?;

        let mut jars = self.jars.clone();
        let slot = jars
            .iter_mut()
            .find(|j| j.id == jar.id)
            .ok_or_else(|| Error::NotFound {
                entity: "jar",
                id: jar.id.clone(),
            })?;
        *slot = jar;
        self.store.replace_jars(&jars).await?;
        self.refresh().await
    }

    /// Removes a jar by id.
    pub async fn remove_jar(&mut self, id: &str) -> Result<()> {
        let jars: Vec<Jar> = self.jars.iter().filter(|j| j.id != id).cloned().collect();
        self.store.replace_jars(&jars).await?;
        self.refresh().await
    }

    /// Seeds the six canonical jars. Only valid while the jar list is
    /// empty: the preset replaces the collection wholesale, so applying it
    /// over existing jars would silently discard them.
    pub async fn apply_default_preset(&mut self) -> Result<()> {
        if !self.jars.is_empty() {
            return Err(Error::Validation {
                message: "the default jar preset can only be applied to an empty jar list"
                    .to_string(),
            });
        }

        let preset = jar_core::default_preset();
        info!(jars = preset.len(), "applying default jar preset");
        self.store.replace_jars(&preset).await?;
        self.refresh().await
    }

    // --- income mutations ---------------------------------------------------

    /// Creates an income record from a draft and returns its new id.
    pub async fn add_income(&mut self, draft: IncomeDraft) -> Result<String> {
        require_name("income", &draft.name)?;
        require_finite("income amount", draft.amount)?;
        if draft.amount <= 0.0 {
            return Err(Error::Validation {
                message: format!("income amount must be positive, got {}", draft.amount),
            });
        }

        let income = Income::from_draft(new_record_id(), draft);
        let id = income.id.clone();
        let mut incomes = self.incomes.clone();
        incomes.push(income);
        self.store.replace_incomes(&incomes).await?;
        self.refresh().await?;
        Ok(id)
    }

    /// Removes an income record by id.
    pub async fn remove_income(&mut self, id: &str) -> Result<()> {
        let incomes: Vec<Income> = self.incomes.iter().filter(|i| i.id != id).cloned().collect();
        self.store.replace_incomes(&incomes).await?;
        self.refresh().await
    }

    // --- bank account mutations ---------------------------------------------

    /// Replaces the bank account collection wholesale.
    pub async fn replace_bank_accounts(&mut self, accounts: Vec<BankAccount>) -> Result<()> {
        self.store.replace_bank_accounts(&accounts).await?;
        self.refresh().await
    }
}

fn require_name(entity: &'static str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: format!("{entity} name cannot be empty"),
        });
    }
    Ok(())
}

fn require_finite(label: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::Validation {
            message: format!("{label} must be a finite number, got {value}"),
        });
    }
    Ok(())
}

fn validate_jar_fields(name: &str, percentage: f64, target_amount: Option<f64>) -> Result<()> {
    require_name("jar", name)?;
    require_finite("jar percentage", percentage)?;
    if !(0.0..=100.0).contains(&percentage) {
        return Err(Error::Validation {
            message: format!("jar percentage must be within [0, 100], got {percentage}"),
        });
    }
    if let Some(target) = target_amount {
        require_finite("jar target", target)?;
        if target <= 0.0 {
            return Err(Error::Validation {
                message: format!("jar target must be positive, got {target}"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::jar::total_allocated_percentage;
    use crate::entities::IncomeKind;
    use crate::store::LocalStore;
    use crate::test_utils::{debt_draft, expense_draft, income_draft, jar_draft};

    async fn session_in(dir: &tempfile::TempDir) -> Session<LocalStore> {
        let store = LocalStore::open(dir.path()).unwrap();
        Session::start(store).await.unwrap()
    }

    #[tokio::test]
    async fn test_start_loads_catalog_and_empty_collections() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let session = session_in(&dir).await;

        assert!(session.expenses().is_empty());
        assert!(session.debts().is_empty());
        assert_eq!(session.categories().len(), 13);
        assert!(session.category("food").is_some());
        assert!(session.category("nonexistent").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_add_expense_persists_and_reloads() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        let id = session
            .add_expense(expense_draft("lunch", 120.0, "food"))
            .await?;
        session
            .add_expense(expense_draft("fuel", 600.0, "transport"))
            .await?;

        // newest first, snapshot reloaded from the store
        assert_eq!(session.expenses().len(), 2);
        assert_eq!(session.expenses()[0].name, "fuel");
        assert_eq!(session.expenses()[1].id, id);

        // a second session over the same directory sees the same records
        let rejoined = session_in(&dir).await;
        assert_eq!(rejoined.expenses().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_expense_rejects_invalid_drafts() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        let empty_name = session.add_expense(expense_draft("  ", 120.0, "food")).await;
        assert!(matches!(empty_name.unwrap_err(), Error::Validation { .. }));

        let negative = session.add_expense(expense_draft("lunch", -5.0, "food")).await;
        assert!(matches!(negative.unwrap_err(), Error::Validation { .. }));

        let no_category = session.add_expense(expense_draft("lunch", 120.0, "")).await;
        assert!(matches!(no_category.unwrap_err(), Error::Validation { .. }));

        assert!(session.expenses().is_empty());
    }

    #[tokio::test]
    async fn test_remove_expense_drops_record() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        let id = session
            .add_expense(expense_draft("lunch", 120.0, "food"))
            .await?;
        session.remove_expense(&id).await?;
        assert!(session.expenses().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_record_debt_payment_clamps_into_range() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        let id = session.add_debt(debt_draft("Car loan", 10_000.0)).await?;

        session.record_debt_payment(&id, 3000.0).await?;
        assert_eq!(session.debts()[0].paid_amount, 3000.0);

        session.record_debt_payment(&id, 500.0).await?;
        assert_eq!(session.debts()[0].paid_amount, 3500.0);

        // exceeding the remaining 6500 clamps to the total, not 11500
        session.record_debt_payment(&id, 8000.0).await?;
        assert_eq!(session.debts()[0].paid_amount, 10_000.0);

        session.record_debt_payment(&id, -20_000.0).await?;
        assert_eq!(session.debts()[0].paid_amount, 0.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_record_debt_payment_unknown_debt() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        let result = session.record_debt_payment("missing", 100.0).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "debt", .. }
        ));
    }

    #[tokio::test]
    async fn test_apply_default_preset_requires_empty_jar_list() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        session.apply_default_preset().await?;
        assert_eq!(session.jars().len(), 6);
        assert_eq!(total_allocated_percentage(session.jars()), 100.0);

        let again = session.apply_default_preset().await;
        assert!(matches!(again.unwrap_err(), Error::Validation { .. }));
        assert_eq!(session.jars().len(), 6);
        Ok(())
    }

    #[tokio::test]
    async fn test_jar_lifecycle_and_allocation_views() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        session
            .add_income(income_draft("Salary", 50_000.0, IncomeKind::Regular))
            .await?;
        let id = session.add_jar(jar_draft("Education", 20.0)).await?;

        assert_eq!(session.remaining_allocatable(), 80.0);
        let reports = session.jar_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].jar_id, id);
        assert_eq!(reports[0].allocated_amount, 10_000.0);
        assert_eq!(reports[0].progress, None);

        session.remove_jar(&id).await?;
        assert!(session.jars().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_add_jar_rejects_out_of_range_percentage() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        let result = session.add_jar(jar_draft("Greedy", 130.0)).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_jar_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        let ghost = Jar::from_draft("ghost".to_string(), jar_draft("Ghost", 10.0));
        let result = session.update_jar(ghost).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "jar", .. }
        ));
    }

    #[tokio::test]
    async fn test_income_add_and_remove() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        let id = session
            .add_income(income_draft("Bonus", 15_000.0, IncomeKind::Irregular))
            .await?;
        assert_eq!(session.incomes().len(), 1);

        let rejected = session
            .add_income(income_draft("Nothing", 0.0, IncomeKind::Regular))
            .await;
        assert!(matches!(rejected.unwrap_err(), Error::Validation { .. }));

        session.remove_income(&id).await?;
        assert!(session.incomes().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_monthly_views_delegate_to_engine() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir).await;

        session
            .add_expense(expense_draft("lunch", 500.0, "food"))
            .await?;
        session
            .add_expense(expense_draft("groceries", 300.0, "food"))
            .await?;
        session
            .add_expense(expense_draft("fuel", 200.0, "transport"))
            .await?;

        assert_eq!(session.monthly_total(1, 2025), 1000.0);
        let ranked = session.ranked_categories(1, 2025);
        assert_eq!(ranked[0].category_id, "food");
        assert_eq!(ranked[0].amount, 800.0);
        assert_eq!(ranked[1].category_id, "transport");
        Ok(())
    }
}
