//! Remote backend store.
//!
//! Talks to a backend service exposing the five entity collections as
//! snake_case JSON under `/expenses`, `/debts`, `/jars`, `/incomes`, and
//! `/bank-accounts`. Every mutation is fire-and-acknowledge: a non-success
//! status surfaces as [`Error::Remote`] and nothing is retried. The
//! backend is trusted to serialize concurrent writes itself.

use crate::entities::{BankAccount, Debt, Expense, Income, Jar};
use crate::errors::{Error, Result};
use crate::store::Store;
use crate::store::wire::{WireBankAccount, WireDebt, WireExpense, WireIncome, WireJar};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Store implementation backed by a remote HTTP service.
pub struct RemoteStore {
    client: Client,
    base_url: String,
}

impl RemoteStore {
    /// Creates a client for the backend rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn get_collection<W: DeserializeOwned>(&self, path: &str) -> Result<Vec<W>> {
        let response = self.client.get(self.endpoint(path)).send().await?;
        Ok(expect_success(response).await?.json().await?)
    }

    async fn post_record<W: Serialize + Sync>(&self, path: &str, record: &W) -> Result<()> {
        let response = self.client.post(self.endpoint(path)).json(record).send().await?;
        expect_success(response).await?;
        Ok(())
    }

    async fn put_record<W: Serialize + Sync>(&self, path: &str, record: &W) -> Result<()> {
        let response = self.client.put(self.endpoint(path)).json(record).send().await?;
        expect_success(response).await?;
        Ok(())
    }

    async fn delete_record(&self, path: &str) -> Result<()> {
        let response = self.client.delete(self.endpoint(path)).send().await?;
        expect_success(response).await?;
        Ok(())
    }
}

/// Turns a non-success response into [`Error::Remote`], keeping whatever
/// body the backend sent as the message.
async fn expect_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), "remote store rejected request");
    Err(Error::Remote {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl Store for RemoteStore {
    async fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.get_collection::<WireExpense>("expenses")
            .await?
            .into_iter()
            .map(Expense::try_from)
            .collect()
    }

    async fn create_expense(&self, expense: &Expense) -> Result<()> {
        self.post_record("expenses", &WireExpense::from(expense)).await
    }

    async fn update_expense(&self, expense: &Expense) -> Result<()> {
        let path = format!("expenses/{}", expense.id);
        self.put_record(&path, &WireExpense::from(expense)).await
    }

    async fn delete_expense(&self, id: &str) -> Result<()> {
        self.delete_record(&format!("expenses/{id}")).await
    }

    async fn list_debts(&self) -> Result<Vec<Debt>> {
        self.get_collection::<WireDebt>("debts")
            .await?
            .into_iter()
            .map(Debt::try_from)
            .collect()
    }

    async fn create_debt(&self, debt: &Debt) -> Result<()> {
        self.post_record("debts", &WireDebt::from(debt)).await
    }

    async fn update_debt(&self, debt: &Debt) -> Result<()> {
        let path = format!("debts/{}", debt.id);
        self.put_record(&path, &WireDebt::from(debt)).await
    }

    async fn delete_debt(&self, id: &str) -> Result<()> {
        self.delete_record(&format!("debts/{id}")).await
    }

    async fn list_jars(&self) -> Result<Vec<Jar>> {
        self.get_collection::<WireJar>("jars")
            .await?
            .into_iter()
            .map(Jar::try_from)
            .collect()
    }

    async fn replace_jars(&self, jars: &[Jar]) -> Result<()> {
        let wire: Vec<WireJar> = jars.iter().map(WireJar::from).collect();
        self.put_record("jars", &wire).await
    }

    async fn list_incomes(&self) -> Result<Vec<Income>> {
        self.get_collection::<WireIncome>("incomes")
            .await?
            .into_iter()
            .map(Income::try_from)
            .collect()
    }

    async fn replace_incomes(&self, incomes: &[Income]) -> Result<()> {
        let wire: Vec<WireIncome> = incomes.iter().map(WireIncome::from).collect();
        self.put_record("incomes", &wire).await
    }

    async fn list_bank_accounts(&self) -> Result<Vec<BankAccount>> {
        Ok(self
            .get_collection::<WireBankAccount>("bank-accounts")
            .await?
            .into_iter()
            .map(BankAccount::from)
            .collect())
    }

    async fn replace_bank_accounts(&self, accounts: &[BankAccount]) -> Result<()> {
        let wire: Vec<WireBankAccount> = accounts.iter().map(WireBankAccount::from).collect();
        self.put_record("bank-accounts", &wire).await
    }
}
