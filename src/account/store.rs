//! Store adapter contract
//!
//! A store executes parameterized statements against the `accounts` table and
//! hands back rows or an error. It knows column names, nothing about account
//! identity rules; those live in [`super::repository::AccountRepository`].

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::error::StoreError;
use super::models::Account;

pub type StoreResult<T> = Result<T, StoreError>;

/// Predicate run against a locked row before it is modified.
pub type RowGuard<'a> = &'a (dyn Fn(&Account) -> bool + Send + Sync);

/// Outcome of [`AccountStore::update_locked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockedUpdate {
    /// No row matched the key; nothing was locked.
    Missing,
    /// The guard refused the locked row; the transaction was rolled back.
    Rejected(Account),
    /// The row as stored after the update was committed.
    Updated(Account),
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Store name for logging
    fn name(&self) -> &'static str;

    /// Insert a row and return it as stored.
    async fn insert(&self, account: &Account) -> StoreResult<Account>;

    /// Every row, no ordering guarantee.
    async fn select_all(&self) -> StoreResult<Vec<Account>>;

    /// Rows whose `customer_id` equals `customer_id` exactly.
    async fn select_by_customer(&self, customer_id: &str) -> StoreResult<Vec<Account>>;

    /// The row keyed by `(customer_id, account_id)`, if any.
    async fn select_by_key(
        &self,
        customer_id: &str,
        account_id: &str,
    ) -> StoreResult<Option<Account>>;

    /// Set balance and currency on the keyed row. Returns affected row count.
    async fn update_by_key(
        &self,
        customer_id: &str,
        account_id: &str,
        balance: Decimal,
        currency: &str,
    ) -> StoreResult<u64>;

    /// Look up the keyed row, lock it, and update it only if `guard` accepts
    /// it, all inside one transaction.
    async fn update_locked(
        &self,
        customer_id: &str,
        account_id: &str,
        balance: Decimal,
        currency: &str,
        guard: RowGuard<'_>,
    ) -> StoreResult<LockedUpdate>;

    /// Remove the keyed row. Returns affected row count.
    async fn delete_by_key(&self, customer_id: &str, account_id: &str) -> StoreResult<u64>;

    /// Cheap round trip used by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;
}
