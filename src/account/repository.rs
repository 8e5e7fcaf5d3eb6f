//! Account repository
//!
//! Maps account operations onto store statements, generates account ids and
//! enforces the identity guard on updates. It is the only writer of the
//! `accounts` table.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::AccountError;
use super::models::{Account, UpdatedAccount};
use super::store::{AccountStore, LockedUpdate};

pub type AccountResult<T> = Result<T, AccountError>;

/// How `update_balance` talks to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyMode {
    /// Lookup and update are two independent statements. A concurrent delete
    /// between them makes the update touch zero rows, and concurrent updates
    /// are last-writer-wins.
    #[default]
    TwoStep,
    /// Lookup, guard and update share one transaction holding the row lock.
    Transactional,
}

pub struct AccountRepository {
    store: Arc<dyn AccountStore>,
    mode: ConsistencyMode,
}

impl AccountRepository {
    pub fn new(store: Arc<dyn AccountStore>, mode: ConsistencyMode) -> Self {
        Self { store, mode }
    }

    pub fn store(&self) -> &Arc<dyn AccountStore> {
        &self.store
    }

    /// Create an account with a freshly generated id and return the row as
    /// the store persisted it. Inputs are stored as given.
    pub async fn create(
        &self,
        customer_id: &str,
        balance: Decimal,
        currency: &str,
    ) -> AccountResult<Account> {
        let account = Account {
            customer_id: customer_id.to_string(),
            account_id: Uuid::new_v4().to_string(),
            balance,
            currency: currency.to_string(),
        };

        let stored = self.store.insert(&account).await?;
        tracing::info!(
            customer_id = %stored.customer_id,
            account_id = %stored.account_id,
            store = self.store.name(),
            "account created"
        );
        Ok(stored)
    }

    pub async fn list_all(&self) -> AccountResult<Vec<Account>> {
        Ok(self.store.select_all().await?)
    }

    pub async fn list_by_customer(&self, customer_id: &str) -> AccountResult<Vec<Account>> {
        Ok(self.store.select_by_customer(customer_id).await?)
    }

    /// Replace balance and currency of the account keyed by
    /// `(customer_id, account_id)`.
    ///
    /// The row found by the lookup must carry exactly the requested key,
    /// otherwise the call fails with `IdentityMismatch` before any write.
    pub async fn update_balance(
        &self,
        customer_id: &str,
        account_id: &str,
        balance: Decimal,
        currency: &str,
    ) -> AccountResult<UpdatedAccount> {
        match self.mode {
            ConsistencyMode::TwoStep => {
                self.update_two_step(customer_id, account_id, balance, currency)
                    .await
            }
            ConsistencyMode::Transactional => {
                self.update_transactional(customer_id, account_id, balance, currency)
                    .await
            }
        }
    }

    async fn update_two_step(
        &self,
        customer_id: &str,
        account_id: &str,
        balance: Decimal,
        currency: &str,
    ) -> AccountResult<UpdatedAccount> {
        let row = self
            .store
            .select_by_key(customer_id, account_id)
            .await?
            .ok_or(AccountError::NotFound)?;

        // Redundant with the lookup predicate; guards against store anomalies.
        if !row.has_key(customer_id, account_id) {
            return Err(identity_mismatch(customer_id, account_id, &row));
        }

        // Keyed by the row's own identifiers.
        let rows_affected = self
            .store
            .update_by_key(&row.customer_id, &row.account_id, balance, currency)
            .await?;

        if rows_affected == 0 {
            tracing::warn!(
                customer_id = %row.customer_id,
                account_id = %row.account_id,
                "account vanished between lookup and update"
            );
            // Nothing was written; report the row as last seen.
            return Ok(UpdatedAccount {
                account: row,
                rows_affected,
            });
        }

        tracing::info!(
            customer_id = %row.customer_id,
            account_id = %row.account_id,
            rows_affected,
            "account balance updated"
        );
        Ok(UpdatedAccount {
            account: Account {
                balance,
                currency: currency.to_string(),
                ..row
            },
            rows_affected,
        })
    }

    async fn update_transactional(
        &self,
        customer_id: &str,
        account_id: &str,
        balance: Decimal,
        currency: &str,
    ) -> AccountResult<UpdatedAccount> {
        let guard = |row: &Account| row.has_key(customer_id, account_id);

        match self
            .store
            .update_locked(customer_id, account_id, balance, currency, &guard)
            .await?
        {
            LockedUpdate::Missing => Err(AccountError::NotFound),
            LockedUpdate::Rejected(row) => Err(identity_mismatch(customer_id, account_id, &row)),
            LockedUpdate::Updated(account) => {
                tracing::info!(
                    customer_id = %account.customer_id,
                    account_id = %account.account_id,
                    "account balance updated"
                );
                Ok(UpdatedAccount {
                    account,
                    rows_affected: 1,
                })
            }
        }
    }

    /// Remove the account if present. Succeeds whether or not a row matched.
    pub async fn delete(&self, customer_id: &str, account_id: &str) -> AccountResult<()> {
        let rows_affected = self.store.delete_by_key(customer_id, account_id).await?;
        tracing::info!(customer_id, account_id, rows_affected, "account delete");
        Ok(())
    }
}

fn identity_mismatch(customer_id: &str, account_id: &str, row: &Account) -> AccountError {
    tracing::warn!(
        requested_customer_id = customer_id,
        requested_account_id = account_id,
        row_customer_id = %row.customer_id,
        row_account_id = %row.account_id,
        "lookup returned a row with a different key"
    );
    AccountError::IdentityMismatch
}
