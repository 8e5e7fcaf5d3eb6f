//! In-memory store adapter
//!
//! Backs tests and the `--in-memory` server mode. Rows live in a
//! `tokio::sync::RwLock<Vec<Account>>`, so every statement is atomic on its
//! own while separate statements interleave freely, like independent SQL
//! statements outside a transaction.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use super::error::StoreError;
use super::models::Account;
use super::store::{AccountStore, LockedUpdate, RowGuard, StoreResult};

/// How key predicates compare text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCollation {
    #[default]
    Exact,
    /// Emulates a case-insensitive column collation.
    CaseInsensitive,
}

impl KeyCollation {
    fn keys_equal(self, stored: &str, requested: &str) -> bool {
        match self {
            KeyCollation::Exact => stored == requested,
            KeyCollation::CaseInsensitive => stored.eq_ignore_ascii_case(requested),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    rows: Arc<RwLock<Vec<Account>>>,
    collation: KeyCollation,
    unavailable: Arc<AtomicBool>,
    update_count: Arc<AtomicUsize>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collation(collation: KeyCollation) -> Self {
        Self {
            collation,
            ..Self::default()
        }
    }

    /// Make every subsequent statement fail as if the connection dropped.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of update statements executed so far.
    pub fn update_count(&self) -> usize {
        self.update_count.load(Ordering::SeqCst)
    }

    /// Insert a row bypassing the repository. Test fixtures only.
    pub async fn seed(&self, account: Account) {
        self.rows.write().await.push(account);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }

    fn matches(&self, row: &Account, customer_id: &str, account_id: &str) -> bool {
        self.collation.keys_equal(&row.customer_id, customer_id)
            && self.collation.keys_equal(&row.account_id, account_id)
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    async fn insert(&self, account: &Account) -> StoreResult<Account> {
        self.check_available()?;
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.account_id == account.account_id) {
            return Err(StoreError::Unavailable(format!(
                "duplicate key value violates unique constraint: account_id={}",
                account.account_id
            )));
        }
        rows.push(account.clone());
        Ok(account.clone())
    }

    async fn select_all(&self) -> StoreResult<Vec<Account>> {
        self.check_available()?;
        Ok(self.rows.read().await.clone())
    }

    async fn select_by_customer(&self, customer_id: &str) -> StoreResult<Vec<Account>> {
        self.check_available()?;
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|r| self.collation.keys_equal(&r.customer_id, customer_id))
            .cloned()
            .collect())
    }

    async fn select_by_key(
        &self,
        customer_id: &str,
        account_id: &str,
    ) -> StoreResult<Option<Account>> {
        self.check_available()?;
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|r| self.matches(r, customer_id, account_id))
            .cloned())
    }

    async fn update_by_key(
        &self,
        customer_id: &str,
        account_id: &str,
        balance: Decimal,
        currency: &str,
    ) -> StoreResult<u64> {
        self.check_available()?;
        self.update_count.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.write().await;
        let mut affected = 0;
        for row in rows
            .iter_mut()
            .filter(|r| self.matches(r, customer_id, account_id))
        {
            row.balance = balance;
            row.currency = currency.to_string();
            affected += 1;
        }
        Ok(affected)
    }

    async fn update_locked(
        &self,
        customer_id: &str,
        account_id: &str,
        balance: Decimal,
        currency: &str,
        guard: RowGuard<'_>,
    ) -> StoreResult<LockedUpdate> {
        self.check_available()?;
        // The write guard is held across lookup, check and update.
        let mut rows = self.rows.write().await;
        let Some(row) = rows
            .iter_mut()
            .find(|r| self.matches(r, customer_id, account_id))
        else {
            return Ok(LockedUpdate::Missing);
        };
        if !guard(&*row) {
            return Ok(LockedUpdate::Rejected(row.clone()));
        }
        self.update_count.fetch_add(1, Ordering::SeqCst);
        row.balance = balance;
        row.currency = currency.to_string();
        Ok(LockedUpdate::Updated(row.clone()))
    }

    async fn delete_by_key(&self, customer_id: &str, account_id: &str) -> StoreResult<u64> {
        self.check_available()?;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| !self.matches(r, customer_id, account_id));
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check_available()
    }
}
