//! Data models for account management

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A customer's account as stored in the `accounts` table.
///
/// `customer_id` and `account_id` never change after creation; only
/// `balance` and `currency` are mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[schema(example = "cust-1")]
    pub customer_id: String,
    #[schema(example = "5f0c6a4e-9a43-4c4b-8d67-2a1c3f7b9e10")]
    pub account_id: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 100)]
    pub balance: Decimal,
    #[schema(example = "USD")]
    pub currency: String,
}

impl Account {
    /// True when this row's own key is exactly `(customer_id, account_id)`.
    pub fn has_key(&self, customer_id: &str, account_id: &str) -> bool {
        self.customer_id == customer_id && self.account_id == account_id
    }
}

/// Result of a successful balance/currency update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedAccount {
    #[serde(flatten)]
    pub account: Account,
    /// Rows the store reported as changed. Zero means the row vanished
    /// between lookup and update.
    #[schema(example = 1)]
    pub rows_affected: u64,
}
