//! Account request bodies and presence validation
//!
//! Fields are optional at the serde layer so that a missing field becomes a
//! 400 with a readable message rather than a framework rejection.

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

/// POST /accounts body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[schema(example = "cust-1")]
    pub customer_id: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    #[schema(value_type = Option<f64>, example = 100)]
    pub balance: Option<Decimal>,
    #[schema(example = "USD")]
    pub currency: Option<String>,
}

/// PUT /accounts/customer/{customer_id}/account/{account_id} body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBalanceRequest {
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    #[schema(value_type = Option<f64>, example = 50)]
    pub balance: Option<Decimal>,
    #[schema(example = "EUR")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCreateAccount {
    pub customer_id: String,
    pub balance: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBalanceUpdate {
    pub balance: Decimal,
    pub currency: String,
}

fn required_text(value: Option<String>, field: &str) -> Result<String, String> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(format!("{} is required", field)),
    }
}

fn required_balance(value: Option<Decimal>) -> Result<Decimal, String> {
    value.ok_or_else(|| "balance is required".to_string())
}

impl CreateAccountRequest {
    pub fn validate(self) -> Result<ValidatedCreateAccount, String> {
        Ok(ValidatedCreateAccount {
            customer_id: required_text(self.customer_id, "customerId")?,
            balance: required_balance(self.balance)?,
            currency: required_text(self.currency, "currency")?,
        })
    }
}

impl UpdateBalanceRequest {
    pub fn validate(self) -> Result<ValidatedBalanceUpdate, String> {
        Ok(ValidatedBalanceUpdate {
            balance: required_balance(self.balance)?,
            currency: required_text(self.currency, "currency")?,
        })
    }
}

/// Path segments must be non-empty.
pub fn required_path(value: &str, field: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(())
}
