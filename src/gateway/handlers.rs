//! HTTP handlers
//!
//! - [`account`]: account CRUD routes
//! - [`health`]: liveness with store ping

pub mod account;
pub mod health;

pub use account::{
    create_account, delete_account, list_accounts, list_customer_accounts,
    update_account_balance,
};
pub use health::{HealthResponse, health_check};

