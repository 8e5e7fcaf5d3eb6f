//! Account API - account management over PostgreSQL
//!
//! # Modules
//!
//! - [`account`] - Account model, store adapters and repository
//! - [`db`] - PostgreSQL pool bootstrap
//! - [`gateway`] - axum routes and handlers
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod account;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use account::{
    Account, AccountError, AccountRepository, AccountStore, ConsistencyMode,
    InMemoryAccountStore, PgAccountStore, UpdatedAccount,
};
pub use config::AppConfig;
pub use db::Database;
