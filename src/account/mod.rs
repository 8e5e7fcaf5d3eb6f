//! Account management module
//!
//! - [`store`]: statement-level store contract ([`AccountStore`])
//! - [`postgres`] / [`in_memory`]: store implementations
//! - [`repository`]: account lifecycle and identity rules
//! - [`error`]: outcome kinds surfaced to the gateway

pub mod error;
pub mod in_memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod store;

// Re-export commonly used types
pub use error::{AccountError, StoreError};
pub use in_memory::{InMemoryAccountStore, KeyCollation};
pub use models::{Account, UpdatedAccount};
pub use postgres::PgAccountStore;
pub use repository::{AccountRepository, AccountResult, ConsistencyMode};
pub use store::{AccountStore, LockedUpdate, RowGuard, StoreResult};

// Re-export Database from top-level db module
pub use crate::db::Database;
