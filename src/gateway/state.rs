use std::sync::Arc;

use crate::account::AccountRepository;

/// Shared gateway state. Holds no mutable data; every request works
/// through the repository and the store's own connection scoping.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountRepository>,
}

impl AppState {
    pub fn new(accounts: Arc<AccountRepository>) -> Self {
        Self { accounts }
    }
}
