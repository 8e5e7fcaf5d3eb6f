//! Account Error Types

use thiserror::Error;

/// Failure reported by a store adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Outcome kinds of the account repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Connection could not be acquired or a statement failed.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// No row matches the requested (customer, account) pair.
    #[error("Account not found")]
    NotFound,

    /// The looked-up row's own key disagrees with the requested key.
    #[error("Account identity mismatch")]
    IdentityMismatch,
}

impl AccountError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            AccountError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            AccountError::NotFound => "ACCOUNT_NOT_FOUND",
            AccountError::IdentityMismatch => "IDENTITY_MISMATCH",
        }
    }

    /// Get HTTP status code suggestion
    /// The store answered and the request was turned down.
    pub fn is_refusal(&self) -> bool {
        matches!(self, AccountError::NotFound | AccountError::IdentityMismatch)
    }

    pub fn http_status(&self) -> u16 {
        match self {
            AccountError::IdentityMismatch => 400,
            AccountError::NotFound => 404,
            AccountError::StoreUnavailable(_) => 500,
        }
    }
}

impl From<StoreError> for AccountError {
    fn from(e: StoreError) -> Self {
        AccountError::StoreUnavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AccountError::NotFound.code(), "ACCOUNT_NOT_FOUND");
        assert_eq!(AccountError::IdentityMismatch.code(), "IDENTITY_MISMATCH");
        assert_eq!(
            AccountError::StoreUnavailable("x".into()).code(),
            "STORE_UNAVAILABLE"
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(AccountError::NotFound.http_status(), 404);
        assert_eq!(AccountError::IdentityMismatch.http_status(), 400);
        assert_eq!(AccountError::StoreUnavailable("x".into()).http_status(), 500);
    }

    #[test]
    fn test_refusal_excludes_store_failures() {
        assert!(AccountError::NotFound.is_refusal());
        assert!(AccountError::IdentityMismatch.is_refusal());
        assert!(!AccountError::StoreUnavailable("x".into()).is_refusal());
    }

    #[test]
    fn test_store_error_becomes_unavailable() {
        let err: AccountError = StoreError::Unavailable("connection refused".into()).into();
        assert!(matches!(err, AccountError::StoreUnavailable(ref m) if m.contains("connection refused")));

        let err: AccountError = StoreError::from(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, AccountError::StoreUnavailable(_)));
    }
}
