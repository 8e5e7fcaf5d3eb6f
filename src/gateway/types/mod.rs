//! Gateway types module
//!
//! ## Input Types
//! - [`CreateAccountRequest`] / [`UpdateBalanceRequest`]: request bodies
//!   with presence validation
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: envelope for health and error bodies
//! - [`ApiError`]: handler error with status mapping
//!
//! ## Submodules
//! - [`account`]: account request bodies
//! - [`response`]: response types and error codes

pub mod account;
pub mod response;

// Re-export commonly used types at module root
pub use account::{
    CreateAccountRequest, UpdateBalanceRequest, ValidatedBalanceUpdate, ValidatedCreateAccount,
    required_path,
};
pub use response::{ApiError, ApiResponse, ApiResult, error_codes, ok};
