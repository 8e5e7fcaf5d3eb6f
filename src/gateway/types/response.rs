//! API Response types and error codes
//!
//! - `ApiResponse<T>`: envelope used for health and error bodies
//! - `ApiError`: handler error, rendered as envelope or bare status
//! - `error_codes`: Standard error code constants

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::account::AccountError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Handler Errors
// ============================================================================

/// Error returned by gateway handlers.
///
/// `code == None` renders as a status line with an empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: Option<i32>,
    pub msg: String,
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Wrap handler data in a 200 JSON response
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code: Some(code),
            msg: msg.into(),
        }
    }

    /// Status only, empty body
    pub fn bare(status: StatusCode) -> Self {
        Self {
            status,
            code: None,
            msg: String::new(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    pub fn store_unavailable() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::STORE_UNAVAILABLE,
            "store unavailable",
        )
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            msg,
        )
    }

    pub fn into_err<T>(self) -> Result<T, Self> {
        Err(self)
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::NotFound => ApiError::bare(StatusCode::NOT_FOUND),
            AccountError::IdentityMismatch => ApiError::bare(StatusCode::BAD_REQUEST),
            AccountError::StoreUnavailable(detail) => {
                // Driver detail stays in the log
                tracing::error!(error = %detail, "account store failure");
                ApiError::store_unavailable()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.code {
            Some(code) => (self.status, Json(ApiResponse::<()>::error(code, self.msg))).into_response(),
            None => self.status.into_response(),
        }
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;

    // Server errors (5xxx)
    pub const STORE_UNAVAILABLE: i32 = 5001;
    pub const SERVICE_UNAVAILABLE: i32 = 5003;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_error_mapping() {
        let err: ApiError = AccountError::NotFound.into();
        assert_eq!(err, ApiError::bare(StatusCode::NOT_FOUND));

        let err: ApiError = AccountError::IdentityMismatch.into();
        assert_eq!(err, ApiError::bare(StatusCode::BAD_REQUEST));

        let err: ApiError = AccountError::StoreUnavailable("pool timed out".into()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, Some(error_codes::STORE_UNAVAILABLE));
        assert!(!err.msg.contains("pool"), "driver detail must not leak");
    }

    #[test]
    fn test_success_envelope() {
        let json = serde_json::to_value(ApiResponse::success(7)).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["msg"], "ok");
        assert_eq!(json["data"], 7);
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let json =
            serde_json::to_value(ApiResponse::<()>::error(error_codes::INVALID_PARAMETER, "bad"))
                .unwrap();
        assert_eq!(json["code"], 1001);
        assert!(json.get("data").is_none());
    }
}
