//! Account handlers
//!
//! Each handler checks that required path/body fields are present, calls one
//! repository operation and maps its outcome to a status code.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, CreateAccountRequest, UpdateBalanceRequest, ok, required_path,
};
use crate::account::{Account, UpdatedAccount};

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

/// Create an account
///
/// POST /accounts
#[utoipa::path(
    post,
    path = "/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Created account", body = Account, content_type = "application/json"),
        (status = 400, description = "Missing or malformed field"),
        (status = 500, description = "Store unavailable")
    ),
    tag = "Accounts"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> ApiResult<Account> {
    let req = json_body(payload)?
        .validate()
        .map_err(ApiError::bad_request)?;

    let account = state
        .accounts
        .create(&req.customer_id, req.balance, &req.currency)
        .await?;
    ok(account)
}

/// List every account
///
/// GET /accounts
#[utoipa::path(
    get,
    path = "/accounts",
    responses(
        (status = 200, description = "All accounts, possibly empty", body = Vec<Account>, content_type = "application/json"),
        (status = 500, description = "Store unavailable")
    ),
    tag = "Accounts"
)]
pub async fn list_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Account>> {
    ok(state.accounts.list_all().await?)
}

/// List a customer's accounts
///
/// GET /accounts/{id}
#[utoipa::path(
    get,
    path = "/accounts/{id}",
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Accounts owned by the customer, possibly empty", body = Vec<Account>, content_type = "application/json"),
        (status = 500, description = "Store unavailable")
    ),
    tag = "Accounts"
)]
pub async fn list_customer_accounts(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<String>,
) -> ApiResult<Vec<Account>> {
    ok(state.accounts.list_by_customer(&customer_id).await?)
}

/// Update balance and currency of one account
///
/// PUT /accounts/customer/{customer_id}/account/{account_id}
#[utoipa::path(
    put,
    path = "/accounts/customer/{customer_id}/account/{account_id}",
    params(
        ("customer_id" = String, Path, description = "Customer ID"),
        ("account_id" = String, Path, description = "Account ID")
    ),
    request_body = UpdateBalanceRequest,
    responses(
        (status = 200, description = "Update result", body = UpdatedAccount, content_type = "application/json"),
        (status = 400, description = "Missing field, or stored key differs from the requested key (empty body)"),
        (status = 404, description = "No such account (empty body)"),
        (status = 500, description = "Store unavailable")
    ),
    tag = "Accounts"
)]
pub async fn update_account_balance(
    State(state): State<Arc<AppState>>,
    Path((customer_id, account_id)): Path<(String, String)>,
    payload: Result<Json<UpdateBalanceRequest>, JsonRejection>,
) -> ApiResult<UpdatedAccount> {
    required_path(&customer_id, "customerId").map_err(ApiError::bad_request)?;
    required_path(&account_id, "accountId").map_err(ApiError::bad_request)?;
    let req = json_body(payload)?
        .validate()
        .map_err(ApiError::bad_request)?;

    match state
        .accounts
        .update_balance(&customer_id, &account_id, req.balance, &req.currency)
        .await
    {
        Ok(updated) => ok(updated),
        Err(e) => {
            if e.is_refusal() {
                tracing::warn!(%customer_id, %account_id, code = e.code(), "balance update refused");
            }
            ApiError::from(e).into_err()
        }
    }
}

/// Delete one account
///
/// DELETE /accounts/customer/{customer_id}/account/{account_id}
#[utoipa::path(
    delete,
    path = "/accounts/customer/{customer_id}/account/{account_id}",
    params(
        ("customer_id" = String, Path, description = "Customer ID"),
        ("account_id" = String, Path, description = "Account ID")
    ),
    responses(
        (status = 204, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Store unavailable")
    ),
    tag = "Accounts"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path((customer_id, account_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.accounts.delete(&customer_id, &account_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
