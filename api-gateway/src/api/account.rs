//! Account API handlers
//!
//! Handles endpoints related to account management:
//! - Register, read, rename and delete a customer
//! - List every customer
//! - Deposit and withdraw funds

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use common::decimal::Amount;
use common::model::customer::Customer;
use common::model::statement::StatementEntry;
use serde_json::Value;
use utoipa::ToSchema;

use crate::api::body::{amount_field, optional_string_field, parse_body, string_field};
use crate::api::guard::resolve_customer;
use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

/// Create account request
#[derive(Debug, ToSchema)]
pub struct CreateAccountRequest {
    /// Customer name
    pub name: String,
    /// Fiscal identifier
    pub cpf: String,
}

impl CreateAccountRequest {
    fn from_json(body: &Value) -> Self {
        Self {
            name: string_field(body, "name"),
            cpf: string_field(body, "cpf"),
        }
    }
}

/// Register a new customer
#[utoipa::path(
    post,
    path = "/account",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account successfully created"),
        (status = 400, description = "Customer already exists", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let request = CreateAccountRequest::from_json(&parse_body(&headers, &body)?);

    state
        .account_service
        .create_account(request.name, request.cpf)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Get the customer identified by the `cpf` header
#[utoipa::path(
    get,
    path = "/account",
    params(
        ("cpf" = String, Header, description = "Customer fiscal identifier")
    ),
    responses(
        (status = 200, description = "Customer retrieved successfully", body = Customer),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Customer>, ApiError> {
    let customer = resolve_customer(&state, &headers).await?;
    Ok(Json(customer))
}

/// List every registered customer
#[utoipa::path(
    get,
    path = "/account/all",
    responses(
        (status = 200, description = "All customers in registration order", body = [Customer])
    ),
    tag = "account"
)]
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(state.account_service.list_accounts().await?))
}

/// Update account request
#[derive(Debug, ToSchema)]
pub struct UpdateAccountRequest {
    /// New customer name
    pub name: String,
}

impl UpdateAccountRequest {
    fn from_json(body: &Value) -> Self {
        Self {
            name: string_field(body, "name"),
        }
    }
}

/// Rename the customer identified by the `cpf` header
#[utoipa::path(
    put,
    path = "/account",
    params(
        ("cpf" = String, Header, description = "Customer fiscal identifier")
    ),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated"),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let customer = resolve_customer(&state, &headers).await?;
    let request = UpdateAccountRequest::from_json(&parse_body(&headers, &body)?);

    state
        .account_service
        .update_account(&customer.cpf, request.name)
        .await?;

    Ok(StatusCode::OK)
}

/// Delete the customer identified by the `cpf` header
#[utoipa::path(
    delete,
    path = "/account",
    params(
        ("cpf" = String, Header, description = "Customer fiscal identifier")
    ),
    responses(
        (status = 200, description = "Customers remaining after the deletion", body = [Customer]),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customer = resolve_customer(&state, &headers).await?;
    let remaining = state.account_service.delete_account(&customer.cpf).await?;
    Ok(Json(remaining))
}

/// Deposit request
#[derive(Debug, ToSchema)]
pub struct DepositRequest {
    /// Free-text description
    pub description: Option<String>,
    /// Amount
    #[schema(value_type = f64)]
    pub amount: Amount,
}

impl DepositRequest {
    fn from_json(body: &Value) -> Self {
        Self {
            description: optional_string_field(body, "description"),
            amount: amount_field(body, "amount"),
        }
    }
}

/// Deposit funds into the customer's account
#[utoipa::path(
    post,
    path = "/deposit",
    params(
        ("cpf" = String, Header, description = "Customer fiscal identifier")
    ),
    request_body = DepositRequest,
    responses(
        (status = 201, description = "Credit recorded", body = StatementEntry),
        (status = 400, description = "Malformed JSON or balance out of range", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<StatementEntry>), ApiError> {
    let customer = resolve_customer(&state, &headers).await?;
    let request = DepositRequest::from_json(&parse_body(&headers, &body)?);

    let entry = state
        .account_service
        .deposit(&customer.cpf, request.description, request.amount)
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Withdraw request
#[derive(Debug, ToSchema)]
pub struct WithdrawRequest {
    /// Amount
    #[schema(value_type = f64)]
    pub amount: Amount,
}

impl WithdrawRequest {
    fn from_json(body: &Value) -> Self {
        Self {
            amount: amount_field(body, "amount"),
        }
    }
}

/// Withdraw funds from the customer's account
#[utoipa::path(
    post,
    path = "/withdraw",
    params(
        ("cpf" = String, Header, description = "Customer fiscal identifier")
    ),
    request_body = WithdrawRequest,
    responses(
        (status = 201, description = "Debit recorded"),
        (status = 400, description = "Insufficient funds", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let customer = resolve_customer(&state, &headers).await?;
    let request = WithdrawRequest::from_json(&parse_body(&headers, &body)?);

    state
        .account_service
        .withdraw(&customer.cpf, request.amount)
        .await?;

    Ok(StatusCode::CREATED)
}
