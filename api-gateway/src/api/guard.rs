//! Customer resolution for guarded routes

use axum::http::HeaderMap;
use common::error::Error;
use common::model::customer::Customer;

use crate::error::ApiError;
use crate::AppState;

/// Header carrying the caller's fiscal identifier
pub const CPF_HEADER: &str = "cpf";

/// Read the fiscal identifier from the request headers.
///
/// A missing or non-UTF-8 header yields `None`.
pub fn cpf_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers.get(CPF_HEADER).and_then(|value| value.to_str().ok())
}

/// Resolve the customer a guarded request acts on.
///
/// Fails with `Customer not found` when the header is absent or matches no
/// registered customer; the handler must return that error as-is.
pub async fn resolve_customer(state: &AppState, headers: &HeaderMap) -> Result<Customer, ApiError> {
    let cpf = cpf_from_headers(headers).ok_or(Error::CustomerNotFound)?;
    Ok(state.account_service.resolve(cpf).await?)
}
