//! Statement and balance handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::HeaderMap,
    Json,
};
use chrono::NaiveDate;
use common::decimal::Amount;
use common::model::statement::{self, StatementEntry};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::guard::resolve_customer;
use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

/// Query date format, e.g. `2024-03-10`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Statement-by-date query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatementDateQuery {
    /// Calendar day in `YYYY-MM-DD` form
    pub date: Option<String>,
}

impl StatementDateQuery {
    /// Parsed calendar day; `None` when missing or malformed
    pub fn day(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok())
    }
}

/// Full statement of the customer identified by the `cpf` header
#[utoipa::path(
    get,
    path = "/statement/",
    params(
        ("cpf" = String, Header, description = "Customer fiscal identifier")
    ),
    responses(
        (status = 200, description = "Statement in recording order", body = [StatementEntry]),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "statement"
)]
pub async fn get_statement(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<StatementEntry>>, ApiError> {
    let customer = resolve_customer(&state, &headers).await?;
    Ok(Json(customer.statement))
}

/// Statement entries recorded on a given local calendar day
#[utoipa::path(
    get,
    path = "/statement/date",
    params(
        ("cpf" = String, Header, description = "Customer fiscal identifier"),
        StatementDateQuery
    ),
    responses(
        (status = 200, description = "Entries recorded on that day", body = [StatementEntry]),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "statement"
)]
pub async fn get_statement_by_date(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<StatementDateQuery>, QueryRejection>,
) -> Result<Json<Vec<StatementEntry>>, ApiError> {
    let customer = resolve_customer(&state, &headers).await?;
    let Query(query) = query?;

    let entries = match query.day() {
        Some(day) => statement::entries_on(&customer.statement, day),
        None => Vec::new(),
    };

    Ok(Json(entries))
}

/// Balance of the customer identified by the `cpf` header
#[utoipa::path(
    get,
    path = "/balance",
    params(
        ("cpf" = String, Header, description = "Customer fiscal identifier")
    ),
    responses(
        (status = 200, description = "Credits minus debits", body = f64),
        (status = 400, description = "Balance out of range", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "statement"
)]
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Amount>, ApiError> {
    let customer = resolve_customer(&state, &headers).await?;
    Ok(Json(customer.balance()?))
}
