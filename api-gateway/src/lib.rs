//! HTTP surface for the customer ledger

pub mod api;
pub mod error;
pub mod config;

use std::sync::Arc;

use account_service::AccountService;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{account, statement};

/// App state shared across handlers
pub struct AppState {
    /// Account service
    pub account_service: Arc<AccountService>,
}

impl AppState {
    /// Wrap an account service for use as router state
    pub fn new(account_service: AccountService) -> Arc<Self> {
        Arc::new(Self {
            account_service: Arc::new(account_service),
        })
    }
}

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Account routes
        api::account::create_account,
        api::account::get_account,
        api::account::list_accounts,
        api::account::update_account,
        api::account::delete_account,
        api::account::deposit,
        api::account::withdraw,
        // Statement routes
        api::statement::get_statement,
        api::statement::get_statement_by_date,
        api::statement::get_balance,
    ),
    components(
        schemas(
            api::account::CreateAccountRequest,
            api::account::UpdateAccountRequest,
            api::account::DepositRequest,
            api::account::WithdrawRequest,
            common::model::customer::Customer,
            common::model::statement::StatementEntry,
            common::model::statement::OperationType,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "account", description = "Customer account endpoints"),
        (name = "statement", description = "Statement and balance endpoints")
    ),
    info(
        title = "Customer Ledger API",
        version = "1.0.0",
        description = "In-memory customer ledger: registration, deposits, withdrawals and statements"
    )
)]
pub struct ApiDoc;

/// Build the application router with every route and middleware layer
pub fn app(state: Arc<AppState>, log_level: Level) -> Router {
    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Statement routes
        .route("/statement", get(statement::get_statement))
        .route("/statement/", get(statement::get_statement))
        .route("/statement/date", get(statement::get_statement_by_date))
        .route("/balance", get(statement::get_balance))

        // Account routes
        .route(
            "/account",
            get(account::get_account)
                .post(account::create_account)
                .put(account::update_account)
                .delete(account::delete_account),
        )
        .route("/account/all", get(account::list_accounts))
        .route("/deposit", post(account::deposit))
        .route("/withdraw", post(account::withdraw));

    // Set up Swagger UI
    let swagger_ui = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(api_routes)
        .merge(swagger_ui)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(log_level))
                .on_request(DefaultOnRequest::new().level(log_level))
                .on_response(DefaultOnResponse::new().level(log_level))
        )
        .with_state(state)
}
