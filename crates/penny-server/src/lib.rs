//! Penny Web Server
//!
//! Axum-based REST API serving the analysis engine's derived figures to a
//! dashboard front end and to the chat collaborator that forwards the
//! coach prompt to a hosted model.
//!
//! The state is one immutable month of data (ledger + budget) shared
//! across handlers; there is nothing to lock and nothing to mutate, so
//! every endpoint is a pure read.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use penny_core::{Goals, MonthlyBudget, RecurringExpense, Transaction};

mod handlers;


/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state: one immutable month of data
pub struct AppState {
    pub budget: MonthlyBudget,
    pub goals: Goals,
    pub transactions: Vec<Transaction>,
    pub recurring: Vec<RecurringExpense>,
}

/// Create the application router
pub fn create_router(state: AppState, config: ServerConfig) -> Router {
    let state = Arc::new(state);

    let api_routes = Router::new()
        // Dashboard
        .route("/dashboard", get(handlers::get_dashboard))
        // Reports
        .route("/reports/categories", get(handlers::report_categories))
        .route("/reports/spending", get(handlers::report_spending))
        // Analysis
        .route("/analysis/savings-target", get(handlers::savings_target))
        .route("/analysis/suggestions", get(handlers::cut_suggestions))
        .route(
            "/analysis/affordability",
            post(handlers::check_affordability),
        )
        .route("/analysis/projection", get(handlers::month_end_projection))
        .route("/analysis/weekly-budget", get(handlers::weekly_budget))
        // Coach
        .route("/coach/context", get(handlers::coach_context));

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the server
pub async fn serve(
    state: AppState,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    info!(
        transactions = state.transactions.len(),
        income = state.budget.income,
        "Serving month snapshot"
    );

    let app = create_router(state, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            internal: Some(err),
        }
    }
}
