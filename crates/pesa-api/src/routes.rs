//! # Routes
//!
//! Axum router configuration for the relay.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - GET  /mpesa/token - Relay an OAuth token grant
/// - POST /mpesa/stk-push - Initiate an STK push prompt
pub fn create_router(state: AppState) -> Router {
    // Cross-origin requests are permitted from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mpesa_routes = Router::new()
        .route("/token", get(handlers::access_token))
        .route("/stk-push", post(handlers::stk_push));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .nest("/mpesa", mpesa_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
