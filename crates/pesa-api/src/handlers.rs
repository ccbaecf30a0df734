//! # Request Handlers
//!
//! Axum request handlers for the relay. Each handler performs one gateway
//! operation and relays the upstream JSON verbatim; every failure collapses
//! to a fixed 500 payload, with the diagnostic detail going to the log only.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pesa_core::PushOrder;
use pesa_daraja::GatewayResponse;
use serde::Serialize;
use tracing::{error, instrument};

/// Generic failure message for the token endpoint
pub const TOKEN_FAILURE: &str = "Failed to get access token";

/// Generic failure message for the push endpoint
pub const PUSH_FAILURE: &str = "Failed to initiate STK push";

/// Fixed error payload returned on any relay failure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

fn relayed(response: GatewayResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
    (status, Json(response.body)).into_response()
}

fn failure(message: &'static str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "pesa-bridge",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Relay an OAuth token grant from the gateway
#[instrument(skip(state))]
pub async fn access_token(State(state): State<AppState>) -> Response {
    match state.gateway.request_access_token().await {
        Ok(grant) => relayed(grant),
        Err(e) => {
            error!("Error getting access token: {}", e);
            failure(TOKEN_FAILURE)
        }
    }
}

/// Initiate an STK push prompt and relay the gateway's response
#[instrument(skip(state, order))]
pub async fn stk_push(
    State(state): State<AppState>,
    Json(order): Json<PushOrder>,
) -> Response {
    match state.gateway.initiate_stk_push(&order).await {
        Ok(response) => relayed(response),
        Err(e) => {
            error!("Error initiating STK push: {}", e);
            failure(PUSH_FAILURE)
        }
    }
}
