//! # pesa-api
//!
//! HTTP API layer for pesa-bridge-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Relay endpoints for the Daraja token and STK push calls
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/mpesa/token` | Relay an OAuth token grant |
//! | POST | `/mpesa/stk-push` | Initiate an STK push prompt |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
