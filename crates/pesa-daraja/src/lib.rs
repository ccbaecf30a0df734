//! # pesa-daraja
//!
//! Safaricom Daraja gateway client for pesa-bridge-rs.
//!
//! This crate provides:
//!
//! - **DarajaConfig** - environment-driven configuration with fail-fast
//!   validation of the required secrets
//! - **DarajaGateway** - the two upstream calls (OAuth token issuance and
//!   STK push initiation) over a timeout-bounded `reqwest` client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pesa_daraja::DarajaGateway;
//!
//! // Create gateway from environment
//! let gateway = DarajaGateway::from_env()?;
//!
//! // Relay a token grant
//! let grant = gateway.request_access_token().await?;
//!
//! // Prompt the payer's phone
//! let response = gateway.initiate_stk_push(&order).await?;
//! ```

pub mod config;
pub mod gateway;

// Re-exports
pub use config::{DarajaConfig, SANDBOX_BASE_URL};
pub use gateway::{DarajaGateway, GatewayResponse};
