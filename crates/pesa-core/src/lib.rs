//! # pesa-core
//!
//! Core types and credential primitives for the pesa-bridge relay.
//!
//! This crate provides:
//! - `RelayError` for typed error handling
//! - `PushOrder`, the inbound payment-initiation value object
//! - Credential derivation: the gateway's 14-digit timestamp, the per-request
//!   STK password, and the Basic-auth credential encoding
//!
//! ## Example
//!
//! ```rust,ignore
//! use chrono::Utc;
//! use pesa_core::{basic_credential, stk_password, stk_timestamp};
//!
//! let auth = basic_credential(&consumer_key, &consumer_secret);
//!
//! let timestamp = stk_timestamp(Utc::now());
//! let password = stk_password(&shortcode, &passkey, &timestamp);
//! ```

pub mod credentials;
pub mod error;
pub mod push;

// Re-exports for convenience
pub use credentials::{basic_credential, stk_password, stk_timestamp};
pub use error::{RelayError, RelayResult};
pub use push::PushOrder;
