//! # Relay Error Types
//!
//! Typed error handling for the pesa-bridge relay.
//! All gateway operations return `Result<T, RelayError>`.

use thiserror::Error;

/// Core error type for all relay operations
#[derive(Debug, Error)]
pub enum RelayError {
    /// Configuration errors (missing secrets, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network/HTTP error communicating with the gateway
    #[error("Network error: {0}")]
    Network(String),

    /// Gateway rejected the request (non-2xx upstream status)
    #[error("Gateway error [{status}]: {body}")]
    Gateway { status: u16, body: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for relay operations
pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        let err = RelayError::Gateway {
            status: 401,
            body: "Invalid Access Token".to_string(),
        };
        assert_eq!(err.to_string(), "Gateway error [401]: Invalid Access Token");
    }

    #[test]
    fn test_configuration_error_display() {
        let err = RelayError::Configuration("MPESA_PASSKEY not set".to_string());
        assert!(err.to_string().contains("MPESA_PASSKEY"));
    }
}
