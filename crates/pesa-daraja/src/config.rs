//! # Daraja Configuration
//!
//! Configuration management for the Daraja gateway integration.
//! All secrets are loaded from environment variables and validated at
//! startup, so a missing credential fails the process fast instead of
//! surfacing as an upstream error at request time.

use pesa_core::{basic_credential, RelayError};
use std::env;

/// Base URL of the Daraja sandbox
pub const SANDBOX_BASE_URL: &str = "https://sandbox.safaricom.co.ke";

/// Sandbox test shortcode, used when `MPESA_SHORTCODE` is not set
const DEFAULT_SHORTCODE: &str = "174379";

/// Default callback sink, used when `MPESA_CALLBACK_URL` is not set
const DEFAULT_CALLBACK_URL: &str = "https://vetconnect.free.beeceptor.com";

/// Daraja API configuration
#[derive(Debug, Clone)]
pub struct DarajaConfig {
    /// OAuth consumer key
    pub consumer_key: String,

    /// OAuth consumer secret
    pub consumer_secret: String,

    /// Shared passkey for STK password derivation
    pub passkey: String,

    /// Business shortcode (merchant identifier)
    pub shortcode: String,

    /// URL the gateway posts payment results to
    pub callback_url: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

impl DarajaConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `MPESA_CONSUMER_KEY`
    /// - `MPESA_CONSUMER_SECRET`
    /// - `MPESA_PASSKEY`
    ///
    /// Optional env vars (sandbox defaults apply):
    /// - `MPESA_SHORTCODE`
    /// - `MPESA_CALLBACK_URL`
    /// - `MPESA_BASE_URL`
    pub fn from_env() -> Result<Self, RelayError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let consumer_key = env::var("MPESA_CONSUMER_KEY")
            .map_err(|_| RelayError::Configuration("MPESA_CONSUMER_KEY not set".to_string()))?;

        let consumer_secret = env::var("MPESA_CONSUMER_SECRET")
            .map_err(|_| RelayError::Configuration("MPESA_CONSUMER_SECRET not set".to_string()))?;

        let passkey = env::var("MPESA_PASSKEY")
            .map_err(|_| RelayError::Configuration("MPESA_PASSKEY not set".to_string()))?;

        let shortcode =
            env::var("MPESA_SHORTCODE").unwrap_or_else(|_| DEFAULT_SHORTCODE.to_string());

        let callback_url =
            env::var("MPESA_CALLBACK_URL").unwrap_or_else(|_| DEFAULT_CALLBACK_URL.to_string());

        let api_base_url =
            env::var("MPESA_BASE_URL").unwrap_or_else(|_| SANDBOX_BASE_URL.to_string());

        let config = Self {
            consumer_key,
            consumer_secret,
            passkey,
            shortcode,
            callback_url,
            api_base_url,
        };
        config.validate()?;

        Ok(config)
    }

    /// Create config with explicit credentials and sandbox defaults (for testing)
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        passkey: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            passkey: passkey.into(),
            shortcode: DEFAULT_SHORTCODE.to_string(),
            callback_url: DEFAULT_CALLBACK_URL.to_string(),
            api_base_url: SANDBOX_BASE_URL.to_string(),
        }
    }

    fn validate(&self) -> Result<(), RelayError> {
        if self.consumer_key.trim().is_empty() {
            return Err(RelayError::Configuration(
                "MPESA_CONSUMER_KEY is empty".to_string(),
            ));
        }

        if self.consumer_secret.trim().is_empty() {
            return Err(RelayError::Configuration(
                "MPESA_CONSUMER_SECRET is empty".to_string(),
            ));
        }

        if self.passkey.trim().is_empty() {
            return Err(RelayError::Configuration("MPESA_PASSKEY is empty".to_string()));
        }

        if self.shortcode.is_empty() || !self.shortcode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RelayError::Configuration(format!(
                "MPESA_SHORTCODE must be numeric, got {:?}",
                self.shortcode
            )));
        }

        // The gateway rejects plain-http callback URLs
        if !self.callback_url.starts_with("https://") {
            return Err(RelayError::Configuration(
                "MPESA_CALLBACK_URL must be an https:// URL".to_string(),
            ));
        }

        Ok(())
    }

    /// Check if pointed at the Daraja sandbox
    pub fn is_sandbox(&self) -> bool {
        self.api_base_url == SANDBOX_BASE_URL
    }

    /// Get the Basic authorization header value for the token endpoint
    pub fn basic_auth_header(&self) -> String {
        format!(
            "Basic {}",
            basic_credential(&self.consumer_key, &self.consumer_secret)
        )
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set custom shortcode
    pub fn with_shortcode(mut self, shortcode: impl Into<String>) -> Self {
        self.shortcode = shortcode.into();
        self
    }

    /// Builder: set custom callback URL
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_sandbox() {
        let config = DarajaConfig::new("key", "secret", "passkey");
        assert!(config.is_sandbox());
        assert_eq!(config.shortcode, "174379");
        assert!(config.callback_url.starts_with("https://"));
    }

    #[test]
    fn test_basic_auth_header() {
        let config = DarajaConfig::new("key", "secret", "passkey");
        assert_eq!(config.basic_auth_header(), "Basic a2V5OnNlY3JldA==");
    }

    #[test]
    fn test_validation_rejects_empty_secrets() {
        let config = DarajaConfig::new("key", "", "passkey");
        assert!(config.validate().is_err());

        let config = DarajaConfig::new("key", "secret", "   ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_numeric_shortcode() {
        let config = DarajaConfig::new("key", "secret", "passkey").with_shortcode("N0T4C0DE");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_plain_http_callback() {
        let config =
            DarajaConfig::new("key", "secret", "passkey").with_callback_url("http://example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_missing_key() {
        // Clear any existing env vars
        env::remove_var("MPESA_CONSUMER_KEY");

        let result = DarajaConfig::from_env();
        assert!(result.is_err());
    }
}
