//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the Daraja gateway client and the server configuration; there is no
//! other cross-request state in the relay.

use pesa_daraja::DarajaGateway;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Daraja gateway client
    pub gateway: DarajaGateway,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState from the environment.
    ///
    /// Fails fast with a diagnostic if a required gateway secret is absent,
    /// rather than discovering the gap on the first upstream call.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let gateway = DarajaGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Daraja gateway: {}", e))?;

        Ok(Self { gateway, config })
    }
}
