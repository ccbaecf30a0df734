//! # Pesa-Bridge RS
//!
//! Minimal HTTP relay for the Daraja (M-Pesa) sandbox.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export MPESA_CONSUMER_KEY=...
//! export MPESA_CONSUMER_SECRET=...
//! export MPESA_PASSKEY=...
//!
//! # Run the server
//! pesa-bridge
//! ```

use pesa_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state; missing gateway secrets fail here,
    // not on the first upstream call
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Gateway base URL: {}", state.gateway.config().api_base_url);
    info!("Business shortcode: {}", state.gateway.config().shortcode);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🌉 Pesa-Bridge starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: http://{}/health", addr);
        info!("🔑 Token: GET http://{}/mpesa/token", addr);
        info!("📲 STK push: POST http://{}/mpesa/stk-push", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🌉 Pesa-Bridge RS 🌉
  ━━━━━━━━━━━━━━━━━━━━━
  Daraja STK push relay
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
