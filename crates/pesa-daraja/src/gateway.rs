//! # Daraja Gateway Client
//!
//! Implementation of the two upstream Daraja calls: OAuth token issuance and
//! STK push initiation. Responses are relayed verbatim to the caller, so both
//! operations return the raw upstream JSON body together with the upstream
//! status instead of a lossy typed projection.

use crate::config::DarajaConfig;
use chrono::Utc;
use pesa_core::{stk_password, stk_timestamp, PushOrder, RelayError, RelayResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

/// Fixed transaction type for customer-initiated paybill charges
const TRANSACTION_TYPE: &str = "CustomerPayBillOnline";

/// A successful (2xx) upstream response, relayed verbatim
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    /// Upstream HTTP status code
    pub status: u16,
    /// Upstream JSON body, unchanged
    pub body: Value,
}

/// Client for the Daraja sandbox API
///
/// Holds no per-request state; one instance is shared across all inbound
/// requests. Every operation that needs an access token requests a fresh one.
#[derive(Clone)]
pub struct DarajaGateway {
    config: DarajaConfig,
    client: Client,
}

impl DarajaGateway {
    /// Create a new gateway client
    pub fn new(config: DarajaConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> RelayResult<Self> {
        let config = DarajaConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// The configuration this gateway was built with
    pub fn config(&self) -> &DarajaConfig {
        &self.config
    }

    /// Request an OAuth access token using the client-credentials grant.
    ///
    /// Returns the upstream JSON body and status for verbatim relay.
    #[instrument(skip(self))]
    pub async fn request_access_token(&self) -> RelayResult<GatewayResponse> {
        let url = format!("{}/oauth/v1/generate", self.config.api_base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("grant_type", "client_credentials")])
            .header("Authorization", self.config.basic_auth_header())
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let grant = Self::relay(response).await?;
        debug!("Issued access token: status={}", grant.status);

        Ok(grant)
    }

    /// Initiate an STK push prompt on the payer's phone.
    ///
    /// Acquires a fresh access token, derives the timestamp/password pair,
    /// and posts the push request with Bearer auth. The two upstream calls
    /// are strictly sequential; a token failure is terminal and the push
    /// call is never issued.
    #[instrument(skip(self, order))]
    pub async fn initiate_stk_push(&self, order: &PushOrder) -> RelayResult<GatewayResponse> {
        let token = self.access_token().await?;

        let timestamp = stk_timestamp(Utc::now());
        let request = self.build_push_request(order, &timestamp);

        debug!("Initiating STK push: timestamp={}", timestamp);

        let url = format!("{}/mpesa/stkpush/v1/processrequest", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let relayed = Self::relay(response).await?;
        info!("STK push accepted by gateway: status={}", relayed.status);

        Ok(relayed)
    }

    /// Acquire a token and extract the opaque access token string
    async fn access_token(&self) -> RelayResult<String> {
        let grant = self.request_access_token().await?;

        let token: AccessTokenResponse = serde_json::from_value(grant.body)
            .map_err(|e| RelayError::Serialization(format!("Failed to parse token response: {e}")))?;

        Ok(token.access_token)
    }

    /// Build the push request body for the gateway
    fn build_push_request(&self, order: &PushOrder, timestamp: &str) -> StkPushRequest {
        StkPushRequest {
            business_short_code: self.config.shortcode.clone(),
            password: stk_password(&self.config.shortcode, &self.config.passkey, timestamp),
            timestamp: timestamp.to_string(),
            transaction_type: TRANSACTION_TYPE,
            amount: order.amount.clone(),
            party_a: order.phone_number.clone(),
            party_b: self.config.shortcode.clone(),
            phone_number: order.phone_number.clone(),
            call_back_url: self.config.callback_url.clone(),
            account_reference: order.account_reference.clone(),
            transaction_desc: order.transaction_desc.clone(),
        }
    }

    /// Relay a 2xx upstream response; anything else is a gateway error
    async fn relay(response: reqwest::Response) -> RelayResult<GatewayResponse> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Daraja API error: status={}, body={}", status, body);
            return Err(RelayError::Gateway {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = serde_json::from_str(&body).map_err(|e| {
            RelayError::Serialization(format!("Failed to parse Daraja response: {e}"))
        })?;

        Ok(GatewayResponse {
            status: status.as_u16(),
            body,
        })
    }
}

// =============================================================================
// Daraja API Types
// =============================================================================

/// Wire format of `POST /mpesa/stkpush/v1/processrequest`.
///
/// Caller-supplied fields are optional raw JSON; absent ones are omitted from
/// the body so the gateway sees exactly what the caller sent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct StkPushRequest {
    business_short_code: String,
    password: String,
    timestamp: String,
    transaction_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    party_a: Option<Value>,
    party_b: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<Value>,
    #[serde(rename = "CallBackURL")]
    call_back_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_reference: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_desc: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
}
