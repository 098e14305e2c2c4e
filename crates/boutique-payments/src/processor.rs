//! Payment processor contract and implementations.

use crate::error::PaymentError;
use crate::types::{CreateIntentRequest, PaymentIntent, PaymentStatus};
use async_trait::async_trait;
use boutique_commerce::ids::IntentId;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Production endpoint of the card processor.
pub const STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Opaque create/confirm contract with the card processor.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Open an intent for the given charge.
    async fn create_intent(
        &self,
        request: &CreateIntentRequest,
    ) -> Result<PaymentIntent, PaymentError>;

    /// Confirm a previously opened intent.
    async fn confirm(&self, intent_id: &IntentId) -> Result<PaymentStatus, PaymentError>;
}

/// Stripe-style HTTP gateway.
pub struct StripeGateway {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl StripeGateway {
    /// Create a gateway against the production endpoint.
    pub fn new(secret_key: impl Into<String>) -> Result<Self, PaymentError> {
        Self::with_base_url(secret_key, STRIPE_API_BASE)
    }

    /// Create a gateway against a custom endpoint.
    pub fn with_base_url(
        secret_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, PaymentError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| PaymentError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret_key: secret_key.into(),
        })
    }

    fn intent_form(request: &CreateIntentRequest) -> Result<Vec<(String, String)>, PaymentError> {
        let items = serde_json::to_string(&request.line_items)
            .map_err(|e| PaymentError::Parse(e.to_string()))?;

        Ok(vec![
            ("amount".to_string(), request.amount.cents.to_string()),
            ("currency".to_string(), "usd".to_string()),
            ("metadata[items]".to_string(), items),
            (
                "metadata[customer_name]".to_string(),
                request.customer.name.clone(),
            ),
            (
                "metadata[customer_email]".to_string(),
                request.customer.email.clone(),
            ),
            (
                "metadata[shipping_address]".to_string(),
                request.customer.shipping_address.clone(),
            ),
            (
                "metadata[shipping_fee]".to_string(),
                format!("{:.2}", request.shipping_fee.to_decimal()),
            ),
        ])
    }
}

/// Wire shape of a processor intent.
#[derive(Debug, Deserialize)]
struct WireIntent {
    id: String,
    client_secret: Option<String>,
    amount: i64,
    status: String,
}

/// Parse a processor intent response body.
fn parse_intent(body: &str) -> Result<PaymentIntent, PaymentError> {
    let wire: WireIntent =
        serde_json::from_str(body).map_err(|e| PaymentError::Parse(e.to_string()))?;

    Ok(PaymentIntent {
        id: IntentId::new(wire.id),
        client_secret: wire.client_secret.unwrap_or_default(),
        amount: boutique_commerce::money::Money::new(wire.amount),
        status: PaymentStatus::from_processor(&wire.status),
    })
}

async fn read_error(response: reqwest::Response) -> PaymentError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    PaymentError::Http { status, message }
}

#[async_trait]
impl PaymentProcessor for StripeGateway {
    async fn create_intent(
        &self,
        request: &CreateIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        if !request.amount.is_positive() {
            return Err(PaymentError::InvalidAmount(request.amount.cents));
        }

        let form = Self::intent_form(request)?;
        let response = self
            .http
            .post(format!("{}/v1/payment_intents", self.base_url))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(read_error(response).await);
        }

        let body = response.text().await?;
        let intent = parse_intent(&body)?;
        debug!(intent_id = %intent.id, "payment intent created");
        Ok(intent)
    }

    async fn confirm(&self, intent_id: &IntentId) -> Result<PaymentStatus, PaymentError> {
        let response = self
            .http
            .post(format!(
                "{}/v1/payment_intents/{}/confirm",
                self.base_url, intent_id
            ))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(read_error(response).await);
        }

        let body = response.text().await?;
        Ok(parse_intent(&body)?.status)
    }
}

/// In-memory processor double for checkout tests.
#[derive(Default)]
pub struct TestProcessor {
    intents: Mutex<HashMap<IntentId, PaymentIntent>>,
}

impl TestProcessor {
    /// Create an empty double.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentProcessor for TestProcessor {
    async fn create_intent(
        &self,
        request: &CreateIntentRequest,
    ) -> Result<PaymentIntent, PaymentError> {
        if !request.amount.is_positive() {
            return Err(PaymentError::InvalidAmount(request.amount.cents));
        }

        let id = IntentId::generate();
        let intent = PaymentIntent {
            id: id.clone(),
            client_secret: format!("{}_secret_test", id),
            amount: request.amount,
            status: PaymentStatus::RequiresConfirmation,
        };

        if let Ok(mut intents) = self.intents.lock() {
            intents.insert(id, intent.clone());
        }
        Ok(intent)
    }

    async fn confirm(&self, intent_id: &IntentId) -> Result<PaymentStatus, PaymentError> {
        let mut intents = self
            .intents
            .lock()
            .map_err(|_| PaymentError::Request("intent store poisoned".to_string()))?;

        let intent = intents
            .get_mut(intent_id)
            .ok_or_else(|| PaymentError::IntentNotFound(intent_id.to_string()))?;
        intent.status = PaymentStatus::Succeeded;
        Ok(intent.status)
    }
}
