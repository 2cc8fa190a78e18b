use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDto {
    pub id: i32,
    pub provider: String,
    pub provider_payment_id: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/payments/mollie`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMolliePaymentDto {
    pub amount_cents: i64,
    pub currency: String,
    pub description: String,
}

/// Response for a newly created Mollie payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MollieCheckoutDto {
    pub payment_id: String,
    pub checkout_url: String,
}

/// Form body Mollie posts to the webhook endpoint. Carries only the payment
/// id; the current state must be fetched back from the Mollie API.
#[derive(Debug, Clone, Deserialize)]
pub struct MollieWebhookDto {
    pub id: String,
}
