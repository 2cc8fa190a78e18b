//! Mollie payment creation and webhook sync.
//!
//! Mollie's webhook is intentionally stateless: it posts only a payment id,
//! and the current status must be fetched back from the API. That makes the
//! webhook safe to redeliver and impossible to spoof into a status the API
//! does not confirm.

use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::server::{
    config::Config,
    data::{payment::PaymentRepository, profile::ProfileRepository},
    error::AppError,
    model::{payment::RecordPaymentParam, profile::SubscriptionStatus},
};

#[derive(Serialize)]
struct CreatePaymentRequest<'a> {
    amount: MollieAmount,
    description: &'a str,
    #[serde(rename = "redirectUrl")]
    redirect_url: String,
    #[serde(rename = "webhookUrl")]
    webhook_url: String,
    metadata: PaymentMetadata,
}

#[derive(Serialize)]
struct PaymentMetadata {
    profile_id: i32,
}

#[derive(Serialize, Deserialize)]
struct MollieAmount {
    currency: String,
    /// Decimal string with two fraction digits, e.g. `"10.00"`.
    value: String,
}

#[derive(Deserialize)]
struct MolliePayment {
    id: String,
    status: String,
    amount: MollieAmount,
    #[serde(rename = "_links")]
    links: Option<MollieLinks>,
}

#[derive(Deserialize)]
struct MollieLinks {
    checkout: Option<MollieLink>,
}

#[derive(Deserialize)]
struct MollieLink {
    href: String,
}

/// Result of creating a checkout with Mollie.
#[derive(Debug, Clone, PartialEq)]
pub struct MollieCheckout {
    pub payment_id: String,
    pub checkout_url: String,
}

pub struct MollieService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> MollieService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        config: &'a Config,
    ) -> Self {
        Self {
            db,
            http_client,
            config,
        }
    }

    /// Creates a payment with Mollie and records it locally as pending.
    pub async fn create_payment(
        &self,
        profile_id: i32,
        amount_cents: i64,
        currency: &str,
        description: &str,
    ) -> Result<MollieCheckout, AppError> {
        if amount_cents <= 0 {
            return Err(AppError::BadRequest("Amount must be positive".to_string()));
        }

        let request = CreatePaymentRequest {
            amount: MollieAmount {
                currency: currency.to_uppercase(),
                value: format_cents(amount_cents),
            },
            description,
            redirect_url: format!("{}/payment/complete", self.config.app_url),
            webhook_url: format!("{}/api/webhooks/mollie", self.config.app_url),
            metadata: PaymentMetadata { profile_id },
        };

        let response = self
            .http_client
            .post(format!("{}/payments", self.config.mollie_api_url))
            .bearer_auth(&self.config.mollie_api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body, "mollie payment creation rejected");
            return Err(AppError::InternalError(format!(
                "Mollie rejected payment creation with status {status}"
            )));
        }

        let payment: MolliePayment = response.json().await?;

        let checkout_url = payment
            .links
            .and_then(|l| l.checkout)
            .map(|c| c.href)
            .ok_or_else(|| {
                AppError::InternalError("Mollie response carried no checkout link".to_string())
            })?;

        PaymentRepository::new(self.db)
            .record(RecordPaymentParam {
                profile_id,
                provider: "mollie".to_string(),
                provider_payment_id: payment.id.clone(),
                amount_cents,
                currency: currency.to_uppercase(),
                status: payment.status,
            })
            .await?;

        tracing::info!(profile_id, payment_id = %payment.id, "mollie payment created");

        Ok(MollieCheckout {
            payment_id: payment.id,
            checkout_url,
        })
    }

    /// Syncs a payment's status from the Mollie API after a webhook ping.
    ///
    /// Unknown payment ids are acknowledged without effect; a `paid` status
    /// also activates the member's subscription.
    pub async fn sync_payment(&self, provider_payment_id: &str) -> Result<(), AppError> {
        let repo = PaymentRepository::new(self.db);

        let Some(stored) = repo.find_by_provider_id(provider_payment_id).await? else {
            tracing::warn!(payment_id = provider_payment_id, "mollie webhook for unknown payment");
            return Ok(());
        };

        let response = self
            .http_client
            .get(format!(
                "{}/payments/{provider_payment_id}",
                self.config.mollie_api_url
            ))
            .bearer_auth(&self.config.mollie_api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body, "mollie payment fetch failed");
            return Err(AppError::InternalError(format!(
                "Mollie payment fetch failed with status {status}"
            )));
        }

        let payment: MolliePayment = response.json().await?;

        repo.set_status(stored.id, &payment.status).await?;
        tracing::info!(
            payment_id = provider_payment_id,
            status = %payment.status,
            "mollie payment synced"
        );

        if payment.status == "paid" {
            ProfileRepository::new(self.db)
                .set_subscription_status(stored.profile_id, SubscriptionStatus::Active)
                .await?;
            tracing::info!(profile_id = stored.profile_id, "subscription activated via mollie");
        }

        Ok(())
    }
}

/// Formats an amount in cents as Mollie's decimal string.
fn format_cents(amount_cents: i64) -> String {
    format!("{}.{:02}", amount_cents / 100, amount_cents % 100)
}
