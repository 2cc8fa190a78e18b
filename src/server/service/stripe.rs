//! Stripe webhook handling.
//!
//! Stripe signs each delivery with an HMAC-SHA256 over `"{timestamp}.{body}"`,
//! sent as `Stripe-Signature: t=<timestamp>,v1=<hex>`. Verification happens
//! against the raw request body before anything is parsed or written.

use std::collections::HashMap;

use hmac::{Hmac, Mac};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use sha2::Sha256;

use crate::server::{
    config::Config,
    data::{payment::PaymentRepository, profile::ProfileRepository},
    error::{webhook::WebhookError, AppError},
    model::{
        payment::RecordPaymentParam,
        profile::SubscriptionStatus,
    },
    service::email::{EmailService, EmailTemplate},
};

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Deserialize)]
struct StripeEvent {
    #[serde(rename = "type")]
    event_type: String,
    data: StripeEventData,
}

#[derive(Debug, Deserialize)]
struct StripeEventData {
    object: StripeObject,
}

/// The fields we read off the event's inner object. Stripe's objects carry
/// far more; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
struct StripeObject {
    id: Option<String>,
    customer_email: Option<String>,
    customer_details: Option<StripeCustomerDetails>,
    client_reference_id: Option<String>,
    #[serde(default)]
    metadata: HashMap<String, String>,
    amount_total: Option<i64>,
    amount_due: Option<i64>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeCustomerDetails {
    email: Option<String>,
}

impl StripeObject {
    fn email(&self) -> Option<&str> {
        self.customer_email
            .as_deref()
            .or_else(|| self.customer_details.as_ref().and_then(|d| d.email.as_deref()))
    }
}

pub struct StripeService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> StripeService<'a> {
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

    /// Verifies and processes one webhook delivery.
    ///
    /// Signature failures return before any parsing or database access.
    pub async fn handle_webhook(
        &self,
        signature_header: Option<&str>,
        body: &str,
    ) -> Result<(), AppError> {
        let header = signature_header.ok_or(WebhookError::MissingSignature)?;
        verify_signature(&self.config.stripe_webhook_secret, header, body)?;

        let event: StripeEvent = serde_json::from_str(body)
            .map_err(|err| WebhookError::MalformedPayload(err.to_string()))?;

        match event.event_type.as_str() {
            "checkout.session.completed" => self.handle_checkout_completed(&event.data.object).await,
            "invoice.payment_failed" => self.handle_payment_failed(&event.data.object).await,
            "customer.subscription.deleted" => {
                self.handle_subscription_deleted(&event.data.object).await
            }
            other => {
                tracing::info!(event_type = other, "ignoring unhandled stripe event");
                Ok(())
            }
        }
    }

    async fn handle_checkout_completed(&self, object: &StripeObject) -> Result<(), AppError> {
        let Some(profile) = self.resolve_profile(object).await? else {
            return Ok(());
        };

        ProfileRepository::new(self.db)
            .set_subscription_status(profile.id, SubscriptionStatus::Active)
            .await?;

        if let Some(session_id) = &object.id {
            PaymentRepository::new(self.db)
                .record(RecordPaymentParam {
                    profile_id: profile.id,
                    provider: "stripe".to_string(),
                    provider_payment_id: session_id.clone(),
                    amount_cents: object.amount_total.unwrap_or(0),
                    currency: object.currency.clone().unwrap_or_else(|| "eur".to_string()),
                    status: "paid".to_string(),
                })
                .await?;
        }

        tracing::info!(profile_id = profile.id, "checkout completed, subscription active");

        EmailService::new(self.http_client, self.config)
            .send(&profile.email, EmailTemplate::Welcome, &[("name", &profile.name)])
            .await;

        Ok(())
    }

    async fn handle_payment_failed(&self, object: &StripeObject) -> Result<(), AppError> {
        let Some(profile) = self.resolve_profile(object).await? else {
            return Ok(());
        };

        ProfileRepository::new(self.db)
            .set_subscription_status(profile.id, SubscriptionStatus::PastDue)
            .await?;

        if let Some(invoice_id) = &object.id {
            PaymentRepository::new(self.db)
                .record(RecordPaymentParam {
                    profile_id: profile.id,
                    provider: "stripe".to_string(),
                    provider_payment_id: invoice_id.clone(),
                    amount_cents: object.amount_due.unwrap_or(0),
                    currency: object.currency.clone().unwrap_or_else(|| "eur".to_string()),
                    status: "failed".to_string(),
                })
                .await?;
        }

        tracing::warn!(profile_id = profile.id, "payment failed, subscription past due");

        EmailService::new(self.http_client, self.config)
            .send(
                &profile.email,
                EmailTemplate::PaymentFailed,
                &[("name", &profile.name)],
            )
            .await;

        Ok(())
    }

    async fn handle_subscription_deleted(&self, object: &StripeObject) -> Result<(), AppError> {
        let Some(profile) = self.resolve_profile(object).await? else {
            return Ok(());
        };

        ProfileRepository::new(self.db)
            .set_subscription_status(profile.id, SubscriptionStatus::Inactive)
            .await?;

        tracing::info!(profile_id = profile.id, "subscription deleted, now inactive");
        Ok(())
    }

    /// Resolves the event's member: `metadata.profile_id` first, then
    /// `client_reference_id`, then the customer email. Events for unknown
    /// members are logged and acknowledged so Stripe stops redelivering them.
    async fn resolve_profile(
        &self,
        object: &StripeObject,
    ) -> Result<Option<entity::profile::Model>, AppError> {
        let repo = ProfileRepository::new(self.db);

        let metadata_id = object
            .metadata
            .get("profile_id")
            .or(object.client_reference_id.as_ref())
            .and_then(|v| v.parse::<i32>().ok());

        if let Some(id) = metadata_id {
            if let Some(profile) = repo.find_by_id(id).await? {
                return Ok(Some(profile));
            }
        }

        if let Some(email) = object.email() {
            if let Some(profile) = repo.find_by_email(email).await? {
                return Ok(Some(profile));
            }
        }

        tracing::warn!(object_id = ?object.id, "stripe event did not match any profile");
        Ok(None)
    }
}

/// Checks the `Stripe-Signature` header against the raw body.
///
/// The header holds comma-separated `k=v` pairs; `t` is the signing timestamp
/// and each `v1` is a candidate hex HMAC. Any matching `v1` accepts the
/// delivery. Comparison goes through the MAC's constant-time verify.
pub fn verify_signature(secret: &str, header: &str, body: &str) -> Result<(), WebhookError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for pair in header.split(',') {
        let Some((key, value)) = pair.trim().split_once('=') else {
            return Err(WebhookError::MalformedSignature(header.to_string()));
        };
        match key {
            "t" => timestamp = Some(value),
            "v1" => signatures.push(value),
            _ => (),
        }
    }

    let timestamp = timestamp
        .ok_or_else(|| WebhookError::MalformedSignature(header.to_string()))?;
    if signatures.is_empty() {
        return Err(WebhookError::MalformedSignature(header.to_string()));
    }

    let signed_payload = format!("{timestamp}.{body}");

    for signature in signatures {
        let Ok(expected) = hex::decode(signature) else {
            continue;
        };

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|_| WebhookError::InvalidSignature)?;
        mac.update(signed_payload.as_bytes());
        if mac.verify_slice(&expected).is_ok() {
            return Ok(());
        }
    }

    Err(WebhookError::InvalidSignature)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(secret: &str, timestamp: &str, body: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(format!("{timestamp}.{body}").as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn accepts_valid_signature() {
        let secret = "whsec_test";
        let body = r#"{"type":"checkout.session.completed"}"#;
        let sig = sign(secret, "1700000000", body);
        let header = format!("t=1700000000,v1={sig}");

        assert!(verify_signature(secret, &header, body).is_ok());
    }

    #[test]
    fn accepts_any_matching_v1_among_several() {
        let secret = "whsec_test";
        let body = "{}";
        let sig = sign(secret, "1700000000", body);
        let header = format!("t=1700000000,v1={},v1={sig}", "0".repeat(64));

        assert!(verify_signature(secret, &header, body).is_ok());
    }

    #[test]
    fn rejects_wrong_secret() {
        let body = "{}";
        let sig = sign("whsec_other", "1700000000", body);
        let header = format!("t=1700000000,v1={sig}");

        assert!(matches!(
            verify_signature("whsec_test", &header, body),
            Err(WebhookError::InvalidSignature)
        ));
    }

    #[test]
    fn rejects_tampered_body() {
        let secret = "whsec_test";
        let sig = sign(secret, "1700000000", r#"{"amount":100}"#);
        let header = format!("t=1700000000,v1={sig}");

        assert!(matches!(
            verify_signature(secret, &header, r#"{"amount":999}"#),
            Err(WebhookError::InvalidSignature)
        ));
    }

    #[test]
    fn rejects_header_without_timestamp() {
        let result = verify_signature("whsec_test", "v1=deadbeef", "{}");
        assert!(matches!(result, Err(WebhookError::MalformedSignature(_))));
    }

    #[test]
    fn rejects_garbage_header() {
        let result = verify_signature("whsec_test", "not a signature", "{}");
        assert!(matches!(result, Err(WebhookError::MalformedSignature(_))));
    }

    mod dispatch {
        use super::*;
        use test_utils::{builder::TestBuilder, factory};

        const SECRET: &str = "whsec_test";

        fn test_config() -> Config {
            Config {
                database_url: String::new(),
                app_url: "http://localhost:3000".to_string(),
                listen_addr: String::new(),
                stripe_webhook_secret: SECRET.to_string(),
                mollie_api_key: String::new(),
                facebook_access_token: String::new(),
                facebook_ad_account_id: String::new(),
                // Unroutable on purpose; sends are fire-and-forget.
                email_api_url: "http://127.0.0.1:9".to_string(),
                email_api_key: String::new(),
                email_from: "noreply@example.com".to_string(),
                mollie_api_url: String::new(),
                facebook_graph_url: String::new(),
            }
        }

        fn signed_header(body: &str) -> String {
            format!("t=1700000000,v1={}", sign(SECRET, "1700000000", body))
        }

        fn checkout_body(profile_id: i32) -> String {
            format!(
                r#"{{"type":"checkout.session.completed","data":{{"object":{{"id":"cs_1","metadata":{{"profile_id":"{profile_id}"}},"amount_total":4900,"currency":"eur"}}}}}}"#
            )
        }

        /// A bad signature is rejected before any row changes.
        #[tokio::test]
        async fn invalid_signature_mutates_nothing() -> Result<(), AppError> {
            let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();

            let profile = factory::profile::create_profile(db).await?;
            let config = test_config();
            let client = reqwest::Client::new();
            let service = StripeService::new(db, &client, &config);

            let body = checkout_body(profile.id);
            let header = format!("t=1700000000,v1={}", "0".repeat(64));

            let result = service.handle_webhook(Some(&header), &body).await;
            assert!(matches!(result, Err(AppError::WebhookErr(_))));

            let profile = ProfileRepository::new(db).find_by_id(profile.id).await?.unwrap();
            assert_eq!(profile.subscription_status, "inactive");
            assert!(PaymentRepository::new(db)
                .get_for_profile(profile.id)
                .await?
                .is_empty());

            Ok(())
        }

        /// Deliveries without the signature header never reach the database.
        #[tokio::test]
        async fn missing_signature_is_rejected() -> Result<(), AppError> {
            let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();

            let profile = factory::profile::create_profile(db).await?;
            let config = test_config();
            let client = reqwest::Client::new();
            let service = StripeService::new(db, &client, &config);

            let result = service.handle_webhook(None, &checkout_body(profile.id)).await;
            assert!(matches!(result, Err(AppError::WebhookErr(_))));

            let profile = ProfileRepository::new(db).find_by_id(profile.id).await?.unwrap();
            assert_eq!(profile.subscription_status, "inactive");

            Ok(())
        }

        /// A signed checkout completion activates the member and records the
        /// payment.
        #[tokio::test]
        async fn checkout_completed_activates_member() -> Result<(), AppError> {
            let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();

            let profile = factory::profile::create_profile(db).await?;
            let config = test_config();
            let client = reqwest::Client::new();
            let service = StripeService::new(db, &client, &config);

            let body = checkout_body(profile.id);
            service.handle_webhook(Some(&signed_header(&body)), &body).await?;

            let updated = ProfileRepository::new(db).find_by_id(profile.id).await?.unwrap();
            assert_eq!(updated.subscription_status, "active");

            let payments = PaymentRepository::new(db).get_for_profile(profile.id).await?;
            assert_eq!(payments.len(), 1);
            assert_eq!(payments[0].provider, "stripe");
            assert_eq!(payments[0].provider_payment_id, "cs_1");
            assert_eq!(payments[0].amount_cents, 4900);
            assert_eq!(payments[0].status, "paid");

            Ok(())
        }

        /// A failed invoice moves the member to past_due and records the miss.
        #[tokio::test]
        async fn payment_failed_marks_past_due() -> Result<(), AppError> {
            let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();

            let profile = factory::profile::ProfileFactory::new(db)
                .subscription_status("active")
                .build()
                .await?;
            let config = test_config();
            let client = reqwest::Client::new();
            let service = StripeService::new(db, &client, &config);

            let body = format!(
                r#"{{"type":"invoice.payment_failed","data":{{"object":{{"id":"in_1","metadata":{{"profile_id":"{}"}},"amount_due":4900,"currency":"eur"}}}}}}"#,
                profile.id
            );
            service.handle_webhook(Some(&signed_header(&body)), &body).await?;

            let updated = ProfileRepository::new(db).find_by_id(profile.id).await?.unwrap();
            assert_eq!(updated.subscription_status, "past_due");

            let payments = PaymentRepository::new(db).get_for_profile(profile.id).await?;
            assert_eq!(payments.len(), 1);
            assert_eq!(payments[0].status, "failed");

            Ok(())
        }

        /// A cancelled subscription deactivates the member; nothing is billed.
        #[tokio::test]
        async fn subscription_deleted_deactivates_member() -> Result<(), AppError> {
            let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();

            let profile = factory::profile::ProfileFactory::new(db)
                .subscription_status("active")
                .build()
                .await?;
            let config = test_config();
            let client = reqwest::Client::new();
            let service = StripeService::new(db, &client, &config);

            let body = format!(
                r#"{{"type":"customer.subscription.deleted","data":{{"object":{{"id":"sub_1","metadata":{{"profile_id":"{}"}}}}}}}}"#,
                profile.id
            );
            service.handle_webhook(Some(&signed_header(&body)), &body).await?;

            let updated = ProfileRepository::new(db).find_by_id(profile.id).await?.unwrap();
            assert_eq!(updated.subscription_status, "inactive");
            assert!(PaymentRepository::new(db)
                .get_for_profile(profile.id)
                .await?
                .is_empty());

            Ok(())
        }

        /// The email fallback resolves members when no profile id is attached.
        #[tokio::test]
        async fn resolves_member_by_email() -> Result<(), AppError> {
            let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();

            let profile = factory::profile::create_profile(db).await?;
            let config = test_config();
            let client = reqwest::Client::new();
            let service = StripeService::new(db, &client, &config);

            let body = format!(
                r#"{{"type":"checkout.session.completed","data":{{"object":{{"id":"cs_2","customer_email":"{}","amount_total":4900,"currency":"eur"}}}}}}"#,
                profile.email
            );
            service.handle_webhook(Some(&signed_header(&body)), &body).await?;

            let updated = ProfileRepository::new(db).find_by_id(profile.id).await?.unwrap();
            assert_eq!(updated.subscription_status, "active");

            Ok(())
        }

        /// Events for unknown members are acknowledged so Stripe stops
        /// redelivering, and write nothing.
        #[tokio::test]
        async fn unknown_member_is_acknowledged() -> Result<(), AppError> {
            let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
            let db = test.db.as_ref().unwrap();

            let bystander = factory::profile::create_profile(db).await?;
            let config = test_config();
            let client = reqwest::Client::new();
            let service = StripeService::new(db, &client, &config);

            let body = checkout_body(9999);
            service.handle_webhook(Some(&signed_header(&body)), &body).await?;

            let bystander = ProfileRepository::new(db).find_by_id(bystander.id).await?.unwrap();
            assert_eq!(bystander.subscription_status, "inactive");

            Ok(())
        }
    }
}
