//! Payment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::payment::PaymentDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub profile_id: i32,
    pub provider: String,
    pub provider_payment_id: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            profile_id: entity.profile_id,
            provider: entity.provider,
            provider_payment_id: entity.provider_payment_id,
            amount_cents: entity.amount_cents,
            currency: entity.currency,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            provider: self.provider,
            provider_payment_id: self.provider_payment_id,
            amount_cents: self.amount_cents,
            currency: self.currency,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// Parameters for recording a payment observed from a provider.
///
/// Upserted on `provider_payment_id` so webhook redeliveries update the
/// status of the existing row instead of inserting a duplicate.
#[derive(Debug, Clone)]
pub struct RecordPaymentParam {
    pub profile_id: i32,
    pub provider: String,
    pub provider_payment_id: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
}
