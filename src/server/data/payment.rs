//! Payment data repository.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::payment::{Payment, RecordPaymentParam};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a payment keyed on the provider's payment id.
    ///
    /// Webhook redeliveries and status transitions update the existing row's
    /// status instead of inserting a duplicate.
    pub async fn record(&self, param: RecordPaymentParam) -> Result<Payment, DbErr> {
        let entity = entity::prelude::Payment::insert(entity::payment::ActiveModel {
            profile_id: ActiveValue::Set(param.profile_id),
            provider: ActiveValue::Set(param.provider),
            provider_payment_id: ActiveValue::Set(param.provider_payment_id),
            amount_cents: ActiveValue::Set(param.amount_cents),
            currency: ActiveValue::Set(param.currency),
            status: ActiveValue::Set(param.status),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::payment::Column::ProviderPaymentId)
                .update_columns([entity::payment::Column::Status])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }

    pub async fn find_by_provider_id(
        &self,
        provider_payment_id: &str,
    ) -> Result<Option<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::ProviderPaymentId.eq(provider_payment_id))
            .one(self.db)
            .await
    }

    pub async fn set_status(&self, id: i32, status: &str) -> Result<(), DbErr> {
        entity::prelude::Payment::update_many()
            .filter(entity::payment::Column::Id.eq(id))
            .col_expr(
                entity::payment::Column::Status,
                sea_orm::sea_query::Expr::value(status),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn get_for_profile(&self, profile_id: i32) -> Result<Vec<Payment>, DbErr> {
        let payments = entity::prelude::Payment::find()
            .filter(entity::payment::Column::ProfileId.eq(profile_id))
            .order_by_desc(entity::payment::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(payments.into_iter().map(Payment::from_entity).collect())
    }
}
