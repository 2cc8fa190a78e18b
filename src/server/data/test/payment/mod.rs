use crate::server::{data::payment::PaymentRepository, model::payment::RecordPaymentParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod record;
