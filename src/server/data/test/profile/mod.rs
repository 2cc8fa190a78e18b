use crate::server::{
    data::profile::ProfileRepository,
    model::profile::{CreateProfileParam, SubscriptionStatus},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_xp;
mod admin_exists;
mod create;
mod get_all_paginated;
mod set_subscription_status;
