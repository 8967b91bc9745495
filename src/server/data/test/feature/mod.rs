use crate::server::{
    data::feature::FeatureRepository, error::is_constraint_violation,
    model::feature::CreateFeatureParam,
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod count_existing;
mod create;
mod delete;
mod find_by_id;
mod get_all;
mod plan_count;
