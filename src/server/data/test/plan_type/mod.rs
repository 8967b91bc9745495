use crate::server::{
    data::plan_type::PlanTypeRepository,
    error::{is_constraint_violation, AppError},
    model::plan_type::CreatePlanTypeParam,
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod find_by_name;
mod get_all;
mod plan_count;
