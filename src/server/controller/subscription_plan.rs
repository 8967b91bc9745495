use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, IdDto, IdQuery},
        subscription_plan::{CreateSubscriptionPlanDto, SubscriptionPlanDto},
    },
    server::{
        controller::{
            collection_delete_id,
            extract::{ApiJson, ApiPath, ApiQuery},
        },
        error::AppError,
        model::subscription_plan::CreateSubscriptionPlanParam,
        service::subscription_plan::SubscriptionPlanService,
        state::AppState,
    },
};

/// Tag for grouping subscription plan endpoints in OpenAPI documentation
pub static SUBSCRIPTION_PLAN_TAG: &str = "subscription_plan";

/// List all subscription plans.
///
/// Each plan carries its plan type name and attached features.
///
/// # Returns
/// - `200 OK` - Plans ordered by price, cheapest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/subscription_plans",
    tag = SUBSCRIPTION_PLAN_TAG,
    responses(
        (status = 200, description = "Successfully retrieved subscription plans", body = Vec<SubscriptionPlanDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscription_plans(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let plans = SubscriptionPlanService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(plans)))
}

/// Get a single subscription plan.
#[utoipa::path(
    get,
    path = "/api/subscription_plans/{id}",
    tag = SUBSCRIPTION_PLAN_TAG,
    params(
        ("id" = Uuid, Path, description = "Subscription plan ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved subscription plan", body = SubscriptionPlanDto),
        (status = 400, description = "Malformed subscription plan ID", body = ErrorDto),
        (status = 404, description = "Subscription plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscription_plan(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let plan = SubscriptionPlanService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(plan)))
}

/// Create a subscription plan with its features.
///
/// Accepts both the current field names (`label_suffix`, `duration_months`) and the
/// earlier ones (`name`, `duration`). `label_suffix` wins when both names are sent. Features can be listed as plain `feature_ids`,
/// as detailed `features` entries with a key and limit, or both. The plan and all of
/// its feature links are written in one transaction.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Plan fields and features to attach
///
/// # Returns
/// - `201 Created` - The created plan with plan type name and features
/// - `400 Bad Request` - Missing name, plan type, price or duration, invalid values, or a
///   malformed body such as a `feature_ids` entry that is not a UUID
/// - `409 Conflict` - Unknown plan type or feature, or duplicate name within the plan type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/subscription_plans",
    tag = SUBSCRIPTION_PLAN_TAG,
    request_body = CreateSubscriptionPlanDto,
    responses(
        (status = 201, description = "Successfully created subscription plan", body = SubscriptionPlanDto),
        (status = 400, description = "Invalid subscription plan data", body = ErrorDto),
        (status = 409, description = "Unknown plan type or feature, or duplicate plan", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subscription_plan(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateSubscriptionPlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateSubscriptionPlanParam::from_dto(payload)?;
    let plan = SubscriptionPlanService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(plan)))
}

/// Delete a subscription plan.
///
/// Feature links are removed with the plan; the features themselves are kept.
///
/// # Returns
/// - `200 OK` - Plan deleted
/// - `400 Bad Request` - Malformed plan ID
/// - `404 Not Found` - No plan with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/subscription_plans/{id}",
    tag = SUBSCRIPTION_PLAN_TAG,
    params(
        ("id" = Uuid, Path, description = "Subscription plan ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted subscription plan", body = DeletedDto),
        (status = 400, description = "Malformed subscription plan ID", body = ErrorDto),
        (status = 404, description = "Subscription plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subscription_plan(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, id).await
}

/// Delete a subscription plan named by `?id=` or by a `{"id": ...}` body.
///
/// Collection form used by the admin pages. Behaves like
/// `DELETE /api/subscription_plans/{id}`.
#[utoipa::path(
    delete,
    path = "/api/subscription_plans",
    tag = SUBSCRIPTION_PLAN_TAG,
    params(IdQuery),
    request_body(content = IdDto, description = "Alternative to the `id` query parameter"),
    responses(
        (status = 200, description = "Successfully deleted subscription plan", body = DeletedDto),
        (status = 400, description = "Subscription plan id is required", body = ErrorDto),
        (status = 404, description = "Subscription plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subscription_plan_by_id_param(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<IdQuery>,
    payload: Option<ApiJson<IdDto>>,
) -> Result<impl IntoResponse, AppError> {
    let id = collection_delete_id(
        query,
        payload.map(|ApiJson(body)| body),
        "Subscription plan id is required.",
    )?;

    delete(&state, id).await
}

async fn delete(state: &AppState, id: Uuid) -> Result<impl IntoResponse, AppError> {
    SubscriptionPlanService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: "Subscription plan deleted.".to_string(),
            id,
        }),
    ))
}
