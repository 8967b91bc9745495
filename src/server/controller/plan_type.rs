use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, IdDto, IdQuery},
        plan_type::{CreatePlanTypeDto, PlanTypeDto},
    },
    server::{
        controller::{
            collection_delete_id,
            extract::{ApiJson, ApiPath, ApiQuery},
        },
        error::AppError,
        model::plan_type::CreatePlanTypeParam,
        service::plan_type::PlanTypeService,
        state::AppState,
    },
};

/// Tag for grouping plan type endpoints in OpenAPI documentation
pub static PLAN_TYPE_TAG: &str = "plan_type";

/// List all plan types.
///
/// # Returns
/// - `200 OK` - Plan types in creation order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/plan_types",
    tag = PLAN_TYPE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved plan types", body = Vec<PlanTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plan_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let plan_types = PlanTypeService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(plan_types)))
}

/// Create a plan type.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Plan type name and optional description
///
/// # Returns
/// - `201 Created` - The persisted plan type
/// - `400 Bad Request` - Missing or blank name
/// - `409 Conflict` - A plan type with the same name exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/plan_types",
    tag = PLAN_TYPE_TAG,
    request_body = CreatePlanTypeDto,
    responses(
        (status = 201, description = "Successfully created plan type", body = PlanTypeDto),
        (status = 400, description = "Name is required", body = ErrorDto),
        (status = 409, description = "Plan type name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plan_type(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreatePlanTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreatePlanTypeParam::from_dto(payload)?;
    let plan_type = PlanTypeService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(plan_type)))
}

/// Delete a plan type.
///
/// Plan types still referenced by a subscription plan cannot be deleted.
///
/// # Returns
/// - `200 OK` - Plan type deleted
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No plan type with that ID
/// - `409 Conflict` - Plan type is used by a plan
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/plan_types/{id}",
    tag = PLAN_TYPE_TAG,
    params(
        ("id" = Uuid, Path, description = "Plan type ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted plan type", body = DeletedDto),
        (status = 400, description = "Malformed plan type ID", body = ErrorDto),
        (status = 404, description = "Plan type not found", body = ErrorDto),
        (status = 409, description = "Plan type is used by a plan", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_plan_type(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, id).await
}

/// Delete a plan type named by `?id=` or by a `{"id": ...}` body.
///
/// Collection form used by the admin pages. Behaves like `DELETE /api/plan_types/{id}`.
#[utoipa::path(
    delete,
    path = "/api/plan_types",
    tag = PLAN_TYPE_TAG,
    params(IdQuery),
    request_body(content = IdDto, description = "Alternative to the `id` query parameter"),
    responses(
        (status = 200, description = "Successfully deleted plan type", body = DeletedDto),
        (status = 400, description = "Plan type id is required", body = ErrorDto),
        (status = 404, description = "Plan type not found", body = ErrorDto),
        (status = 409, description = "Plan type is used by a plan", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_plan_type_by_id_param(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<IdQuery>,
    payload: Option<ApiJson<IdDto>>,
) -> Result<impl IntoResponse, AppError> {
    let id = collection_delete_id(
        query,
        payload.map(|ApiJson(body)| body),
        "Plan type id is required.",
    )?;

    delete(&state, id).await
}

async fn delete(state: &AppState, id: Uuid) -> Result<impl IntoResponse, AppError> {
    PlanTypeService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: "Plan type deleted.".to_string(),
            id,
        }),
    ))
}
