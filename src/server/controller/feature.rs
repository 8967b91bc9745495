use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, IdDto, IdQuery},
        feature::{CreateFeatureDto, FeatureDto},
    },
    server::{
        controller::{
            collection_delete_id,
            extract::{ApiJson, ApiPath, ApiQuery},
        },
        error::AppError,
        model::feature::CreateFeatureParam,
        service::feature::FeatureService,
        state::AppState,
    },
};

/// Tag for grouping feature endpoints in OpenAPI documentation
pub static FEATURE_TAG: &str = "feature";

/// List all features.
///
/// # Returns
/// - `200 OK` - Features ordered newest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/features",
    tag = FEATURE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved features", body = Vec<FeatureDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_features(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let features = FeatureService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(features)))
}

/// Create a feature.
///
/// The label is trimmed and must not be empty. A blank description is stored as null.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Feature label and optional description
///
/// # Returns
/// - `201 Created` - The persisted feature
/// - `400 Bad Request` - Missing or blank label
/// - `409 Conflict` - A feature with the same label exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/features",
    tag = FEATURE_TAG,
    request_body = CreateFeatureDto,
    responses(
        (status = 201, description = "Successfully created feature", body = FeatureDto),
        (status = 400, description = "Feature label is required", body = ErrorDto),
        (status = 409, description = "Feature label already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_feature(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateFeatureDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateFeatureParam::from_dto(payload)?;
    let feature = FeatureService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(feature)))
}

/// Delete a feature.
///
/// Features still attached to a plan cannot be deleted.
///
/// # Returns
/// - `200 OK` - Feature deleted
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No feature with that ID
/// - `409 Conflict` - Feature is attached to a plan
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/features/{id}",
    tag = FEATURE_TAG,
    params(
        ("id" = Uuid, Path, description = "Feature ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted feature", body = DeletedDto),
        (status = 400, description = "Malformed feature ID", body = ErrorDto),
        (status = 404, description = "Feature not found", body = ErrorDto),
        (status = 409, description = "Feature is attached to a plan", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_feature(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, id).await
}

/// Delete a feature named by `?id=` or by a `{"id": ...}` body.
///
/// Collection form used by the admin pages. Behaves like `DELETE /api/features/{id}`.
#[utoipa::path(
    delete,
    path = "/api/features",
    tag = FEATURE_TAG,
    params(IdQuery),
    request_body(content = IdDto, description = "Alternative to the `id` query parameter"),
    responses(
        (status = 200, description = "Successfully deleted feature", body = DeletedDto),
        (status = 400, description = "Feature id is required", body = ErrorDto),
        (status = 404, description = "Feature not found", body = ErrorDto),
        (status = 409, description = "Feature is attached to a plan", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_feature_by_id_param(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<IdQuery>,
    payload: Option<ApiJson<IdDto>>,
) -> Result<impl IntoResponse, AppError> {
    let id = collection_delete_id(
        query,
        payload.map(|ApiJson(body)| body),
        "Feature id is required.",
    )?;

    delete(&state, id).await
}

async fn delete(state: &AppState, id: Uuid) -> Result<impl IntoResponse, AppError> {
    FeatureService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: "Feature deleted.".to_string(),
            id,
        }),
    ))
}
