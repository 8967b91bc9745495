use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, stats::CatalogStatsDto},
    server::{error::AppError, service::stats::StatsService, state::AppState},
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Catalog totals for the admin dashboard.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Successfully counted catalog entries", body = CatalogStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = StatsService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(stats)))
}
