use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{feature, plan_type, stats, subscription_plan},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Plan Catalog API",
        description = "Administration of features, plan types and subscription plans"
    ),
    tags(
        (name = "feature", description = "Capabilities that can be attached to plans"),
        (name = "plan_type", description = "Categories grouping subscription plans"),
        (name = "subscription_plan", description = "Priced plans and their features"),
        (name = "stats", description = "Dashboard totals")
    )
)]
pub struct ApiDoc;

/// Registers every API route along with its OpenAPI operation.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            feature::get_features,
            feature::create_feature,
            feature::delete_feature_by_id_param
        ))
        .routes(routes!(feature::delete_feature))
        .routes(routes!(
            plan_type::get_plan_types,
            plan_type::create_plan_type,
            plan_type::delete_plan_type_by_id_param
        ))
        .routes(routes!(plan_type::delete_plan_type))
        .routes(routes!(
            subscription_plan::get_subscription_plans,
            subscription_plan::create_subscription_plan,
            subscription_plan::delete_subscription_plan_by_id_param
        ))
        .routes(routes!(
            subscription_plan::get_subscription_plan,
            subscription_plan::delete_subscription_plan
        ))
        .routes(routes!(stats::get_stats))
        .split_for_parts()
}

/// Builds the complete application: API routes, Swagger UI, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let (api_routes, api_doc) = router();

    api_routes
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api_doc))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
