use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation returned by every delete endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedDto {
    pub message: String,
    pub id: Uuid,
}

/// Request body of a collection `DELETE` such as `DELETE /api/plan_types`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct IdDto {
    pub id: Option<Uuid>,
}

/// Query string of a collection `DELETE` such as `DELETE /api/features?id=`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    pub id: Option<Uuid>,
}
