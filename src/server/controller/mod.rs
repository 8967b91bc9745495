//! HTTP request handlers.
//!
//! Controllers extract path, query and JSON input, convert request DTOs into validated
//! parameters, call the matching service and wrap the result in a status code and JSON body.

pub mod extract;
pub mod feature;
pub mod plan_type;
pub mod stats;
pub mod subscription_plan;

use uuid::Uuid;

use crate::{
    model::api::{IdDto, IdQuery},
    server::error::AppError,
};

/// Resolves the id of a collection `DELETE` sent as `?id=` or as a `{"id": ...}` body.
///
/// The query string wins when both are present.
fn collection_delete_id(
    query: IdQuery,
    body: Option<IdDto>,
    missing: &str,
) -> Result<Uuid, AppError> {
    query
        .id
        .or_else(|| body.and_then(|body| body.id))
        .ok_or_else(|| AppError::BadRequest(missing.to_string()))
}
