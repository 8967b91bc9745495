//! Data transfer objects exchanged over the HTTP API.
//!
//! Every request and response body lives here. Server-side code converts these into
//! parameter and domain models at the controller boundary.

pub mod api;
pub mod duration;
pub mod feature;
pub mod plan_type;
pub mod stats;
pub mod subscription_plan;
