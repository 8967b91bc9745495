//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer. Domain models are
//! converted from entity models at the repository boundary and transformed to DTOs at the
//! controller boundary. Parameter types carry validated, normalized input for a single
//! operation.

pub mod feature;
pub mod plan_type;
pub mod stats;
pub mod subscription_plan;

/// Trims a free-text field, turning blank input into `None`.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
