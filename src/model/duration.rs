use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Human-facing billing cycle of a plan.
///
/// The catalog stores a plain month count (`duration_months`); older clients send and
/// expect one of these labels instead. `0` months means the plan never renews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DurationLabel {
    Monthly,
    Yearly,
    Lifetime,
}

impl DurationLabel {
    /// Month count stored for this label.
    pub fn months(self) -> i32 {
        match self {
            Self::Monthly => 1,
            Self::Yearly => 12,
            Self::Lifetime => 0,
        }
    }

    /// Label for a stored month count, if it is one of the canonical cycles.
    ///
    /// # Returns
    /// - `Some(label)` - For 0, 1 and 12 months
    /// - `None` - For any other count (e.g. a quarterly plan)
    pub fn from_months(months: i32) -> Option<Self> {
        match months {
            0 => Some(Self::Lifetime),
            1 => Some(Self::Monthly),
            12 => Some(Self::Yearly),
            _ => None,
        }
    }
}
