use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every contact relay response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    /// Whether the admin notification was delivered
    pub success: bool,

    /// Human-readable outcome
    pub message: String,
}

impl ContactResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
