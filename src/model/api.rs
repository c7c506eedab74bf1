use serde::{Deserialize, Serialize};

/// The response body when an API request fails.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message.
    pub error: String,
}
