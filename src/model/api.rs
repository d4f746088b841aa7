use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform error body returned by every failing route.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}
