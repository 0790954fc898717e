use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed proxy call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = "Error fetching news")]
    pub message: String,
}
