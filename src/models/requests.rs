use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to the dating-advisor chat passthrough
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "userId", rename = "user_id")]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub message: String,
}
