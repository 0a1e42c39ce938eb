use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::job_dto::default_status;
use crate::utils::validation::{validate_not_blank, validate_status};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentPayload {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub name: String,
    pub job_title_id: i32,
    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub content: String,
    #[serde(default = "default_status")]
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}
