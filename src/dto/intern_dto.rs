use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::dto::common::TagSummary;
use crate::dto::job_dto::default_status;
use crate::models::intern::Intern;
use crate::utils::validation::{validate_date_window, validate_status};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_intern_window"))]
pub struct InternPayload {
    pub job_title_id: i32,
    pub description: Option<String>,
    pub requirements: Option<String>,
    #[validate(length(max = 100))]
    pub duration: Option<String>,
    #[serde(default = "default_status")]
    #[validate(custom(function = "validate_status"))]
    pub status: String,
    pub date_open: NaiveDate,
    pub date_end: NaiveDate,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}

fn validate_intern_window(payload: &InternPayload) -> Result<(), ValidationError> {
    validate_date_window(payload.date_open, payload.date_end)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternResponse {
    #[serde(flatten)]
    pub intern: Intern,
    pub tags: Vec<TagSummary>,
}
