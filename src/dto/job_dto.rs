use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::dto::common::TagSummary;
use crate::models::job::Job;
use crate::utils::validation::{validate_date_window, validate_status, STATUS_ACTIVE};

pub(crate) fn default_status() -> String {
    STATUS_ACTIVE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_job_window"))]
pub struct JobPayload {
    pub job_title_id: i32,
    pub description: Option<String>,
    pub requirements: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    #[validate(length(max = 100))]
    pub employment_type: Option<String>,
    #[serde(default = "default_status")]
    #[validate(custom(function = "validate_status"))]
    pub status: String,
    pub date_open: NaiveDate,
    pub date_end: NaiveDate,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}

fn validate_job_window(payload: &JobPayload) -> Result<(), ValidationError> {
    validate_date_window(payload.date_open, payload.date_end)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    #[serde(flatten)]
    pub job: Job,
    pub tags: Vec<TagSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_defaults_to_active_and_window_is_checked() {
        let payload: JobPayload = serde_json::from_value(json!({
            "job_title_id": 1,
            "date_open": "2026-03-01",
            "date_end": "2026-03-31",
            "tag_ids": [1, 2]
        }))
        .unwrap();
        assert_eq!(payload.status, "Active");
        assert!(payload.validate().is_ok());

        let reversed = JobPayload {
            date_end: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            ..payload.clone()
        };
        assert!(reversed.validate().is_err());

        let bad_status = JobPayload {
            status: "Closed".into(),
            ..payload
        };
        assert!(bad_status.validate().is_err());
    }
}
