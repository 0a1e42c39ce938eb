use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Envelope shared by write and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Query string accepted by every `search` endpoint. Each resource reads the
/// filters that apply to it and ignores the rest.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub department_type_id: Option<i32>,
    pub job_title_id: Option<i32>,
    pub event_category_id: Option<i32>,
    pub topic_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagSummary {
    pub id: i32,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_omits_absent_fields() {
        let ok = serde_json::to_value(ApiResponse::success("Created", json!({"id": 1}))).unwrap();
        assert_eq!(ok, json!({"Message": "Created", "Data": {"id": 1}}));

        let err = serde_json::to_value(ApiResponse::failure("Bad request", "name is required"))
            .unwrap();
        assert_eq!(
            err,
            json!({"Message": "Bad request", "Error": "name is required"})
        );
    }
}
