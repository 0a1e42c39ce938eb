use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Intern {
    pub id: i32,
    pub job_title_id: i32,
    pub job_title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub duration: Option<String>,
    pub status: String,
    pub date_open: NaiveDate,
    pub date_end: NaiveDate,
    pub created_by: Option<i32>,
    pub update_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub update_at: Option<DateTime<Utc>>,
}
