use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i32,
    pub name: String,
    pub job_title_id: i32,
    pub job_title: String,
    pub content: String,
    pub status: String,
    pub created_by: Option<i32>,
    pub update_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub update_at: Option<DateTime<Utc>>,
}
