use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InboxMessage {
    pub id: i32,
    pub topic_id: i32,
    pub topic: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub deleteflag: bool,
    pub update_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub update_at: Option<DateTime<Utc>>,
}
