use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminUser {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub deleteflag: bool,
    pub created_by: Option<i32>,
    pub update_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub update_at: Option<DateTime<Utc>>,
}
