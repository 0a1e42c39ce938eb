use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Partner {
    pub id: i32,
    pub name: String,
    /// Stored web path, `uploads/partners/<uuid>.<ext>`.
    pub image: Option<String>,
    pub status: String,
    pub department_type_id: Option<i32>,
    pub department_type: Option<String>,
    pub created_by: Option<i32>,
    pub update_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub update_at: Option<DateTime<Utc>>,
}
