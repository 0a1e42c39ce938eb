use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DepartmentType {
    pub id: i32,
    pub name: String,
    /// Seeded departments are protected from deletion.
    pub can_delete: bool,
    pub created_by: Option<i32>,
    pub update_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub update_at: Option<DateTime<Utc>>,
}
