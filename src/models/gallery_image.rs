use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `solution_imgs` or `events_imgs`; `owner_id` is the parent's id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GalleryImage {
    pub id: i32,
    pub owner_id: i32,
    pub image: String,
    pub order_id: i32,
    pub is_cover: bool,
    pub created_at: DateTime<Utc>,
}
