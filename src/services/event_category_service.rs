use sqlx::PgPool;

use crate::dto::common::SearchQuery;
use crate::dto::taxonomy_dto::NamePayload;
use crate::error::{Error, Result};
use crate::models::event_category::EventCategory;
use crate::services::search::Filter;

const SELECT_EVENT_CATEGORY: &str =
    "SELECT id, name, created_by, update_by, created_at, update_at FROM event_categories";

#[derive(Clone)]
pub struct EventCategoryService {
    pool: PgPool,
}

impl EventCategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<EventCategory>> {
        let mut filter = Filter::new(SELECT_EVENT_CATEGORY);
        filter
            .keyword(&["name"], query.keyword.as_deref())
            .on_day("created_at", query.date);
        let mut builder = filter.order_by("id DESC");
        let items = builder
            .build_query_as::<EventCategory>()
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn list(&self) -> Result<Vec<EventCategory>> {
        self.search(&SearchQuery::default()).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<EventCategory> {
        sqlx::query_as::<_, EventCategory>(&format!("{} WHERE id = $1", SELECT_EVENT_CATEGORY))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Event category {} not found", id)))
    }

    pub async fn create(&self, payload: NamePayload, actor: i32) -> Result<EventCategory> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO event_categories (name, created_by, update_by) VALUES ($1, $2, $2) RETURNING id",
        )
        .bind(payload.name.trim())
        .bind(actor)
        .fetch_one(&self.pool)
        .await?;
        self.get_by_id(id).await
    }

    pub async fn update(&self, id: i32, payload: NamePayload, actor: i32) -> Result<EventCategory> {
        let res = sqlx::query(
            "UPDATE event_categories SET name = $2, update_by = $3, update_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(payload.name.trim())
        .bind(actor)
        .execute(&self.pool)
        .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Event category {} not found", id)));
        }
        self.get_by_id(id).await
    }

    /// Categories still used by events fail on the foreign key.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let res = sqlx::query("DELETE FROM event_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Event category {} not found", id)));
        }
        Ok(())
    }
}
