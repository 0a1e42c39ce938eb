use sqlx::PgPool;

use crate::dto::common::SearchQuery;
use crate::dto::taxonomy_dto::NamePayload;
use crate::error::{Error, Result};
use crate::models::topic::Topic;
use crate::services::search::Filter;

const SELECT_TOPIC: &str =
    "SELECT id, name, created_by, update_by, created_at, update_at FROM topics";

#[derive(Clone)]
pub struct TopicService {
    pool: PgPool,
}

impl TopicService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Topic>> {
        let mut filter = Filter::new(SELECT_TOPIC);
        filter
            .keyword(&["name"], query.keyword.as_deref())
            .on_day("created_at", query.date);
        let mut builder = filter.order_by("id DESC");
        let items = builder
            .build_query_as::<Topic>()
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn list(&self) -> Result<Vec<Topic>> {
        self.search(&SearchQuery::default()).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Topic> {
        sqlx::query_as::<_, Topic>(&format!("{} WHERE id = $1", SELECT_TOPIC))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Topic {} not found", id)))
    }

    pub async fn create(&self, payload: NamePayload, actor: i32) -> Result<Topic> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO topics (name, created_by, update_by) VALUES ($1, $2, $2) RETURNING id",
        )
        .bind(payload.name.trim())
        .bind(actor)
        .fetch_one(&self.pool)
        .await?;
        self.get_by_id(id).await
    }

    pub async fn update(&self, id: i32, payload: NamePayload, actor: i32) -> Result<Topic> {
        let res = sqlx::query(
            "UPDATE topics SET name = $2, update_by = $3, update_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(payload.name.trim())
        .bind(actor)
        .execute(&self.pool)
        .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Topic {} not found", id)));
        }
        self.get_by_id(id).await
    }

    /// Topics referenced by inbox messages, soft-deleted ones included, stay.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let res = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Topic {} not found", id)));
        }
        Ok(())
    }
}
