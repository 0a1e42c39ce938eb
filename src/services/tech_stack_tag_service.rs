use sqlx::PgPool;

use crate::dto::common::SearchQuery;
use crate::dto::taxonomy_dto::TechStackTagPayload;
use crate::error::{Error, Result};
use crate::models::tech_stack_tag::TechStackTag;
use crate::services::search::Filter;

const SELECT_TECH_STACK_TAG: &str = r#"
    SELECT t.id, t.name, t.department_type_id, d.name AS department_type,
           t.created_by, t.update_by, t.created_at, t.update_at
    FROM tech_stack_tags t
    JOIN department_types d ON d.id = t.department_type_id
"#;

#[derive(Clone)]
pub struct TechStackTagService {
    pool: PgPool,
}

impl TechStackTagService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<TechStackTag>> {
        let mut filter = Filter::new(SELECT_TECH_STACK_TAG);
        filter
            .keyword(&["t.name", "d.name"], query.keyword.as_deref())
            .eq("t.department_type_id", query.department_type_id)
            .on_day("t.created_at", query.date);
        let mut builder = filter.order_by("t.id DESC");
        let items = builder
            .build_query_as::<TechStackTag>()
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn list(&self) -> Result<Vec<TechStackTag>> {
        self.search(&SearchQuery::default()).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TechStackTag> {
        sqlx::query_as::<_, TechStackTag>(&format!("{} WHERE t.id = $1", SELECT_TECH_STACK_TAG))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Tech stack tag {} not found", id)))
    }

    pub async fn create(&self, payload: TechStackTagPayload, actor: i32) -> Result<TechStackTag> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO tech_stack_tags (name, department_type_id, created_by, update_by)
            VALUES ($1, $2, $3, $3)
            RETURNING id
            "#,
        )
        .bind(payload.name.trim())
        .bind(payload.department_type_id)
        .bind(actor)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    pub async fn update(&self, id: i32, payload: TechStackTagPayload, actor: i32) -> Result<TechStackTag> {
        let res = sqlx::query(
            r#"
            UPDATE tech_stack_tags
            SET name = $2, department_type_id = $3, update_by = $4, update_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(payload.name.trim())
        .bind(payload.department_type_id)
        .bind(actor)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Tech stack tag {} not found", id)));
        }
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let res = sqlx::query("DELETE FROM tech_stack_tags WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Tech stack tag {} not found", id)));
        }
        Ok(())
    }
}
