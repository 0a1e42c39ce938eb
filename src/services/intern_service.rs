use sqlx::PgPool;

use crate::dto::common::SearchQuery;
use crate::dto::intern_dto::{InternPayload, InternResponse};
use crate::error::{Error, Result};
use crate::models::intern::Intern;
use crate::services::search::Filter;
use crate::services::tag_link::{load_tags, replace_tags, TagLink};

const SELECT_INTERN: &str = r#"
    SELECT i.id, i.job_title_id, jt.name AS job_title, i.description, i.requirements,
           i.duration, i.status, i.date_open, i.date_end,
           i.created_by, i.update_by, i.created_at, i.update_at
    FROM interns i
    JOIN job_titles jt ON jt.id = i.job_title_id
"#;

#[derive(Clone)]
pub struct InternService {
    pool: PgPool,
}

impl InternService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_tags(&self, interns: Vec<Intern>) -> Result<Vec<InternResponse>> {
        let ids: Vec<i32> = interns.iter().map(|i| i.id).collect();
        let mut tags = load_tags(&self.pool, TagLink::Intern, &ids).await?;
        Ok(interns
            .into_iter()
            .map(|intern| InternResponse {
                tags: tags.remove(&intern.id).unwrap_or_default(),
                intern,
            })
            .collect())
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<InternResponse>> {
        let mut filter = Filter::new(SELECT_INTERN);
        filter
            .keyword(
                &["jt.name", "i.description", "i.requirements", "i.duration"],
                query.keyword.as_deref(),
            )
            .eq("i.job_title_id", query.job_title_id)
            .eq("i.status", query.status.clone())
            .on_day("i.created_at", query.date);
        let mut builder = filter.order_by("i.id DESC");
        let interns = builder
            .build_query_as::<Intern>()
            .fetch_all(&self.pool)
            .await?;
        self.with_tags(interns).await
    }

    pub async fn list(&self) -> Result<Vec<InternResponse>> {
        self.search(&SearchQuery::default()).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<InternResponse> {
        let intern = sqlx::query_as::<_, Intern>(&format!("{} WHERE i.id = $1", SELECT_INTERN))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Intern posting {} not found", id)))?;
        let mut items = self.with_tags(vec![intern]).await?;
        items
            .pop()
            .ok_or_else(|| Error::NotFound(format!("Intern posting {} not found", id)))
    }

    pub async fn create(&self, payload: InternPayload, actor: i32) -> Result<InternResponse> {
        let mut tx = self.pool.begin().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO interns (
                job_title_id, description, requirements, duration,
                status, date_open, date_end, created_by, update_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING id
            "#,
        )
        .bind(payload.job_title_id)
        .bind(&payload.description)
        .bind(&payload.requirements)
        .bind(&payload.duration)
        .bind(&payload.status)
        .bind(payload.date_open)
        .bind(payload.date_end)
        .bind(actor)
        .fetch_one(&mut *tx)
        .await?;

        replace_tags(&mut tx, TagLink::Intern, id, &payload.tag_ids).await?;
        tx.commit().await?;

        tracing::info!(intern_id = id, actor, "intern posting created");
        self.get_by_id(id).await
    }

    pub async fn update(&self, id: i32, payload: InternPayload, actor: i32) -> Result<InternResponse> {
        let mut tx = self.pool.begin().await?;

        let res = sqlx::query(
            r#"
            UPDATE interns
            SET job_title_id = $2, description = $3, requirements = $4, duration = $5,
                status = $6, date_open = $7, date_end = $8,
                update_by = $9, update_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(payload.job_title_id)
        .bind(&payload.description)
        .bind(&payload.requirements)
        .bind(&payload.duration)
        .bind(&payload.status)
        .bind(payload.date_open)
        .bind(payload.date_end)
        .bind(actor)
        .execute(&mut *tx)
        .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Intern posting {} not found", id)));
        }

        replace_tags(&mut tx, TagLink::Intern, id, &payload.tag_ids).await?;
        tx.commit().await?;

        self.get_by_id(id).await
    }

    /// Tag links go with the posting via ON DELETE CASCADE.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let res = sqlx::query("DELETE FROM interns WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Intern posting {} not found", id)));
        }
        Ok(())
    }
}
