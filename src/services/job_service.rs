use sqlx::PgPool;

use crate::dto::common::SearchQuery;
use crate::dto::job_dto::{JobPayload, JobResponse};
use crate::error::{Error, Result};
use crate::models::job::Job;
use crate::services::search::Filter;
use crate::services::tag_link::{load_tags, replace_tags, TagLink};

const SELECT_JOB: &str = r#"
    SELECT j.id, j.job_title_id, jt.name AS job_title, j.description, j.requirements,
           j.location, j.employment_type, j.status, j.date_open, j.date_end,
           j.created_by, j.update_by, j.created_at, j.update_at
    FROM jobs j
    JOIN job_titles jt ON jt.id = j.job_title_id
"#;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_tags(&self, jobs: Vec<Job>) -> Result<Vec<JobResponse>> {
        let ids: Vec<i32> = jobs.iter().map(|j| j.id).collect();
        let mut tags = load_tags(&self.pool, TagLink::Job, &ids).await?;
        Ok(jobs
            .into_iter()
            .map(|job| JobResponse {
                tags: tags.remove(&job.id).unwrap_or_default(),
                job,
            })
            .collect())
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<JobResponse>> {
        let mut filter = Filter::new(SELECT_JOB);
        filter
            .keyword(
                &["jt.name", "j.description", "j.requirements", "j.location"],
                query.keyword.as_deref(),
            )
            .eq("j.job_title_id", query.job_title_id)
            .eq("j.status", query.status.clone())
            .on_day("j.created_at", query.date);
        let mut builder = filter.order_by("j.id DESC");
        let jobs = builder
            .build_query_as::<Job>()
            .fetch_all(&self.pool)
            .await?;
        self.with_tags(jobs).await
    }

    pub async fn list(&self) -> Result<Vec<JobResponse>> {
        self.search(&SearchQuery::default()).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<JobResponse> {
        let job = sqlx::query_as::<_, Job>(&format!("{} WHERE j.id = $1", SELECT_JOB))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))?;
        let mut items = self.with_tags(vec![job]).await?;
        items
            .pop()
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))
    }

    pub async fn create(&self, payload: JobPayload, actor: i32) -> Result<JobResponse> {
        let mut tx = self.pool.begin().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO jobs (
                job_title_id, description, requirements, location, employment_type,
                status, date_open, date_end, created_by, update_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING id
            "#,
        )
        .bind(payload.job_title_id)
        .bind(&payload.description)
        .bind(&payload.requirements)
        .bind(&payload.location)
        .bind(&payload.employment_type)
        .bind(&payload.status)
        .bind(payload.date_open)
        .bind(payload.date_end)
        .bind(actor)
        .fetch_one(&mut *tx)
        .await?;

        replace_tags(&mut tx, TagLink::Job, id, &payload.tag_ids).await?;
        tx.commit().await?;

        tracing::info!(job_id = id, actor, "job created");
        self.get_by_id(id).await
    }

    pub async fn update(&self, id: i32, payload: JobPayload, actor: i32) -> Result<JobResponse> {
        let mut tx = self.pool.begin().await?;

        let res = sqlx::query(
            r#"
            UPDATE jobs
            SET job_title_id = $2, description = $3, requirements = $4, location = $5,
                employment_type = $6, status = $7, date_open = $8, date_end = $9,
                update_by = $10, update_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(payload.job_title_id)
        .bind(&payload.description)
        .bind(&payload.requirements)
        .bind(&payload.location)
        .bind(&payload.employment_type)
        .bind(&payload.status)
        .bind(payload.date_open)
        .bind(payload.date_end)
        .bind(actor)
        .execute(&mut *tx)
        .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Job {} not found", id)));
        }

        replace_tags(&mut tx, TagLink::Job, id, &payload.tag_ids).await?;
        tx.commit().await?;

        self.get_by_id(id).await
    }

    /// Tag links go with the job via ON DELETE CASCADE.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Job {} not found", id)));
        }
        Ok(())
    }
}
