use sqlx::PgPool;

use crate::dto::common::SearchQuery;
use crate::dto::taxonomy_dto::JobTitlePayload;
use crate::error::{Error, Result};
use crate::models::job_title::JobTitle;
use crate::services::search::Filter;

const SELECT_JOB_TITLE: &str = r#"
    SELECT jt.id, jt.name, jt.department_type_id, d.name AS department_type,
           jt.created_by, jt.update_by, jt.created_at, jt.update_at
    FROM job_titles jt
    JOIN department_types d ON d.id = jt.department_type_id
"#;

#[derive(Clone)]
pub struct JobTitleService {
    pool: PgPool,
}

impl JobTitleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<JobTitle>> {
        let mut filter = Filter::new(SELECT_JOB_TITLE);
        filter
            .keyword(&["jt.name", "d.name"], query.keyword.as_deref())
            .eq("jt.department_type_id", query.department_type_id)
            .on_day("jt.created_at", query.date);
        let mut builder = filter.order_by("jt.id DESC");
        let items = builder
            .build_query_as::<JobTitle>()
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn list(&self) -> Result<Vec<JobTitle>> {
        self.search(&SearchQuery::default()).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<JobTitle> {
        sqlx::query_as::<_, JobTitle>(&format!("{} WHERE jt.id = $1", SELECT_JOB_TITLE))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Job title {} not found", id)))
    }

    pub async fn create(&self, payload: JobTitlePayload, actor: i32) -> Result<JobTitle> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO job_titles (name, department_type_id, created_by, update_by)
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

    pub async fn update(&self, id: i32, payload: JobTitlePayload, actor: i32) -> Result<JobTitle> {
        let res = sqlx::query(
            r#"
            UPDATE job_titles
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
            return Err(Error::NotFound(format!("Job title {} not found", id)));
        }
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let res = sqlx::query("DELETE FROM job_titles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Job title {} not found", id)));
        }
        Ok(())
    }
}
