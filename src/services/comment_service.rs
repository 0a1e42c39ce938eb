use sqlx::PgPool;

use crate::dto::comment_dto::CommentPayload;
use crate::dto::common::SearchQuery;
use crate::error::{Error, Result};
use crate::models::comment::Comment;
use crate::services::search::Filter;
use crate::utils::validation::STATUS_ACTIVE;

const SELECT_COMMENT: &str = r#"
    SELECT c.id, c.name, c.job_title_id, jt.name AS job_title, c.content, c.status,
           c.created_by, c.update_by, c.created_at, c.update_at
    FROM comments c
    JOIN job_titles jt ON jt.id = c.job_title_id
"#;

#[derive(Clone)]
pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Comment>> {
        let mut filter = Filter::new(SELECT_COMMENT);
        filter
            .keyword(&["c.name", "c.content", "jt.name"], query.keyword.as_deref())
            .eq("c.job_title_id", query.job_title_id)
            .eq("c.status", query.status.clone())
            .on_day("c.created_at", query.date);
        let mut builder = filter.order_by("c.id DESC");
        let comments = builder
            .build_query_as::<Comment>()
            .fetch_all(&self.pool)
            .await?;
        Ok(comments)
    }

    pub async fn list(&self) -> Result<Vec<Comment>> {
        self.search(&SearchQuery::default()).await
    }

    /// Testimonials shown on the public site.
    pub async fn list_active(&self) -> Result<Vec<Comment>> {
        self.search(&SearchQuery {
            status: Some(STATUS_ACTIVE.to_string()),
            ..SearchQuery::default()
        })
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Comment> {
        sqlx::query_as::<_, Comment>(&format!("{} WHERE c.id = $1", SELECT_COMMENT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Comment {} not found", id)))
    }

    /// Like `get_by_id`, but an inactive testimonial is reported as missing.
    pub async fn get_active(&self, id: i32) -> Result<Comment> {
        let comment = self.get_by_id(id).await?;
        if comment.status != STATUS_ACTIVE {
            return Err(Error::NotFound(format!("Comment {} not found", id)));
        }
        Ok(comment)
    }

    pub async fn create(&self, payload: CommentPayload, actor: i32) -> Result<Comment> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO comments (name, job_title_id, content, status, created_by, update_by)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id
            "#,
        )
        .bind(payload.name.trim())
        .bind(payload.job_title_id)
        .bind(&payload.content)
        .bind(&payload.status)
        .bind(actor)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    pub async fn update(&self, id: i32, payload: CommentPayload, actor: i32) -> Result<Comment> {
        let res = sqlx::query(
            r#"
            UPDATE comments
            SET name = $2, job_title_id = $3, content = $4, status = $5,
                update_by = $6, update_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(payload.name.trim())
        .bind(payload.job_title_id)
        .bind(&payload.content)
        .bind(&payload.status)
        .bind(actor)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Comment {} not found", id)));
        }
        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let res = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Comment {} not found", id)));
        }
        Ok(())
    }
}
