use sqlx::PgPool;

use crate::dto::common::SearchQuery;
use crate::dto::inbox_dto::InboxSubmission;
use crate::error::{Error, Result};
use crate::models::inbox::InboxMessage;
use crate::services::search::Filter;

const SELECT_MESSAGE: &str = r#"
    SELECT m.id, m.topic_id, t.name AS topic, m.name, m.email, m.phone, m.message,
           m.is_read, m.deleteflag, m.update_by, m.created_at, m.update_at
    FROM inbox m
    JOIN topics t ON t.id = m.topic_id
"#;

/// Visitor messages. Deleted rows keep `deleteflag = true` and drop out of
/// every read.
#[derive(Clone)]
pub struct InboxService {
    pool: PgPool,
}

impl InboxService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn not_found(id: i32) -> Error {
        Error::NotFound(format!("Inbox message {} not found", id))
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<InboxMessage>> {
        let mut filter = Filter::new(SELECT_MESSAGE);
        filter
            .condition("NOT m.deleteflag")
            .keyword(
                &["m.name", "m.email", "m.phone", "m.message", "t.name"],
                query.keyword.as_deref(),
            )
            .eq("m.topic_id", query.topic_id)
            .on_day("m.created_at", query.date);
        let mut builder = filter.order_by("m.id DESC");
        let messages = builder
            .build_query_as::<InboxMessage>()
            .fetch_all(&self.pool)
            .await?;
        Ok(messages)
    }

    pub async fn list(&self) -> Result<Vec<InboxMessage>> {
        self.search(&SearchQuery::default()).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<InboxMessage> {
        sqlx::query_as::<_, InboxMessage>(&format!(
            "{} WHERE m.id = $1 AND NOT m.deleteflag",
            SELECT_MESSAGE
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Self::not_found(id))
    }

    pub async fn submit(&self, submission: InboxSubmission) -> Result<InboxMessage> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO inbox (topic_id, name, email, phone, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(submission.topic_id)
        .bind(submission.name.trim())
        .bind(submission.email.trim())
        .bind(&submission.phone)
        .bind(&submission.message)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(message_id = id, topic_id = submission.topic_id, "inbox message received");
        self.get_by_id(id).await
    }

    pub async fn mark_read(&self, id: i32, actor: i32) -> Result<InboxMessage> {
        let res = sqlx::query(
            r#"
            UPDATE inbox SET is_read = TRUE, update_by = $2, update_at = NOW()
            WHERE id = $1 AND NOT deleteflag
            "#,
        )
        .bind(id)
        .bind(actor)
        .execute(&self.pool)
        .await?;
        if res.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }
        self.get_by_id(id).await
    }

    pub async fn soft_delete(&self, id: i32, actor: i32) -> Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE inbox SET deleteflag = TRUE, update_by = $2, update_at = NOW()
            WHERE id = $1 AND NOT deleteflag
            "#,
        )
        .bind(id)
        .bind(actor)
        .execute(&self.pool)
        .await?;
        if res.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
