use sqlx::PgPool;

use crate::dto::common::SearchQuery;
use crate::dto::taxonomy_dto::DepartmentTypePayload;
use crate::error::{Error, Result};
use crate::models::department_type::DepartmentType;
use crate::services::search::Filter;

const SELECT_DEPARTMENT_TYPE: &str = "SELECT id, name, can_delete, created_by, update_by, created_at, update_at FROM department_types";

#[derive(Clone)]
pub struct DepartmentTypeService {
    pool: PgPool,
}

impl DepartmentTypeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<DepartmentType>> {
        let mut filter = Filter::new(SELECT_DEPARTMENT_TYPE);
        filter
            .keyword(&["name"], query.keyword.as_deref())
            .on_day("created_at", query.date);
        let mut builder = filter.order_by("id DESC");
        let items = builder
            .build_query_as::<DepartmentType>()
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn list(&self) -> Result<Vec<DepartmentType>> {
        self.search(&SearchQuery::default()).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<DepartmentType> {
        let item = sqlx::query_as::<_, DepartmentType>(&format!(
            "{} WHERE id = $1",
            SELECT_DEPARTMENT_TYPE
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Department type {} not found", id)))?;
        Ok(item)
    }

    pub async fn create(&self, payload: DepartmentTypePayload, actor: i32) -> Result<DepartmentType> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO department_types (name, can_delete, created_by, update_by)
            VALUES ($1, $2, $3, $3)
            RETURNING id
            "#,
        )
        .bind(payload.name.trim())
        .bind(payload.can_delete.unwrap_or(true))
        .bind(actor)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// `can_delete` is fixed at creation; seeded rows stay protected.
    pub async fn update(&self, id: i32, payload: DepartmentTypePayload, actor: i32) -> Result<DepartmentType> {
        let res = sqlx::query(
            r#"
            UPDATE department_types
            SET name = $2, update_by = $3, update_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(payload.name.trim())
        .bind(actor)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Department type {} not found", id)));
        }
        self.get_by_id(id).await
    }

    /// Refuses protected rows; rows still referenced elsewhere fail on the
    /// foreign key and surface as a conflict.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let res = sqlx::query("DELETE FROM department_types WHERE id = $1 AND can_delete")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() > 0 {
            return Ok(());
        }

        // Nothing deleted: either the row is gone or it is protected.
        let department = self.get_by_id(id).await?;
        Err(Error::BadRequest(format!(
            "Department type '{}' is protected and cannot be deleted",
            department.name
        )))
    }
}
