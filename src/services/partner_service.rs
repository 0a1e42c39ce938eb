use sqlx::PgPool;

use crate::dto::common::SearchQuery;
use crate::dto::partner_dto::PartnerForm;
use crate::error::{Error, Result};
use crate::models::partner::Partner;
use crate::services::search::Filter;
use crate::services::storage_service::{ImageStorage, ImageUpload};

const PARTNER_FOLDER: &str = "partners";

const SELECT_PARTNER: &str = r#"
    SELECT p.id, p.name, p.image, p.status, p.department_type_id, d.name AS department_type,
           p.created_by, p.update_by, p.created_at, p.update_at
    FROM partners p
    LEFT JOIN department_types d ON d.id = p.department_type_id
"#;

#[derive(Clone)]
pub struct PartnerService {
    pool: PgPool,
    storage: ImageStorage,
}

impl PartnerService {
    pub fn new(pool: PgPool, storage: ImageStorage) -> Self {
        Self { pool, storage }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Partner>> {
        let mut filter = Filter::new(SELECT_PARTNER);
        filter
            .keyword(&["p.name", "d.name"], query.keyword.as_deref())
            .eq("p.department_type_id", query.department_type_id)
            .eq("p.status", query.status.clone())
            .on_day("p.created_at", query.date);
        let mut builder = filter.order_by("p.id DESC");
        let partners = builder
            .build_query_as::<Partner>()
            .fetch_all(&self.pool)
            .await?;
        Ok(partners)
    }

    pub async fn list(&self) -> Result<Vec<Partner>> {
        self.search(&SearchQuery::default()).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Partner> {
        let partner = sqlx::query_as::<_, Partner>(&format!("{} WHERE p.id = $1", SELECT_PARTNER))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Partner {} not found", id)))?;
        Ok(partner)
    }

    async fn store_image(&self, image: Option<&ImageUpload>) -> Result<Option<String>> {
        match image {
            Some(upload) => {
                self.storage.validate(upload)?;
                Ok(Some(self.storage.save(PARTNER_FOLDER, upload).await?))
            }
            None => Ok(None),
        }
    }

    pub async fn create(
        &self,
        form: PartnerForm,
        image: Option<ImageUpload>,
        actor: i32,
    ) -> Result<Partner> {
        let stored = self.store_image(image.as_ref()).await?;

        let inserted = async {
            let mut tx = self.pool.begin().await?;
            let id: i32 = sqlx::query_scalar(
                r#"
                INSERT INTO partners (name, image, status, department_type_id, created_by, update_by)
                VALUES ($1, $2, $3, $4, $5, $5)
                RETURNING id
                "#,
            )
            .bind(form.name.trim())
            .bind(&stored)
            .bind(&form.status)
            .bind(form.department_type_id)
            .bind(actor)
            .fetch_one(&mut *tx)
            .await?;
            tx.commit().await?;
            Ok::<_, Error>(id)
        }
        .await;

        match inserted {
            Ok(id) => {
                tracing::info!(partner_id = id, has_image = stored.is_some(), "partner created");
                self.get_by_id(id).await
            }
            Err(e) => {
                if let Some(path) = &stored {
                    self.storage.remove(path).await;
                }
                Err(e)
            }
        }
    }

    /// A new `image` replaces the stored one; the previous file is removed
    /// only after the row points at the new file.
    pub async fn update(
        &self,
        id: i32,
        form: PartnerForm,
        image: Option<ImageUpload>,
        actor: i32,
    ) -> Result<Partner> {
        let stored = self.store_image(image.as_ref()).await?;

        let updated = async {
            let mut tx = self.pool.begin().await?;
            let previous: Option<Option<String>> =
                sqlx::query_scalar("SELECT image FROM partners WHERE id = $1 FOR UPDATE")
                    .bind(id)
                    .fetch_optional(&mut *tx)
                    .await?;
            let previous =
                previous.ok_or_else(|| Error::NotFound(format!("Partner {} not found", id)))?;

            sqlx::query(
                r#"
                UPDATE partners
                SET name = $2, status = $3, department_type_id = $4,
                    image = COALESCE($5, image), update_by = $6, update_at = NOW()
                WHERE id = $1
                "#,
            )
            .bind(id)
            .bind(form.name.trim())
            .bind(&form.status)
            .bind(form.department_type_id)
            .bind(&stored)
            .bind(actor)
            .execute(&mut *tx)
            .await?;
            tx.commit().await?;
            Ok::<_, Error>(previous)
        }
        .await;

        match updated {
            Ok(previous) => {
                if let (Some(_), Some(old)) = (&stored, previous) {
                    self.storage.remove(&old).await;
                }
                self.get_by_id(id).await
            }
            Err(e) => {
                if let Some(path) = &stored {
                    self.storage.remove(path).await;
                }
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let image: Option<Option<String>> =
            sqlx::query_scalar("DELETE FROM partners WHERE id = $1 RETURNING image")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        let image = image.ok_or_else(|| Error::NotFound(format!("Partner {} not found", id)))?;

        if let Some(path) = image {
            self.storage.remove(&path).await;
        }
        Ok(())
    }
}
