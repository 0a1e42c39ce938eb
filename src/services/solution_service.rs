use sqlx::PgPool;

use crate::dto::common::SearchQuery;
use crate::dto::solution_dto::SolutionForm;
use crate::error::{Error, Result};
use crate::models::{gallery_image::GalleryImage, solution::Solution};
use crate::services::gallery::{GalleryStore, SOLUTION_GALLERY};
use crate::services::search::Filter;
use crate::services::storage_service::{ImageStorage, ImageUpload};

const SELECT_SOLUTION: &str = r#"
    SELECT s.id, s.title, s.description, s.department_type_id, d.name AS department_type,
           s.created_by, s.update_by, s.created_at, s.update_at
    FROM solutions s
    JOIN department_types d ON d.id = s.department_type_id
"#;

pub type SolutionWithImages = (Solution, Vec<GalleryImage>);

#[derive(Clone)]
pub struct SolutionService {
    pool: PgPool,
    images: GalleryStore,
}

impl SolutionService {
    pub fn new(pool: PgPool, storage: ImageStorage) -> Self {
        Self {
            images: GalleryStore::new(SOLUTION_GALLERY, pool.clone(), storage),
            pool,
        }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SolutionWithImages>> {
        let mut filter = Filter::new(SELECT_SOLUTION);
        filter
            .keyword(&["s.title", "s.description", "d.name"], query.keyword.as_deref())
            .eq("s.department_type_id", query.department_type_id)
            .on_day("s.created_at", query.date);
        let mut builder = filter.order_by("s.id DESC");
        let solutions = builder
            .build_query_as::<Solution>()
            .fetch_all(&self.pool)
            .await?;
        self.images.attach(solutions, |s| s.id).await
    }

    pub async fn list(&self) -> Result<Vec<SolutionWithImages>> {
        self.search(&SearchQuery::default()).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<SolutionWithImages> {
        let solution = sqlx::query_as::<_, Solution>(&format!("{} WHERE s.id = $1", SELECT_SOLUTION))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Solution {} not found", id)))?;
        let gallery = self.images.images_of(id).await?;
        Ok((solution, gallery))
    }

    pub async fn create(
        &self,
        form: SolutionForm,
        uploads: Vec<ImageUpload>,
        actor: i32,
    ) -> Result<SolutionWithImages> {
        let paths = self.images.store_files(&uploads).await?;
        let inserted = self.insert(&form, &paths, actor).await;
        let id = self.images.discard_on_error(inserted, &paths).await?;
        tracing::info!(solution_id = id, images = paths.len(), "solution created");
        self.get_by_id(id).await
    }

    async fn insert(&self, form: &SolutionForm, paths: &[String], actor: i32) -> Result<i32> {
        let mut tx = self.pool.begin().await?;
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO solutions (title, description, department_type_id, created_by, update_by)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id
            "#,
        )
        .bind(form.title.trim())
        .bind(&form.description)
        .bind(form.department_type_id)
        .bind(actor)
        .fetch_one(&mut *tx)
        .await?;

        self.images.gallery().append(&mut tx, id, paths).await?;
        tx.commit().await?;
        Ok(id)
    }

    /// Updates the text fields and appends any newly uploaded images.
    pub async fn update(
        &self,
        id: i32,
        form: SolutionForm,
        uploads: Vec<ImageUpload>,
        actor: i32,
    ) -> Result<SolutionWithImages> {
        let paths = self.images.store_files(&uploads).await?;
        let updated = self.apply_update(id, &form, &paths, actor).await;
        self.images.discard_on_error(updated, &paths).await?;
        self.get_by_id(id).await
    }

    async fn apply_update(
        &self,
        id: i32,
        form: &SolutionForm,
        paths: &[String],
        actor: i32,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        self.images.gallery().lock_owner(&mut tx, id).await?;
        sqlx::query(
            r#"
            UPDATE solutions
            SET title = $2, description = $3, department_type_id = $4,
                update_by = $5, update_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(form.title.trim())
        .bind(&form.description)
        .bind(form.department_type_id)
        .bind(actor)
        .execute(&mut *tx)
        .await?;

        self.images.gallery().append(&mut tx, id, paths).await?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn append_images(&self, id: i32, uploads: Vec<ImageUpload>) -> Result<SolutionWithImages> {
        self.images.append_images(id, &uploads).await?;
        self.get_by_id(id).await
    }

    pub async fn delete_image(&self, image_id: i32) -> Result<SolutionWithImages> {
        let owner_id = self.images.delete_image(image_id).await?;
        self.get_by_id(owner_id).await
    }

    pub async fn set_cover(&self, image_id: i32) -> Result<SolutionWithImages> {
        let owner_id = self.images.set_cover(image_id).await?;
        self.get_by_id(owner_id).await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.images.delete_owner(id).await
    }
}
