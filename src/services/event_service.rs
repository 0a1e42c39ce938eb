use sqlx::PgPool;

use crate::dto::common::SearchQuery;
use crate::dto::event_dto::EventForm;
use crate::error::{Error, Result};
use crate::models::{event::Event, gallery_image::GalleryImage};
use crate::services::gallery::{GalleryStore, EVENT_GALLERY};
use crate::services::search::Filter;
use crate::services::storage_service::{ImageStorage, ImageUpload};

const SELECT_EVENT: &str = r#"
    SELECT e.id, e.title, e.description, e.location, e.event_date,
           e.event_category_id, c.name AS event_category,
           e.created_by, e.update_by, e.created_at, e.update_at
    FROM events e
    JOIN event_categories c ON c.id = e.event_category_id
"#;

pub type EventWithImages = (Event, Vec<GalleryImage>);

#[derive(Clone)]
pub struct EventService {
    pool: PgPool,
    images: GalleryStore,
}

impl EventService {
    pub fn new(pool: PgPool, storage: ImageStorage) -> Self {
        Self {
            images: GalleryStore::new(EVENT_GALLERY, pool.clone(), storage),
            pool,
        }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<EventWithImages>> {
        let mut filter = Filter::new(SELECT_EVENT);
        filter
            .keyword(
                &["e.title", "e.description", "e.location", "c.name"],
                query.keyword.as_deref(),
            )
            .eq("e.event_category_id", query.event_category_id)
            .on_day("e.event_date", query.date);
        let mut builder = filter.order_by("e.id DESC");
        let events = builder
            .build_query_as::<Event>()
            .fetch_all(&self.pool)
            .await?;
        self.images.attach(events, |e| e.id).await
    }

    pub async fn list(&self) -> Result<Vec<EventWithImages>> {
        self.search(&SearchQuery::default()).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<EventWithImages> {
        let event = sqlx::query_as::<_, Event>(&format!("{} WHERE e.id = $1", SELECT_EVENT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Event {} not found", id)))?;
        let gallery = self.images.images_of(id).await?;
        Ok((event, gallery))
    }

    pub async fn create(
        &self,
        form: EventForm,
        uploads: Vec<ImageUpload>,
        actor: i32,
    ) -> Result<EventWithImages> {
        let paths = self.images.store_files(&uploads).await?;
        let inserted = self.insert(&form, &paths, actor).await;
        let id = self.images.discard_on_error(inserted, &paths).await?;
        tracing::info!(event_id = id, images = paths.len(), "event created");
        self.get_by_id(id).await
    }

    async fn insert(&self, form: &EventForm, paths: &[String], actor: i32) -> Result<i32> {
        let mut tx = self.pool.begin().await?;
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO events
                (title, description, location, event_date, event_category_id, created_by, update_by)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING id
            "#,
        )
        .bind(form.title.trim())
        .bind(&form.description)
        .bind(&form.location)
        .bind(form.event_date)
        .bind(form.event_category_id)
        .bind(actor)
        .fetch_one(&mut *tx)
        .await?;

        self.images.gallery().append(&mut tx, id, paths).await?;
        tx.commit().await?;
        Ok(id)
    }

    pub async fn update(
        &self,
        id: i32,
        form: EventForm,
        uploads: Vec<ImageUpload>,
        actor: i32,
    ) -> Result<EventWithImages> {
        let paths = self.images.store_files(&uploads).await?;
        let updated = self.apply_update(id, &form, &paths, actor).await;
        self.images.discard_on_error(updated, &paths).await?;
        self.get_by_id(id).await
    }

    async fn apply_update(
        &self,
        id: i32,
        form: &EventForm,
        paths: &[String],
        actor: i32,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        self.images.gallery().lock_owner(&mut tx, id).await?;
        sqlx::query(
            r#"
            UPDATE events
            SET title = $2, description = $3, location = $4, event_date = $5,
                event_category_id = $6, update_by = $7, update_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(form.title.trim())
        .bind(&form.description)
        .bind(&form.location)
        .bind(form.event_date)
        .bind(form.event_category_id)
        .bind(actor)
        .execute(&mut *tx)
        .await?;

        self.images.gallery().append(&mut tx, id, paths).await?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn append_images(&self, id: i32, uploads: Vec<ImageUpload>) -> Result<EventWithImages> {
        self.images.append_images(id, &uploads).await?;
        self.get_by_id(id).await
    }

    pub async fn delete_image(&self, image_id: i32) -> Result<EventWithImages> {
        let owner_id = self.images.delete_image(image_id).await?;
        self.get_by_id(owner_id).await
    }

    pub async fn set_cover(&self, image_id: i32) -> Result<EventWithImages> {
        let owner_id = self.images.set_cover(image_id).await?;
        self.get_by_id(owner_id).await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.images.delete_owner(id).await
    }
}
