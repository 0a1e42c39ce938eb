use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Transaction};

use crate::error::{Error, Result};
use crate::models::gallery_image::GalleryImage;
use crate::services::storage_service::{ImageStorage, ImageUpload};

/// An image gallery hanging off a parent table. Every mutation locks the
/// parent row first, so cover demotion/promotion for one parent is serialized
/// and always runs in the same transaction as the change that triggers it.
/// The partial unique index `(owner) WHERE is_cover` backs this up.
#[derive(Debug, Clone, Copy)]
pub struct Gallery {
    pub owner_table: &'static str,
    pub images_table: &'static str,
    pub owner_column: &'static str,
    pub folder: &'static str,
    pub label: &'static str,
}

pub const SOLUTION_GALLERY: Gallery = Gallery {
    owner_table: "solutions",
    images_table: "solution_imgs",
    owner_column: "solution_id",
    folder: "solutions",
    label: "Solution",
};

pub const EVENT_GALLERY: Gallery = Gallery {
    owner_table: "events",
    images_table: "events_imgs",
    owner_column: "event_id",
    folder: "events",
    label: "Event",
};

impl Gallery {
    fn select_images(&self) -> String {
        format!(
            "SELECT id, {col} AS owner_id, image, order_id, is_cover, created_at FROM {table}",
            col = self.owner_column,
            table = self.images_table
        )
    }

    fn not_found(&self, owner_id: i32) -> Error {
        Error::NotFound(format!("{} {} not found", self.label, owner_id))
    }

    fn image_not_found(&self, image_id: i32) -> Error {
        Error::NotFound(format!("{} image {} not found", self.label, image_id))
    }

    pub async fn lock_owner(&self, tx: &mut Transaction<'_, Postgres>, owner_id: i32) -> Result<()> {
        let locked: Option<i32> = sqlx::query_scalar(&format!(
            "SELECT id FROM {} WHERE id = $1 FOR UPDATE",
            self.owner_table
        ))
        .bind(owner_id)
        .fetch_optional(&mut **tx)
        .await?;
        locked.map(|_| ()).ok_or_else(|| self.not_found(owner_id))
    }

    /// Appends images after the current last `order_id`. When the gallery has
    /// no cover yet, the first appended image becomes it.
    pub async fn append(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner_id: i32,
        paths: &[String],
    ) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let (next_order, has_cover): (i32, bool) = sqlx::query_as(&format!(
            "SELECT COALESCE(MAX(order_id) + 1, 0), COALESCE(BOOL_OR(is_cover), FALSE) FROM {} WHERE {} = $1",
            self.images_table, self.owner_column
        ))
        .bind(owner_id)
        .fetch_one(&mut **tx)
        .await?;

        let insert = format!(
            "INSERT INTO {} ({}, image, order_id, is_cover) VALUES ($1, $2, $3, $4)",
            self.images_table, self.owner_column
        );
        for (offset, path) in paths.iter().enumerate() {
            sqlx::query(&insert)
                .bind(owner_id)
                .bind(path)
                .bind(next_order + offset as i32)
                .bind(!has_cover && offset == 0)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }

    pub async fn image_paths(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner_id: i32,
    ) -> Result<Vec<String>> {
        let paths = sqlx::query_scalar::<_, String>(&format!(
            "SELECT image FROM {} WHERE {} = $1",
            self.images_table, self.owner_column
        ))
        .bind(owner_id)
        .fetch_all(&mut **tx)
        .await?;
        Ok(paths)
    }

    pub async fn load(
        &self,
        pool: &PgPool,
        owner_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<GalleryImage>>> {
        if owner_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let images = sqlx::query_as::<_, GalleryImage>(&format!(
            "{} WHERE {} = ANY($1) ORDER BY order_id, id",
            self.select_images(),
            self.owner_column
        ))
        .bind(owner_ids)
        .fetch_all(pool)
        .await?;

        let mut grouped: HashMap<i32, Vec<GalleryImage>> = HashMap::new();
        for image in images {
            grouped.entry(image.owner_id).or_default().push(image);
        }
        Ok(grouped)
    }

    async fn owner_of(&self, pool: &PgPool, image_id: i32) -> Result<i32> {
        let owner: Option<i32> = sqlx::query_scalar(&format!(
            "SELECT {} FROM {} WHERE id = $1",
            self.owner_column, self.images_table
        ))
        .bind(image_id)
        .fetch_optional(pool)
        .await?;
        owner.ok_or_else(|| self.image_not_found(image_id))
    }

    async fn locked_image(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        image_id: i32,
        owner_id: i32,
    ) -> Result<GalleryImage> {
        sqlx::query_as::<_, GalleryImage>(&format!(
            "{} WHERE id = $1 AND {} = $2",
            self.select_images(),
            self.owner_column
        ))
        .bind(image_id)
        .bind(owner_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| self.image_not_found(image_id))
    }

    /// Deletes one image row; if it was the cover, the next image by
    /// `(order_id, id)` is promoted in the same transaction. Returns the
    /// deleted row so the caller can remove the file after commit.
    pub async fn delete_image(&self, pool: &PgPool, image_id: i32) -> Result<GalleryImage> {
        let owner_id = self.owner_of(pool, image_id).await?;

        let mut tx = pool.begin().await?;
        self.lock_owner(&mut tx, owner_id).await?;
        let image = self.locked_image(&mut tx, image_id, owner_id).await?;

        sqlx::query(&format!("DELETE FROM {} WHERE id = $1", self.images_table))
            .bind(image_id)
            .execute(&mut *tx)
            .await?;

        if image.is_cover {
            sqlx::query(&format!(
                r#"
                UPDATE {table} SET is_cover = TRUE
                WHERE id = (
                    SELECT id FROM {table} WHERE {col} = $1
                    ORDER BY order_id, id
                    LIMIT 1
                )
                "#,
                table = self.images_table,
                col = self.owner_column
            ))
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(image)
    }

    /// Demotes the current cover and promotes `image_id`, atomically.
    pub async fn set_cover(&self, pool: &PgPool, image_id: i32) -> Result<i32> {
        let owner_id = self.owner_of(pool, image_id).await?;

        let mut tx = pool.begin().await?;
        self.lock_owner(&mut tx, owner_id).await?;
        self.locked_image(&mut tx, image_id, owner_id).await?;

        sqlx::query(&format!(
            "UPDATE {} SET is_cover = FALSE WHERE {} = $1 AND is_cover AND id <> $2",
            self.images_table, self.owner_column
        ))
        .bind(owner_id)
        .bind(image_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(&format!(
            "UPDATE {} SET is_cover = TRUE WHERE id = $1",
            self.images_table
        ))
        .bind(image_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(owner_id)
    }
}

/// A gallery together with the pool and the image files behind it. Owns the
/// file lifecycle shared by every gallery owner: files are written before the
/// owner's transaction, removed again if it fails, and removed after commit
/// when their rows go away.
#[derive(Clone)]
pub struct GalleryStore {
    gallery: Gallery,
    pool: PgPool,
    storage: ImageStorage,
}

impl GalleryStore {
    pub fn new(gallery: Gallery, pool: PgPool, storage: ImageStorage) -> Self {
        Self {
            gallery,
            pool,
            storage,
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Pairs each owner with its images, in `(order_id, id)` order.
    pub async fn attach<T>(
        &self,
        owners: Vec<T>,
        id_of: impl Fn(&T) -> i32,
    ) -> Result<Vec<(T, Vec<GalleryImage>)>> {
        let ids: Vec<i32> = owners.iter().map(&id_of).collect();
        let mut images = self.gallery.load(&self.pool, &ids).await?;
        Ok(owners
            .into_iter()
            .map(|owner| {
                let gallery = images.remove(&id_of(&owner)).unwrap_or_default();
                (owner, gallery)
            })
            .collect())
    }

    pub async fn images_of(&self, owner_id: i32) -> Result<Vec<GalleryImage>> {
        Ok(self
            .gallery
            .load(&self.pool, &[owner_id])
            .await?
            .remove(&owner_id)
            .unwrap_or_default())
    }

    pub async fn store_files(&self, uploads: &[ImageUpload]) -> Result<Vec<String>> {
        self.storage.validate_all(uploads)?;
        self.storage.save_all(self.gallery.folder, uploads).await
    }

    /// Passes `result` through, removing the freshly stored files on error.
    pub async fn discard_on_error<T>(&self, result: Result<T>, paths: &[String]) -> Result<T> {
        if result.is_err() {
            self.storage.remove_all(paths).await;
        }
        result
    }

    pub async fn append_images(&self, owner_id: i32, uploads: &[ImageUpload]) -> Result<()> {
        if uploads.is_empty() {
            return Err(Error::BadRequest("At least one image is required".into()));
        }
        let paths = self.store_files(uploads).await?;

        let result = async {
            let mut tx = self.pool.begin().await?;
            self.gallery.lock_owner(&mut tx, owner_id).await?;
            self.gallery.append(&mut tx, owner_id, &paths).await?;
            tx.commit().await?;
            Ok::<_, Error>(())
        }
        .await;
        self.discard_on_error(result, &paths).await
    }

    /// Returns the owner id.
    pub async fn delete_image(&self, image_id: i32) -> Result<i32> {
        let image = self.gallery.delete_image(&self.pool, image_id).await?;
        self.storage.remove(&image.image).await;
        Ok(image.owner_id)
    }

    pub async fn set_cover(&self, image_id: i32) -> Result<i32> {
        self.gallery.set_cover(&self.pool, image_id).await
    }

    /// Image rows cascade; their files are removed once the delete commits.
    pub async fn delete_owner(&self, owner_id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        self.gallery.lock_owner(&mut tx, owner_id).await?;
        let paths = self.gallery.image_paths(&mut tx, owner_id).await?;
        sqlx::query(&format!("DELETE FROM {} WHERE id = $1", self.gallery.owner_table))
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        self.storage.remove_all(&paths).await;
        tracing::info!(
            owner = self.gallery.owner_table,
            owner_id,
            files = paths.len(),
            "gallery owner deleted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_select_aliases_owner_column() {
        assert_eq!(
            EVENT_GALLERY.select_images(),
            "SELECT id, event_id AS owner_id, image, order_id, is_cover, created_at FROM events_imgs"
        );
    }
}
