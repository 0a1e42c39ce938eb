use serde::{Deserialize, Serialize};

use crate::middleware::base_url::RequestBaseUrl;
use crate::models::gallery_image::GalleryImage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub id: i32,
    pub image: String,
    pub url: String,
    pub order_id: i32,
    pub is_cover: bool,
}

impl ImageResponse {
    pub fn new(value: GalleryImage, base: &RequestBaseUrl) -> Self {
        Self {
            id: value.id,
            url: base.url_for(&value.image),
            image: value.image,
            order_id: value.order_id,
            is_cover: value.is_cover,
        }
    }
}

/// Projects a gallery to `(cover_url, images)`.
pub fn project_gallery(
    images: Vec<GalleryImage>,
    base: &RequestBaseUrl,
) -> (Option<String>, Vec<ImageResponse>) {
    let images: Vec<ImageResponse> = images
        .into_iter()
        .map(|img| ImageResponse::new(img, base))
        .collect();
    let cover = images
        .iter()
        .find(|img| img.is_cover)
        .map(|img| img.url.clone());
    (cover, images)
}
