use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::form::MultipartForm;
use crate::dto::gallery_dto::{project_gallery, ImageResponse};
use crate::error::Result;
use crate::middleware::base_url::RequestBaseUrl;
use crate::models::{event::Event, gallery_image::GalleryImage};
use crate::utils::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventForm {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    pub event_date: NaiveDate,
    pub event_category_id: i32,
}

impl EventForm {
    pub fn from_form(form: &MultipartForm) -> Result<Self> {
        Ok(Self {
            title: form.required("title")?,
            description: form.owned("description"),
            location: form.owned("location"),
            event_date: form.parse_required("event_date")?,
            event_category_id: form.parse_required("event_category_id")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    #[serde(flatten)]
    pub event: Event,
    pub cover_image: Option<String>,
    pub images: Vec<ImageResponse>,
}

impl EventResponse {
    pub fn new(event: Event, images: Vec<GalleryImage>, base: &RequestBaseUrl) -> Self {
        let (cover_image, images) = project_gallery(images, base);
        Self {
            event,
            cover_image,
            images,
        }
    }
}
