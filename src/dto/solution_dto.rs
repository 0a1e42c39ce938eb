use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::form::MultipartForm;
use crate::dto::gallery_dto::{project_gallery, ImageResponse};
use crate::error::Result;
use crate::middleware::base_url::RequestBaseUrl;
use crate::models::{gallery_image::GalleryImage, solution::Solution};
use crate::utils::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SolutionForm {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub title: String,
    pub description: Option<String>,
    pub department_type_id: i32,
}

impl SolutionForm {
    pub fn from_form(form: &MultipartForm) -> Result<Self> {
        Ok(Self {
            title: form.required("title")?,
            description: form.owned("description"),
            department_type_id: form.parse_required("department_type_id")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionResponse {
    #[serde(flatten)]
    pub solution: Solution,
    pub cover_image: Option<String>,
    pub images: Vec<ImageResponse>,
}

impl SolutionResponse {
    pub fn new(solution: Solution, images: Vec<GalleryImage>, base: &RequestBaseUrl) -> Self {
        let (cover_image, images) = project_gallery(images, base);
        Self {
            solution,
            cover_image,
            images,
        }
    }
}
