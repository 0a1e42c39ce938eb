use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::form::MultipartForm;
use crate::error::Result;
use crate::middleware::base_url::RequestBaseUrl;
use crate::models::partner::Partner;
use crate::utils::validation::{validate_not_blank, validate_status, STATUS_ACTIVE};

/// Text part of the partner multipart form; the logo travels as `image`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PartnerForm {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(custom(function = "validate_status"))]
    pub status: String,
    pub department_type_id: Option<i32>,
}

impl PartnerForm {
    pub fn from_form(form: &MultipartForm) -> Result<Self> {
        Ok(Self {
            name: form.required("name")?,
            status: form
                .owned("status")
                .unwrap_or_else(|| STATUS_ACTIVE.to_string()),
            department_type_id: form.parse("department_type_id")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerResponse {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub status: String,
    pub department_type_id: Option<i32>,
    pub department_type: Option<String>,
    pub created_by: Option<i32>,
    pub update_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub update_at: Option<DateTime<Utc>>,
}

impl PartnerResponse {
    pub fn new(value: Partner, base: &RequestBaseUrl) -> Self {
        Self {
            id: value.id,
            image_url: value.image.as_deref().map(|path| base.url_for(path)),
            name: value.name,
            image: value.image,
            status: value.status,
            department_type_id: value.department_type_id,
            department_type: value.department_type,
            created_by: value.created_by,
            update_by: value.update_by,
            created_at: value.created_at,
            update_at: value.update_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults_status_and_rejects_unknown_status() {
        let form = MultipartForm::from_parts(&[("name", "Acme")], vec![]);
        let partner = PartnerForm::from_form(&form).unwrap();
        assert_eq!(partner.status, "Active");
        assert_eq!(partner.department_type_id, None);
        assert!(partner.validate().is_ok());

        let form = MultipartForm::from_parts(&[("name", "Acme"), ("status", "gone")], vec![]);
        assert!(PartnerForm::from_form(&form).unwrap().validate().is_err());

        let form = MultipartForm::from_parts(&[("status", "Active")], vec![]);
        assert!(PartnerForm::from_form(&form).is_err());
    }
}
