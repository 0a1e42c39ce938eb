use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompanyProfilePayload {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub name: String,
    pub address: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    pub about: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(url)]
    pub facebook: Option<String>,
    #[validate(url)]
    pub instagram: Option<String>,
    #[validate(url)]
    pub linkedin: Option<String>,
    #[validate(url)]
    pub youtube: Option<String>,
}
