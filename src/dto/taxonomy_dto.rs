use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DepartmentTypePayload {
    #[validate(length(min = 1, max = 150), custom(function = "validate_not_blank"))]
    pub name: String,
    pub can_delete: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobTitlePayload {
    #[validate(length(min = 1, max = 150), custom(function = "validate_not_blank"))]
    pub name: String,
    pub department_type_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TechStackTagPayload {
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,
    pub department_type_id: i32,
}

/// Body for lookups that only carry a name (topics, event categories).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NamePayload {
    #[validate(length(min = 1, max = 150), custom(function = "validate_not_blank"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_fail_validation() {
        let payload = NamePayload { name: "   ".into() };
        assert!(payload.validate().is_err());

        let payload = JobTitlePayload {
            name: "Backend Engineer".into(),
            department_type_id: 1,
        };
        assert!(payload.validate().is_ok());
    }
}
