use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::admin_user::AdminUser;
use crate::utils::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserPayload {
    #[validate(length(min = 3, max = 100), custom(function = "validate_not_blank"))]
    pub username: String,
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserPayload {
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,
    #[validate(email)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordPayload {
    #[validate(length(min = 1))]
    pub current_password: String,
    #[validate(length(min = 8, max = 128))]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub email: Option<String>,
    pub created_by: Option<i32>,
    pub update_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub update_at: Option<DateTime<Utc>>,
}

impl From<AdminUser> for UserResponse {
    fn from(value: AdminUser) -> Self {
        Self {
            id: value.id,
            username: value.username,
            full_name: value.full_name,
            email: value.email,
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
    fn short_passwords_rejected() {
        let payload = CreateUserPayload {
            username: "editor".into(),
            full_name: "Site Editor".into(),
            email: None,
            password: "short".into(),
        };
        assert!(payload.validate().is_err());
        let payload = CreateUserPayload {
            password: "long-enough-pass".into(),
            ..payload
        };
        assert!(payload.validate().is_ok());
    }
}
