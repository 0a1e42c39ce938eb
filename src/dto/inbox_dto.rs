use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// Contact-form submission from the public site.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InboxSubmission {
    pub topic_id: i32,
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(email, length(max = 200))]
    pub email: String,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 5000), custom(function = "validate_not_blank"))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_must_be_valid() {
        let mut submission = InboxSubmission {
            topic_id: 1,
            name: "Visitor".into(),
            email: "visitor@example.com".into(),
            phone: None,
            message: "Hello".into(),
        };
        assert!(submission.validate().is_ok());
        submission.email = "not-an-email".into();
        assert!(submission.validate().is_err());
    }
}
