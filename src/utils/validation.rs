use std::borrow::Cow;

use chrono::NaiveDate;
use validator::ValidationError;

pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_INACTIVE: &str = "inActive";

/// Status columns accept exactly `Active` or `inActive`.
pub fn validate_status(value: &str) -> Result<(), ValidationError> {
    if value == STATUS_ACTIVE || value == STATUS_INACTIVE {
        Ok(())
    } else {
        let mut err = ValidationError::new("status");
        err.message = Some(Cow::Owned(format!(
            "status must be '{}' or '{}', got '{}'",
            STATUS_ACTIVE, STATUS_INACTIVE, value
        )));
        Err(err)
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("value must not be blank"));
        Err(err)
    } else {
        Ok(())
    }
}

pub fn validate_date_window(open: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end < open {
        let mut err = ValidationError::new("date_window");
        err.message = Some(Cow::Borrowed("date_end must not be before date_open"));
        return Err(err);
    }
    Ok(())
}

/// Escapes `%`, `_` and `\` so user keywords match literally inside ILIKE.
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_a_closed_set() {
        assert!(validate_status("Active").is_ok());
        assert!(validate_status("inActive").is_ok());
        assert!(validate_status("active").is_err());
        assert!(validate_status("Inactive").is_err());
        assert!(validate_status("").is_err());
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("rust"), "rust");
    }

    #[test]
    fn blank_rejected() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank(" a ").is_ok());
    }
}
