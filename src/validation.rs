//! Client-side validation rules, applied before any request is dispatched
//!
//! The same named rules back every form; screens compose them and surface
//! the first failure through the usual error modal.

use chrono::{NaiveDate, Utc};

use crate::error::{ApiError, ApiResult};

/// Non-empty after trimming.
pub fn required(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Structural email check: something before and after a single `@`, and a
/// dot in the domain part. The backend does the authoritative validation.
pub fn email(value: &str) -> ApiResult<()> {
    let value = value.trim();
    let invalid = || ApiError::Validation("Please enter a valid email address".to_string());

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if host.is_empty() || tld.is_empty() || value.contains(char::is_whitespace) {
        return Err(invalid());
    }
    Ok(())
}

pub fn passwords_match(password: &str, confirmation: &str) -> ApiResult<()> {
    if password != confirmation {
        return Err(ApiError::Validation("Passwords do not match".to_string()));
    }
    Ok(())
}

/// Document expiration dates must lie in the future.
pub fn future_date(field: &str, date: NaiveDate) -> ApiResult<()> {
    if date <= Utc::now().date_naive() {
        return Err(ApiError::Validation(format!(
            "{} must be a future date",
            field
        )));
    }
    Ok(())
}

pub fn positive_quantity(quantity: u32) -> ApiResult<()> {
    if quantity == 0 {
        return Err(ApiError::Validation(
            "Quantity must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn required_rejects_whitespace() {
        assert!(required("Street", "  ").is_err());
        assert!(required("Street", "Main St 5").is_ok());
    }

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(email("driver@example.com").is_ok());
        assert!(email("a.b@mail.co.uk").is_ok());
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in ["", "plain", "@example.com", "a@", "a@b", "a b@c.com", "a@b@c.com"] {
            assert!(email(bad).is_err(), "expected {:?} to be rejected", bad);
        }
    }

    #[test]
    fn password_confirmation_must_match() {
        assert!(passwords_match("hunter2", "hunter2").is_ok());
        let err = passwords_match("hunter2", "hunter3").unwrap_err();
        assert_eq!(err.user_message(), "Passwords do not match");
    }

    #[test]
    fn future_date_rejects_today_and_past() {
        let today = Utc::now().date_naive();
        assert!(future_date("Expiration date", today).is_err());
        assert!(future_date("Expiration date", today - Duration::days(1)).is_err());
        assert!(future_date("Expiration date", today + Duration::days(1)).is_ok());
    }

    #[test]
    fn quantity_must_be_positive() {
        assert!(positive_quantity(0).is_err());
        assert!(positive_quantity(1).is_ok());
    }
}
