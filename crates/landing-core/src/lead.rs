//! Lead-capture validation.
//!
//! Submissions come from the landing page form as loose JSON. Every field
//! is trimmed, then checked: a full name of at least two characters, an
//! email shaped like `local@domain.tld`, and an optional phone number no
//! longer than the form allows.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::LeadError;
use crate::raw::lenient_string;

pub const MIN_FULL_NAME_CHARS: usize = 2;
pub const MAX_PHONE_CHARS: usize = 20;

#[allow(clippy::unwrap_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

/// Raw form body. Non-string values are treated as missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
}

/// A validated lead, ready to be stored. Serializes to the record fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub full_name: String,
    pub email: String,
    /// Empty when the visitor left it blank.
    pub phone: String,
}

impl LeadSubmission {
    /// Trim and validate the submission.
    ///
    /// # Errors
    ///
    /// Returns the first [`LeadError`] found, checking full name, then
    /// email, then phone.
    pub fn validate(&self) -> Result<Lead, LeadError> {
        let full_name = trimmed(self.full_name.as_deref());
        let email = trimmed(self.email.as_deref());
        let phone = trimmed(self.phone.as_deref());

        if full_name.chars().count() < MIN_FULL_NAME_CHARS {
            return Err(LeadError::FullName {
                min: MIN_FULL_NAME_CHARS,
            });
        }
        if !is_valid_email(&email) {
            return Err(LeadError::Email);
        }
        let phone_chars = phone.chars().count();
        if phone_chars > MAX_PHONE_CHARS {
            return Err(LeadError::PhoneTooLong {
                max: MAX_PHONE_CHARS,
                actual: phone_chars,
            });
        }

        Ok(Lead {
            full_name,
            email,
            phone,
        })
    }
}

/// Basic shape check, not full RFC 5322.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn submission(full_name: &str, email: &str, phone: Option<&str>) -> LeadSubmission {
        LeadSubmission {
            full_name: Some(full_name.to_owned()),
            email: Some(email.to_owned()),
            phone: phone.map(str::to_owned),
        }
    }

    #[test]
    fn valid_submission_is_trimmed() {
        let lead = submission("  Jane Doe ", " jane@example.com ", Some(" +353 1 234 5678 "))
            .validate()
            .unwrap();
        assert_eq!(lead.full_name, "Jane Doe");
        assert_eq!(lead.email, "jane@example.com");
        assert_eq!(lead.phone, "+353 1 234 5678");
    }

    #[test]
    fn missing_phone_becomes_empty() {
        let lead = submission("Jo", "jo@x.io", None).validate().unwrap();
        assert_eq!(lead.phone, "");
    }

    #[test]
    fn short_name_is_rejected() {
        let err = submission(" J ", "j@x.io", None).validate().unwrap_err();
        assert_eq!(err, LeadError::FullName { min: 2 });
        assert_eq!(err.to_string(), "Full Name is required (min 2 chars).");
        assert_eq!(err.field(), "fullName");
    }

    #[test]
    fn name_is_checked_before_email() {
        let err = LeadSubmission::default().validate().unwrap_err();
        assert!(matches!(err, LeadError::FullName { .. }));
    }

    #[test]
    fn bad_emails_are_rejected() {
        for email in ["", "jane", "jane@example", "@example.com", "jane@.com", "ja ne@x.io"] {
            let err = submission("Jane", email, None).validate().unwrap_err();
            assert_eq!(err, LeadError::Email, "{email:?} should be rejected");
            assert_eq!(err.to_string(), "Valid Email is required.");
        }
    }

    #[test]
    fn plausible_emails_are_accepted() {
        for email in ["a@b.c", "first.last+tag@sub.example.co.uk"] {
            assert!(is_valid_email(email), "{email:?} should be accepted");
        }
    }

    #[test]
    fn long_phone_is_rejected() {
        let err = submission("Jane", "jane@x.io", Some("+1 555 555 5555 ext 12"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, LeadError::PhoneTooLong { max: 20, .. }));
        assert_eq!(err.field(), "phone");
    }

    #[test]
    fn non_string_fields_decode_as_missing() {
        let sub: LeadSubmission =
            serde_json::from_str(r#"{ "fullName": 12, "email": null, "extra": true }"#).unwrap();
        assert_eq!(sub.full_name, None);
        assert_eq!(sub.email, None);
    }

    #[test]
    fn lead_serializes_as_record_fields() {
        let lead = submission("Jane", "jane@x.io", None).validate().unwrap();
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "fullName": "Jane", "email": "jane@x.io", "phone": "" })
        );
    }
}
