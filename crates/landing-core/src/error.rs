//! Error types for `landing-core`.
//!
//! Content normalization never fails; every missing or malformed field has
//! a fallback. The only user-visible failures in this crate come from lead
//! validation, and their messages are shown to the visitor verbatim.

/// Reasons a lead submission is rejected before it reaches the record store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    /// Full name missing or shorter than the minimum length.
    #[error("Full Name is required (min {min} chars).")]
    FullName { min: usize },

    /// Email missing or not shaped like `local@domain.tld`.
    #[error("Valid Email is required.")]
    Email,

    /// Phone number longer than the form allows.
    #[error("Phone number is too long.")]
    PhoneTooLong { max: usize, actual: usize },
}

impl LeadError {
    /// Name of the form field the error belongs to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::FullName { .. } => "fullName",
            Self::Email => "email",
            Self::PhoneTooLong { .. } => "phone",
        }
    }
}
