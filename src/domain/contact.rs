//! Contact form submissions from the public site.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::DomainError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\+]?[0-9\s\-\(\)]{10,}$").expect("phone pattern compiles"));

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number.";
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactSubmission {
    /// Check required fields first, then the email and phone shapes.
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("service", &self.service),
            ("message", &self.message),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(DomainError::invalid_field(*field, MISSING_FIELDS_MESSAGE));
        }

        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(DomainError::invalid_field("email", INVALID_EMAIL_MESSAGE));
        }

        if !PHONE_PATTERN.is_match(&self.phone) {
            return Err(DomainError::invalid_field("phone", INVALID_PHONE_MESSAGE));
        }

        Ok(())
    }
}
