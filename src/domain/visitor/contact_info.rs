//! ContactInfo value object.
//!
//! Contact details submitted by a visitor at conversion time. Constructed
//! once from form input, validated and normalized, then never mutated.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Maximum length for the name field.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for the message field.
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Maximum length for the company field.
pub const MAX_COMPANY_LENGTH: usize = 100;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validated, normalized contact submission.
///
/// # Invariants
///
/// - `email` is non-empty, trimmed, lower-cased, and matches the email pattern
/// - `name` and `company` are at most 100 characters, `message` at most 1000
/// - optional fields are stored trimmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    email: String,
    name: Option<String>,
    message: Option<String>,
    company: Option<String>,
}

impl ContactInfo {
    /// Creates validated contact info from raw form input.
    ///
    /// The email is trimmed and lower-cased before validation and storage;
    /// optional fields are trimmed, with empty strings treated as absent.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if email is missing
    /// - `InvalidFormat` if email does not match the required pattern
    /// - `TooLong` if an optional field exceeds its length bound
    pub fn new(
        email: impl Into<String>,
        name: Option<String>,
        message: Option<String>,
        company: Option<String>,
    ) -> Result<Self, ValidationError> {
        let email = email.into().trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !EMAIL_PATTERN.is_match(&email) {
            return Err(ValidationError::invalid_format(
                "email",
                "expected local@domain.tld",
            ));
        }

        let name = Self::normalize_optional(name);
        let message = Self::normalize_optional(message);
        let company = Self::normalize_optional(company);

        if let Some(name) = &name {
            if name.chars().count() > MAX_NAME_LENGTH {
                return Err(ValidationError::too_long("name", MAX_NAME_LENGTH));
            }
        }
        if let Some(message) = &message {
            if message.chars().count() > MAX_MESSAGE_LENGTH {
                return Err(ValidationError::too_long("message", MAX_MESSAGE_LENGTH));
            }
        }
        if let Some(company) = &company {
            if company.chars().count() > MAX_COMPANY_LENGTH {
                return Err(ValidationError::too_long("company", MAX_COMPANY_LENGTH));
            }
        }

        Ok(Self {
            email,
            name,
            message,
            company,
        })
    }

    /// Returns the normalized email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the visitor's name, if provided.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the free-form message, if provided.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the company name, if provided.
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Returns true if a name was provided.
    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    /// Returns true if a message was provided.
    pub fn has_message(&self) -> bool {
        self.message.is_some()
    }

    /// Returns true if a company was provided.
    pub fn has_company(&self) -> bool {
        self.company.is_some()
    }

    /// Returns the name to greet the contact by.
    ///
    /// Falls back to the local part of the email when no name was provided.
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) => name,
            None => self.email.split('@').next().unwrap_or(&self.email),
        }
    }

    fn normalize_optional(value: Option<String>) -> Option<String> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
