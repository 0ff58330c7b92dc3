//! Typed input validation.
//!
//! A closed, known rule vocabulary checked before anything reaches the
//! network: one validator struct per rule instead of runtime-parsed rule
//! strings.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// E.164-ish: optional +, 6 to 15 digits.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{6,15}$").unwrap());

/// Validation error for a single field.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Field name that failed validation.
    pub field: String,

    /// Error message.
    pub message: String,

    /// Validation constraint that failed.
    pub constraint: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
        }
    }

    /// Set the constraint name.
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors for one request payload.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one rule check.
    pub fn check(&mut self, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.errors.push(error);
        }
    }

    /// Whether any rule failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn the collection into a `Result`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

/// Validates that a string is not empty.
pub struct NotEmpty;

impl NotEmpty {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(
                ValidationError::new(field, format!("{field} should not be empty"))
                    .with_constraint("notEmpty"),
            )
        } else {
            Ok(())
        }
    }
}

/// Validates maximum string length.
pub struct MaxLength(pub usize);

impl MaxLength {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if value.len() > self.0 {
            Err(ValidationError::new(
                field,
                format!("{field} must be at most {} characters", self.0),
            )
            .with_constraint("maxLength"))
        } else {
            Ok(())
        }
    }
}

/// Validates phone number format (optional `+`, 6-15 digits).
pub struct PhoneNumber;

impl PhoneNumber {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if PHONE_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{field} must be a valid phone number"))
                    .with_constraint("phoneNumber"),
            )
        }
    }
}

/// Validates latitude range (-90 to 90).
pub struct LatitudeRange;

impl LatitudeRange {
    pub fn validate(value: f64, field: &str) -> Result<(), ValidationError> {
        if (-90.0..=90.0).contains(&value) {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{field} must be between -90 and 90"))
                    .with_constraint("latitudeRange"),
            )
        }
    }
}

/// Validates longitude range (-180 to 180).
pub struct LongitudeRange;

impl LongitudeRange {
    pub fn validate(value: f64, field: &str) -> Result<(), ValidationError> {
        if (-180.0..=180.0).contains(&value) {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{field} must be between -180 and 180"))
                    .with_constraint("longitudeRange"),
            )
        }
    }
}

/// Validates that a monetary amount is not negative.
pub struct NonNegativeAmount;

impl NonNegativeAmount {
    pub fn validate(value: f64, field: &str) -> Result<(), ValidationError> {
        if value >= 0.0 {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{field} must not be negative"))
                    .with_constraint("nonNegative"),
            )
        }
    }
}
