//! Strict-mode validation of list-query parameters.
//!
//! Normalization never fails: negative page numbers clamp, unknown `show`
//! values are kept verbatim and oversized pages are served. Services that
//! prefer rejecting such requests set `FilterConfig::strict`, and the
//! extractor runs [`FilterOption::validate`] before normalizing.
//!
//! ```rust,ignore
//! let option = FilterOption { page_number: -1, ..Default::default() };
//! let errors = option.validate(&FilterConfig::default()).unwrap_err();
//! assert_eq!(errors.errors()[0].field, "pageNumber");
//! ```

use serde::Serialize;
use std::fmt;

use crate::config::FilterConfig;
use crate::models::FilterOption;

/// Validation error with the query parameter name and a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The query parameter that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// `Ok(())` when nothing was collected.
    ///
    /// # Errors
    ///
    /// Returns `self` if at least one error was added.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate that a number is within an optional range
fn validate_range<T: PartialOrd + fmt::Display>(
    field: &str,
    value: T,
    min: Option<T>,
    max: Option<T>,
) -> Result<(), ValidationError> {
    if let Some(min_val) = min {
        if value < min_val {
            return Err(ValidationError::new(
                field,
                format!("Must be at least {min_val}"),
            ));
        }
    }

    if let Some(max_val) = max {
        if value > max_val {
            return Err(ValidationError::new(
                field,
                format!("Must be at most {max_val}"),
            ));
        }
    }

    Ok(())
}

impl FilterOption {
    /// Check the raw parameters against `config`.
    ///
    /// Rejects negative `pageNumber`, `pageSize` outside `0..=max_page_size`
    /// and unrecognized `show` values. Pagination bounds are skipped for
    /// downloads, which ignore them anyway.
    ///
    /// # Errors
    ///
    /// Returns every failed check at once.
    pub fn validate(&self, config: &FilterConfig) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !self.download {
            if let Err(err) = validate_range("pageNumber", self.page_number, Some(0), None) {
                errors.add(err);
            }
            if let Err(err) =
                validate_range("pageSize", self.page_size, Some(0), config.max_page_size)
            {
                errors.add(err);
            }
        }

        if !self.show.is_recognized() {
            errors.add(ValidationError::new(
                "show",
                format!(
                    "Unknown value '{}', expected '', 'deleted' or 'all'",
                    self.show
                ),
            ));
        }

        errors.result()
    }
}
